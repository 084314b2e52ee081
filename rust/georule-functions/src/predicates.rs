// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use georule_expr::{
    builtin::{BuiltIn, SimpleBuiltInKernel},
    documentation::Documentation,
    literal::LiteralKind,
    matchers::ArgMatcher,
};

/// st_contains() built-in stub
pub fn st_contains_builtin() -> BuiltIn {
    predicate_stub("st_contains", "contains")
}

/// st_coveredBy() built-in stub
pub fn st_covered_by_builtin() -> BuiltIn {
    predicate_stub("st_coveredBy", "is covered by")
}

/// st_covers() built-in stub
pub fn st_covers_builtin() -> BuiltIn {
    predicate_stub("st_covers", "covers")
}

/// st_crosses() built-in stub
pub fn st_crosses_builtin() -> BuiltIn {
    predicate_stub("st_crosses", "crosses")
}

/// st_disjoint() built-in stub
pub fn st_disjoint_builtin() -> BuiltIn {
    predicate_stub("st_disjoint", "is disjoint from")
}

/// st_equals() built-in stub
pub fn st_equals_builtin() -> BuiltIn {
    predicate_stub("st_equals", "is topologically equal to")
}

/// st_intersects() built-in stub
pub fn st_intersects_builtin() -> BuiltIn {
    predicate_stub("st_intersects", "intersects")
}

/// st_overlaps() built-in stub
pub fn st_overlaps_builtin() -> BuiltIn {
    predicate_stub("st_overlaps", "overlaps")
}

/// st_touches() built-in stub
pub fn st_touches_builtin() -> BuiltIn {
    predicate_stub("st_touches", "touches")
}

/// st_within() built-in stub
pub fn st_within_builtin() -> BuiltIn {
    predicate_stub("st_within", "is fully contained by")
}

/// st_equalsExact() built-in stub
///
/// The optional third argument is the coordinate tolerance. When it is
/// omitted, implementations use the library's configured default.
pub fn st_equals_exact_builtin() -> BuiltIn {
    BuiltIn::new_stub(
        "st_equalsExact",
        ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_optional(ArgMatcher::is_numeric()),
            ],
            LiteralKind::Boolean,
        ),
        Some(
            Documentation::builder(
                "Return true if geomA and geomB have the same structure and their coordinates \
                 are equal within tolerance",
                "st_equalsExact(geomA, geomB[, tolerance])",
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_argument("tolerance", "double: Maximum coordinate distance (optional)")
            .with_example("st_equalsExact('POINT (0 0)', 'POINT (0 0.1)', 0.5)")
            .build(),
        ),
    )
}

/// st_relate() built-in stub
///
/// With two arguments this computes the DE-9IM matrix of the geometries as
/// a string; with a third pattern argument it returns whether the matrix
/// matches the pattern.
pub fn st_relate_builtin() -> BuiltIn {
    let mut builtin = BuiltIn::new_stub(
        "st_relate",
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::String,
        ),
        Some(
            Documentation::builder(
                "Return the DE-9IM intersection matrix of geomA and geomB, or whether it \
                 matches pattern",
                "st_relate(geomA, geomB[, pattern])",
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_argument(
                "pattern",
                "string: DE-9IM pattern of T, F, *, 0, 1 and 2 (optional)",
            )
            .with_example("st_relate('POLYGON ((0 0, 1 0, 0 1, 0 0))', 'POINT (0.25 0.25)')")
            .with_example(
                "st_relate('POLYGON ((0 0, 1 0, 0 1, 0 0))', 'POINT (0.25 0.25)', 'T*****FF*')",
            )
            .build(),
        ),
    );

    builtin.add_kernel(SimpleBuiltInKernel::new_stub_ref(
        "st_relate",
        ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_string(),
            ],
            LiteralKind::Boolean,
        ),
    ));
    builtin
}

pub fn predicate_stub(name: &str, action: &str) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Boolean,
        ),
        Some(predicate_doc(name, action)),
    )
}

fn predicate_doc(name: &str, action: &str) -> Documentation {
    Documentation::builder(
        format!("Return true if geomA {action} geomB"),
        format!("{name}(geomA, geomB)"),
    )
    .with_geometry_argument("geomA")
    .with_geometry_argument("geomB")
    .with_example(format!(
        "{name}('POLYGON ((0 0, 1 0, 0 1, 0 0))', 'POINT (0.25 0.25)')"
    ))
    .build()
}

#[cfg(test)]
mod tests {
    use georule_testing::testers::BuiltInTester;

    use super::*;

    #[test]
    fn builtin_metadata() {
        let builtin = st_intersects_builtin();
        assert_eq!(builtin.name(), "st_intersects");
        assert_eq!(
            builtin.documentation().unwrap().description,
            "Return true if geomA intersects geomB"
        );
        assert_eq!(builtin.signatures(), vec!["(geometry, geometry) -> boolean"]);
    }

    #[test]
    fn stubs_not_implemented() {
        let tester = BuiltInTester::new(st_covered_by_builtin());
        tester.assert_return_type(2, LiteralKind::Boolean);
        let err = tester
            .invoke_wkt_wkt("POINT (0 0)", "POINT (0 0)")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Implementation for st_coveredBy() with 2 argument(s) was not registered"
        );

        // Arity is checked before the stub is reached
        let err = tester.invoke_wkt("POINT (0 0)").unwrap_err();
        assert_eq!(err.kind(), "ArityError");
    }

    #[test]
    fn equals_exact_signature() {
        let builtin = st_equals_exact_builtin();
        assert_eq!(
            builtin.signatures(),
            vec!["(geometry, geometry[, double]) -> boolean"]
        );
    }

    #[test]
    fn relate_signatures() {
        let tester = BuiltInTester::new(st_relate_builtin());
        tester.assert_return_type(2, LiteralKind::String);
        tester.assert_return_type(3, LiteralKind::Boolean);
        assert_eq!(
            tester.builtin().signatures(),
            vec![
                "(geometry, geometry, string) -> boolean",
                "(geometry, geometry) -> string"
            ]
        );
    }
}
