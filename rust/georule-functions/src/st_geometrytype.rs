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
use std::sync::Arc;

use georule_expr::{
    builtin::{BuiltIn, SimpleBuiltInKernel},
    documentation::Documentation,
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};

/// Type tag built-ins and the geometry kind each one tests for
///
/// The curve, surface and TIN kinds are part of the OGC type hierarchy but
/// are never produced by the geometry model, so their built-ins always
/// return false.
pub const TYPE_TAGS: [(&str, &str); 16] = [
    ("st_isPoint", "POINT"),
    ("st_isLineString", "LINESTRING"),
    ("st_isPolygon", "POLYGON"),
    ("st_isMultiPoint", "MULTIPOINT"),
    ("st_isMultiLineString", "MULTILINESTRING"),
    ("st_isMultiPolygon", "MULTIPOLYGON"),
    ("st_isGeometryCollection", "GEOMETRYCOLLECTION"),
    ("st_isCircularString", "CIRCULARSTRING"),
    ("st_isCompoundCurve", "COMPOUNDCURVE"),
    ("st_isCurve", "CURVE"),
    ("st_isMultiCurve", "MULTICURVE"),
    ("st_isMultiSurface", "MULTISURFACE"),
    ("st_isSurface", "SURFACE"),
    ("st_isPolyhedralSurface", "POLYHEDRALSURFACE"),
    ("st_isTin", "TIN"),
    ("st_isTriangle", "TRIANGLE"),
];

/// All type tag built-ins
pub fn type_tag_builtins() -> Vec<BuiltIn> {
    TYPE_TAGS
        .iter()
        .map(|(name, tag)| type_tag_builtin(name, tag))
        .collect()
}

/// A built-in returning true if the kind of its argument is `tag`
///
/// The comparison is case-insensitive.
pub fn type_tag_builtin(name: &str, tag: &'static str) -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Boolean(geom.kind().keyword().eq_ignore_ascii_case(tag)))
        }),
    );

    BuiltIn::new(
        name,
        vec![kernel],
        Some(
            Documentation::builder(
                format!("Return true if the geometry is a {tag}"),
                format!("{name}(geom)"),
            )
            .with_geometry_argument("geom")
            .with_example(format!("{name}('POINT (0 1)')"))
            .build(),
        ),
    )
}

pub fn st_geometry_type_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::String),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            Ok(Literal::from(geom.geometry_type()))
        }),
    );

    BuiltIn::new(
        "st_geometryType",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return the OGC type name of the geometry",
                "st_geometryType(geom)",
            )
            .with_geometry_argument("geom")
            .with_example("st_geometryType('LINESTRING (0 0, 1 1)')")
            .build(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use georule_testing::{fixtures::ALL_KINDS, testers::BuiltInTester};
    use rstest::rstest;

    use super::*;

    #[test]
    fn builtin_metadata() {
        let builtins = type_tag_builtins();
        assert_eq!(builtins.len(), 16);
        assert_eq!(builtins[0].name(), "st_isPoint");
        assert_eq!(
            builtins[0].documentation().unwrap().description,
            "Return true if the geometry is a POINT"
        );
    }

    #[rstest]
    #[case("st_isPoint", "POINT", "POINT (0 1)", true)]
    #[case("st_isPoint", "POINT", "POINT EMPTY", true)]
    #[case("st_isPoint", "POINT", "MULTIPOINT ((0 1))", false)]
    #[case("st_isLineString", "LINESTRING", "LINESTRING (0 0, 1 1)", true)]
    #[case("st_isLineString", "LINESTRING", "MULTILINESTRING ((0 0, 1 1))", false)]
    #[case("st_isPolygon", "POLYGON", "POLYGON ((0 0, 1 0, 0 1, 0 0))", true)]
    #[case("st_isMultiPoint", "MULTIPOINT", "MULTIPOINT EMPTY", true)]
    #[case("st_isMultiLineString", "MULTILINESTRING", "MULTILINESTRING ((0 0, 1 1))", true)]
    #[case("st_isMultiPolygon", "MULTIPOLYGON", "POLYGON ((0 0, 1 0, 0 1, 0 0))", false)]
    #[case("st_isGeometryCollection", "GEOMETRYCOLLECTION", "GEOMETRYCOLLECTION EMPTY", true)]
    #[case("st_isGeometryCollection", "GEOMETRYCOLLECTION", "MULTIPOINT ((0 1))", false)]
    #[case("st_isPoint", "point", "POINT (0 1)", true)]
    fn type_tags(
        #[case] name: &str,
        #[case] tag: &'static str,
        #[case] wkt: &str,
        #[case] expected: bool,
    ) {
        let tester = BuiltInTester::new(type_tag_builtin(name, tag));
        tester.assert_return_type(1, LiteralKind::Boolean);
        assert_eq!(tester.predicate_wkt(wkt), expected);
    }

    #[test]
    fn unsupported_kinds_are_never_matched() {
        for (name, tag) in &TYPE_TAGS[7..] {
            let tester = BuiltInTester::new(type_tag_builtin(name, tag));
            for wkt in ALL_KINDS {
                assert!(!tester.predicate_wkt(wkt), "{name}({wkt})");
            }
        }
    }

    #[rstest]
    #[case("POINT (0 1)", "Point")]
    #[case("LINESTRING EMPTY", "LineString")]
    #[case("POLYGON ((0 0, 1 0, 0 1, 0 0))", "Polygon")]
    #[case("MULTIPOINT ((0 1))", "MultiPoint")]
    #[case("MULTILINESTRING EMPTY", "MultiLineString")]
    #[case("MULTIPOLYGON EMPTY", "MultiPolygon")]
    #[case("GEOMETRYCOLLECTION (POINT (0 1))", "GeometryCollection")]
    fn geometry_type(#[case] wkt: &str, #[case] expected: &str) {
        let tester = BuiltInTester::new(st_geometry_type_builtin());
        tester.assert_return_type(1, LiteralKind::String);
        let result = tester.invoke_wkt(wkt).unwrap();
        tester.assert_result_equals(result, expected);
    }
}
