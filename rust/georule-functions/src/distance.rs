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

use crate::comparison::Comparison;

/// st_isWithinDistance() built-in stub
///
/// Also published as st_dWithin().
pub fn st_is_within_distance_builtin() -> BuiltIn {
    let name = "st_isWithinDistance";
    BuiltIn::new_with_aliases(
        name,
        vec![SimpleBuiltInKernel::new_stub_ref(
            name,
            pairwise_comparison_matcher(),
        )],
        Some(
            Documentation::builder(
                "Return true if the minimum distance between geomA and geomB is at most distance",
                format!("{name}(geomA, geomB, distance)"),
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_argument("distance", "double: Maximum distance")
            .with_example(format!("{name}('POINT (0 0)', 'POINT (3 4)', 5)"))
            .build(),
        ),
        vec!["st_dWithin".to_string()],
    )
}

/// st_hasDistanceBiggerThan() built-in stub
pub fn st_has_distance_bigger_than_builtin() -> BuiltIn {
    distance_comparison_stub("st_hasDistanceBiggerThan", Comparison::Greater)
}

/// st_hasDistanceEqualTo() built-in stub
pub fn st_has_distance_equal_to_builtin() -> BuiltIn {
    distance_comparison_stub("st_hasDistanceEqualTo", Comparison::Equal)
}

/// st_hasDistanceSmallerThan() built-in stub
pub fn st_has_distance_smaller_than_builtin() -> BuiltIn {
    distance_comparison_stub("st_hasDistanceSmallerThan", Comparison::Smaller)
}

/// st_hasHausdorffDistanceGreaterThan() built-in stub
pub fn st_has_hausdorff_distance_greater_than_builtin() -> BuiltIn {
    hausdorff_comparison_stub("st_hasHausdorffDistanceGreaterThan", Comparison::Greater)
}

/// st_hasHausdorffDistanceEqualTo() built-in stub
pub fn st_has_hausdorff_distance_equal_to_builtin() -> BuiltIn {
    hausdorff_comparison_stub("st_hasHausdorffDistanceEqualTo", Comparison::Equal)
}

/// st_hasHausdorffDistanceSmallerThan() built-in stub
pub fn st_has_hausdorff_distance_smaller_than_builtin() -> BuiltIn {
    hausdorff_comparison_stub("st_hasHausdorffDistanceSmallerThan", Comparison::Smaller)
}

/// st_hasAreaSimilarityMeasureBiggerThan() built-in stub
pub fn st_has_area_similarity_measure_bigger_than_builtin() -> BuiltIn {
    similarity_comparison_stub("st_hasAreaSimilarityMeasureBiggerThan", Comparison::Greater)
}

/// st_hasAreaSimilarityMeasureEqualTo() built-in stub
pub fn st_has_area_similarity_measure_equal_to_builtin() -> BuiltIn {
    similarity_comparison_stub("st_hasAreaSimilarityMeasureEqualTo", Comparison::Equal)
}

/// st_hasAreaSimilarityMeasureSmallerThan() built-in stub
pub fn st_has_area_similarity_measure_smaller_than_builtin() -> BuiltIn {
    similarity_comparison_stub("st_hasAreaSimilarityMeasureSmallerThan", Comparison::Smaller)
}

/// st_distance() built-in stub
pub fn st_distance_builtin() -> BuiltIn {
    pairwise_measure_stub(
        "st_distance",
        "Return the minimum Euclidean distance between geomA and geomB",
        "st_distance('POINT (0 0)', 'POINT (3 4)')",
    )
}

/// st_hausdorffDistance() built-in stub
pub fn st_hausdorff_distance_builtin() -> BuiltIn {
    pairwise_measure_stub(
        "st_hausdorffDistance",
        "Return the discrete Hausdorff distance between geomA and geomB",
        "st_hausdorffDistance('LINESTRING (0 0, 2 0)', 'LINESTRING (0 1, 2 1)')",
    )
}

/// st_areaSimilarity() built-in stub
pub fn st_area_similarity_builtin() -> BuiltIn {
    pairwise_measure_stub(
        "st_areaSimilarity",
        "Return the area of the intersection of geomA and geomB divided by the area \
         of their union",
        "st_areaSimilarity('POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))', \
         'POLYGON ((1 0, 3 0, 3 2, 1 2, 1 0))')",
    )
}

fn distance_comparison_stub(name: &str, comparison: Comparison) -> BuiltIn {
    pairwise_comparison_stub(name, "minimum distance", comparison)
}

fn hausdorff_comparison_stub(name: &str, comparison: Comparison) -> BuiltIn {
    pairwise_comparison_stub(name, "discrete Hausdorff distance", comparison)
}

fn similarity_comparison_stub(name: &str, comparison: Comparison) -> BuiltIn {
    pairwise_comparison_stub(name, "area similarity measure", comparison)
}

fn pairwise_comparison_matcher() -> ArgMatcher {
    ArgMatcher::new(
        vec![
            ArgMatcher::is_geometry(),
            ArgMatcher::is_geometry(),
            ArgMatcher::is_numeric(),
        ],
        LiteralKind::Boolean,
    )
}

fn pairwise_comparison_stub(name: &str, measure: &str, comparison: Comparison) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        pairwise_comparison_matcher(),
        Some(
            Documentation::builder(
                format!("Return true if the {measure} between geomA and geomB is {comparison} value"),
                format!("{name}(geomA, geomB, value)"),
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_argument("value", "double: Value to compare against")
            .with_example(format!("{name}('POINT (0 0)', 'POINT (3 4)', 5)"))
            .build(),
        ),
    )
}

fn pairwise_measure_stub(name: &str, description: &str, example: &str) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Double,
        ),
        Some(
            Documentation::builder(description, format!("{name}(geomA, geomB)"))
                .with_geometry_argument("geomA")
                .with_geometry_argument("geomB")
                .with_example(example)
                .build(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use georule_testing::testers::BuiltInTester;
    use rstest::rstest;

    use super::*;

    #[test]
    fn builtin_metadata() {
        let builtin = st_has_hausdorff_distance_smaller_than_builtin();
        assert_eq!(builtin.name(), "st_hasHausdorffDistanceSmallerThan");
        assert_eq!(
            builtin.documentation().unwrap().description,
            "Return true if the discrete Hausdorff distance between geomA and geomB is \
             smaller than value"
        );

        let builtin = st_is_within_distance_builtin();
        assert_eq!(builtin.aliases(), &["st_dWithin".to_string()]);
    }

    #[rstest]
    fn comparison_signatures(
        #[values(
            st_is_within_distance_builtin(),
            st_has_distance_bigger_than_builtin(),
            st_has_distance_equal_to_builtin(),
            st_has_distance_smaller_than_builtin(),
            st_has_hausdorff_distance_greater_than_builtin(),
            st_has_hausdorff_distance_equal_to_builtin(),
            st_has_hausdorff_distance_smaller_than_builtin(),
            st_has_area_similarity_measure_bigger_than_builtin(),
            st_has_area_similarity_measure_equal_to_builtin(),
            st_has_area_similarity_measure_smaller_than_builtin()
        )]
        builtin: BuiltIn,
    ) {
        assert_eq!(
            builtin.signatures(),
            vec!["(geometry, geometry, double) -> boolean"]
        );
        assert!(builtin.documentation().is_some());
    }

    #[rstest]
    fn measure_signatures(
        #[values(
            st_distance_builtin(),
            st_hausdorff_distance_builtin(),
            st_area_similarity_builtin()
        )]
        builtin: BuiltIn,
    ) {
        let tester = BuiltInTester::new(builtin);
        tester.assert_return_type(2, LiteralKind::Double);
        let err = tester
            .invoke_wkt_wkt("POINT (0 0)", "POINT (0 0)")
            .unwrap_err();
        assert_eq!(err.kind(), "NotImplementedError");
    }

    #[test]
    fn distance_argument_conversion() {
        let tester = BuiltInTester::new(st_has_distance_bigger_than_builtin());
        let err = tester
            .invoke_wkt_wkt_scalar("POINT (0 0)", "POINT (0 0)", true)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "st_hasDistanceBiggerThan() argument 2 cannot be converted to double: Boolean(true)"
        );
    }
}
