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
    builtin::{KernelRef, SimpleBuiltInKernel},
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};
use georule_functions::comparison::Comparison;
use georule_geo_alg::{distance, is_within_distance};

use crate::kernels::{pairwise_comparison_kernel, pairwise_measure_kernel};

/// st_distance() implementation
pub fn st_distance_impl() -> KernelRef {
    pairwise_measure_kernel(distance)
}

/// st_isWithinDistance() implementation
///
/// Unlike the comparison built-ins, this rejects far apart geometries using
/// their envelopes and stops searching as soon as a close enough pair of
/// components is found.
pub fn st_is_within_distance_impl() -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_numeric(),
            ],
            LiteralKind::Boolean,
        ),
        Arc::new(|args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            let max_distance = args.double(2)?;
            Ok(Literal::Boolean(is_within_distance(
                &geom_a,
                &geom_b,
                max_distance,
            )))
        }),
    )
}

/// st_hasDistanceBiggerThan|EqualTo|SmallerThan() implementation
pub fn st_has_distance_impl(comparison: Comparison) -> KernelRef {
    pairwise_comparison_kernel(distance, comparison)
}

#[cfg(test)]
mod tests {
    use georule_expr::builtin::BuiltIn;
    use georule_functions::register::stubs::*;
    use georule_testing::{fixtures::*, testers::BuiltInTester};
    use rstest::rstest;

    use super::*;

    fn tester(mut builtin: BuiltIn, kernel: KernelRef) -> BuiltInTester {
        builtin.add_kernel(kernel);
        BuiltInTester::new(builtin)
    }

    #[rstest]
    #[case("POINT (0 0)", "POINT (3 4)", 5.0)]
    #[case(SQUARE, POINT_IN_SQUARE, 0.0)]
    #[case(SQUARE, POINT_OUTSIDE_SQUARE, 200.0_f64.sqrt())]
    #[case(SQUARE, "LINESTRING (12 0, 12 10)", 2.0)]
    #[case(SQUARE, ADJACENT_SQUARE, 0.0)]
    #[case(SQUARE_WITH_HOLE, POINT_IN_SQUARE, 3.0)]
    #[case("POINT (0 0)", "POINT EMPTY", 0.0)]
    fn distance(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        let tester = tester(st_distance_builtin(), st_distance_impl());
        tester.assert_return_type(2, LiteralKind::Double);

        let result = tester.invoke_wkt_wkt(a, b).unwrap();
        tester.assert_result_equals(result, expected);
        let result = tester.invoke_wkt_wkt(b, a).unwrap();
        tester.assert_result_equals(result, expected);
    }

    #[rstest]
    #[case("POINT (0 0)", "POINT (3 4)", 5.0, true)]
    #[case("POINT (0 0)", "POINT (3 4)", 4.99, false)]
    #[case(SQUARE, POINT_OUTSIDE_SQUARE, 15.0, true)]
    #[case(SQUARE, POINT_OUTSIDE_SQUARE, 14.0, false)]
    #[case(SQUARE, POINT_IN_SQUARE, 0.0, true)]
    #[case("POINT (0 0)", "POINT EMPTY", 100.0, false)]
    fn is_within_distance(
        #[case] a: &str,
        #[case] b: &str,
        #[case] max_distance: f64,
        #[case] expected: bool,
    ) {
        let tester = tester(st_is_within_distance_builtin(), st_is_within_distance_impl());
        let result = tester.invoke_wkt_wkt_scalar(a, b, max_distance).unwrap();
        tester.assert_result_equals(result, expected);
    }

    #[rstest]
    #[case(4.0, true, false, false)]
    #[case(5.0, false, true, false)]
    #[case(6.0, false, false, true)]
    fn distance_comparisons(
        #[case] value: f64,
        #[case] bigger: bool,
        #[case] equal: bool,
        #[case] smaller: bool,
    ) {
        let (a, b) = ("POINT (0 0)", "POINT (3 4)");

        let bigger_tester = tester(
            st_has_distance_bigger_than_builtin(),
            st_has_distance_impl(Comparison::Greater),
        );
        let equal_tester = tester(
            st_has_distance_equal_to_builtin(),
            st_has_distance_impl(Comparison::Equal),
        );
        let smaller_tester = tester(
            st_has_distance_smaller_than_builtin(),
            st_has_distance_impl(Comparison::Smaller),
        );

        let result = bigger_tester.invoke_wkt_wkt_scalar(a, b, value).unwrap();
        bigger_tester.assert_result_equals(result, bigger);
        let result = equal_tester.invoke_wkt_wkt_scalar(a, b, value).unwrap();
        equal_tester.assert_result_equals(result, equal);
        let result = smaller_tester.invoke_wkt_wkt_scalar(a, b, value).unwrap();
        smaller_tester.assert_result_equals(result, smaller);
    }

    #[test]
    fn distance_argument() {
        let tester = tester(
            st_has_distance_equal_to_builtin(),
            st_has_distance_impl(Comparison::Equal),
        );

        // Integers and numeric strings are converted
        let result = tester
            .invoke_wkt_wkt_scalar("POINT (0 0)", "POINT (3 4)", 5)
            .unwrap();
        tester.assert_result_equals(result, true);
        let result = tester
            .invoke_wkt_wkt_scalar("POINT (0 0)", "POINT (3 4)", " 5.0 ")
            .unwrap();
        tester.assert_result_equals(result, true);

        let err = tester
            .invoke_wkt_wkt_scalar("POINT (0 0)", "POINT (3 4)", "five")
            .unwrap_err();
        assert_eq!(err.kind(), "TypeConversionError");
    }
}
