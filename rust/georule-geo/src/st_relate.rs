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

use georule_common::Result;
use georule_expr::{
    args::BuiltInArgs,
    builtin::{BuiltInKernel, KernelRef},
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};
use georule_geo_alg::relate;

/// st_relate() implementation returning the DE-9IM matrix as a string
pub fn st_relate_matrix_impl() -> KernelRef {
    Arc::new(STRelate {
        matcher: ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::String,
        ),
    })
}

/// st_relate() implementation matching the DE-9IM matrix against a pattern
pub fn st_relate_pattern_impl() -> KernelRef {
    Arc::new(STRelate {
        matcher: ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_string(),
            ],
            LiteralKind::Boolean,
        ),
    })
}

#[derive(Debug)]
struct STRelate {
    matcher: ArgMatcher,
}

impl BuiltInKernel for STRelate {
    fn arg_matcher(&self) -> &ArgMatcher {
        &self.matcher
    }

    fn invoke(&self, args: &BuiltInArgs) -> Result<Literal> {
        let geom_a = args.geometry(0)?;
        let geom_b = args.geometry(1)?;
        let matrix = relate(&geom_a, &geom_b);

        if args.len() > 2 {
            let pattern = args.string(2)?;
            Ok(Literal::Boolean(matrix.matches(pattern)?))
        } else {
            Ok(Literal::String(matrix.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use georule_expr::builtin::BuiltIn;
    use georule_functions::register::stubs::st_relate_builtin;
    use georule_testing::{fixtures::*, testers::BuiltInTester};
    use rstest::rstest;

    use super::*;

    fn relate_tester() -> BuiltInTester {
        let mut builtin: BuiltIn = st_relate_builtin();
        builtin.add_kernel(st_relate_matrix_impl());
        builtin.add_kernel(st_relate_pattern_impl());
        BuiltInTester::new(builtin)
    }

    #[rstest]
    #[case(SQUARE, POINT_IN_SQUARE, "0F2FF1FF2")]
    #[case(POINT_IN_SQUARE, SQUARE, "0FFFFF212")]
    #[case(SQUARE, SHIFTED_SQUARE, "212101212")]
    #[case(SQUARE, ADJACENT_SQUARE, "FF2F11212")]
    #[case(SQUARE, POINT_OUTSIDE_SQUARE, "FF2FF10F2")]
    fn matrix(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        let tester = relate_tester();
        tester.assert_return_type(2, LiteralKind::String);
        let result = tester.invoke_wkt_wkt(a, b).unwrap();
        tester.assert_result_equals(result, expected);
    }

    #[rstest]
    #[case(SQUARE, POINT_IN_SQUARE, "T*****FF*", true)]
    #[case(SQUARE, POINT_IN_SQUARE, "t*****ff*", true)]
    #[case(SQUARE, POINT_OUTSIDE_SQUARE, "T*****FF*", false)]
    #[case(SQUARE, ADJACENT_SQUARE, "F***1****", true)]
    #[case(SQUARE, ADJACENT_SQUARE, "F***0****", false)]
    fn matrix_matches_pattern(
        #[case] a: &str,
        #[case] b: &str,
        #[case] pattern: &str,
        #[case] expected: bool,
    ) {
        let tester = relate_tester();
        tester.assert_return_type(3, LiteralKind::Boolean);
        let result = tester.invoke_wkt_wkt_scalar(a, b, pattern).unwrap();
        tester.assert_result_equals(result, expected);
    }

    #[rstest]
    fn invalid_pattern(#[values("T*****FF", "T*****FFX", "")] pattern: &str) {
        let tester = relate_tester();
        let err = tester
            .invoke_wkt_wkt_scalar(SQUARE, POINT_IN_SQUARE, pattern)
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidArgumentError");
    }

    #[test]
    fn pattern_must_be_a_string() {
        let tester = relate_tester();
        let err = tester
            .invoke_wkt_wkt_scalar(SQUARE, POINT_IN_SQUARE, 1)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "st_relate() argument 2 cannot be converted to string: Integer(1)"
        );
    }
}
