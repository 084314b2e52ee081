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
    builtin::{BuiltIn, BuiltInKernel},
    documentation::Documentation,
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};

pub fn st_isempty_builtin() -> BuiltIn {
    BuiltIn::new(
        "st_isEmpty",
        vec![Arc::new(STIsEmpty::new())],
        Some(st_is_empty_doc()),
    )
}

fn st_is_empty_doc() -> Documentation {
    Documentation::builder("Return true if the geometry is empty", "st_isEmpty(geom)")
        .with_geometry_argument("geom")
        .with_example("st_isEmpty('POLYGON EMPTY')")
        .build()
}

#[derive(Debug)]
struct STIsEmpty {
    matcher: ArgMatcher,
}

impl STIsEmpty {
    fn new() -> Self {
        Self {
            matcher: ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
        }
    }
}

impl BuiltInKernel for STIsEmpty {
    fn arg_matcher(&self) -> &ArgMatcher {
        &self.matcher
    }

    fn invoke(&self, args: &BuiltInArgs) -> Result<Literal> {
        let geom = args.geometry(0)?;
        Ok(Literal::Boolean(geom.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use georule_testing::{fixtures::ALL_KINDS, testers::BuiltInTester};

    use super::*;

    #[test]
    fn builtin_metadata() {
        let builtin = st_isempty_builtin();
        assert_eq!(builtin.name(), "st_isEmpty");
        assert!(builtin.documentation().is_some());
    }

    #[test]
    fn builtin() {
        let tester = BuiltInTester::new(st_isempty_builtin());
        tester.assert_return_type(1, LiteralKind::Boolean);

        let result = tester.invoke_wkt("POINT EMPTY").unwrap();
        tester.assert_result_equals(result, true);

        // Fixtures alternate between a non-empty and an empty sample of each kind
        let actual = ALL_KINDS
            .iter()
            .map(|wkt| tester.predicate_wkt(wkt))
            .collect::<Vec<_>>();
        let expected = (0..ALL_KINDS.len()).map(|i| i % 2 == 1).collect::<Vec<_>>();
        assert_eq!(actual, expected);

        // Collections of empties are empty
        assert!(tester.predicate_wkt("GEOMETRYCOLLECTION (POINT EMPTY, LINESTRING EMPTY)"));

        let err = tester.invoke_wkt("POLYGON ((0 0, 1 0, 0 1))").unwrap_err();
        assert_eq!(err.kind(), "ParseError");
        assert!(err.to_string().contains("POLYGON ((0 0, 1 0, 0 1))"));
    }
}
