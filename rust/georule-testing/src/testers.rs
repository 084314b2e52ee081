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
use georule_common::Result;
use georule_expr::{
    builtin::BuiltIn,
    literal::{Literal, LiteralKind},
};

use crate::{compare::assert_literal_equal, create::create_geometry};

/// Low-level tester for built-ins
///
/// This struct provides a means by which to run a simple check of a built-in
/// by simulating how a rule engine would call it: literal arguments go in,
/// a literal result (or a single error) comes out.
///
/// This is not a replacement for testing through a library context but
/// provides a useful mechanism to ensure all the pieces of a built-in are
/// plugged in.
pub struct BuiltInTester {
    builtin: BuiltIn,
}

impl BuiltInTester {
    /// Create a new tester
    pub fn new(builtin: BuiltIn) -> Self {
        Self { builtin }
    }

    pub fn builtin(&self) -> &BuiltIn {
        &self.builtin
    }

    /// Assert the kind of value returned when invoked with `num_args`
    /// arguments
    pub fn assert_return_type(&self, num_args: usize, expected: LiteralKind) {
        let kernel = self
            .builtin
            .kernels()
            .iter()
            .rev()
            .find(|kernel| kernel.arg_matcher().accepts_arity(num_args))
            .unwrap_or_else(|| {
                panic!(
                    "{}() has no kernel accepting {num_args} argument(s)",
                    self.builtin.name()
                )
            });
        assert_eq!(kernel.arg_matcher().out_type(), expected);
    }

    /// Assert the result of invoking this built-in
    pub fn assert_result_equals(&self, actual: Literal, expected: impl Into<Literal>) {
        assert_literal_equal(&actual, &expected.into());
    }

    /// Invoke this built-in with arbitrary literals
    pub fn invoke(&self, args: Vec<Literal>) -> Result<Literal> {
        self.builtin.invoke(&args)
    }

    /// Invoke this built-in with one geometry
    pub fn invoke_wkt(&self, wkt_value: &str) -> Result<Literal> {
        self.invoke(vec![create_geometry(wkt_value)])
    }

    /// Invoke this built-in with two geometries
    pub fn invoke_wkt_wkt(&self, wkt_value0: &str, wkt_value1: &str) -> Result<Literal> {
        self.invoke(vec![create_geometry(wkt_value0), create_geometry(wkt_value1)])
    }

    /// Invoke this built-in with a geometry and a scalar
    pub fn invoke_wkt_scalar(&self, wkt_value: &str, arg: impl Into<Literal>) -> Result<Literal> {
        self.invoke(vec![create_geometry(wkt_value), arg.into()])
    }

    /// Invoke this built-in with two geometries and a scalar
    pub fn invoke_wkt_wkt_scalar(
        &self,
        wkt_value0: &str,
        wkt_value1: &str,
        arg: impl Into<Literal>,
    ) -> Result<Literal> {
        self.invoke(vec![
            create_geometry(wkt_value0),
            create_geometry(wkt_value1),
            arg.into(),
        ])
    }

    /// Invoke a boolean built-in with one geometry and unwrap the result
    pub fn predicate_wkt(&self, wkt_value: &str) -> bool {
        Self::unwrap_bool(self.invoke_wkt(wkt_value))
    }

    /// Invoke a boolean built-in with two geometries and unwrap the result
    pub fn predicate_wkt_wkt(&self, wkt_value0: &str, wkt_value1: &str) -> bool {
        Self::unwrap_bool(self.invoke_wkt_wkt(wkt_value0, wkt_value1))
    }

    fn unwrap_bool(result: Result<Literal>) -> bool {
        match result {
            Ok(Literal::Boolean(value)) => value,
            Ok(other) => panic!("Expected boolean result but got {other:?}"),
            Err(e) => panic!("Expected boolean result but got error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use georule_expr::{builtin::SimpleBuiltInKernel, matchers::ArgMatcher};

    use super::*;

    fn st_is_point() -> BuiltIn {
        BuiltIn::from_kernel(
            "st_isPoint",
            SimpleBuiltInKernel::new_ref(
                ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
                Arc::new(|args| {
                    let geom = args.geometry(0)?;
                    Ok(Literal::Boolean(geom.geometry_type() == "Point"))
                }),
            ),
        )
    }

    #[test]
    fn tester() {
        let tester = BuiltInTester::new(st_is_point());
        assert_eq!(tester.builtin().name(), "st_isPoint");
        tester.assert_return_type(1, LiteralKind::Boolean);

        assert!(tester.predicate_wkt("POINT (0 1)"));
        assert!(!tester.predicate_wkt("LINESTRING (0 1, 2 3)"));

        let result = tester.invoke_wkt("POINT EMPTY").unwrap();
        tester.assert_result_equals(result, true);

        let err = tester.invoke_wkt_wkt("POINT (0 1)", "POINT (0 1)").unwrap_err();
        assert_eq!(err.kind(), "ArityError");
    }

    #[test]
    #[should_panic(expected = "st_isPoint() has no kernel accepting 2 argument(s)")]
    fn tester_no_kernel() {
        BuiltInTester::new(st_is_point()).assert_return_type(2, LiteralKind::Boolean);
    }

    #[test]
    #[should_panic(expected = "Expected boolean result but got error")]
    fn tester_error() {
        BuiltInTester::new(st_is_point()).predicate_wkt("POINT (0");
    }
}
