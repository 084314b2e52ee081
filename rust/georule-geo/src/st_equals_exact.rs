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

use georule_common::{invalid_arg_err, Result};
use georule_expr::{
    args::BuiltInArgs,
    builtin::{BuiltInKernel, KernelRef},
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};
use georule_geo_alg::equals_exact;

/// st_equalsExact() implementation
///
/// `default_tolerance` is used when the built-in is invoked without a
/// tolerance argument.
pub fn st_equals_exact_impl(default_tolerance: f64) -> KernelRef {
    Arc::new(STEqualsExact {
        default_tolerance,
        matcher: ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_optional(ArgMatcher::is_numeric()),
            ],
            LiteralKind::Boolean,
        ),
    })
}

#[derive(Debug)]
struct STEqualsExact {
    default_tolerance: f64,
    matcher: ArgMatcher,
}

impl BuiltInKernel for STEqualsExact {
    fn arg_matcher(&self) -> &ArgMatcher {
        &self.matcher
    }

    fn invoke(&self, args: &BuiltInArgs) -> Result<Literal> {
        let geom_a = args.geometry(0)?;
        let geom_b = args.geometry(1)?;
        let tolerance = args
            .optional_double(2)?
            .unwrap_or(self.default_tolerance);
        if tolerance.is_nan() || tolerance < 0.0 {
            return invalid_arg_err!(
                "{}() tolerance must be a non-negative number but got {tolerance}",
                args.name()
            );
        }

        Ok(Literal::Boolean(equals_exact(&geom_a, &geom_b, tolerance)))
    }
}
