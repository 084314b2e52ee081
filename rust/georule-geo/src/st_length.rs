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
use georule_geo_alg::length;

use crate::kernels::{unary_comparison_kernel, unary_measure_kernel};

/// st_length() implementation
pub fn st_length_impl() -> KernelRef {
    unary_measure_kernel(length)
}

/// st_hasLengthGreaterThan|EqualTo|SmallerThan() implementation
pub fn st_has_length_impl(comparison: Comparison) -> KernelRef {
    unary_comparison_kernel(length, comparison)
}

/// st_hasEqualLength() implementation
pub fn st_has_equal_length_impl() -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Boolean,
        ),
        Arc::new(|args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            Ok(Literal::Boolean(length(&geom_a) == length(&geom_b)))
        }),
    )
}
