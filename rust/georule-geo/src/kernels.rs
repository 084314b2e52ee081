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
use georule_geometry::Geometry;

/// A measure of one geometry
pub(crate) type UnaryMeasure = fn(&Geometry) -> f64;

/// A measure of a pair of geometries
pub(crate) type PairwiseMeasure = fn(&Geometry, &Geometry) -> f64;

/// Kernel for a boolean function of one geometry
pub(crate) fn unary_predicate_kernel(predicate: fn(&Geometry) -> bool) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Boolean(predicate(&geom)))
        }),
    )
}

/// Kernel for a boolean function of two geometries
pub(crate) fn pairwise_predicate_kernel(predicate: fn(&Geometry, &Geometry) -> bool) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Boolean,
        ),
        Arc::new(move |args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            Ok(Literal::Boolean(predicate(&geom_a, &geom_b)))
        }),
    )
}

/// Kernel returning a measure of one geometry
pub(crate) fn unary_measure_kernel(measure: UnaryMeasure) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Double),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Double(measure(&geom)))
        }),
    )
}

/// Kernel comparing a measure of one geometry with a value
pub(crate) fn unary_comparison_kernel(measure: UnaryMeasure, comparison: Comparison) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_numeric()],
            LiteralKind::Boolean,
        ),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            let value = args.double(1)?;
            Ok(Literal::Boolean(comparison.evaluate(measure(&geom), value)))
        }),
    )
}

/// Kernel returning a measure of two geometries
pub(crate) fn pairwise_measure_kernel(measure: PairwiseMeasure) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Double,
        ),
        Arc::new(move |args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            Ok(Literal::Double(measure(&geom_a, &geom_b)))
        }),
    )
}

/// Kernel comparing a measure of two geometries with a value
pub(crate) fn pairwise_comparison_kernel(
    measure: PairwiseMeasure,
    comparison: Comparison,
) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_numeric(),
            ],
            LiteralKind::Boolean,
        ),
        Arc::new(move |args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            let value = args.double(2)?;
            Ok(Literal::Boolean(
                comparison.evaluate(measure(&geom_a, &geom_b), value),
            ))
        }),
    )
}
