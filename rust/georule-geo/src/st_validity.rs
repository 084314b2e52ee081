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

use georule_common::error::GeoRuleError;
use georule_expr::{
    builtin::{KernelRef, SimpleBuiltInKernel},
    literal::{Literal, LiteralKind},
    matchers::ArgMatcher,
};
use georule_geo_alg::{is_closed, is_rectangle, is_ring, is_simple, validation_error};
use georule_geometry::{error::GeometryError, Geometry};

use crate::kernels::unary_predicate_kernel;

pub fn st_is_simple_impl() -> KernelRef {
    unary_predicate_kernel(is_simple)
}

/// st_isValid() implementation
///
/// Invalid geometries are reported at debug level together with the reason.
pub fn st_is_valid_impl() -> KernelRef {
    unary_predicate_kernel(|geom| match validation_error(geom) {
        Some(reason) => {
            log::debug!("st_isValid(): {reason}");
            false
        }
        None => true,
    })
}

pub fn st_is_rectangle_impl() -> KernelRef {
    unary_predicate_kernel(is_rectangle)
}

pub fn st_is_closed_impl() -> KernelRef {
    line_string_kernel(is_closed)
}

pub fn st_is_ring_impl() -> KernelRef {
    line_string_kernel(is_ring)
}

fn line_string_kernel(classify: fn(&Geometry) -> Result<bool, GeometryError>) -> KernelRef {
    SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            let result = classify(&geom).map_err(GeoRuleError::from)?;
            Ok(Literal::Boolean(result))
        }),
    )
}
