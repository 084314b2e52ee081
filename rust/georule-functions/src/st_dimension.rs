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

/// st_hasDimension() built-in
///
/// Compares the topological dimension of the geometry (0 for points, 1 for
/// lines, 2 for polygons, the maximum of the members for collections and -1
/// for an empty collection) with an integer.
pub fn st_has_dimension_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_integer()],
            LiteralKind::Boolean,
        ),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            let dimension = args.integer(1)?;
            Ok(Literal::Boolean(
                i64::from(geom.dimension().as_i32()) == dimension,
            ))
        }),
    );

    BuiltIn::new(
        "st_hasDimension",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return true if the topological dimension of the geometry is dimension",
                "st_hasDimension(geom, dimension)",
            )
            .with_geometry_argument("geom")
            .with_argument("dimension", "integer: Expected dimension")
            .with_example("st_hasDimension('LINESTRING (0 0, 1 1)', 1)")
            .build(),
        ),
    )
}

pub fn st_dimension_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Integer),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Integer(geom.dimension().as_i32().into()))
        }),
    );

    BuiltIn::new(
        "st_dimension",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return the topological dimension of the geometry",
                "st_dimension(geom)",
            )
            .with_geometry_argument("geom")
            .with_example("st_dimension('POLYGON ((0 0, 1 0, 0 1, 0 0))')")
            .build(),
        ),
    )
}
