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

/// st_hasNumGeometries() built-in
pub fn st_has_num_geometries_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_integer()],
            LiteralKind::Boolean,
        ),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            let num_geometries = args.integer(1)?;
            Ok(Literal::Boolean(
                count_to_integer(geom.num_geometries()) == num_geometries,
            ))
        }),
    );

    BuiltIn::new(
        "st_hasNumGeometries",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return true if the geometry is comprised of num geometries",
                "st_hasNumGeometries(geom, num)",
            )
            .with_geometry_argument("geom")
            .with_argument("num", "integer: Expected number of geometries")
            .with_example("st_hasNumGeometries('MULTIPOINT ((0 0), (1 1))', 2)")
            .build(),
        ),
    )
}

/// st_numGeometries() built-in
///
/// Non-collections count as one geometry, even when empty.
pub fn st_num_geometries_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Integer),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Integer(count_to_integer(geom.num_geometries())))
        }),
    );

    BuiltIn::new(
        "st_numGeometries",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return the number of geometries in a collection (1 otherwise)",
                "st_numGeometries(geom)",
            )
            .with_geometry_argument("geom")
            .with_example("st_numGeometries('MULTIPOINT ((0 0), (1 1))')")
            .build(),
        ),
    )
}

pub(crate) fn count_to_integer(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
