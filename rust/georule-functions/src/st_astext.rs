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
use georule_geometry::write_wkt;

/// st_asText() built-in
///
/// Writes the canonical WKT of the parsed geometry, which normalizes spacing,
/// drops Z and M ordinates and writes numbers in their shortest form.
pub fn st_astext_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::String),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            Ok(Literal::String(write_wkt(&geom)))
        }),
    );

    BuiltIn::new(
        "st_asText",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return the canonical Well-Known Text of a geometry",
                "st_asText(geom)",
            )
            .with_geometry_argument("geom")
            .with_example("st_asText('POINT(1.0 2.0)')")
            .build(),
        ),
    )
}
