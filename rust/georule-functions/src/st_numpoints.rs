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

use crate::{comparison::Comparison, st_numgeometries::count_to_integer};

/// st_numPointsGreaterThan() built-in
pub fn st_num_points_greater_than_builtin() -> BuiltIn {
    num_points_comparison_builtin("st_numPointsGreaterThan", Comparison::Greater)
}

/// st_numPointsSmallerThan() built-in
pub fn st_num_points_smaller_than_builtin() -> BuiltIn {
    num_points_comparison_builtin("st_numPointsSmallerThan", Comparison::Smaller)
}

/// st_hasEqualNumPoints() built-in
pub fn st_has_equal_num_points_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Boolean,
        ),
        Arc::new(|args| {
            let geom_a = args.geometry(0)?;
            let geom_b = args.geometry(1)?;
            Ok(Literal::Boolean(geom_a.num_points() == geom_b.num_points()))
        }),
    );

    BuiltIn::new(
        "st_hasEqualNumPoints",
        vec![kernel],
        Some(
            Documentation::builder(
                "Return true if geomA and geomB have the same number of points",
                "st_hasEqualNumPoints(geomA, geomB)",
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_example("st_hasEqualNumPoints('LINESTRING (0 0, 1 1)', 'MULTIPOINT ((0 0), (1 1))')")
            .build(),
        ),
    )
}

/// st_numPoints() built-in
///
/// Ring closing coordinates are counted.
pub fn st_num_points_builtin() -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Integer),
        Arc::new(|args| {
            let geom = args.geometry(0)?;
            Ok(Literal::Integer(count_to_integer(geom.num_points())))
        }),
    );

    BuiltIn::new(
        "st_numPoints",
        vec![kernel],
        Some(
            Documentation::builder("Return the number of points of a geometry", "st_numPoints(geom)")
                .with_geometry_argument("geom")
                .with_example("st_numPoints('POLYGON ((0 0, 1 0, 0 1, 0 0))')")
                .build(),
        ),
    )
}

fn num_points_comparison_builtin(name: &str, comparison: Comparison) -> BuiltIn {
    let kernel = SimpleBuiltInKernel::new_ref(
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_integer()],
            LiteralKind::Boolean,
        ),
        Arc::new(move |args| {
            let geom = args.geometry(0)?;
            let amount = args.integer(1)?;
            Ok(Literal::Boolean(
                comparison.evaluate(count_to_integer(geom.num_points()), amount),
            ))
        }),
    );

    BuiltIn::new(
        name,
        vec![kernel],
        Some(
            Documentation::builder(
                format!("Return true if the number of points of geom is {comparison} amount"),
                format!("{name}(geom, amount)"),
            )
            .with_geometry_argument("geom")
            .with_argument("amount", "integer: Number of points to compare against")
            .with_example(format!("{name}('LINESTRING (0 0, 1 1, 2 2)', 2)"))
            .build(),
        ),
    )
}
