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
use georule_expr::{
    builtin::BuiltIn, documentation::Documentation, literal::LiteralKind, matchers::ArgMatcher,
};

/// st_isSimple() built-in stub
pub fn st_is_simple_builtin() -> BuiltIn {
    classification_stub(
        "st_isSimple",
        "Return true if the geometry has no anomalous self-intersections",
        "LINESTRING (0 0, 2 2, 2 0, 0 2)",
    )
}

/// st_isValid() built-in stub
pub fn st_is_valid_builtin() -> BuiltIn {
    classification_stub(
        "st_isValid",
        "Return true if the geometry is topologically valid",
        "POLYGON ((0 0, 10 10, 10 0, 0 10, 0 0))",
    )
}

/// st_isRectangle() built-in stub
pub fn st_is_rectangle_builtin() -> BuiltIn {
    classification_stub(
        "st_isRectangle",
        "Return true if the geometry is an axis-aligned rectangle",
        "POLYGON ((0 0, 2 0, 2 1, 0 1, 0 0))",
    )
}

/// st_isClosed() built-in stub
///
/// Only defined for line strings: other kinds are an invalid argument.
pub fn st_is_closed_builtin() -> BuiltIn {
    classification_stub(
        "st_isClosed",
        "Return true if the line string's start and end points coincide",
        "LINESTRING (0 0, 1 0, 1 1, 0 0)",
    )
}

/// st_isRing() built-in stub
///
/// Only defined for line strings: other kinds are an invalid argument.
pub fn st_is_ring_builtin() -> BuiltIn {
    classification_stub(
        "st_isRing",
        "Return true if the line string is closed and simple",
        "LINESTRING (0 0, 1 0, 1 1, 0 0)",
    )
}

fn classification_stub(name: &str, description: &str, example_wkt: &str) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Boolean),
        Some(
            Documentation::builder(description, format!("{name}(geom)"))
                .with_geometry_argument("geom")
                .with_example(format!("{name}('{example_wkt}')"))
                .build(),
        ),
    )
}
