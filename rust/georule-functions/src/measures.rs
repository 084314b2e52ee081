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

use crate::comparison::Comparison;

/// st_hasAreaSizeBiggerThan() built-in stub
pub fn st_has_area_size_bigger_than_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasAreaSizeBiggerThan", "area", Comparison::Greater)
}

/// st_hasAreaSizeEqualTo() built-in stub
pub fn st_has_area_size_equal_to_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasAreaSizeEqualTo", "area", Comparison::Equal)
}

/// st_hasAreaSizeSmallerThan() built-in stub
pub fn st_has_area_size_smaller_than_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasAreaSizeSmallerThan", "area", Comparison::Smaller)
}

/// st_hasLengthGreaterThan() built-in stub
pub fn st_has_length_greater_than_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasLengthGreaterThan", "length", Comparison::Greater)
}

/// st_hasLengthEqualTo() built-in stub
pub fn st_has_length_equal_to_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasLengthEqualTo", "length", Comparison::Equal)
}

/// st_hasLengthSmallerThan() built-in stub
pub fn st_has_length_smaller_than_builtin() -> BuiltIn {
    measure_comparison_stub("st_hasLengthSmallerThan", "length", Comparison::Smaller)
}

/// st_hasEqualLength() built-in stub
pub fn st_has_equal_length_builtin() -> BuiltIn {
    BuiltIn::new_stub(
        "st_hasEqualLength",
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_geometry()],
            LiteralKind::Boolean,
        ),
        Some(
            Documentation::builder(
                "Return true if geomA and geomB have exactly the same length",
                "st_hasEqualLength(geomA, geomB)",
            )
            .with_geometry_argument("geomA")
            .with_geometry_argument("geomB")
            .with_example("st_hasEqualLength('LINESTRING (0 0, 1 0)', 'LINESTRING (5 5, 5 6)')")
            .build(),
        ),
    )
}

/// st_area() built-in stub
pub fn st_area_builtin() -> BuiltIn {
    measure_stub(
        "st_area",
        "Return the area of a geometry (0 for points and lines)",
        "st_area('POLYGON ((0 0, 1 0, 0 1, 0 0))')",
    )
}

/// st_length() built-in stub
pub fn st_length_builtin() -> BuiltIn {
    measure_stub(
        "st_length",
        "Return the length of a geometry's linework (ring perimeters for polygons)",
        "st_length('LINESTRING (0 0, 3 4)')",
    )
}

fn measure_comparison_stub(name: &str, measure: &str, comparison: Comparison) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_numeric()],
            LiteralKind::Boolean,
        ),
        Some(
            Documentation::builder(
                format!("Return true if the {measure} of geom is {comparison} value"),
                format!("{name}(geom, value)"),
            )
            .with_geometry_argument("geom")
            .with_argument("value", "double: Value to compare against")
            .with_example(format!("{name}('POLYGON ((0 0, 1 0, 0 1, 0 0))', 0.5)"))
            .build(),
        ),
    )
}

fn measure_stub(name: &str, description: &str, example: &str) -> BuiltIn {
    BuiltIn::new_stub(
        name,
        ArgMatcher::new(vec![ArgMatcher::is_geometry()], LiteralKind::Double),
        Some(
            Documentation::builder(description, format!("{name}(geom)"))
                .with_geometry_argument("geom")
                .with_example(example)
                .build(),
        ),
    )
}
