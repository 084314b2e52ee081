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
use georule_expr::function_set::FunctionSet;

/// Export the set of built-ins defined in this crate
///
/// Built-ins in [stubs] are included but fail with a not implemented error
/// until an engine registers kernels for them.
pub fn default_function_set() -> FunctionSet {
    let mut function_set = FunctionSet::new();

    macro_rules! register_builtins {
        ($function_set:expr, $($builtin:expr),* $(,)?) => {
            $(
                $function_set.insert_builtin($builtin());
            )*
        };
    }

    register_builtins!(
        function_set,
        crate::distance::st_area_similarity_builtin,
        crate::distance::st_distance_builtin,
        crate::distance::st_has_area_similarity_measure_bigger_than_builtin,
        crate::distance::st_has_area_similarity_measure_equal_to_builtin,
        crate::distance::st_has_area_similarity_measure_smaller_than_builtin,
        crate::distance::st_has_distance_bigger_than_builtin,
        crate::distance::st_has_distance_equal_to_builtin,
        crate::distance::st_has_distance_smaller_than_builtin,
        crate::distance::st_has_hausdorff_distance_equal_to_builtin,
        crate::distance::st_has_hausdorff_distance_greater_than_builtin,
        crate::distance::st_has_hausdorff_distance_smaller_than_builtin,
        crate::distance::st_hausdorff_distance_builtin,
        crate::distance::st_is_within_distance_builtin,
        crate::measures::st_area_builtin,
        crate::measures::st_has_area_size_bigger_than_builtin,
        crate::measures::st_has_area_size_equal_to_builtin,
        crate::measures::st_has_area_size_smaller_than_builtin,
        crate::measures::st_has_equal_length_builtin,
        crate::measures::st_has_length_equal_to_builtin,
        crate::measures::st_has_length_greater_than_builtin,
        crate::measures::st_has_length_smaller_than_builtin,
        crate::measures::st_length_builtin,
        crate::predicates::st_contains_builtin,
        crate::predicates::st_covered_by_builtin,
        crate::predicates::st_covers_builtin,
        crate::predicates::st_crosses_builtin,
        crate::predicates::st_disjoint_builtin,
        crate::predicates::st_equals_builtin,
        crate::predicates::st_equals_exact_builtin,
        crate::predicates::st_intersects_builtin,
        crate::predicates::st_overlaps_builtin,
        crate::predicates::st_relate_builtin,
        crate::predicates::st_touches_builtin,
        crate::predicates::st_within_builtin,
        crate::st_astext::st_astext_builtin,
        crate::st_dimension::st_dimension_builtin,
        crate::st_dimension::st_has_dimension_builtin,
        crate::st_geometrytype::st_geometry_type_builtin,
        crate::st_isempty::st_isempty_builtin,
        crate::st_numgeometries::st_has_num_geometries_builtin,
        crate::st_numgeometries::st_num_geometries_builtin,
        crate::st_numpoints::st_has_equal_num_points_builtin,
        crate::st_numpoints::st_num_points_builtin,
        crate::st_numpoints::st_num_points_greater_than_builtin,
        crate::st_numpoints::st_num_points_smaller_than_builtin,
        crate::validity::st_is_closed_builtin,
        crate::validity::st_is_rectangle_builtin,
        crate::validity::st_is_ring_builtin,
        crate::validity::st_is_simple_builtin,
        crate::validity::st_is_valid_builtin,
    );

    for builtin in crate::st_geometrytype::type_tag_builtins() {
        function_set.insert_builtin(builtin);
    }

    function_set
}

/// Built-ins whose implementations are registered independently
///
/// These built-ins are included in the default function set; however, it is
/// useful to expose them individually for testing in crates that implement
/// them.
pub mod stubs {
    pub use crate::distance::*;
    pub use crate::measures::*;
    pub use crate::predicates::*;
    pub use crate::validity::*;
}

#[cfg(test)]
mod tests {
    use georule_expr::literal::Literal;

    use super::*;

    #[test]
    fn function_set() {
        let function_set = default_function_set();
        assert_eq!(function_set.builtins().count(), 66);

        for builtin in function_set.builtins() {
            assert!(
                builtin.documentation().is_some(),
                "{} has no documentation",
                builtin.name()
            );
        }

        // Lookup is case-insensitive and covers aliases
        assert_eq!(
            function_set.builtin("ST_CONTAINS").unwrap().name(),
            "st_contains"
        );
        assert_eq!(
            function_set.builtin("st_dwithin").unwrap().name(),
            "st_isWithinDistance"
        );
    }

    #[test]
    fn model_builtins_are_implemented() {
        let function_set = default_function_set();
        let point = Literal::from("POINT (0 1)");

        let is_point = function_set.builtin("st_isPoint").unwrap();
        assert_eq!(
            is_point.invoke(&[point.clone()]).unwrap(),
            Literal::Boolean(true)
        );

        let as_text = function_set.builtin("st_astext").unwrap();
        assert_eq!(
            as_text.invoke(&[point.clone()]).unwrap(),
            Literal::from("POINT (0 1)")
        );

        let contains = function_set.builtin("st_contains").unwrap();
        let err = contains.invoke(&[point.clone(), point]).unwrap_err();
        assert_eq!(err.kind(), "NotImplementedError");
    }
}
