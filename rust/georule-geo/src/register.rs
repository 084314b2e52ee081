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
use georule_common::option::LibraryOptions;
use georule_expr::builtin::KernelRef;
use georule_functions::comparison::Comparison::{self, Equal, Greater, Smaller};

use crate::st_area::{st_area_impl, st_has_area_size_impl};
use crate::st_area_similarity::{st_area_similarity_impl, st_has_area_similarity_impl};
use crate::st_distance::{st_distance_impl, st_has_distance_impl, st_is_within_distance_impl};
use crate::st_equals_exact::st_equals_exact_impl;
use crate::st_hausdorff_distance::{st_has_hausdorff_distance_impl, st_hausdorff_distance_impl};
use crate::st_length::{st_has_equal_length_impl, st_has_length_impl, st_length_impl};
use crate::st_relate::{st_relate_matrix_impl, st_relate_pattern_impl};
use crate::st_relations::{
    st_contains_impl, st_covered_by_impl, st_covers_impl, st_crosses_impl, st_disjoint_impl,
    st_equals_impl, st_intersects_impl, st_overlaps_impl, st_touches_impl, st_within_impl,
};
use crate::st_validity::{
    st_is_closed_impl, st_is_rectangle_impl, st_is_ring_impl, st_is_simple_impl, st_is_valid_impl,
};

/// A comparison built-in and the kernel constructor implementing it
type ComparisonKernel = (&'static str, Comparison, fn(Comparison) -> KernelRef);

/// Kernels for every built-in stub declared in `georule-functions`
///
/// Built-ins listed more than once (st_relate) receive one kernel per
/// arity.
pub fn scalar_kernels(options: &LibraryOptions) -> Vec<(&'static str, KernelRef)> {
    let mut kernels = vec![
        ("st_contains", st_contains_impl()),
        ("st_coveredBy", st_covered_by_impl()),
        ("st_covers", st_covers_impl()),
        ("st_crosses", st_crosses_impl()),
        ("st_disjoint", st_disjoint_impl()),
        ("st_equals", st_equals_impl()),
        ("st_intersects", st_intersects_impl()),
        ("st_overlaps", st_overlaps_impl()),
        ("st_touches", st_touches_impl()),
        ("st_within", st_within_impl()),
        ("st_relate", st_relate_matrix_impl()),
        ("st_relate", st_relate_pattern_impl()),
        (
            "st_equalsExact",
            st_equals_exact_impl(options.equals_exact_tolerance),
        ),
        ("st_distance", st_distance_impl()),
        ("st_isWithinDistance", st_is_within_distance_impl()),
        ("st_hausdorffDistance", st_hausdorff_distance_impl()),
        ("st_areaSimilarity", st_area_similarity_impl()),
        ("st_area", st_area_impl()),
        ("st_length", st_length_impl()),
        ("st_hasEqualLength", st_has_equal_length_impl()),
        ("st_isSimple", st_is_simple_impl()),
        ("st_isValid", st_is_valid_impl()),
        ("st_isRectangle", st_is_rectangle_impl()),
        ("st_isClosed", st_is_closed_impl()),
        ("st_isRing", st_is_ring_impl()),
    ];

    let comparisons: [ComparisonKernel; 15] = [
        ("st_hasDistanceBiggerThan", Greater, st_has_distance_impl),
        ("st_hasDistanceEqualTo", Equal, st_has_distance_impl),
        ("st_hasDistanceSmallerThan", Smaller, st_has_distance_impl),
        (
            "st_hasHausdorffDistanceGreaterThan",
            Greater,
            st_has_hausdorff_distance_impl,
        ),
        (
            "st_hasHausdorffDistanceEqualTo",
            Equal,
            st_has_hausdorff_distance_impl,
        ),
        (
            "st_hasHausdorffDistanceSmallerThan",
            Smaller,
            st_has_hausdorff_distance_impl,
        ),
        (
            "st_hasAreaSimilarityMeasureBiggerThan",
            Greater,
            st_has_area_similarity_impl,
        ),
        (
            "st_hasAreaSimilarityMeasureEqualTo",
            Equal,
            st_has_area_similarity_impl,
        ),
        (
            "st_hasAreaSimilarityMeasureSmallerThan",
            Smaller,
            st_has_area_similarity_impl,
        ),
        ("st_hasAreaSizeBiggerThan", Greater, st_has_area_size_impl),
        ("st_hasAreaSizeEqualTo", Equal, st_has_area_size_impl),
        ("st_hasAreaSizeSmallerThan", Smaller, st_has_area_size_impl),
        ("st_hasLengthGreaterThan", Greater, st_has_length_impl),
        ("st_hasLengthEqualTo", Equal, st_has_length_impl),
        ("st_hasLengthSmallerThan", Smaller, st_has_length_impl),
    ];

    kernels.extend(
        comparisons
            .into_iter()
            .map(|(name, comparison, kernel)| (name, kernel(comparison))),
    );

    kernels
}
