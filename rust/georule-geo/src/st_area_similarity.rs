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
use georule_expr::builtin::KernelRef;
use georule_functions::comparison::Comparison;
use georule_geo_alg::area_similarity;

use crate::kernels::{pairwise_comparison_kernel, pairwise_measure_kernel};

/// st_areaSimilarity() implementation
///
/// The ratio of the intersection area to the union area of the polygonal
/// parts of both geometries; 0 when the union has no area.
pub fn st_area_similarity_impl() -> KernelRef {
    pairwise_measure_kernel(area_similarity)
}

/// st_hasAreaSimilarityMeasureBiggerThan|EqualTo|SmallerThan() implementation
pub fn st_has_area_similarity_impl(comparison: Comparison) -> KernelRef {
    pairwise_comparison_kernel(area_similarity, comparison)
}
