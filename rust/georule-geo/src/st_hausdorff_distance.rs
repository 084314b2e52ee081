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
use georule_geo_alg::hausdorff_distance;

use crate::kernels::{pairwise_comparison_kernel, pairwise_measure_kernel};

/// st_hausdorffDistance() implementation
pub fn st_hausdorff_distance_impl() -> KernelRef {
    pairwise_measure_kernel(hausdorff_distance)
}

/// st_hasHausdorffDistanceGreaterThan|EqualTo|SmallerThan() implementation
pub fn st_has_hausdorff_distance_impl(comparison: Comparison) -> KernelRef {
    pairwise_comparison_kernel(hausdorff_distance, comparison)
}
