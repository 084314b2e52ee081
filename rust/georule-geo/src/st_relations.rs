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
use georule_geo_alg::{
    contains, covered_by, covers, crosses, disjoint, equals, intersects, overlaps, touches, within,
};

use crate::kernels::pairwise_predicate_kernel;

/// st_contains() implementation using the relate engine
pub fn st_contains_impl() -> KernelRef {
    pairwise_predicate_kernel(contains)
}

pub fn st_covered_by_impl() -> KernelRef {
    pairwise_predicate_kernel(covered_by)
}

pub fn st_covers_impl() -> KernelRef {
    pairwise_predicate_kernel(covers)
}

pub fn st_crosses_impl() -> KernelRef {
    pairwise_predicate_kernel(crosses)
}

pub fn st_disjoint_impl() -> KernelRef {
    pairwise_predicate_kernel(disjoint)
}

/// st_equals() implementation
///
/// Topological equality: two empty geometries are equal.
pub fn st_equals_impl() -> KernelRef {
    pairwise_predicate_kernel(equals)
}

pub fn st_intersects_impl() -> KernelRef {
    pairwise_predicate_kernel(intersects)
}

pub fn st_overlaps_impl() -> KernelRef {
    pairwise_predicate_kernel(overlaps)
}

pub fn st_touches_impl() -> KernelRef {
    pairwise_predicate_kernel(touches)
}

pub fn st_within_impl() -> KernelRef {
    pairwise_predicate_kernel(within)
}
