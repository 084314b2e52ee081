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
//! Kernels for the GeoRule built-in catalogue backed by `georule-geo-alg`.
//!
//! The catalogue in `georule-functions` declares these built-ins as stubs;
//! [register::scalar_kernels] lists the kernels to add to them.

mod kernels;
pub mod register;
mod st_area;
mod st_area_similarity;
mod st_distance;
mod st_equals_exact;
mod st_hausdorff_distance;
mod st_length;
mod st_relate;
mod st_relations;
mod st_validity;
