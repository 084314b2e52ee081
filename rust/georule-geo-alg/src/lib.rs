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
//! Geometry algorithms for GeoRule.
//!
//! Everything here works on the [georule_geometry] model in the Euclidean
//! plane. Orientation tests use the adaptive-precision predicates from the
//! `robust` crate so that relate results do not depend on rounding.
pub use crate::algorithm::*;

/// This module includes all the functions of geometric calculations
pub mod algorithm;
