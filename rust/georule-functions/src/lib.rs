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
//! The GeoRule built-in catalogue.
//!
//! Every built-in published to a rule engine is declared here with its
//! signature and documentation. Built-ins that only need the geometry model
//! (type tags, counts, dimension, emptiness, WKT output) are implemented in
//! this crate; the others are registered as stubs whose kernels are supplied
//! by an engine crate (see [register::stubs]).

pub mod comparison;
mod distance;
mod measures;
mod predicates;
pub mod register;
mod st_astext;
mod st_dimension;
mod st_geometrytype;
mod st_isempty;
mod st_numgeometries;
mod st_numpoints;
mod validity;
