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

//! Geometry model for GeoRule.
//!
//! Geometries are parsed from Well-Known Text into an immutable tagged model
//! ([types::Geometry]) whose invariants (closed rings, minimum coordinate
//! counts) are enforced at construction. The model provides the accessors
//! needed by the predicate, metric and validity engines.

pub mod dimension;
pub mod envelope;
pub mod error;
pub mod interval;
pub mod point_count;
pub mod to_geo;
pub mod types;
pub mod wkt_reader;
pub mod wkt_writer;

pub use dimension::Dimensions;
pub use envelope::Envelope;
pub use error::GeometryError;
pub use interval::Interval;
pub use types::*;
pub use wkt_reader::parse_wkt;
pub use wkt_writer::{normalize_wkt, write_wkt};
