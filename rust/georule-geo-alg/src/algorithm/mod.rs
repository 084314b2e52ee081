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
//! Predicate, metric and validity algorithms over the GeoRule geometry model
/// Kernels to compute various predicates
pub mod kernels;
pub use kernels::{Kernel, Orientation, RobustKernel};

/// Intersections and distances of segments.
pub mod segment;

/// Locate a coordinate in the interior, boundary or exterior of a geometry.
pub mod locate;
pub use locate::Location;

/// Geometries decomposed into points, lines, polygons and edges.
pub mod prepared;
pub use prepared::PreparedGeometry;

/// Split the edges of one geometry at the edges of another.
pub mod noding;

/// Calculate the planar area of a `Geometry`.
pub mod area;
pub use area::area;

/// Calculate the planar length of a `Geometry`.
pub mod length;
pub use length::length;

/// Compute the DE-9IM matrix of two geometries.
pub mod relate;
pub use relate::{relate, RelationMatrix};

/// Named spatial relations (contains, touches, ...).
pub mod predicates;
pub use predicates::{
    contains, covered_by, covers, crosses, disjoint, equals, equals_exact, intersects, overlaps,
    relate_pattern, touches, within,
};

/// Minimum distance between geometries.
pub mod distance;
pub use distance::{distance, is_within_distance};

/// Discrete Hausdorff distance between geometries.
pub mod hausdorff;
pub use hausdorff::hausdorff_distance;

/// Areas of the intersection and union of polygonal geometries.
pub mod overlay_area;
pub use overlay_area::{
    area_similarity, intersection_area, overlay_areas, sym_difference_area, union_area,
    OverlayAreas,
};

/// Validity, simplicity and shape classification.
pub mod validity;
pub use validity::{
    is_closed, is_rectangle, is_ring, is_simple, is_valid, validation_error, ValidationError,
};
