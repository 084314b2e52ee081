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
//! Areas of polygon overlays
//!
//! The boundary of the intersection (or union) of two polygonal geometries
//! is made of the pieces of each boundary that lie inside (or outside) the
//! other, plus the boundary segments both share with the same interior side.
//! Summing the oriented pieces with Green's theorem yields the area without
//! building the overlay polygons.
use georule_geometry::{Coord, Geometry};

use crate::algorithm::{
    area::area,
    locate::Location,
    noding::{node_edges, Piece, PieceLocation},
    prepared::{EdgeSource, PreparedGeometry},
};

/// Intersection and union areas of the polygonal parts of two geometries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayAreas {
    pub intersection: f64,
    pub union: f64,
}

impl OverlayAreas {
    pub fn sym_difference(&self) -> f64 {
        (self.union - self.intersection).max(0.0)
    }

    /// Ratio of the intersection area to the union area, or 0 if the union
    /// has no area
    pub fn similarity(&self) -> f64 {
        if self.union <= 0.0 {
            0.0
        } else {
            self.intersection / self.union
        }
    }
}

/// Compute intersection and union areas of two geometries
///
/// Only polygonal components contribute. Results for invalid polygons are
/// unspecified.
pub fn overlay_areas(a: &Geometry, b: &Geometry) -> OverlayAreas {
    let (prepared_a, prepared_b) = (
        PreparedGeometry::new_polygonal(a),
        PreparedGeometry::new_polygonal(b),
    );

    if !prepared_a.has_polygons()
        || !prepared_b.has_polygons()
        || !prepared_a.envelope().intersects(prepared_b.envelope())
    {
        return OverlayAreas {
            intersection: 0.0,
            union: area(a) + area(b),
        };
    }

    let origin = prepared_a.envelope().min();
    let mut intersection = 0.0;
    let mut union = 0.0;

    for piece in node_edges(&prepared_a, &prepared_b).pieces {
        match piece.location {
            PieceLocation::Off(Location::Interior) | PieceLocation::BetweenRings => {
                intersection += oriented_area(&piece, origin)
            }
            PieceLocation::Off(_) => union += oriented_area(&piece, origin),
            PieceLocation::OnRing { interior_on_left } => {
                if interior_on_left == piece_interior_on_left(&piece) {
                    let contribution = oriented_area(&piece, origin);
                    intersection += contribution;
                    union += contribution;
                }
            }
            PieceLocation::OnLine => {}
        }
    }

    // Shared boundary pieces were already counted from the first geometry
    for piece in node_edges(&prepared_b, &prepared_a).pieces {
        match piece.location {
            PieceLocation::Off(Location::Interior) | PieceLocation::BetweenRings => {
                intersection += oriented_area(&piece, origin)
            }
            PieceLocation::Off(_) => union += oriented_area(&piece, origin),
            PieceLocation::OnRing { .. } | PieceLocation::OnLine => {}
        }
    }

    OverlayAreas {
        intersection: intersection.max(0.0),
        union: union.max(0.0),
    }
}

pub fn intersection_area(a: &Geometry, b: &Geometry) -> f64 {
    overlay_areas(a, b).intersection
}

pub fn union_area(a: &Geometry, b: &Geometry) -> f64 {
    overlay_areas(a, b).union
}

pub fn sym_difference_area(a: &Geometry, b: &Geometry) -> f64 {
    overlay_areas(a, b).sym_difference()
}

/// `area(A ∩ B) / area(A ∪ B)`, or 0 if the union has no area
pub fn area_similarity(a: &Geometry, b: &Geometry) -> f64 {
    overlay_areas(a, b).similarity()
}

fn piece_interior_on_left(piece: &Piece) -> bool {
    match piece.source {
        EdgeSource::Ring { interior_on_left } => interior_on_left,
        EdgeSource::Line => true,
    }
}

/// Contribution of a piece to the area enclosed by the boundary it belongs
/// to, oriented so that the interior is on the left
fn oriented_area(piece: &Piece, origin: Coord) -> f64 {
    let (start, end) = (piece.start - origin, piece.end - origin);
    let contribution = (start.x * end.y - end.x * start.y) / 2.0;
    if piece_interior_on_left(piece) {
        contribution
    } else {
        -contribution
    }
}
