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
//! Named spatial relations built on the DE-9IM matrix
use georule_geometry::{Coord, Geometry, GeometryError};

use crate::algorithm::{
    prepared::PreparedGeometry,
    relate::{relate, relate_prepared, RelationMatrix},
};

/// Relate two geometries if the envelope of `b` lies within the envelope of `a`
///
/// Envelope containment is necessary for contains and covers, so the matrix
/// is not computed otherwise.
fn relate_if_enclosed(a: &Geometry, b: &Geometry) -> Option<RelationMatrix> {
    let (a, b) = (PreparedGeometry::new(a), PreparedGeometry::new(b));
    if !a.envelope().contains(b.envelope()) {
        return None;
    }

    Some(relate_prepared(&a, &b))
}

pub fn contains(a: &Geometry, b: &Geometry) -> bool {
    relate_if_enclosed(a, b).is_some_and(|m| m.is_contains())
}

pub fn within(a: &Geometry, b: &Geometry) -> bool {
    contains(b, a)
}

pub fn covers(a: &Geometry, b: &Geometry) -> bool {
    relate_if_enclosed(a, b).is_some_and(|m| m.is_covers())
}

pub fn covered_by(a: &Geometry, b: &Geometry) -> bool {
    covers(b, a)
}

pub fn crosses(a: &Geometry, b: &Geometry) -> bool {
    relate(a, b).is_crosses()
}

pub fn touches(a: &Geometry, b: &Geometry) -> bool {
    relate(a, b).is_touches()
}

pub fn overlaps(a: &Geometry, b: &Geometry) -> bool {
    relate(a, b).is_overlaps()
}

pub fn disjoint(a: &Geometry, b: &Geometry) -> bool {
    relate(a, b).is_disjoint()
}

pub fn intersects(a: &Geometry, b: &Geometry) -> bool {
    !disjoint(a, b)
}

/// Topological equality
///
/// Two empty geometries are equal.
pub fn equals(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }

    relate(a, b).is_equal_topo()
}

/// Test the DE-9IM matrix of two geometries against a pattern
pub fn relate_pattern(a: &Geometry, b: &Geometry, pattern: &str) -> Result<bool, GeometryError> {
    relate(a, b).matches(pattern)
}

/// Structural equality with a coordinate tolerance
///
/// The geometries must be of the same kind with the same structure and
/// each pair of corresponding coordinates must be within `tolerance` of
/// each other. A tolerance of 0 requires identical coordinates.
pub fn equals_exact(a: &Geometry, b: &Geometry, tolerance: f64) -> bool {
    let close = |p: &Coord, q: &Coord| (p.x - q.x).hypot(p.y - q.y) <= tolerance;
    let same_coords = |p: &[Coord], q: &[Coord]| {
        p.len() == q.len() && p.iter().zip(q).all(|(p, q)| close(p, q))
    };
    let same_polygon = |p: &georule_geometry::Polygon, q: &georule_geometry::Polygon| {
        p.interiors().len() == q.interiors().len()
            && same_coords(p.exterior().coords(), q.exterior().coords())
            && p.interiors()
                .iter()
                .zip(q.interiors())
                .all(|(p, q)| same_coords(p.coords(), q.coords()))
    };

    match (a, b) {
        (Geometry::Point(p), Geometry::Point(q)) => match (p.coord(), q.coord()) {
            (Some(p), Some(q)) => close(&p, &q),
            (None, None) => true,
            _ => false,
        },
        (Geometry::LineString(p), Geometry::LineString(q)) => same_coords(p.coords(), q.coords()),
        (Geometry::Polygon(p), Geometry::Polygon(q)) => same_polygon(p, q),
        (Geometry::MultiPoint(p), Geometry::MultiPoint(q)) => same_coords(p.points(), q.points()),
        (Geometry::MultiLineString(p), Geometry::MultiLineString(q)) => {
            p.line_strings().len() == q.line_strings().len()
                && p.line_strings()
                    .iter()
                    .zip(q.line_strings())
                    .all(|(p, q)| same_coords(p.coords(), q.coords()))
        }
        (Geometry::MultiPolygon(p), Geometry::MultiPolygon(q)) => {
            p.polygons().len() == q.polygons().len()
                && p.polygons()
                    .iter()
                    .zip(q.polygons())
                    .all(|(p, q)| same_polygon(p, q))
        }
        (Geometry::GeometryCollection(p), Geometry::GeometryCollection(q)) => {
            p.geometries().len() == q.geometries().len()
                && p.geometries()
                    .iter()
                    .zip(q.geometries())
                    .all(|(p, q)| equals_exact(p, q, tolerance))
        }
        _ => false,
    }
}
