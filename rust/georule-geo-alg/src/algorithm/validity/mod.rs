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
//! Validity and classification of geometries
use georule_geometry::{Coord, Geometry, LineString, Polygon};
use thiserror::Error;

use crate::algorithm::{
    locate::{locate_in_ring, Location},
    noding::{node_edges, PieceLocation},
    prepared::PreparedGeometry,
    relate::relate_prepared,
    segment::{point_on_segment, segment_intersection, LineIntersection},
};

mod rectangle;
mod simple;

pub use rectangle::is_rectangle;
pub use simple::{is_closed, is_ring, is_simple};

/// The first problem found that makes a geometry invalid
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("Invalid coordinate at or near point {}", fmt_coord(.0))]
    InvalidCoordinate(Coord),

    #[error("Too few distinct points in geometry component")]
    TooFewPoints,

    #[error("Ring self-intersection at or near point {}", fmt_coord(.0))]
    RingSelfIntersection(Coord),

    #[error("Self-intersection at or near point {}", fmt_coord(.0))]
    SelfIntersection(Coord),

    #[error("Interior is disconnected at or near point {}", fmt_coord(.0))]
    DisconnectedInterior(Coord),

    #[error("Hole lies outside shell")]
    HoleOutsideShell,

    #[error("Holes are nested")]
    NestedHoles,

    #[error("Nested shells")]
    NestedShells,
}

fn fmt_coord(coord: &Coord) -> String {
    format!("{} {}", coord.x, coord.y)
}

/// Check a geometry for validity in the OGC sense
pub fn is_valid(geom: &Geometry) -> bool {
    validation_error(geom).is_none()
}

/// Find the first reason a geometry is invalid, if any
pub fn validation_error(geom: &Geometry) -> Option<ValidationError> {
    if let Some(coord) = geom.coords().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Some(ValidationError::InvalidCoordinate(coord));
    }

    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => None,
        Geometry::LineString(line_string) => validate_line_string(line_string),
        Geometry::MultiLineString(multi) => multi
            .line_strings()
            .iter()
            .find_map(validate_line_string),
        Geometry::Polygon(polygon) => validate_polygon(polygon),
        Geometry::MultiPolygon(multi) => validate_multi_polygon(multi.polygons()),
        Geometry::GeometryCollection(collection) => {
            collection.geometries().iter().find_map(validation_error)
        }
    }
}

fn validate_line_string(line_string: &LineString) -> Option<ValidationError> {
    if line_string.is_empty() {
        return None;
    }

    if dedup(line_string.coords()).len() < 2 {
        Some(ValidationError::TooFewPoints)
    } else {
        None
    }
}

fn dedup(coords: &[Coord]) -> Vec<Coord> {
    let mut out = coords.to_vec();
    out.dedup();
    out
}

fn validate_polygon(polygon: &Polygon) -> Option<ValidationError> {
    let rings = polygon
        .rings()
        .map(|ring| dedup(ring.coords()))
        .collect::<Vec<_>>();

    for ring in &rings {
        if ring.len() < 4 {
            return Some(ValidationError::TooFewPoints);
        }
        if let Some(coord) = ring_self_intersection(ring) {
            return Some(ValidationError::RingSelfIntersection(coord));
        }
    }

    // Rings may touch at single points, but any pair touching twice or a
    // cycle of touching rings cuts the interior apart
    let mut components = (0..rings.len()).collect::<Vec<_>>();
    for i in 0..rings.len() {
        for j in (i + 1)..rings.len() {
            let touches = match ring_touches(&rings[i], &rings[j]) {
                Ok(touches) => touches,
                Err(coord) => return Some(ValidationError::SelfIntersection(coord)),
            };

            if touches.len() > 1 {
                return Some(ValidationError::DisconnectedInterior(touches[1]));
            }

            if let Some(&touch) = touches.first() {
                let (root_i, root_j) = (find(&mut components, i), find(&mut components, j));
                if root_i == root_j {
                    return Some(ValidationError::DisconnectedInterior(touch));
                }
                components[root_i] = root_j;
            }
        }
    }

    let (shell, holes) = rings.split_first()?;

    for hole in holes {
        if ring_inside(hole, shell) == Some(false) {
            return Some(ValidationError::HoleOutsideShell);
        }
    }

    for (i, hole) in holes.iter().enumerate() {
        for (j, other) in holes.iter().enumerate() {
            if i != j && ring_inside(hole, other) == Some(true) {
                return Some(ValidationError::NestedHoles);
            }
        }
    }

    None
}

fn find(components: &mut [usize], i: usize) -> usize {
    let mut root = i;
    while components[root] != root {
        root = components[root];
    }
    components[i] = root;
    root
}

/// Find a point where a ring crosses or touches itself
fn ring_self_intersection(ring: &[Coord]) -> Option<Coord> {
    let num_edges = ring.len() - 1;
    for i in 0..num_edges {
        for j in (i + 1)..num_edges {
            let adjacent = j == i + 1 || (i == 0 && j == num_edges - 1);
            let intersection =
                segment_intersection(ring[i], ring[i + 1], ring[j], ring[j + 1]);
            match intersection {
                Some(LineIntersection::Collinear { start, .. }) => return Some(start),
                Some(LineIntersection::SinglePoint { intersection, .. }) if !adjacent => {
                    return Some(intersection);
                }
                _ => {}
            }
        }
    }

    None
}

/// Distinct points where two rings touch
///
/// Returns the crossing point as an error if the rings cross or share a
/// segment.
fn ring_touches(a: &[Coord], b: &[Coord]) -> Result<Vec<Coord>, Coord> {
    let mut touches: Vec<Coord> = Vec::new();
    for pa in a.windows(2) {
        for pb in b.windows(2) {
            match segment_intersection(pa[0], pa[1], pb[0], pb[1]) {
                None => {}
                Some(LineIntersection::Collinear { start, .. }) => return Err(start),
                Some(LineIntersection::SinglePoint {
                    intersection,
                    is_proper,
                }) => {
                    if is_proper {
                        return Err(intersection);
                    }
                    if !touches.contains(&intersection) {
                        touches.push(intersection);
                    }
                }
            }
        }
    }

    Ok(touches)
}

/// Whether `inner` lies inside the area enclosed by `outer`, decided by the
/// first vertex of `inner` not on `outer`
fn ring_inside(inner: &[Coord], outer: &[Coord]) -> Option<bool> {
    inner
        .iter()
        .find(|&&coord| !outer.windows(2).any(|pair| point_on_segment(coord, pair[0], pair[1])))
        .map(|&coord| locate_in_ring(coord, outer) == Location::Interior)
}

fn validate_multi_polygon(polygons: &[Polygon]) -> Option<ValidationError> {
    if let Some(err) = polygons.iter().find_map(validate_polygon) {
        return Some(err);
    }

    let prepared = polygons
        .iter()
        .filter(|polygon| !polygon.is_empty())
        .map(|polygon| PreparedGeometry::new(&Geometry::Polygon(polygon.clone())))
        .collect::<Vec<_>>();

    for i in 0..prepared.len() {
        for j in (i + 1)..prepared.len() {
            let (a, b) = (&prepared[i], &prepared[j]);
            if !a.envelope().intersects(b.envelope()) {
                continue;
            }

            let noding = node_edges(a, b);
            if let Some(piece) = noding
                .pieces
                .iter()
                .find(|piece| !matches!(piece.location, PieceLocation::Off(_)))
            {
                return Some(ValidationError::SelfIntersection(piece.start));
            }

            let matrix = relate_prepared(a, b);
            if matrix.get(Location::Interior, Location::Interior).is_empty() {
                continue;
            }

            if matrix.is_covers() || matrix.is_covered_by() {
                return Some(ValidationError::NestedShells);
            }

            let coord = noding
                .nodes
                .first()
                .map(|node| node.coord)
                .unwrap_or(a.envelope().min());
            return Some(ValidationError::SelfIntersection(coord));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    fn geom(wkt_value: &str) -> Geometry {
        Geometry::from_str(wkt_value).unwrap()
    }

    #[rstest]
    fn valid(
        #[values(
            "POINT (0 0)",
            "POINT EMPTY",
            "MULTIPOINT ((0 0), (0 0))",
            "LINESTRING (0 0, 1 1)",
            "LINESTRING (0 0, 1 1, 0 1, 1 0)",
            "LINESTRING EMPTY",
            "POLYGON EMPTY",
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))",
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))",
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (0 0, 4 2, 2 4, 0 0))",
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 2), (4 4, 6 4, 6 6, 4 4))",
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((2 2, 3 2, 3 3, 2 3, 2 2)))",
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((1 1, 2 1, 2 2, 1 2, 1 1)))",
            "MULTIPOLYGON (((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 8 2, 8 8, 2 8, 2 2)), ((4 4, 6 4, 6 6, 4 6, 4 4)))",
            "GEOMETRYCOLLECTION (POINT (0 0), POLYGON ((0 0, 1 0, 1 1, 0 0)))"
        )]
        wkt_value: &str,
    ) {
        let geom = geom(wkt_value);
        assert_eq!(validation_error(&geom), None, "{wkt_value}");
        assert!(is_valid(&geom));
    }

    #[rstest]
    #[case("LINESTRING (1 1, 1 1)", ValidationError::TooFewPoints)]
    #[case("POLYGON ((0 0, 1 1, 0 0, 0 0))", ValidationError::TooFewPoints)]
    #[case(
        "POLYGON ((0 0, 2 2, 2 0, 0 2, 0 0))",
        ValidationError::RingSelfIntersection(Coord { x: 1.0, y: 1.0 })
    )]
    #[case(
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (5 5, 15 5, 15 6, 5 6, 5 5))",
        ValidationError::SelfIntersection(Coord { x: 10.0, y: 5.0 })
    )]
    #[case(
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (20 20, 21 20, 21 21, 20 20))",
        ValidationError::HoleOutsideShell
    )]
    #[case(
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (1 1, 9 1, 9 9, 1 9, 1 1), (2 2, 3 2, 3 3, 2 3, 2 2))",
        ValidationError::NestedHoles
    )]
    #[case(
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (5 0, 10 5, 5 10, 0 5, 5 0))",
        ValidationError::DisconnectedInterior(Coord { x: 10.0, y: 5.0 })
    )]
    #[case(
        "MULTIPOLYGON (((0 0, 10 0, 10 10, 0 10, 0 0)), ((2 2, 4 2, 4 4, 2 4, 2 2)))",
        ValidationError::NestedShells
    )]
    #[case(
        "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((1 0, 2 0, 2 1, 1 1, 1 0)))",
        ValidationError::SelfIntersection(Coord { x: 1.0, y: 0.0 })
    )]
    #[case(
        "GEOMETRYCOLLECTION (POINT (0 0), LINESTRING (3 3, 3 3))",
        ValidationError::TooFewPoints
    )]
    fn invalid(#[case] wkt_value: &str, #[case] expected: ValidationError) {
        let geom = geom(wkt_value);
        assert_eq!(validation_error(&geom), Some(expected), "{wkt_value}");
        assert!(!is_valid(&geom));
    }

    #[test]
    fn non_finite_coordinates() {
        let geom = Geometry::Point(georule_geometry::Point::new(f64::NAN, 0.0));
        assert!(matches!(
            validation_error(&geom),
            Some(ValidationError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::RingSelfIntersection(Coord { x: 1.0, y: 1.5 }).to_string(),
            "Ring self-intersection at or near point 1 1.5"
        );
        assert_eq!(ValidationError::NestedShells.to_string(), "Nested shells");
    }
}
