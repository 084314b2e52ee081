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
use georule_geometry::Geometry;

use crate::algorithm::{
    locate::Location,
    prepared::PreparedGeometry,
    segment::{point_distance, point_segment_distance, segment_distance},
};

/// Minimum Euclidean distance between two geometries
///
/// Returns 0 when the geometries intersect (including when a component of
/// one lies inside a polygon of the other) and when either is empty.
pub fn distance(a: &Geometry, b: &Geometry) -> f64 {
    let (a, b) = (PreparedGeometry::new(a), PreparedGeometry::new(b));
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    min_distance(&a, &b, 0.0)
}

/// Check whether two geometries are within `max_distance` of each other
///
/// Returns false when either geometry is empty.
pub fn is_within_distance(a: &Geometry, b: &Geometry, max_distance: f64) -> bool {
    let (a, b) = (PreparedGeometry::new(a), PreparedGeometry::new(b));
    if a.is_empty() || b.is_empty() || max_distance.is_nan() {
        return false;
    }

    if a.envelope().distance(b.envelope()) > max_distance {
        return false;
    }

    min_distance(&a, &b, max_distance) <= max_distance
}

/// Search for the minimum distance between two non-empty prepared geometries
///
/// The search stops as soon as a distance less than or equal to `stop_at`
/// is found; the returned value is then an upper bound of the minimum that
/// is itself `<= stop_at`.
pub fn min_distance(a: &PreparedGeometry, b: &PreparedGeometry, stop_at: f64) -> f64 {
    if a.envelope().intersects(b.envelope())
        && (contains_any(a, b) || contains_any(b, a))
    {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    macro_rules! update {
        ($value:expr) => {{
            let value = $value;
            if value < best {
                best = value;
                if best <= stop_at {
                    return best;
                }
            }
        }};
    }

    for &p in a.points() {
        for &q in b.points() {
            update!(point_distance(p, q));
        }
        for edge in b.edges() {
            update!(point_segment_distance(p, edge.start, edge.end));
        }
    }

    for &q in b.points() {
        for edge in a.edges() {
            update!(point_segment_distance(q, edge.start, edge.end));
        }
    }

    for edge in a.edges() {
        for other_edge in b.edges() {
            // Segments further apart than the best distance so far cannot improve it
            if edge.envelope.distance(&other_edge.envelope) >= best {
                continue;
            }
            update!(segment_distance(
                edge.start,
                edge.end,
                other_edge.start,
                other_edge.end
            ));
        }
    }

    best
}

/// Check whether some component of `inner` has a coordinate within the
/// polygons of `outer`
fn contains_any(outer: &PreparedGeometry, inner: &PreparedGeometry) -> bool {
    outer.has_polygons()
        && inner
            .representative_coords()
            .any(|coord| outer.locate_areal(coord) != Location::Exterior)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    fn geom(wkt_value: &str) -> Geometry {
        Geometry::from_str(wkt_value).unwrap()
    }

    #[rstest]
    #[case("POINT (0 0)", "POINT (3 4)", 5.0)]
    #[case("POINT (0 0)", "POINT (0 0)", 0.0)]
    #[case("POINT (0 5)", "LINESTRING (-10 0, 10 0)", 5.0)]
    #[case("POINT (20 0)", "LINESTRING (-10 0, 10 0)", 10.0)]
    #[case("LINESTRING (0 0, 2 2)", "LINESTRING (0 2, 2 0)", 0.0)]
    #[case("LINESTRING (0 0, 1 0)", "LINESTRING (0 2, 1 2)", 2.0)]
    #[case("POINT (5 5)", "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", 0.0)]
    #[case("POINT (15 5)", "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", 5.0)]
    #[case(
        "POINT (5 5)",
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (4 4, 6 4, 6 6, 4 6, 4 4))",
        1.0
    )]
    #[case(
        "LINESTRING (2 2, 3 3)",
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))",
        0.0
    )]
    #[case(
        "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))",
        "POLYGON ((4 0, 5 0, 5 1, 4 1, 4 0))",
        3.0
    )]
    #[case(
        "MULTIPOINT ((100 100), (0 7))",
        "GEOMETRYCOLLECTION (POINT (0 0), LINESTRING (10 10, 20 20))",
        7.0
    )]
    fn distances(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        assert_relative_eq!(distance(&geom(a), &geom(b)), expected);
        assert_relative_eq!(distance(&geom(b), &geom(a)), expected);
    }

    #[test]
    fn empty_distance() {
        assert_eq!(distance(&geom("POINT EMPTY"), &geom("POINT (1 1)")), 0.0);
        assert_eq!(
            distance(&geom("POLYGON EMPTY"), &geom("GEOMETRYCOLLECTION EMPTY")),
            0.0
        );
    }

    #[rstest]
    #[case("POINT (0 0)", "POINT (3 4)", 5.0, true)]
    #[case("POINT (0 0)", "POINT (3 4)", 4.999, false)]
    #[case("POINT (0 0)", "POINT (3 4)", 100.0, true)]
    #[case("POINT (0 0)", "POINT (0 0)", 0.0, true)]
    #[case("POINT (0 0)", "POINT (3 4)", -1.0, false)]
    #[case("LINESTRING (0 0, 1 0)", "LINESTRING (0 2, 1 2)", 2.0, true)]
    #[case("POINT (5 5)", "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", 0.0, true)]
    #[case("POINT EMPTY", "POINT (0 0)", 10.0, false)]
    fn within_distance(
        #[case] a: &str,
        #[case] b: &str,
        #[case] max_distance: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(is_within_distance(&geom(a), &geom(b), max_distance), expected);
        assert_eq!(is_within_distance(&geom(b), &geom(a), max_distance), expected);
    }
}
