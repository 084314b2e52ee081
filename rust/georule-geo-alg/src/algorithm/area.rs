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
use georule_geometry::{Component, Coord, Geometry};

/// Signed area of a closed ring (positive when counter-clockwise)
pub fn signed_ring_area(ring: &[Coord]) -> f64 {
    if ring.len() < 4 {
        return 0.0;
    }

    // Shift to the first coordinate to reduce cancellation for rings far
    // from the origin
    let origin = ring[0];
    let mut twice_area = 0.0;
    for pair in ring.windows(2) {
        let (a, b) = (pair[0] - origin, pair[1] - origin);
        twice_area += a.x * b.y - b.x * a.y;
    }

    twice_area / 2.0
}

/// Planar area of a geometry
///
/// Non-areal components contribute nothing; holes are subtracted from their
/// shell regardless of ring orientation.
pub fn area(geom: &Geometry) -> f64 {
    geom.components()
        .into_iter()
        .map(|component| match component {
            Component::Polygon(polygon) => {
                let mut rings = polygon.rings();
                let shell = rings
                    .next()
                    .map(|ring| signed_ring_area(ring.coords()).abs())
                    .unwrap_or(0.0);
                rings.fold(shell, |acc, hole| {
                    acc - signed_ring_area(hole.coords()).abs()
                })
            }
            _ => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn ring_orientation() {
        let ccw = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
        ];
        assert_eq!(signed_ring_area(&ccw), 1.0);

        let mut cw = ccw;
        cw.reverse();
        assert_eq!(signed_ring_area(&cw), -1.0);

        assert_eq!(signed_ring_area(&ccw[..2]), 0.0);
    }

    #[rstest]
    #[case("POINT (1 1)", 0.0)]
    #[case("LINESTRING (0 0, 10 10)", 0.0)]
    #[case("POLYGON EMPTY", 0.0)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", 100.0)]
    #[case("POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))", 100.0)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))", 96.0)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 4, 4 4, 4 2, 2 2))", 96.0)]
    #[case("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((5 5, 7 5, 7 7, 5 7, 5 5)))", 5.0)]
    #[case("GEOMETRYCOLLECTION (POINT (0 0), POLYGON ((0 0, 3 0, 0 4, 0 0)))", 6.0)]
    fn areas(#[case] wkt_value: &str, #[case] expected: f64) {
        let geom = Geometry::from_str(wkt_value).unwrap();
        assert_relative_eq!(area(&geom), expected);
    }

    #[test]
    fn far_from_origin() {
        let geom = Geometry::from_str(
            "POLYGON ((1000000 1000000, 1000001 1000000, 1000001 1000001, 1000000 1000001, 1000000 1000000))",
        )
        .unwrap();
        assert_eq!(area(&geom), 1.0);
    }
}
