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

/// Check whether a geometry is an axis-aligned rectangle
///
/// The geometry must be a polygon without holes whose shell has exactly five
/// coordinates, all of them on the sides of its envelope, with consecutive
/// edges alternating between horizontal and vertical.
pub fn is_rectangle(geom: &Geometry) -> bool {
    let Geometry::Polygon(polygon) = geom else {
        return false;
    };

    if polygon.is_empty() || !polygon.interiors().is_empty() {
        return false;
    }

    let shell = polygon.exterior().coords();
    if shell.len() != 5 {
        return false;
    }

    let envelope = geom.envelope();
    let (min, max) = (envelope.min(), envelope.max());
    let on_envelope = shell
        .iter()
        .all(|c| (c.x == min.x || c.x == max.x) && (c.y == min.y || c.y == max.y));
    if !on_envelope {
        return false;
    }

    shell.windows(2).all(|pair| {
        let x_changed = pair[0].x != pair[1].x;
        let y_changed = pair[0].y != pair[1].y;
        x_changed != y_changed
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("POLYGON ((0 0, 10 0, 10 5, 0 5, 0 0))", true)]
    #[case("POLYGON ((0 0, 0 5, 10 5, 10 0, 0 0))", true)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))", false)]
    #[case("POLYGON ((0 0, 10 0, 10 5, 5 5, 0 5, 0 0))", false)]
    #[case("POLYGON ((0 5, 5 0, 10 5, 5 10, 0 5))", false)]
    #[case("POLYGON ((0 0, 10 5, 10 0, 0 5, 0 0))", false)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 0, 0 0))", false)]
    #[case("POLYGON EMPTY", false)]
    #[case("LINESTRING (0 0, 10 0, 10 5, 0 5, 0 0)", false)]
    #[case("MULTIPOLYGON (((0 0, 10 0, 10 5, 0 5, 0 0)))", false)]
    fn rectangles(#[case] wkt_value: &str, #[case] expected: bool) {
        let geom = Geometry::from_str(wkt_value).unwrap();
        assert_eq!(is_rectangle(&geom), expected, "{wkt_value}");
    }
}
