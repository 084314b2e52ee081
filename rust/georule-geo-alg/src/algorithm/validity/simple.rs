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
use georule_geometry::{Coord, Geometry, GeometryError, LineString};

use crate::algorithm::segment::{segment_intersection, LineIntersection};

/// Check whether a geometry has no anomalous self-intersections
///
/// Line strings may only touch themselves at the shared end point of a
/// closed line, the members of a multilinestring may only meet at their end
/// points, multipoints may not repeat a point and polygons must have simple
/// rings. Collections are simple if all of their members are.
pub fn is_simple(geom: &Geometry) -> bool {
    match geom {
        Geometry::Point(_) => true,
        Geometry::MultiPoint(multi) => {
            let points = multi.points();
            points
                .iter()
                .enumerate()
                .all(|(i, p)| !points[..i].contains(p))
        }
        Geometry::LineString(line_string) => is_simple_line(line_string.coords()),
        Geometry::MultiLineString(multi) => is_simple_lines(multi.line_strings()),
        Geometry::Polygon(polygon) => polygon.rings().all(|ring| is_simple_line(ring.coords())),
        Geometry::MultiPolygon(multi) => multi
            .polygons()
            .iter()
            .all(|polygon| polygon.rings().all(|ring| is_simple_line(ring.coords()))),
        Geometry::GeometryCollection(collection) => collection.geometries().iter().all(is_simple),
    }
}

fn is_simple_line(coords: &[Coord]) -> bool {
    let mut coords = coords.to_vec();
    coords.dedup();
    if coords.len() < 2 {
        return true;
    }

    let is_closed = coords[0] == coords[coords.len() - 1];
    let num_edges = coords.len() - 1;
    for i in 0..num_edges {
        for j in (i + 1)..num_edges {
            let Some(intersection) =
                segment_intersection(coords[i], coords[i + 1], coords[j], coords[j + 1])
            else {
                continue;
            };

            match intersection {
                // Consecutive edges folding back on each other
                LineIntersection::Collinear { .. } => return false,
                LineIntersection::SinglePoint { intersection, .. } => {
                    let shares_vertex = j == i + 1 && intersection == coords[j];
                    let closes_line = is_closed
                        && i == 0
                        && j == num_edges - 1
                        && intersection == coords[0];
                    if !shares_vertex && !closes_line {
                        return false;
                    }
                }
            }
        }
    }

    true
}

fn is_simple_lines(line_strings: &[LineString]) -> bool {
    if !line_strings.iter().all(|ls| is_simple_line(ls.coords())) {
        return false;
    }

    for (i, a) in line_strings.iter().enumerate() {
        for b in &line_strings[(i + 1)..] {
            for (a1, a2) in a.segments().filter(|(s, e)| s != e) {
                for (b1, b2) in b.segments().filter(|(s, e)| s != e) {
                    match segment_intersection(a1, a2, b1, b2) {
                        Some(LineIntersection::Collinear { .. }) => return false,
                        Some(LineIntersection::SinglePoint { intersection, .. })
                            if !is_endpoint(intersection, a) || !is_endpoint(intersection, b) =>
                        {
                            return false;
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    true
}

fn is_endpoint(coord: Coord, line_string: &LineString) -> bool {
    !line_string.is_closed()
        && (line_string.start() == Some(coord) || line_string.end() == Some(coord))
}

fn expect_line_string<'a>(
    geom: &'a Geometry,
    operation: &str,
) -> Result<&'a LineString, GeometryError> {
    match geom {
        Geometry::LineString(line_string) => Ok(line_string),
        other => Err(GeometryError::InvalidArgument(format!(
            "{operation} can only be evaluated on a LineString but got {}",
            other.geometry_type()
        ))),
    }
}

/// Check whether a line string starts where it ends
///
/// Empty line strings are not closed. Fails for any other kind of geometry.
pub fn is_closed(geom: &Geometry) -> Result<bool, GeometryError> {
    Ok(expect_line_string(geom, "isClosed")?.is_closed())
}

/// Check whether a line string is closed and simple
///
/// Fails for any other kind of geometry.
pub fn is_ring(geom: &Geometry) -> Result<bool, GeometryError> {
    let line_string = expect_line_string(geom, "isRing")?;
    Ok(line_string.is_closed() && is_simple_line(line_string.coords()))
}
