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
//! Noding of the edges of one geometry against the edges of another
//!
//! Every edge is split at its intersections with the other geometry's edges.
//! The resulting pieces either run along the other geometry's linework or
//! are entirely off it, in which case they lie in a single areal region of
//! the other geometry.
use georule_geometry::Coord;

use crate::algorithm::{
    locate::Location,
    prepared::{EdgeSource, PreparedGeometry},
    segment::{segment_intersection, segment_param, LineIntersection},
};

/// Location of a piece relative to the other geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceLocation {
    /// Off the other geometry's linework; areal location of the piece
    Off(Location),
    /// Along a line of the other geometry
    OnLine,
    /// Along a ring of the other geometry whose interior is on the given side
    /// (relative to the direction of the piece)
    OnRing { interior_on_left: bool },
    /// Along two rings of the other geometry, with its interior on both sides
    BetweenRings,
}

/// A sub-segment of an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub start: Coord,
    pub end: Coord,
    pub source: EdgeSource,
    pub location: PieceLocation,
}

/// An intersection point between an edge and the other geometry's edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub coord: Coord,
    /// Location relative to the geometry that was noded
    pub location: Location,
    /// Location relative to the other geometry
    pub other_location: Location,
}

#[derive(Debug, Clone, Default)]
pub struct Noding {
    pub pieces: Vec<Piece>,
    pub nodes: Vec<Node>,
}

struct Overlap {
    t0: f64,
    t1: f64,
    source: EdgeSource,
    same_direction: bool,
}

/// Split the edges of `this` at the edges of `other` and classify the pieces
pub fn node_edges(this: &PreparedGeometry, other: &PreparedGeometry) -> Noding {
    let mut noding = Noding::default();

    for edge in this.edges() {
        let mut splits = vec![(0.0, edge.start), (1.0, edge.end)];
        let mut overlaps = Vec::new();

        for other_edge in other.edges() {
            if !edge.envelope.intersects(&other_edge.envelope) {
                continue;
            }

            match segment_intersection(edge.start, edge.end, other_edge.start, other_edge.end) {
                None => {}
                Some(LineIntersection::SinglePoint {
                    intersection,
                    is_proper,
                }) => {
                    splits.push((segment_param(intersection, edge.start, edge.end), intersection));
                    noding.nodes.push(if is_proper {
                        Node {
                            coord: intersection,
                            location: source_location(edge.source),
                            other_location: source_location(other_edge.source),
                        }
                    } else {
                        Node {
                            coord: intersection,
                            location: this.locate(intersection),
                            other_location: other.locate(intersection),
                        }
                    });
                }
                Some(LineIntersection::Collinear { start, end }) => {
                    let t0 = segment_param(start, edge.start, edge.end);
                    let t1 = segment_param(end, edge.start, edge.end);
                    splits.push((t0, start));
                    splits.push((t1, end));
                    for coord in [start, end] {
                        noding.nodes.push(Node {
                            coord,
                            location: this.locate(coord),
                            other_location: other.locate(coord),
                        });
                    }

                    let direction = edge.end - edge.start;
                    let other_direction = other_edge.end - other_edge.start;
                    overlaps.push(Overlap {
                        t0: t0.min(t1),
                        t1: t0.max(t1),
                        source: other_edge.source,
                        same_direction: direction.x * other_direction.x
                            + direction.y * other_direction.y
                            > 0.0,
                    });
                }
            }
        }

        splits.sort_by(|a, b| a.0.total_cmp(&b.0));
        splits.dedup_by(|a, b| a.1 == b.1);

        for pair in splits.windows(2) {
            let ((t_start, start), (t_end, end)) = (pair[0], pair[1]);
            if start == end {
                continue;
            }

            let t_mid = (t_start + t_end) / 2.0;
            let location = classify(
                overlaps
                    .iter()
                    .filter(|overlap| overlap.t0 <= t_mid && t_mid <= overlap.t1),
                || {
                    other.locate_areal(Coord {
                        x: (start.x + end.x) / 2.0,
                        y: (start.y + end.y) / 2.0,
                    })
                },
            );

            noding.pieces.push(Piece {
                start,
                end,
                source: edge.source,
                location,
            });
        }
    }

    noding
}

fn source_location(source: EdgeSource) -> Location {
    match source {
        EdgeSource::Line => Location::Interior,
        EdgeSource::Ring { .. } => Location::Boundary,
    }
}

fn classify<'a>(
    overlaps: impl Iterator<Item = &'a Overlap>,
    locate_off: impl FnOnce() -> Location,
) -> PieceLocation {
    let mut on_line = false;
    let mut left = 0;
    let mut right = 0;

    for overlap in overlaps {
        match overlap.source {
            EdgeSource::Line => on_line = true,
            EdgeSource::Ring { interior_on_left } => {
                if interior_on_left == overlap.same_direction {
                    left += 1;
                } else {
                    right += 1;
                }
            }
        }
    }

    match (left > 0, right > 0) {
        (true, true) => PieceLocation::BetweenRings,
        (true, false) => PieceLocation::OnRing {
            interior_on_left: true,
        },
        (false, true) => PieceLocation::OnRing {
            interior_on_left: false,
        },
        (false, false) if on_line => PieceLocation::OnLine,
        (false, false) => PieceLocation::Off(locate_off()),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use georule_geometry::Geometry;

    use super::*;

    fn prepare(wkt_value: &str) -> PreparedGeometry {
        PreparedGeometry::new(&Geometry::from_str(wkt_value).unwrap())
    }

    fn c(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }

    #[test]
    fn line_through_polygon() {
        let line = prepare("LINESTRING (-1 1, 3 1)");
        let polygon = prepare("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))");
        let noding = node_edges(&line, &polygon);

        let pieces = noding
            .pieces
            .iter()
            .map(|p| (p.start, p.end, p.location))
            .collect::<Vec<_>>();
        assert_eq!(
            pieces,
            vec![
                (c(-1.0, 1.0), c(0.0, 1.0), PieceLocation::Off(Location::Exterior)),
                (c(0.0, 1.0), c(2.0, 1.0), PieceLocation::Off(Location::Interior)),
                (c(2.0, 1.0), c(3.0, 1.0), PieceLocation::Off(Location::Exterior)),
            ]
        );

        assert_eq!(noding.nodes.len(), 2);
        assert!(noding.nodes.iter().all(|node| node.location == Location::Interior
            && node.other_location == Location::Boundary));
    }

    #[test]
    fn shared_edges() {
        // Two squares sharing the edge x = 2 with interiors on opposite sides
        let left = prepare("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))");
        let right = prepare("POLYGON ((2 0, 4 0, 4 2, 2 2, 2 0))");
        let noding = node_edges(&left, &right);
        let shared = noding
            .pieces
            .iter()
            .filter(|p| p.start.x == 2.0 && p.end.x == 2.0)
            .collect::<Vec<_>>();
        assert_eq!(shared.len(), 1);
        // Left square is ccw: along (2 0) -> (2 2) its interior is on the left,
        // the interior of the right square is on the right.
        assert_eq!(
            shared[0].location,
            PieceLocation::OnRing {
                interior_on_left: false
            }
        );

        // Same square: interiors on the same side
        let noding = node_edges(&left, &left);
        assert!(noding.pieces.iter().all(|p| p.location
            == PieceLocation::OnRing {
                interior_on_left: true
            }));
    }

    #[test]
    fn partial_overlap_with_line() {
        let line = prepare("LINESTRING (0 0, 4 0)");
        let other = prepare("LINESTRING (1 0, 2 0, 2 5)");
        let noding = node_edges(&line, &other);
        let locations = noding.pieces.iter().map(|p| p.location).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec![
                PieceLocation::Off(Location::Exterior),
                PieceLocation::OnLine,
                PieceLocation::Off(Location::Exterior),
            ]
        );
    }
}
