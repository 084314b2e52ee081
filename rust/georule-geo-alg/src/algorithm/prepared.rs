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
//! Prepared geometries: the components, edges and envelope of a geometry
//! extracted once per evaluation.
use georule_geometry::{Component, Coord, Dimensions, Envelope, Geometry};

use crate::algorithm::{
    area::signed_ring_area,
    locate::{locate_in_polygon, locate_on_line, Location, LocationAccumulator},
};

/// Where an edge of a prepared geometry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSource {
    /// A segment of a line string
    Line,
    /// A segment of a polygon ring; `interior_on_left` is relative to the
    /// direction from `start` to `end`
    Ring { interior_on_left: bool },
}

/// A non-degenerate segment of a prepared geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Coord,
    pub end: Coord,
    pub source: EdgeSource,
    pub envelope: Envelope,
}

impl Edge {
    fn new(start: Coord, end: Coord, source: EdgeSource) -> Self {
        Self {
            start,
            end,
            source,
            envelope: Envelope::from_segment(start, end),
        }
    }

    pub fn is_ring(&self) -> bool {
        matches!(self.source, EdgeSource::Ring { .. })
    }
}

/// A geometry decomposed for evaluation
///
/// Repeated consecutive coordinates are removed from lines and rings; a line
/// that collapses to a single coordinate is treated as a point.
#[derive(Debug, Clone, Default)]
pub struct PreparedGeometry {
    envelope: Envelope,
    points: Vec<Coord>,
    lines: Vec<Vec<Coord>>,
    polygons: Vec<Vec<Vec<Coord>>>,
    line_boundary: Vec<Coord>,
    edges: Vec<Edge>,
}

impl PreparedGeometry {
    pub fn new(geom: &Geometry) -> Self {
        let mut prepared = Self::default();

        for component in geom.components() {
            match component {
                Component::Point(coord) => prepared.add_point(coord),
                Component::LineString(ls) => prepared.add_line(ls.coords()),
                Component::Polygon(poly) => {
                    let rings = poly
                        .rings()
                        .map(|ring| dedup_coords(ring.coords()))
                        .collect::<Vec<_>>();
                    prepared.add_polygon(rings);
                }
            }
        }

        prepared.line_boundary = mod2_boundary(&prepared.lines);
        prepared
    }

    /// Prepare only the polygonal components of a geometry
    pub fn new_polygonal(geom: &Geometry) -> Self {
        let mut prepared = Self::default();

        for component in geom.components() {
            if let Component::Polygon(poly) = component {
                let rings = poly
                    .rings()
                    .map(|ring| dedup_coords(ring.coords()))
                    .collect::<Vec<_>>();
                prepared.add_polygon(rings);
            }
        }

        prepared
    }

    fn add_point(&mut self, coord: Coord) {
        self.envelope = self.envelope.merge_coord(coord);
        if !self.points.contains(&coord) {
            self.points.push(coord);
        }
    }

    fn add_line(&mut self, coords: &[Coord]) {
        let line = dedup_coords(coords);
        if line.len() == 1 {
            self.add_point(line[0]);
            return;
        }

        for pair in line.windows(2) {
            self.envelope = self.envelope.merge_coord(pair[0]).merge_coord(pair[1]);
            self.edges.push(Edge::new(pair[0], pair[1], EdgeSource::Line));
        }
        self.lines.push(line);
    }

    fn add_polygon(&mut self, rings: Vec<Vec<Coord>>) {
        for (i, ring) in rings.iter().enumerate() {
            let is_ccw = signed_ring_area(ring) >= 0.0;
            // The interior of a polygon is left of a ccw shell and right of a ccw hole
            let interior_on_left = if i == 0 { is_ccw } else { !is_ccw };
            for pair in ring.windows(2) {
                self.envelope = self.envelope.merge_coord(pair[0]).merge_coord(pair[1]);
                self.edges.push(Edge::new(
                    pair[0],
                    pair[1],
                    EdgeSource::Ring { interior_on_left },
                ));
            }
        }
        self.polygons.push(rings);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn lines(&self) -> &[Vec<Coord>] {
        &self.lines
    }

    /// Polygons as lists of rings (shell first)
    pub fn polygons(&self) -> &[Vec<Vec<Coord>>] {
        &self.polygons
    }

    /// Line end points that are on the boundary by the Mod-2 rule
    pub fn line_boundary(&self) -> &[Coord] {
        &self.line_boundary
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_polygons(&self) -> bool {
        !self.polygons.is_empty()
    }

    /// Effective topological dimension of the non-empty components
    pub fn dimension(&self) -> Dimensions {
        if !self.polygons.is_empty() {
            Dimensions::TwoDimensional
        } else if !self.lines.is_empty() {
            Dimensions::OneDimensional
        } else if !self.points.is_empty() {
            Dimensions::ZeroDimensional
        } else {
            Dimensions::Empty
        }
    }

    /// Effective dimension of the boundary of the non-empty components
    pub fn boundary_dimension(&self) -> Dimensions {
        if !self.polygons.is_empty() {
            Dimensions::OneDimensional
        } else if !self.line_boundary.is_empty() {
            Dimensions::ZeroDimensional
        } else {
            Dimensions::Empty
        }
    }

    /// A coordinate of every component, used to detect components that lie
    /// entirely within another geometry
    pub fn representative_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points
            .iter()
            .copied()
            .chain(self.lines.iter().map(|line| line[0]))
            .chain(self.polygons.iter().map(|rings| rings[0][0]))
    }

    /// Locate a coordinate relative to the whole geometry
    pub fn locate(&self, p: Coord) -> Location {
        if !self.envelope.contains_coord(p) {
            return Location::Exterior;
        }

        let mut accumulator = LocationAccumulator::default();
        if self.points.contains(&p) {
            accumulator.update(Location::Interior);
        }
        for line in &self.lines {
            accumulator.update(locate_on_line(p, line));
        }
        for rings in &self.polygons {
            accumulator.update(locate_in_polygon(p, rings));
        }
        accumulator.location()
    }

    /// Locate a coordinate relative to the polygonal components only
    pub fn locate_areal(&self, p: Coord) -> Location {
        if !self.envelope.contains_coord(p) {
            return Location::Exterior;
        }

        let mut accumulator = LocationAccumulator::default();
        for rings in &self.polygons {
            accumulator.update(locate_in_polygon(p, rings));
        }
        accumulator.location()
    }
}

fn dedup_coords(coords: &[Coord]) -> Vec<Coord> {
    let mut out = coords.to_vec();
    out.dedup();
    out
}

fn mod2_boundary(lines: &[Vec<Coord>]) -> Vec<Coord> {
    let mut counts: Vec<(Coord, usize)> = Vec::new();
    for line in lines {
        let (start, end) = (line[0], line[line.len() - 1]);
        if start == end {
            continue;
        }

        for endpoint in [start, end] {
            match counts.iter_mut().find(|(c, _)| *c == endpoint) {
                Some((_, count)) => *count += 1,
                None => counts.push((endpoint, 1)),
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| count % 2 == 1)
        .map(|(c, _)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    fn prepare(wkt_value: &str) -> PreparedGeometry {
        PreparedGeometry::new(&Geometry::from_str(wkt_value).unwrap())
    }

    #[test]
    fn components() {
        let prepared = prepare(
            "GEOMETRYCOLLECTION (POINT (1 1), POINT (1 1), LINESTRING (0 0, 0 0, 2 0), \
             POLYGON ((0 0, 4 0, 4 4, 0 0)), LINESTRING (7 7, 7 7))",
        );
        assert_eq!(prepared.points().len(), 2);
        assert_eq!(prepared.lines().len(), 1);
        assert_eq!(prepared.lines()[0].len(), 2);
        assert_eq!(prepared.polygons().len(), 1);
        assert_eq!(prepared.edges().len(), 4);
        assert_eq!(prepared.dimension(), Dimensions::TwoDimensional);
        assert_eq!(prepared.boundary_dimension(), Dimensions::OneDimensional);
        assert_eq!(prepared.envelope(), &Envelope::xy((0, 7), (0, 7)));
    }

    #[test]
    fn empty() {
        for prepared in [PreparedGeometry::default(), prepare("GEOMETRYCOLLECTION EMPTY")] {
            assert!(prepared.is_empty());
            assert!(prepared.envelope().is_empty());
            assert!(prepared.edges().is_empty());
        }
    }

    #[test]
    fn ring_sides() {
        // Shell is clockwise, hole is counter-clockwise
        let prepared =
            prepare("POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))");
        let sides = prepared
            .edges()
            .iter()
            .map(|e| e.source)
            .collect::<Vec<_>>();
        assert_eq!(
            sides[0],
            EdgeSource::Ring {
                interior_on_left: false
            }
        );
        assert_eq!(
            sides[4],
            EdgeSource::Ring {
                interior_on_left: false
            }
        );

        let prepared = prepare("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 4, 4 4, 4 2, 2 2))");
        assert!(prepared
            .edges()
            .iter()
            .all(|e| e.source == EdgeSource::Ring { interior_on_left: true }));
    }

    #[rstest]
    #[case("LINESTRING (0 0, 1 1)", 2, 0)]
    #[case("LINESTRING (0 0, 1 0, 1 1, 0 0)", 0, -1)]
    #[case("MULTILINESTRING ((0 0, 1 1), (1 1, 2 2))", 2, 0)]
    #[case("MULTILINESTRING ((0 0, 1 1), (1 1, 2 2), (1 1, 1 5))", 4, 0)]
    #[case("MULTIPOINT ((0 0), (1 1))", 0, -1)]
    fn boundary(
        #[case] wkt_value: &str,
        #[case] num_boundary: usize,
        #[case] boundary_dimension: i32,
    ) {
        let prepared = prepare(wkt_value);
        assert_eq!(prepared.line_boundary().len(), num_boundary);
        assert_eq!(prepared.boundary_dimension().as_i32(), boundary_dimension);
    }

    #[test]
    fn locate() {
        let prepared = prepare(
            "GEOMETRYCOLLECTION (POINT (20 20), MULTILINESTRING ((10 0, 12 0), (12 0, 14 0)), \
             POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0)))",
        );
        let c = |x: f64, y: f64| Coord { x, y };
        assert_eq!(prepared.locate(c(20.0, 20.0)), Location::Interior);
        assert_eq!(prepared.locate(c(10.0, 0.0)), Location::Boundary);
        assert_eq!(prepared.locate(c(12.0, 0.0)), Location::Interior);
        assert_eq!(prepared.locate(c(13.0, 0.0)), Location::Interior);
        assert_eq!(prepared.locate(c(2.0, 2.0)), Location::Interior);
        assert_eq!(prepared.locate(c(4.0, 2.0)), Location::Boundary);
        assert_eq!(prepared.locate(c(8.0, 8.0)), Location::Exterior);
        assert_eq!(prepared.locate(c(100.0, 8.0)), Location::Exterior);

        assert_eq!(prepared.locate_areal(c(20.0, 20.0)), Location::Exterior);
        assert_eq!(prepared.locate_areal(c(2.0, 2.0)), Location::Interior);
    }
}
