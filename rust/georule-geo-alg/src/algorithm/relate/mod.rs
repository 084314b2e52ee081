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
//! DE-9IM relate
//!
//! Both geometries are prepared, the edges of each are noded against the
//! edges of the other and every node and piece contributes the dimension of
//! the point sets it witnesses to the matrix.
use georule_geometry::{Dimensions, Geometry};

use crate::algorithm::{
    locate::Location,
    noding::{node_edges, PieceLocation},
    prepared::{EdgeSource, PreparedGeometry},
};

mod matrix;

pub use matrix::RelationMatrix;

/// Compute the DE-9IM matrix of two geometries
pub fn relate(a: &Geometry, b: &Geometry) -> RelationMatrix {
    relate_prepared(&PreparedGeometry::new(a), &PreparedGeometry::new(b))
}

pub fn relate_prepared(a: &PreparedGeometry, b: &PreparedGeometry) -> RelationMatrix {
    let mut matrix = RelationMatrix::new(a.dimension(), b.dimension());
    matrix.set(
        Location::Exterior,
        Location::Exterior,
        Dimensions::TwoDimensional,
    );

    if a.is_empty() || b.is_empty() || !a.envelope().intersects(b.envelope()) {
        matrix.set(Location::Interior, Location::Exterior, a.dimension());
        matrix.set(Location::Boundary, Location::Exterior, a.boundary_dimension());
        matrix.set(Location::Exterior, Location::Interior, b.dimension());
        matrix.set(Location::Exterior, Location::Boundary, b.boundary_dimension());
        return matrix;
    }

    contribute(&mut ContributionSink::new(&mut matrix, false), a, b);
    contribute(&mut ContributionSink::new(&mut matrix, true), b, a);
    matrix
}

/// Writes entries for the geometry being visited, transposing them when the
/// arguments were swapped
struct ContributionSink<'a> {
    matrix: &'a mut RelationMatrix,
    transposed: bool,
}

impl<'a> ContributionSink<'a> {
    fn new(matrix: &'a mut RelationMatrix, transposed: bool) -> Self {
        Self { matrix, transposed }
    }

    fn add(&mut self, this: Location, other: Location, dimension: Dimensions) {
        if self.transposed {
            self.matrix.set_at_least(other, this, dimension);
        } else {
            self.matrix.set_at_least(this, other, dimension);
        }
    }
}

fn contribute(sink: &mut ContributionSink, this: &PreparedGeometry, other: &PreparedGeometry) {
    use Dimensions::{OneDimensional as L, TwoDimensional as A, ZeroDimensional as P};
    use Location::{Boundary as B, Exterior as E, Interior as I};

    for &point in this.points() {
        sink.add(this.locate(point), other.locate(point), P);
    }

    for &point in this.line_boundary() {
        sink.add(B, other.locate(point), P);
    }

    // Areal components not crossed by any linework of a lower dimensional
    // geometry still leave part of their interior outside of it
    if this.has_polygons() && other.dimension() < A {
        sink.add(I, E, A);
    }

    let noding = node_edges(this, other);
    for node in &noding.nodes {
        sink.add(node.location, node.other_location, P);
    }

    for piece in &noding.pieces {
        match (piece.source, piece.location) {
            (EdgeSource::Line, PieceLocation::Off(location)) => sink.add(I, location, L),
            (EdgeSource::Line, PieceLocation::OnLine | PieceLocation::BetweenRings) => {
                sink.add(I, I, L)
            }
            (EdgeSource::Line, PieceLocation::OnRing { .. }) => sink.add(I, B, L),
            (EdgeSource::Ring { .. }, PieceLocation::Off(location)) => {
                sink.add(B, location, L);
                sink.add(I, location, A);
                sink.add(E, location, A);
            }
            (EdgeSource::Ring { .. }, PieceLocation::OnLine) => {
                sink.add(B, I, L);
                sink.add(I, E, A);
            }
            (
                EdgeSource::Ring {
                    interior_on_left: this_side,
                },
                PieceLocation::OnRing {
                    interior_on_left: other_side,
                },
            ) => {
                sink.add(B, B, L);
                if this_side == other_side {
                    sink.add(I, I, A);
                } else {
                    sink.add(I, E, A);
                    sink.add(E, I, A);
                }
            }
            (EdgeSource::Ring { .. }, PieceLocation::BetweenRings) => {
                sink.add(B, I, L);
                sink.add(I, I, A);
                sink.add(E, I, A);
            }
        }
    }
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
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", "POINT (5 5)", "0F2FF1FF2")]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", "POINT (0 5)", "FF20F1FF2")]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", "POINT (20 5)", "FF2FF10F2")]
    #[case("LINESTRING (0 0, 2 2)", "LINESTRING (0 2, 2 0)", "0F1FF0102")]
    #[case("LINESTRING (0 0, 2 0)", "POINT (1 0)", "0F1FF0FF2")]
    #[case("LINESTRING (0 0, 2 0)", "POINT (0 0)", "FF10F0FF2")]
    #[case(
        "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))",
        "POLYGON ((1 1, 3 1, 3 3, 1 3, 1 1))",
        "212101212"
    )]
    #[case(
        "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))",
        "POLYGON ((0 0, 0 2, 2 2, 2 0, 0 0))",
        "2FFF1FFF2"
    )]
    #[case(
        "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))",
        "POLYGON ((2 2, 4 2, 4 4, 2 4, 2 2))",
        "FF2F01212"
    )]
    #[case(
        "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))",
        "POLYGON ((2 0, 4 0, 4 2, 2 2, 2 0))",
        "FF2F11212"
    )]
    #[case(
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))",
        "POLYGON ((2 2, 4 2, 4 4, 2 4, 2 2))",
        "212FF1FF2"
    )]
    #[case("LINESTRING (0 0, 2 0)", "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))", "F1FF0F212")]
    #[case("LINESTRING (-1 1, 3 1)", "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))", "101FF0212")]
    #[case("LINESTRING (0.5 1, 1.5 1)", "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))", "1FF0FF212")]
    #[case("POINT (0 0)", "POINT (0 0)", "0FFFFFFF2")]
    #[case("POINT (0 0)", "POINT (1 1)", "FF0FFF0F2")]
    #[case("MULTIPOINT ((0 0), (1 1))", "POINT (1 1)", "0F0FFFFF2")]
    fn classic_matrices(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        let matrix = relate(&geom(a), &geom(b));
        assert_eq!(matrix.to_string(), expected, "relate({a}, {b})");

        let reversed = relate(&geom(b), &geom(a));
        assert_eq!(reversed, matrix.transpose(), "relate({b}, {a})");
    }

    #[rstest]
    #[case("POINT EMPTY", "POINT (0 0)", "FFFFFF0F2")]
    #[case("POLYGON EMPTY", "LINESTRING (0 0, 1 1)", "FFFFFF102")]
    #[case("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))", "GEOMETRYCOLLECTION EMPTY", "FF2FF1FF2")]
    #[case("LINESTRING (0 0, 1 0, 1 1, 0 0)", "POINT (5 5)", "FF1FFF0F2")]
    fn empty_and_disjoint(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(relate(&geom(a), &geom(b)).to_string(), expected);
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = geom("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 8 2, 8 8, 2 8, 2 2))");
        // Point inside the hole is outside the polygon
        assert_eq!(relate(&polygon, &geom("POINT (5 5)")).to_string(), "FF2FF10F2");
        // Polygon filling the hole touches along the hole's boundary
        assert_eq!(
            relate(&polygon, &geom("POLYGON ((2 2, 8 2, 8 8, 2 8, 2 2))")).to_string(),
            "FF2F112F2"
        );
    }

    #[test]
    fn multipolygon_members() {
        let multi = geom("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((2 0, 3 0, 3 1, 2 1, 2 0)))");
        assert_eq!(relate(&multi, &geom("POINT (2.5 0.5)")).to_string(), "0F2FF1FF2");
        assert_eq!(relate(&multi, &geom("POINT (1.5 0.5)")).to_string(), "FF2FF10F2");
        assert_eq!(
            relate(&multi, &geom("LINESTRING (0.5 0.5, 2.5 0.5)")).to_string(),
            "1020F11F2"
        );
    }
}
