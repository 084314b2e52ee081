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
use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use crate::{
    error::GeometryError,
    types::{Coord, Geometry, LineString, Polygon},
    wkt_reader::parse_wkt,
};

/// Write the canonical Well-Known Text of a geometry
///
/// The output uses one space after the type keyword, `", "` between
/// coordinates and members, the shortest round-trip representation of each
/// ordinate (in exponent notation for magnitudes below 1e-6 or from 1e16 up)
/// and parenthesised MULTIPOINT members. Parsing the output yields a
/// geometry equal to the input.
pub fn write_wkt(geom: &Geometry) -> String {
    geom.to_string()
}

/// Parse and re-serialize Well-Known Text in canonical form
pub fn normalize_wkt(text: &str) -> Result<String, GeometryError> {
    Ok(write_wkt(&parse_wkt(text)?))
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let keyword = self.kind().keyword();
        if self.is_empty() && !has_empty_members(self) {
            return write!(f, "{keyword} EMPTY");
        }

        f.write_str(keyword)?;
        f.write_char(' ')?;
        write_body(f, self)
    }
}

// A collection whose members are all empty is still written with its members
// so that the round trip preserves structure.
fn has_empty_members(geom: &Geometry) -> bool {
    match geom {
        Geometry::MultiLineString(mls) => !mls.line_strings().is_empty(),
        Geometry::MultiPolygon(mp) => !mp.polygons().is_empty(),
        Geometry::GeometryCollection(gc) => !gc.geometries().is_empty(),
        _ => false,
    }
}

fn write_body(f: &mut Formatter<'_>, geom: &Geometry) -> FmtResult {
    match geom {
        Geometry::Point(point) => match point.coord() {
            Some(coord) => {
                f.write_char('(')?;
                write_coord(f, coord)?;
                f.write_char(')')
            }
            None => f.write_str("EMPTY"),
        },
        Geometry::LineString(ls) => write_line_string(f, ls),
        Geometry::Polygon(poly) => write_polygon(f, poly),
        Geometry::MultiPoint(mp) => write_list(f, mp.points(), |f, coord| {
            f.write_char('(')?;
            write_coord(f, *coord)?;
            f.write_char(')')
        }),
        Geometry::MultiLineString(mls) => write_list(f, mls.line_strings(), write_line_string),
        Geometry::MultiPolygon(mp) => write_list(f, mp.polygons(), write_polygon),
        Geometry::GeometryCollection(gc) => {
            write_list(f, gc.geometries(), |f, child| write!(f, "{child}"))
        }
    }
}

fn write_coord(f: &mut Formatter<'_>, coord: Coord) -> FmtResult {
    write_ordinate(f, coord.x)?;
    f.write_char(' ')?;
    write_ordinate(f, coord.y)
}

// Magnitudes outside [1e-6, 1e16) switch to exponent notation so that
// extreme ordinates stay short. Both forms are shortest round-trip.
fn write_ordinate(f: &mut Formatter<'_>, value: f64) -> FmtResult {
    let magnitude = value.abs();
    if value != 0.0 && value.is_finite() && !(1e-6..1e16).contains(&magnitude) {
        write!(f, "{value:e}")
    } else {
        write!(f, "{value}")
    }
}

fn write_line_string(f: &mut Formatter<'_>, ls: &LineString) -> FmtResult {
    write_list(f, ls.coords(), |f, coord| write_coord(f, *coord))
}

fn write_polygon(f: &mut Formatter<'_>, poly: &Polygon) -> FmtResult {
    if poly.is_empty() {
        return f.write_str("EMPTY");
    }

    let rings = poly.rings().collect::<Vec<_>>();
    write_list(f, &rings, |f, ring| write_line_string(f, ring))
}

fn write_list<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut Formatter<'_>, &T) -> FmtResult,
) -> FmtResult {
    if items.is_empty() {
        return f.write_str("EMPTY");
    }

    f.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_char(')')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("POINT (1 2)", "POINT (1 2)")]
    #[case("POINT(1.5 -2.25)", "POINT (1.5 -2.25)")]
    #[case("POINT Z (1 2 3)", "POINT (1 2)")]
    #[case("LINESTRING(0 0,1 1 , 2 0)", "LINESTRING (0 0, 1 1, 2 0)")]
    #[case(
        "POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,2 1,2 2,1 1))",
        "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (1 1, 2 1, 2 2, 1 1))"
    )]
    #[case("MULTIPOINT (1 2, 3 4)", "MULTIPOINT ((1 2), (3 4))")]
    #[case("MULTILINESTRING ((0 0,1 1),(2 2,3 3))", "MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))")]
    #[case(
        "MULTIPOLYGON (((0 0,1 0,1 1,0 0)),((5 5,6 5,6 6,5 5)))",
        "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))"
    )]
    #[case(
        "GEOMETRYCOLLECTION (POINT (1 2),LINESTRING (0 0,1 1))",
        "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))"
    )]
    #[case(
        "GEOMETRYCOLLECTION (POINT EMPTY, POINT (1 2))",
        "GEOMETRYCOLLECTION (POINT EMPTY, POINT (1 2))"
    )]
    #[case("point empty", "POINT EMPTY")]
    #[case("LINESTRING EMPTY", "LINESTRING EMPTY")]
    #[case("POLYGON EMPTY", "POLYGON EMPTY")]
    #[case("MULTIPOINT EMPTY", "MULTIPOINT EMPTY")]
    #[case("MULTILINESTRING EMPTY", "MULTILINESTRING EMPTY")]
    #[case("MULTIPOLYGON EMPTY", "MULTIPOLYGON EMPTY")]
    #[case("GEOMETRYCOLLECTION EMPTY", "GEOMETRYCOLLECTION EMPTY")]
    fn normalize(#[case] wkt_value: &str, #[case] expected: &str) {
        let normalized = normalize_wkt(wkt_value).unwrap();
        assert_eq!(normalized, expected);

        // Canonical output is a fixed point and parses to an equal geometry
        assert_eq!(normalize_wkt(&normalized).unwrap(), normalized);
        assert_eq!(
            parse_wkt(&normalized).unwrap(),
            parse_wkt(wkt_value).unwrap()
        );
    }

    #[test]
    fn shortest_float_format() {
        let geom = parse_wkt("POINT (0.1 100000)").unwrap();
        assert_eq!(write_wkt(&geom), "POINT (0.1 100000)");

        let geom = parse_wkt("POINT (0.30000000000000004 -1)").unwrap();
        assert_eq!(write_wkt(&geom), "POINT (0.30000000000000004 -1)");
    }

    #[rstest]
    #[case("POINT (1e300 -0.1)", "POINT (1e300 -0.1)")]
    #[case("POINT (10000000000000000 0.000001)", "POINT (1e16 0.000001)")]
    #[case("POINT (-0.00000015 1234567890123456)", "POINT (-1.5e-7 1234567890123456)")]
    #[case("LINESTRING (0 0, 2.5E-300 -4e20)", "LINESTRING (0 0, 2.5e-300 -4e20)")]
    fn exponent_format(#[case] wkt_value: &str, #[case] expected: &str) {
        let geom = parse_wkt(wkt_value).unwrap();
        assert_eq!(write_wkt(&geom), expected);
        assert_eq!(parse_wkt(expected).unwrap(), geom);
    }

    #[test]
    fn normalize_error() {
        let err = normalize_wkt("LINESTRING (0 0").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { .. }));
    }
}
