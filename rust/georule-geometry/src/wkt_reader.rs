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
use std::{fmt::Display, str::FromStr};

use geo_traits::{
    CoordTrait, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
};
use wkt::Wkt;

use crate::{
    error::GeometryError,
    types::{
        Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
        MultiPolygon, Point, Polygon,
    },
};

/// Parse Well-Known Text into a [Geometry]
///
/// Tokenizing is performed by the `wkt` crate; the result is validated
/// against the invariants of the model (closed rings with at least four
/// coordinates, line strings with zero or at least two coordinates, no empty
/// MULTIPOINT members). Z and M ordinates are accepted and dropped. Any
/// failure is reported as [GeometryError::Parse] including the input text.
pub fn parse_wkt(text: &str) -> Result<Geometry, GeometryError> {
    let wkt = Wkt::<f64>::from_str(text).map_err(|err| parse_error(text, err))?;
    from_geometry_trait(&wkt).map_err(|err| parse_error(text, err))
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wkt(s)
    }
}

fn parse_error(text: &str, reason: impl Display) -> GeometryError {
    GeometryError::Parse {
        wkt: text.to_string(),
        reason: reason.to_string(),
    }
}

// GeometryCollection is recursive and resolving the generic recursion through
// the trait's associated types is problematic for some compiler versions in
// release mode. Collections are handled by a free function that matches the
// child type inline and only recurses for nested collections.
macro_rules! convert_as_type {
    ($geom_type:expr) => {
        match $geom_type {
            GeometryType::Point(point) => Ok(Geometry::Point(to_point(point))),
            GeometryType::LineString(ls) => to_line_string(ls).map(Geometry::LineString),
            GeometryType::Polygon(poly) => to_polygon(poly).map(Geometry::Polygon),
            GeometryType::MultiPoint(mp) => to_multi_point(mp).map(Geometry::MultiPoint),
            GeometryType::MultiLineString(mls) => {
                to_multi_line_string(mls).map(Geometry::MultiLineString)
            }
            GeometryType::MultiPolygon(mp) => to_multi_polygon(mp).map(Geometry::MultiPolygon),
            GeometryType::GeometryCollection(gc) => {
                to_geometry_collection(gc).map(Geometry::GeometryCollection)
            }
            _ => Err(GeometryError::Invalid(
                "Unsupported geometry type".to_string(),
            )),
        }
    };
}

fn from_geometry_trait<G: GeometryTrait<T = f64>>(geom: &G) -> Result<Geometry, GeometryError> {
    convert_as_type!(geom.as_type())
}

fn to_geometry_collection<GC: GeometryCollectionTrait<T = f64>>(
    geom: &GC,
) -> Result<GeometryCollection, GeometryError> {
    let geometries = geom
        .geometries()
        .map(|child| convert_as_type!(child.as_type()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GeometryCollection::new(geometries))
}

fn to_coord(coord: impl CoordTrait<T = f64>) -> Coord {
    Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

fn to_point(point: &impl PointTrait<T = f64>) -> Point {
    match point.coord() {
        Some(coord) => Point::from(to_coord(coord)),
        None => Point::empty(),
    }
}

fn to_line_string(ls: &impl LineStringTrait<T = f64>) -> Result<LineString, GeometryError> {
    LineString::try_new(ls.coords().map(to_coord).collect())
}

fn to_polygon(poly: &impl PolygonTrait<T = f64>) -> Result<Polygon, GeometryError> {
    let exterior = match poly.exterior() {
        Some(ring) => to_line_string(&ring)?,
        None => LineString::empty(),
    };
    let interiors = poly
        .interiors()
        .map(|ring| to_line_string(&ring))
        .collect::<Result<Vec<_>, _>>()?;
    Polygon::try_new(exterior, interiors)
}

fn to_multi_point(mp: &impl MultiPointTrait<T = f64>) -> Result<MultiPoint, GeometryError> {
    let points = mp
        .points()
        .map(|point| {
            point.coord().map(to_coord).ok_or_else(|| {
                GeometryError::Invalid("MultiPoint cannot contain an empty point".to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiPoint::new(points))
}

fn to_multi_line_string(
    mls: &impl MultiLineStringTrait<T = f64>,
) -> Result<MultiLineString, GeometryError> {
    let line_strings = mls
        .line_strings()
        .map(|ls| to_line_string(&ls))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiLineString::new(line_strings))
}

fn to_multi_polygon(mp: &impl MultiPolygonTrait<T = f64>) -> Result<MultiPolygon, GeometryError> {
    let polygons = mp
        .polygons()
        .map(|poly| to_polygon(&poly))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiPolygon::new(polygons))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::types::GeometryKind;

    #[rstest]
    #[case("POINT (1 2)", GeometryKind::Point)]
    #[case("point(1 2)", GeometryKind::Point)]
    #[case("POINT Z (1 2 3)", GeometryKind::Point)]
    #[case("LINESTRING (0 0, 1 1, 2 0)", GeometryKind::LineString)]
    #[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))", GeometryKind::Polygon)]
    #[case("MULTIPOINT ((1 2), (3 4))", GeometryKind::MultiPoint)]
    #[case("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))", GeometryKind::MultiLineString)]
    #[case("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)))", GeometryKind::MultiPolygon)]
    #[case(
        "GEOMETRYCOLLECTION (POINT (1 2), GEOMETRYCOLLECTION (LINESTRING (0 0, 1 1)))",
        GeometryKind::GeometryCollection
    )]
    fn parse_kinds(#[case] wkt_value: &str, #[case] kind: GeometryKind) {
        let geom = parse_wkt(wkt_value).unwrap();
        assert_eq!(geom.kind(), kind);
        assert!(!geom.is_empty());
    }

    #[rstest]
    fn parse_empty(
        #[values(
            "POINT EMPTY",
            "LINESTRING EMPTY",
            "POLYGON EMPTY",
            "MULTIPOINT EMPTY",
            "MULTILINESTRING EMPTY",
            "MULTIPOLYGON EMPTY",
            "GEOMETRYCOLLECTION EMPTY"
        )]
        wkt_value: &str,
    ) {
        let geom = parse_wkt(wkt_value).unwrap();
        assert!(geom.is_empty());
        assert_eq!(geom.kind().keyword(), wkt_value.trim_end_matches(" EMPTY"));
    }

    #[test]
    fn parse_drops_z() {
        let geom = parse_wkt("POINT Z (1 2 3)").unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(1.0, 2.0)));
    }

    #[test]
    fn parse_nested_collection() {
        let geom =
            parse_wkt("GEOMETRYCOLLECTION (POINT (1 2), GEOMETRYCOLLECTION (POINT (3 4)))").unwrap();
        let Geometry::GeometryCollection(collection) = &geom else {
            panic!("expected a collection");
        };
        assert_eq!(collection.geometries().len(), 2);
        assert_eq!(
            collection.geometries()[1],
            Geometry::GeometryCollection(GeometryCollection::new(vec![Geometry::Point(
                Point::new(3.0, 4.0)
            )]))
        );
    }

    #[rstest]
    fn parse_invalid(
        #[values(
            "POINT (1 2",
            "POINT (a b)",
            "CIRCLE (1 2)",
            "",
            "LINESTRING (1 1)",
            "POLYGON ((0 0, 1 0, 1 1, 0 1))",
            "POLYGON ((0 0, 1 0, 0 0))",
            "MULTIPOINT (EMPTY, (1 2))"
        )]
        wkt_value: &str,
    ) {
        let err = parse_wkt(wkt_value).unwrap_err();
        let GeometryError::Parse { wkt, .. } = &err else {
            panic!("expected a parse error but got {err:?}");
        };
        assert_eq!(wkt, wkt_value);
        assert!(err
            .to_string()
            .starts_with(&format!("Geometry failed to parse: {wkt_value}")));
    }

    #[test]
    fn from_str() {
        let geom = Geometry::from_str("POINT (5 5)").unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(5.0, 5.0)));
    }
}
