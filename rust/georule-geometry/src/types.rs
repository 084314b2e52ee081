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

use crate::error::GeometryError;

/// A two-dimensional coordinate
pub type Coord = geo_types::Coord<f64>;

/// Geometry kinds
///
/// An enumerator for the set of geometry kinds supported by the model. The
/// OGC type name (e.g., `LineString`) is available via [GeometryKind::name]
/// and the WKT keyword (e.g., `LINESTRING`) via [GeometryKind::keyword].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// OGC geometry type name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// WKT keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// True for the multi-part kinds and GEOMETRYCOLLECTION
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon | Self::GeometryCollection
        )
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "point" => Ok(Self::Point),
            "linestring" => Ok(Self::LineString),
            "polygon" => Ok(Self::Polygon),
            "multipoint" => Ok(Self::MultiPoint),
            "multilinestring" => Ok(Self::MultiLineString),
            "multipolygon" => Ok(Self::MultiPolygon),
            "geometrycollection" => Ok(Self::GeometryCollection),
            _ => Err(GeometryError::Invalid(format!(
                "Invalid geometry type string: '{value}'"
            ))),
        }
    }
}

/// A point, possibly empty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Option<Coord>);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord { x, y }))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn coord(&self) -> Option<Coord> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(Some(value))
    }
}

/// A sequence of coordinates with either zero or at least two members
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(Vec<Coord>);

impl LineString {
    pub fn try_new(coords: Vec<Coord>) -> Result<Self, GeometryError> {
        if coords.len() == 1 {
            return Err(GeometryError::Invalid(
                "LineString must have zero or at least two coordinates".to_string(),
            ));
        }

        Ok(Self(coords))
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// True if the line string is non-empty and starts where it ends
    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start == end,
            _ => false,
        }
    }

    /// Consecutive coordinate pairs
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A polygon: an exterior ring and zero or more interior rings
///
/// Every ring is closed and has at least four coordinates. The empty polygon
/// has an empty exterior and no interiors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    pub fn try_new(exterior: LineString, interiors: Vec<LineString>) -> Result<Self, GeometryError> {
        if exterior.is_empty() {
            if !interiors.is_empty() {
                return Err(GeometryError::Invalid(
                    "Polygon with an empty exterior ring cannot have interior rings".to_string(),
                ));
            }

            return Ok(Self::empty());
        }

        check_ring(&exterior, "exterior")?;
        for interior in &interiors {
            check_ring(interior, "interior")?;
        }

        Ok(Self {
            exterior,
            interiors,
        })
    }

    pub fn empty() -> Self {
        Self {
            exterior: LineString::empty(),
            interiors: vec![],
        }
    }

    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    /// The exterior ring followed by the interior rings
    pub fn rings(&self) -> impl Iterator<Item = &LineString> + '_ {
        std::iter::once(&self.exterior)
            .filter(|ring| !ring.is_empty())
            .chain(self.interiors.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

fn check_ring(ring: &LineString, which: &str) -> Result<(), GeometryError> {
    if ring.num_coords() < 4 {
        return Err(GeometryError::Invalid(format!(
            "Polygon {which} ring must have at least four coordinates but has {}",
            ring.num_coords()
        )));
    }

    if !ring.is_closed() {
        return Err(GeometryError::Invalid(format!(
            "Polygon {which} ring is not closed"
        )));
    }

    Ok(())
}

/// A collection of non-empty points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(Vec<Coord>);

impl MultiPoint {
    pub fn new(points: Vec<Coord>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(LineString::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Polygon::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Geometry::is_empty)
    }
}

/// An immutable planar geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// An atomic, non-empty part of a geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component<'a> {
    Point(Coord),
    LineString(&'a LineString),
    Polygon(&'a Polygon),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// The OGC geometry type name (e.g., `Polygon`)
    pub fn geometry_type(&self) -> &'static str {
        self.kind().name()
    }

    /// True if the geometry contains no coordinates
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(point) => point.is_empty(),
            Geometry::LineString(line_string) => line_string.is_empty(),
            Geometry::Polygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi_point) => multi_point.is_empty(),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.is_empty(),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.is_empty(),
            Geometry::GeometryCollection(collection) => collection.is_empty(),
        }
    }

    /// Iterate over every coordinate, including ring closing coordinates
    pub fn coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        match self {
            Geometry::Point(point) => Box::new(point.coord().into_iter()),
            Geometry::LineString(line_string) => Box::new(line_string.coords().iter().copied()),
            Geometry::Polygon(polygon) => Box::new(polygon_coords(polygon)),
            Geometry::MultiPoint(multi_point) => Box::new(multi_point.points().iter().copied()),
            Geometry::MultiLineString(multi_line_string) => Box::new(
                multi_line_string
                    .line_strings()
                    .iter()
                    .flat_map(|ls| ls.coords().iter().copied()),
            ),
            Geometry::MultiPolygon(multi_polygon) => Box::new(
                multi_polygon
                    .polygons()
                    .iter()
                    .flat_map(polygon_coords),
            ),
            Geometry::GeometryCollection(collection) => {
                Box::new(collection.geometries().iter().flat_map(|g| g.coords()))
            }
        }
    }

    /// Flatten this geometry into its non-empty atomic parts
    pub fn components(&self) -> Vec<Component<'_>> {
        let mut out = Vec::new();
        collect_components(self, &mut out);
        out
    }
}

fn polygon_coords(polygon: &Polygon) -> impl Iterator<Item = Coord> + '_ {
    polygon.rings().flat_map(|ring| ring.coords().iter().copied())
}

fn collect_components<'a>(geom: &'a Geometry, out: &mut Vec<Component<'a>>) {
    match geom {
        Geometry::Point(point) => {
            if let Some(coord) = point.coord() {
                out.push(Component::Point(coord));
            }
        }
        Geometry::LineString(line_string) => {
            if !line_string.is_empty() {
                out.push(Component::LineString(line_string));
            }
        }
        Geometry::Polygon(polygon) => {
            if !polygon.is_empty() {
                out.push(Component::Polygon(polygon));
            }
        }
        Geometry::MultiPoint(multi_point) => {
            out.extend(multi_point.points().iter().map(|c| Component::Point(*c)));
        }
        Geometry::MultiLineString(multi_line_string) => out.extend(
            multi_line_string
                .line_strings()
                .iter()
                .filter(|ls| !ls.is_empty())
                .map(Component::LineString),
        ),
        Geometry::MultiPolygon(multi_polygon) => out.extend(
            multi_polygon
                .polygons()
                .iter()
                .filter(|poly| !poly.is_empty())
                .map(Component::Polygon),
        ),
        Geometry::GeometryCollection(collection) => {
            for child in collection.geometries() {
                collect_components(child, out);
            }
        }
    }
}

macro_rules! impl_from_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_geometry!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
