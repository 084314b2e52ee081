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
use crate::types::{Geometry, LineString, Polygon};

/// Convert a [Geometry] into a [geo_types::Geometry]
///
/// Returns `None` for geometries that [geo_types::Geometry] cannot represent
/// (notably the empty point, alone or as a collection member).
pub fn to_geo_types(geom: &Geometry) -> Option<geo_types::Geometry<f64>> {
    let out = match geom {
        Geometry::Point(point) => geo_types::Geometry::Point(point.coord()?.into()),
        Geometry::LineString(ls) => geo_types::Geometry::LineString(to_line_string(ls)),
        Geometry::Polygon(poly) => geo_types::Geometry::Polygon(to_polygon(poly)),
        Geometry::MultiPoint(mp) => geo_types::Geometry::MultiPoint(geo_types::MultiPoint::new(
            mp.points().iter().map(|c| geo_types::Point::from(*c)).collect(),
        )),
        Geometry::MultiLineString(mls) => {
            geo_types::Geometry::MultiLineString(geo_types::MultiLineString::new(
                mls.line_strings().iter().map(to_line_string).collect(),
            ))
        }
        Geometry::MultiPolygon(mp) => geo_types::Geometry::MultiPolygon(
            geo_types::MultiPolygon::new(mp.polygons().iter().map(to_polygon).collect()),
        ),
        Geometry::GeometryCollection(gc) => {
            let geometries = gc
                .geometries()
                .iter()
                .map(to_geo_types)
                .collect::<Option<Vec<_>>>()?;
            geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection::new_from(
                geometries,
            ))
        }
    };

    Some(out)
}

fn to_line_string(ls: &LineString) -> geo_types::LineString<f64> {
    geo_types::LineString::new(ls.coords().to_vec())
}

fn to_polygon(poly: &Polygon) -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(
        to_line_string(poly.exterior()),
        poly.interiors().iter().map(to_line_string).collect(),
    )
}
