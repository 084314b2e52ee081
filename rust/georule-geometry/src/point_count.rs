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
use crate::types::{Geometry, Polygon};

impl Geometry {
    /// Counts the number of coordinates in a geometry
    ///
    /// Ring closing coordinates are counted, such that a triangle has four
    /// points.
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(point) => point.coord().is_some() as usize,
            Geometry::LineString(ls) => ls.num_coords(),
            Geometry::Polygon(poly) => count_polygon_points(poly),
            Geometry::MultiPoint(mp) => mp.points().len(),
            Geometry::MultiLineString(mls) => {
                mls.line_strings().iter().map(|ls| ls.num_coords()).sum()
            }
            Geometry::MultiPolygon(mp) => mp.polygons().iter().map(count_polygon_points).sum(),
            Geometry::GeometryCollection(gc) => {
                gc.geometries().iter().map(Geometry::num_points).sum()
            }
        }
    }

    /// Number of member geometries
    ///
    /// Non-collections count as one geometry; collections (including the
    /// multi-part kinds) report their number of direct members.
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => 1,
            Geometry::MultiPoint(mp) => mp.points().len(),
            Geometry::MultiLineString(mls) => mls.line_strings().len(),
            Geometry::MultiPolygon(mp) => mp.polygons().len(),
            Geometry::GeometryCollection(gc) => gc.geometries().len(),
        }
    }
}

fn count_polygon_points(poly: &Polygon) -> usize {
    poly.rings().map(|ring| ring.num_coords()).sum()
}
