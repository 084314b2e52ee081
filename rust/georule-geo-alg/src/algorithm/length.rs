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
use georule_geometry::{Component, Coord, Geometry};

use crate::algorithm::segment::point_distance;

fn path_length(coords: &[Coord]) -> f64 {
    coords
        .windows(2)
        .map(|pair| point_distance(pair[0], pair[1]))
        .sum()
}

/// Planar length of a geometry
///
/// Line strings contribute the sum of their segment lengths and polygons the
/// perimeter of all their rings. Points have no length.
pub fn length(geom: &Geometry) -> f64 {
    geom.components()
        .into_iter()
        .map(|component| match component {
            Component::Point(_) => 0.0,
            Component::LineString(line_string) => path_length(line_string.coords()),
            Component::Polygon(polygon) => polygon
                .rings()
                .map(|ring| path_length(ring.coords()))
                .sum(),
        })
        .sum()
}
