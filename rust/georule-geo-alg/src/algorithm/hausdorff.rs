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
use georule_geometry::{Coord, Geometry};

use crate::algorithm::{
    prepared::PreparedGeometry,
    segment::{point_distance, point_segment_distance},
};

/// Discrete Hausdorff distance between two geometries
///
/// The largest distance from a vertex of one geometry to the points and
/// linework (including polygon rings) of the other, taken in both
/// directions. Returns 0 when either geometry is empty.
pub fn hausdorff_distance(a: &Geometry, b: &Geometry) -> f64 {
    let (prepared_a, prepared_b) = (PreparedGeometry::new(a), PreparedGeometry::new(b));
    if prepared_a.is_empty() || prepared_b.is_empty() {
        return 0.0;
    }

    directed_distance(a, &prepared_b).max(directed_distance(b, &prepared_a))
}

fn directed_distance(from: &Geometry, to: &PreparedGeometry) -> f64 {
    from.coords()
        .map(|coord| distance_to_linework(coord, to))
        .fold(0.0, f64::max)
}

fn distance_to_linework(p: Coord, geom: &PreparedGeometry) -> f64 {
    let to_points = geom
        .points()
        .iter()
        .map(|&q| point_distance(p, q));
    let to_edges = geom
        .edges()
        .iter()
        .map(|edge| point_segment_distance(p, edge.start, edge.end));
    to_points.chain(to_edges).fold(f64::INFINITY, f64::min)
}
