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
use serde::{Deserialize, Serialize};

use crate::{
    interval::Interval,
    types::{Coord, Geometry},
};

/// Axis-aligned bounding box of a geometry
///
/// The envelope of an empty geometry is empty in both dimensions. Envelopes
/// are used to reject pairwise predicates and distance computations before
/// any exact computation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    x: Interval,
    y: Interval,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::empty()
    }
}

impl Envelope {
    pub fn xy(x: impl Into<Interval>, y: impl Into<Interval>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn empty() -> Self {
        Self::xy(Interval::empty(), Interval::empty())
    }

    /// Envelope of a single coordinate
    pub fn from_coord(coord: Coord) -> Self {
        Self::xy((coord.x, coord.x), (coord.y, coord.y))
    }

    /// Envelope of a segment
    pub fn from_segment(a: Coord, b: Coord) -> Self {
        Self::from_coord(a).merge_coord(b)
    }

    pub fn x(&self) -> &Interval {
        &self.x
    }

    pub fn y(&self) -> &Interval {
        &self.y
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.x.width()
    }

    pub fn height(&self) -> f64 {
        self.y.width()
    }

    pub fn min(&self) -> Coord {
        Coord {
            x: self.x.lo(),
            y: self.y.lo(),
        }
    }

    pub fn max(&self) -> Coord {
        Coord {
            x: self.x.hi(),
            y: self.y.hi(),
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.x.intersects_interval(&other.x) && self.y.intersects_interval(&other.y)
    }

    /// True if other lies entirely within this envelope
    ///
    /// An empty envelope contains nothing and is contained by nothing.
    pub fn contains(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x.contains_interval(&other.x)
            && self.y.contains_interval(&other.y)
    }

    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.x.contains_value(coord.x) && self.y.contains_value(coord.y)
    }

    pub fn merge_coord(&self, coord: Coord) -> Self {
        Self {
            x: self.x.merge_value(coord.x),
            y: self.y.merge_value(coord.y),
        }
    }

    /// Update this envelope to include the bounds of another
    pub fn update_box(&mut self, other: &Self) {
        self.x = self.x.merge_interval(&other.x);
        self.y = self.y.merge_interval(&other.y);
    }

    pub fn expand_by(&self, distance: f64) -> Self {
        Self {
            x: self.x.expand_by(distance),
            y: self.y.expand_by(distance),
        }
    }

    /// Minimum Euclidean distance between two envelopes
    ///
    /// Returns 0 for intersecting envelopes and infinity if either envelope is
    /// empty.
    pub fn distance(&self, other: &Self) -> f64 {
        if self.is_empty() || other.is_empty() {
            return f64::INFINITY;
        }

        let dx = self.x.distance_to(&other.x);
        let dy = self.y.distance_to(&other.y);
        dx.hypot(dy)
    }
}

impl Geometry {
    /// Bounding box of all coordinates
    pub fn envelope(&self) -> Envelope {
        self.coords()
            .fold(Envelope::empty(), |env, coord| env.merge_coord(coord))
    }
}
