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
//! Point location relative to rings, lines and polygons
use georule_geometry::Coord;

use crate::algorithm::{
    kernels::{Kernel, Orientation, RobustKernel},
    segment::point_on_segment,
};

/// Topological location of a point relative to a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// Row/column index within a DE-9IM matrix
    pub fn index(&self) -> usize {
        match self {
            Location::Interior => 0,
            Location::Boundary => 1,
            Location::Exterior => 2,
        }
    }
}

/// Locate a coordinate relative to the area enclosed by a closed ring
///
/// Uses the winding number with exact orientation tests, so the result does
/// not depend on the ring's orientation.
pub fn locate_in_ring(p: Coord, ring: &[Coord]) -> Location {
    let mut winding_number = 0;
    for pair in ring.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if point_on_segment(p, a, b) {
            return Location::Boundary;
        }

        if a.y <= p.y {
            if b.y > p.y && RobustKernel::orient2d(a, b, p) == Orientation::CounterClockwise {
                winding_number += 1;
            }
        } else if b.y <= p.y && RobustKernel::orient2d(a, b, p) == Orientation::Clockwise {
            winding_number -= 1;
        }
    }

    if winding_number != 0 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Locate a coordinate relative to a polygon given as its rings (shell first)
pub fn locate_in_polygon(p: Coord, rings: &[Vec<Coord>]) -> Location {
    let Some((shell, holes)) = rings.split_first() else {
        return Location::Exterior;
    };

    match locate_in_ring(p, shell) {
        Location::Interior => {}
        other => return other,
    }

    for hole in holes {
        match locate_in_ring(p, hole) {
            Location::Exterior => {}
            Location::Boundary => return Location::Boundary,
            Location::Interior => return Location::Exterior,
        }
    }

    Location::Interior
}

/// Locate a coordinate relative to a single line string
///
/// The end points of an open line are its boundary; a closed line has no
/// boundary.
pub fn locate_on_line(p: Coord, line: &[Coord]) -> Location {
    let (Some(start), Some(end)) = (line.first(), line.last()) else {
        return Location::Exterior;
    };

    if start != end && (p == *start || p == *end) {
        return Location::Boundary;
    }

    if line.windows(2).any(|pair| point_on_segment(p, pair[0], pair[1])) {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Accumulates the locations of a point relative to the components of a
/// geometry
///
/// A point is on the boundary of the geometry if it is on the boundary of an
/// odd number of components (the Mod-2 rule), in the interior if it is in
/// the interior or on the boundary of any other component, and in the
/// exterior otherwise.
#[derive(Debug, Default)]
pub struct LocationAccumulator {
    is_in: bool,
    num_boundaries: usize,
}

impl LocationAccumulator {
    pub fn update(&mut self, location: Location) {
        match location {
            Location::Interior => self.is_in = true,
            Location::Boundary => self.num_boundaries += 1,
            Location::Exterior => {}
        }
    }

    pub fn location(&self) -> Location {
        if self.num_boundaries % 2 == 1 {
            Location::Boundary
        } else if self.num_boundaries > 0 || self.is_in {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}
