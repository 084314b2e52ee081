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
//! Kernel predicates (orientation, distance)
use georule_geometry::Coord;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Kernel trait to provide the geometric predicates used by the engines
pub trait Kernel {
    /// Gives the orientation of 3 2-dimensional points:
    /// ccw, cw or collinear
    fn orient2d(p: Coord, q: Coord, r: Coord) -> Orientation {
        let res = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
        if res > 0.0 {
            Orientation::CounterClockwise
        } else if res < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    fn square_euclidean_distance(p: Coord, q: Coord) -> f64 {
        (p.x - q.x) * (p.x - q.x) + (p.y - q.y) * (p.y - q.y)
    }
}

pub mod robust;
pub use self::robust::RobustKernel;

#[cfg(test)]
mod tests {
    use super::*;

    struct SimpleKernel;
    impl Kernel for SimpleKernel {}

    #[test]
    fn orientation() {
        let p = Coord { x: 0.0, y: 0.0 };
        let q = Coord { x: 1.0, y: 0.0 };

        for orient in [SimpleKernel::orient2d, RobustKernel::orient2d] {
            assert_eq!(
                orient(p, q, Coord { x: 1.0, y: 1.0 }),
                Orientation::CounterClockwise
            );
            assert_eq!(orient(p, q, Coord { x: 1.0, y: -1.0 }), Orientation::Clockwise);
            assert_eq!(orient(p, q, Coord { x: 5.0, y: 0.0 }), Orientation::Collinear);
        }

        assert_eq!(
            RobustKernel::square_euclidean_distance(p, Coord { x: 3.0, y: 4.0 }),
            25.0
        );
    }

    #[test]
    fn robust_near_collinear() {
        // Nearly collinear points where the naive determinant loses precision
        let p = Coord { x: 0.5, y: 0.5 };
        let q = Coord { x: 12.0, y: 12.0 };
        let r = Coord { x: 24.0, y: 24.0 };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::Collinear);

        let r = Coord {
            x: 24.0,
            y: 24.0 + f64::EPSILON * 32.0,
        };
        assert_eq!(RobustKernel::orient2d(p, q, r), Orientation::CounterClockwise);
    }
}
