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
//! Segment primitives: exact point-on-segment tests, segment intersection
//! and Euclidean distances between points and segments.
use georule_geometry::{Coord, Envelope};

use crate::algorithm::kernels::{Kernel, Orientation, RobustKernel};

/// Result of intersecting two segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// Segments meet at a single point
    ///
    /// `is_proper` is true if the point is in the interior of both segments
    /// (in which case the coordinate is computed and may be rounded).
    SinglePoint { intersection: Coord, is_proper: bool },

    /// Segments are collinear and share the sub-segment `(start, end)`
    Collinear { start: Coord, end: Coord },
}

/// True if `p` lies between `a` and `b` in both dimensions
fn point_in_rect(p: Coord, a: Coord, b: Coord) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Exact test whether `p` lies on the closed segment `(a, b)`
pub fn point_on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    point_in_rect(p, a, b) && RobustKernel::orient2d(a, b, p) == Orientation::Collinear
}

/// Intersect segment `(p1, p2)` with segment `(q1, q2)`
///
/// Both segments must be non-degenerate. Orientation tests are exact; only
/// the coordinate of a proper intersection is computed with floating point
/// arithmetic (and clamped to the intersection of the segment envelopes).
pub fn segment_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Option<LineIntersection> {
    if !Envelope::from_segment(p1, p2).intersects(&Envelope::from_segment(q1, q2)) {
        return None;
    }

    let p_q1 = RobustKernel::orient2d(p1, p2, q1);
    let p_q2 = RobustKernel::orient2d(p1, p2, q2);
    if p_q1 == p_q2 && p_q1 != Orientation::Collinear {
        return None;
    }

    let q_p1 = RobustKernel::orient2d(q1, q2, p1);
    let q_p2 = RobustKernel::orient2d(q1, q2, p2);
    if q_p1 == q_p2 && q_p1 != Orientation::Collinear {
        return None;
    }

    if p_q1 == Orientation::Collinear
        && p_q2 == Orientation::Collinear
        && q_p1 == Orientation::Collinear
        && q_p2 == Orientation::Collinear
    {
        return collinear_intersection(p1, p2, q1, q2);
    }

    // An endpoint of one segment touches the other segment
    if p_q1 == Orientation::Collinear
        || p_q2 == Orientation::Collinear
        || q_p1 == Orientation::Collinear
        || q_p2 == Orientation::Collinear
    {
        let intersection = if p1 == q1 || p1 == q2 {
            p1
        } else if p2 == q1 || p2 == q2 {
            p2
        } else if p_q1 == Orientation::Collinear {
            q1
        } else if p_q2 == Orientation::Collinear {
            q2
        } else if q_p1 == Orientation::Collinear {
            p1
        } else {
            p2
        };

        return Some(LineIntersection::SinglePoint {
            intersection,
            is_proper: false,
        });
    }

    Some(LineIntersection::SinglePoint {
        intersection: proper_intersection(p1, p2, q1, q2),
        is_proper: true,
    })
}

fn collinear_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Option<LineIntersection> {
    let mut shared: Vec<Coord> = Vec::with_capacity(4);
    for candidate in [p1, p2, q1, q2] {
        if point_in_rect(candidate, p1, p2)
            && point_in_rect(candidate, q1, q2)
            && !shared.contains(&candidate)
        {
            shared.push(candidate);
        }
    }

    match shared.as_slice() {
        [] => None,
        [intersection] => Some(LineIntersection::SinglePoint {
            intersection: *intersection,
            is_proper: false,
        }),
        [a, b, ..] => {
            // Order the shared segment along (p1, p2)
            if segment_param(*a, p1, p2) <= segment_param(*b, p1, p2) {
                Some(LineIntersection::Collinear { start: *a, end: *b })
            } else {
                Some(LineIntersection::Collinear { start: *b, end: *a })
            }
        }
    }
}

fn proper_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = r.x * s.y - r.y * s.x;
    let t = ((q1.x - p1.x) * s.y - (q1.y - p1.y) * s.x) / denom;
    let mut intersection = Coord {
        x: p1.x + t * r.x,
        y: p1.y + t * r.y,
    };

    // Keep the rounded point within the envelope shared by both segments
    let lo_x = p1.x.min(p2.x).max(q1.x.min(q2.x));
    let hi_x = p1.x.max(p2.x).min(q1.x.max(q2.x));
    let lo_y = p1.y.min(p2.y).max(q1.y.min(q2.y));
    let hi_y = p1.y.max(p2.y).min(q1.y.max(q2.y));
    intersection.x = intersection.x.clamp(lo_x, hi_x);
    intersection.y = intersection.y.clamp(lo_y, hi_y);
    intersection
}

/// Parameter of a point on segment `(a, b)` measured along the dominant axis
///
/// Returns 0 at `a` and 1 at `b`. Only meaningful for points on (or very
/// close to) the segment.
pub fn segment_param(p: Coord, a: Coord, b: Coord) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let t = if dx.abs() >= dy.abs() {
        (p.x - a.x) / dx
    } else {
        (p.y - a.y) / dy
    };
    t.clamp(0.0, 1.0)
}

/// Euclidean distance between two coordinates
pub fn point_distance(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance from `p` to the closed segment `(a, b)`
pub fn point_segment_distance(p: Coord, a: Coord, b: Coord) -> f64 {
    if a == b {
        return point_distance(p, a);
    }

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let r = ((p.x - a.x) * dx + (p.y - a.y) * dy) / (dx * dx + dy * dy);
    if r <= 0.0 {
        return point_distance(p, a);
    }
    if r >= 1.0 {
        return point_distance(p, b);
    }

    let s = ((a.y - p.y) * dx - (a.x - p.x) * dy) / (dx * dx + dy * dy);
    s.abs() * dx.hypot(dy)
}

/// Euclidean distance between the closed segments `(p1, p2)` and `(q1, q2)`
pub fn segment_distance(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> f64 {
    if p1 != p2 && q1 != q2 && segment_intersection(p1, p2, q1, q2).is_some() {
        return 0.0;
    }

    point_segment_distance(p1, q1, q2)
        .min(point_segment_distance(p2, q1, q2))
        .min(point_segment_distance(q1, p1, p2))
        .min(point_segment_distance(q2, p1, p2))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }

    #[test]
    fn on_segment() {
        assert!(point_on_segment(c(1.0, 1.0), c(0.0, 0.0), c(2.0, 2.0)));
        assert!(point_on_segment(c(0.0, 0.0), c(0.0, 0.0), c(2.0, 2.0)));
        assert!(!point_on_segment(c(3.0, 3.0), c(0.0, 0.0), c(2.0, 2.0)));
        assert!(!point_on_segment(c(1.0, 1.1), c(0.0, 0.0), c(2.0, 2.0)));
    }

    #[test]
    fn proper_crossing() {
        let result = segment_intersection(c(0.0, 0.0), c(2.0, 2.0), c(0.0, 2.0), c(2.0, 0.0));
        assert_eq!(
            result,
            Some(LineIntersection::SinglePoint {
                intersection: c(1.0, 1.0),
                is_proper: true
            })
        );
    }

    #[test]
    fn endpoint_touch() {
        // T junction
        let result = segment_intersection(c(0.0, 0.0), c(2.0, 0.0), c(1.0, 0.0), c(1.0, 5.0));
        assert_eq!(
            result,
            Some(LineIntersection::SinglePoint {
                intersection: c(1.0, 0.0),
                is_proper: false
            })
        );

        // Shared vertex
        let result = segment_intersection(c(0.0, 0.0), c(2.0, 0.0), c(2.0, 0.0), c(3.0, 5.0));
        assert_eq!(
            result,
            Some(LineIntersection::SinglePoint {
                intersection: c(2.0, 0.0),
                is_proper: false
            })
        );
    }

    #[test]
    fn disjoint() {
        assert_eq!(
            segment_intersection(c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0), c(1.0, 1.0)),
            None
        );
        assert_eq!(
            segment_intersection(c(0.0, 0.0), c(1.0, 1.0), c(3.0, 0.0), c(2.0, 1.5)),
            None
        );
        assert_eq!(
            segment_intersection(c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)),
            None
        );
    }

    #[test]
    fn collinear() {
        let result = segment_intersection(c(0.0, 0.0), c(3.0, 0.0), c(2.0, 0.0), c(1.0, 0.0));
        assert_eq!(
            result,
            Some(LineIntersection::Collinear {
                start: c(1.0, 0.0),
                end: c(2.0, 0.0)
            })
        );

        let result = segment_intersection(c(3.0, 3.0), c(0.0, 0.0), c(2.0, 2.0), c(5.0, 5.0));
        assert_eq!(
            result,
            Some(LineIntersection::Collinear {
                start: c(3.0, 3.0),
                end: c(2.0, 2.0)
            })
        );

        let result = segment_intersection(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(2.0, 0.0));
        assert_eq!(
            result,
            Some(LineIntersection::SinglePoint {
                intersection: c(1.0, 0.0),
                is_proper: false
            })
        );
    }

    #[test]
    fn params() {
        assert_eq!(segment_param(c(1.0, 0.5), c(0.0, 0.0), c(2.0, 1.0)), 0.5);
        assert_eq!(segment_param(c(0.0, 3.0), c(0.0, 4.0), c(0.0, 0.0)), 0.25);
    }

    #[test]
    fn distances() {
        assert_relative_eq!(point_distance(c(0.0, 0.0), c(3.0, 4.0)), 5.0);
        assert_relative_eq!(point_segment_distance(c(1.0, 1.0), c(0.0, 0.0), c(2.0, 0.0)), 1.0);
        assert_relative_eq!(point_segment_distance(c(-3.0, 4.0), c(0.0, 0.0), c(2.0, 0.0)), 5.0);
        assert_relative_eq!(point_segment_distance(c(5.0, 4.0), c(0.0, 0.0), c(2.0, 0.0)), 5.0);
        assert_relative_eq!(
            segment_distance(c(0.0, 0.0), c(2.0, 0.0), c(0.0, 1.0), c(2.0, 1.0)),
            1.0
        );
        assert_eq!(
            segment_distance(c(0.0, 0.0), c(2.0, 2.0), c(0.0, 2.0), c(2.0, 0.0)),
            0.0
        );
    }
}
