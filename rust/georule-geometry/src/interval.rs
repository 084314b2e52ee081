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

/// A closed one-dimensional interval
///
/// The empty interval is represented as `[inf, -inf]` such that merging any
/// value or interval into it yields the value or interval itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn empty() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// The length of the interval or 0 for the empty interval
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.hi - self.lo
        }
    }

    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    pub fn intersects_interval(&self, other: &Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// True if every value of other is in this interval
    ///
    /// The empty interval is contained by every interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.is_empty() || (self.lo <= other.lo && self.hi >= other.hi)
    }

    pub fn merge_interval(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    pub fn merge_value(&self, value: f64) -> Self {
        Self {
            lo: self.lo.min(value),
            hi: self.hi.max(value),
        }
    }

    /// Expand both ends of this interval by distance
    ///
    /// The empty interval stays empty.
    pub fn expand_by(&self, distance: f64) -> Self {
        if self.is_empty() {
            return *self;
        }

        Self {
            lo: self.lo - distance,
            hi: self.hi + distance,
        }
    }

    /// The gap between two intervals or 0 if they intersect
    pub fn distance_to(&self, other: &Self) -> f64 {
        if self.intersects_interval(other) {
            0.0
        } else if other.lo > self.hi {
            other.lo - self.hi
        } else {
            self.lo - other.hi
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from(value: (f64, f64)) -> Self {
        Interval::new(value.0, value.1)
    }
}

impl From<(i32, i32)> for Interval {
    fn from(value: (i32, i32)) -> Self {
        Interval::new(value.0 as f64, value.1 as f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let empty = Interval::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.width(), 0.0);
        assert!(!empty.contains_value(0.0));
        assert!(!empty.intersects_interval(&Interval::new(-10.0, 10.0)));
        assert!(Interval::new(0.0, 1.0).contains_interval(&empty));
        assert_eq!(empty.expand_by(5.0), empty);
        assert_eq!(empty.merge_value(2.0), Interval::new(2.0, 2.0));
        assert_eq!(
            empty.merge_interval(&Interval::new(1.0, 2.0)),
            Interval::new(1.0, 2.0)
        );
    }

    #[test]
    fn intersects_and_contains() {
        let interval = Interval::from((10, 20));
        assert!(interval.intersects_interval(&(15, 25).into()));
        assert!(interval.intersects_interval(&(20, 25).into()));
        assert!(!interval.intersects_interval(&(21, 25).into()));

        assert!(interval.contains_interval(&(10, 20).into()));
        assert!(interval.contains_interval(&(12, 18).into()));
        assert!(!interval.contains_interval(&(5, 18).into()));

        assert!(interval.contains_value(10.0));
        assert!(!interval.contains_value(20.5));
    }

    #[test]
    fn distance_and_expand() {
        let interval = Interval::from((10, 20));
        assert_eq!(interval.distance_to(&(25, 30).into()), 5.0);
        assert_eq!(interval.distance_to(&(0, 7).into()), 3.0);
        assert_eq!(interval.distance_to(&(15, 30).into()), 0.0);
        assert_eq!(interval.expand_by(2.0), Interval::new(8.0, 22.0));
        assert_eq!(interval.width(), 10.0);
    }

    #[test]
    fn serialize() {
        let interval = Interval::new(1.0, 2.0);
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"{"lo":1.0,"hi":2.0}"#);
        let roundtrip: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, interval);
    }
}
