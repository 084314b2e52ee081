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

use georule_geometry::{Dimensions, GeometryError};

use crate::algorithm::locate::Location;

/// A DE-9IM matrix
///
/// Rows are the interior, boundary and exterior of the first geometry and
/// columns are those of the second. Each entry is the dimension of the
/// intersection of the corresponding point sets. The dimensions of the two
/// input geometries are kept alongside the matrix because some named
/// predicates (crosses, touches, overlaps) depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelationMatrix {
    entries: [[Dimensions; 3]; 3],
    dimension_a: Dimensions,
    dimension_b: Dimensions,
}

impl RelationMatrix {
    /// An all-empty matrix for geometries of the given dimensions
    pub fn new(dimension_a: Dimensions, dimension_b: Dimensions) -> Self {
        Self {
            entries: Default::default(),
            dimension_a,
            dimension_b,
        }
    }

    pub fn get(&self, a: Location, b: Location) -> Dimensions {
        self.entries[a.index()][b.index()]
    }

    pub fn set(&mut self, a: Location, b: Location, dimension: Dimensions) {
        self.entries[a.index()][b.index()] = dimension;
    }

    /// Raise an entry to at least the given dimension
    pub fn set_at_least(&mut self, a: Location, b: Location, dimension: Dimensions) {
        let entry = &mut self.entries[a.index()][b.index()];
        if *entry < dimension {
            *entry = dimension;
        }
    }

    pub fn dimension_a(&self) -> Dimensions {
        self.dimension_a
    }

    pub fn dimension_b(&self) -> Dimensions {
        self.dimension_b
    }

    /// The matrix of the relation with the arguments swapped
    pub fn transpose(&self) -> Self {
        let mut entries = [[Dimensions::Empty; 3]; 3];
        for (i, row) in self.entries.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                entries[j][i] = *entry;
            }
        }

        Self {
            entries,
            dimension_a: self.dimension_b,
            dimension_b: self.dimension_a,
        }
    }

    /// Test this matrix against a DE-9IM pattern
    ///
    /// Patterns are nine characters from `T`, `F`, `*`, `0`, `1` and `2`
    /// (case-insensitive).
    pub fn matches(&self, pattern: &str) -> Result<bool, GeometryError> {
        let symbols = pattern.chars().collect::<Vec<_>>();
        if symbols.len() != 9 {
            return Err(GeometryError::InvalidArgument(format!(
                "DE-9IM pattern must have 9 characters: '{pattern}'"
            )));
        }

        let mut matches = true;
        for (i, symbol) in symbols.iter().enumerate() {
            let entry = self.entries[i / 3][i % 3];
            let entry_matches = match symbol.to_ascii_uppercase() {
                '*' => true,
                'T' => entry != Dimensions::Empty,
                'F' => entry == Dimensions::Empty,
                '0' => entry == Dimensions::ZeroDimensional,
                '1' => entry == Dimensions::OneDimensional,
                '2' => entry == Dimensions::TwoDimensional,
                _ => {
                    return Err(GeometryError::InvalidArgument(format!(
                        "Invalid DE-9IM pattern symbol '{symbol}' in '{pattern}'"
                    )))
                }
            };
            matches &= entry_matches;
        }

        Ok(matches)
    }

    fn is_true(&self, a: Location, b: Location) -> bool {
        self.get(a, b) != Dimensions::Empty
    }

    fn is_false(&self, a: Location, b: Location) -> bool {
        self.get(a, b) == Dimensions::Empty
    }

    /// `T*****FF*`
    pub fn is_contains(&self) -> bool {
        self.is_true(Location::Interior, Location::Interior)
            && self.is_false(Location::Exterior, Location::Interior)
            && self.is_false(Location::Exterior, Location::Boundary)
    }

    /// `T*F**F***`
    pub fn is_within(&self) -> bool {
        self.is_true(Location::Interior, Location::Interior)
            && self.is_false(Location::Interior, Location::Exterior)
            && self.is_false(Location::Boundary, Location::Exterior)
    }

    /// `T*****FF*`, `*T****FF*`, `***T**FF*` or `****T*FF*`
    pub fn is_covers(&self) -> bool {
        let has_point_in_common = self.is_true(Location::Interior, Location::Interior)
            || self.is_true(Location::Interior, Location::Boundary)
            || self.is_true(Location::Boundary, Location::Interior)
            || self.is_true(Location::Boundary, Location::Boundary);

        has_point_in_common
            && self.is_false(Location::Exterior, Location::Interior)
            && self.is_false(Location::Exterior, Location::Boundary)
    }

    /// `T*F**F***`, `*TF**F***`, `**FT*F***` or `**F*TF***`
    pub fn is_covered_by(&self) -> bool {
        let has_point_in_common = self.is_true(Location::Interior, Location::Interior)
            || self.is_true(Location::Interior, Location::Boundary)
            || self.is_true(Location::Boundary, Location::Interior)
            || self.is_true(Location::Boundary, Location::Boundary);

        has_point_in_common
            && self.is_false(Location::Interior, Location::Exterior)
            && self.is_false(Location::Boundary, Location::Exterior)
    }

    /// `FF*FF****`
    pub fn is_disjoint(&self) -> bool {
        self.is_false(Location::Interior, Location::Interior)
            && self.is_false(Location::Interior, Location::Boundary)
            && self.is_false(Location::Boundary, Location::Interior)
            && self.is_false(Location::Boundary, Location::Boundary)
    }

    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// `T*F**FFF*`
    pub fn is_equal_topo(&self) -> bool {
        self.is_true(Location::Interior, Location::Interior)
            && self.is_false(Location::Interior, Location::Exterior)
            && self.is_false(Location::Boundary, Location::Exterior)
            && self.is_false(Location::Exterior, Location::Interior)
            && self.is_false(Location::Exterior, Location::Boundary)
    }

    /// `T*T******` (P/L, P/A, L/A), `T*****T**` (L/P, A/P, A/L) or
    /// `0********` (L/L)
    pub fn is_crosses(&self) -> bool {
        let (a, b) = (self.dimension_a, self.dimension_b);
        let ii = self.is_true(Location::Interior, Location::Interior);
        if a < b && a != Dimensions::Empty {
            ii && self.is_true(Location::Interior, Location::Exterior)
        } else if a > b && b != Dimensions::Empty {
            ii && self.is_true(Location::Exterior, Location::Interior)
        } else if a == Dimensions::OneDimensional && b == Dimensions::OneDimensional {
            self.get(Location::Interior, Location::Interior) == Dimensions::ZeroDimensional
        } else {
            false
        }
    }

    /// `FT*******`, `F**T*****` or `F***T****`; never true for two
    /// puntal geometries
    pub fn is_touches(&self) -> bool {
        if self.dimension_a == Dimensions::ZeroDimensional
            && self.dimension_b == Dimensions::ZeroDimensional
        {
            return false;
        }

        self.is_false(Location::Interior, Location::Interior)
            && (self.is_true(Location::Interior, Location::Boundary)
                || self.is_true(Location::Boundary, Location::Interior)
                || self.is_true(Location::Boundary, Location::Boundary))
    }

    /// `T*T***T**` (P/P, A/A) or `1*T***T**` (L/L)
    pub fn is_overlaps(&self) -> bool {
        let (a, b) = (self.dimension_a, self.dimension_b);
        let exteriors = self.is_true(Location::Interior, Location::Exterior)
            && self.is_true(Location::Exterior, Location::Interior);

        match (a, b) {
            (Dimensions::ZeroDimensional, Dimensions::ZeroDimensional)
            | (Dimensions::TwoDimensional, Dimensions::TwoDimensional) => {
                self.is_true(Location::Interior, Location::Interior) && exteriors
            }
            (Dimensions::OneDimensional, Dimensions::OneDimensional) => {
                self.get(Location::Interior, Location::Interior) == Dimensions::OneDimensional
                    && exteriors
            }
            _ => false,
        }
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.entries {
            for entry in row {
                write!(f, "{entry}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for RelationMatrix {
    type Err = GeometryError;

    /// Parse a nine character matrix string (e.g., `212101212`)
    ///
    /// The dimensions of the input geometries are unknown and set to
    /// [Dimensions::Empty].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s.chars().collect::<Vec<_>>();
        if symbols.len() != 9 {
            return Err(GeometryError::InvalidArgument(format!(
                "DE-9IM matrix must have 9 characters: '{s}'"
            )));
        }

        let mut matrix = RelationMatrix::default();
        for (i, symbol) in symbols.iter().enumerate() {
            matrix.entries[i / 3][i % 3] = match symbol.to_ascii_uppercase() {
                'F' => Dimensions::Empty,
                '0' => Dimensions::ZeroDimensional,
                '1' => Dimensions::OneDimensional,
                '2' => Dimensions::TwoDimensional,
                _ => {
                    return Err(GeometryError::InvalidArgument(format!(
                        "Invalid DE-9IM matrix symbol '{symbol}' in '{s}'"
                    )))
                }
            };
        }

        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn matrix(value: &str, dimension_a: i32, dimension_b: i32) -> RelationMatrix {
        let parsed = RelationMatrix::from_str(value).unwrap();
        RelationMatrix {
            dimension_a: Dimensions::from_i32(dimension_a).unwrap(),
            dimension_b: Dimensions::from_i32(dimension_b).unwrap(),
            ..parsed
        }
    }

    #[test]
    fn display_and_transpose() {
        let m = matrix("212101212", 2, 2);
        assert_eq!(m.to_string(), "212101212");

        let m = matrix("212FF1FF2", 2, 1);
        assert_eq!(m.transpose().to_string(), "2FF1FF212");
        assert_eq!(m.transpose().dimension_a(), Dimensions::OneDimensional);
        assert_eq!(m.transpose().transpose(), m);

        let mut m = RelationMatrix::new(Dimensions::TwoDimensional, Dimensions::ZeroDimensional);
        m.set_at_least(Location::Interior, Location::Interior, Dimensions::ZeroDimensional);
        m.set_at_least(Location::Interior, Location::Interior, Dimensions::Empty);
        m.set(Location::Exterior, Location::Exterior, Dimensions::TwoDimensional);
        assert_eq!(m.to_string(), "0FFFFFFF2");
        assert_eq!(m.transpose().dimension_a(), Dimensions::ZeroDimensional);
    }

    #[rstest]
    #[case("212101212", "T*T***T**", true)]
    #[case("212101212", "2********", true)]
    #[case("212101212", "FF*FF****", false)]
    #[case("FF2F11212", "ff*f*****", true)]
    #[case("FF2F11212", "ff*ff****", false)]
    #[case("0F2FF1FF2", "T*****FF*", true)]
    #[case("0F2FF1FF2", "1********", false)]
    fn patterns(#[case] value: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(matrix(value, 2, 2).matches(pattern).unwrap(), expected);
    }

    #[test]
    fn invalid_patterns() {
        let m = matrix("212101212", 2, 2);
        assert!(m.matches("T*T***T*").is_err());
        assert!(m.matches("T*T***T*X").is_err());
        assert!(RelationMatrix::from_str("21210121").is_err());
        assert!(RelationMatrix::from_str("21210121T").is_err());
    }

    #[test]
    fn named_predicates() {
        // Polygon containing a point
        let m = matrix("0F2FF1FF2", 2, 0);
        assert!(m.is_contains());
        assert!(m.is_covers());
        assert!(!m.is_within());
        assert!(m.transpose().is_within());
        assert!(m.transpose().is_covered_by());
        assert!(m.is_intersects());
        assert!(!m.is_touches());
        assert!(!m.is_crosses());

        // Crossing lines
        let m = matrix("0F1FF0102", 1, 1);
        assert!(m.is_crosses());
        assert!(!m.is_overlaps());
        assert!(!m.is_touches());

        // Overlapping polygons
        let m = matrix("212101212", 2, 2);
        assert!(m.is_overlaps());
        assert!(!m.is_crosses());
        assert!(!m.is_contains());

        // Corner touch
        let m = matrix("FF2F01212", 2, 2);
        assert!(m.is_touches());
        assert!(!m.is_disjoint());

        // Equal polygons
        let m = matrix("2FFF1FFF2", 2, 2);
        assert!(m.is_equal_topo());
        assert!(m.is_contains());
        assert!(m.is_within());

        // Line crossing a polygon, and the reverse
        let m = matrix("101FF0212", 1, 2);
        assert!(m.is_crosses());
        assert!(m.transpose().is_crosses());

        // Disjoint points never touch
        let m = matrix("FF0FFF0F2", 0, 0);
        assert!(m.is_disjoint());
        assert!(!m.is_touches());
    }
}
