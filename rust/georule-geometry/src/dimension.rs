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
use std::fmt::Display;

use crate::types::{Geometry, LineString};

/// Topological dimension
///
/// Ordered such that `Empty < ZeroDimensional < OneDimensional < TwoDimensional`,
/// which allows the dimension of a collection to be computed as the maximum
/// of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Dimensions {
    #[default]
    Empty,
    ZeroDimensional,
    OneDimensional,
    TwoDimensional,
}

impl Dimensions {
    /// Integer value (-1 for Empty)
    pub fn as_i32(&self) -> i32 {
        match self {
            Dimensions::Empty => -1,
            Dimensions::ZeroDimensional => 0,
            Dimensions::OneDimensional => 1,
            Dimensions::TwoDimensional => 2,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Dimensions::Empty),
            0 => Some(Dimensions::ZeroDimensional),
            1 => Some(Dimensions::OneDimensional),
            2 => Some(Dimensions::TwoDimensional),
            _ => None,
        }
    }

    /// DE-9IM matrix symbol (`F` for Empty)
    pub fn symbol(&self) -> char {
        match self {
            Dimensions::Empty => 'F',
            Dimensions::ZeroDimensional => '0',
            Dimensions::OneDimensional => '1',
            Dimensions::TwoDimensional => '2',
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Dimensions::Empty
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Geometry {
    /// Topological dimension of the geometry
    ///
    /// Single and multi-part kinds have the dimension of their kind even when
    /// empty. A GEOMETRYCOLLECTION has the maximum dimension of its members
    /// and is [Dimensions::Empty] if it has none.
    pub fn dimension(&self) -> Dimensions {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Dimensions::ZeroDimensional,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Dimensions::OneDimensional,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Dimensions::TwoDimensional,
            Geometry::GeometryCollection(collection) => collection
                .geometries()
                .iter()
                .map(Geometry::dimension)
                .max()
                .unwrap_or(Dimensions::Empty),
        }
    }

    /// Dimension of the geometry's boundary
    ///
    /// Points and closed lines have no boundary; open lines have a boundary of
    /// end points; polygons are bounded by their rings. Empty geometries have
    /// an empty boundary.
    pub fn boundary_dimension(&self) -> Dimensions {
        if self.is_empty() {
            return Dimensions::Empty;
        }

        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Dimensions::Empty,
            Geometry::LineString(line_string) => line_boundary_dimension([line_string]),
            Geometry::MultiLineString(multi_line_string) => {
                line_boundary_dimension(multi_line_string.line_strings())
            }
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Dimensions::OneDimensional,
            Geometry::GeometryCollection(collection) => collection
                .geometries()
                .iter()
                .map(Geometry::boundary_dimension)
                .max()
                .unwrap_or(Dimensions::Empty),
        }
    }
}

fn line_boundary_dimension<'a>(
    line_strings: impl IntoIterator<Item = &'a LineString>,
) -> Dimensions {
    let all_closed = line_strings
        .into_iter()
        .filter(|ls| !ls.is_empty())
        .all(LineString::is_closed);
    if all_closed {
        Dimensions::Empty
    } else {
        Dimensions::ZeroDimensional
    }
}
