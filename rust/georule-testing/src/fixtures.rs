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
//! WKT fixtures shared by tests across the workspace

/// 10 x 10 square with its lower left corner at the origin
pub const SQUARE: &str = "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))";

/// [SQUARE] shifted by (5, 5)
pub const SHIFTED_SQUARE: &str = "POLYGON ((5 5, 15 5, 15 15, 5 15, 5 5))";

/// Square sharing the right edge of [SQUARE]
pub const ADJACENT_SQUARE: &str = "POLYGON ((10 0, 20 0, 20 10, 10 10, 10 0))";

/// [SQUARE] with a 6 x 6 hole in the middle
pub const SQUARE_WITH_HOLE: &str =
    "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 8 2, 8 8, 2 8, 2 2))";

pub const TRIANGLE: &str = "POLYGON ((0 0, 1 0, 0 1, 0 0))";

/// Self-intersecting "bow tie" polygon
pub const BOWTIE: &str = "POLYGON ((0 0, 10 10, 10 0, 0 10, 0 0))";

pub const POINT_IN_SQUARE: &str = "POINT (5 5)";

pub const POINT_ON_SQUARE_EDGE: &str = "POINT (0 5)";

pub const POINT_OUTSIDE_SQUARE: &str = "POINT (20 20)";

/// Diagonal of [SQUARE]
pub const DIAGONAL: &str = "LINESTRING (0 0, 10 10)";

/// Horizontal line crossing [SQUARE]
pub const CROSSING_LINE: &str = "LINESTRING (-5 5, 15 5)";

/// Closed simple line string
pub const RING: &str = "LINESTRING (0 0, 1 0, 1 1, 0 0)";

/// Closed line string that intersects itself
pub const FIGURE_EIGHT: &str = "LINESTRING (0 0, 2 2, 2 0, 0 2, 0 0)";

/// One non-empty and one empty sample of every geometry kind
pub const ALL_KINDS: [&str; 14] = [
    "POINT (1 2)",
    "POINT EMPTY",
    "LINESTRING (1 2, 3 4)",
    "LINESTRING EMPTY",
    "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))",
    "POLYGON EMPTY",
    "MULTIPOINT ((1 2), (3 4))",
    "MULTIPOINT EMPTY",
    "MULTILINESTRING ((0 0, 1 0), (1 1, 0 1))",
    "MULTILINESTRING EMPTY",
    "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)))",
    "MULTIPOLYGON EMPTY",
    "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 2 2))",
    "GEOMETRYCOLLECTION EMPTY",
];
