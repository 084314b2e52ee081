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

/// Comparison applied by the `...BiggerThan`, `...EqualTo` and
/// `...SmallerThan` built-ins
///
/// Values are compared exactly: a computed measure is "equal to" an argument
/// only if the two floating point values are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Equal,
    Smaller,
}

impl Comparison {
    /// Apply the comparison as `lhs <op> rhs`
    pub fn evaluate<T: PartialOrd>(&self, lhs: T, rhs: T) -> bool {
        match self {
            Comparison::Greater => lhs > rhs,
            Comparison::Equal => lhs == rhs,
            Comparison::Smaller => lhs < rhs,
        }
    }

    /// Phrase used in documentation
    pub fn phrase(&self) -> &'static str {
        match self {
            Comparison::Greater => "greater than",
            Comparison::Equal => "equal to",
            Comparison::Smaller => "smaller than",
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phrase())
    }
}
