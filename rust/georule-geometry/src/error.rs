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
use georule_common::GeoRuleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Geometry failed to parse: {wkt} ({reason})")]
    Parse { wkt: String, reason: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Invalid(String),
}

impl From<GeometryError> for GeoRuleError {
    fn from(value: GeometryError) -> Self {
        match value {
            GeometryError::Parse { wkt, reason } => GeoRuleError::Parse {
                literal: wkt,
                reason,
            },
            GeometryError::InvalidArgument(msg) | GeometryError::Invalid(msg) => {
                GeoRuleError::InvalidArgument(msg)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let invalid = GeometryError::Invalid("foofy".to_string());
        assert_eq!(invalid.to_string(), "foofy");

        let parse = GeometryError::Parse {
            wkt: "POINT (a b)".to_string(),
            reason: "Expected a number".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Geometry failed to parse: POINT (a b) (Expected a number)"
        );

        let converted: GeoRuleError = parse.into();
        assert_eq!(
            converted,
            GeoRuleError::Parse {
                literal: "POINT (a b)".to_string(),
                reason: "Expected a number".to_string()
            }
        );

        let converted: GeoRuleError = GeometryError::InvalidArgument("nope".to_string()).into();
        assert_eq!(converted.kind(), "InvalidArgumentError");
    }
}
