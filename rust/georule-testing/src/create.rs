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
use georule_expr::literal::Literal;
use georule_geometry::{parse_wkt, Geometry};

/// Create a geometry argument from WKT
pub fn create_geometry(wkt_value: &str) -> Literal {
    Literal::String(wkt_value.to_string())
}

/// Create geometry arguments from a slice of WKT values
pub fn create_geometries(wkt_values: &[&str]) -> Vec<Literal> {
    wkt_values.iter().map(|wkt| create_geometry(wkt)).collect()
}

/// Parse WKT into the geometry model
///
/// Panics on invalid input: this is intended for test fixtures only.
pub fn make_geometry(wkt_value: &str) -> Geometry {
    parse_wkt(wkt_value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create() {
        assert_eq!(
            create_geometry("POINT (0 1)"),
            Literal::String("POINT (0 1)".to_string())
        );
        assert_eq!(
            create_geometries(&["POINT (0 1)", "POINT EMPTY"]),
            vec![Literal::from("POINT (0 1)"), Literal::from("POINT EMPTY")]
        );
        assert_eq!(make_geometry("POINT (0 1)").geometry_type(), "Point");
    }

    #[test]
    #[should_panic]
    fn make_invalid() {
        make_geometry("POINT (0");
    }
}
