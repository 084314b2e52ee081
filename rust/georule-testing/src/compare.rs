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
use approx::relative_eq;
use georule_expr::literal::Literal;
use georule_geometry::normalize_wkt;

/// Assert two [Literal]s are equal
///
/// Panics if the literals' kinds are different or if the values are not
/// equal. Doubles are compared with a relative tolerance and strings that
/// are both valid WKT are compared after normalization, which generates
/// reasonable failure messages where `assert_eq!()` would be overly strict.
pub fn assert_literal_equal(actual: &Literal, expected: &Literal) {
    if actual.kind() != expected.kind() {
        panic!(
            "Literal kinds not equal: actual {actual:?} is {}, expected {expected:?} is {}",
            actual.kind(),
            expected.kind()
        );
    }

    match (actual, expected) {
        (Literal::Double(actual_value), Literal::Double(expected_value)) => {
            assert_double_equal(*actual_value, *expected_value);
        }
        (Literal::String(actual_value), Literal::String(expected_value)) => {
            match (normalize_wkt(actual_value), normalize_wkt(expected_value)) {
                (Ok(actual_wkt), Ok(expected_wkt)) => assert_eq!(actual_wkt, expected_wkt),
                _ => assert_eq!(actual_value, expected_value),
            }
        }
        _ => assert_eq!(actual, expected),
    }
}

/// Assert two doubles are equal within a small relative tolerance
///
/// Two NaN values are considered equal.
pub fn assert_double_equal(actual: f64, expected: f64) {
    if actual.is_nan() && expected.is_nan() {
        return;
    }

    if !relative_eq!(actual, expected, epsilon = 1e-12, max_relative = 1e-9) {
        panic!("Doubles not equal: actual {actual}, expected {expected}");
    }
}

/// Assert two WKT strings describe the same geometry
///
/// Both values are parsed and written back in canonical form before
/// comparison.
pub fn assert_wkt_equal(actual: &str, expected: &str) {
    let actual_wkt = normalize_wkt(actual)
        .unwrap_or_else(|e| panic!("actual value is not valid WKT: {e}"));
    let expected_wkt = normalize_wkt(expected)
        .unwrap_or_else(|e| panic!("expected value is not valid WKT: {e}"));
    assert_eq!(actual_wkt, expected_wkt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_equal() {
        assert_literal_equal(&Literal::Boolean(true), &Literal::Boolean(true));
        assert_literal_equal(&Literal::Integer(5), &Literal::Integer(5));
        assert_literal_equal(&Literal::Double(0.1 + 0.2), &Literal::Double(0.3));
        assert_literal_equal(&Literal::Double(f64::NAN), &Literal::Double(f64::NAN));
        assert_literal_equal(
            &Literal::from("POINT(1 2)"),
            &Literal::from("POINT (1.0 2.0)"),
        );
        assert_literal_equal(&Literal::from("212FF1FF2"), &Literal::from("212FF1FF2"));
    }

    #[test]
    #[should_panic(expected = "Literal kinds not equal")]
    fn literals_kind_not_equal() {
        assert_literal_equal(&Literal::Integer(5), &Literal::Double(5.0));
    }

    #[test]
    #[should_panic(expected = "Doubles not equal: actual 1, expected 1.1")]
    fn doubles_not_equal() {
        assert_double_equal(1.0, 1.1);
    }

    #[test]
    fn wkt_equal() {
        assert_wkt_equal("LINESTRING(0 0,1 1)", "LINESTRING (0 0, 1 1)");
    }

    #[test]
    #[should_panic]
    fn wkt_not_equal() {
        assert_wkt_equal("POINT (0 0)", "POINT (0 1)");
    }
}
