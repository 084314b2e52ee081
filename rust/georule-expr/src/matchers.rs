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
use std::{fmt::Debug, sync::Arc};

use georule_common::GeoRuleError;

use crate::literal::{Literal, LiteralKind};

/// Helper to match arguments of a kernel and describe its return type
#[derive(Debug)]
pub struct ArgMatcher {
    matchers: Vec<Arc<dyn TypeMatcher + Send + Sync>>,
    out_type: LiteralKind,
}

impl ArgMatcher {
    /// Create a new ArgMatcher
    ///
    /// Optional matchers must come after all required ones.
    pub fn new(matchers: Vec<Arc<dyn TypeMatcher + Send + Sync>>, out_type: LiteralKind) -> Self {
        Self { matchers, out_type }
    }

    pub fn out_type(&self) -> LiteralKind {
        self.out_type
    }

    /// Minimum and maximum number of arguments accepted
    pub fn arity(&self) -> (usize, usize) {
        let required = self.matchers.iter().filter(|m| !m.is_optional()).count();
        (required, self.matchers.len())
    }

    pub fn accepts_arity(&self, num_args: usize) -> bool {
        let (min, max) = self.arity();
        (min..=max).contains(&num_args)
    }

    /// Check each argument against its matcher
    ///
    /// Errors with [GeoRuleError::TypeConversion] for the first argument that
    /// cannot be converted to the type its matcher expects.
    pub fn check_args(&self, name: &str, args: &[Literal]) -> Result<(), GeoRuleError> {
        for (index, (arg, matcher)) in args.iter().zip(&self.matchers).enumerate() {
            if !matcher.match_type(arg) {
                return Err(GeoRuleError::TypeConversion {
                    name: name.to_string(),
                    index,
                    expected: matcher.type_name().to_string(),
                    found: format!("{arg:?}"),
                });
            }
        }

        Ok(())
    }

    /// Human-readable signature, e.g. `(geometry, geometry[, double]) -> boolean`
    pub fn signature(&self) -> String {
        let mut out = String::from("(");
        for (i, matcher) in self.matchers.iter().enumerate() {
            let separator = if i == 0 { "" } else { ", " };
            if matcher.is_optional() {
                out.push_str(&format!("[{separator}{}]", matcher.type_name()));
            } else {
                out.push_str(&format!("{separator}{}", matcher.type_name()));
            }
        }
        out.push_str(&format!(") -> {}", self.out_type));
        out
    }

    /// Matches any argument
    pub fn is_any() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsAny {})
    }

    /// Matches a WKT geometry argument
    pub fn is_geometry() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsGeometry {})
    }

    /// Matches arguments convertible to a double
    pub fn is_numeric() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsNumeric {})
    }

    /// Matches arguments convertible to an integer
    pub fn is_integer() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsInteger {})
    }

    pub fn is_string() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsExact {
            kind: LiteralKind::String,
        })
    }

    pub fn is_boolean() -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(IsExact {
            kind: LiteralKind::Boolean,
        })
    }

    /// Matches an argument that may be omitted
    pub fn is_optional(
        matcher: Arc<dyn TypeMatcher + Send + Sync>,
    ) -> Arc<dyn TypeMatcher + Send + Sync> {
        Arc::new(OptionalMatcher { inner: matcher })
    }
}

/// A TypeMatcher is a predicate on a [Literal]
///
/// TypeMatchers are the building blocks of an [ArgMatcher] that represent a
/// single argument. They only consider the kind of the literal; whether its
/// value converts (e.g., whether a string is valid WKT) is checked when the
/// argument is read.
pub trait TypeMatcher: Debug {
    /// Returns true if this matcher matches a literal
    fn match_type(&self, arg: &Literal) -> bool;

    /// Name of the expected type used in signatures and error messages
    fn type_name(&self) -> &'static str;

    /// If this argument is optional, return true
    fn is_optional(&self) -> bool {
        false
    }
}

#[derive(Debug)]
struct IsAny {}

impl TypeMatcher for IsAny {
    fn match_type(&self, _arg: &Literal) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        "any"
    }
}

#[derive(Debug)]
struct IsExact {
    kind: LiteralKind,
}

impl TypeMatcher for IsExact {
    fn match_type(&self, arg: &Literal) -> bool {
        arg.kind() == self.kind
    }

    fn type_name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug)]
struct IsGeometry {}

impl TypeMatcher for IsGeometry {
    fn match_type(&self, arg: &Literal) -> bool {
        matches!(arg, Literal::String(_))
    }

    fn type_name(&self) -> &'static str {
        "geometry"
    }
}

#[derive(Debug)]
struct IsNumeric {}

impl TypeMatcher for IsNumeric {
    fn match_type(&self, arg: &Literal) -> bool {
        matches!(
            arg,
            Literal::Double(_) | Literal::Integer(_) | Literal::String(_)
        )
    }

    fn type_name(&self) -> &'static str {
        "double"
    }
}

#[derive(Debug)]
struct IsInteger {}

impl TypeMatcher for IsInteger {
    fn match_type(&self, arg: &Literal) -> bool {
        matches!(arg, Literal::Integer(_) | Literal::String(_))
    }

    fn type_name(&self) -> &'static str {
        "integer"
    }
}

#[derive(Debug)]
struct OptionalMatcher {
    inner: Arc<dyn TypeMatcher + Send + Sync>,
}

impl TypeMatcher for OptionalMatcher {
    fn match_type(&self, arg: &Literal) -> bool {
        self.inner.match_type(arg)
    }

    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn is_optional(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matchers() {
        assert!(ArgMatcher::is_any().match_type(&Literal::Boolean(true)));
        assert!(ArgMatcher::is_geometry().match_type(&Literal::from("POINT (0 0)")));
        assert!(!ArgMatcher::is_geometry().match_type(&Literal::Integer(0)));
        assert!(ArgMatcher::is_numeric().match_type(&Literal::Integer(0)));
        assert!(ArgMatcher::is_numeric().match_type(&Literal::Double(0.0)));
        assert!(ArgMatcher::is_numeric().match_type(&Literal::from("1.5")));
        assert!(!ArgMatcher::is_numeric().match_type(&Literal::Boolean(false)));
        assert!(ArgMatcher::is_integer().match_type(&Literal::Integer(0)));
        assert!(!ArgMatcher::is_integer().match_type(&Literal::Double(0.0)));
        assert!(ArgMatcher::is_string().match_type(&Literal::from("abc")));
        assert!(ArgMatcher::is_boolean().match_type(&Literal::Boolean(true)));
        assert!(!ArgMatcher::is_boolean().match_type(&Literal::from("true")));

        let optional = ArgMatcher::is_optional(ArgMatcher::is_numeric());
        assert!(optional.is_optional());
        assert_eq!(optional.type_name(), "double");
    }

    #[test]
    fn arity_and_signature() {
        let matcher = ArgMatcher::new(
            vec![
                ArgMatcher::is_geometry(),
                ArgMatcher::is_geometry(),
                ArgMatcher::is_optional(ArgMatcher::is_numeric()),
            ],
            LiteralKind::Boolean,
        );
        assert_eq!(matcher.arity(), (2, 3));
        assert!(!matcher.accepts_arity(1));
        assert!(matcher.accepts_arity(2));
        assert!(matcher.accepts_arity(3));
        assert!(!matcher.accepts_arity(4));
        assert_eq!(matcher.out_type(), LiteralKind::Boolean);
        assert_eq!(
            matcher.signature(),
            "(geometry, geometry[, double]) -> boolean"
        );

        let no_args = ArgMatcher::new(vec![], LiteralKind::String);
        assert_eq!(no_args.signature(), "() -> string");
    }

    #[test]
    fn check_args() {
        let matcher = ArgMatcher::new(
            vec![ArgMatcher::is_geometry(), ArgMatcher::is_integer()],
            LiteralKind::Boolean,
        );
        assert!(matcher
            .check_args("st_hasDimension", &["POINT (0 0)".into(), 0.into()])
            .is_ok());

        let err = matcher
            .check_args("st_hasDimension", &["POINT (0 0)".into(), 0.5.into()])
            .unwrap_err();
        assert_eq!(
            err,
            GeoRuleError::TypeConversion {
                name: "st_hasDimension".to_string(),
                index: 1,
                expected: "integer".to_string(),
                found: "Double(0.5)".to_string(),
            }
        );
    }
}
