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

use serde::{Deserialize, Serialize};

/// A value exchanged with a rule engine
///
/// Geometries travel as WKT strings; numeric arguments may arrive as either
/// integers or doubles depending on the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

/// The kind of a [Literal] without its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Double,
    String,
}

impl LiteralKind {
    pub fn name(&self) -> &'static str {
        match self {
            LiteralKind::Boolean => "boolean",
            LiteralKind::Integer => "integer",
            LiteralKind::Double => "double",
            LiteralKind::String => "string",
        }
    }
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::Double(_) => LiteralKind::Double,
            Literal::String(_) => LiteralKind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Double(value) => write!(f, "{value}"),
            Literal::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Double(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Literal::from(true), LiteralKind::Boolean, "true")]
    #[case(Literal::from(42i64), LiteralKind::Integer, "42")]
    #[case(Literal::from(-3), LiteralKind::Integer, "-3")]
    #[case(Literal::from(2.5), LiteralKind::Double, "2.5")]
    #[case(Literal::from(5.0), LiteralKind::Double, "5")]
    #[case(Literal::from("POINT (0 1)"), LiteralKind::String, "POINT (0 1)")]
    fn kinds_and_display(
        #[case] literal: Literal,
        #[case] kind: LiteralKind,
        #[case] displayed: &str,
    ) {
        assert_eq!(literal.kind(), kind);
        assert_eq!(literal.to_string(), displayed);
    }

    #[test]
    fn json() {
        let values = vec![
            Literal::Boolean(true),
            Literal::Integer(3),
            Literal::Double(0.5),
            Literal::String("POINT (1 2)".to_string()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[true,3,0.5,"POINT (1 2)"]"#);

        let parsed: Vec<Literal> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn as_bool() {
        assert_eq!(Literal::Boolean(false).as_bool(), Some(false));
        assert_eq!(Literal::Integer(1).as_bool(), None);
        assert_eq!(LiteralKind::Double.to_string(), "double");
    }
}
