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
use georule_common::{internal_err, GeoRuleError, Result};
use georule_geometry::{parse_wkt, Geometry};

use crate::literal::Literal;

/// Typed access to the arguments of a built-in invocation
///
/// Conversions follow the rules shared by all built-ins: geometries are read
/// from WKT strings, doubles from doubles, integers or numeric strings,
/// integers from integers or integral strings.
#[derive(Debug, Clone, Copy)]
pub struct BuiltInArgs<'a> {
    name: &'a str,
    args: &'a [Literal],
}

impl<'a> BuiltInArgs<'a> {
    pub fn new(name: &'a str, args: &'a [Literal]) -> Self {
        Self { name, args }
    }

    /// Name of the built-in being invoked
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Literal> {
        self.args.get(index)
    }

    fn arg(&self, index: usize) -> Result<&'a Literal> {
        match self.args.get(index) {
            Some(arg) => Ok(arg),
            None => internal_err!(
                "{}() argument {index} requested but only {} were supplied",
                self.name,
                self.args.len()
            ),
        }
    }

    fn conversion_err<T>(&self, index: usize, expected: &str, found: &Literal) -> Result<T> {
        Err(GeoRuleError::TypeConversion {
            name: self.name.to_string(),
            index,
            expected: expected.to_string(),
            found: format!("{found:?}"),
        })
    }

    /// Parse a geometry argument from WKT
    pub fn geometry(&self, index: usize) -> Result<Geometry> {
        match self.arg(index)? {
            Literal::String(text) => Ok(parse_wkt(text)?),
            other => self.conversion_err(index, "geometry", other),
        }
    }

    pub fn double(&self, index: usize) -> Result<f64> {
        match self.arg(index)? {
            Literal::Double(value) => Ok(*value),
            Literal::Integer(value) => Ok(*value as f64),
            literal @ Literal::String(text) => match text.trim().parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) => self.conversion_err(index, "double", literal),
            },
            other => self.conversion_err(index, "double", other),
        }
    }

    /// Read a double argument that may be omitted
    pub fn optional_double(&self, index: usize) -> Result<Option<f64>> {
        if index < self.args.len() {
            self.double(index).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn integer(&self, index: usize) -> Result<i64> {
        match self.arg(index)? {
            Literal::Integer(value) => Ok(*value),
            literal @ Literal::String(text) => match text.trim().parse::<i64>() {
                Ok(value) => Ok(value),
                Err(_) => self.conversion_err(index, "integer", literal),
            },
            other => self.conversion_err(index, "integer", other),
        }
    }

    pub fn string(&self, index: usize) -> Result<&'a str> {
        match self.arg(index)? {
            Literal::String(value) => Ok(value),
            other => self.conversion_err(index, "string", other),
        }
    }

    pub fn boolean(&self, index: usize) -> Result<bool> {
        match self.arg(index)? {
            Literal::Boolean(value) => Ok(*value),
            other => self.conversion_err(index, "boolean", other),
        }
    }
}
