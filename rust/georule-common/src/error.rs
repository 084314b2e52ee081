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
use thiserror::Error;

/// Result type used throughout GeoRule
pub type Result<T, E = GeoRuleError> = std::result::Result<T, E>;

/// The single failure type surfaced to callers of a built-in
///
/// Every error raised while resolving, validating, converting or evaluating
/// a built-in ends up as one of these variants so that a host engine only has
/// to handle one error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoRuleError {
    /// Malformed geometry text
    #[error("Geometry failed to parse: {literal} ({reason})")]
    Parse { literal: String, reason: String },

    /// Wrong number of arguments for a built-in
    #[error("{name}() expects {expected} argument(s) but got {actual}")]
    Arity {
        name: String,
        expected: String,
        actual: usize,
    },

    /// An argument could not be coerced to the type required by a built-in
    #[error("{name}() argument {index} cannot be converted to {expected}: {found}")]
    TypeConversion {
        name: String,
        index: usize,
        expected: String,
        found: String,
    },

    /// Operation applied to a geometry of an incompatible kind
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested built-in is not registered
    #[error("Unknown built-in: {0}")]
    UnknownBuiltIn(String),

    #[error("{0}")]
    NotImplemented(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("GeoRule internal error: {0}")]
    Internal(String),
}

impl GeoRuleError {
    /// Short name of the error kind, useful for logging and for host engines
    /// that map errors onto their own exception hierarchy
    pub fn kind(&self) -> &'static str {
        match self {
            GeoRuleError::Parse { .. } => "ParseError",
            GeoRuleError::Arity { .. } => "ArityError",
            GeoRuleError::TypeConversion { .. } => "TypeConversionError",
            GeoRuleError::InvalidArgument(_) => "InvalidArgumentError",
            GeoRuleError::UnknownBuiltIn(_) => "UnknownBuiltInError",
            GeoRuleError::NotImplemented(_) => "NotImplementedError",
            GeoRuleError::Configuration(_) => "ConfigurationError",
            GeoRuleError::Internal(_) => "InternalError",
        }
    }
}

/// Return an `Err(GeoRuleError::InvalidArgument)` with a formatted message
#[macro_export]
macro_rules! invalid_arg_err {
    ($($args:expr),*) => {{
        Err($crate::error::GeoRuleError::InvalidArgument(std::format!($($args),*)))
    }};
}

/// Return an `Err(GeoRuleError::NotImplemented)` with a formatted message
#[macro_export]
macro_rules! not_impl_err {
    ($($args:expr),*) => {{
        Err($crate::error::GeoRuleError::NotImplemented(std::format!($($args),*)))
    }};
}

/// Return an `Err(GeoRuleError::Configuration)` with a formatted message
#[macro_export]
macro_rules! config_err {
    ($($args:expr),*) => {{
        Err($crate::error::GeoRuleError::Configuration(std::format!($($args),*)))
    }};
}

/// Return an `Err(GeoRuleError::Internal)` with a formatted message
///
/// Internal errors indicate a bug in GeoRule rather than invalid input.
#[macro_export]
macro_rules! internal_err {
    ($($args:expr),*) => {{
        Err($crate::error::GeoRuleError::Internal(std::format!($($args),*)))
    }};
}
