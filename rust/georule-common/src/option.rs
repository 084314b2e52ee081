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

use crate::config_err;
use crate::error::Result;

/// Default prefix under which the built-ins are published to a rule engine
pub const DEFAULT_PREFIX: &str = "swrlgeo";

/// Default namespace IRI of the built-in library
pub const DEFAULT_NAMESPACE: &str = "http://semgis.de/spatial/swrlgeo#";

/// Configuration key prefix used by [LibraryOptions::entries]
pub const OPTIONS_PREFIX: &str = "georule";

/// A single configuration value and its documentation
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Option<String>,
    pub description: &'static str,
}

/// Configuration options for the built-in library
///
/// Options are collected before a library context is built and are immutable
/// afterwards. Values can be set from strings (e.g., from a command line
/// `--set key=value`) using [LibraryOptions::set], which accepts keys with or
/// without the `georule.` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryOptions {
    /// Prefix accepted in front of built-in names (e.g., `swrlgeo:st_contains`)
    pub prefix: String,

    /// Namespace IRI accepted in front of built-in names
    pub namespace: String,

    /// Resolve built-in names case-sensitively
    pub case_sensitive_names: bool,

    /// Default coordinate tolerance used by st_equalsExact when no tolerance
    /// argument is supplied
    pub equals_exact_tolerance: f64,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            case_sensitive_names: false,
            equals_exact_tolerance: 0.0,
        }
    }
}

impl LibraryOptions {
    /// Set an option from its string representation
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key
            .strip_prefix(OPTIONS_PREFIX)
            .and_then(|k| k.strip_prefix('.'))
            .unwrap_or(key);

        match key {
            "prefix" => {
                let value = value.trim();
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return config_err!("Invalid prefix: '{value}'");
                }
                self.prefix = value.trim_end_matches(':').to_string();
            }
            "namespace" => {
                let value = value.trim();
                if value.is_empty() {
                    return config_err!("Namespace must not be empty");
                }
                self.namespace = value.to_string();
            }
            "case_sensitive_names" => {
                self.case_sensitive_names = parse_bool(key, value)?;
            }
            "equals_exact_tolerance" => {
                let tolerance = value.trim().parse::<f64>().map_err(|_| {
                    crate::error::GeoRuleError::Configuration(format!(
                        "Expected a number for {key} but got '{value}'"
                    ))
                })?;
                if !tolerance.is_finite() || tolerance < 0.0 {
                    return config_err!(
                        "{key} must be a finite non-negative number but got {tolerance}"
                    );
                }
                self.equals_exact_tolerance = tolerance;
            }
            _ => return config_err!("Unknown option: '{key}'"),
        }

        Ok(())
    }

    /// List all options with their current values and documentation
    pub fn entries(&self) -> Vec<ConfigEntry> {
        vec![
            entry(
                "prefix",
                &self.prefix,
                "Prefix accepted in front of built-in names",
            ),
            entry(
                "namespace",
                &self.namespace,
                "Namespace IRI accepted in front of built-in names",
            ),
            entry(
                "case_sensitive_names",
                self.case_sensitive_names,
                "Resolve built-in names case-sensitively",
            ),
            entry(
                "equals_exact_tolerance",
                self.equals_exact_tolerance,
                "Default coordinate tolerance for st_equalsExact",
            ),
        ]
    }
}

fn entry<V: Display>(key: &str, value: V, description: &'static str) -> ConfigEntry {
    ConfigEntry {
        key: format!("{OPTIONS_PREFIX}.{key}"),
        value: Some(value.to_string()),
        description,
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => config_err!("Expected true or false for {key} but got '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults() {
        let options = LibraryOptions::default();
        assert_eq!(options.prefix, "swrlgeo");
        assert_eq!(options.namespace, "http://semgis.de/spatial/swrlgeo#");
        assert!(!options.case_sensitive_names);
        assert_eq!(options.equals_exact_tolerance, 0.0);
    }

    #[test]
    fn set_options() {
        let mut options = LibraryOptions::default();

        options.set("prefix", "geo:").unwrap();
        assert_eq!(options.prefix, "geo");

        options
            .set("georule.namespace", "http://example.com/geo#")
            .unwrap();
        assert_eq!(options.namespace, "http://example.com/geo#");

        options.set("case_sensitive_names", "TRUE").unwrap();
        assert!(options.case_sensitive_names);

        options.set("equals_exact_tolerance", "0.5").unwrap();
        assert_eq!(options.equals_exact_tolerance, 0.5);
    }

    #[rstest]
    fn set_invalid(
        #[values(
            ("not_an_option", "1"),
            ("prefix", ""),
            ("prefix", "two words"),
            ("namespace", " "),
            ("case_sensitive_names", "yes"),
            ("equals_exact_tolerance", "abc"),
            ("equals_exact_tolerance", "-1"),
            ("equals_exact_tolerance", "inf")
        )]
        key_value: (&str, &str),
    ) {
        let (key, value) = key_value;
        let mut options = LibraryOptions::default();
        let err = options.set(key, value).unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
        assert_eq!(options, LibraryOptions::default());
    }

    #[test]
    fn entries() {
        let entries = LibraryOptions::default().entries();
        let keys = entries.iter().map(|e| e.key.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "georule.prefix",
                "georule.namespace",
                "georule.case_sensitive_names",
                "georule.equals_exact_tolerance"
            ]
        );
        assert_eq!(entries[0].value, Some("swrlgeo".to_string()));
        assert_eq!(entries[2].value, Some("false".to_string()));
        assert_eq!(entries[3].value, Some("0".to_string()));
    }
}
