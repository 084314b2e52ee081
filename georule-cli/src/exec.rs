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
use georule::{context::GeoRuleContext, GeoRuleError, Literal, Result};
use serde::Serialize;

/// Convert a command line argument to a literal
///
/// Arguments are typed as integer, double, boolean or string, in that order
/// of preference. Only text containing a digit is considered numeric so
/// that words such as `inf` or `nan` stay strings.
pub fn parse_literal(value: &str) -> Literal {
    let trimmed = value.trim();
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(integer) = trimmed.parse::<i64>() {
            return Literal::Integer(integer);
        }

        if let Ok(double) = trimmed.parse::<f64>() {
            return Literal::Double(double);
        }
    }

    match trimmed {
        "true" => Literal::Boolean(true),
        "false" => Literal::Boolean(false),
        _ => Literal::String(value.to_string()),
    }
}

#[derive(Debug, Serialize)]
struct Invocation<'a> {
    builtin: &'a str,
    args: &'a [Literal],
    result: &'a Literal,
}

/// Evaluate a built-in and format its result for printing
pub fn exec_builtin(ctx: &GeoRuleContext, name: &str, args: &[String], json: bool) -> Result<String> {
    let builtin = ctx.resolve_name(name)?;
    let args = args.iter().map(|arg| parse_literal(arg)).collect::<Vec<_>>();
    let result = ctx.invoke(name, &args)?;

    if json {
        to_json(&Invocation {
            builtin: builtin.name(),
            args: &args,
            result: &result,
        })
    } else {
        Ok(result.to_string())
    }
}

#[derive(Debug, Serialize)]
struct BuiltInSummary<'a> {
    name: &'a str,
    aliases: &'a [String],
    signatures: Vec<String>,
    description: Option<&'a str>,
}

/// Format the names and signatures of all built-ins of a context
pub fn exec_list(ctx: &GeoRuleContext, json: bool) -> Result<String> {
    let mut summaries = Vec::new();
    for name in ctx.builtin_names() {
        let builtin = ctx.resolve_name(name)?;
        summaries.push(BuiltInSummary {
            name: builtin.name(),
            aliases: builtin.aliases(),
            signatures: builtin.signatures(),
            description: builtin
                .documentation()
                .map(|doc| doc.description.as_str()),
        });
    }

    if json {
        return to_json(&summaries);
    }

    let mut lines = Vec::new();
    for summary in summaries {
        for signature in &summary.signatures {
            lines.push(format!("{}{signature}", summary.name));
        }
    }
    Ok(lines.join("\n"))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| GeoRuleError::Internal(format!("Failed to serialize output: {err}")))
}
