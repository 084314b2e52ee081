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

use std::process::ExitCode;

use clap::Parser;
use georule::{context::GeoRuleContext, LibraryOptions, Result};
use georule_cli::{exec, GEORULE_CLI_VERSION};

#[derive(Debug, Parser, PartialEq)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(help = "Name of the built-in to evaluate (e.g., swrlgeo:st_contains)")]
    builtin: Option<String>,

    #[clap(
        help = "Arguments of the built-in; geometries are given as WKT",
        allow_hyphen_values = true
    )]
    args: Vec<String>,

    #[clap(
        long,
        help = "List the registered built-ins and their signatures",
        conflicts_with = "builtin"
    )]
    list: bool,

    #[clap(
        long = "set",
        value_name = "KEY=VALUE",
        help = "Set a library option (e.g., --set equals_exact_tolerance=0.01)",
        value_parser(parse_key_value)
    )]
    options: Vec<(String, String)>,

    #[clap(long, help = "Print the output as JSON")]
    json: bool,

    #[clap(short, long, help = "Reduce printing other than the results")]
    quiet: bool,
}

/// Calls [`main_inner`], then handles printing errors and returning the correct exit code
pub fn main() -> ExitCode {
    if let Err(e) = main_inner() {
        println!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Main CLI entrypoint
fn main_inner() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if !args.quiet {
        eprintln!("GeoRule CLI v{GEORULE_CLI_VERSION}");
    }

    let mut options = LibraryOptions::default();
    for (key, value) in &args.options {
        options.set(key, value)?;
    }
    let ctx = GeoRuleContext::new_with_options(options)?;

    let output = match (&args.builtin, args.list) {
        (_, true) => exec::exec_list(&ctx, args.json)?,
        (Some(builtin), false) => exec::exec_builtin(&ctx, builtin, &args.args, args.json)?,
        (None, false) => {
            return Err(georule::GeoRuleError::Configuration(
                "Expected a built-in name or --list".to_string(),
            ))
        }
    };

    println!("{output}");
    Ok(())
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Expected KEY=VALUE but got '{value}'")),
    }
}
