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
use georule_common::{option::LibraryOptions, GeoRuleError, Result};
use georule_expr::{
    builtin::{BuiltIn, KernelRef},
    function_set::FunctionSet,
    literal::Literal,
};

/// Entry point for evaluating GeoRule built-ins
///
/// The context owns the options it was built with and the function set
/// holding every built-in together with its kernels. It is immutable once
/// built and can be shared between threads (e.g., in an `Arc`).
#[derive(Debug, Clone)]
pub struct GeoRuleContext {
    options: LibraryOptions,
    functions: FunctionSet,
}

impl Default for GeoRuleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoRuleContext {
    /// Creates a new context with default options
    pub fn new() -> Self {
        // This will panic only if the default built-ins and kernels are
        // inconsistent, which we test!
        Self::new_with_options(LibraryOptions::default()).unwrap()
    }

    /// Creates a new context with the given options
    pub fn new_with_options(options: LibraryOptions) -> Result<Self> {
        let mut out = Self {
            options,
            functions: FunctionSet::new(),
        };

        out.register_function_set(georule_functions::register::default_function_set());

        let kernels = georule_geo::register::scalar_kernels(&out.options);
        out.register_kernels(kernels.into_iter())?;

        log::debug!(
            "Created GeoRule context with {} built-ins",
            out.functions.builtins().count()
        );
        Ok(out)
    }

    fn register_function_set(&mut self, function_set: FunctionSet) {
        self.functions.merge(function_set);
    }

    fn register_kernels<'a>(
        &mut self,
        kernels: impl Iterator<Item = (&'a str, KernelRef)>,
    ) -> Result<()> {
        for (name, kernel) in kernels {
            self.functions.add_builtin_kernel(name, kernel)?;
        }

        Ok(())
    }

    /// The options this context was built with
    pub fn options(&self) -> &LibraryOptions {
        &self.options
    }

    /// The function set of this context
    pub fn functions(&self) -> &FunctionSet {
        &self.functions
    }

    /// Names of all registered built-ins in alphabetical order
    pub fn builtin_names(&self) -> Vec<&str> {
        let mut names = self
            .functions
            .builtins()
            .map(|builtin| builtin.name())
            .collect::<Vec<_>>();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Resolve a name as published to a rule engine to its built-in
    ///
    /// Accepts the bare name (`st_contains`), the prefixed name
    /// (`swrlgeo:st_contains`) and the name qualified with the namespace
    /// IRI. Aliases resolve to the built-in they refer to.
    pub fn resolve_name(&self, name: &str) -> Result<&BuiltIn> {
        let case_sensitive = self.options.case_sensitive_names;
        let prefix = format!("{}:", self.options.prefix);
        let local_name = strip_prefix(name, &self.options.namespace, case_sensitive)
            .or_else(|| strip_prefix(name, &prefix, case_sensitive))
            .unwrap_or(name);

        let Some(builtin) = self.functions.builtin(local_name) else {
            return Err(GeoRuleError::UnknownBuiltIn(name.to_string()));
        };

        if case_sensitive
            && builtin.name() != local_name
            && !builtin.aliases().iter().any(|alias| alias == local_name)
        {
            return Err(GeoRuleError::UnknownBuiltIn(name.to_string()));
        }

        Ok(builtin)
    }

    /// Invoke a built-in by name
    pub fn invoke(&self, name: &str, args: &[Literal]) -> Result<Literal> {
        log::debug!("Invoking {name} with {} argument(s)", args.len());
        let result = self
            .resolve_name(name)
            .and_then(|builtin| builtin.invoke(args));

        if let Err(err) = &result {
            log::warn!("{name} failed with {}: {err}", err.kind());
        }

        result
    }

    /// Invoke a built-in that returns a boolean
    ///
    /// This is the shape in which a rule engine consumes predicates. Built-ins
    /// returning any other kind of value fail with an invalid argument error.
    pub fn invoke_predicate(&self, name: &str, args: &[Literal]) -> Result<bool> {
        let result = self.invoke(name, args)?;
        match result.as_bool() {
            Some(value) => Ok(value),
            None => Err(GeoRuleError::InvalidArgument(format!(
                "{name} returned {} but a boolean was expected",
                result.kind()
            ))),
        }
    }
}

fn strip_prefix<'a>(name: &'a str, prefix: &str, case_sensitive: bool) -> Option<&'a str> {
    if prefix.is_empty() || !name.is_char_boundary(prefix.len()) {
        return None;
    }

    let (head, tail) = name.split_at(prefix.len());
    let matches = if case_sensitive {
        head == prefix
    } else {
        head.eq_ignore_ascii_case(prefix)
    };

    matches.then_some(tail)
}
