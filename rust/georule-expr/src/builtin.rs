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

use georule_common::{not_impl_err, GeoRuleError, Result};

use crate::{args::BuiltInArgs, documentation::Documentation, literal::Literal, matchers::ArgMatcher};

pub type KernelRef = Arc<dyn BuiltInKernel + Send + Sync>;

/// A named built-in published to a rule engine
///
/// A `BuiltIn` represents a logical operation (e.g., st_contains()) and
/// dispatches to one of its kernels, each of which wraps a specific
/// implementation for a specific argument list.
#[derive(Debug, Clone)]
pub struct BuiltIn {
    name: String,
    kernels: Vec<KernelRef>,
    documentation: Option<Documentation>,
    aliases: Vec<String>,
}

/// Built-in implementation
pub trait BuiltInKernel: Debug {
    /// The arguments this kernel accepts and the kind of value it returns
    fn arg_matcher(&self) -> &ArgMatcher;

    /// Evaluate the kernel
    ///
    /// Arguments have already been checked against [BuiltInKernel::arg_matcher]
    /// when this is called from [BuiltIn::invoke].
    fn invoke(&self, args: &BuiltInArgs) -> Result<Literal>;
}

/// Type definition for a kernel implementation function
pub type BuiltInKernelImpl = Arc<dyn Fn(&BuiltInArgs) -> Result<Literal> + Send + Sync>;

/// Kernel based on a function
pub struct SimpleBuiltInKernel {
    arg_matcher: ArgMatcher,
    fun: BuiltInKernelImpl,
}

impl Debug for SimpleBuiltInKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SimpleBuiltInKernel")
            .field("signature", &self.arg_matcher.signature())
            .finish()
    }
}

impl SimpleBuiltInKernel {
    pub fn new_ref(arg_matcher: ArgMatcher, fun: BuiltInKernelImpl) -> KernelRef {
        Arc::new(Self { arg_matcher, fun })
    }

    /// Create a kernel that accepts the arguments described by `arg_matcher`
    /// but fails with a not implemented error when invoked
    pub fn new_stub_ref(name: &str, arg_matcher: ArgMatcher) -> KernelRef {
        let name_string = name.to_string();
        Self::new_ref(
            arg_matcher,
            Arc::new(move |args| {
                not_impl_err!(
                    "Implementation for {name_string}() with {} argument(s) was not registered",
                    args.len()
                )
            }),
        )
    }
}

impl BuiltInKernel for SimpleBuiltInKernel {
    fn arg_matcher(&self) -> &ArgMatcher {
        &self.arg_matcher
    }

    fn invoke(&self, args: &BuiltInArgs) -> Result<Literal> {
        (self.fun)(args)
    }
}

impl BuiltIn {
    /// Create a new BuiltIn
    pub fn new(name: &str, kernels: Vec<KernelRef>, documentation: Option<Documentation>) -> Self {
        Self::new_with_aliases(name, kernels, documentation, vec![])
    }

    pub fn new_with_aliases(
        name: &str,
        kernels: Vec<KernelRef>,
        documentation: Option<Documentation>,
        aliases: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kernels,
            documentation,
            aliases,
        }
    }

    /// Create a new stub built-in
    ///
    /// The stub accepts the arguments described by `arg_matcher` but fails
    /// when invoked. Engines register the actual implementation later with
    /// [BuiltIn::add_kernel], which keeps the catalogue independent of any
    /// particular geometry engine.
    pub fn new_stub(name: &str, arg_matcher: ArgMatcher, documentation: Option<Documentation>) -> Self {
        let stub_kernel = SimpleBuiltInKernel::new_stub_ref(name, arg_matcher);
        Self::new(name, vec![stub_kernel], documentation)
    }

    /// Create a BuiltIn from a single kernel without documentation
    pub fn from_kernel(name: &str, kernel: KernelRef) -> Self {
        Self::new(name, vec![kernel], None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    pub fn kernels(&self) -> &[KernelRef] {
        &self.kernels
    }

    /// Add a new kernel
    ///
    /// Because kernels are resolved in reverse order, the new kernel will take
    /// precedence over any previously added kernels that accept the same
    /// number of arguments.
    pub fn add_kernel(&mut self, kernel: KernelRef) {
        self.kernels.push(kernel);
    }

    /// Distinct signatures of all kernels, most recently added first
    pub fn signatures(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for kernel in self.kernels.iter().rev() {
            let signature = kernel.arg_matcher().signature();
            if !out.contains(&signature) {
                out.push(signature);
            }
        }
        out
    }

    fn expected_arity(&self) -> String {
        let mut arities: Vec<(usize, usize)> = self
            .kernels
            .iter()
            .map(|kernel| kernel.arg_matcher().arity())
            .collect();
        arities.sort();
        arities.dedup();

        arities
            .into_iter()
            .map(|(min, max)| {
                if min == max {
                    min.to_string()
                } else {
                    format!("{min} to {max}")
                }
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// Invoke this built-in
    ///
    /// Selects the most recently added kernel that accepts the number of
    /// arguments, checks the arguments against its matchers and evaluates it.
    pub fn invoke(&self, args: &[Literal]) -> Result<Literal> {
        if self.kernels.is_empty() {
            return not_impl_err!("{}(): No kernel registered", self.name);
        }

        // Resolve kernels in reverse so that more recently added ones are resolved first
        let Some(kernel) = self
            .kernels
            .iter()
            .rev()
            .find(|kernel| kernel.arg_matcher().accepts_arity(args.len()))
        else {
            return Err(GeoRuleError::Arity {
                name: self.name.clone(),
                expected: self.expected_arity(),
                actual: args.len(),
            });
        };

        kernel.arg_matcher().check_args(&self.name, args)?;
        kernel.invoke(&BuiltInArgs::new(&self.name, args))
    }
}
