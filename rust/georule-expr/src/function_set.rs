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
use std::collections::HashMap;

use georule_common::{internal_err, Result};

use crate::builtin::{BuiltIn, KernelRef};

/// Helper for managing groups of built-ins
///
/// The built-in catalogue is declared in one crate and implemented by
/// kernels that may live in others. This structure helps coordinate them.
/// Names (and aliases) are looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct FunctionSet {
    builtins: HashMap<String, BuiltIn>,
    aliases: HashMap<String, String>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl FunctionSet {
    /// Create a new, empty FunctionSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over references to all [BuiltIn]s
    pub fn builtins(&self) -> impl Iterator<Item = &BuiltIn> + '_ {
        self.builtins.values()
    }

    /// Return a reference to the built-in corresponding to the name or alias
    pub fn builtin(&self, name: &str) -> Option<&BuiltIn> {
        let key = key(name);
        match self.aliases.get(&key) {
            Some(target) => self.builtins.get(target),
            None => self.builtins.get(&key),
        }
    }

    /// Return a mutable reference to the built-in corresponding to the name
    /// or alias
    pub fn builtin_mut(&mut self, name: &str) -> Option<&mut BuiltIn> {
        let key = key(name);
        match self.aliases.get(&key) {
            Some(target) => self.builtins.get_mut(target),
            None => self.builtins.get_mut(&key),
        }
    }

    /// Insert a new built-in and return the one that had previously been
    /// added under that name, if any
    pub fn insert_builtin(&mut self, builtin: BuiltIn) -> Option<BuiltIn> {
        let name = key(builtin.name());
        for alias in builtin.aliases() {
            self.aliases.insert(key(alias), name.clone());
        }
        self.builtins.insert(name, builtin)
    }

    /// Consume another function set and merge its contents into this one
    pub fn merge(&mut self, other: FunctionSet) {
        for (_, builtin) in other.builtins.into_iter() {
            self.insert_builtin(builtin);
        }
    }

    /// Add a kernel to a built-in in this set
    ///
    /// This errors if a built-in of that name does not exist in this set. A
    /// reference to the matching built-in is returned.
    pub fn add_builtin_kernel(&mut self, name: &str, kernel: KernelRef) -> Result<&BuiltIn> {
        let Some(builtin) = self.builtin_mut(name) else {
            return internal_err!("Can't register kernel for built-in '{}'", name);
        };

        log::debug!(
            "Registering kernel {} for {}",
            kernel.arg_matcher().signature(),
            builtin.name()
        );
        builtin.add_kernel(kernel);
        Ok(builtin)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use crate::{
        builtin::SimpleBuiltInKernel,
        literal::{Literal, LiteralKind},
        matchers::ArgMatcher,
    };

    use super::*;

    fn kernel(out: Literal) -> KernelRef {
        SimpleBuiltInKernel::new_ref(
            ArgMatcher::new(vec![ArgMatcher::is_geometry()], out.kind()),
            Arc::new(move |_| Ok(out.clone())),
        )
    }

    #[test]
    fn function_set() {
        let mut functions = FunctionSet::new();
        assert_eq!(functions.builtins().count(), 0);
        assert!(functions.builtin("st_isPoint").is_none());
        assert!(functions.builtin_mut("st_isPoint").is_none());

        let builtin = BuiltIn::from_kernel("st_isPoint", kernel(Literal::Boolean(false)));
        assert!(functions.insert_builtin(builtin).is_none());
        assert_eq!(functions.builtins().count(), 1);
        assert!(functions.builtin("st_isPoint").is_some());
        assert!(functions.builtin("ST_ISPOINT").is_some());
        assert!(functions.builtin_mut("st_ispoint").is_some());

        let builtin = functions
            .add_builtin_kernel("st_isPoint", kernel(Literal::Boolean(true)))
            .unwrap();
        assert_eq!(builtin.name(), "st_isPoint");
        assert_eq!(
            builtin.invoke(&["POINT (0 0)".into()]).unwrap(),
            Literal::Boolean(true)
        );

        let err = functions
            .add_builtin_kernel("built-in that does not exist", kernel(Literal::Boolean(true)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "GeoRule internal error: Can't register kernel for built-in 'built-in that does not exist'"
        );

        let mut functions2 = FunctionSet::new();
        functions2.insert_builtin(BuiltIn::from_kernel(
            "st_asText",
            kernel(Literal::from("POINT (0 0)")),
        ));
        functions.merge(functions2);
        assert_eq!(
            functions.builtins().map(|b| b.name()).collect::<HashSet<_>>(),
            vec!["st_isPoint", "st_asText"].into_iter().collect::<HashSet<_>>()
        );
        assert_eq!(
            functions.builtin("st_astext").unwrap().kernels()[0]
                .arg_matcher()
                .out_type(),
            LiteralKind::String
        );
    }

    #[test]
    fn aliases() {
        let mut functions = FunctionSet::new();
        functions.insert_builtin(BuiltIn::new_with_aliases(
            "st_isWithinDistance",
            vec![kernel(Literal::Boolean(true))],
            None,
            vec!["st_dWithin".to_string()],
        ));

        assert_eq!(
            functions.builtin("ST_DWITHIN").unwrap().name(),
            "st_isWithinDistance"
        );
        assert!(functions
            .add_builtin_kernel("st_dwithin", kernel(Literal::Boolean(false)))
            .is_ok());
        assert_eq!(functions.builtin("st_isWithinDistance").unwrap().kernels().len(), 2);
    }
}
