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

/// User-facing documentation of a built-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    pub description: String,
    pub syntax: String,
    pub arguments: Vec<(String, String)>,
    pub examples: Vec<String>,
}

impl Documentation {
    pub fn builder(description: impl Into<String>, syntax: impl Into<String>) -> DocumentationBuilder {
        DocumentationBuilder {
            documentation: Documentation {
                description: description.into(),
                syntax: syntax.into(),
                arguments: vec![],
                examples: vec![],
            },
        }
    }
}

impl Display for Documentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.syntax)?;
        writeln!(f, "  {}", self.description)?;
        for (name, description) in &self.arguments {
            writeln!(f, "  {name}: {description}")?;
        }
        for example in &self.examples {
            writeln!(f, "  Example: {example}")?;
        }
        Ok(())
    }
}

pub struct DocumentationBuilder {
    documentation: Documentation,
}

impl DocumentationBuilder {
    pub fn with_argument(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.documentation
            .arguments
            .push((name.into(), description.into()));
        self
    }

    /// Add the standard description of a geometry argument
    pub fn with_geometry_argument(self, name: impl Into<String>) -> Self {
        self.with_argument(name, "geometry: Input geometry as Well-Known Text")
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.documentation.examples.push(example.into());
        self
    }

    pub fn build(self) -> Documentation {
        self.documentation
    }
}
