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
//! GeoRule: geometry predicates and measures for rule engines.
//!
//! A [context::GeoRuleContext] bundles the built-in catalogue with the
//! kernels that implement it. Build it once and share it between threads;
//! every built-in takes and returns plain [Literal] values with geometries
//! encoded as WKT.
//!
//! ```
//! use georule::context::GeoRuleContext;
//! use georule::Literal;
//!
//! let ctx = GeoRuleContext::new();
//! let contained = ctx
//!     .invoke_predicate(
//!         "swrlgeo:st_contains",
//!         &["POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))".into(), "POINT (5 5)".into()],
//!     )
//!     .unwrap();
//! assert!(contained);
//!
//! let distance = ctx
//!     .invoke("st_distance", &["POINT (0 0)".into(), "POINT (3 4)".into()])
//!     .unwrap();
//! assert_eq!(distance, Literal::Double(5.0));
//! ```

pub mod context;

pub use georule_common::{GeoRuleError, LibraryOptions, Result};
pub use georule_expr::literal::{Literal, LiteralKind};
