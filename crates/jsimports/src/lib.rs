#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! jsimports: lexical extraction of module references from
//! JavaScript/TypeScript source text.
//!
//! No syntax tree is built. The scanner recognizes the handful of
//! constructs that introduce a module dependency: static `import` and
//! `export … from` statements, `require(…)`, `require.resolve(…)`, and the
//! Jest mocking calls (`jest.mock`, `jest.requireActual`,
//! `jest.createMockFromModule`). It returns the literal path named in
//! each, decoded from whatever quoting convention the source used.
//!
//! The caller (a build-graph generator) reads the file and supplies its
//! contents; this crate does no I/O.
//!
//! # Example
//!
//! ```
//! let source = r#"
//! import React from "react";
//! const fs = require('fs');
//! "#;
//!
//! let paths = jsimports::extract(source).unwrap();
//! assert_eq!(paths, ["fs", "react"]);
//! ```
//!
//! Results are sorted byte-wise ascending, duplicates retained. Paths from
//! CommonJS and Jest forms are folded to lower case; static
//! `import`/`export` paths keep their case, matching how the consuming
//! build-graph logic compares them.

mod extract;
mod reference;
mod scan;
mod unquote;

pub use extract::{extract, ExtractError};
pub use reference::{ImportKind, ModuleRef};
pub use scan::Scanner;
pub use unquote::{unquote, UnquoteError};
