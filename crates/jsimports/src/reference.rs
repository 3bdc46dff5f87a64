//! Module reference types.

/// The syntactic form that introduced a module reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import … from "m"` or `import "m"`.
    StaticImport,
    /// `require("m")`, optionally `const x = require("m")`.
    Require,
    /// `export … from "m"`.
    StaticExport,
    /// `jest.mock("m")` or `jest.mock("m", factory)`.
    JestMock,
    /// `jest.requireActual("m")`, optionally `return`-prefixed.
    JestRequireActual,
    /// `require.resolve("m")`.
    RequireResolve,
    /// `jest.createMockFromModule("m")`.
    JestCreateMockFromModule,
}

impl ImportKind {
    /// Whether paths of this form are folded to lower case.
    ///
    /// CommonJS and Jest module identifiers are compared case-insensitively
    /// by the consuming build-graph logic; ES module paths are
    /// case-sensitive and keep their spelling.
    #[must_use]
    pub const fn folds_case(self) -> bool {
        !matches!(self, Self::StaticImport | Self::StaticExport)
    }
}

/// One module reference recognized in source text.
///
/// `raw` borrows the literal exactly as written, including its delimiting
/// quote characters; nothing is copied or decoded until
/// [`unquote`](crate::unquote) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRef<'a> {
    /// The form that introduced the reference.
    pub kind: ImportKind,
    /// The quoted literal as it appears in the source.
    pub raw: &'a str,
}
