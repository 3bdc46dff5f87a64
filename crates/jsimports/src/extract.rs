//! Top-level extraction driver.

use thiserror::Error;

use crate::scan::Scanner;
use crate::unquote::{unquote, UnquoteError};

/// Failure of a whole-file extraction.
///
/// Extraction is fail-fast: the first literal that cannot be decoded
/// aborts the call with no partial result, carrying the offending raw text
/// so the caller can log a diagnostic pointing at the bad statement.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unquoting module reference {raw}: {source}")]
    Unquote {
        raw: String,
        #[source]
        source: UnquoteError,
    },
}

/// Extract all module reference paths from JavaScript/TypeScript source.
///
/// Scans the buffer for static `import`/`export … from` statements,
/// `require(…)`, `require.resolve(…)`, and the Jest mocking calls, decodes
/// each captured literal, and returns the paths sorted ascending by byte
/// order. Duplicates are retained. Paths from CommonJS and Jest forms are
/// folded to lower case; static `import`/`export` paths keep their case.
///
/// Pure and synchronous: no I/O, no shared state, safe to call from any
/// number of threads at once.
pub fn extract(source: &str) -> Result<Vec<String>, ExtractError> {
    let mut imports = Vec::new();
    let mut scanner = Scanner::new(source);
    while let Some(reference) = scanner.next_reference() {
        let path = unquote(reference.raw).map_err(|source| ExtractError::Unquote {
            raw: reference.raw.to_string(),
            source,
        })?;
        if reference.kind.folds_case() {
            imports.push(path.to_lowercase());
        } else {
            imports.push(path);
        }
    }
    imports.sort_unstable();
    Ok(imports)
}
