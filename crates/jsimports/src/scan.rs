//! Line-anchored recognition of module-introducing constructs.
//!
//! The scanner walks source text line by line, trying a fixed, ordered set
//! of recognition rules at each line start. Each rule captures the raw
//! quoted literal of one construct without decoding it; decoding is
//! [`unquote`](crate::unquote)'s job. Matches are non-overlapping and
//! returned in text order.
//!
//! Lines that match no rule (ordinary code, comments) are consumed and
//! contribute nothing. Dynamic `import(expr)` never matches: the static
//! `import` rule requires whitespace after the keyword, and a non-literal
//! argument cannot be resolved statically anyway.

use crate::reference::{ImportKind, ModuleRef};

/// Optional statement prefix accepted before a call form.
#[derive(Clone, Copy)]
enum Prefix {
    /// `const <name> = ` assignment.
    ConstAssign,
    /// `return `.
    Return,
}

/// What must follow the captured literal for a call form to match.
#[derive(Clone, Copy)]
enum Suffix {
    /// Closing parenthesis immediately after the literal.
    CloseParen,
    /// Nothing required; further arguments after a comma are ignored.
    None,
}

/// Pull-style scanner over one source buffer.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Return the next recognized module reference, or `None` at end of
    /// input.
    pub fn next_reference(&mut self) -> Option<ModuleRef<'a>> {
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;
            let end = line_end(bytes, start);
            if let Some((reference, capture_end)) = self.try_line(start, end) {
                // A static import clause may have spanned several lines;
                // resume after the line holding the captured literal so
                // matches never overlap.
                self.pos = next_line_start(bytes, capture_end);
                return Some(reference);
            }
            self.pos = next_line_start(bytes, end);
        }
        None
    }

    /// Try each rule at one line start, in fixed order.
    fn try_line(&self, start: usize, end: usize) -> Option<(ModuleRef<'a>, usize)> {
        self.try_static(start, "import", ImportKind::StaticImport)
            .or_else(|| {
                self.try_call(
                    start,
                    end,
                    b"require",
                    Prefix::ConstAssign,
                    Suffix::CloseParen,
                    ImportKind::Require,
                )
            })
            .or_else(|| self.try_static(start, "export", ImportKind::StaticExport))
            .or_else(|| {
                self.try_call(
                    start,
                    end,
                    b"jest.mock",
                    Prefix::ConstAssign,
                    Suffix::None,
                    ImportKind::JestMock,
                )
            })
            .or_else(|| {
                self.try_call(
                    start,
                    end,
                    b"jest.requireActual",
                    Prefix::Return,
                    Suffix::None,
                    ImportKind::JestRequireActual,
                )
            })
            .or_else(|| {
                self.try_call(
                    start,
                    end,
                    b"require.resolve",
                    Prefix::ConstAssign,
                    Suffix::CloseParen,
                    ImportKind::RequireResolve,
                )
            })
            .or_else(|| {
                self.try_call(
                    start,
                    end,
                    b"jest.createMockFromModule",
                    Prefix::ConstAssign,
                    Suffix::CloseParen,
                    ImportKind::JestCreateMockFromModule,
                )
            })
    }

    /// Static `import`/`export` statement. Anchored at the line start with
    /// no leading whitespace; the keyword is followed by exactly one
    /// whitespace character, then either the literal itself (side-effect
    /// form) or a clause, possibly spanning lines, ending at the first
    /// `from ` that introduces a literal.
    fn try_static(
        &self,
        start: usize,
        keyword: &str,
        kind: ImportKind,
    ) -> Option<(ModuleRef<'a>, usize)> {
        let bytes = self.source.as_bytes();
        if !self.source[start..].starts_with(keyword) {
            return None;
        }
        let ws = start + keyword.len();
        if !bytes.get(ws).is_some_and(u8::is_ascii_whitespace) {
            return None;
        }

        let after = ws + 1;
        if matches!(bytes.get(after), Some(b'\'' | b'"')) {
            let (reference, capture_end, _) = self.capture_literal(after, kind);
            return Some((reference, capture_end));
        }

        // Clause form: at least one character before `from `.
        let mut search = after + 1;
        while let Some(found) = find_sub(bytes, b"from ", search) {
            let literal = found + b"from ".len();
            if matches!(bytes.get(literal), Some(b'\'' | b'"')) {
                let (reference, capture_end, _) = self.capture_literal(literal, kind);
                return Some((reference, capture_end));
            }
            search = found + 1;
        }
        None
    }

    /// Call-shaped form: optional prefix, callee name, `(`, then the
    /// literal immediately inside. Leading whitespace on the line is
    /// allowed. The whole construct sits on one line.
    fn try_call(
        &self,
        start: usize,
        end: usize,
        callee: &[u8],
        prefix: Prefix,
        suffix: Suffix,
        kind: ImportKind,
    ) -> Option<(ModuleRef<'a>, usize)> {
        let bytes = self.source.as_bytes();
        let mut p = start;
        while p < end && matches!(bytes[p], b' ' | b'\t') {
            p += 1;
        }
        let line = &bytes[p..end];

        let call = match prefix {
            Prefix::ConstAssign if line.starts_with(b"const ") => {
                p + find_assigned_call(line, callee)?
            }
            Prefix::Return if line.starts_with(b"return ") => p + b"return ".len(),
            _ => p,
        };

        if !bytes[call..end].starts_with(callee) {
            return None;
        }
        let paren = call + callee.len();
        if bytes.get(paren) != Some(&b'(') {
            return None;
        }
        let open = paren + 1;
        if !matches!(bytes.get(open), Some(b'\'' | b'"')) {
            return None;
        }

        let (reference, capture_end, terminated) = self.capture_literal(open, kind);
        if terminated
            && matches!(suffix, Suffix::CloseParen)
            && bytes.get(capture_end) != Some(&b')')
        {
            return None;
        }
        // An unterminated capture skips the suffix check so extraction
        // fails on the literal itself rather than dropping it.
        Some((reference, capture_end))
    }

    /// Capture a literal starting at `open` (which holds the delimiter);
    /// returns the reference, the offset past the capture, and whether the
    /// closing delimiter was found. A literal never spans lines: if the
    /// line ends first, the truncated text is still captured so extraction
    /// fails loudly instead of dropping the reference.
    fn capture_literal(&self, open: usize, kind: ImportKind) -> (ModuleRef<'a>, usize, bool) {
        let bytes = self.source.as_bytes();
        let quote = bytes[open];
        let end = line_end(bytes, open);
        let mut i = open + 1;
        while i < end {
            match bytes[i] {
                b'\\' => i += 2,
                b if b == quote => {
                    let raw = &self.source[open..=i];
                    return (ModuleRef { kind, raw }, i + 1, true);
                }
                _ => i += 1,
            }
        }
        let mut truncated = end;
        if truncated > open && bytes[truncated - 1] == b'\r' {
            truncated -= 1;
        }
        let raw = &self.source[open..truncated];
        (ModuleRef { kind, raw }, truncated, false)
    }
}

/// `const <name> = callee(` with a non-empty name; returns the callee
/// offset within `line`.
fn find_assigned_call(line: &[u8], callee: &[u8]) -> Option<usize> {
    let mut search = b"const ".len() + 1;
    while let Some(eq) = find_sub(line, b" = ", search) {
        let call = eq + b" = ".len();
        if line[call..].starts_with(callee) && line.get(call + callee.len()) == Some(&b'(') {
            return Some(call);
        }
        search = eq + 1;
    }
    None
}

fn find_sub(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}

/// Byte offset of the `\n` ending the line containing `from`, or the
/// buffer length.
fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| from + i)
}

fn next_line_start(bytes: &[u8], from: usize) -> usize {
    let end = line_end(bytes, from);
    if end < bytes.len() {
        end + 1
    } else {
        end
    }
}
