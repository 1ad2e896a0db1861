//! Recognizing compiler invocations inside a line of build output.

use regex::Regex;
use std::sync::LazyLock;

/// Compilers and compiler wrappers, followed by whitespace or a closing quote.
static COMPILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:g?cc|[gc]\+\+|clang\+?\+?|icecc|s?ccache)(?:\.exe)?"?\s"#).unwrap()
});

/// A path-like token with a C, C++ or assembly source extension.
static SOURCE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\w./+\-]+\.(?:s|c|cc|cpp|cxx)\b").unwrap());

/// Return the byte offset of the first compiler token in `line`.
pub fn find_compiler(line: &str) -> Option<usize> {
    COMPILER.find(line).map(|m| m.start())
}

/// Isolate the command that starts at or before the compiler token at `start`.
///
/// When the command ends in a double quote the invocation is quoted, and the
/// command begins at the nearest unescaped quote before the token. Otherwise
/// the command begins after the nearest shell separator, which keeps any path
/// glued in front of the token.
pub fn isolate(line: &str, start: usize) -> &str {
    let bytes = line.as_bytes();
    let mut i = start;
    if line[start..].trim_end().ends_with('"') {
        while i > 0 && !(bytes[i] == b'"' && bytes[i - 1] != b'\\') {
            i -= 1;
        }
    } else {
        while i > 0 && !matches!(bytes[i - 1], b' ' | b'\t' | b'\n' | b';' | b'&') {
            i -= 1;
        }
    }
    line[i..].trim()
}

/// Return the first source file named in `command`, as written.
pub fn find_source(command: &str) -> Option<&str> {
    SOURCE_FILE.find(command).map(|m| m.as_str())
}

/// Cut `command` before the first `;` or `&&`.
pub fn strip_chaining(command: &str) -> &str {
    let end = [command.find(';'), command.find("&&")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(command.len());
    command[..end].trim()
}
