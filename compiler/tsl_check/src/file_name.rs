//! File names become module names in the target runtime.

use tsl_diagnostic::{Diagnostic, DiagnosticKind};
use tsl_ir::{SourceFile, Span};

/// Target-language reserved words.
pub const RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

const EXTENSIONS: &[&str] = &["ts", "tsx"];

pub fn check_file_name(file: &SourceFile) -> Vec<Diagnostic> {
    let name = file.file_name();
    match file_name_problem(name) {
        None => Vec::new(),
        Some(problem) => vec![Diagnostic::error(
            DiagnosticKind::IncorrectFileName,
            Span::DUMMY,
            format!("invalid file name `{name}`: {problem}"),
        )],
    }
}

fn file_name_problem(name: &str) -> Option<&'static str> {
    let (stem, _) = name.split_once('.').unwrap_or((name, ""));
    let extension = name.rsplit_once('.').map_or("", |(_, ext)| ext);

    if !EXTENSIONS.contains(&extension) {
        return Some("expected a `.ts` or `.tsx` extension");
    }
    if stem.is_empty() {
        return Some("the name before the extension is empty");
    }
    if !stem
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Some("only ASCII letters, digits, `_` and `-` are allowed");
    }
    if RESERVED_WORDS.contains(&stem) {
        return Some("the name is a reserved word in the target language");
    }
    None
}
