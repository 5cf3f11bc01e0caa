//! Cursor context extraction.
//!
//! Builds the per-request [`CompletionContext`] snapshot from the raw
//! document text and cursor position. The statement may be incomplete,
//! so everything here works by character scanning around the cursor, the
//! same way access-operator detection does in editors: walk backwards
//! past the partial identifier the user is typing and classify what
//! comes before it.

use tower_lsp::lsp_types::Position;

use crate::types::{CompletionContext, GrammarContext, TokenClass};

/// Build the completion context for the cursor position.
///
/// The current statement is the text of the cursor line up to the
/// cursor, truncated at the last `;` so earlier statements on the same
/// line don't leak in. Positions past the end of the document produce an
/// empty-statement context rather than an error.
pub fn build_context(content: &str, position: Position) -> CompletionContext {
    let statement = current_statement(content, position);
    let preceding_token = classify_preceding_token(&statement);

    // A `:` qualifier right before the (partial) identifier means the
    // user is navigating into a package; everything else resolves as a
    // variable-definition statement.
    let context_kind = if preceding_token == TokenClass::Colon {
        GrammarContext::PackageMember
    } else {
        GrammarContext::VariableDefinition
    };

    CompletionContext {
        statement,
        preceding_token,
        context_kind,
    }
}

/// Extract the current statement text: cursor line up to the cursor
/// column, after the last `;`, with leading whitespace trimmed.
fn current_statement(content: &str, position: Position) -> String {
    let Some(line) = content.lines().nth(position.line as usize) else {
        return String::new();
    };

    let chars: Vec<char> = line.chars().collect();
    let col = (position.character as usize).min(chars.len());
    let upto: String = chars[..col].iter().collect();

    match upto.rfind(';') {
        Some(i) => upto[i + 1..].trim_start().to_string(),
        None => upto.trim_start().to_string(),
    }
}

/// Classify the token immediately before the cursor, skipping any
/// partial identifier still being typed.
fn classify_preceding_token(statement: &str) -> TokenClass {
    let chars: Vec<char> = statement.chars().collect();

    // Walk backwards past identifier characters.
    let mut i = chars.len();
    while i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_') {
        i -= 1;
    }
    let skipped_identifier = i < chars.len();

    // Then past whitespace.
    let mut j = i;
    while j > 0 && chars[j - 1].is_whitespace() {
        j -= 1;
    }

    match chars[..j].last() {
        Some(':') if j == i => TokenClass::Colon,
        Some('.') if j == i => TokenClass::Dot,
        Some('=') => TokenClass::Assign,
        Some(_) if skipped_identifier => TokenClass::Identifier,
        Some(_) => TokenClass::Other,
        None if skipped_identifier => TokenClass::Identifier,
        None => TokenClass::Other,
    }
}

/// Extract the package qualifier of the position or call target in
/// `statement`, if any.
///
/// Handles both a qualifier directly before the cursor (`system:`,
/// `system:pri`) and a qualified call target further back
/// (`int x = system:println(`). Returns `None` when the statement has no
/// package qualifier in either position.
pub(crate) fn qualified_package(statement: &str) -> Option<String> {
    // Qualifier right before the cursor, possibly behind a partial
    // member name.
    let chars: Vec<char> = statement.chars().collect();
    let mut i = chars.len();
    while i > 0 && (chars[i - 1].is_alphanumeric() || chars[i - 1] == '_') {
        i -= 1;
    }
    if i > 0 && chars[i - 1] == ':' {
        if let Some(name) = identifier_ending_at(&chars, i - 1) {
            return Some(name);
        }
    }

    // Qualified call target: text between the assignment and the first
    // opening parenthesis.
    let rhs = match statement.find('=') {
        Some(eq) => statement[eq + 1..].trim_start(),
        None => statement,
    };
    let target = rhs.split('(').next().unwrap_or(rhs).trim();
    let (package, _member) = target.rsplit_once(':')?;
    let package = package.trim();
    if !package.is_empty()
        && package
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_')
        && !package.starts_with(|c: char| c.is_ascii_digit())
    {
        Some(package.to_string())
    } else {
        None
    }
}

/// Read the identifier that ends right before `end`, if one is there.
fn identifier_ending_at(chars: &[char], end: usize) -> Option<String> {
    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '_') {
        start -= 1;
    }
    if start == end || chars[start].is_ascii_digit() {
        return None;
    }
    Some(chars[start..end].iter().collect())
}
