//! Visible-symbol catalog.
//!
//! Builds the ordered list of symbols visible at the cursor from a
//! light, line-oriented scan of the document: imported packages,
//! top-level functions, connector actions, and variables declared before
//! the cursor. This is deliberately not a full symbol table — no type
//! information, no nested scopes — just enough for the completion
//! resolvers, which only read names and kinds.

use tower_lsp::lsp_types::Position;

use crate::types::{SymbolInfo, SymbolKind};

/// Library packages whose members are seeded into the catalog when the
/// corresponding `import ballerina.lang.*` appears in the document.
const BUILTIN_PACKAGE_FUNCTIONS: &[(&str, &[&str])] = &[
    ("system", &["println", "print", "log"]),
    ("strings", &["length", "trim", "toUpperCase", "toLowerCase"]),
    ("messages", &["getHeader", "setHeader", "getJsonPayload", "setJsonPayload"]),
    ("jsons", &["getString", "getInt", "set", "remove"]),
];

/// Value types that can open a variable definition statement.
const VALUE_TYPES: &[&str] = &[
    "int", "long", "float", "double", "boolean", "string", "message", "map", "json", "xml",
    "exception",
];

/// Collect the symbols visible at `position`, in declaration order.
///
/// Imports, functions, and actions are visible file-wide; variables only
/// from lines before the cursor, so a half-typed definition never
/// suggests itself.
pub fn visible_symbols(content: &str, position: Position) -> Vec<SymbolInfo> {
    let mut symbols = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("import ") {
            let path = rest.trim_end_matches(';').trim();
            let Some(package) = path.rsplit('.').next().filter(|p| !p.is_empty()) else {
                continue;
            };
            symbols.push(SymbolInfo::new(package, SymbolKind::Package));
            if let Some((_, functions)) =
                BUILTIN_PACKAGE_FUNCTIONS.iter().find(|(p, _)| *p == package)
            {
                for function in *functions {
                    symbols.push(SymbolInfo::in_package(
                        *function,
                        SymbolKind::Function,
                        package,
                    ));
                }
            }
        } else if let Some(rest) = trimmed.strip_prefix("function ") {
            if let Some(name) = leading_identifier(rest) {
                symbols.push(SymbolInfo::new(name, SymbolKind::Function));
            }
        } else if let Some(rest) = trimmed.strip_prefix("action ") {
            if let Some(name) = leading_identifier(rest) {
                symbols.push(SymbolInfo::new(name, SymbolKind::Action));
            }
        } else if line_no < position.line as usize {
            if let Some(name) = variable_declaration(trimmed) {
                symbols.push(SymbolInfo::new(name, SymbolKind::Variable));
            }
        }
    }

    symbols
}

/// Read the identifier at the start of `text`, if any.
fn leading_identifier(text: &str) -> Option<String> {
    let name: String = text
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        None
    } else {
        Some(name)
    }
}

/// Detect a variable definition statement (`int count = 0;`,
/// `message m;`) and return the variable name.
fn variable_declaration(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let type_token = tokens.next()?;
    if !VALUE_TYPES.contains(&type_token) {
        return None;
    }
    let name_token = tokens.next()?;
    let name = name_token.trim_end_matches([';', '=']);
    leading_identifier(name).filter(|n| n.len() == name.len())
}
