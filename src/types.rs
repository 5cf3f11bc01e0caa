//! Data types used throughout the Ballerina language server.
//!
//! This module contains the "model" structs and enums shared by the
//! completion engine: the symbol catalog entries, the token/grammar
//! classification of the cursor position, and the per-request context
//! snapshot the resolvers consume.

/// Kind of a named entity visible at the cursor's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A declared variable (e.g. `int count = 0;`).
    Variable,
    /// A top-level function.
    Function,
    /// A connector action or service resource.
    Action,
    /// An imported package, navigable via `pkg:`.
    Package,
}

/// A single entry in the symbol catalog.
///
/// Owned by the catalog; resolvers only read these, never mutate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// The symbol name as written in source (e.g. "println", "count").
    pub name: String,
    /// What kind of entity this is.
    pub kind: SymbolKind,
    /// The package the symbol belongs to, if it is package-qualified.
    /// `None` means the symbol is declared in the current file.
    pub package: Option<String>,
}

impl SymbolInfo {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            package: None,
        }
    }

    pub fn in_package(
        name: impl Into<String>,
        kind: SymbolKind,
        package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            package: Some(package.into()),
        }
    }
}

/// Classification of the token immediately before the cursor
/// (skipping any partial identifier the user is still typing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// An assignment `=` (cursor is on the right-hand side of a definition).
    Assign,
    /// A package qualifier `:` (e.g. `system:`).
    Colon,
    /// A member-access dot (e.g. `conn.`).
    Dot,
    /// A plain identifier character.
    Identifier,
    /// Anything else, including start of statement.
    Other,
}

/// Which language construct surrounds the cursor.
///
/// This is a closed set: the resolver registry maps each kind to exactly
/// one resolver, so dispatch stays exhaustive-checkable at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarContext {
    /// A variable definition statement (`int x = ...`).
    VariableDefinition,
    /// A package-qualified position (`pkg:` followed by a partial name).
    PackageMember,
}

impl GrammarContext {
    /// Human-readable name used in log and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammarContext::VariableDefinition => "variable-definition",
            GrammarContext::PackageMember => "package-member",
        }
    }
}

/// Immutable snapshot of the cursor-local syntactic state for one
/// completion request.
///
/// Built fresh per request by [`crate::context::build_context`], read by
/// the resolvers, and discarded once the response is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    /// The current statement text up to the cursor, leading whitespace
    /// trimmed (e.g. `"int x = foo("`).
    pub statement: String,
    /// Token class immediately before the cursor.
    pub preceding_token: TokenClass,
    /// The grammar context the engine dispatches on.
    pub context_kind: GrammarContext,
}
