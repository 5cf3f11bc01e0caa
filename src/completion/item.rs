//! Completion item model.
//!
//! Resolvers build [`CompletionItem`]s rather than LSP wire types so the
//! core stays independent of the protocol layer; `server.rs` converts to
//! `tower_lsp::lsp_types::CompletionItem` when serializing the response.

use tower_lsp::lsp_types;
use tower_lsp::lsp_types::CompletionItemKind;

use crate::completion::constants::*;

/// A single suggestion surfaced to the editor.
///
/// Immutable once constructed. Items that share a `sort_text` tier keep
/// the order in which the resolver emitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// Display label (e.g. `println`, `create`).
    pub label: String,
    /// Text inserted when the item is accepted. May differ from the
    /// label (e.g. the `create` keyword inserts a trailing space).
    pub insert_text: String,
    /// Detail-kind tag from [`crate::completion::constants`].
    pub detail: &'static str,
    /// Priority tier from [`crate::completion::constants`].
    pub sort_text: &'static str,
}

impl CompletionItem {
    pub fn new(
        label: impl Into<String>,
        insert_text: impl Into<String>,
        detail: &'static str,
        sort_text: &'static str,
    ) -> Self {
        Self {
            label: label.into(),
            insert_text: insert_text.into(),
            detail,
            sort_text,
        }
    }

    /// The `create` keyword item appended on the plain-declaration path.
    ///
    /// The inserted text carries a trailing space so the cursor lands
    /// ready for the type name.
    pub fn create_keyword() -> Self {
        Self::new(
            CREATE_KEYWORD,
            format!("{} ", CREATE_KEYWORD),
            KEYWORD_TYPE,
            PRIORITY_7,
        )
    }

    /// Convert to the LSP wire type.
    pub fn to_lsp(&self) -> lsp_types::CompletionItem {
        let kind = match self.detail {
            KEYWORD_TYPE => CompletionItemKind::KEYWORD,
            VARIABLE_TYPE => CompletionItemKind::VARIABLE,
            FUNCTION_TYPE => CompletionItemKind::FUNCTION,
            ACTION_TYPE => CompletionItemKind::METHOD,
            PACKAGE_TYPE => CompletionItemKind::MODULE,
            _ => CompletionItemKind::TEXT,
        };

        lsp_types::CompletionItem {
            label: self.label.clone(),
            kind: Some(kind),
            detail: Some(self.detail.to_string()),
            insert_text: Some(self.insert_text.clone()),
            filter_text: Some(self.label.clone()),
            sort_text: Some(self.sort_text.to_string()),
            ..lsp_types::CompletionItem::default()
        }
    }
}
