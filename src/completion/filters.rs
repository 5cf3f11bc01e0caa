//! Item filter pipeline for invocation-style statements.
//!
//! When the statement under the cursor is a call, only invocable symbols
//! are valid suggestions. [`PackageActionFunctionFilter`] narrows the
//! catalog to functions and actions reachable from the current scope and
//! converts them to completion items. Package-qualified call targets
//! (`pkg:fn(`) are not handled here: the filter recurses through the
//! resolver registry into the package-member resolver, so package
//! navigation logic lives in one place.

use crate::completion::constants::*;
use crate::completion::item::CompletionItem;
use crate::completion::resolver::{ResolverRegistry, UnknownContextError};
use crate::context::qualified_package;
use crate::types::{CompletionContext, GrammarContext, SymbolInfo, SymbolKind};

/// Filters a symbol catalog down to invocable actions and functions.
///
/// Stateless; one instance can serve concurrent requests.
pub struct PackageActionFunctionFilter;

impl PackageActionFunctionFilter {
    /// Full pipeline: filter the catalog and convert to completion items.
    ///
    /// A package-qualified call target delegates to the package-member
    /// resolver via the registry; a missing registry entry propagates to
    /// the caller.
    pub fn completion_items(
        &self,
        ctx: &CompletionContext,
        symbols: &[SymbolInfo],
        registry: &ResolverRegistry,
    ) -> Result<Vec<CompletionItem>, UnknownContextError> {
        if qualified_package(&ctx.statement).is_some() {
            return registry.resolve(GrammarContext::PackageMember, ctx, symbols);
        }
        Ok(Self::to_items(self.filter(ctx, symbols)))
    }

    /// Retain only function and action symbols whose containing package
    /// is reachable from the current scope: either declared in the
    /// current file, or belonging to a package that appears in the
    /// catalog as an import.
    ///
    /// Output order is the catalog's declaration order. An empty catalog
    /// yields an empty list, not an error.
    pub fn filter(&self, _ctx: &CompletionContext, symbols: &[SymbolInfo]) -> Vec<SymbolInfo> {
        symbols
            .iter()
            .filter(|symbol| {
                matches!(symbol.kind, SymbolKind::Function | SymbolKind::Action)
                    && Self::is_reachable(symbol, symbols)
            })
            .cloned()
            .collect()
    }

    fn is_reachable(symbol: &SymbolInfo, symbols: &[SymbolInfo]) -> bool {
        match &symbol.package {
            None => true,
            Some(package) => symbols
                .iter()
                .any(|s| s.kind == SymbolKind::Package && s.name == *package),
        }
    }

    /// Convert filtered symbols into completion items, preserving order.
    pub fn to_items(filtered: Vec<SymbolInfo>) -> Vec<CompletionItem> {
        filtered
            .into_iter()
            .map(|symbol| {
                let detail = match symbol.kind {
                    SymbolKind::Action => ACTION_TYPE,
                    _ => FUNCTION_TYPE,
                };
                CompletionItem::new(symbol.name.clone(), symbol.name, detail, PRIORITY_3)
            })
            .collect()
    }
}
