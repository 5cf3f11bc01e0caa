//! Resolver dispatch.
//!
//! Each [`GrammarContext`] kind has exactly one [`ContextResolver`]
//! implementation. The [`ResolverRegistry`] is built once at server
//! startup and only read afterwards; the completion handler looks up the
//! resolver for the detected context and delegates to it. Resolvers may
//! themselves consult the registry for nested resolution (e.g. the item
//! filter recursing into package-member completion), which is why the
//! registry is threaded through `resolve`.

use std::collections::HashMap;

use thiserror::Error;

use crate::completion::constants::*;
use crate::completion::item::CompletionItem;
use crate::completion::package_member::PackageMemberResolver;
use crate::completion::variable_def::VariableDefResolver;
use crate::types::{CompletionContext, GrammarContext, SymbolInfo, SymbolKind};

/// Raised when a completion request is dispatched for a grammar context
/// with no registered resolver.
///
/// This is an engine-level failure: the handler surfaces it to the
/// client as a request error rather than returning a partial list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no completion resolver registered for {context} context")]
pub struct UnknownContextError {
    pub context: &'static str,
}

/// One resolver per grammar context.
///
/// Implementations are stateless values: `resolve` reads the context and
/// catalog and returns a freshly built item list, so concurrent requests
/// can share a resolver without locking. The only error a resolver may
/// surface is a failed registry lookup during nested resolution; it is
/// propagated, never swallowed.
pub trait ContextResolver: Send + Sync {
    fn resolve(
        &self,
        ctx: &CompletionContext,
        symbols: &[SymbolInfo],
        registry: &ResolverRegistry,
    ) -> Result<Vec<CompletionItem>, UnknownContextError>;
}

/// Read-only mapping from grammar context to resolver, populated once in
/// [`ResolverRegistry::new`].
pub struct ResolverRegistry {
    resolvers: HashMap<GrammarContext, Box<dyn ContextResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        let mut resolvers: HashMap<GrammarContext, Box<dyn ContextResolver>> = HashMap::new();
        resolvers.insert(
            GrammarContext::VariableDefinition,
            Box::new(VariableDefResolver),
        );
        resolvers.insert(GrammarContext::PackageMember, Box::new(PackageMemberResolver));
        Self { resolvers }
    }

    /// Look up the resolver for a grammar context.
    pub fn lookup(
        &self,
        kind: GrammarContext,
    ) -> Result<&dyn ContextResolver, UnknownContextError> {
        self.resolvers
            .get(&kind)
            .map(|r| r.as_ref())
            .ok_or(UnknownContextError {
                context: kind.as_str(),
            })
    }

    /// Dispatch a completion request to the resolver for `kind`.
    pub fn resolve(
        &self,
        kind: GrammarContext,
        ctx: &CompletionContext,
        symbols: &[SymbolInfo],
    ) -> Result<Vec<CompletionItem>, UnknownContextError> {
        self.lookup(kind)?.resolve(ctx, symbols, self)
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert every catalog symbol into a generic completion item,
/// preserving catalog order.
///
/// This is the shared population routine used by the plain-declaration
/// path: each symbol appears exactly once, tagged and tiered by kind.
pub(crate) fn populate_symbol_items(symbols: &[SymbolInfo]) -> Vec<CompletionItem> {
    symbols
        .iter()
        .map(|symbol| {
            let (detail, sort_text) = match symbol.kind {
                SymbolKind::Variable => (VARIABLE_TYPE, PRIORITY_2),
                SymbolKind::Function => (FUNCTION_TYPE, PRIORITY_3),
                SymbolKind::Action => (ACTION_TYPE, PRIORITY_3),
                SymbolKind::Package => (PACKAGE_TYPE, PRIORITY_4),
            };
            CompletionItem::new(symbol.name.clone(), symbol.name.clone(), detail, sort_text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenClass;

    fn ctx(kind: GrammarContext) -> CompletionContext {
        CompletionContext {
            statement: "int x = ".to_string(),
            preceding_token: TokenClass::Assign,
            context_kind: kind,
        }
    }

    #[test]
    fn registry_has_a_resolver_for_every_context_kind() {
        let registry = ResolverRegistry::new();
        assert!(registry.lookup(GrammarContext::VariableDefinition).is_ok());
        assert!(registry.lookup(GrammarContext::PackageMember).is_ok());
    }

    #[test]
    fn dispatch_reaches_the_variable_definition_resolver() {
        let registry = ResolverRegistry::new();
        let items = registry
            .resolve(GrammarContext::VariableDefinition, &ctx(GrammarContext::VariableDefinition), &[])
            .unwrap();
        // Empty catalog on the declaration path still yields the keyword.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, CREATE_KEYWORD);
    }

    #[test]
    fn population_preserves_catalog_order() {
        let symbols = vec![
            SymbolInfo::new("alpha", SymbolKind::Function),
            SymbolInfo::new("beta", SymbolKind::Variable),
            SymbolInfo::new("gamma", SymbolKind::Package),
        ];
        let items = populate_symbol_items(&symbols);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "beta", "gamma"]);
        assert_eq!(items[0].detail, FUNCTION_TYPE);
        assert_eq!(items[1].detail, VARIABLE_TYPE);
        assert_eq!(items[2].detail, PACKAGE_TYPE);
    }

    #[test]
    fn population_of_empty_catalog_is_empty() {
        assert!(populate_symbol_items(&[]).is_empty());
    }
}
