//! Variable-definition statement completion.

use crate::completion::classifier::is_invocation_statement;
use crate::completion::filters::PackageActionFunctionFilter;
use crate::completion::item::CompletionItem;
use crate::completion::resolver::{
    ContextResolver, ResolverRegistry, UnknownContextError, populate_symbol_items,
};
use crate::types::{CompletionContext, SymbolInfo};

/// Resolver for variable-definition statements (`int x = ...`).
///
/// The statement may be either a plain declaration or an invocation
/// (function call, action call, worker send/receive), and the two need
/// different suggestion sets:
///
/// - invocation: only invocable symbols make sense as the call target,
///   so the item filter pipeline produces the whole result and no
///   keyword is offered;
/// - plain declaration: every visible symbol is offered, followed by the
///   `create` keyword for object instantiation.
pub struct VariableDefResolver;

impl ContextResolver for VariableDefResolver {
    fn resolve(
        &self,
        ctx: &CompletionContext,
        symbols: &[SymbolInfo],
        registry: &ResolverRegistry,
    ) -> Result<Vec<CompletionItem>, UnknownContextError> {
        if is_invocation_statement(ctx) {
            let filter = PackageActionFunctionFilter;
            return filter.completion_items(ctx, symbols, registry);
        }

        // Plain declaration: symbols first, then exactly one `create`
        // keyword item, always last.
        let mut items = populate_symbol_items(symbols);
        items.push(CompletionItem::create_keyword());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::constants::*;
    use crate::types::{GrammarContext, SymbolKind, TokenClass};

    fn ctx(statement: &str) -> CompletionContext {
        CompletionContext {
            statement: statement.to_string(),
            preceding_token: TokenClass::Other,
            context_kind: GrammarContext::VariableDefinition,
        }
    }

    fn resolve(statement: &str, symbols: &[SymbolInfo]) -> Vec<CompletionItem> {
        let registry = ResolverRegistry::new();
        VariableDefResolver
            .resolve(&ctx(statement), symbols, &registry)
            .unwrap()
    }

    #[test]
    fn declaration_offers_symbols_then_create_keyword() {
        let symbols = vec![
            SymbolInfo::new("y", SymbolKind::Variable),
            SymbolInfo::new("foo", SymbolKind::Function),
        ];
        let items = resolve("int x = ", &symbols);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "y");
        assert_eq!(items[0].detail, VARIABLE_TYPE);
        assert_eq!(items[1].label, "foo");
        assert_eq!(items[1].detail, FUNCTION_TYPE);

        let keyword = &items[2];
        assert_eq!(keyword.label, "create");
        assert_eq!(keyword.insert_text, "create ");
        assert_eq!(keyword.detail, KEYWORD_TYPE);
        assert_eq!(keyword.sort_text, PRIORITY_7);
    }

    #[test]
    fn declaration_emits_exactly_one_keyword_item_and_it_is_last() {
        let symbols = vec![
            SymbolInfo::new("a", SymbolKind::Variable),
            SymbolInfo::new("b", SymbolKind::Function),
            SymbolInfo::new("c", SymbolKind::Package),
        ];
        let items = resolve("int x = ", &symbols);
        let keyword_count = items.iter().filter(|i| i.detail == KEYWORD_TYPE).count();
        assert_eq!(keyword_count, 1);
        assert_eq!(items.last().unwrap().detail, KEYWORD_TYPE);
    }

    #[test]
    fn declaration_passes_every_symbol_through_once_in_order() {
        let symbols = vec![
            SymbolInfo::new("first", SymbolKind::Function),
            SymbolInfo::new("second", SymbolKind::Variable),
            SymbolInfo::new("third", SymbolKind::Action),
        ];
        let items = resolve("int x = ", &symbols);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third", "create"]);
    }

    #[test]
    fn empty_catalog_yields_only_the_create_keyword() {
        let items = resolve("int x = ", &[]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "create");
        assert_eq!(items[0].insert_text, "create ");
    }

    #[test]
    fn invocation_offers_only_invocables_and_no_keyword() {
        let symbols = vec![
            SymbolInfo::new("y", SymbolKind::Variable),
            SymbolInfo::new("foo", SymbolKind::Function),
        ];
        let items = resolve("int x = foo(", &symbols);

        assert!(items.iter().all(|i| i.detail != KEYWORD_TYPE));
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["foo"]);
    }

    #[test]
    fn worker_invocation_takes_the_invocation_path() {
        let symbols = vec![SymbolInfo::new("y", SymbolKind::Variable)];
        let items = resolve("message m = msg -> sampleWorker", &symbols);
        assert!(items.iter().all(|i| i.detail != KEYWORD_TYPE));
    }

    #[test]
    fn resolution_is_deterministic() {
        let symbols = vec![
            SymbolInfo::new("foo", SymbolKind::Function),
            SymbolInfo::new("y", SymbolKind::Variable),
        ];
        let first = resolve("int x = ", &symbols);
        for _ in 0..5 {
            assert_eq!(first, resolve("int x = ", &symbols));
        }
    }

    #[test]
    fn inputs_are_not_mutated() {
        let symbols = vec![SymbolInfo::new("foo", SymbolKind::Function)];
        let before = symbols.clone();
        let _ = resolve("int x = ", &symbols);
        let _ = resolve("int x = foo(", &symbols);
        assert_eq!(symbols, before);
    }
}
