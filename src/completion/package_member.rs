//! Package-member completion.
//!
//! Handles the position right after a package qualifier (`system:`),
//! listing the invocable members of that package. Reached two ways:
//! directly, when the context builder detects the qualifier before the
//! cursor, and via registry delegation from the item filter when an
//! invocation target turns out to be package-qualified.

use crate::completion::filters::PackageActionFunctionFilter;
use crate::completion::item::CompletionItem;
use crate::completion::resolver::{ContextResolver, ResolverRegistry, UnknownContextError};
use crate::context::qualified_package;
use crate::types::{CompletionContext, SymbolInfo, SymbolKind};

pub struct PackageMemberResolver;

impl ContextResolver for PackageMemberResolver {
    /// List the functions and actions of the package named by the
    /// qualifier in the current statement, in catalog order.
    ///
    /// An unknown or missing qualifier yields an empty list: the user may
    /// still be typing the package name, and an empty completion list is
    /// a valid response.
    fn resolve(
        &self,
        ctx: &CompletionContext,
        symbols: &[SymbolInfo],
        _registry: &ResolverRegistry,
    ) -> Result<Vec<CompletionItem>, UnknownContextError> {
        let Some(package) = qualified_package(&ctx.statement) else {
            return Ok(Vec::new());
        };

        let members: Vec<SymbolInfo> = symbols
            .iter()
            .filter(|symbol| {
                matches!(symbol.kind, SymbolKind::Function | SymbolKind::Action)
                    && symbol.package.as_deref() == Some(package.as_str())
            })
            .cloned()
            .collect();

        Ok(PackageActionFunctionFilter::to_items(members))
    }
}
