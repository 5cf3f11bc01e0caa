/// Completion-related modules.
///
/// This sub-module groups the completion core:
/// - **constants**: detail-kind tags and sortText priority tiers
/// - **item**: the completion item model and LSP conversion
/// - **classifier**: invocation-statement detection
/// - **filters**: the package/action/function item filter pipeline
/// - **resolver**: the `ContextResolver` trait and dispatch registry
/// - **variable_def**: the variable-definition statement resolver
/// - **package_member**: the package-qualified member resolver
pub mod classifier;
pub mod constants;
pub mod filters;
pub mod item;
pub mod package_member;
pub mod resolver;
pub mod variable_def;
