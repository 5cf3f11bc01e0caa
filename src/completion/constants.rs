//! Shared completion constants.
//!
//! Detail-kind tags and sortText priority tiers form a small closed set
//! consumed by editor-side ranking, so they live here rather than being
//! scattered across the resolvers.

// ─── Detail-kind tags ───────────────────────────────────────────────────

pub const KEYWORD_TYPE: &str = "keyword";
pub const VARIABLE_TYPE: &str = "variable";
pub const FUNCTION_TYPE: &str = "function";
pub const ACTION_TYPE: &str = "action";
pub const PACKAGE_TYPE: &str = "package";

// ─── Sort priority tiers ────────────────────────────────────────────────
//
// Editors sort completion lists lexicographically by sortText, so a lower
// tier string ranks higher. Items sharing a tier keep their emitted order.

pub const PRIORITY_1: &str = "1";
pub const PRIORITY_2: &str = "2";
pub const PRIORITY_3: &str = "3";
pub const PRIORITY_4: &str = "4";
pub const PRIORITY_5: &str = "5";
pub const PRIORITY_6: &str = "6";
pub const PRIORITY_7: &str = "7";

// ─── Keywords ───────────────────────────────────────────────────────────

/// The object-instantiation keyword offered in plain variable definitions.
pub const CREATE_KEYWORD: &str = "create";
