//! Statement classification.
//!
//! Decides whether the statement under the cursor is an invocation-style
//! statement (function call, connector action call, or worker
//! send/receive) by scanning token patterns in the partial statement
//! text. The statement is usually incomplete while the user types, so
//! this deliberately does not parse; it looks for the shapes
//! `identifier(`, `pkg:identifier(`, `subject.action(` and the worker
//! arrows `->` / `<-`.

use crate::types::CompletionContext;

/// Returns true iff the right-hand side of the current statement is
/// syntactically a function, action, or worker invocation.
///
/// Total and deterministic: every malformed or partial statement
/// classifies, and anything ambiguous classifies as `false` — the
/// plain-declaration path offers both keywords and symbols, so it is
/// the safe fallback.
pub fn is_invocation_statement(ctx: &CompletionContext) -> bool {
    let Some(eq) = find_assignment(&ctx.statement) else {
        return false;
    };
    let rhs = ctx.statement[eq + 1..].trim_start();
    if rhs.is_empty() {
        return false;
    }

    // Worker send/receive: `msg -> sampleWorker` / `result <- sampleWorker`.
    if rhs.contains("->") || rhs.contains("<-") {
        return true;
    }

    is_call_expression(rhs)
}

/// Find the byte offset of the assignment `=`, skipping comparison
/// operators (`==`, `!=`, `<=`, `>=`).
fn find_assignment(statement: &str) -> Option<usize> {
    let bytes = statement.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'=' {
            let next_eq = bytes.get(i + 1) == Some(&b'=');
            let prev_op = i > 0 && matches!(bytes[i - 1], b'=' | b'!' | b'<' | b'>');
            if next_eq {
                i += 2;
                continue;
            }
            if !prev_op {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

/// Check whether `rhs` is a (possibly qualified, possibly partial) call
/// expression: one or more identifiers joined by `:` or `.`, followed by
/// an opening parenthesis.
fn is_call_expression(rhs: &str) -> bool {
    let chars: Vec<char> = rhs.chars().collect();
    let mut i = 0;
    let mut saw_identifier = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_alphanumeric() || c == '_' {
            // Identifiers must not start with a digit.
            if !saw_identifier && c.is_ascii_digit() {
                return false;
            }
            saw_identifier = true;
            i += 1;
        } else if c == ':' || c == '.' {
            if !saw_identifier {
                return false;
            }
            i += 1;
        } else if c == ' ' || c == '\t' {
            i += 1;
        } else if c == '(' {
            return saw_identifier;
        } else {
            return false;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GrammarContext, TokenClass};

    fn ctx(statement: &str) -> CompletionContext {
        CompletionContext {
            statement: statement.to_string(),
            preceding_token: TokenClass::Other,
            context_kind: GrammarContext::VariableDefinition,
        }
    }

    #[test]
    fn partial_call_is_invocation() {
        assert!(is_invocation_statement(&ctx("int x = foo(")));
    }

    #[test]
    fn complete_call_is_invocation() {
        assert!(is_invocation_statement(&ctx("int x = foo(1, 2)")));
    }

    #[test]
    fn package_qualified_call_is_invocation() {
        assert!(is_invocation_statement(&ctx("string s = strings:trim(")));
    }

    #[test]
    fn action_call_is_invocation() {
        assert!(is_invocation_statement(&ctx("message m = conn.get(")));
    }

    #[test]
    fn worker_send_is_invocation() {
        assert!(is_invocation_statement(&ctx("message m = msg -> sampleWorker")));
    }

    #[test]
    fn worker_receive_is_invocation() {
        assert!(is_invocation_statement(&ctx("message m = result <- sampleWorker")));
    }

    #[test]
    fn empty_rhs_is_not_invocation() {
        assert!(!is_invocation_statement(&ctx("int x = ")));
    }

    #[test]
    fn bare_identifier_is_not_invocation() {
        assert!(!is_invocation_statement(&ctx("int x = foo")));
    }

    #[test]
    fn missing_assignment_is_not_invocation() {
        assert!(!is_invocation_statement(&ctx("int x")));
        assert!(!is_invocation_statement(&ctx("")));
    }

    #[test]
    fn literal_rhs_is_not_invocation() {
        assert!(!is_invocation_statement(&ctx("string s = \"hello\"")));
        assert!(!is_invocation_statement(&ctx("int x = 42")));
    }

    #[test]
    fn operator_led_rhs_is_not_invocation() {
        // `3 + foo(` is an expression, not a call statement; ambiguity
        // falls back to the declaration path.
        assert!(!is_invocation_statement(&ctx("int x = 3 + foo(")));
    }

    #[test]
    fn comparison_is_not_assignment() {
        assert!(!is_invocation_statement(&ctx("x == foo(")));
        assert!(!is_invocation_statement(&ctx("x != y")));
    }

    #[test]
    fn assignment_after_comparison_is_found() {
        assert!(is_invocation_statement(&ctx("boolean b = eq(")));
    }

    #[test]
    fn classification_is_deterministic() {
        let c = ctx("int x = foo(");
        let first = is_invocation_statement(&c);
        for _ in 0..10 {
            assert_eq!(first, is_invocation_statement(&c));
        }
    }
}
