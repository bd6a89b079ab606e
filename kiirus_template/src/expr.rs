//! Lexical rewriting of template expressions.
//!
//! Expressions are never parsed into a tree. A single pattern classifies the
//! source into tokens and only bare identifiers are replaced, so the result
//! stays a string for a host evaluator to run later with `instance` and
//! `locals` in scope.

use crate::ast::Expression;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Identifiers that are left untouched even when they appear bare.
pub static GLOBALS: [&str; 8] = [
    "NaN",
    "false",
    "in",
    "null",
    "this",
    "true",
    "typeof",
    "undefined",
];

// Alternatives in priority order: string literals, a number glued to an
// identifier, member access, object key, and finally the bare identifier,
// which is the only capture.
static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#""[^"]*"|'[^']*'"#,
        r"|[0-9]+[a-zA-Z$_][0-9a-zA-Z_]*",
        r"|\.[a-zA-Z$_][0-9a-zA-Z_]*",
        r"|[a-zA-Z$_][0-9a-zA-Z_]*:",
        r"|([a-zA-Z$_][0-9a-zA-Z_]*)",
    ))
    .unwrap()
});

/// Rewrite free identifiers of `source` into `instance.<name>`,
/// or `locals.<name>` when the identifier starts with `$`.
///
/// The expression is dynamic as soon as one identifier is rewritten.
pub fn rewrite(source: &str) -> Expression {
    let mut dynamic = false;

    let expr = EXPRESSION_RE.replace_all(source, |caps: &Captures| {
        let Some(name) = caps.get(1).map(|name| name.as_str()) else {
            return caps[0].to_string();
        };
        // a lone `$` names nothing
        if GLOBALS.contains(&name) || name == "$" {
            return name.to_string();
        }

        dynamic = true;
        match name.strip_prefix('$') {
            Some(local) => format!("locals.{local}"),
            None => format!("instance.{name}"),
        }
    });

    Expression {
        expr: expr.into_owned(),
        dynamic,
    }
}
