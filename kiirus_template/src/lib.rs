#![doc = include_str!("../README.md")]

pub mod ast;
pub mod config;
mod ctx;
mod error;
pub mod expr;
mod helpers;
mod parser;
mod printer;

use crate::{ast::Root, config::CompileOptions, parser::Parser};
pub use crate::{error::*, helpers::custom_element_name, printer::print_tree};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of [`compile_with_options`].
pub struct Compiled {
    pub root: Root,
    /// Advisory diagnostics, only collected in development mode.
    /// Positions are byte offsets after block comments were stripped.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile a template with default options.
///
/// ```
/// use kiirus_template::{ast::Node, compile};
///
/// let root = compile("<p>{$index + count}</p>");
/// let Node::Element(p) = &root.children[0] else { unreachable!() };
/// let Node::Expression(expr) = &p.children[0] else { unreachable!() };
/// assert_eq!(expr.expr, "locals.index + instance.count");
/// assert!(expr.dynamic);
/// ```
pub fn compile(source: &str) -> Root {
    compile_with_options(source, &CompileOptions::default()).root
}

/// Compile a template.
///
/// Compilation never fails: malformed markup produces a best-effort tree,
/// and in development mode the problems found are reported as diagnostics.
pub fn compile_with_options(source: &str, options: &CompileOptions) -> Compiled {
    let source = if options.strip_block_comments {
        helpers::strip_block_comments(source)
    } else {
        source.into()
    };

    let (root, diagnostics) = Parser::new(&source, options).parse_root();
    log::debug!(
        "compiled template into {} top-level nodes with {} diagnostics",
        root.children.len(),
        diagnostics.len()
    );

    Compiled { root, diagnostics }
}
