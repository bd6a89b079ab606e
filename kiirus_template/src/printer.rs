//! Indented outline of a compiled tree.
//!
//! Elements print like tags, text prints as the quoted escaped string,
//! dynamic expressions print as `{expr}` and static ones as `{=expr}`.

use crate::{ast::*, config::PrintOptions, ctx::Ctx};
use itertools::Itertools;

pub(super) trait DocGen {
    fn doc(&self, ctx: &mut Ctx<'_>);
}

impl DocGen for Element {
    fn doc(&self, ctx: &mut Ctx<'_>) {
        let open = if self.props.is_empty() {
            format!("<{}", self.tag_name)
        } else {
            format!(
                "<{} {}",
                self.tag_name,
                self.props.iter().map(attribute_doc).join(" ")
            )
        };

        if self.children.is_empty() {
            ctx.line(&format!("{open} />"));
            return;
        }

        ctx.line(&format!("{open}>"));
        ctx.nest_with(|ctx| {
            self.children.iter().for_each(|child| child.doc(ctx));
        });
        ctx.line(&format!("</{}>", self.tag_name));
    }
}

impl DocGen for Expression {
    fn doc(&self, ctx: &mut Ctx<'_>) {
        ctx.line(&expression_doc(self));
    }
}

impl DocGen for Node {
    fn doc(&self, ctx: &mut Ctx<'_>) {
        match self {
            Node::Element(element) => element.doc(ctx),
            Node::Text(text_node) => text_node.doc(ctx),
            Node::Expression(expr) => expr.doc(ctx),
        }
    }
}

impl DocGen for Root {
    fn doc(&self, ctx: &mut Ctx<'_>) {
        self.children.iter().for_each(|child| child.doc(ctx));
    }
}

impl DocGen for TextNode {
    fn doc(&self, ctx: &mut Ctx<'_>) {
        ctx.line(&format!("\"{}\"", self.raw));
    }
}

fn attribute_doc(attr: &Attribute) -> String {
    match &attr.value {
        AttrValue::Literal(value) if value.is_empty() => attr.name.clone(),
        AttrValue::Literal(value) => format!("{}=\"{value}\"", attr.name),
        AttrValue::Expression(expr) => format!("{}={}", attr.name, expression_doc(expr)),
    }
}

fn expression_doc(expr: &Expression) -> String {
    if expr.dynamic {
        format!("{{{}}}", expr.expr)
    } else {
        format!("{{={}}}", expr.expr)
    }
}

/// Print the tree as an indented outline, one node per line.
pub fn print_tree(root: &Root, options: &PrintOptions) -> String {
    let mut ctx = Ctx::new(options);
    root.doc(&mut ctx);
    ctx.output
}
