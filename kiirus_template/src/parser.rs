//! Single-pass template scanner.
//!
//! There is no separate tokenizer: the scanner looks at the current character,
//! hands over to a sub-parser which consumes as much as it needs, and resumes
//! right after it. Malformed input never fails, it only produces a
//! best-effort tree and, in development mode, diagnostics.

use crate::{
    ast::*,
    config::CompileOptions,
    error::{Diagnostic, DiagnosticKind},
    expr, helpers,
};
use std::{iter::Peekable, str::CharIndices};

pub(crate) struct Parser<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,
    stack: Vec<OpenElement>,
    development: bool,
    diagnostics: Vec<Diagnostic>,
}

/// An element whose closing tag hasn't been seen yet.
struct OpenElement {
    element: Element,
    /// Component references taken out of the element's props, in source order.
    wrappers: Vec<Attribute>,
    pos: usize,
}

impl OpenElement {
    fn into_node(self) -> Node {
        wrap_components(self.element, self.wrappers)
    }
}

impl<'s> Parser<'s> {
    pub(crate) fn new(source: &'s str, options: &CompileOptions) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            stack: vec![OpenElement {
                element: Element::new(ROOT_TYPE),
                wrappers: vec![],
                pos: 0,
            }],
            development: options.development,
            diagnostics: vec![],
        }
    }

    pub(crate) fn parse_root(mut self) -> (Root, Vec<Diagnostic>) {
        while self.chars.peek().is_some() {
            self.parse_node();
        }

        while self.stack.len() > 1 {
            if let Some(open) = self.stack.pop() {
                let tag_name = open.element.tag_name.clone();
                self.report(DiagnosticKind::UnclosedTag(tag_name), open.pos);
                self.insert(open.into_node());
            }
        }

        let root = self
            .stack
            .pop()
            .map(|open| Root {
                children: open.element.children,
            })
            .unwrap_or_default();
        (root, self.diagnostics)
    }

    fn current_pos(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len())
    }

    fn report(&mut self, kind: DiagnosticKind, pos: usize) {
        if self.development {
            let diagnostic = Diagnostic { kind, pos };
            log::warn!("{diagnostic}");
            self.diagnostics.push(diagnostic);
        }
    }

    /// Append a node to the element on top of the stack.
    fn insert(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.element.children.push(node);
        }
    }

    fn parse_node(&mut self) {
        let Some(&(pos, c)) = self.chars.peek() else {
            return;
        };
        let rest = &self.source[pos..];

        if rest.starts_with("<!--") {
            self.chars.nth(3);
            self.parse_comment();
        } else if rest.starts_with("</") {
            self.chars.nth(1);
            self.parse_closing_tag(pos);
        } else if c == '<' {
            self.chars.next();
            self.parse_opening_tag(pos);
        } else if c == '{' {
            self.chars.next();
            self.parse_expression_binding();
        } else {
            self.parse_text();
        }
    }

    /// Called after `<!--`. Nested comments are skipped as a whole.
    fn parse_comment(&mut self) {
        let mut depth = 1usize;
        while let Some(&(pos, _)) = self.chars.peek() {
            let rest = &self.source[pos..];
            if rest.starts_with("<!--") {
                self.chars.nth(3);
                depth += 1;
            } else if rest.starts_with("-->") {
                self.chars.nth(2);
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else {
                self.chars.next();
            }
        }
    }

    /// Called after `</`.
    fn parse_closing_tag(&mut self, start: usize) {
        let tag_name = self
            .take_until('>')
            .trim_matches(|c: char| c.is_ascii_whitespace());

        if self.stack.len() == 1 {
            self.report(DiagnosticKind::StrayClosingTag(tag_name.to_string()), start);
            return;
        }
        if let Some(open) = self.stack.pop() {
            if open.element.tag_name != tag_name {
                let open_name = open.element.tag_name.clone();
                self.report(DiagnosticKind::UnclosedTag(open_name), start);
            }
            self.insert(open.into_node());
        }
    }

    /// Called after `<`.
    fn parse_opening_tag(&mut self, start: usize) {
        let name_start = self.current_pos();
        while self
            .chars
            .next_if(|(_, c)| !c.is_whitespace() && !matches!(c, '=' | '/' | '>'))
            .is_some()
        {}
        let name_end = self.current_pos();
        let mut element = Element::new(&self.source[name_start..name_end]);

        if self
            .chars
            .peek()
            .is_some_and(|(_, c)| c.is_whitespace() || *c == '=')
        {
            self.parse_attrs(&mut element.props);
        }

        let self_closing = match self.chars.next() {
            Some((_, '/')) => {
                self.chars.next_if(|(_, c)| *c == '>');
                true
            }
            Some(..) => false,
            // the tag never ended, keep what was scanned of it
            None => true,
        };

        let (wrappers, props): (Vec<_>, Vec<_>) = element
            .props
            .into_iter()
            .partition(Attribute::is_component_reference);
        element.props = props;

        if self_closing {
            self.insert(wrap_components(element, wrappers));
        } else {
            self.stack.push(OpenElement {
                element,
                wrappers,
                pos: start,
            });
        }
    }

    /// Returns when reaching `/`, `>` or the end of input, without consuming it.
    fn parse_attrs(&mut self, props: &mut Vec<Attribute>) {
        loop {
            match self.chars.peek() {
                None | Some((_, '/' | '>')) => break,
                Some((_, c)) if c.is_whitespace() => {
                    self.chars.next();
                }
                Some(..) => {
                    let attr = self.parse_attr();
                    props.push(attr);
                }
            }
        }
    }

    fn parse_attr(&mut self) -> Attribute {
        let name_start = self.current_pos();
        while self
            .chars
            .next_if(|(_, c)| !c.is_whitespace() && !matches!(c, '/' | '>' | '='))
            .is_some()
        {}
        let name_end = self.current_pos();
        let name = &self.source[name_start..name_end];

        if self.chars.next_if(|(_, c)| *c == '=').is_none() {
            return Attribute::literal(name, "");
        }

        let value = match self.chars.peek() {
            Some(&(_, quote @ ('"' | '\''))) => {
                self.chars.next();
                AttrValue::Literal(self.take_until(quote).to_string())
            }
            Some((_, '{')) => {
                self.chars.next();
                AttrValue::Expression(expr::rewrite(self.parse_braced()))
            }
            _ => AttrValue::Literal(self.parse_unquoted_attr_value().to_string()),
        };

        Attribute {
            name: name.to_string(),
            value,
        }
    }

    fn parse_unquoted_attr_value(&mut self) -> &'s str {
        let start = self.current_pos();
        loop {
            match self.chars.peek() {
                Some((_, c)) if c.is_whitespace() || *c == '>' => break,
                Some((i, '/')) if self.source[*i..].starts_with("/>") => break,
                Some(..) => {
                    self.chars.next();
                }
                None => break,
            }
        }
        let end = self.current_pos();
        let value = &self.source[start..end];
        self.chars.next_if(|(_, c)| c.is_whitespace());
        value
    }

    /// Called after `{`.
    fn parse_expression_binding(&mut self) {
        let expr = expr::rewrite(self.parse_braced());
        self.insert(Node::Expression(expr));
    }

    fn parse_text(&mut self) {
        let start = self.current_pos();
        while self.chars.next_if(|(_, c)| *c != '<').is_some() {}
        let end = self.current_pos();
        let raw = &self.source[start..end];

        if !helpers::is_whitespace_only(raw) {
            self.insert(Node::Text(TextNode {
                raw: helpers::escape_text(raw),
            }));
        }
    }

    /// This will consume `end`.
    fn take_until(&mut self, end: char) -> &'s str {
        let start = self.current_pos();
        let mut stop = self.source.len();
        for (i, c) in self.chars.by_ref() {
            if c == end {
                stop = i;
                break;
            }
        }
        &self.source[start..stop]
    }

    /// This will consume the `}` balancing the already consumed `{`.
    fn parse_braced(&mut self) -> &'s str {
        let start = self.current_pos();
        let mut end = self.source.len();
        let mut braces_stack = 0usize;
        for (i, c) in self.chars.by_ref() {
            match c {
                '{' => braces_stack += 1,
                '}' if braces_stack == 0 => {
                    end = i;
                    break;
                }
                '}' => braces_stack -= 1,
                _ => {}
            }
        }
        &self.source[start..end]
    }
}

/// Nest `element` inside one synthetic element per component reference.
/// The last reference in source order becomes the outermost element.
fn wrap_components(element: Element, wrappers: Vec<Attribute>) -> Node {
    wrappers
        .into_iter()
        .fold(Node::Element(element), |child, attr| {
            Node::Element(Element {
                tag_name: attr.name.clone(),
                props: vec![attr],
                children: vec![child],
            })
        })
}
