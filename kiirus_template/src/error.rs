use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Advisory diagnostic reported while compiling in development mode.
///
/// Diagnostics never abort compilation: the tree is always produced.
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub pos: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A closing tag closed an element of a different name,
    /// or an element was still open at the end of input.
    UnclosedTag(String),
    /// A closing tag was found while no element was open.
    StrayClosingTag(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnclosedTag(name) => write!(f, "Unclosed tag '{name}'")?,
            DiagnosticKind::StrayClosingTag(name) => {
                write!(f, "Closing tag '{name}' has no open element")?
            }
        }
        write!(f, " at position {}", self.pos)
    }
}

impl Error for Diagnostic {}
