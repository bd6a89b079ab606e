//! Types about configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options that affect compilation.
pub struct CompileOptions {
    /// Collect diagnostics and log them at `warn` level.
    ///
    /// Production mode (the default) is silent.
    pub development: bool,
    /// Remove every `/* ... */` sequence from the source before scanning.
    ///
    /// This runs over the raw text, so it also removes such sequences
    /// inside quoted attribute values and text.
    pub strip_block_comments: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            development: false,
            strip_block_comments: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options for the tree printer.
pub struct PrintOptions {
    pub indent_width: usize,
    pub use_tabs: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// The whole configuration, as read from `kiirus.toml`.
pub struct Options {
    pub compile: CompileOptions,
    pub print: PrintOptions,
}
