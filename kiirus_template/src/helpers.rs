use aho_corasick::AhoCorasick;
use memchr::memmem;
use std::{borrow::Cow, iter, sync::LazyLock};

pub(crate) fn is_component_reference(name: &str) -> bool {
    name.chars().next().is_some_and(|c| {
        c.to_uppercase().eq(iter::once(c)) && !c.to_lowercase().eq(iter::once(c))
    })
}

/// Also true for the empty string.
pub(crate) fn is_whitespace_only(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

static ESCAPING_AC: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([
        "&amp;", "&gt;", "&lt;", "&nbsp;", "&quot;", "\"", "\\", "\n",
    ])
    .unwrap()
});
static ESCAPING_REPLACEMENTS: [&str; 8] = ["&", ">", "<", " ", "\\\"", "\\\"", "\\\\", "\\n"];

/// Decode the supported HTML entities and escape what would break
/// a double-quoted string literal.
pub(crate) fn escape_text(text: &str) -> String {
    ESCAPING_AC.replace_all(text, &ESCAPING_REPLACEMENTS)
}

/// Remove every terminated `/* ... */` sequence.
/// An unterminated `/*` is kept together with the rest of the input.
pub(crate) fn strip_block_comments(source: &str) -> Cow<'_, str> {
    let Some(first) = memmem::find(source.as_bytes(), b"/*") else {
        return Cow::Borrowed(source);
    };

    let mut stripped = String::with_capacity(source.len());
    let mut rest = source;
    let mut start = first;
    loop {
        match memmem::find(&rest.as_bytes()[start + 2..], b"*/") {
            Some(len) => {
                stripped.push_str(&rest[..start]);
                rest = &rest[start + 2 + len + 2..];
            }
            None => break,
        }
        match memmem::find(rest.as_bytes(), b"/*") {
            Some(next) => start = next,
            None => break,
        }
    }
    stripped.push_str(rest);
    Cow::Owned(stripped)
}

/// Derive the custom element name of a component from its identifier,
/// for example `SimpleTab` becomes `simple-tab`.
pub fn custom_element_name(component_name: &str) -> String {
    let mut name = String::with_capacity(component_name.len() + 4);
    for (i, c) in component_name.chars().enumerate() {
        if i == 0 {
            name.extend(c.to_lowercase());
        } else if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_reference_needs_case_changing_uppercase() {
        assert!(is_component_reference("Tab"));
        assert!(is_component_reference("Ünit"));
        assert!(!is_component_reference("tab"));
        assert!(!is_component_reference("$Tab"));
        assert!(!is_component_reference("1Tab"));
        assert!(!is_component_reference(""));
    }

    #[test]
    fn whitespace_only() {
        assert!(is_whitespace_only(""));
        assert!(is_whitespace_only(" \n\t"));
        assert!(!is_whitespace_only(" a "));
    }

    #[test]
    fn block_comments() {
        assert!(matches!(strip_block_comments("<p>a</p>"), Cow::Borrowed(_)));
        assert_eq!(strip_block_comments("a/* x */b/**/c"), "abc");
        assert_eq!(strip_block_comments("a/* x\n y */b"), "ab");
        assert_eq!(strip_block_comments("a/* x */b/* open"), "ab/* open");
        assert_eq!(strip_block_comments("a/*/b*/c"), "ac");
    }

    #[test]
    fn escapes() {
        assert_eq!(escape_text("A &amp; B"), "A & B");
        assert_eq!(escape_text("&lt;b&gt;&nbsp;"), "<b> ");
        assert_eq!(escape_text("say &quot;hi\""), r#"say \"hi\""#);
        assert_eq!(escape_text("a\\b\nc"), r"a\\b\nc");
    }

    #[test]
    fn element_names() {
        assert_eq!(custom_element_name("SimpleTab"), "simple-tab");
        assert_eq!(custom_element_name("TemplateFor"), "template-for");
        assert_eq!(custom_element_name("Tab"), "tab");
        assert_eq!(custom_element_name("HTMLView"), "h-t-m-l-view");
    }
}
