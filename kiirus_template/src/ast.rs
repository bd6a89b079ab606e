#[cfg(feature = "serde")]
use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeStruct};

/// Tag name of the sentinel element at the base of every compiled tree.
pub const ROOT_TYPE: &str = "Root";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Literal(value.into()),
        }
    }

    /// Whether the value has to be re-evaluated against live state.
    pub fn dynamic(&self) -> bool {
        match &self.value {
            AttrValue::Literal(..) => false,
            AttrValue::Expression(expr) => expr.dynamic,
        }
    }

    /// An attribute whose name starts with a case-changing uppercase letter
    /// designates a child component rather than a plain prop.
    pub fn is_component_reference(&self) -> bool {
        crate::helpers::is_component_reference(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Literal(String),
    Expression(Expression),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Literal(value) => value,
            AttrValue::Expression(expr) => &expr.expr,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag_name: String,
    pub props: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            props: vec![],
            children: vec![],
        }
    }
}

/// A rewritten expression, from either an attribute value or a `{}` binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    pub expr: String,
    pub dynamic: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(TextNode),
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Root {
    pub children: Vec<Node>,
}

/// Escape-normalized text content, ready to be embedded in a string literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub raw: String,
}

#[cfg(feature = "serde")]
impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, self.value.as_str())?;
        map.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let dynamic_props: Vec<_> = self.props.iter().map(Attribute::dynamic).collect();
        let mut state = serializer.serialize_struct("Element", 4)?;
        state.serialize_field("type", &self.tag_name)?;
        state.serialize_field("props", &self.props)?;
        // kept apart from the props so no attribute name can shadow it
        state.serialize_field("dynamicProps", &dynamic_props)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expression", 2)?;
        state.serialize_field("expression", &self.expr)?;
        state.serialize_field("dynamic", &self.dynamic)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Element(element) => element.serialize(serializer),
            Node::Text(text_node) => serializer.serialize_str(&text_node.raw),
            Node::Expression(expr) => expr.serialize(serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Element", 4)?;
        state.serialize_field("type", ROOT_TYPE)?;
        state.serialize_field("props", &[] as &[Attribute])?;
        state.serialize_field("dynamicProps", &[] as &[bool])?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
