use std::fmt;

/// One element of the output tree. A node carries either a `value`
/// (leaf) or `children` (container), never both. Attributes are kept
/// as a pair list so they serialize in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Vec<(String, String)>,
}

/// A node the converter should never have built: a container without
/// a tag, or a node with neither a value nor children. Hitting this
/// means a construction bug, not bad input.
#[derive(Debug, PartialEq, Eq)]
pub enum StructuralError {
    MissingTag,
    EmptyNode,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::MissingTag => write!(f, "container node has no tag"),
            StructuralError::EmptyNode => write!(f, "node has neither a value nor children"),
        }
    }
}

impl std::error::Error for StructuralError {}

impl HtmlNode {
    /// Raw text leaf with no surrounding tag.
    pub fn text<S: Into<String>>(value: S) -> Self {
        HtmlNode {
            tag: None,
            value: Some(value.into()),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Tagged leaf, serialized as `<tag>value</tag>`.
    pub fn leaf<T: Into<String>, S: Into<String>>(tag: T, value: S) -> Self {
        HtmlNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Container node owning its children in order.
    pub fn container<T: Into<String>>(tag: T, children: Vec<HtmlNode>) -> Self {
        HtmlNode {
            tag: Some(tag.into()),
            value: None,
            children,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Serialize the tree. Text values are emitted verbatim: no HTML
    /// entity encoding is performed.
    pub fn to_html(&self) -> Result<String, StructuralError> {
        if let Some(value) = &self.value {
            return Ok(match &self.tag {
                Some(tag) => format!("<{}{}>{}</{}>", tag, self.render_attributes(), value, tag),
                None => value.clone(),
            });
        }
        let Some(tag) = &self.tag else {
            return Err(StructuralError::MissingTag);
        };
        if self.children.is_empty() {
            return Err(StructuralError::EmptyNode);
        }
        let mut html = format!("<{}{}>", tag, self.render_attributes());
        for child in &self.children {
            html.push_str(&child.to_html()?);
        }
        html.push_str(&format!("</{}>", tag));
        Ok(html)
    }

    fn render_attributes(&self) -> String {
        self.attributes
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, value))
            .collect()
    }
}
