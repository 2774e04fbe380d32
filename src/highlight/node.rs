//! Generic document tree consumed by the highlight pass.
//!
//! The pass never touches a real rendering engine; the host mirrors its
//! rendered subtree into this structure, runs the pass, and applies the
//! resulting node changes back.

/// One node of a rendered document subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// A plain text run.
    Text(String),
    /// A highlight marker wrapping matched text.
    Mark(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) | Self::Mark(text) => out.push_str(text),
        }
    }
}

/// An element with a tag name and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: vec![],
        }
    }

    pub fn with_children(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    /// Concatenated text of the subtree, markers included as plain text.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}
