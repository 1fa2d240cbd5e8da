use serde::{Deserialize, Serialize};

/// A single node in the page tree. Only the attributes the behaviors touch
/// are modeled: identity (id/classes), a text value for input-like elements,
/// and an inline display style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            id: None,
            classes: Vec::new(),
            value: String::new(),
            display: None,
            children: Vec::new(),
        }
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(tag: &str, id: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search for a descendant (not self) carrying the given id.
    pub fn has_descendant_id(&self, id: &str) -> bool {
        self.children
            .iter()
            .any(|c| c.id.as_deref() == Some(id) || c.has_descendant_id(id))
    }
}
