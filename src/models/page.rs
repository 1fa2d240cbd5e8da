use serde::{Deserialize, Serialize};

use super::Element;

/// Input focus state: which element holds focus and where the collapsed
/// caret sits, counted in characters from the start of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub id: String,
    pub caret: usize,
}

/// The page the behaviors run against: a forest of elements plus the
/// page-level focus state. All queries are by element id or class, mirroring
/// how the behaviors address the real document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<Focus>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            focus: None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        fn walk<'a>(nodes: &'a [Element], id: &str) -> Option<&'a Element> {
            for node in nodes {
                if node.id.as_deref() == Some(id) {
                    return Some(node);
                }
                if let Some(found) = walk(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.elements, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        fn walk<'a>(nodes: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
            for node in nodes {
                if node.id.as_deref() == Some(id) {
                    return Some(node);
                }
                if let Some(found) = walk(&mut node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&mut self.elements, id)
    }

    /// Run `f` over every element carrying the given class, in document order.
    pub fn for_each_class_mut<F>(&mut self, class: &str, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        fn walk<F>(nodes: &mut [Element], class: &str, f: &mut F)
        where
            F: FnMut(&mut Element),
        {
            for node in nodes {
                if node.has_class(class) {
                    f(node);
                }
                walk(&mut node.children, class, f);
            }
        }
        walk(&mut self.elements, class, &mut f);
    }

    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.find(id).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Move input focus to the element and collapse the caret at `caret`.
    pub fn set_focus(&mut self, id: &str, caret: usize) {
        self.focus = Some(Focus {
            id: id.to_string(),
            caret,
        });
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.as_ref().map(|f| f.id.as_str())
    }
}
