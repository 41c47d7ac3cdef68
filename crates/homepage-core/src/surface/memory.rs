use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{NodeHandle, Selector, Surface};

/// What a single write did to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MutationKind {
    Text { value: String },
    Attribute { name: String, value: String },
    Style { property: String, value: String },
    ClassAdded { class: String },
    ClassRemoved { class: String },
}

/// A recorded write, in the order it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub selector: Selector,
    #[serde(flatten)]
    pub kind: MutationKind,
}

/// Serializable view of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub selector: Selector,
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone)]
struct MemoryNode {
    selector: Selector,
    text: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// In-memory surface that journals every mutation.
///
/// Text and attribute writes are journaled even when the value is unchanged,
/// the same way a DOM assignment fires a mutation record. Class operations
/// are only journaled when they change the class list.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<MemoryNode>,
    journal: Vec<Mutation>,
    mutation_count: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with the full dashboard markup: one node per selector and two
    /// content containers.
    pub fn with_dashboard_layout() -> Self {
        let mut surface = Self::new();
        for selector in Selector::ALL {
            surface.add_node(selector);
        }
        surface.add_node(Selector::Content);
        surface
    }

    pub fn add_node(&mut self, selector: Selector) -> NodeHandle {
        self.nodes.push(MemoryNode {
            selector,
            text: String::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            classes: BTreeSet::new(),
        });
        NodeHandle(self.nodes.len() - 1)
    }

    /// Total number of journaled writes since creation.
    pub fn mutation_count(&self) -> u64 {
        self.mutation_count
    }

    /// Take the journaled writes, leaving the journal empty.
    pub fn drain_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    pub fn attribute(&self, node: NodeHandle, name: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    pub fn style(&self, node: NodeHandle, property: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// First node text for a selector; convenience for assertions and output.
    pub fn text_of(&self, selector: Selector) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.selector == selector)
            .map(|n| n.text.as_str())
    }

    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.nodes
            .iter()
            .map(|n| NodeSnapshot {
                selector: n.selector,
                text: n.text.clone(),
                attributes: n.attributes.clone(),
                styles: n.styles.clone(),
                classes: n.classes.clone(),
            })
            .collect()
    }

    fn record(&mut self, selector: Selector, kind: MutationKind) {
        self.mutation_count += 1;
        self.journal.push(Mutation { selector, kind });
    }
}

impl Surface for MemorySurface {
    fn query_all(&mut self, selector: Selector) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.selector == selector)
            .map(|(i, _)| NodeHandle(i))
            .collect()
    }

    fn text(&self, node: NodeHandle) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.text.as_str())
    }

    fn set_text(&mut self, node: NodeHandle, text: &str) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        n.text = text.to_string();
        let selector = n.selector;
        self.record(
            selector,
            MutationKind::Text {
                value: text.to_string(),
            },
        );
    }

    fn set_attribute(&mut self, node: NodeHandle, name: &str, value: &str) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        n.attributes.insert(name.to_string(), value.to_string());
        let selector = n.selector;
        self.record(
            selector,
            MutationKind::Attribute {
                name: name.to_string(),
                value: value.to_string(),
            },
        );
    }

    fn set_style(&mut self, node: NodeHandle, property: &str, value: &str) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        n.styles.insert(property.to_string(), value.to_string());
        let selector = n.selector;
        self.record(
            selector,
            MutationKind::Style {
                property: property.to_string(),
                value: value.to_string(),
            },
        );
    }

    fn add_class(&mut self, node: NodeHandle, class: &str) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        if n.classes.insert(class.to_string()) {
            let selector = n.selector;
            self.record(
                selector,
                MutationKind::ClassAdded {
                    class: class.to_string(),
                },
            );
        }
    }

    fn remove_class(&mut self, node: NodeHandle, class: &str) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        if n.classes.remove(class) {
            let selector = n.selector;
            self.record(
                selector,
                MutationKind::ClassRemoved {
                    class: class.to_string(),
                },
            );
        }
    }

    fn has_class(&self, node: NodeHandle, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.contains(class))
    }
}
