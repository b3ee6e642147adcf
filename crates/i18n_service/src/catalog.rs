//! Translation catalog - nested per-language tables with dotted-key lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One node of a translation table: either a translated string or a nested
/// group of keys
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A translated string
    Leaf(String),

    /// A nested group, addressed by the next key segment
    Branch(HashMap<String, TranslationNode>),
}

/// A full per-language translation table
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TranslationTable(HashMap<String, TranslationNode>);

impl TranslationTable {
    /// Resolve a dotted key (e.g. `"settings.language"`) against the table.
    ///
    /// Each segment descends one branch level; the final segment must land
    /// on a leaf. A missing segment, a branch at the final segment, or a
    /// descent through a leaf all resolve to `None`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.0.get(segments.next()?)?;

        for segment in segments {
            match node {
                TranslationNode::Branch(children) => node = children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            }
        }

        match node {
            TranslationNode::Leaf(text) => Some(text),
            TranslationNode::Branch(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
