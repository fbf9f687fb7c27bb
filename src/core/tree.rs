//! Translation tree model and key flattening.

use serde_json::Value;

/// Separator used to join key segments into a flattened path.
pub const KEY_SEPARATOR: char = '.';

/// A node in a translation tree: either a translated string or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Text(String),
    Group(TranslationTree),
}

/// Ordered mapping from key to [`TranslationNode`].
///
/// Keys are unique within one level. Inserting an existing key replaces the
/// value but keeps its original position, so emission order always follows
/// first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    entries: Vec<(String, TranslationNode)>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: TranslationNode) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, TranslationNode::Text(value.into()));
    }

    pub fn insert_group(&mut self, key: impl Into<String>, tree: TranslationTree) {
        self.insert(key, TranslationNode::Group(tree));
    }

    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a tree from a parsed JSON document.
    ///
    /// Objects become groups, arrays become groups keyed by element index, and
    /// every scalar becomes a leaf. Returns `None` when the root itself is a
    /// scalar, since there are no keys to take a shape from.
    pub fn from_json(value: &Value) -> Option<Self> {
        match node_from_json(value) {
            TranslationNode::Group(tree) => Some(tree),
            TranslationNode::Text(_) => None,
        }
    }

    /// Flatten the tree into dot-joined leaf paths, depth-first in insertion order.
    pub fn flatten(&self) -> Vec<FlattenedKey> {
        let mut keys = Vec::new();
        flatten_into(self, "", &mut keys);
        keys
    }

    /// Raw key segments (at any depth) that contain the path separator.
    ///
    /// Such keys flatten to paths indistinguishable from nested ones.
    pub fn ambiguous_keys(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_ambiguous(self, "", &mut found);
        found
    }
}

/// A flattened key: full dot-joined path plus the leaf value it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedKey {
    pub path: String,
    pub value: String,
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, KEY_SEPARATOR, key)
    }
}

fn flatten_into(tree: &TranslationTree, prefix: &str, out: &mut Vec<FlattenedKey>) {
    for (key, node) in tree.iter() {
        let path = join_path(prefix, key);
        match node {
            TranslationNode::Text(value) => out.push(FlattenedKey {
                path,
                value: value.clone(),
            }),
            TranslationNode::Group(child) => flatten_into(child, &path, out),
        }
    }
}

fn collect_ambiguous(tree: &TranslationTree, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in tree.iter() {
        let path = join_path(prefix, key);
        if key.contains(KEY_SEPARATOR) {
            out.push(path.clone());
        }
        if let TranslationNode::Group(child) = node {
            collect_ambiguous(child, &path, out);
        }
    }
}

fn node_from_json(value: &Value) -> TranslationNode {
    match value {
        Value::Object(map) => {
            let mut tree = TranslationTree::new();
            for (key, val) in map {
                tree.insert(key.clone(), node_from_json(val));
            }
            TranslationNode::Group(tree)
        }
        Value::Array(items) => {
            let mut tree = TranslationTree::new();
            for (index, val) in items.iter().enumerate() {
                tree.insert(index.to_string(), node_from_json(val));
            }
            TranslationNode::Group(tree)
        }
        Value::String(s) => TranslationNode::Text(s.clone()),
        other => TranslationNode::Text(other.to_string()),
    }
}

/// Ordered mapping from namespace name to its translation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTranslations {
    namespaces: Vec<(String, TranslationTree)>,
}

impl NamespaceTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: impl Into<String>, tree: TranslationTree) {
        let namespace = namespace.into();
        match self.namespaces.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, existing)) => *existing = tree,
            None => self.namespaces.push((namespace, tree)),
        }
    }

    pub fn get(&self, namespace: &str) -> Option<&TranslationTree> {
        self.namespaces
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, tree)| tree)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationTree)> {
        self.namespaces.iter().map(|(ns, tree)| (ns.as_str(), tree))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(|(ns, _)| ns.as_str())
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
