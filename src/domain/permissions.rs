//! # Permission Sets
//!
//! A flat list of granted permission nodes with wildcard support.
//! `*` grants everything, `playerpoints.*` grants every node under `playerpoints.`
//! and a leading `-` revokes a node even when a wildcard grants it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: Vec<String>,
    revoked: Vec<String>,
}

impl PermissionSet {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for node in nodes {
            let node = node.as_ref().trim().to_lowercase();
            if node.is_empty() {
                continue;
            }
            match node.strip_prefix('-') {
                Some(revoked) => set.revoked.push(revoked.to_string()),
                None => set.granted.push(node),
            }
        }
        set
    }

    /// Grants every node.
    pub fn all() -> Self {
        Self::new(["*"])
    }

    pub fn allows(&self, node: &str) -> bool {
        let node = node.to_lowercase();
        if self.revoked.iter().any(|pattern| matches_node(pattern, &node)) {
            return false;
        }
        self.granted.iter().any(|pattern| matches_node(pattern, &node))
    }

    /// Granted patterns, in the order they were configured.
    pub fn granted(&self) -> &[String] {
        &self.granted
    }
}

fn matches_node(pattern: &str, node: &str) -> bool {
    if pattern == "*" || pattern == node {
        return true;
    }
    match pattern.strip_suffix(".*") {
        Some(prefix) => {
            node.len() > prefix.len()
                && node.starts_with(prefix)
                && node[prefix.len()..].starts_with('.')
        }
        None => false,
    }
}
