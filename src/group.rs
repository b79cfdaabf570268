//! Hierarchical namespacing for setting keys.
//!
//! A [`Group`] is a namespace node: it contributes one dotted segment to the
//! lookup key of every setting declared inside it. Groups are built once at
//! startup by chaining [`Group::new`] and [`Group::subgroup`], and are
//! immutable afterwards; cloning a group is cheap and shares the chain.

use std::sync::{Arc, OnceLock};

/// A namespace node contributing a prefix segment to settings declared
/// within it.
#[derive(Debug, Clone)]
pub struct Group {
    inner: Arc<Node>,
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<Group>,
    prefix: OnceLock<String>,
}

impl Group {
    /// Creates a top-level group. Its prefix is just its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Node {
                name: name.into(),
                parent: None,
                prefix: OnceLock::new(),
            }),
        }
    }

    /// Creates a group nested inside this one.
    pub fn subgroup(&self, name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Node {
                name: name.into(),
                parent: Some(self.clone()),
                prefix: OnceLock::new(),
            }),
        }
    }

    /// The group's own name, the last segment of its prefix.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The full dotted prefix from the outermost ancestor to this group,
    /// computed lazily from the parent chain and cached.
    pub fn prefix(&self) -> &str {
        self.inner.prefix.get_or_init(|| match &self.inner.parent {
            Some(parent) => format!("{}.{}", parent.prefix(), self.inner.name),
            None => self.inner.name.clone(),
        })
    }
}
