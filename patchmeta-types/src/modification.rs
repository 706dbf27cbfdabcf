use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 digest of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash in-memory bytes.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap an already computed digest. The string is taken as-is.
    pub fn from_hex(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a modification touches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Module {
        name: String,
        slot: String,
    },
    Bundle {
        name: String,
        slot: String,
    },
    Misc {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        path: Vec<String>,
        #[serde(default)]
        is_directory: bool,
    },
}

impl ContentItem {
    pub fn module(name: impl Into<String>, slot: impl Into<String>) -> Self {
        ContentItem::Module {
            name: name.into(),
            slot: slot.into(),
        }
    }

    pub fn bundle(name: impl Into<String>, slot: impl Into<String>) -> Self {
        ContentItem::Bundle {
            name: name.into(),
            slot: slot.into(),
        }
    }

    pub fn misc(name: impl Into<String>, path: Vec<String>, is_directory: bool) -> Self {
        ContentItem::Misc {
            name: name.into(),
            path,
            is_directory,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ContentItem::Module { name, .. }
            | ContentItem::Bundle { name, .. }
            | ContentItem::Misc { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationType {
    Add,
    Modify,
    Remove,
}

/// One unit of change. Builders append these and never look inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentModification {
    pub item: ContentItem,
    pub kind: ModificationType,

    /// Hash of the new content. Absent for removals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<ContentHash>,

    /// Hash the existing content must have. Absent for additions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hash: Option<ContentHash>,
}

impl ContentModification {
    pub fn add(item: ContentItem, content_hash: ContentHash) -> Self {
        Self {
            item,
            kind: ModificationType::Add,
            content_hash: Some(content_hash),
            target_hash: None,
        }
    }

    pub fn modify(item: ContentItem, target_hash: ContentHash, content_hash: ContentHash) -> Self {
        Self {
            item,
            kind: ModificationType::Modify,
            content_hash: Some(content_hash),
            target_hash: Some(target_hash),
        }
    }

    pub fn remove(item: ContentItem, target_hash: ContentHash) -> Self {
        Self {
            item,
            kind: ModificationType::Remove,
            content_hash: None,
            target_hash: Some(target_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_of_empty_input_is_sha256_of_nothing() {
        assert_eq!(
            ContentHash::of(b"").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn remove_carries_only_target_hash() {
        let m = ContentModification::remove(
            ContentItem::module("org.example", "main"),
            ContentHash::from_hex("abc"),
        );
        assert_eq!(m.kind, ModificationType::Remove);
        assert!(m.content_hash.is_none());
        assert_eq!(m.target_hash.as_ref().map(ContentHash::as_str), Some("abc"));
    }
}
