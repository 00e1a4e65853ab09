//! Core types for spark-content.
//!
//! The data model everything builds on: validated tags, search
//! suggestions, and the cleanup closure returned by components.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components and subscriptions.
///
/// Call it to detach the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Tag
// =============================================================================

/// Error rejecting malformed tag data at the construction boundary.
///
/// Stores never validate internally - a `Tag` that exists is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag id must not be empty")]
    EmptyId,
    #[error("tag name must not be empty (id: {0})")]
    EmptyName(String),
}

/// A filterable category: identity plus display name.
///
/// Immutable once constructed. `id` is unique within a store instance;
/// `name` is what the host UI displays. Serde goes through [`TagData`]
/// so deserialized tags pass the same validation as constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagData", into = "TagData")]
pub struct Tag {
    id: String,
    name: String,
}

/// Raw serde mirror of [`Tag`], before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagData {
    pub id: String,
    pub name: String,
}

impl Tag {
    /// Create a tag, rejecting empty `id` or `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, TagError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(TagError::EmptyId);
        }
        if name.is_empty() {
            return Err(TagError::EmptyName(id));
        }
        Ok(Self { id, name })
    }

    /// The unique identity within a store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<TagData> for Tag {
    type Error = TagError;

    fn try_from(data: TagData) -> Result<Self, Self::Error> {
        Tag::new(data.id, data.name)
    }
}

impl From<Tag> for TagData {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

// =============================================================================
// Suggestion (search results)
// =============================================================================

/// A search suggestion: the suggested text and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub count: u32,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, count: u32) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
