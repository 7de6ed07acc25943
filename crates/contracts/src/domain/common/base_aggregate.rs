use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every aggregate shares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business code of the record (e.g. "PRD-00042", "SUP-0007")
    pub code: String,
    /// Display name of the record
    pub name: String,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Create a new aggregate
    pub fn new(id: Id, code: String, name: String) -> Self {
        Self {
            id,
            code,
            name,
            metadata: EntityMetadata::new(),
        }
    }

    /// Create an aggregate with existing metadata (when loading from storage)
    pub fn with_metadata(id: Id, code: String, name: String, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code,
            name,
            metadata,
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
