use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category used to group catalogue items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,
}

impl Category {
    /// Create a new category for insertion
    pub fn new_for_insert(code: String, name: String) -> Self {
        Self {
            base: BaseAggregate::new(CategoryId::new_v4(), code, name),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Kode tidak boleh kosong".into());
        }
        if self.base.name.trim().is_empty() {
            return Err("Nama tidak boleh kosong".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Kategori"
    }

    fn list_name() -> &'static str {
        "Daftar Kategori"
    }
}

// ============================================================================
// List row DTO
// ============================================================================

/// Row shape the category list endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub code: String,
    pub name: String,

    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_filled_category() {
        let category = Category::new_for_insert("CAT-001".into(), "Elektronik".into());
        assert_eq!(category.validate(), Ok(()));
        assert!(!category.metadata().is_deleted);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let category = Category::new_for_insert("CAT-001".into(), "   ".into());
        assert!(category.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_code() {
        let category = Category::new_for_insert("".into(), "Elektronik".into());
        assert!(category.validate().is_err());
    }
}
