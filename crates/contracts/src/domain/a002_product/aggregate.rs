use crate::domain::a001_category::CategoryId;
use crate::domain::a003_supplier::SupplierId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalogue item tracked in stock, purchasing and invoicing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub sku: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,

    #[serde(rename = "supplierId")]
    pub supplier_id: Option<SupplierId>,

    pub price: f64,
    pub unit: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Product {
    /// Create a new product for insertion
    pub fn new_for_insert(
        code: String,
        name: String,
        sku: String,
        category_id: Option<CategoryId>,
        supplier_id: Option<SupplierId>,
        price: f64,
        unit: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), code, name),
            sku,
            category_id,
            supplier_id,
            price,
            unit,
            is_active: true,
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
        if self.sku.trim().is_empty() {
            return Err("SKU tidak boleh kosong".into());
        }
        if self.price < 0.0 {
            return Err("Harga tidak boleh negatif".into());
        }
        if self.unit.trim().is_empty() {
            return Err("Satuan tidak boleh kosong".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Produk"
    }

    fn list_name() -> &'static str {
        "Daftar Produk"
    }
}

// ============================================================================
// List row DTO
// ============================================================================

/// Row shape the product list endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub sku: String,

    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,

    #[serde(rename = "supplierName")]
    pub supplier_name: Option<String>,

    pub price: f64,
    pub unit: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new_for_insert(
            "PRD-00042".into(),
            "Kabel HDMI 2m".into(),
            "SKU-HDMI-2M".into(),
            None,
            None,
            45000.0,
            "pcs".into(),
        )
    }

    #[test]
    fn test_validate_accepts_filled_product() {
        let product = sample_product();
        assert_eq!(product.validate(), Ok(()));
        assert!(product.is_active);
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product = sample_product();
        product.price = -1.0;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_sku() {
        let mut product = sample_product();
        product.sku = " ".into();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let row = ProductRow {
            id: "p1".into(),
            code: "PRD-00042".into(),
            name: "Kabel HDMI 2m".into(),
            sku: "SKU-HDMI-2M".into(),
            category_name: Some("Elektronik".into()),
            supplier_name: None,
            price: 45000.0,
            unit: "pcs".into(),
            is_active: true,
            created_at: "2025-01-15T08:30:00Z".into(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["categoryName"], "Elektronik");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["createdAt"], "2025-01-15T08:30:00Z");
    }
}
