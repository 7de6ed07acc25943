use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Vendor the company purchases goods from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    #[serde(rename = "contactName")]
    pub contact_name: String,

    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Supplier {
    /// Create a new supplier for insertion
    pub fn new_for_insert(
        code: String,
        name: String,
        contact_name: String,
        phone: String,
        email: String,
        address: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(SupplierId::new_v4(), code, name),
            contact_name,
            phone,
            email,
            address,
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

        // Phone may stay empty for suppliers imported from spreadsheets
        if !self.phone.trim().is_empty() {
            let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.len() < 8 || digits.len() > 15 {
                return Err("Nomor telepon harus berisi 8 sampai 15 digit".into());
            }
        }

        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Format email tidak valid".into());
        }

        Ok(())
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Pemasok"
    }

    fn list_name() -> &'static str {
        "Daftar Pemasok"
    }
}

// ============================================================================
// List row DTO
// ============================================================================

/// Row shape the supplier list endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRow {
    pub id: String,
    pub code: String,
    pub name: String,

    #[serde(rename = "contactName")]
    pub contact_name: String,

    pub phone: String,
    pub email: String,

    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_supplier() -> Supplier {
        Supplier::new_for_insert(
            "SUP-0007".into(),
            "PT Sumber Makmur".into(),
            "Budi Santoso".into(),
            "+62 812-3456-7890".into(),
            "budi@sumbermakmur.co.id".into(),
            "Jl. Industri Raya 12, Bekasi".into(),
        )
    }

    #[test]
    fn test_validate_accepts_filled_supplier() {
        assert_eq!(sample_supplier().validate(), Ok(()));
    }

    #[test]
    fn test_validate_allows_empty_phone_and_email() {
        let mut supplier = sample_supplier();
        supplier.phone = String::new();
        supplier.email = String::new();
        assert_eq!(supplier.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_short_phone() {
        let mut supplier = sample_supplier();
        supplier.phone = "0812".into();
        assert!(supplier.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_email_without_at() {
        let mut supplier = sample_supplier();
        supplier.email = "budi.sumbermakmur.co.id".into();
        assert!(supplier.validate().is_err());
    }
}
