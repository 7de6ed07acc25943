//! Permission names shared by the frontend gates and the backend checks.
//!
//! Names are keyed by the aggregate collection name so both sides derive
//! them the same way.

/// Permission to delete rows permanently and to enter the trash view
pub fn force_delete(collection: &str) -> String {
    format!("{}.force-delete", collection)
}

pub const CATEGORY_FORCE_DELETE: &str = "category.force-delete";
pub const PRODUCT_FORCE_DELETE: &str = "product.force-delete";
pub const SUPPLIER_FORCE_DELETE: &str = "supplier.force-delete";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_delete_matches_constants() {
        assert_eq!(force_delete("category"), CATEGORY_FORCE_DELETE);
        assert_eq!(force_delete("product"), PRODUCT_FORCE_DELETE);
        assert_eq!(force_delete("supplier"), SUPPLIER_FORCE_DELETE);
    }
}
