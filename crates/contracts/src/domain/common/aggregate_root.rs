use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Defines the required methods and metadata shared by every aggregate in the system
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance methods (data of a concrete record)
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "PRD-00042")
    fn code(&self) -> &str;

    /// Display name of the record
    fn name(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Aggregate class metadata (static data)
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for storage and API paths (e.g. "category")
    fn collection_name() -> &'static str;

    /// Singular UI label (e.g. "Kategori")
    fn element_name() -> &'static str;

    /// Plural UI label (e.g. "Daftar Kategori")
    fn list_name() -> &'static str;

    // ============================================================================
    // Methods with a default implementation
    // ============================================================================

    /// Full system name of the aggregate (e.g. "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
