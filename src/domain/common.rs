//! Shared traits for entities held by the registry and the ledger.

/// Identifier assigned by a store. `0` marks a record not yet added.
pub type RecordId = u64;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
