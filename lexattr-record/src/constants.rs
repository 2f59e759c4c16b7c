/// Item-level identifier slot; never stored as a regular attribute.
pub const NAME_ATTRIBUTE: &str = "name";
/// Set once, on the first save.
pub const CREATED_ATTRIBUTE: &str = "created";
/// Refreshed on every save.
pub const UPDATED_ATTRIBUTE: &str = "updated";

/// Names a schema may not declare, and that loading never hands to a field.
pub const RESERVED_ATTRIBUTES: [&str; 3] = [NAME_ATTRIBUTE, CREATED_ATTRIBUTE, UPDATED_ATTRIBUTE];
