//! The `Product` entity as seen by the storage engine and the HTTP layer.

/// A product record.
///
/// `id` is assigned by the storage engine on insert and is `0` before that.
/// Columns that are NULL in the database surface here as the zero value of
/// the field type, so callers cannot tell "unset" from "zero".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    pub count: i32,
    pub price: f64,
}

impl Product {
    /// Builds a product that has not been persisted yet.
    pub fn new(name: impl Into<String>, r#type: impl Into<String>, count: i32, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            r#type: r#type.into(),
            count,
            price,
        }
    }
}
