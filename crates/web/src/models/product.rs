//! Product model.

use chrono::{DateTime, Utc};
use shoplite_core::{Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Unit price. Set at creation and not editable through the update form.
    pub price: Price,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// Last time the details were edited.
    pub updated_at: DateTime<Utc>,
}
