use bson::Uuid;
use serde::{Deserialize, Serialize};

use crate::search::ProductCollection;

/// A blog post referencing the products selected for it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Post {
    /// Post UUID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Title of the post.
    pub name: String,
    /// UUIDs of products selected for the post.
    #[serde(default)]
    pub selected_product_ids: Vec<Uuid>,
}

impl Post {
    /// Returns the products associated with this post as a search pre-filter.
    pub fn selected_products_collection(&self) -> ProductCollection {
        ProductCollection::new(self.selected_product_ids.clone())
    }
}
