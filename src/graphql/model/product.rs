use async_graphql::SimpleObject;
use bson::Uuid;
use serde::{Deserialize, Serialize};

/// A product which can be selected for blog posts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, SimpleObject)]
pub struct Product {
    /// Product UUID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Display name of the product.
    pub name: String,
    /// Stock keeping unit of the product.
    pub sku: String,
    /// Price of the product.
    pub price: f64,
}
