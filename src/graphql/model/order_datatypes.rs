use async_graphql::{Enum, InputObject};

/// GraphQL order direction.
#[derive(Debug, Enum, Copy, Clone, Eq, PartialEq)]
pub enum OrderDirection {
    /// Ascending order direction.
    Asc,
    /// Descending order direction.
    Desc,
}

impl Default for OrderDirection {
    fn default() -> Self {
        Self::Asc
    }
}

/// Implements conversion to `i32` for MongoDB document sorting.
impl From<OrderDirection> for i32 {
    fn from(value: OrderDirection) -> Self {
        match value {
            OrderDirection::Asc => 1,
            OrderDirection::Desc => -1,
        }
    }
}

/// Describes the fields that a product can be ordered by.
#[derive(Debug, Enum, Copy, Clone, Eq, PartialEq)]
pub enum ProductOrderField {
    /// Orders by "id".
    Id,
    /// Orders by "name".
    Name,
    /// Orders by "sku".
    Sku,
    /// Orders by "price".
    Price,
}

impl ProductOrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductOrderField::Id => "_id",
            ProductOrderField::Name => "name",
            ProductOrderField::Sku => "sku",
            ProductOrderField::Price => "price",
        }
    }
}

impl Default for ProductOrderField {
    fn default() -> Self {
        Self::Id
    }
}

/// Specifies the order of products.
#[derive(Debug, Clone, InputObject)]
pub struct ProductOrderInput {
    /// Order direction of products.
    pub direction: Option<OrderDirection>,
    /// Field that products should be ordered by.
    pub field: Option<ProductOrderField>,
}

impl Default for ProductOrderInput {
    fn default() -> Self {
        Self {
            direction: Some(Default::default()),
            field: Some(Default::default()),
        }
    }
}
