use async_graphql::SimpleObject;

use super::super::product::Product;

/// A page of products selected for a blog post.
#[derive(Debug, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ProductSearchOutput {
    /// The total amount of products matching the search.
    pub total_count: u64,
    /// The products of the requested page.
    pub items: Vec<Product>,
    /// Paging metadata of the requested page.
    pub page_info: SearchResultPageInfo,
}

/// Describes which page of a search result was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct SearchResultPageInfo {
    /// The requested page, starting at 1.
    pub current_page: u32,
    /// The maximum amount of products per page.
    pub page_size: u32,
    /// The amount of pages available for the search.
    pub total_pages: u64,
}
