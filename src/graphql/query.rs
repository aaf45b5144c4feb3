use async_graphql::{Context, ErrorExtensions, Object, Result};
use bson::Uuid;

use super::{
    model::{
        connection::product_search_output::ProductSearchOutput,
        order_datatypes::ProductOrderInput,
    },
    resolver::products_by_post::ProductsByPostArgs,
};
use crate::search::SearchCollaborators;

/// Describes GraphQL blog product queries.
pub struct Query;

#[Object]
impl Query {
    /// Retrieves a page of the products selected for a blog post.
    async fn products_by_post<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "UUID of the blog post whose products should be retrieved.")]
        post_id: Option<Uuid>,
        #[graphql(default = 1, desc = "Page of products to retrieve, starting at 1.")]
        current_page: i32,
        #[graphql(default = 20, desc = "Maximum amount of products per page.")] page_size: i32,
        #[graphql(desc = "Specifies the order in which products are retrieved.")]
        order_by: Option<ProductOrderInput>,
    ) -> Result<ProductSearchOutput> {
        let collaborators = ctx.data::<SearchCollaborators>()?;
        let args = ProductsByPostArgs {
            post_id,
            current_page,
            page_size,
            order_by,
        };
        collaborators
            .products_by_post_resolver()
            .resolve(args)
            .await
            .map_err(|e| e.extend())
    }
}
