use async_graphql::ErrorExtensions;
use bson::Uuid;
use log::debug;
use thiserror::Error;

use crate::{
    graphql::model::{
        connection::product_search_output::{ProductSearchOutput, SearchResultPageInfo},
        order_datatypes::ProductOrderInput,
    },
    search::{FilterQuery, PostRepository, RepositoryError, SearchCriteriaBuilder},
};

/// Argument group the search criteria of this field are built for.
const ARGUMENT_GROUP: &str = "products";

/// Entity type searched by this field.
const ENTITY_TYPE: &str = "product";

/// Raw arguments of the `productsByPost` field.
///
/// Paging defaults are applied by the schema, so `current_page` and `page_size` are always present.
#[derive(Debug, Clone)]
pub struct ProductsByPostArgs {
    pub post_id: Option<Uuid>,
    pub current_page: i32,
    pub page_size: i32,
    pub order_by: Option<ProductOrderInput>,
}

/// Arguments which passed `validate_args`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageRequest {
    post_id: Uuid,
    current_page: u32,
    page_size: u32,
}

#[derive(Debug, Error)]
pub enum ProductsByPostError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("currentPage value {current_page} specified is greater than the {max_pages} page(s) available.")]
    PageOutOfRange { current_page: u32, max_pages: u64 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input errors are flagged as such, collaborator errors pass through unchanged.
impl ErrorExtensions for ProductsByPostError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            ProductsByPostError::InvalidArgument(_) | ProductsByPostError::PageOutOfRange { .. } => {
                e.set("category", "graphql-input")
            }
            ProductsByPostError::Repository(_) => {}
        })
    }
}

/// Resolves the page of products selected for a blog post.
pub struct ProductsByPostResolver<'a> {
    post_repository: &'a dyn PostRepository,
    search_criteria_builder: &'a dyn SearchCriteriaBuilder,
    filter_query: &'a dyn FilterQuery,
}

impl<'a> ProductsByPostResolver<'a> {
    pub fn new(
        post_repository: &'a dyn PostRepository,
        search_criteria_builder: &'a dyn SearchCriteriaBuilder,
        filter_query: &'a dyn FilterQuery,
    ) -> Self {
        Self {
            post_repository,
            search_criteria_builder,
            filter_query,
        }
    }

    /// Validates `args`, searches the products of the post and checks that the requested page exists.
    pub async fn resolve(
        &self,
        args: ProductsByPostArgs,
    ) -> Result<ProductSearchOutput, ProductsByPostError> {
        let page_request = validate_args(&args)?;
        let mut search_criteria = self.search_criteria_builder.build(ARGUMENT_GROUP, &args);
        search_criteria.set_current_page(page_request.current_page);
        search_criteria.set_page_size(page_request.page_size);

        let post = self.post_repository.load(page_request.post_id).await?;
        let collection = post.selected_products_collection();
        let search_result = self
            .filter_query
            .get_result(&search_criteria, ENTITY_TYPE, &collection)
            .await?;

        let max_pages = max_pages(search_result.total_count, search_criteria.page_size());
        let current_page = search_criteria.current_page();
        if u64::from(current_page) > max_pages && search_result.total_count > 0 {
            return Err(ProductsByPostError::PageOutOfRange {
                current_page,
                max_pages,
            });
        }
        debug!(
            "Resolved page {} of {} with {} product(s) for post `{}`.",
            current_page,
            max_pages,
            search_result.items.len(),
            post.id
        );

        Ok(ProductSearchOutput {
            total_count: search_result.total_count,
            items: search_result.items,
            page_info: SearchResultPageInfo {
                current_page,
                page_size: search_criteria.page_size(),
                total_pages: max_pages,
            },
        })
    }
}

/// Rejects a missing post id and pages or page sizes below 1.
fn validate_args(args: &ProductsByPostArgs) -> Result<PageRequest, ProductsByPostError> {
    let post_id = args
        .post_id
        .ok_or(ProductsByPostError::InvalidArgument("postId value is not Null."))?;
    let current_page = positive(args.current_page).ok_or(ProductsByPostError::InvalidArgument(
        "currentPage value must be greater than 0.",
    ))?;
    let page_size = positive(args.page_size).ok_or(ProductsByPostError::InvalidArgument(
        "pageSize value must be greater than 0.",
    ))?;
    Ok(PageRequest {
        post_id,
        current_page,
        page_size,
    })
}

fn positive(value: i32) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v >= 1)
}

/// Number of pages needed for `total_count` matches, `0` when the page size is unset.
pub fn max_pages(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size))
}
