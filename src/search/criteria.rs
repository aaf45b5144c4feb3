use crate::graphql::{
    model::order_datatypes::{OrderDirection, ProductOrderField},
    resolver::products_by_post::ProductsByPostArgs,
};

/// Single sort instruction of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: ProductOrderField,
    pub direction: OrderDirection,
}

/// Paging and sorting parameters handed to a `FilterQuery`.
///
/// A page size of `0` means the page size is unset, in which case the whole
/// result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    request_name: String,
    current_page: u32,
    page_size: u32,
    sort_orders: Vec<SortOrder>,
}

impl SearchCriteria {
    pub fn new(request_name: impl Into<String>) -> Self {
        Self {
            request_name: request_name.into(),
            ..Default::default()
        }
    }

    /// Name of the argument group the criteria was built for.
    pub fn request_name(&self) -> &str {
        &self.request_name
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn set_current_page(&mut self, current_page: u32) {
        self.current_page = current_page;
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    pub fn sort_orders(&self) -> &[SortOrder] {
        &self.sort_orders
    }

    pub fn add_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_orders.push(sort_order);
    }

    /// Returns how many matches precede the current page and how many the page holds at most.
    pub fn page_window(&self) -> (u64, Option<u32>) {
        if self.page_size == 0 {
            return (0, None);
        }
        let skip = u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size);
        (skip, Some(self.page_size))
    }
}

/// Builds search criteria from raw resolver arguments.
pub trait SearchCriteriaBuilder: Send + Sync {
    /// * `group_name` - Name of the argument group, e.g. `products`.
    /// * `args` - Raw arguments of the resolved field.
    fn build(&self, group_name: &str, args: &ProductsByPostArgs) -> SearchCriteria;
}

/// Translates the `orderBy` argument into sort orders and leaves paging to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgumentSearchCriteriaBuilder;

impl SearchCriteriaBuilder for ArgumentSearchCriteriaBuilder {
    fn build(&self, group_name: &str, args: &ProductsByPostArgs) -> SearchCriteria {
        let mut criteria = SearchCriteria::new(group_name);
        let order_by = args.order_by.clone().unwrap_or_default();
        let field = order_by.field.unwrap_or_default();
        criteria.add_sort_order(SortOrder {
            field,
            direction: order_by.direction.unwrap_or_default(),
        });
        // Ties on non-unique fields are broken by id to keep pages disjoint.
        if field != ProductOrderField::Id {
            criteria.add_sort_order(SortOrder {
                field: ProductOrderField::Id,
                direction: OrderDirection::Asc,
            });
        }
        criteria
    }
}
