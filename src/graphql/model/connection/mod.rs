pub mod product_search_output;
