pub mod products_by_post;
