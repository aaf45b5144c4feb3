pub mod connection;
pub mod order_datatypes;
pub mod post;
pub mod product;
