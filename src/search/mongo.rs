use async_trait::async_trait;
use bson::{doc, Document, Uuid};
use futures::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use super::{
    FilterQuery, PostRepository, ProductCollection, RepositoryError, SearchCriteria, SearchResult,
};
use crate::graphql::model::{post::Post, product::Product};

/// Loads posts from the `posts` collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db_client: &Database) -> Self {
        Self {
            collection: db_client.collection::<Post>("posts"),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn load(&self, post_id: Uuid) -> Result<Post, RepositoryError> {
        match self.collection.find_one(doc! {"_id": post_id }, None).await {
            Ok(maybe_post) => maybe_post.ok_or(RepositoryError::PostNotFound(post_id)),
            Err(e) => {
                let operation = format!("Retrieving post with UUID: `{}`", post_id);
                Err(RepositoryError::database(&operation, e))
            }
        }
    }
}

/// Searches entities in the MongoDB collection of their entity type.
#[derive(Clone)]
pub struct MongoFilterQuery {
    db_client: Database,
}

impl MongoFilterQuery {
    pub fn new(db_client: Database) -> Self {
        Self { db_client }
    }
}

#[async_trait]
impl FilterQuery for MongoFilterQuery {
    async fn get_result(
        &self,
        criteria: &SearchCriteria,
        entity_type: &str,
        collection: &ProductCollection,
    ) -> Result<SearchResult, RepositoryError> {
        let products: Collection<Product> = self
            .db_client
            .collection::<Product>(collection_name(entity_type)?);
        if collection.is_empty() {
            return Ok(SearchResult::default());
        }
        let filter = doc! {"_id": { "$in": collection.product_ids().to_vec() } };
        let total_count = products
            .count_documents(filter.clone(), None)
            .await
            .map_err(|e| RepositoryError::database("Counting products", e))?;
        let cursor = products
            .find(filter, find_options(criteria))
            .await
            .map_err(|e| RepositoryError::database("Retrieving products", e))?;
        let items: Vec<Product> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::database("Reading products", e))?;
        Ok(SearchResult { total_count, items })
    }
}

/// Maps a searchable entity type to the MongoDB collection holding it.
fn collection_name(entity_type: &str) -> Result<&'static str, RepositoryError> {
    match entity_type {
        "product" => Ok("products"),
        _ => Err(RepositoryError::UnknownEntityType(entity_type.to_string())),
    }
}

/// Converts paging and sorting of the criteria to MongoDB find options.
fn find_options(criteria: &SearchCriteria) -> FindOptions {
    let (skip, limit) = criteria.page_window();
    FindOptions::builder()
        .skip(skip)
        .limit(limit.map(i64::from))
        .sort(sorting_document(criteria))
        .build()
}

/// Builds the sort document of the criteria, falling back to ascending ids.
fn sorting_document(criteria: &SearchCriteria) -> Document {
    let mut sorting_doc = Document::new();
    for sort_order in criteria.sort_orders() {
        sorting_doc.insert(sort_order.field.as_str(), i32::from(sort_order.direction));
    }
    if sorting_doc.is_empty() {
        sorting_doc.insert("_id", 1);
    }
    sorting_doc
}
