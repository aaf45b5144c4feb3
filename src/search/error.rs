use bson::Uuid;
use thiserror::Error;

/// Failures of the collaborators backing the product search.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Post with UUID: `{0}` not found.")]
    PostNotFound(Uuid),

    #[error("Entity type: `{0}` can not be searched.")]
    UnknownEntityType(String),

    #[error("{message}")]
    Database {
        message: String,
        #[source]
        source: mongodb::error::Error,
    },
}

impl RepositoryError {
    /// Wraps a MongoDB driver error with a message naming the failed operation.
    pub fn database(operation: &str, source: mongodb::error::Error) -> Self {
        Self::Database {
            message: format!("{} failed in MongoDB.", operation),
            source,
        }
    }
}
