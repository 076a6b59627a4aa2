use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Generic repository trait for lookups and removals by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Ids and creation timestamps are assigned here, never by callers.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// All posts, newest first. Ties on `created_at` fall back to id, descending.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post stamped with the current time.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Overwrite title and content of an existing post.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;
}
