//! SeaORM repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sea_orm_base::{SeaOrmBaseRepository, map_db_err};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Listed posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let (title, content) = draft.into_parts();
        let model = post::ActiveModel {
            title: Set(title),
            content: Set(content),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let (title, content) = draft.into_parts();
        let mut active: post::ActiveModel = existing.into();
        active.title = Set(title);
        active.content = Set(content);

        let model = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(model.into())
    }
}
