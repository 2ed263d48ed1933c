use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use super::base_traits::{HasIdActiveModel, HasKeysetColumns, KeysetModel, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

/// One page of a keyset scan, newest row first.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    /// Id of the first row of the following page.
    pub next_cursor: Option<Uuid>,
}

impl<T> CursorPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model: FromQueryResult
        + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel>
        + KeysetModel
        + Send
        + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + HasIdActiveModel + TimestampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
    Self::Entity: HasKeysetColumns,
{
    type Entity: EntityTrait + Send + Sync;
    /// Human readable name used in not-found errors.
    const ENTITY_NAME: &'static str;
    const MAX_PAGE_SIZE: u64 = 100;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    fn not_found(id: Uuid) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        }
    }

    /// Inserts with fresh timestamps. A caller-chosen id is kept, otherwise
    /// a v4 UUID is assigned.
    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        if !active.id_is_set() {
            active.set_id(Uuid::new_v4());
        }
        active.set_created_at(now);
        active.set_updated_at(now);
        Ok(active.insert(self.db()).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn exists(&self, id: Uuid) -> DaoResult<bool> {
        let found = Self::Entity::find_by_id(id).one(self.db()).await?;
        Ok(found.is_some())
    }

    async fn find_all<F>(&self, apply: F) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>>
    where
        F: FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    {
        Ok(apply(Self::Entity::find()).all(self.db()).await?)
    }

    /// Keyset page ordered by `created_at DESC, id DESC`, starting at and
    /// including the cursor row. Fetches `limit + 1` rows; the surplus row
    /// becomes `next_cursor`. An unknown cursor yields an empty page.
    async fn find_page<F>(
        &self,
        cursor: Option<Uuid>,
        limit: u64,
        apply: F,
    ) -> DaoResult<CursorPage<<Self::Entity as EntityTrait>::Model>>
    where
        F: FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    {
        if limit == 0 || limit > Self::MAX_PAGE_SIZE {
            return Err(DaoLayerError::InvalidPagination {
                limit,
                max: Self::MAX_PAGE_SIZE,
            });
        }

        let id_column = Self::Entity::id_column();
        let created_column = Self::Entity::created_at_column();
        let mut query = apply(Self::Entity::find());

        if let Some(cursor) = cursor {
            let Some(anchor) = Self::Entity::find_by_id(cursor).one(self.db()).await? else {
                return Ok(CursorPage::empty());
            };
            let anchor_created = anchor.keyset_created_at();
            query = query.filter(
                Condition::any()
                    .add(created_column.lt(anchor_created))
                    .add(
                        Condition::all()
                            .add(created_column.eq(anchor_created))
                            .add(id_column.lte(cursor)),
                    ),
            );
        }

        let mut items = query
            .order_by_desc(created_column)
            .order_by_desc(id_column)
            .limit(limit + 1)
            .all(self.db())
            .await?;

        let next_cursor = if items.len() as u64 > limit {
            items.pop().map(|surplus| surplus.keyset_id())
        } else {
            None
        };

        Ok(CursorPage { items, next_cursor })
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;
        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());
        Ok(active.update(self.db()).await?)
    }

    async fn delete(&self, id: Uuid) -> DaoResult<Uuid> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;
        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }
        Ok(id)
    }
}
