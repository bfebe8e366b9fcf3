//! Topic repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::topic::{CreateTopicParams, Topic, TopicPatch};

pub struct TopicRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TopicRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, DbErr> {
        let now = Utc::now();
        let entity = entity::topic::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            creator_id: ActiveValue::Set(params.creator_id),
            created_at: ActiveValue::Set(now),
            last_updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Topic::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Topic::from_entity))
    }

    pub async fn find_owned(&self, id: Uuid, creator_id: Uuid) -> Result<Option<Topic>, DbErr> {
        let entity = entity::prelude::Topic::find_by_id(id)
            .filter(entity::topic::Column::CreatorId.eq(creator_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Topic::from_entity))
    }

    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Topic>, DbErr> {
        let entities = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::CreatedAt)
            .order_by_asc(entity::topic::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Topic::from_entity).collect())
    }

    /// Applies a patch; an empty patch leaves the row and its timestamp untouched.
    pub async fn update(&self, id: Uuid, patch: TopicPatch) -> Result<Option<Topic>, DbErr> {
        let Some(entity) = entity::prelude::Topic::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Topic::from_entity(entity)));
        }

        let mut active: entity::topic::ActiveModel = entity.into();
        patch.apply(&mut active);
        active.last_updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Topic::from_entity(updated)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Topic::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
