use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub duration_seconds: i64,
    pub thumbnail: String,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Field updates for `PUT /api/videos/{id}`.
#[derive(Debug, Default, Clone)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration_seconds: Option<i64>,
    pub thumbnail: Option<String>,
    pub display_order: Option<i64>,
}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        module_id: i64,
        title: &str,
        description: &str,
        video_url: &str,
        duration_seconds: i64,
        thumbnail: &str,
        display_order: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let video = ActiveModel {
            module_id: Set(module_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            video_url: Set(video_url.to_owned()),
            duration_seconds: Set(duration_seconds),
            thumbnail: Set(thumbnail.to_owned()),
            display_order: Set(display_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        video.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list_for_module(db: &DbConn, module_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn apply_patch(self, db: &DbConn, patch: VideoPatch) -> Result<Model, DbErr> {
        let mut video: ActiveModel = self.into();
        if let Some(title) = patch.title {
            video.title = Set(title);
        }
        if let Some(description) = patch.description {
            video.description = Set(description);
        }
        if let Some(video_url) = patch.video_url {
            video.video_url = Set(video_url);
        }
        if let Some(duration_seconds) = patch.duration_seconds {
            video.duration_seconds = Set(duration_seconds);
        }
        if let Some(thumbnail) = patch.thumbnail {
            video.thumbnail = Set(thumbnail);
        }
        if let Some(display_order) = patch.display_order {
            video.display_order = Set(display_order);
        }
        video.updated_at = Set(Utc::now());
        video.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
