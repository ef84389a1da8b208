use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "course_outlines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: String,
    /// Sort key within the parent subject; ties resolve by id.
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(has_many = "super::module::Entity")]
    Module,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        subject_id: i64,
        title: &str,
        description: &str,
        display_order: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let outline = ActiveModel {
            subject_id: Set(subject_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            display_order: Set(display_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        outline.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list_for_subject(db: &DbConn, subject_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn update_fields(
        self,
        db: &DbConn,
        title: Option<String>,
        description: Option<String>,
        display_order: Option<i64>,
    ) -> Result<Model, DbErr> {
        let mut outline: ActiveModel = self.into();
        if let Some(title) = title {
            outline.title = Set(title);
        }
        if let Some(description) = description {
            outline.description = Set(description);
        }
        if let Some(display_order) = display_order {
            outline.display_order = Set(display_order);
        }
        outline.updated_at = Set(Utc::now());
        outline.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
