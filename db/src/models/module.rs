use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A teaching unit inside a course outline.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub outline_id: i64,
    pub title: String,
    pub description: String,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_outline::Entity",
        from = "Column::OutlineId",
        to = "super::course_outline::Column::Id",
        on_delete = "Cascade"
    )]
    CourseOutline,
    #[sea_orm(has_many = "super::video::Entity")]
    Video,
}

impl Related<super::course_outline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOutline.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        outline_id: i64,
        title: &str,
        description: &str,
        display_order: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let module = ActiveModel {
            outline_id: Set(outline_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            display_order: Set(display_order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        module.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list_for_outline(db: &DbConn, outline_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::OutlineId.eq(outline_id))
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
        let mut module: ActiveModel = self.into();
        if let Some(title) = title {
            module.title = Set(title);
        }
        if let Some(description) = description {
            module.description = Set(description);
        }
        if let Some(display_order) = display_order {
            module.display_order = Set(display_order);
        }
        module.updated_at = Set(Utc::now());
        module.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
