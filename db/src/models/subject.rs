use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Top of the content hierarchy: Subject → CourseOutline → Module → Video.
/// `created_by` records the creating admin but grants no special rights.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::course_outline::Entity")]
    CourseOutline,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course_outline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOutline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        description: &str,
        icon: &str,
        color: &str,
        created_by: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let subject = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            icon: Set(icon.to_owned()),
            color: Set(color.to_owned()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        subject.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn update_fields(
        self,
        db: &DbConn,
        name: Option<String>,
        description: Option<String>,
        icon: Option<String>,
        color: Option<String>,
    ) -> Result<Model, DbErr> {
        let mut subject: ActiveModel = self.into();
        if let Some(name) = name {
            subject.name = Set(name);
        }
        if let Some(description) = description {
            subject.description = Set(description);
        }
        if let Some(icon) = icon {
            subject.icon = Set(icon);
        }
        if let Some(color) = color {
            subject.color = Set(color);
        }
        subject.updated_at = Set(Utc::now());
        subject.update(db).await
    }

    /// Removes the subject; outlines, modules, and videos underneath it go
    /// with it via the schema's cascading foreign keys.
    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
