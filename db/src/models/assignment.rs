use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A personal assignment, owned by the user who created it. Ownership is
/// immutable; every read and mutation route checks it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub subject: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub status: Status,
    pub points: i64,
    pub description: String,
    /// Stamped on the first transition into `Completed`, never cleared.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Priority {
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Low")]
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "Not Started")]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Review")]
    Review,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_one = "super::quiz::Entity")]
    Quiz,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Optional field updates applied by `PUT /api/assignments/{id}`. Absent
/// fields keep their stored values.
#[derive(Debug, Default, Clone)]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub points: Option<i64>,
    pub description: Option<String>,
}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        user_id: i64,
        title: &str,
        subject: &str,
        due_date: DateTime<Utc>,
        priority: Priority,
        points: i64,
        description: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let assignment = ActiveModel {
            user_id: Set(user_id),
            title: Set(title.to_owned()),
            subject: Set(subject.to_owned()),
            due_date: Set(due_date),
            priority: Set(priority),
            status: Set(Status::NotStarted),
            points: Set(points),
            description: Set(description.to_owned()),
            completed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        assignment.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All assignments owned by `user_id`, soonest due date first.
    pub async fn list_for_user(db: &DbConn, user_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::DueDate)
            .all(db)
            .await
    }

    /// Applies a patch and reports whether this update is the assignment's
    /// first-ever transition into `Completed`. That flag drives the one-time
    /// completion point award; leaving `Completed` and re-entering it later
    /// never re-awards, which `completed_at` staying set guarantees.
    pub async fn apply_patch(
        self,
        db: &DbConn,
        patch: AssignmentPatch,
    ) -> Result<(Model, bool), DbErr> {
        let was_completed = self.status == Status::Completed;
        let is_now_completed = match &patch.status {
            Some(status) => *status == Status::Completed,
            None => was_completed,
        };
        let completed_at_unset = self.completed_at.is_none();
        let just_completed = !was_completed && is_now_completed && completed_at_unset;

        let mut assignment: ActiveModel = self.into();
        if let Some(title) = patch.title {
            assignment.title = Set(title);
        }
        if let Some(subject) = patch.subject {
            assignment.subject = Set(subject);
        }
        if let Some(due_date) = patch.due_date {
            assignment.due_date = Set(due_date);
        }
        if let Some(priority) = patch.priority {
            assignment.priority = Set(priority);
        }
        if let Some(status) = patch.status {
            assignment.status = Set(status);
        }
        if let Some(points) = patch.points {
            assignment.points = Set(points);
        }
        if let Some(description) = patch.description {
            assignment.description = Set(description);
        }
        if is_now_completed && completed_at_unset {
            assignment.completed_at = Set(Some(Utc::now()));
        }
        assignment.updated_at = Set(Utc::now());

        let updated = assignment.update(db).await?;
        Ok((updated, just_completed))
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
