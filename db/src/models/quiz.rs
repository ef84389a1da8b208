use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A generated quiz attached to exactly one assignment. Saving a quiz for
/// an assignment that already has one replaces the question set instead of
/// creating a second row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub assignment_id: i64,
    pub user_id: i64,
    pub questions: QuestionList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct QuestionList(pub Vec<Question>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id",
        on_delete = "Cascade"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_assignment(
        db: &DbConn,
        assignment_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(db)
            .await
    }

    /// Creates the quiz for an assignment, or replaces its question set if
    /// one already exists.
    pub async fn upsert(
        db: &DbConn,
        assignment_id: i64,
        user_id: i64,
        questions: Vec<Question>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        if let Some(existing) = Self::find_by_assignment(db, assignment_id).await? {
            let mut quiz: ActiveModel = existing.into();
            quiz.questions = Set(QuestionList(questions));
            quiz.updated_at = Set(now);
            return quiz.update(db).await;
        }

        let quiz = ActiveModel {
            assignment_id: Set(assignment_id),
            user_id: Set(user_id),
            questions: Set(QuestionList(questions)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        quiz.insert(db).await
    }

    /// Deletes the quiz for an assignment; reports whether one existed.
    pub async fn delete_by_assignment(db: &DbConn, assignment_id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::AssignmentId.eq(assignment_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
