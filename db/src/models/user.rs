use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::gamification::{self, PointAward};

/// Represents a learner (or admin) account in the `users` table.
///
/// `academic_level` and `level_progress` are derived views of `points`,
/// recomputed on every award; `points` never decreases through any route.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Unique, stored lowercased for case-insensitive matching.
    pub email: String,
    /// Argon2 digest. Never serialized into a response body.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Avatar URL shown to clients. Defaults to a generated placeholder.
    pub avatar: String,
    /// Local path of an uploaded avatar file, if any.
    #[serde(skip_serializing)]
    pub avatar_path: Option<String>,
    pub grade: Grade,
    pub class_name: String,
    pub academic_level: i64,
    pub level_progress: i64,
    pub points: i64,
    pub achievements: AchievementList,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Grade {
    #[sea_orm(string_value = "Beginner")]
    Beginner,
    #[sea_orm(string_value = "Intermediate")]
    Intermediate,
    #[sea_orm(string_value = "Advanced")]
    Advanced,
    #[sea_orm(string_value = "Expert")]
    Expert,
}

/// Insertion-ordered, duplicate-free achievement labels, stored as a JSON
/// array column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AchievementList(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
    #[sea_orm(has_many = "super::subject::Entity")]
    Subject,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        password: &str,
        admin: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let seed = name.replace(' ', "");
        let user = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.trim().to_lowercase()),
            password_hash: Set(Self::hash_password(password)?),
            avatar: Set(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"
            )),
            avatar_path: Set(None),
            grade: Set(Grade::Beginner),
            class_name: Set(String::new()),
            academic_level: Set(1),
            level_progress: Set(0),
            points: Set(0),
            achievements: Set(AchievementList::default()),
            admin: Set(admin),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await
    }

    /// Looks up a user by email and checks the password against the stored
    /// digest. Returns `None` for an unknown email and for a mismatched
    /// password alike, so callers cannot distinguish the two.
    pub async fn verify_credentials(
        db: &DbConn,
        email: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        if let Some(user) = Self::find_by_email(db, email).await? {
            if Self::verify_password(&user, password) {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {e}")))
    }

    pub fn verify_password(user: &Model, password: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Applies optional profile edits. Points, level, and achievements are
    /// never touched here.
    pub async fn update_profile(
        self,
        db: &DbConn,
        name: Option<String>,
        grade: Option<Grade>,
        avatar: Option<String>,
        class_name: Option<String>,
    ) -> Result<Model, DbErr> {
        let mut user: ActiveModel = self.into();
        if let Some(name) = name {
            user.name = Set(name);
        }
        if let Some(grade) = grade {
            user.grade = Set(grade);
        }
        if let Some(avatar) = avatar {
            user.avatar = Set(avatar);
        }
        if let Some(class_name) = class_name {
            user.class_name = Set(class_name);
        }
        user.updated_at = Set(Utc::now());
        user.update(db).await
    }

    /// Records the storage location of an uploaded avatar file and points
    /// the public avatar URL at the serving route.
    pub async fn set_avatar_upload(
        self,
        db: &DbConn,
        avatar_path: String,
        avatar_url: String,
    ) -> Result<Model, DbErr> {
        let mut user: ActiveModel = self.into();
        user.avatar_path = Set(Some(avatar_path));
        user.avatar = Set(avatar_url);
        user.updated_at = Set(Utc::now());
        user.update(db).await
    }

    /// Adds a positive point delta to this user, recomputing the derived
    /// level and progress and recording the level-up achievement if a
    /// boundary was crossed. Plain read-modify-write; concurrent awards to
    /// the same user resolve last-writer-wins.
    pub async fn award_points(self, db: &DbConn, delta: i64) -> Result<(Model, PointAward), DbErr> {
        let award = gamification::apply_points(self.points, self.academic_level, delta);

        let mut achievements = self.achievements.0.clone();
        if award.levelled_up {
            gamification::push_achievement(
                &mut achievements,
                &gamification::level_up_label(award.new_level),
            );
        }

        let mut user: ActiveModel = self.into();
        user.points = Set(award.new_total);
        user.academic_level = Set(award.new_level);
        user.level_progress = Set(award.new_progress);
        user.achievements = Set(AchievementList(achievements));
        user.updated_at = Set(Utc::now());

        let updated = user.update(db).await?;
        Ok((updated, award))
    }

    /// Records `label` in the achievement set. A duplicate label leaves the
    /// set unchanged and is not an error.
    pub async fn unlock_achievement(self, db: &DbConn, label: &str) -> Result<Model, DbErr> {
        let mut achievements = self.achievements.0.clone();
        if !gamification::push_achievement(&mut achievements, label) {
            return Ok(self);
        }

        let mut user: ActiveModel = self.into();
        user.achievements = Set(AchievementList(achievements));
        user.updated_at = Set(Utc::now());
        user.update(db).await
    }

    pub async fn set_admin(db: &DbConn, id: i64, admin: bool) -> Result<Option<Model>, DbErr> {
        let Some(user) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut user: ActiveModel = user.into();
        user.admin = Set(admin);
        user.updated_at = Set(Utc::now());
        user.update(db).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_digest_round_trip() {
        let hash = Model::hash_password("correct horse").unwrap();
        assert_ne!(hash, "correct horse");

        let user = Model {
            id: 1,
            name: "Test".into(),
            email: "t@example.com".into(),
            password_hash: hash,
            avatar: String::new(),
            avatar_path: None,
            grade: Grade::Beginner,
            class_name: String::new(),
            academic_level: 1,
            level_progress: 0,
            points: 0,
            achievements: AchievementList::default(),
            admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(Model::verify_password(&user, "correct horse"));
        assert!(!Model::verify_password(&user, "wrong horse"));
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = Model {
            id: 1,
            name: "Test".into(),
            email: "t@example.com".into(),
            password_hash: "secret-digest".into(),
            avatar: String::new(),
            avatar_path: None,
            grade: Grade::Beginner,
            class_name: String::new(),
            academic_level: 1,
            level_progress: 0,
            points: 0,
            achievements: AchievementList::default(),
            admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-digest"));
        assert!(!json.contains("password_hash"));
    }
}
