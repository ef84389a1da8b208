use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120001_create_users"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("users"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("email")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("password_hash")).string().not_null())
                    .col(ColumnDef::new(Alias::new("avatar")).string().not_null())
                    .col(ColumnDef::new(Alias::new("avatar_path")).string())
                    .col(ColumnDef::new(Alias::new("grade")).string().not_null().default("Beginner"))
                    .col(ColumnDef::new(Alias::new("class_name")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("academic_level")).integer().not_null().default(1))
                    .col(ColumnDef::new(Alias::new("level_progress")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("points")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("achievements")).json().not_null())
                    .col(ColumnDef::new(Alias::new("admin")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("users")).to_owned())
            .await
    }
}
