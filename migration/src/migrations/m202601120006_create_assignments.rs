use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601120006_create_assignments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("assignments"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("subject")).string().not_null())
                    .col(ColumnDef::new(Alias::new("due_date")).timestamp().not_null())
                    .col(
                        ColumnDef::new(Alias::new("priority"))
                            .enumeration(
                                Alias::new("priority_enum"),
                                vec![
                                    Alias::new("High"),
                                    Alias::new("Medium"),
                                    Alias::new("Low"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("status_enum"),
                                vec![
                                    Alias::new("Not Started"),
                                    Alias::new("In Progress"),
                                    Alias::new("Review"),
                                    Alias::new("Completed"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("points")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("description")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("completed_at")).timestamp())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("assignments"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("assignments")).to_owned())
            .await
    }
}
