use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Branches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Branches::AdminId).string().not_null())
                    .col(ColumnDef::new(Branches::CompanyName).string().not_null())
                    .col(ColumnDef::new(Branches::Country).string().not_null())
                    .col(ColumnDef::new(Branches::City).string().not_null())
                    .col(ColumnDef::new(Branches::Branch).string().not_null())
                    .col(
                        ColumnDef::new(Branches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Branches {
    Table,
    Id,
    AdminId,
    CompanyName,
    Country,
    City,
    Branch,
    CreatedAt,
}
