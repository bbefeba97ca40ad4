use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FoodItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FoodItems::Name).string().not_null())
                    .col(ColumnDef::new(FoodItems::Description).text().not_null())
                    .col(ColumnDef::new(FoodItems::FoodType).string().not_null())
                    .col(ColumnDef::new(FoodItems::FoodImage).string().null())
                    .col(ColumnDef::new(FoodItems::VendorId).string().null())
                    .col(
                        ColumnDef::new(FoodItems::CreatedAt)
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
            .drop_table(Table::drop().table(FoodItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FoodItems {
    Table,
    Id,
    Name,
    Description,
    FoodType,
    FoodImage,
    VendorId,
    CreatedAt,
}
