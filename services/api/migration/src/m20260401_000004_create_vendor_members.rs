use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorMembers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VendorMembers::VendorId).uuid().not_null())
                    .col(ColumnDef::new(VendorMembers::Name).string().not_null())
                    .col(
                        ColumnDef::new(VendorMembers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(VendorMembers::Mobile)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(VendorMembers::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(VendorMembers::Locations)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(VendorMembers::CreatedAt)
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
            .drop_table(Table::drop().table(VendorMembers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VendorMembers {
    Table,
    Id,
    VendorId,
    Name,
    Email,
    Mobile,
    PasswordHash,
    Locations,
    CreatedAt,
}
