use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOrders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserOrders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserOrders::Username).string_len(100).not_null())
                    .col(ColumnDef::new(UserOrders::Userid).string_len(50).not_null())
                    .col(
                        ColumnDef::new(UserOrders::Userlocation)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserOrders::Foodname).string_len(255).not_null())
                    .col(
                        ColumnDef::new(UserOrders::Usernamecontactno)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserOrders::Useremailid).string().not_null())
                    .col(
                        ColumnDef::new(UserOrders::Description)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserOrders::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(UserOrders::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserOrders::CreatedAt)
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
            .drop_table(Table::drop().table(UserOrders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserOrders {
    Table,
    Id,
    Username,
    Userid,
    Userlocation,
    Foodname,
    Usernamecontactno,
    Useremailid,
    Description,
    Quantity,
    Date,
    CreatedAt,
}
