use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(VendorMembers::Table)
                    .col(VendorMembers::VendorId)
                    .name("idx_vendor_members_vendor_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Listings::Table)
                    .col(Listings::VendorId)
                    .name("idx_listings_vendor_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserOrders::Table)
                    .col(UserOrders::Userid)
                    .name("idx_user_orders_userid")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_orders_userid").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_listings_vendor_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_vendor_members_vendor_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum VendorMembers {
    Table,
    VendorId,
}

#[derive(Iden)]
enum Listings {
    Table,
    VendorId,
}

#[derive(Iden)]
enum UserOrders {
    Table,
    Userid,
}
