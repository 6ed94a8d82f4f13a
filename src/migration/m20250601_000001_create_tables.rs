use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{AuditLogs, Banners, Categories, Orders, Restaurants, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Build `CREATE TABLE IF NOT EXISTS` for an entity, unique columns included.
fn create_stmt<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        manager.create_table(create_stmt(&schema, Banners)).await?;
        manager.create_table(create_stmt(&schema, Categories)).await?;
        manager.create_table(create_stmt(&schema, Users)).await?;
        manager.create_table(create_stmt(&schema, Restaurants)).await?;
        manager.create_table(create_stmt(&schema, Orders)).await?;
        manager.create_table(create_stmt(&schema, AuditLogs)).await?;

        // listing filters
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_user_id")
                    .table(Orders)
                    .col(crate::entity::orders::Column::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banners_sort_order")
                    .table(Banners)
                    .col(crate::entity::banners::Column::SortOrder)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLogs).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banners).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
