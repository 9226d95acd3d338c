//! Create rooms table and seed the two bookable rooms

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_ROOMS: [(i32, &str); 2] = [(1, "General's Quarters"), (2, "Major's Suite")];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::RoomName).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert.into_table(Rooms::Table).columns([
            Rooms::Id,
            Rooms::RoomName,
            Rooms::CreatedAt,
            Rooms::UpdatedAt,
        ]);
        for (id, name) in SEED_ROOMS {
            insert
                .values([
                    id.into(),
                    name.into(),
                    Expr::current_timestamp().into(),
                    Expr::current_timestamp().into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        let db = manager.get_connection();
        db.execute(manager.get_database_backend().build(&insert))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rooms {
    Table,
    Id,
    RoomName,
    CreatedAt,
    UpdatedAt,
}
