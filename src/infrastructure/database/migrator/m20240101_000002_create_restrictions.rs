//! Create restrictions lookup table
//!
//! Seeded with the restriction kinds: 1 = Reservation, 2 = Owner Block.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_KINDS: [(i32, &str); 2] = [(1, "Reservation"), (2, "Owner Block")];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restrictions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restrictions::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Restrictions::RestrictionName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Restrictions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Restrictions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert.into_table(Restrictions::Table).columns([
            Restrictions::Id,
            Restrictions::RestrictionName,
            Restrictions::CreatedAt,
            Restrictions::UpdatedAt,
        ]);
        for (id, name) in SEED_KINDS {
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
            .drop_table(Table::drop().table(Restrictions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Restrictions {
    Table,
    Id,
    RestrictionName,
    CreatedAt,
    UpdatedAt,
}
