use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guesses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Guesses::Id).string().not_null().primary_key())
                    // No foreign key on match_id: guesses appended under a
                    // nonexistent match must still persist.
                    .col(ColumnDef::new(Guesses::MatchId).string().not_null())
                    .col(ColumnDef::new(Guesses::Guess).string().not_null())
                    .col(ColumnDef::new(Guesses::PlayerId).string().not_null())
                    .col(
                        ColumnDef::new(Guesses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on match_id for per-match guess listings
        manager
            .create_index(
                Index::create()
                    .name("idx_guesses_match_id")
                    .table(Guesses::Table)
                    .col(Guesses::MatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Guesses {
    Table,
    Id,
    MatchId,
    Guess,
    PlayerId,
    CreatedAt,
}
