use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Matches::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Matches::HostId).string().not_null())
                    .col(ColumnDef::new(Matches::Status).string().not_null())
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Matches::CurrentWord).string().not_null())
                    .col(
                        ColumnDef::new(Matches::TimeLeft)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(ColumnDef::new(Matches::WinnerId).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    HostId,
    Status,
    CreatedAt,
    CurrentWord,
    TimeLeft,
    WinnerId,
}
