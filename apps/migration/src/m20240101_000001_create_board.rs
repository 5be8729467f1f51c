use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Board {
    Table,
    Id,
    Title,
    Content,
    Writer,
    Hits,
    DeleteYn,
    CreatedDate,
    ModifiedDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Board::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Board::Title).string().not_null())
                    .col(ColumnDef::new(Board::Content).text().not_null())
                    .col(ColumnDef::new(Board::Writer).string().not_null())
                    .col(ColumnDef::new(Board::Hits).integer().not_null().default(0))
                    .col(ColumnDef::new(Board::DeleteYn).char_len(1).not_null().default("N"))
                    .col(
                        ColumnDef::new(Board::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Board::ModifiedDate).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Board::Table).if_exists().to_owned())
            .await
    }
}
