use sea_orm_migration::prelude::*;
use portal_db_entity::db::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000005_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(offer::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(offer::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(offer::Column::ProviderName).string_len(150).not_null())
                    .col(ColumnDef::new(offer::Column::Description).text().not_null())
                    .col(ColumnDef::new(offer::Column::OfferType).string_len(16).not_null())
                    .col(ColumnDef::new(offer::Column::EligibilityMarks).double())
                    .col(ColumnDef::new(offer::Column::ApplicableClass).string_len(10))
                    .col(ColumnDef::new(offer::Column::TermsAndConditions).text())
                    .col(
                        ColumnDef::new(offer::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(offer::Column::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(offer::Entity).to_owned())
            .await
    }
}
