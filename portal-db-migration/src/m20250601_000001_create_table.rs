use sea_orm_migration::prelude::*;
use portal_db_entity::db::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000001_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(student::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(student::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(student::Column::Name).string_len(150).not_null())
                    .col(
                        ColumnDef::new(student::Column::Email)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(student::Column::PhoneNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(student::Column::City).string_len(100).not_null())
                    .col(
                        ColumnDef::new(student::Column::ClassSelected)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(student::Column::Percentage).double().not_null())
                    .col(
                        ColumnDef::new(student::Column::ReferralCode)
                            .string_len(50)
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(student::Column::LeadStage)
                            .string_len(16)
                            .not_null()
                            .default("New"),
                    )
                    .col(ColumnDef::new(student::Column::ReferredById).integer())
                    .col(
                        ColumnDef::new(student::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(student::Column::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_referred_by")
                            .from(student::Entity, student::Column::ReferredById)
                            .to(student::Entity, student::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(student::Entity).to_owned())
            .await
    }
}
