use sea_orm_migration::prelude::*;
use portal_db_entity::db::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000004_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(scholarship::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(scholarship::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(scholarship::Column::CollegeId).integer().not_null())
                    .col(ColumnDef::new(scholarship::Column::CourseId).integer())
                    .col(ColumnDef::new(scholarship::Column::Name).string_len(200).not_null())
                    .col(ColumnDef::new(scholarship::Column::Description).text().not_null())
                    .col(ColumnDef::new(scholarship::Column::EligibilityMarks).double())
                    .col(ColumnDef::new(scholarship::Column::AmountDetails).string_len(255))
                    .col(ColumnDef::new(scholarship::Column::ApplicableClass).string_len(10))
                    .col(
                        ColumnDef::new(scholarship::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(scholarship::Column::UpdatedAt).timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_college")
                            .from(scholarship::Entity, scholarship::Column::CollegeId)
                            .to(college::Entity, college::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scholarship_course")
                            .from(scholarship::Entity, scholarship::Column::CourseId)
                            .to(course::Entity, course::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(scholarship::Entity).to_owned())
            .await
    }
}
