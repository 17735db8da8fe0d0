use sea_orm_migration::prelude::*;
use portal_db_entity::db::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000003_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(course::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(course::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(course::Column::CollegeId).integer().not_null())
                    .col(ColumnDef::new(course::Column::Name).string_len(150).not_null())
                    .col(ColumnDef::new(course::Column::Description).text())
                    .col(ColumnDef::new(course::Column::EligibilityCriteria).text())
                    .col(ColumnDef::new(course::Column::FutureOpportunities).text())
                    .col(
                        ColumnDef::new(course::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(course::Column::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_college")
                            .from(course::Entity, course::Column::CollegeId)
                            .to(college::Entity, college::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(course::Entity).to_owned())
            .await
    }
}
