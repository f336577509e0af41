//! Condominium tables: buildings, residents, payments and expenses.
//!
//! Every child table references its parent through its own foreign-key
//! column.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buildings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Buildings::Name)
                            .string_len(255)
                            .not_null()
                            .default("Novo condomínio"),
                    )
                    .col(
                        ColumnDef::new(Buildings::CreatedById)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Buildings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Buildings::UpdatedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Buildings::Floors)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Buildings::Fractions)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_building_creator")
                            .from(Buildings::Table, Buildings::CreatedById)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("building_creator_idx")
                    .table(Buildings::Table)
                    .col(Buildings::CreatedById)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Residents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Residents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Residents::BuildingId).integer().not_null())
                    .col(
                        ColumnDef::new(Residents::Name)
                            .string_len(255)
                            .not_null()
                            .default("Desconhecido"),
                    )
                    .col(ColumnDef::new(Residents::Contact).string_len(15))
                    .col(ColumnDef::new(Residents::Floor).integer().not_null())
                    .col(ColumnDef::new(Residents::Fraction).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resident_building")
                            .from(Residents::Table, Residents::BuildingId)
                            .to(Buildings::Table, Buildings::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("resident_building_idx")
                    .table(Residents::Table)
                    .col(Residents::BuildingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::BuildingId).integer().not_null())
                    .col(ColumnDef::new(Payments::ResidentId).integer().not_null())
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Payments::Month).string_len(7).not_null())
                    .col(ColumnDef::new(Payments::Description).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_building")
                            .from(Payments::Table, Payments::BuildingId)
                            .to(Buildings::Table, Buildings::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_resident")
                            .from(Payments::Table, Payments::ResidentId)
                            .to(Residents::Table, Residents::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("payment_building_month_idx")
                    .table(Payments::Table)
                    .col(Payments::BuildingId)
                    .col(Payments::Month)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::BuildingId).integer().not_null())
                    .col(
                        ColumnDef::new(Expenses::Amount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Expenses::Month).string_len(7).not_null())
                    .col(ColumnDef::new(Expenses::Description).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_building")
                            .from(Expenses::Table, Expenses::BuildingId)
                            .to(Buildings::Table, Buildings::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("expense_building_month_idx")
                    .table(Expenses::Table)
                    .col(Expenses::BuildingId)
                    .col(Expenses::Month)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Residents::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buildings::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "condos_user")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Buildings {
    #[sea_orm(iden = "condos_building")]
    Table,
    Id,
    Name,
    CreatedById,
    CreatedAt,
    UpdatedAt,
    Floors,
    Fractions,
}

#[derive(DeriveIden)]
enum Residents {
    #[sea_orm(iden = "condos_resident")]
    Table,
    Id,
    BuildingId,
    Name,
    Contact,
    Floor,
    Fraction,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "condos_payment")]
    Table,
    Id,
    BuildingId,
    ResidentId,
    Amount,
    Month,
    Description,
}

#[derive(DeriveIden)]
enum Expenses {
    #[sea_orm(iden = "condos_expense")]
    Table,
    Id,
    BuildingId,
    Amount,
    Month,
    Description,
}
