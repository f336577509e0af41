//! Identity tables written by the authentication provider.
//!
//! Creates users, linked provider accounts, sessions and verification tokens.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string_len(255))
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::EmailVerified)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Users::Image).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::UserId).string_len(255).not_null())
                    .col(ColumnDef::new(Accounts::Type).string_len(255).not_null())
                    .col(ColumnDef::new(Accounts::Provider).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Accounts::ProviderAccountId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Accounts::RefreshToken).text())
                    .col(ColumnDef::new(Accounts::AccessToken).text())
                    .col(ColumnDef::new(Accounts::ExpiresAt).integer())
                    .col(ColumnDef::new(Accounts::TokenType).string_len(255))
                    .col(ColumnDef::new(Accounts::Scope).string_len(255))
                    .col(ColumnDef::new(Accounts::IdToken).text())
                    .col(ColumnDef::new(Accounts::SessionState).string_len(255))
                    .primary_key(
                        Index::create()
                            .col(Accounts::Provider)
                            .col(Accounts::ProviderAccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_user")
                            .from(Accounts::Table, Accounts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("account_user_id_idx")
                    .table(Accounts::Table)
                    .col(Accounts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::SessionToken)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::UserId).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Sessions::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_user")
                            .from(Sessions::Table, Sessions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("session_user_id_idx")
                    .table(Sessions::Table)
                    .col(Sessions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VerificationTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationTokens::Identifier)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::Token)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(VerificationTokens::Identifier)
                            .col(VerificationTokens::Token),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(VerificationTokens::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "condos_user")]
    Table,
    Id,
    Name,
    Email,
    EmailVerified,
    Image,
}

#[derive(DeriveIden)]
enum Accounts {
    #[sea_orm(iden = "condos_account")]
    Table,
    UserId,
    Type,
    Provider,
    ProviderAccountId,
    RefreshToken,
    AccessToken,
    ExpiresAt,
    TokenType,
    Scope,
    IdToken,
    SessionState,
}

#[derive(DeriveIden)]
enum Sessions {
    #[sea_orm(iden = "condos_session")]
    Table,
    SessionToken,
    UserId,
    Expires,
}

#[derive(DeriveIden)]
enum VerificationTokens {
    #[sea_orm(iden = "condos_verification_token")]
    Table,
    Identifier,
    Token,
    Expires,
}
