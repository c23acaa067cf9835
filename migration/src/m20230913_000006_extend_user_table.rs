use sea_orm_migration::{prelude::*, schema::*, sea_orm::DbBackend};

use crate::m20230913_000001_create_user_table::User;

static IDX_USER_USERNAME: &str = "idx_user_username";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts a single change per ALTER TABLE statement, so every
        // change to the user table is issued on its own.
        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .add_column(string_len(UserExtension::Username, 250).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_USERNAME)
                    .table(User::Table)
                    .col(UserExtension::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // SQLite neither enforces varchar length nor supports altering a column type.
        if manager.get_database_backend() != DbBackend::Sqlite {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .modify_column(string_len(User::Password, 250))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .drop_column(User::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .add_column(boolean(User::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() != DbBackend::Sqlite {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .modify_column(string_len(User::Password, 80))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_USERNAME)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .drop_column(UserExtension::Username)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserExtension {
    Username,
}
