use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20230913_000001_create_user_table::User, m20230913_000002_create_people_table::People,
    m20230913_000003_create_planets_table::Planets,
    m20230913_000004_create_starship_table::Starship,
};

static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_PERSON_ID: &str = "fk_favorite_person_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_STARSHIP_ID: &str = "fk_favorite_starship_id";

static IDX_FAVORITE_USER_PERSON: &str = "idx_favorite_user_person";
static IDX_FAVORITE_USER_PLANET: &str = "idx_favorite_user_planet";
static IDX_FAVORITE_USER_STARSHIP: &str = "idx_favorite_user_starship";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite,
        // which does not support adding constraints after the fact.
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::FavoriteStarshipId))
                    .col(integer_null(Favorite::FavoritePersonId))
                    .col(integer_null(Favorite::FavoritePlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PERSON_ID)
                            .from(Favorite::Table, Favorite::FavoritePersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::FavoritePlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_STARSHIP_ID)
                            .from(Favorite::Table, Favorite::FavoriteStarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, target) in unique_targets() {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorite::Table)
                        .col(Favorite::UserId)
                        .col(target)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in unique_targets() {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Favorite::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// A user may favorite each person, planet and starship at most once.
fn unique_targets() -> [(&'static str, Favorite); 3] {
    [
        (IDX_FAVORITE_USER_PERSON, Favorite::FavoritePersonId),
        (IDX_FAVORITE_USER_PLANET, Favorite::FavoritePlanetId),
        (IDX_FAVORITE_USER_STARSHIP, Favorite::FavoriteStarshipId),
    ]
}

#[derive(DeriveIden, Clone, Copy)]
enum Favorite {
    Table,
    Id,
    UserId,
    #[sea_orm(iden = "favoriteStarshipId")]
    FavoriteStarshipId,
    #[sea_orm(iden = "favoritePersonId")]
    FavoritePersonId,
    #[sea_orm(iden = "favoritePlanetId")]
    FavoritePlanetId,
}
