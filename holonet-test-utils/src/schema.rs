//! Schema statements for the holonet tables.
//!
//! Tables are generated from the SeaORM entities. The unique indexes of the favorite
//! table are not part of the entity definitions and are declared here to match the
//! `migration` crate.

use entity::favorite::Column as FavoriteColumn;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, Schema,
};

/// CREATE TABLE statements for every holonet table.
pub fn tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::People),
        schema.create_table_from_entity(entity::prelude::Planets),
        schema.create_table_from_entity(entity::prelude::Starship),
        schema.create_table_from_entity(entity::prelude::Favorite),
    ]
}

/// Unique indexes preventing a user from favoriting the same target twice.
pub fn favorite_indexes() -> Vec<IndexCreateStatement> {
    [
        ("idx_favorite_user_person", FavoriteColumn::FavoritePersonId),
        ("idx_favorite_user_planet", FavoriteColumn::FavoritePlanetId),
        ("idx_favorite_user_starship", FavoriteColumn::FavoriteStarshipId),
    ]
    .into_iter()
    .map(|(name, target)| {
        Index::create()
            .name(name)
            .table(entity::prelude::Favorite)
            .col(FavoriteColumn::UserId)
            .col(target)
            .unique()
            .to_owned()
    })
    .collect()
}
