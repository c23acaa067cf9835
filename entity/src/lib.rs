//! SeaORM entities for the holonet schema.

pub mod prelude;

pub mod favorite;
pub mod people;
pub mod planets;
pub mod starship;
pub mod user;
