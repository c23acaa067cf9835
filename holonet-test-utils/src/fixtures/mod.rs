//! Test fixture modules for database record creation.
//!
//! Each submodule adds a fixture accessor to `TestContext`:
//!
//! - `user` - holonet user accounts
//! - `catalog` - people, planets and starships
//! - `favorite` - favorites linking users to catalog records

pub mod catalog;
pub mod favorite;
pub mod user;

pub type UserModel = entity::user::Model;
pub type PeopleModel = entity::people::Model;
pub type PlanetModel = entity::planets::Model;
pub type StarshipModel = entity::starship::Model;
pub type FavoriteModel = entity::favorite::Model;
