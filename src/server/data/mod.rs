//! Data access layer repositories.
//!
//! Each repository borrows a connection handle and maps one method to one query or
//! mutation against its table. Repositories return SeaORM models and [`sea_orm::DbErr`];
//! turning those into API responses is left to the service and controller layers.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod starship;
pub mod user;
