//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod starship;
pub mod user;
