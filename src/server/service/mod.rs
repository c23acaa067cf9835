//! Service layer for business logic.
//!
//! Services wrap the repositories of the data layer, convert database models into the
//! DTOs returned by the API, and turn missing records & duplicate entries into typed
//! API errors.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod starship;
pub mod user;
