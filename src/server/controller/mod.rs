//! HTTP controller endpoints for the Holonet web API.
//!
//! This module contains Axum handlers for users, the people, planets & starships catalog,
//! and user favorites. Controllers extract path parameters & JSON bodies, call the matching
//! service, and map missing records to 404 responses. Every handler is annotated with
//! utoipa for the OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod starship;
pub mod user;
