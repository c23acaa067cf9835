//! Server application models and type definitions.
//!
//! This module contains the application state shared with HTTP handlers, database model
//! type aliases, and the favorite target type used by the favorites repository and service.

pub mod app;
pub mod db;
pub mod favorite;
