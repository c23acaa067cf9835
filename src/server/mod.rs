//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holonet application: HTTP
//! routing, configuration, the repository & service layers over the database, and error
//! rendering. It provides the backend for managing users, the people, planets & starships
//! catalog, and the favorites linking the two.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
