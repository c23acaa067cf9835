//! Holonet: a REST API for Star Wars characters, planets, starships and the
//! favorites users keep of them.

pub mod model;
pub mod server;
