//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models generated in the `entity` crate.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `username` - Unique username
/// - `password` - Stored as provided, never serialized in responses
pub type UserModel = entity::user::Model;

/// Type alias for person (character) database model.
pub type PeopleModel = entity::people::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for starship database model.
pub type StarshipModel = entity::starship::Model;

/// Type alias for favorite database model.
///
/// Links a user to exactly one person, planet or starship; the two remaining
/// target columns are `None`.
pub type FavoriteModel = entity::favorite::Model;
