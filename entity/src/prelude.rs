pub use super::favorite::Entity as Favorite;
pub use super::people::Entity as People;
pub use super::planets::Entity as Planets;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
