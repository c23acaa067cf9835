use serde::{Deserialize, Serialize};

/// A favorite entry of a user, exactly one of the target IDs is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "favoritePersonId")]
    pub favorite_person_id: Option<i32>,
    #[serde(rename = "favoritePlanetId")]
    pub favorite_planet_id: Option<i32>,
    #[serde(rename = "favoriteStarshipId")]
    pub favorite_starship_id: Option<i32>,
}

/// The kind of record being favorited, as it appears in the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planets,
    Starships,
}
