use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub passengers: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateStarshipDto {
    pub name: String,
    pub model: String,
    pub passengers: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: String,
}
