use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub mass: String,
    pub hair_color: Option<String>,
    pub birth_year: String,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePeopleDto {
    pub name: String,
    pub mass: String,
    #[serde(default)]
    pub hair_color: Option<String>,
    pub birth_year: String,
    #[serde(default)]
    pub gender: Option<String>,
}
