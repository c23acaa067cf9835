//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances with standard test values that don't require
//! database interaction. Fixtures use them as the base for inserted rows.

use crate::fixtures::{PeopleModel, PlanetModel, StarshipModel, UserModel};

/// Create a mock user model, the email is derived from the username.
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        email: format!("{}@holonet.test", username),
        username: username.to_string(),
        password: "password".to_string(),
    }
}

pub fn mock_person_model(id: i32, name: &str) -> PeopleModel {
    PeopleModel {
        id,
        name: name.to_string(),
        hair_color: Some("brown".to_string()),
        gender: Some("male".to_string()),
        birth_year: "19BBY".to_string(),
        mass: "77".to_string(),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        climate: "arid".to_string(),
        population: "200000".to_string(),
        diameter: "10465".to_string(),
    }
}

pub fn mock_starship_model(id: i32, name: &str) -> StarshipModel {
    StarshipModel {
        id,
        name: name.to_string(),
        model: "T-65 X-wing".to_string(),
        passengers: "0".to_string(),
        length: "12.5".to_string(),
        max_atmosphering_speed: "1050".to_string(),
        cargo_capacity: "110".to_string(),
    }
}
