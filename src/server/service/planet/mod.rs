#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{data::planet::PlanetRepository, error::Error, model::db::PlanetModel},
};

/// Service for the planet catalog.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all planets ordered by ID
    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        Ok(planet_repo.get_by_id(planet_id).await?.map(PlanetDto::from))
    }

    /// Creates a new planet and returns the persisted record including its ID
    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo.create(planet).await?;

        tracing::debug!("Created planet ID {}", planet.id);

        Ok(planet.into())
    }

    /// Deletes a planet, returning `false` if it did not exist
    pub async fn delete_planet(&self, planet_id: i32) -> Result<bool, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let result = planet_repo.delete(planet_id).await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            population: planet.population,
            diameter: planet.diameter,
        }
    }
}
