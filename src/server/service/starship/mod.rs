
use sea_orm::DatabaseConnection;

use crate::{
    model::starship::{CreateStarshipDto, StarshipDto},
    server::{data::starship::StarshipRepository, error::Error, model::db::StarshipModel},
};

/// Service for the starship catalog.
pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    /// Creates a new instance of StarshipService
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all starships ordered by ID
    pub async fn get_all_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        let starships = starship_repo.get_all().await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }

    pub async fn get_starship(&self, starship_id: i32) -> Result<Option<StarshipDto>, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        Ok(starship_repo.get_by_id(starship_id).await?.map(StarshipDto::from))
    }

    /// Creates a new starship and returns the persisted record including its ID
    pub async fn create_starship(&self, starship: CreateStarshipDto) -> Result<StarshipDto, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        let starship = starship_repo.create(starship).await?;

        tracing::debug!("Created starship ID {}", starship.id);

        Ok(starship.into())
    }

    /// Deletes a starship, returning `false` if it did not exist
    pub async fn delete_starship(&self, starship_id: i32) -> Result<bool, Error> {
        let starship_repo = StarshipRepository::new(self.db);

        let result = starship_repo.delete(starship_id).await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<StarshipModel> for StarshipDto {
    fn from(starship: StarshipModel) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            passengers: starship.passengers,
            length: starship.length,
            max_atmosphering_speed: starship.max_atmosphering_speed,
            cargo_capacity: starship.cargo_capacity,
        }
    }
}
