//! People service layer.
//!
//! Catalog of characters that users can add to their favorites.


use sea_orm::DatabaseConnection;

use crate::{
    model::people::{CreatePeopleDto, PeopleDto},
    server::{data::people::PeopleRepository, error::Error, model::db::PeopleModel},
};

/// Service for the character catalog.
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    /// Creates a new instance of PeopleService
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all people ordered by ID
    pub async fn get_all_people(&self) -> Result<Vec<PeopleDto>, Error> {
        let people_repo = PeopleRepository::new(self.db);

        let people = people_repo.get_all().await?;

        Ok(people.into_iter().map(PeopleDto::from).collect())
    }

    pub async fn get_person(&self, person_id: i32) -> Result<Option<PeopleDto>, Error> {
        let people_repo = PeopleRepository::new(self.db);

        Ok(people_repo.get_by_id(person_id).await?.map(PeopleDto::from))
    }

    /// Creates a new person and returns the persisted record including its ID
    pub async fn create_person(&self, person: CreatePeopleDto) -> Result<PeopleDto, Error> {
        let people_repo = PeopleRepository::new(self.db);

        let person = people_repo.create(person).await?;

        tracing::debug!("Created person ID {}", person.id);

        Ok(person.into())
    }

    /// Deletes a person, returning `false` if it did not exist
    pub async fn delete_person(&self, person_id: i32) -> Result<bool, Error> {
        let people_repo = PeopleRepository::new(self.db);

        let result = people_repo.delete(person_id).await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<PeopleModel> for PeopleDto {
    fn from(person: PeopleModel) -> Self {
        Self {
            id: person.id,
            name: person.name,
            mass: person.mass,
            hair_color: person.hair_color,
            birth_year: person.birth_year,
            gender: person.gender,
        }
    }
}
