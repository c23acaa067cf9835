use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    factory,
    fixtures::{PeopleModel, PlanetModel, StarshipModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_person(&self, name: &str) -> Result<PeopleModel, TestError> {
        let person = factory::mock_person_model(0, name);

        Ok(entity::prelude::People::insert(entity::people::ActiveModel {
            name: ActiveValue::Set(person.name),
            hair_color: ActiveValue::Set(person.hair_color),
            gender: ActiveValue::Set(person.gender),
            birth_year: ActiveValue::Set(person.birth_year),
            mass: ActiveValue::Set(person.mass),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet_model(0, name);

        Ok(entity::prelude::Planets::insert(entity::planets::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            population: ActiveValue::Set(planet.population),
            diameter: ActiveValue::Set(planet.diameter),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_starship(&self, name: &str) -> Result<StarshipModel, TestError> {
        let starship = factory::mock_starship_model(0, name);

        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(starship.name),
                model: ActiveValue::Set(starship.model),
                passengers: ActiveValue::Set(starship.passengers),
                length: ActiveValue::Set(starship.length),
                max_atmosphering_speed: ActiveValue::Set(starship.max_atmosphering_speed),
                cargo_capacity: ActiveValue::Set(starship.cargo_capacity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
