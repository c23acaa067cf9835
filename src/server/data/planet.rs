use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::planet::CreatePlanetDto;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: CreatePlanetDto) -> Result<entity::planets::Model, DbErr> {
        let planet = entity::planets::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            population: ActiveValue::Set(planet.population),
            diameter: ActiveValue::Set(planet.diameter),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planets::Model>, DbErr> {
        entity::prelude::Planets::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planets::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
