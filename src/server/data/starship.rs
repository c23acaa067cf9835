use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::starship::CreateStarshipDto;

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        starship: CreateStarshipDto,
    ) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(starship.name),
            model: ActiveValue::Set(starship.model),
            passengers: ActiveValue::Set(starship.passengers),
            length: ActiveValue::Set(starship.length),
            max_atmosphering_speed: ActiveValue::Set(starship.max_atmosphering_speed),
            cargo_capacity: ActiveValue::Set(starship.cargo_capacity),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        starship_id: i32,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id)
            .exec(self.db)
            .await
    }
}
