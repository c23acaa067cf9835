use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::people::CreatePeopleDto;

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, person: CreatePeopleDto) -> Result<entity::people::Model, DbErr> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(person.name),
            hair_color: ActiveValue::Set(person.hair_color),
            gender: ActiveValue::Set(person.gender),
            birth_year: ActiveValue::Set(person.birth_year),
            mass: ActiveValue::Set(person.mass),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Deletes a person, check [`DeleteResult::rows_affected`] to know whether it existed
    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::People::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}
