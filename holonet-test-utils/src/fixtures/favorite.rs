use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_person_favorite(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_person_id: ActiveValue::Set(Some(person_id)),
            ..Default::default()
        })
        .await
    }

    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_planet_id: ActiveValue::Set(Some(planet_id)),
            ..Default::default()
        })
        .await
    }

    pub async fn insert_starship_favorite(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_starship_id: ActiveValue::Set(Some(starship_id)),
            ..Default::default()
        })
        .await
    }

    async fn insert(
        &self,
        favorite: entity::favorite::ActiveModel,
    ) -> Result<FavoriteModel, TestError> {
        Ok(entity::prelude::Favorite::insert(favorite)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
