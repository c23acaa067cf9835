use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a favorite entry linking a user to the provided target
    ///
    /// Only the column matching the target is set. A second entry for the same user &
    /// target violates the favorite table's unique indexes and returns an error.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let mut favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        match target {
            FavoriteTarget::Person(id) => favorite.favorite_person_id = ActiveValue::Set(Some(id)),
            FavoriteTarget::Planet(id) => favorite.favorite_planet_id = ActiveValue::Set(Some(id)),
            FavoriteTarget::Starship(id) => {
                favorite.favorite_starship_id = ActiveValue::Set(Some(id))
            }
        }

        favorite.insert(self.db).await
    }

    /// Get the favorite entry of a user for the provided target
    pub async fn get_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target.column().eq(target.id()))
            .one(self.db)
            .await
    }

    /// Gets all favorite entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
