//! Favorite service layer.
//!
//! Links users to the people, planets and starships they favorited. Listing & adding
//! favorites first check that the user exists; adding also checks the target record. Duplicate
//! favorites are rejected by the favorite table's unique indexes rather than a prior lookup,
//! so concurrent requests for the same favorite yield a single row.


use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
            starship::StarshipRepository, user::UserRepository,
        },
        error::{
            api::{conflict_on_unique, ApiError},
            Error,
        },
        model::{db::FavoriteModel, favorite::FavoriteTarget},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the favorites of a user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, empty if they have none
    /// - `Err(Error::ApiError)` - User not found
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        self.ensure_user_exists(user_id).await?;

        let favorites = favorite_repo.get_many_by_user_id(user_id).await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Adds a person, planet or starship to the favorites of a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite entry
    /// - `Err(Error::ApiError)` - User or target not found, or target already favorited
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        self.ensure_user_exists(user_id).await?;

        if !self.target_exists(target).await? {
            return Err(ApiError::not_found(target.not_found_message()).into());
        }

        let favorite = favorite_repo
            .create(user_id, target)
            .await
            .map_err(|err| conflict_on_unique(err, &target.duplicate_message()))?;

        tracing::debug!("Added {:?} to favorites of user ID {}", target, user_id);

        Ok(favorite.into())
    }

    /// Removes a person, planet or starship from the favorites of a user.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(Error::ApiError)` - The target is not a favorite of the user, including when the
    ///   user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .get_by_target(user_id, target)
            .await?
            .ok_or_else(|| ApiError::not_found("Favorite not found"))?;

        favorite_repo.delete(favorite.id).await?;

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found("User not found").into()),
        }
    }

    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, Error> {
        let exists = match target {
            FavoriteTarget::Person(id) => {
                PeopleRepository::new(self.db).get_by_id(id).await?.is_some()
            }
            FavoriteTarget::Planet(id) => {
                PlanetRepository::new(self.db).get_by_id(id).await?.is_some()
            }
            FavoriteTarget::Starship(id) => {
                StarshipRepository::new(self.db).get_by_id(id).await?.is_some()
            }
        };

        Ok(exists)
    }
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            favorite_person_id: favorite.favorite_person_id,
            favorite_planet_id: favorite.favorite_planet_id,
            favorite_starship_id: favorite.favorite_starship_id,
        }
    }
}
