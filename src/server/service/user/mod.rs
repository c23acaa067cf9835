//! User service layer.
//!
//! Account management for holonet users: listing, creation, partial updates and deletion.
//! Passwords are stored as provided and never leave the service in a DTO.


use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{api::conflict_on_unique, Error},
        model::db::UserModel,
    },
};

const DUPLICATE_USER: &str = "A user with that email or username already exists";

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by ID, an empty table yields an empty list.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Creates a new user and returns the persisted record.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user including its ID
    /// - `Err(Error::ApiError)` - Email or username is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .create(user)
            .await
            .map_err(|err| conflict_on_unique(err, DUPLICATE_USER))?;

        tracing::debug!("Created user ID {}", user.id);

        Ok(user.into())
    }

    /// Applies a partial update to a user.
    ///
    /// Only the fields present in `changes` are modified.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The user after the update
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::ApiError)` - The new email or username is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_user(
        &self,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .update(user_id, changes)
            .await
            .map_err(|err| conflict_on_unique(err, DUPLICATE_USER))?;

        Ok(user.map(UserDto::from))
    }

    /// Deletes a user along with their favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - User did not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        let result = user_repo.delete(user_id).await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}
