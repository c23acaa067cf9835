use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory, fixtures::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the email `{username}@holonet.test`.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(0, username);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(user.email),
            username: ActiveValue::Set(user.username),
            password: ActiveValue::Set(user.password),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
