//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, schema, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_holonet_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    people: Vec<String>,
    planets: Vec<String>,
    starships: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_holonet_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
            starships: Vec::new(),
        }
    }

    /// Add every holonet table to the test database.
    ///
    /// Creates the user, people, planets, starship and favorite tables along with the
    /// unique indexes of the favorite table.
    pub fn with_tables(mut self) -> Self {
        self.include_holonet_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(People)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock user with the provided username into database.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert mock person with the provided name into database.
    pub fn with_mock_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert mock planet with the provided name into database.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert mock starship with the provided name into database.
    pub fn with_mock_starship(mut self, name: impl Into<String>) -> Self {
        self.starships.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (holonet tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, people, planets, starships)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_holonet_tables {
            all_tables.extend(schema::tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_holonet_tables {
            setup.with_indexes(schema::favorite_indexes()).await?;
        }

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for name in self.people {
            setup.catalog().insert_person(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        for name in self.starships {
            setup.catalog().insert_starship(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
