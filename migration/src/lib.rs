pub use sea_orm_migration::prelude::*;

mod m20230913_000001_create_user_table;
mod m20230913_000002_create_people_table;
mod m20230913_000003_create_planets_table;
mod m20230913_000004_create_starship_table;
mod m20230913_000005_create_favorite_table;
mod m20230913_000006_extend_user_table;


pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230913_000001_create_user_table::Migration),
            Box::new(m20230913_000002_create_people_table::Migration),
            Box::new(m20230913_000003_create_planets_table::Migration),
            Box::new(m20230913_000004_create_starship_table::Migration),
            Box::new(m20230913_000005_create_favorite_table::Migration),
            Box::new(m20230913_000006_extend_user_table::Migration),
        ]
    }
}
