use sea_orm::entity::prelude::*;

/// Link between a user and exactly one favorited person, planet or starship.
///
/// Only one of the three target columns is set per row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_name = "favoritePersonId", nullable)]
    pub favorite_person_id: Option<i32>,
    #[sea_orm(column_name = "favoritePlanetId", nullable)]
    pub favorite_planet_id: Option<i32>,
    #[sea_orm(column_name = "favoriteStarshipId", nullable)]
    pub favorite_starship_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::FavoritePersonId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::FavoritePlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planets,
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::FavoriteStarshipId",
        to = "super::starship::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Starship,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
