use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub birth_year: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub mass: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
