use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tv_shows")]
pub struct Model {
    /// Catalog identifier supplied by the caller, never auto-generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub show_id: i32,
    #[sea_orm(column_name = "type")]
    pub show_type: String,
    pub genre: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub release_year: i32,
    pub rating: String,
    pub duration: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
