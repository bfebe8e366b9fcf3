use sea_orm::entity::prelude::*;

/// Weekly time-slot configuration of a training.
///
/// Every weekday column holds either `NULL` or a JSON time range of the form
/// `{"start_time": "HH:MM", "end_time": "HH:MM"}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduler")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub training_id: Uuid,
    pub monday: Option<Json>,
    pub tuesday: Option<Json>,
    pub wednesday: Option<Json>,
    pub thursday: Option<Json>,
    pub friday: Option<Json>,
    pub saturday: Option<Json>,
    pub sunday: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training::Entity",
        from = "Column::TrainingId",
        to = "super::training::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Training,
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
