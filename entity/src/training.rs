use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub creator_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(has_one = "super::scheduler::Entity")]
    Scheduler,
    #[sea_orm(has_many = "super::training_participation::Entity")]
    TrainingParticipation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::scheduler::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scheduler.def()
    }
}

impl Related<super::training_participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingParticipation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
