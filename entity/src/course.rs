use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub creator_id: Uuid,
    pub tg_group_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub last_updated_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::syllabus::Entity")]
    Syllabus,
    #[sea_orm(has_many = "super::course_participation::Entity")]
    CourseParticipation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::syllabus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Syllabus.def()
    }
}

impl Related<super::course_participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseParticipation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
