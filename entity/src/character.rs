use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub class_type: Option<String>,
    pub stats_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stat::Entity",
        from = "Column::StatsId",
        to = "super::stat::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Stat,
}

impl Related<super::stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
