use sea_orm::entity::prelude::*;

/// Application account. Local accounts carry a bcrypt `password_hash`, Google accounts
/// carry `google_sub`; an account may have both once linked by verified email.
///
/// Not serializable: API responses go through `UserDto`, which never exposes the hash.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    /// `admin` or `user`.
    pub role: String,
    #[sea_orm(unique)]
    pub google_sub: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::password_reset::Entity")]
    PasswordReset,
}

impl Related<super::password_reset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PasswordReset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
