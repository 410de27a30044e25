//! Generic repository over every [`Resource`] table.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::resource::Resource;

/// CRUD on the table of resource `R`.
///
/// Works on decoded entity models; JSON merging and error mapping live in
/// `ResourceService`.
pub struct ResourceRepository<'a, R> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceRepository<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Lists rows ordered by id.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows; `None` for all
    /// - `skip` - Number of rows to skip; `None` for none
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching rows, ascending by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, limit: Option<u64>, skip: Option<u64>) -> Result<Vec<R::Model>, DbErr> {
        R::Entity::find()
            .order_by_asc(R::id_column())
            .limit(limit)
            .offset(skip)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(self.db)
            .await
    }

    /// Inserts `model`, letting the database assign the id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row with its generated id
    /// - `Err(DbErr)` - Constraint violation or other database error
    pub async fn insert(&self, model: R::Model) -> Result<R::Model, DbErr> {
        let mut active = model.into_active_model().reset_all();
        active.not_set(R::id_column());

        active.insert(self.db).await
    }

    /// Writes every column of `model` to the row with the same id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated row
    /// - `Err(DbErr::RecordNotUpdated)` - No row with that id
    /// - `Err(DbErr)` - Constraint violation or other database error
    pub async fn update(&self, model: R::Model) -> Result<R::Model, DbErr> {
        model.into_active_model().reset_all().update(self.db).await
    }

    /// Deletes the row with `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error, e.g. a restricting foreign key
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        R::Entity::find().count(self.db).await
    }
}
