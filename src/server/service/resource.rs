//! CRUD over any [`Resource`] with JSON bodies.
//!
//! Create and patch take raw JSON so a single handler serves every table: create
//! decodes the body into the entity model with the id forced to a placeholder, patch
//! merges the body over the stored row before decoding. Decoding failures (missing
//! required fields, wrong types) are client errors.

use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde_json::{Map, Value};

use crate::server::{
    data::resource::ResourceRepository, error::AppError, model::resource::Resource,
};

pub struct ResourceService<'a, R> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    pub async fn find(&self, limit: Option<u64>, skip: Option<u64>) -> Result<Vec<R::Model>, AppError> {
        Ok(ResourceRepository::<R>::new(self.db).find(limit, skip).await?)
    }

    /// Gets a row by id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The row
    /// - `Err(AppError::NotFound)` - No row with that id
    pub async fn get(&self, id: i32) -> Result<R::Model, AppError> {
        ResourceRepository::<R>::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| not_found::<R>())
    }

    /// Inserts a row from a JSON object. Any `id` in the body is ignored.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row with its generated id
    /// - `Err(AppError::BadRequest)` - Body is not an object, misses a required field or
    ///   references a missing row
    /// - `Err(AppError::Conflict)` - A unique column already holds the value
    pub async fn create(&self, body: Value) -> Result<R::Model, AppError> {
        let mut fields = into_object::<R>(body)?;
        fields.insert("id".to_string(), Value::from(0));

        let model = decode::<R>(fields)?;

        ResourceRepository::<R>::new(self.db)
            .insert(model)
            .await
            .map_err(write_error::<R>)
    }

    /// Merges the fields of a JSON object over the stored row.
    ///
    /// The id cannot be changed. Fields set to `null` clear optional columns.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated row
    /// - `Err(AppError::NotFound)` - No row with that id
    /// - `Err(AppError::BadRequest)` / `Err(AppError::Conflict)` - As for `create`
    pub async fn patch(&self, id: i32, body: Value) -> Result<R::Model, AppError> {
        let patch = into_object::<R>(body)?;
        let existing = self.get(id).await?;

        let Value::Object(mut fields) = serde_json::to_value(&existing)
            .map_err(|e| AppError::InternalError(format!("Failed to encode {}: {}", R::NAME, e)))?
        else {
            return Err(AppError::InternalError(format!(
                "{} did not encode as an object",
                R::NAME
            )));
        };

        for (key, value) in patch {
            if key != "id" {
                fields.insert(key, value);
            }
        }

        let model = decode::<R>(fields)?;

        ResourceRepository::<R>::new(self.db)
            .update(model)
            .await
            .map_err(write_error::<R>)
    }

    /// Deletes a row and returns it.
    ///
    /// # Returns
    /// - `Ok(Model)` - The deleted row
    /// - `Err(AppError::NotFound)` - No row with that id
    pub async fn remove(&self, id: i32) -> Result<R::Model, AppError> {
        let existing = self.get(id).await?;

        let deleted = ResourceRepository::<R>::new(self.db)
            .delete(id)
            .await
            .map_err(write_error::<R>)?;

        if !deleted {
            return Err(not_found::<R>());
        }

        Ok(existing)
    }
}

fn not_found<R: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", R::NAME))
}

fn into_object<R: Resource>(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::BadRequest(format!(
            "{} body must be a JSON object",
            R::NAME
        ))),
    }
}

fn decode<R: Resource>(fields: Map<String, Value>) -> Result<R::Model, AppError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(format!("Invalid {}: {}", R::NAME, e)))
}

fn write_error<R: Resource>(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("{} already exists", R::NAME))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::BadRequest(format!(
            "{} references a row that does not exist",
            R::NAME
        )),
        _ => match err {
            DbErr::RecordNotUpdated => not_found::<R>(),
            err => err.into(),
        },
    }
}
