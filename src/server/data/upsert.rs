//! Insert-or-update keyed by arbitrary columns.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, IdenStatic, IntoActiveModel, Iterable, PrimaryKeyToColumn, QueryFilter,
};

use crate::server::model::import::UpsertOutcome;

/// Inserts `model` or updates the row matching it on `key`.
///
/// Builds an equality condition from the values of the `key` columns in `model`, looks
/// the row up and either inserts `model` or copies its set columns onto the existing
/// row. The primary key of an existing row is never changed.
///
/// # Arguments
/// - `conn` - Connection or transaction to run on
/// - `key` - Columns identifying the row; each must be set to a non-null value in `model`
/// - `model` - Active model with the columns to write
///
/// # Returns
/// - `Ok((UpsertOutcome, Model))` - Whether a row was created or updated, and the row
/// - `Err(DbErr::Custom)` - A key column is not set or null in `model`
/// - `Err(DbErr)` - Database error during select, insert or update
pub async fn upsert_by_key<E, C>(
    conn: &C,
    key: &[E::Column],
    model: E::ActiveModel,
) -> Result<(UpsertOutcome, E::Model), DbErr>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let mut condition = Condition::all();
    for column in key {
        match model.get(*column) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value)
                if value == value.as_null() =>
            {
                return Err(DbErr::Custom(format!(
                    "upsert key column {} is null",
                    column.as_str()
                )));
            }
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => {
                condition = condition.add(column.eq(value));
            }
            ActiveValue::NotSet => {
                return Err(DbErr::Custom(format!(
                    "upsert key column {} is not set",
                    column.as_str()
                )));
            }
        }
    }

    let Some(existing) = E::find().filter(condition).one(conn).await? else {
        let created = model.insert(conn).await?;
        return Ok((UpsertOutcome::Created, created));
    };

    let primary_key: Vec<E::Column> = E::PrimaryKey::iter()
        .map(|pk| pk.into_column())
        .collect();

    let mut current = existing.into_active_model();
    for column in E::Column::iter() {
        if primary_key
            .iter()
            .any(|pk| pk.as_str() == column.as_str())
        {
            continue;
        }
        if let ActiveValue::Set(value) = model.get(column) {
            current.set(column, value);
        }
    }

    let updated = current.update(conn).await?;

    Ok((UpsertOutcome::Updated, updated))
}
