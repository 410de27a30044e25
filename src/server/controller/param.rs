use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::import::{ImportRequest, ImportSource};

/// `?limit=&skip=` query of the list endpoints.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Maximum number of rows; all rows when omitted.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub skip: Option<u64>,
}

/// `?source=&league=&season=` query of the refresh endpoints.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct RefreshParam {
    /// `api` or `file`; defaults to the configured `IMPORT_SOURCE`.
    #[param(value_type = Option<String>)]
    pub source: Option<ImportSource>,
    /// Provider league id; defaults to `IMPORT_LEAGUES`.
    pub league: Option<i64>,
    /// Season year; defaults to `IMPORT_SEASON`.
    pub season: Option<i32>,
}

impl RefreshParam {
    pub fn into_request(self, default_source: ImportSource) -> ImportRequest {
        ImportRequest {
            source: self.source.unwrap_or(default_source),
            league: self.league,
            season: self.season,
        }
    }
}
