//! Record sources: the API-Football HTTP API and exported JSON files.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::server::error::{import::ImportError, AppError};

/// Header carrying the API-Football key.
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Response envelope of every API-Football endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    errors: Value,
    paging: Option<Paging>,
    #[serde(default)]
    response: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Paging {
    current: u32,
    total: u32,
}

/// Minimal API-Football client: authenticated GETs with paging, no retry.
pub struct ApiFootballClient<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a> ApiFootballClient<'a> {
    pub fn new(http: &'a reqwest::Client, base_url: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/'),
            api_key,
        }
    }

    /// Fetches every page of `endpoint` and returns the concatenated `response` arrays.
    ///
    /// # Arguments
    /// - `endpoint` - Path below the base URL, e.g. `/fixtures`
    /// - `query` - Query parameters; `page` is added for pages after the first
    ///
    /// Paging stops once the reported page reaches the total, or when the reported
    /// page does not advance past the one requested.
    ///
    /// # Returns
    /// - `Ok(Vec<Value>)` - Records of all pages in order
    /// - `Err(ImportError::UpstreamStatus)` - Non-success HTTP status
    /// - `Err(ImportError::Upstream)` - Transport failure or non-empty `errors` field
    pub async fn get_all(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let mut params = query.to_vec();
            if page > 1 {
                params.push(("page", page.to_string()));
            }

            let response = self
                .http
                .get(&url)
                .header(API_KEY_HEADER, self.api_key)
                .query(&params)
                .send()
                .await
                .map_err(|err| upstream(endpoint, err))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ImportError::UpstreamStatus {
                    endpoint: endpoint.to_string(),
                    status: status.as_u16(),
                }
                .into());
            }

            let envelope: Envelope = response.json().await.map_err(|err| upstream(endpoint, err))?;

            match read_envelope(endpoint, envelope, &mut records)? {
                Some(paging) if paging.current < paging.total && paging.current >= page => {
                    page = paging.current + 1
                }
                Some(paging) if paging.current < paging.total => {
                    tracing::warn!(
                        "Stopped paging {} at page {}: upstream reported page {} of {}",
                        endpoint,
                        page,
                        paging.current,
                        paging.total
                    );
                    break;
                }
                _ => break,
            }
        }

        tracing::debug!("Fetched {} records from {}", records.len(), endpoint);

        Ok(records)
    }
}

fn upstream(endpoint: &str, err: reqwest::Error) -> ImportError {
    ImportError::Upstream {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

/// Appends the records of `envelope`, returning its paging block.
fn read_envelope(
    endpoint: &str,
    envelope: Envelope,
    records: &mut Vec<Value>,
) -> Result<Option<Paging>, ImportError> {
    if has_errors(&envelope.errors) {
        return Err(ImportError::Upstream {
            endpoint: endpoint.to_string(),
            message: envelope.errors.to_string(),
        });
    }

    records.extend(envelope.response);

    Ok(envelope.paging)
}

/// The provider reports errors as an empty array when there are none and as an
/// object keyed by parameter otherwise.
fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::String(message) => !message.is_empty(),
        _ => true,
    }
}

/// Contents of an exported file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportFile {
    Envelope { response: Vec<Value> },
    Records(Vec<Value>),
}

/// Reads every `*.json` file of `files_dir/area` in name order.
///
/// Each file is either a provider envelope or a bare array of records.
///
/// # Returns
/// - `Ok(Vec<Value>)` - Records of all files in order
/// - `Err(ImportError::File)` - Directory or file could not be read
/// - `Err(ImportError::FileFormat)` - A file is neither shape
pub async fn load_area(files_dir: &Path, area: &str) -> Result<Vec<Value>, ImportError> {
    let dir = files_dir.join(area);

    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .map_err(|source| ImportError::File {
            path: dir.clone(),
            source,
        })?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| ImportError::File {
            path: dir.clone(),
            source,
        })?
    {
        let path = entry.path();
        if path.extension().is_some_and(|extension| extension == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ImportError::File {
                path: path.clone(),
                source,
            })?;

        let file: ExportFile =
            serde_json::from_slice(&bytes).map_err(|source| ImportError::FileFormat {
                path: path.clone(),
                source,
            })?;

        match file {
            ExportFile::Envelope { response } => records.extend(response),
            ExportFile::Records(items) => records.extend(items),
        }
    }

    tracing::debug!("Loaded {} records from {}", records.len(), dir.display());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicU32, Ordering},
            Arc,
        },
    };

    use axum::{extract::Query, http::HeaderMap, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}", addr)
    }

    /// Three pages of one record each; rejects requests without the expected key.
    async fn three_pages(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        if headers.get(API_KEY_HEADER).and_then(|key| key.to_str().ok()) != Some("secret") {
            return Json(json!({
                "errors": {"token": "Error/Missing application key."},
                "response": []
            }));
        }
        let page: u32 = params
            .get("page")
            .and_then(|page| page.parse().ok())
            .unwrap_or(1);

        Json(json!({
            "errors": [],
            "paging": {"current": page, "total": 3},
            "response": [{"page": page, "league": params.get("league")}]
        }))
    }

    /// Tests that every page is fetched in order with the key header and the caller's
    /// query, and that the first page is requested without a `page` parameter.
    ///
    /// Expected: records of pages 1, 2 and 3, each carrying the league
    #[tokio::test]
    async fn fetches_all_pages() {
        let base = serve(Router::new().route("/fixtures", get(three_pages))).await;
        let http = reqwest::Client::new();
        let client = ApiFootballClient::new(&http, &base, "secret");

        let records = client
            .get_all("/fixtures", &[("league", "39".to_string())])
            .await
            .unwrap();

        let pages: Vec<i64> = records.iter().map(|r| r["page"].as_i64().unwrap()).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r["league"] == "39"));
    }

    /// Tests that a request with the wrong key surfaces the provider's `errors` field.
    ///
    /// Expected: Err(Upstream) naming the endpoint
    #[tokio::test]
    async fn reports_rejected_api_key() {
        let base = serve(Router::new().route("/fixtures", get(three_pages))).await;
        let http = reqwest::Client::new();
        let client = ApiFootballClient::new(&http, &base, "wrong");

        let result = client.get_all("/fixtures", &[]).await;

        assert!(matches!(
            result,
            Err(AppError::ImportErr(ImportError::Upstream { endpoint, .. })) if endpoint == "/fixtures"
        ));
    }

    /// Tests that paging stops when the provider keeps reporting the same page.
    ///
    /// Expected: two requests, two records, no error
    #[tokio::test]
    async fn stops_when_page_does_not_advance() {
        let hits = Arc::new(AtomicU32::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/players",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({
                        "errors": [],
                        "paging": {"current": 1, "total": 5},
                        "response": [{"id": 1}]
                    }))
                }
            }),
        );
        let base = serve(router).await;
        let http = reqwest::Client::new();
        let client = ApiFootballClient::new(&http, &base, "secret");

        let records = client.get_all("/players", &[]).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    /// Tests that a non-success status is reported with the status code.
    ///
    /// Expected: Err(UpstreamStatus) with status 500
    #[tokio::test]
    async fn reports_non_success_status() {
        let router = Router::new().route(
            "/teams",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let http = reqwest::Client::new();
        let client = ApiFootballClient::new(&http, &base, "secret");

        let result = client.get_all("/teams", &[]).await;

        assert!(matches!(
            result,
            Err(AppError::ImportErr(ImportError::UpstreamStatus { status: 500, .. }))
        ));
    }

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    /// Tests that an empty `errors` array is not treated as an error.
    ///
    /// Expected: records appended and paging returned
    #[test]
    fn reads_records_and_paging() {
        let mut records = Vec::new();
        let paging = read_envelope(
            "/players",
            envelope(json!({
                "errors": [],
                "paging": {"current": 1, "total": 3},
                "response": [{"id": 1}, {"id": 2}]
            })),
            &mut records,
        )
        .unwrap()
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(paging.current, 1);
        assert_eq!(paging.total, 3);
    }

    /// Tests that a non-empty `errors` object is an upstream error.
    ///
    /// Expected: Err(Upstream) naming the endpoint
    #[test]
    fn rejects_non_empty_errors() {
        let mut records = Vec::new();
        let result = read_envelope(
            "/fixtures",
            envelope(json!({
                "errors": {"token": "Error/Missing application key."},
                "response": []
            })),
            &mut records,
        );

        assert!(matches!(
            result,
            Err(ImportError::Upstream { endpoint, .. }) if endpoint == "/fixtures"
        ));
    }

    /// Tests that files are read in name order, in both supported shapes, and that
    /// non-JSON files are ignored.
    ///
    /// Expected: records of `a.json` then `b.json`
    #[tokio::test]
    async fn loads_area_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let area = dir.path().join("fixtures");
        std::fs::create_dir(&area).unwrap();
        std::fs::write(area.join("b.json"), r#"[{"n": 3}]"#).unwrap();
        std::fs::write(
            area.join("a.json"),
            r#"{"response": [{"n": 1}, {"n": 2}]}"#,
        )
        .unwrap();
        std::fs::write(area.join("notes.txt"), "ignored").unwrap();

        let records = load_area(dir.path(), "fixtures").await.unwrap();

        let order: Vec<i64> = records.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    /// Tests that a malformed file is reported with its path.
    ///
    /// Expected: Err(FileFormat)
    #[tokio::test]
    async fn rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let area = dir.path().join("odds");
        std::fs::create_dir(&area).unwrap();
        std::fs::write(area.join("broken.json"), r#"{"response": 5}"#).unwrap();

        let result = load_area(dir.path(), "odds").await;

        assert!(matches!(result, Err(ImportError::FileFormat { .. })));
    }

    /// Tests that a missing area directory is a file error.
    ///
    /// Expected: Err(File)
    #[tokio::test]
    async fn missing_area_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_area(dir.path(), "transfers").await;

        assert!(matches!(result, Err(ImportError::File { .. })));
    }
}
