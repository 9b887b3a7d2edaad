use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderName, HeaderValue, Method};
use job_applicants::config::CorsOrigins;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) docs: Arc<ApiDocs>,
    pub(crate) service_version: Arc<str>,
}

/// OpenAPI document read once at startup. A missing file leaves the docs endpoints degraded.
#[derive(Debug, Clone, Default)]
pub(crate) struct ApiDocs {
    document: Option<Bytes>,
}

impl ApiDocs {
    pub(crate) fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(document) => {
                info!(path = %path.display(), "loaded swagger specification");
                Self {
                    document: Some(Bytes::from(document)),
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load swagger spec");
                Self::default()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(document: Bytes) -> Self {
        Self {
            document: Some(document),
        }
    }

    pub(crate) fn document(&self) -> Option<Bytes> {
        self.document.clone()
    }
}

pub(crate) fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect::<Vec<_>>(),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(CORS_MAX_AGE)
}
