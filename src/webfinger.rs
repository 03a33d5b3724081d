use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::Error,
    filter,
    jrd::Jrd,
    query::Params,
    resolver::Resolver,
};

pub const WEBFINGER_PATH: &str = "/.well-known/webfinger";

fn track_request(method: &'static str, controller: &'static str, result: &'static str) {
    metrics::counter!("api_http_requests_total", "controller" => controller, "method" => method, "result" => result)
        .increment(1);
}

/// Only the well-known path is served.
pub fn check_path(path: &str) -> Result<(), Error> {
    if path == WEBFINGER_PATH {
        Ok(())
    } else {
        Err(Error::RouteNotMatched)
    }
}

/// `resource` must be present and non-empty.
pub fn check_resource(resource: Option<&str>) -> Result<&str, Error> {
    match resource {
        Some(resource) if !resource.is_empty() =>
            Ok(resource),
        _ =>
            Err(Error::MissingParameter),
    }
}

/// Answers WebFinger queries from a [`Resolver`].
///
/// Cheap to clone; clones share the resolver.
#[derive(Clone)]
pub struct Webfinger {
    resolver: Arc<dyn Resolver>,
}

impl Webfinger {
    pub fn new<R: Resolver>(resolver: R) -> Self {
        Webfinger {
            resolver: Arc::new(resolver),
        }
    }

    /// Runs one request through validation, lookup and rel filtering.
    ///
    /// `query` is the raw, still encoded query string.
    pub async fn respond(&self, path: &str, query: Option<&str>) -> Result<Jrd, Error> {
        if let Err(e) = check_path(path) {
            tracing::debug!("no route for {}", path);
            track_request("GET", "webfinger", "no_route");
            return Err(e);
        }

        let params = Params::parse(query);
        let resource = match check_resource(params.get("resource")) {
            Ok(resource) => resource,
            Err(e) => {
                tracing::debug!("webfinger query without resource");
                track_request("GET", "webfinger", "invalid");
                return Err(e);
            }
        };
        let rels = params.get_all("rel");

        let descriptor = match self.resolver.resolve(resource, &rels).await {
            Some(descriptor) => descriptor,
            None => {
                tracing::debug!("webfinger {}: not found", resource);
                track_request("GET", "webfinger", "not_found");
                return Err(Error::ResourceNotFound);
            }
        };

        let mut jrd = Jrd::new(resource, descriptor);
        jrd.links = filter::by_rel(jrd.links, &rels);
        tracing::debug!("webfinger {}: {} links for rels {:?}", resource, jrd.links.len(), rels);
        track_request("GET", "webfinger", "found");
        Ok(jrd)
    }

    /// Router serving [`WEBFINGER_PATH`]. Every other path answers 404.
    pub fn router(self) -> Router {
        Router::new()
            .route(WEBFINGER_PATH, get(webfinger).fallback(method_not_allowed))
            .fallback(webfinger)
            .with_state(self)
    }

    /// [`router`](Self::router), adding `Access-Control-Allow-Origin: *`
    /// (RFC 7033 section 5) to every response when `cors` is set.
    pub fn router_with(self, cors: bool) -> Router {
        let router = self.router();
        if cors {
            router.layer(CorsLayer::new().allow_origin(Any))
        } else {
            router
        }
    }
}

async fn webfinger(
    State(webfinger): State<Webfinger>,
    uri: Uri,
) -> Response {
    match webfinger.respond(uri.path(), uri.query()).await {
        Ok(jrd) => jrd.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn method_not_allowed() -> Response {
    track_request("OTHER", "webfinger", "method_not_allowed");
    Error::MethodNotAllowed.into_response()
}
