use async_graphql::http::GraphiQLSource;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql::{BatchRequest, Request as GraphQLRequest};
use async_graphql_axum::GraphQLResponse;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::{BooklistError, Result};

use super::LibrarySchema;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct ServerState {
    schema: LibrarySchema,
    graphiql: bool,
}

/// Router serving the schema at [`GRAPHQL_PATH`].
pub fn router(schema: LibrarySchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { schema, graphiql })
}

pub async fn run_server(schema: LibrarySchema, settings: &ServerSettings) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

async fn graphql_get(State(state): State<ServerState>, RawQuery(raw): RawQuery) -> Response {
    let raw = raw.unwrap_or_default();
    if !has_query_param(&raw) {
        if state.graphiql {
            let page = GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish();
            return Html(page).into_response();
        }
        return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
    }

    let request = match async_graphql::http::parse_query_string(&raw) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    // Mutations change state, so they are only accepted over POST.
    if is_mutation(&request) {
        let mut response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
        return response;
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

async fn graphql_post(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match parse_post_body(&headers, &body) {
        Ok(batch) => GraphQLResponse::from(state.schema.execute_batch(batch).await).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected GraphQL request body");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

fn has_query_param(raw: &str) -> bool {
    url::form_urlencoded::parse(raw.as_bytes())
        .any(|(key, value)| key == "query" && !value.trim().is_empty())
}

/// Accepts `application/graphql` (the raw document) or JSON, single or batched.
fn parse_post_body(headers: &HeaderMap, body: &[u8]) -> Result<BatchRequest> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json");
    let mime = content_type.split(';').next().unwrap_or_default().trim();

    if mime.eq_ignore_ascii_case("application/graphql") {
        let query = std::str::from_utf8(body)
            .map_err(|e| BooklistError::Request(format!("body is not UTF-8: {}", e)))?;
        return Ok(BatchRequest::Single(GraphQLRequest::new(query)));
    }

    if body.is_empty() {
        return Err(BooklistError::Request("Must provide query string.".to_string()));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Whether the operation the request selects is a mutation. Unparseable
/// documents return false and are left to the executor to report.
fn is_mutation(request: &GraphQLRequest) -> bool {
    let Ok(document) = async_graphql::parser::parse_query(&request.query) else {
        return false;
    };
    match &document.operations {
        DocumentOperations::Single(op) => op.node.ty == OperationType::Mutation,
        DocumentOperations::Multiple(ops) => match request.operation_name.as_deref() {
            Some(name) => ops
                .iter()
                .any(|(n, op)| n.as_str() == name && op.node.ty == OperationType::Mutation),
            None => false,
        },
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "errors": [{ "message": message }] });
    (status, Json(body)).into_response()
}
