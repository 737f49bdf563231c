//! Local HTTP host for the translator. Every path and method is routed to
//! [`EntryTranslator::handle`].

use crate::core::handler::EntryTranslator;
use crate::domain::model::{InboundRequest, InboundResponse};
use crate::domain::ports::PageCreator;
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn build_router<P>(translator: Arc<EntryTranslator<P>>) -> Router
where
    P: PageCreator + 'static,
{
    Router::new().fallback(relay::<P>).with_state(translator)
}

pub async fn serve<P>(addr: &str, translator: Arc<EntryTranslator<P>>) -> Result<()>
where
    P: PageCreator + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, translator).await
}

pub async fn serve_on<P>(listener: TcpListener, translator: Arc<EntryTranslator<P>>) -> Result<()>
where
    P: PageCreator + 'static,
{
    tracing::info!("🚀 Journal relay listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(translator)).await?;
    Ok(())
}

async fn relay<P>(
    State(translator): State<Arc<EntryTranslator<P>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    P: PageCreator + 'static,
{
    let request = InboundRequest::from_bytes(method.as_str(), &body);
    into_http_response(translator.handle(&request).await)
}

fn into_http_response(response: InboundResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut http_response = (status, response.body).into_response();
    let headers = http_response.headers_mut();
    headers.remove(CONTENT_TYPE);

    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Dropping invalid response header {}", name),
        }
    }

    http_response
}
