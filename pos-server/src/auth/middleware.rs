//! Session resolution middleware
//!
//! Runs on every request, resolves both authentication tiers from cookies
//! and stores the result as an [`AuthSession`] request extension. It never
//! rejects a request for being unauthenticated, that is the extractors'
//! job. It does fail the request when the identity provider itself errors.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use crate::auth::cookie::EMPLOYEE_COOKIE;
use crate::auth::session::AuthSession;
use crate::core::ServerState;

pub async fn resolve_session(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    // CORS preflights carry no cookies worth resolving
    if request.method() == http::Method::OPTIONS {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let store_token = jar
        .get(&state.config.store_session_cookie)
        .map(|c| c.value().to_string());
    let employee_id = jar.get(EMPLOYEE_COOKIE).map(|c| c.value().to_string());

    let session = match AuthSession::resolve(
        &state.db,
        state.identity.as_ref(),
        store_token.as_deref(),
        employee_id.as_deref(),
    )
    .await
    {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    let mut request = request;
    request.extensions_mut().insert(session);
    next.run(request).await
}
