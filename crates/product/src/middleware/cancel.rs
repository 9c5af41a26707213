use axum::{extract::Request, middleware::Next, response::Response};
use tokio_util::sync::CancellationToken;

/// Per-request cancellation signal tied to the client connection.
#[derive(Clone)]
pub struct RequestCancellation(pub CancellationToken);

/// Mints a token for every request and arms a drop guard on the request
/// future: when the client goes away, hyper drops the future, the guard
/// fires the token and any database wait still in flight is unblocked.
pub async fn cancel_on_disconnect(mut req: Request, next: Next) -> Response {
    let token = CancellationToken::new();
    req.extensions_mut()
        .insert(RequestCancellation(token.clone()));

    let _guard = token.drop_guard();

    next.run(req).await
}
