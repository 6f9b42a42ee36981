//! SSE rig update stream.

use crate::AppState;
use axum::{
    extract::Extension,
    response::{sse::Event, Sse},
};
use futures_util::Stream;
use std::{convert::Infallible, sync::Arc};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Handler for `GET /events/rig`.
///
/// Streams every change to the server-side skeleton as a `rig` event whose
/// data is the JSON-encoded [`RigUpdate`](crate::RigUpdate).
pub async fn get_rig_stream_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.rig_tx.subscribe();
    let stream = BroadcastStream::new(rx);

    let mapped_stream = stream.filter_map(|result| match result {
        Ok(update) => match serde_json::to_string(&update) {
            Ok(data) => Some(Ok(Event::default().event("rig").data(data))),
            Err(e) => {
                tracing::error!("failed to serialize rig update: {}", e);
                None
            }
        },
        Err(broadcast_error) => {
            tracing::warn!(
                error = %broadcast_error,
                "rig SSE stream lagged; updates were dropped for this subscriber"
            );
            None
        }
    });

    Sse::new(mapped_stream).keep_alive(axum::response::sse::KeepAlive::default())
}
