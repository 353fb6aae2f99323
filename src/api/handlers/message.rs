//! Handler for the message endpoint.

use axum::{Json, extract::State};
use tracing::debug;
use validator::Validate;

use crate::api::dto::message::{Message, Reply};
use crate::application::services::ShortLinkService;
use crate::domain::ports::{PermissionOracle, SettingsProvider, Transport};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::selection::{Selection, classify_selection};

/// Dispatches a typed message to the client core.
///
/// # Endpoint
///
/// `POST /api/message`
///
/// # Request Body
///
/// ```json
/// {
///   "type": "SHORTEN_URL",
///   "longUrl": "https://example.com/some/long/path",
///   "keyword": "promo",   // optional
///   "title": "Promo",     // optional
///   "tabId": 12           // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "shortUrl": "https://sho.rt/promo",
///   "already": false,
///   "tabId": 12
/// }
/// ```
///
/// # Errors
///
/// Operation failures are answered with 200 and `{"ok": false, "reason": ..}`.
/// Returns 400 Bad Request if a `SHORTEN_URL` long URL is not HTTP(S).
pub async fn message_handler(
    State(state): State<AppState>,
    Json(message): Json<Message>,
) -> Result<Json<Reply>, AppError> {
    if let Message::ShortenUrl(shorten) = &message {
        shorten.validate()?;
    }

    Ok(Json(dispatch(&state.service, message).await))
}

/// Runs the operation a message asks for and builds its reply.
pub async fn dispatch<T, S, P>(service: &ShortLinkService<T, S, P>, message: Message) -> Reply
where
    T: Transport,
    S: SettingsProvider,
    P: PermissionOracle,
{
    match message {
        Message::CheckConnection => service.check_connection().await.into(),
        Message::ShortenUrl(m) => {
            let reply: Reply = service
                .shorten(&m.long_url, m.keyword.as_deref(), m.title.as_deref())
                .await
                .into();
            reply.with_tab_id(m.tab_id)
        }
        Message::GetStats(m) => service.stats(&m.short_url).await.into(),
        Message::DeleteShortUrl(m) => service.delete(&m.short_url).await.into(),
        Message::GetSettings => {
            let settings = service.settings();
            Reply {
                service_url: Some(service.base_url().unwrap_or_default()),
                auto_copy: Some(settings.auto_copy),
                ..Reply::success()
            }
        }
        Message::ClassifySelection(m) => {
            let base_url = service.base_url().unwrap_or_default();
            match classify_selection(&base_url, &m.text) {
                Selection::Empty => Reply::failure("no URL in selection"),
                selection => Reply {
                    selection: Some(selection),
                    ..Reply::success()
                },
            }
        }
        Message::Unknown => {
            debug!("Ignoring unknown message type");
            Reply::failure("Unknown message type")
        }
    }
}
