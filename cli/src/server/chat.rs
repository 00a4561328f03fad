use std::time::Instant;

use chatgate::{ChatRequest, ChatResponse, Gateway};
use rocket::{
    State, post,
    serde::json::{self, Json},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::server::ApiError;

#[post("/chat", data = "<request>")]
pub async fn handle_chat(
    request: Result<Json<ChatRequest>, json::Error<'_>>,
    gateway: &State<Gateway>,
) -> Result<Json<ChatResponse>, ApiError> {
    let id = Uuid::new_v4();

    let request = match request {
        Ok(request) => request.into_inner(),
        Err(json::Error::Parse(_, error)) => {
            warn!(%id, %error, "rejecting malformed chat request");
            return Err(ApiError::Unprocessable(error.to_string()));
        },
        Err(json::Error::Io(error)) => {
            warn!(%id, %error, "unable to read chat request body");
            return Err(ApiError::Internal(error.to_string()));
        },
    };

    info!(
        %id,
        model = %request.model,
        history = request.history_len(),
        message_chars = request.message.chars().count(),
        "incoming chat request"
    );

    let start_time = Instant::now();
    let result = gateway.chat(request).await;
    let elapsed = start_time.elapsed().as_secs_f64();

    match result {
        Ok(response) => {
            info!(
                %id,
                response_chars = response.response.chars().count(),
                elapsed_secs = elapsed,
                "chat reply sent"
            );
            Ok(Json(response))
        },
        Err(error) => {
            warn!(%id, %error, elapsed_secs = elapsed, "chat request failed");
            Err(error.into())
        },
    }
}
