use chatgate::{Gateway, ModelDirectory};
use rocket::{State, get, serde::json::Json};
use tracing::info;

use crate::server::ApiError;

#[get("/models")]
pub async fn handle_models(
    gateway: &State<Gateway>
) -> Result<Json<ModelDirectory>, ApiError> {
    let directory = gateway.list_models().await?;
    info!(count = directory.models.len(), "listed models");
    Ok(Json(directory))
}
