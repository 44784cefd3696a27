use actix_web::{error::JsonPayloadError, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::GenerateFactsRequest,
};

/// Generates one round of the game for a topic and difficulty level.
#[post("/generate")]
pub async fn generate_facts(
    state: web::Data<AppState>,
    request: web::Json<GenerateFactsRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "[{}] Generating facts for topic {:?} at level '{}'",
        get_request_id(&req).unwrap_or_default(),
        request.topic,
        request.level
    );

    let response = state.trivia_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// JSON extractor settings that report malformed bodies in the API's error format.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err: JsonPayloadError, _req| {
            AppError::ValidationError(format!("Invalid request body: {}", err)).into()
        })
}
