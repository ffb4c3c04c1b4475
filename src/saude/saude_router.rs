// src/saude/saude_router.rs

use actix_web::{get, web, HttpResponse};

use super::saude_structs::RespostaSaude;
use crate::banco::banco_pool::sondar;
use crate::shared::shared_errors::ApiError;
use crate::AppState;

/// Healthcheck: roda a sonda `SELECT 1` no pool.
#[get("/health")]
pub async fn verificar_saude(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    sondar(&data.db_pool).await.map_err(ApiError::Saude)?;

    Ok(HttpResponse::Ok().json(RespostaSaude { ok: true, error: None }))
}
