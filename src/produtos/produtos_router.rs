// src/produtos/produtos_router.rs

use actix_web::{get, web, HttpResponse};
use sqlx::{query_as, PgPool};

use super::produtos_structs::{ProdutoView, CONSULTA_PRODUTOS};
use crate::shared::shared_errors::ApiError;
use crate::AppState;

/// Executa a consulta de produtos no pool.
///
/// Usa uma única conexão, devolvida ao pool ao final, com ou sem erro.
pub async fn listar_produtos(pool: &PgPool) -> Result<Vec<ProdutoView>, sqlx::Error> {
    query_as::<_, ProdutoView>(CONSULTA_PRODUTOS)
        .fetch_all(pool)
        .await
}

/// Rota para listar os produtos com categoria e anexos.
#[get("/produtos")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let produtos = listar_produtos(&data.db_pool).await.map_err(|e| {
        tracing::error!("Erro ao consultar /produtos: {}", e);
        ApiError::ConsultaProdutos(e)
    })?;

    Ok(HttpResponse::Ok().json(produtos))
}
