// src/shared/shared_errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::shared_structs::RespostaErro;
use crate::saude::saude_structs::RespostaSaude;

/// Mensagem fixa devolvida quando a consulta de produtos falha.
pub const FALHA_CONSULTA_PRODUTOS: &str = "Falha ao consultar produtos";

/// Erros das rotas. Cada variante sabe montar o próprio corpo JSON.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A sonda do /health falhou.
    #[error("{0}")]
    Saude(#[source] sqlx::Error),

    #[error("Falha ao consultar produtos")]
    ConsultaProdutos(#[source] sqlx::Error),

    #[error("Rota não encontrada")]
    RotaNaoEncontrada,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Saude(_) | ApiError::ConsultaProdutos(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RotaNaoEncontrada => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut resposta = HttpResponse::build(self.status_code());

        match self {
            ApiError::Saude(e) => resposta.json(RespostaSaude {
                ok: false,
                error: Some(e.to_string()),
            }),
            ApiError::ConsultaProdutos(e) => resposta.json(RespostaErro {
                error: FALHA_CONSULTA_PRODUTOS.to_string(),
                detail: Some(e.to_string()),
            }),
            ApiError::RotaNaoEncontrada => resposta.json(RespostaErro {
                error: self.to_string(),
                detail: None,
            }),
        }
    }
}

/// Rota padrão para caminhos desconhecidos: 404 com corpo JSON.
pub async fn rota_nao_encontrada() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RotaNaoEncontrada)
}
