// src/shared/shared_structs.rs

use serde::Serialize;

/// Corpo padrão das respostas de erro da API.
#[derive(Serialize, Debug)]
pub struct RespostaErro {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'detail' se for None
    pub detail: Option<String>,
}
