// src/saude/saude_structs.rs

use serde::Serialize;

/// Resposta do healthcheck: `{"ok":true}` ou `{"ok":false,"error":"..."}`.
#[derive(Serialize, Debug)]
pub struct RespostaSaude {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
