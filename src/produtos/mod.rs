// src/produtos/mod.rs

// Estrutura da linha de produto e a consulta da listagem
pub mod produtos_structs;
// Rota GET /produtos
pub mod produtos_router;
