// src/shared/mod.rs

// Estruturas de resposta compartilhadas entre as rotas
pub mod shared_structs;
// Erros das rotas e a conversão para respostas HTTP
pub mod shared_errors;
