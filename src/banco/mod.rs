// src/banco/mod.rs

// Pool de conexões com o Postgres e a sonda de conectividade
pub mod banco_pool;

#[cfg(test)]
pub mod banco_testes;
