// src/config/mod.rs

// Leitura das variáveis de ambiente e tipos de configuração
pub mod config_structs;
