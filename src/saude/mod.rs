// src/saude/mod.rs

pub mod saude_structs;
pub mod saude_router;
