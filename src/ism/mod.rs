// src/ism/mod.rs
pub mod models;
