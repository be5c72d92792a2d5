// src/core.rs
pub mod classifier;
pub mod error;
pub mod ignore;
pub mod scanner;
