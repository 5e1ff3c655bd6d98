// This file makes items available to main.rs and integration tests.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod index_types;
pub mod kmer;
pub mod utils;
