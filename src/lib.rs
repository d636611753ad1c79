// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::analyzer::{
    analyse_file, analyse_reader, classify, length_in_words, lix, top_n,
};
pub use models::{AnalysisState, Statistics};
pub use utils::{export_json, find_text_files};
