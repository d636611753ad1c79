// src/core/analyzer.rs
pub mod aggregate;
pub mod classify;
pub mod frequency;
pub mod readability;
pub mod sentence;
pub mod word;

pub use self::aggregate::{analyse_file, analyse_reader};
pub use self::classify::{CharClass, classify};
pub use self::frequency::top_n;
pub use self::readability::lix;
pub use self::sentence::length_in_words;
