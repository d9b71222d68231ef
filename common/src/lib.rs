//! Client Match Common Library
//!
//! CLIとWebで共有される型とユーティリティ

pub mod types;
pub mod codec;
pub mod error;
pub mod export;

pub use types::{CandidateEntry, MatchResult, Sheet};
pub use codec::decode_records;
pub use error::{Error, Result};
#[cfg(feature = "excel")]
pub use export::excel_core::generate_excel_buffer;
