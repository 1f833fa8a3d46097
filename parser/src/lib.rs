pub mod error;
pub mod export;
pub mod model;
pub mod options;
pub mod record;
pub mod serialization;
pub mod type_codes;

mod builder;
mod reader;
mod utils;

pub use crate::error::{Container, FieldError, ParseError, RecordError};
pub use crate::export::{FlatRow, TransactionRecord, flat_columns, to_flat_rows, to_records};
pub use crate::model::{
    AccountIdentifier, AccountSection, AccountTrailer, AsOfDateModifier, Bai2Document,
    Continuation, FileHeader, FileTrailer, FundsType, GroupHeader, GroupSection, GroupStatus,
    GroupTrailer, Record, Transaction, TransactionSection, TransactionType, TypeCodeLevel,
};
pub use crate::options::{Encoding, ParseOptions};
pub use crate::record::RecordCode;
pub use crate::serialization::OutputFormat;

use std::path::Path;

/// Парсит BAI2-файл по пути
///
/// То же самое, что [`Bai2Document::from_path`].
pub fn parse<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Bai2Document, ParseError> {
    Bai2Document::from_path(path, options)
}

/// Парсит BAI2 из байтов в памяти
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Bai2Document, ParseError> {
    Bai2Document::from_bytes(bytes.to_vec(), options)
}
