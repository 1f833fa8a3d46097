use std::{fmt, io::Error as IoError, num::ParseIntError, path::PathBuf};
use thiserror::Error;

use crate::record::RecordCode;

/// Контейнеры иерархии BAI2, которые открываются заголовком и закрываются трейлером
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// файл: `01` ... `99`
    File,
    /// группа: `02` ... `98`
    Group,
    /// счёт: `03` ... `49`
    Account,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::File => write!(f, "file"),
            Container::Group => write!(f, "group"),
            Container::Account => write!(f, "account"),
        }
    }
}

/// Ошибки при парсинге BAI2
///
/// Парсинг "всё или ничего": первая же ошибка прерывает разбор всего файла.
#[derive(Debug, Error)]
pub enum ParseError {
    // обёртки

    /// входной файл не найден
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),
    /// обёртка csv::Error (запись выгрузки)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// обёртка serde_json::Error (запись выгрузки)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // логические ошибки

    /// байты не соответствуют выбранной кодировке
    #[error("invalid input encoding: {0}")]
    Encoding(String),
    /// во входных данных нет ни одной непустой строки
    #[error("input contains no records")]
    EmptyInput,
    /// ошибка в конкретной записи, вместе с исходной строкой и её порядковым номером
    #[error("error parsing record #{position} '{line}': {source}")]
    Record {
        /// порядковый номер записи (непустые строки, с 1)
        position: usize,
        /// исходная строка без перевода строки
        line: String,
        /// причина
        #[source]
        source: RecordError,
    },
    /// файл закончился, а контейнер так и не закрыт трейлером
    #[error("unexpected end of input: {0} is not closed")]
    UnclosedContainer(Container),
}

impl ParseError {
    /// Порядковый номер записи, на которой упал парсинг (если ошибка привязана к записи)
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Record { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Ошибка конкретной записи, если она есть
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            ParseError::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Ошибки обработки одной записи
#[derive(Debug, Error)]
pub enum RecordError {
    /// код записи не входит в восемь известных
    #[error("unknown record type '{0}'")]
    UnknownRecordType(String),
    /// не удалось разложить поля записи
    #[error("malformed {code} record: {source}")]
    MalformedRecord {
        code: RecordCode,
        #[source]
        source: FieldError,
    },
    /// type code транзакции не найден в справочнике (только в строгом режиме)
    #[error("unknown transaction type code '{0}'")]
    UnknownTypeCode(String),
    /// `88` не сразу после `03`/`16` (или их продолжений)
    #[error(
        "continuation record found without a preceding account identifier or transaction record"
    )]
    InvalidContinuationPlacement,
    /// запись стоит вне своего контейнера
    #[error("{code} record is not allowed here: {reason}")]
    InvalidNesting {
        code: RecordCode,
        reason: &'static str,
    },
    /// вложенный контейнер не закрыт до появления следующего заголовка/внешнего трейлера
    #[error("{0} is not closed by its trailer")]
    UnclosedContainer(Container),
    /// `49`: посчитано `expected`, заявлено `got`
    #[error("account trailer record count mismatch: expected {expected}, got {got}")]
    AccountCountMismatch { expected: usize, got: usize },
    /// `98`: посчитано `expected`, заявлено `got`
    #[error("group trailer record count mismatch: expected {expected}, got {got}")]
    GroupCountMismatch { expected: usize, got: usize },
    /// `99`: посчитано `expected`, заявлено `got`
    #[error("file trailer record count mismatch: expected {expected}, got {got}")]
    FileCountMismatch { expected: usize, got: usize },
}

/// Ошибки позиционного разбора полей
#[derive(Debug, Error)]
pub enum FieldError {
    /// полей меньше, чем обязательных
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    /// обязательное поле пустое
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
    /// не удалось разобрать денежную сумму
    #[error("invalid amount in '{field}': '{value}'")]
    InvalidAmount {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
    /// не удалось разобрать количество
    #[error("invalid count in '{field}': '{value}'")]
    InvalidCount {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
