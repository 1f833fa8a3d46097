use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// Кодировка входного файла
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (по умолчанию)
    #[default]
    Utf8,
    /// ISO-8859-1, каждый байт - один символ
    Latin1,
}

impl Encoding {
    /// Декодирует сырые байты в строку
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, ParseError> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|e| ParseError::Encoding(e.to_string()))
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            other => Err(format!("unsupported encoding: {other}")),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

/// Настройки парсинга
///
/// Пример:
/// ```rust
/// use bai2_parser::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_validation(false)
///     .with_delimiter('|');
/// assert!(!options.validate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// разделитель полей
    pub delimiter: char,
    /// проверять количества записей из трейлеров
    pub validate: bool,
    /// кодировка входа
    pub encoding: Encoding,
    /// неизвестный type code - только предупреждение (иначе ошибка)
    pub ignore_unknown_type_codes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: ',',
            validate: true,
            encoding: Encoding::Utf8,
            ignore_unknown_type_codes: true,
        }
    }
}

impl ParseOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_ignore_unknown_type_codes(mut self, ignore: bool) -> Self {
        self.ignore_unknown_type_codes = ignore;
        self
    }
}
