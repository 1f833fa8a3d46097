use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::builder::HierarchyBuilder;
use crate::error::ParseError;
use crate::model::Bai2Document;
use crate::options::ParseOptions;

impl Bai2Document {
    /// Парсит при помощи переданного reader данные в [`Bai2Document`]
    ///
    /// При ошибке возвращает [`ParseError`], частичного результата нет.
    ///
    /// Пример:
    /// ```rust
    /// use std::io::Cursor;
    /// use bai2_parser::{Bai2Document, ParseOptions};
    /// # use bai2_parser::ParseError;
    /// # fn main() -> Result<(), ParseError> {
    /// let reader = Cursor::new(b"01,GSBI,cont001,210706,1249,1,,,2/\n99,,0,2/\n");
    /// let document = Bai2Document::parse(reader, &ParseOptions::default())?;
    /// assert_eq!(document.header.sender, "GSBI");
    /// #     Ok(())
    /// # }
    /// ```
    pub fn parse<R: Read>(reader: R, options: &ParseOptions) -> Result<Self, ParseError> {
        let mut buf_reader = BufReader::new(reader);
        let mut bytes = Vec::new();
        buf_reader.read_to_end(&mut bytes)?;

        Self::from_bytes(bytes, options)
    }

    /// Парсит файл по пути
    pub fn from_path<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, ParseError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ParseError::FileNotFound(path.to_path_buf()));
        }

        info!(file = %path.display(), "reading input file");
        let file = File::open(path)?;
        Self::parse(file, options)
    }

    /// Парсит сырые байты в выбранной кодировке
    pub fn from_bytes(bytes: Vec<u8>, options: &ParseOptions) -> Result<Self, ParseError> {
        let text = options.encoding.decode(bytes)?;
        Self::parse_str(&text, options)
    }

    /// Парсит уже декодированный текст
    pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let mut builder = HierarchyBuilder::new(options);
        for line in text.lines() {
            builder.push_line(line)?;
        }

        let document = builder.finish()?;
        info!(
            groups = document.groups.len(),
            accounts = document.accounts().count(),
            transactions = document.transaction_count(),
            "parsed BAI2 document"
        );
        Ok(document)
    }
}
