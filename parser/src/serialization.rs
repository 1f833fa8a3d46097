use csv::WriterBuilder;
use std::io::Write;

use crate::error::ParseError;
use crate::export::{flat_columns, to_flat_rows, to_records};
use crate::model::Bai2Document;

/// Форматы выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Расширение выходного файла
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl Bai2Document {
    /// Записывает документ в CSV: строка заголовков и по строке на транзакцию
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ParseError> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(flat_columns())?;
        for row in to_flat_rows(self) {
            wtr.write_record(row.values())?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Записывает документ в JSON: массив вложенных записей по транзакциям
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ParseError> {
        serde_json::to_writer_pretty(&mut writer, &to_records(self))?;
        writer.flush()?;
        Ok(())
    }

    /// Записывает документ в выбранном формате
    pub fn write<W: Write>(&self, writer: W, format: OutputFormat) -> Result<(), ParseError> {
        match format {
            OutputFormat::Csv => self.write_csv(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }
}
