use std::fmt;

use crate::error::{FieldError, RecordError};
use crate::model::{
    AccountIdentifier, AccountTrailer, AsOfDateModifier, Continuation, FileHeader, FileTrailer,
    FundsType, GroupHeader, GroupStatus, GroupTrailer, Transaction, TransactionType,
};
use crate::type_codes::type_code_details;
use crate::utils::{parse_amount, parse_count};

/// Признак продолжения в конце записи
const CONTINUATION_MARKER: char = '/';

/// Коды записей BAI2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCode {
    /// `01`
    FileHeader,
    /// `02`
    GroupHeader,
    /// `03`
    AccountIdentifier,
    /// `16`
    Transaction,
    /// `49`
    AccountTrailer,
    /// `88`
    Continuation,
    /// `98`
    GroupTrailer,
    /// `99`
    FileTrailer,
}

impl RecordCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCode::FileHeader => "01",
            RecordCode::GroupHeader => "02",
            RecordCode::AccountIdentifier => "03",
            RecordCode::Transaction => "16",
            RecordCode::AccountTrailer => "49",
            RecordCode::Continuation => "88",
            RecordCode::GroupTrailer => "98",
            RecordCode::FileTrailer => "99",
        }
    }
}

impl TryFrom<&str> for RecordCode {
    type Error = RecordError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw.trim() {
            "01" => Ok(RecordCode::FileHeader),
            "02" => Ok(RecordCode::GroupHeader),
            "03" => Ok(RecordCode::AccountIdentifier),
            "16" => Ok(RecordCode::Transaction),
            "49" => Ok(RecordCode::AccountTrailer),
            "88" => Ok(RecordCode::Continuation),
            "98" => Ok(RecordCode::GroupTrailer),
            "99" => Ok(RecordCode::FileTrailer),
            other => Err(RecordError::UnknownRecordType(other.to_string())),
        }
    }
}

impl fmt::Display for RecordCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Физическая строка, разложенная на код записи и поля
///
/// Кавычек и экранирования в BAI2 нет: разделитель внутри текста неотличим от границы поля.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    pub code: RecordCode,
    /// всё после кода и разделителя, без `/` на конце
    pub payload: &'a str,
    pub fields: Vec<&'a str>,
    delimiter: char,
}

impl<'a> RawRecord<'a> {
    /// Классифицирует одну непустую строку
    pub fn classify(line: &'a str, delimiter: char) -> Result<Self, RecordError> {
        let line = line.trim();
        let leading_token = || line.split(delimiter).next().unwrap_or(line).to_string();

        // код - первые два символа, дальше один разделитель (у `88/` или `99/` его нет)
        let code_raw = line
            .get(..2)
            .ok_or_else(|| RecordError::UnknownRecordType(leading_token()))?;
        let code = RecordCode::try_from(code_raw)?;

        let rest = &line[2..];
        let rest = match rest.strip_prefix(delimiter) {
            Some(rest) => rest,
            None if rest.is_empty() || rest.starts_with(CONTINUATION_MARKER) => rest,
            None => return Err(RecordError::UnknownRecordType(leading_token())),
        };

        let mut payload = rest.trim();
        if let Some(stripped) = payload.strip_suffix(CONTINUATION_MARKER) {
            payload = stripped;
        }

        let fields = payload.split(delimiter).collect();

        Ok(RawRecord {
            code,
            payload,
            fields,
            delimiter,
        })
    }

    /// Проверяет, что обязательная часть записи на месте
    fn expect_at_least(&self, expected: usize) -> Result<(), FieldError> {
        // пустой payload - это ноль полей, а не одно пустое
        let found = if self.payload.is_empty() { 0 } else { self.fields.len() };

        if found < expected {
            return Err(FieldError::TooFewFields { expected, found });
        }
        Ok(())
    }

    /// Обязательное текстовое поле (может быть пустым)
    fn text(&self, idx: usize) -> String {
        self.fields.get(idx).map(|s| s.trim().to_string()).unwrap_or_default()
    }

    /// Обязательное текстовое поле, пустое значение - ошибка
    fn non_empty(&self, idx: usize, field: &'static str) -> Result<String, FieldError> {
        let value = self.text(idx);
        if value.is_empty() {
            return Err(FieldError::EmptyField(field));
        }
        Ok(value)
    }

    /// Необязательное поле: отсутствует или пустое - `None`
    fn optional(&self, idx: usize) -> Option<&'a str> {
        self.fields
            .get(idx)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    fn amount(&self, idx: usize, field: &'static str) -> Result<Option<rust_decimal::Decimal>, FieldError> {
        self.fields
            .get(idx)
            .map_or(Ok(None), |raw| parse_amount(raw, field))
    }

    fn count(&self, idx: usize, field: &'static str) -> Result<Option<usize>, FieldError> {
        self.fields
            .get(idx)
            .map_or(Ok(None), |raw| parse_count(raw, field))
    }

    /// Хвост записи начиная с поля `from`, склеенный обратно через разделитель
    fn overflow(&self, from: usize) -> Option<String> {
        if self.fields.len() <= from {
            return None;
        }
        let rest = self.fields[from..].join(&self.delimiter.to_string());
        if rest.trim().is_empty() {
            None
        } else {
            Some(rest)
        }
    }

    fn malformed(&self, source: FieldError) -> RecordError {
        RecordError::MalformedRecord {
            code: self.code,
            source,
        }
    }
}

impl FileHeader {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            raw.expect_at_least(5)?;

            Ok(FileHeader {
                sequence,
                sender: raw.non_empty(0, "sender")?,
                receiver: raw.non_empty(1, "receiver")?,
                file_date: raw.non_empty(2, "file_date")?,
                file_time: raw.text(3),
                file_id: raw.non_empty(4, "file_id")?,
                record_length: raw.optional(5).map(str::to_string),
                block_size: raw.optional(6).map(str::to_string),
                version_number: raw.optional(7).map(str::to_string),
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl FileTrailer {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            Ok(FileTrailer {
                sequence,
                file_control_total: raw.amount(0, "file_control_total")?,
                num_of_groups: raw.count(1, "num_of_groups")?,
                num_of_records: raw.count(2, "num_of_records")?,
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl GroupHeader {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            raw.expect_at_least(6)?;

            Ok(GroupHeader {
                sequence,
                receiver: raw.text(0),
                sender: raw.non_empty(1, "sender")?,
                group_status: raw.optional(2).map(GroupStatus::from),
                as_of_date: raw.non_empty(3, "as_of_date")?,
                as_of_time: raw.text(4),
                currency_code: raw.optional(5).map(str::to_string),
                as_of_date_modifier: raw.optional(6).map(AsOfDateModifier::from),
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl GroupTrailer {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            Ok(GroupTrailer {
                sequence,
                group_control_total: raw.amount(0, "group_control_total")?,
                num_of_accounts: raw.count(1, "num_of_accounts")?,
                num_of_records: raw.count(2, "num_of_records")?,
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl AccountIdentifier {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            raw.expect_at_least(1)?;

            Ok(AccountIdentifier {
                sequence,
                account_number: raw.non_empty(0, "account_number")?,
                currency_code: raw.optional(1).map(str::to_string),
                type_code: raw.optional(2).map(str::to_string),
                opening_balance: raw.amount(3, "opening_balance")?,
                item_count: raw.count(4, "item_count")?,
                fund_type: raw.optional(5).map(FundsType::from),
                rest_of_record: raw.overflow(6),
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl AccountTrailer {
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            Ok(AccountTrailer {
                sequence,
                account_control_total: raw.amount(0, "account_control_total")?,
                num_of_records: raw.count(1, "num_of_records")?,
            })
        };
        parse().map_err(|e| raw.malformed(e))
    }
}

impl Transaction {
    /// `ignore_unknown_type_codes = false` делает неизвестный type code ошибкой
    pub(crate) fn from_raw(
        raw: &RawRecord<'_>,
        sequence: usize,
        ignore_unknown_type_codes: bool,
    ) -> Result<Self, RecordError> {
        let parse = || -> Result<Self, FieldError> {
            raw.expect_at_least(2)?;

            Ok(Transaction {
                sequence,
                type_code: raw.non_empty(0, "type_code")?,
                amount: raw
                    .amount(1, "amount")?
                    .ok_or(FieldError::EmptyField("amount"))?,
                funds_type: raw.optional(2).map(FundsType::from),
                bank_reference_number: raw.optional(3).map(str::to_string),
                customer_reference_number: raw.optional(4).map(str::to_string),
                description: raw.optional(5).map(str::to_string),
                transaction_type: TransactionType::Misc,
                rest_of_record: raw.overflow(6),
            })
        };
        let mut transaction = parse().map_err(|e| raw.malformed(e))?;

        let details = type_code_details(&transaction.type_code, ignore_unknown_type_codes)?;
        transaction.transaction_type = details.transaction_type.unwrap_or(TransactionType::Misc);

        Ok(transaction)
    }
}

impl Continuation {
    /// Текст продолжения не делится на поля
    pub(crate) fn from_raw(raw: &RawRecord<'_>, sequence: usize) -> Self {
        Continuation {
            sequence,
            record: raw.payload.to_string(),
        }
    }
}
