use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::record::RecordCode;
use crate::utils::{parse_bai_date, parse_bai_datetime};

/// Общее у всех физических записей: код записи и порядковый номер в файле
///
/// Порядковый номер присваивает парсер (в тексте файла его нет), в выгрузки он не попадает.
pub trait Record {
    /// код записи (`01`, `02`, ...)
    fn code(&self) -> RecordCode;
    /// порядковый номер записи в файле, с 1
    fn sequence(&self) -> usize;
}

macro_rules! impl_record {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl Record for $ty {
                fn code(&self) -> RecordCode {
                    $code
                }

                fn sequence(&self) -> usize {
                    self.sequence
                }
            }
        )*
    };
}

impl_record!(
    FileHeader => RecordCode::FileHeader,
    FileTrailer => RecordCode::FileTrailer,
    GroupHeader => RecordCode::GroupHeader,
    GroupTrailer => RecordCode::GroupTrailer,
    AccountIdentifier => RecordCode::AccountIdentifier,
    AccountTrailer => RecordCode::AccountTrailer,
    Transaction => RecordCode::Transaction,
    Continuation => RecordCode::Continuation,
);

/// Статус группы (поле 3 записи `02`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    New,
    Update,
    Delete,
    TestOnly,
    /// Код, которого нет в стандарте, хранится как есть
    Other(String),
}

impl GroupStatus {
    pub fn as_code(&self) -> &str {
        match self {
            GroupStatus::New => "1",
            GroupStatus::Update => "2",
            GroupStatus::Delete => "3",
            GroupStatus::TestOnly => "4",
            GroupStatus::Other(s) => s,
        }
    }
}

impl From<&str> for GroupStatus {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "1" => GroupStatus::New,
            "2" => GroupStatus::Update,
            "3" => GroupStatus::Delete,
            "4" => GroupStatus::TestOnly,
            other => GroupStatus::Other(other.to_string()),
        }
    }
}

/// Модификатор даты "as of" (поле 7 записи `02`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsOfDateModifier {
    InterimPreviousDay,
    FinalPreviousDay,
    InterimSameDay,
    FinalSameDay,
    Other(String),
}

impl AsOfDateModifier {
    pub fn as_code(&self) -> &str {
        match self {
            AsOfDateModifier::InterimPreviousDay => "1",
            AsOfDateModifier::FinalPreviousDay => "2",
            AsOfDateModifier::InterimSameDay => "3",
            AsOfDateModifier::FinalSameDay => "4",
            AsOfDateModifier::Other(s) => s,
        }
    }
}

impl From<&str> for AsOfDateModifier {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "1" => AsOfDateModifier::InterimPreviousDay,
            "2" => AsOfDateModifier::FinalPreviousDay,
            "3" => AsOfDateModifier::InterimSameDay,
            "4" => AsOfDateModifier::FinalSameDay,
            other => AsOfDateModifier::Other(other.to_string()),
        }
    }
}

/// Доступность средств (funds type)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundsType {
    UnknownAvailability,
    ImmediateAvailability,
    OneDayAvailability,
    TwoDayAvailability,
    DistributedAvailabilitySimple,
    ValueDated,
    DistributedAvailability,
    Other(String),
}

impl FundsType {
    pub fn as_code(&self) -> &str {
        match self {
            FundsType::UnknownAvailability => "Z",
            FundsType::ImmediateAvailability => "0",
            FundsType::OneDayAvailability => "1",
            FundsType::TwoDayAvailability => "2",
            FundsType::DistributedAvailabilitySimple => "S",
            FundsType::ValueDated => "V",
            FundsType::DistributedAvailability => "D",
            FundsType::Other(s) => s,
        }
    }
}

impl From<&str> for FundsType {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "Z" => FundsType::UnknownAvailability,
            "0" => FundsType::ImmediateAvailability,
            "1" => FundsType::OneDayAvailability,
            "2" => FundsType::TwoDayAvailability,
            "S" => FundsType::DistributedAvailabilitySimple,
            "V" => FundsType::ValueDated,
            "D" => FundsType::DistributedAvailability,
            other => FundsType::Other(other.to_string()),
        }
    }
}

/// Направление транзакции по справочнику type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Кредит
    Credit,
    /// Дебет
    Debit,
    /// Ни то, ни другое (статусные коды и коды вне справочника)
    Misc,
}

impl TransactionType {
    pub fn as_code(&self) -> &'static str {
        match self {
            TransactionType::Credit => "CR",
            TransactionType::Debit => "DB",
            TransactionType::Misc => "M",
        }
    }
}

/// Уровень type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCodeLevel {
    Status,
    Detail,
    Summary,
}

impl TypeCodeLevel {
    pub fn as_code(&self) -> &'static str {
        match self {
            TypeCodeLevel::Status => "status",
            TypeCodeLevel::Detail => "detail",
            TypeCodeLevel::Summary => "summary",
        }
    }
}

macro_rules! code_display_and_serialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_code())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_code())
                }
            }
        )*
    };
}

code_display_and_serialize!(
    GroupStatus,
    AsOfDateModifier,
    FundsType,
    TransactionType,
    TypeCodeLevel,
);

/// `01` - заголовок файла, первая непустая строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    #[serde(skip)]
    pub sequence: usize,
    /// идентификатор отправителя
    pub sender: String,
    /// идентификатор получателя
    pub receiver: String,
    /// дата создания файла, YYMMDD
    pub file_date: String,
    /// время создания файла, HHMM
    pub file_time: String,
    /// идентификатор файла
    pub file_id: String,
    pub record_length: Option<String>,
    pub block_size: Option<String>,
    pub version_number: Option<String>,
}

impl FileHeader {
    /// Дата и время создания файла, если их удалось разобрать
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_bai_datetime(&self.file_date, &self.file_time)
    }
}

/// `99` - трейлер файла, последняя непустая строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTrailer {
    #[serde(skip)]
    pub sequence: usize,
    pub file_control_total: Option<Decimal>,
    pub num_of_groups: Option<usize>,
    /// количество всех записей файла, включая `01` и `99`
    pub num_of_records: Option<usize>,
}

/// `02` - заголовок группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupHeader {
    #[serde(skip)]
    pub sequence: usize,
    pub receiver: String,
    pub sender: String,
    pub group_status: Option<GroupStatus>,
    /// YYMMDD
    pub as_of_date: String,
    /// HHMM
    pub as_of_time: String,
    pub currency_code: Option<String>,
    pub as_of_date_modifier: Option<AsOfDateModifier>,
}

impl GroupHeader {
    pub fn as_of(&self) -> Option<NaiveDate> {
        parse_bai_date(&self.as_of_date)
    }
}

/// `98` - трейлер группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTrailer {
    #[serde(skip)]
    pub sequence: usize,
    pub group_control_total: Option<Decimal>,
    pub num_of_accounts: Option<usize>,
    /// количество записей группы, включая `02` и `98`
    pub num_of_records: Option<usize>,
}

/// `03` - идентификатор счёта, открывает счёт внутри группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountIdentifier {
    #[serde(skip)]
    pub sequence: usize,
    pub account_number: String,
    pub currency_code: Option<String>,
    pub type_code: Option<String>,
    pub opening_balance: Option<Decimal>,
    pub item_count: Option<usize>,
    pub fund_type: Option<FundsType>,
    /// Всё, что идёт после известных полей, одной строкой через разделитель
    pub rest_of_record: Option<String>,
}

/// `49` - трейлер счёта
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountTrailer {
    #[serde(skip)]
    pub sequence: usize,
    pub account_control_total: Option<Decimal>,
    /// количество записей счёта, включая `03` и `49`
    pub num_of_records: Option<usize>,
}

/// `16` - детальная запись по счёту
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(skip)]
    pub sequence: usize,
    pub type_code: String,
    pub amount: Decimal,
    pub funds_type: Option<FundsType>,
    pub bank_reference_number: Option<String>,
    pub customer_reference_number: Option<String>,
    pub description: Option<String>,
    /// по справочнику type code
    pub transaction_type: TransactionType,
    pub rest_of_record: Option<String>,
}

/// `88` - продолжение предыдущей `03` или `16`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continuation {
    #[serde(skip)]
    pub sequence: usize,
    pub record: String,
}

/// Транзакция и все `88`, идущие сразу за ней
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSection {
    pub transaction: Transaction,
    pub summary: Vec<Continuation>,
}

/// Счёт: `03`, его продолжения, транзакции и `49`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSection {
    pub identifier: AccountIdentifier,
    /// `88` между `03` и первой `16`
    pub summary: Vec<Continuation>,
    pub transactions: Vec<TransactionSection>,
    pub trailer: AccountTrailer,
}

/// Группа: `02`, счета и `98`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSection {
    pub header: GroupHeader,
    pub accounts: Vec<AccountSection>,
    /// `None` только у пустой группы, которую закрыл трейлер файла
    pub trailer: Option<GroupTrailer>,
}

/// Центральная/корневая структура библиотеки, содержащая один разобранный BAI2-файл.
///
/// Строится за один проход и после этого не меняется.
///
/// Пример использования:
/// ```no_run
/// use bai2_parser::{Bai2Document, ParseOptions};
/// # fn main() -> Result<(), bai2_parser::ParseError> {
/// let document = Bai2Document::from_path("statement.bai", &ParseOptions::default())?;
///
/// let stdout = std::io::stdout();
/// document.write_csv(stdout.lock())?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bai2Document {
    pub header: FileHeader,
    pub groups: Vec<GroupSection>,
    pub trailer: FileTrailer,
}

impl Bai2Document {
    /// Количество транзакций во всех счетах всех групп
    pub fn transaction_count(&self) -> usize {
        self.accounts().map(|a| a.transactions.len()).sum()
    }

    /// Все счета файла в порядке следования
    pub fn accounts(&self) -> impl Iterator<Item = &AccountSection> {
        self.groups.iter().flat_map(|g| g.accounts.iter())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<3} {:>15} {} {}",
            self.type_code,
            self.transaction_type,
            self.amount.to_string(),
            self.bank_reference_number.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction() -> Transaction {
        Transaction {
            sequence: 5,
            type_code: "165".to_string(),
            amount: Decimal::from(1250),
            funds_type: Some(FundsType::ImmediateAvailability),
            bank_reference_number: Some("BR1".to_string()),
            customer_reference_number: None,
            description: Some("Payroll".to_string()),
            transaction_type: TransactionType::Credit,
            rest_of_record: None,
        }
    }

    #[test]
    fn records_report_code_and_sequence() {
        let tx = transaction();
        assert_eq!(tx.code(), RecordCode::Transaction);
        assert_eq!(tx.sequence(), 5);

        let note = Continuation {
            sequence: 6,
            record: "note".to_string(),
        };
        assert_eq!(note.code(), RecordCode::Continuation);
        assert_eq!(note.sequence(), 6);
    }

    #[test]
    fn transaction_display_is_aligned() {
        let line = transaction().to_string();

        assert_eq!(line, format!("165  CR  {:>15} BR1 Payroll", "1250"));
    }

    #[test]
    fn unknown_codes_fall_back_to_other() {
        assert_eq!(GroupStatus::from("9"), GroupStatus::Other("9".to_string()));
        assert_eq!(FundsType::from("X").as_code(), "X");
        assert_eq!(AsOfDateModifier::from("2"), AsOfDateModifier::FinalPreviousDay);
    }
}
