//! Плоские и вложенные проекции документа: одна строка/запись на каждую транзакцию.

use serde::Serialize;
use std::fmt::Display;

use crate::model::{
    AccountIdentifier, AccountTrailer, Bai2Document, Continuation, FileHeader, FileTrailer,
    GroupHeader, GroupTrailer, Transaction,
};

/// Поля записи в порядке объявления, для плоской выгрузки
trait FlatFields {
    const FIELDS: &'static [&'static str];

    fn values(&self) -> Vec<String>;
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl FlatFields for FileHeader {
    const FIELDS: &'static [&'static str] = &[
        "sender",
        "receiver",
        "file_date",
        "file_time",
        "file_id",
        "record_length",
        "block_size",
        "version_number",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.sender.clone(),
            self.receiver.clone(),
            self.file_date.clone(),
            self.file_time.clone(),
            self.file_id.clone(),
            opt(&self.record_length),
            opt(&self.block_size),
            opt(&self.version_number),
        ]
    }
}

impl FlatFields for GroupHeader {
    const FIELDS: &'static [&'static str] = &[
        "receiver",
        "sender",
        "group_status",
        "as_of_date",
        "as_of_time",
        "currency_code",
        "as_of_date_modifier",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.receiver.clone(),
            self.sender.clone(),
            opt(&self.group_status),
            self.as_of_date.clone(),
            self.as_of_time.clone(),
            opt(&self.currency_code),
            opt(&self.as_of_date_modifier),
        ]
    }
}

impl FlatFields for AccountIdentifier {
    const FIELDS: &'static [&'static str] = &[
        "account_number",
        "currency_code",
        "type_code",
        "opening_balance",
        "item_count",
        "fund_type",
        "rest_of_record",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            opt(&self.currency_code),
            opt(&self.type_code),
            opt(&self.opening_balance),
            opt(&self.item_count),
            opt(&self.fund_type),
            opt(&self.rest_of_record),
        ]
    }
}

impl FlatFields for Transaction {
    const FIELDS: &'static [&'static str] = &[
        "type_code",
        "amount",
        "funds_type",
        "bank_reference_number",
        "customer_reference_number",
        "description",
        "transaction_type",
        "rest_of_record",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.type_code.clone(),
            self.amount.to_string(),
            opt(&self.funds_type),
            opt(&self.bank_reference_number),
            opt(&self.customer_reference_number),
            opt(&self.description),
            self.transaction_type.to_string(),
            opt(&self.rest_of_record),
        ]
    }
}

impl FlatFields for AccountTrailer {
    const FIELDS: &'static [&'static str] = &["account_control_total", "num_of_records"];

    fn values(&self) -> Vec<String> {
        vec![opt(&self.account_control_total), opt(&self.num_of_records)]
    }
}

impl FlatFields for GroupTrailer {
    const FIELDS: &'static [&'static str] =
        &["group_control_total", "num_of_accounts", "num_of_records"];

    fn values(&self) -> Vec<String> {
        vec![
            opt(&self.group_control_total),
            opt(&self.num_of_accounts),
            opt(&self.num_of_records),
        ]
    }
}

impl FlatFields for FileTrailer {
    const FIELDS: &'static [&'static str] =
        &["file_control_total", "num_of_groups", "num_of_records"];

    fn values(&self) -> Vec<String> {
        vec![
            opt(&self.file_control_total),
            opt(&self.num_of_groups),
            opt(&self.num_of_records),
        ]
    }
}

/// Текст всех продолжений через пробел
fn join_summary(summary: &[Continuation]) -> String {
    summary
        .iter()
        .map(|c| c.record.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Одна транзакция со всеми предками, без сплющивания (для JSON-подобных выгрузок)
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord<'a> {
    pub file_header: &'a FileHeader,
    pub group_header: &'a GroupHeader,
    pub account_identifier: &'a AccountIdentifier,
    pub account_summary: String,
    pub transaction: &'a Transaction,
    pub transaction_summary: String,
    pub account_trailer: &'a AccountTrailer,
    /// у пустой группы без `98` трейлера нет, но транзакций в ней тоже нет
    pub group_trailer: Option<&'a GroupTrailer>,
    pub file_trailer: &'a FileTrailer,
}

/// Вложенная проекция: по одной записи на транзакцию, в порядке файла
pub fn to_records(document: &Bai2Document) -> Vec<TransactionRecord<'_>> {
    let mut records = Vec::with_capacity(document.transaction_count());

    for group in &document.groups {
        for account in &group.accounts {
            let account_summary = join_summary(&account.summary);

            for section in &account.transactions {
                records.push(TransactionRecord {
                    file_header: &document.header,
                    group_header: &group.header,
                    account_identifier: &account.identifier,
                    account_summary: account_summary.clone(),
                    transaction: &section.transaction,
                    transaction_summary: join_summary(&section.summary),
                    account_trailer: &account.trailer,
                    group_trailer: group.trailer.as_ref(),
                    file_trailer: &document.trailer,
                });
            }
        }
    }

    records
}

/// Плоская строка: пары (колонка, значение) в фиксированном порядке
///
/// Отсутствующие значения - пустые строки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }

    /// Значение по имени колонки
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn prefixed<'a>(prefix: &'a str, fields: &'a [&'static str]) -> impl Iterator<Item = String> + 'a {
    fields.iter().map(move |f| format!("{prefix}_{f}"))
}

/// Колонки плоской выгрузки: по уровню предка, внутри уровня - в порядке объявления полей
pub fn flat_columns() -> Vec<String> {
    let mut columns = Vec::new();
    columns.extend(prefixed("file_header", FileHeader::FIELDS));
    columns.extend(prefixed("group_header", GroupHeader::FIELDS));
    columns.extend(prefixed("account_identifier", AccountIdentifier::FIELDS));
    columns.push("account_summary".to_string());
    columns.extend(prefixed("transaction", Transaction::FIELDS));
    columns.push("transaction_summary".to_string());
    columns.extend(prefixed("account_trailer", AccountTrailer::FIELDS));
    columns.extend(prefixed("group_trailer", GroupTrailer::FIELDS));
    columns.extend(prefixed("file_trailer", FileTrailer::FIELDS));
    columns
}

impl TransactionRecord<'_> {
    fn flat_values(&self) -> Vec<String> {
        let mut values = Vec::new();
        values.extend(self.file_header.values());
        values.extend(self.group_header.values());
        values.extend(self.account_identifier.values());
        values.push(self.account_summary.clone());
        values.extend(self.transaction.values());
        values.push(self.transaction_summary.clone());
        values.extend(self.account_trailer.values());
        match self.group_trailer {
            Some(trailer) => values.extend(trailer.values()),
            None => values.extend(GroupTrailer::FIELDS.iter().map(|_| String::new())),
        }
        values.extend(self.file_trailer.values());
        values
    }
}

/// Плоская проекция: по одной строке на транзакцию
pub fn to_flat_rows(document: &Bai2Document) -> Vec<FlatRow> {
    let columns = flat_columns();

    to_records(document)
        .iter()
        .map(|record| FlatRow {
            cells: columns.iter().cloned().zip(record.flat_values()).collect(),
        })
        .collect()
}
