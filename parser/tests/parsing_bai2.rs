use bai2_parser::{
    AsOfDateModifier, Bai2Document, FundsType, GroupStatus, ParseError, ParseOptions,
    TransactionType,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::{fs::File, io::BufReader, path::PathBuf};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_1.bai")
}

fn parse_bai2_fixture() -> Bai2Document {
    let path = fixture_path();
    let file =
        File::open(&path).unwrap_or_else(|e| panic!("failed to open BAI2 fixture {path:?}: {e}"));
    let reader = BufReader::new(file);

    Bai2Document::parse(reader, &ParseOptions::default()).expect("failed to parse BAI2 fixture")
}

#[test]
fn bai2_fixture_has_expected_file_header_and_trailer() {
    let doc = parse_bai2_fixture();

    assert_eq!(doc.header.sender, "GSBI");
    assert_eq!(doc.header.receiver, "cont001");
    assert_eq!(doc.header.file_date, "210706");
    assert_eq!(doc.header.file_time, "1249");
    assert_eq!(doc.header.file_id, "1");
    assert_eq!(doc.header.record_length, None);
    assert_eq!(doc.header.block_size, None);
    assert_eq!(doc.header.version_number.as_deref(), Some("2"));

    let created = doc.header.created_at().expect("file date should be valid");
    assert_eq!(created.date(), NaiveDate::from_ymd_opt(2021, 7, 6).unwrap());

    // 99 в конце файла
    assert_eq!(doc.trailer.file_control_total, Some(Decimal::from(1_826_250)));
    assert_eq!(doc.trailer.num_of_groups, Some(2));
    assert_eq!(doc.trailer.num_of_records, Some(21));
    assert_eq!(doc.trailer.sequence, 21);
}

#[test]
fn bai2_fixture_has_two_groups_with_trailers() {
    let doc = parse_bai2_fixture();

    assert_eq!(doc.groups.len(), 2);

    let first = &doc.groups[0];
    assert_eq!(first.header.receiver, "cont001");
    assert_eq!(first.header.sender, "026015079");
    assert_eq!(first.header.group_status, Some(GroupStatus::New));
    assert_eq!(first.header.as_of_time, "2400");
    assert_eq!(first.header.currency_code.as_deref(), Some("USD"));
    assert_eq!(
        first.header.as_of_date_modifier,
        Some(AsOfDateModifier::FinalPreviousDay)
    );
    assert_eq!(
        first.header.as_of(),
        NaiveDate::from_ymd_opt(2021, 7, 5)
    );
    assert_eq!(first.accounts.len(), 2);

    let trailer = first.trailer.as_ref().expect("first group should be closed");
    assert_eq!(trailer.num_of_accounts, Some(2));
    assert_eq!(trailer.num_of_records, Some(14));

    let second = &doc.groups[1];
    assert_eq!(second.accounts.len(), 1);
    assert_eq!(
        second.trailer.as_ref().and_then(|t| t.num_of_records),
        Some(5)
    );
}

#[test]
fn bai2_fixture_first_account_has_summary_and_transactions() {
    let doc = parse_bai2_fixture();
    let account = &doc.groups[0].accounts[0];

    assert_eq!(account.identifier.account_number, "107049924");
    assert_eq!(account.identifier.currency_code.as_deref(), Some("USD"));
    assert_eq!(account.identifier.type_code.as_deref(), Some("010"));
    assert_eq!(
        account.identifier.opening_balance,
        Some(Decimal::from(1_500_000))
    );
    assert_eq!(account.identifier.item_count, None);
    assert_eq!(account.identifier.fund_type, None);
    // остаток записи после первых шести полей
    assert_eq!(
        account.identifier.rest_of_record.as_deref(),
        Some("015,1560000,,")
    );

    assert_eq!(account.summary.len(), 1);
    assert_eq!(account.summary[0].record, "100,60000,2,,400,0,0");
    assert_eq!(account.summary[0].sequence, 4);

    assert_eq!(account.transactions.len(), 3);
    assert_eq!(account.trailer.num_of_records, Some(8));
    assert_eq!(
        account.trailer.account_control_total,
        Some(Decimal::from(1_650_000))
    );
}

#[test]
fn bai2_fixture_transactions_carry_fields_and_continuations() {
    let doc = parse_bai2_fixture();
    let transactions = &doc.groups[0].accounts[0].transactions;

    let first = &transactions[0];
    assert_eq!(first.transaction.type_code, "447");
    assert_eq!(first.transaction.amount, Decimal::from(60_000));
    assert_eq!(first.transaction.funds_type, None);
    assert_eq!(
        first.transaction.bank_reference_number.as_deref(),
        Some("SPB2322984714570")
    );
    assert_eq!(
        first.transaction.customer_reference_number.as_deref(),
        Some("1111")
    );
    assert_eq!(
        first.transaction.description.as_deref(),
        Some("ACH Disbursement Funding")
    );
    assert_eq!(first.transaction.transaction_type, TransactionType::Debit);
    assert_eq!(first.transaction.sequence, 5);

    // два 88 подряд относятся к одной транзакции
    let texts: Vec<&str> = first.summary.iter().map(|c| c.record.as_str()).collect();
    assert_eq!(texts, vec!["ORIG CO NAME:ACME CORP", "ENTRY DESCR:PAYROLL"]);
    assert_eq!(first.summary[0].sequence, 6);
    assert_eq!(first.summary[1].sequence, 7);

    let second = &transactions[1];
    assert_eq!(second.transaction.type_code, "165");
    assert_eq!(second.transaction.funds_type, Some(FundsType::ImmediateAvailability));
    assert_eq!(second.transaction.customer_reference_number, None);
    assert_eq!(second.transaction.transaction_type, TransactionType::Credit);
    assert!(second.summary.is_empty());

    let third = &transactions[2];
    assert_eq!(third.transaction.funds_type, Some(FundsType::OneDayAvailability));
    assert_eq!(third.transaction.transaction_type, TransactionType::Debit);
}

#[test]
fn bai2_fixture_counts_all_transactions() {
    let doc = parse_bai2_fixture();

    assert_eq!(doc.transaction_count(), 5);
    assert_eq!(doc.accounts().count(), 3);

    let numbers: Vec<&str> = doc
        .accounts()
        .map(|a| a.identifier.account_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["107049924", "107049925", "200300400"]);

    let wire = &doc.groups[0].accounts[1].transactions[0];
    assert_eq!(wire.transaction.funds_type, Some(FundsType::ValueDated));
    assert_eq!(wire.summary[0].record, "FROM BANK OF TESTING");
}

#[test]
fn bai2_fixture_parses_from_path() {
    let from_path = bai2_parser::parse(fixture_path(), &ParseOptions::default())
        .expect("failed to parse BAI2 fixture by path");

    assert_eq!(from_path, parse_bai2_fixture());
}

#[test]
fn missing_file_is_reported() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("does_not_exist.bai");

    let err = Bai2Document::from_path(&path, &ParseOptions::default()).unwrap_err();
    match err {
        ParseError::FileNotFound(p) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn header_group_trailer_scenario() {
    let text = "01,GSBI,cont001,210706,1249,1,,,2/\n\
                02,cont001,026015079,1,230906,2000,,/\n\
                99,13060195162,1,3/\n";

    let doc = bai2_parser::parse_bytes(text.as_bytes(), &ParseOptions::default())
        .expect("failed to parse header scenario");

    assert_eq!(doc.header.sender, "GSBI");
    assert_eq!(doc.groups.len(), 1);
    assert!(doc.groups[0].accounts.is_empty());
    assert_eq!(doc.groups[0].header.currency_code, None);
    assert_eq!(doc.groups[0].header.as_of_date_modifier, None);
    assert_eq!(
        doc.trailer.file_control_total,
        Some(Decimal::from(13_060_195_162_i64))
    );
}
