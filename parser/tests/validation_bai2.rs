use bai2_parser::{Bai2Document, Container, ParseError, ParseOptions, RecordError};
use std::path::PathBuf;

fn fixture_text() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_1.bai");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read BAI2 fixture {path:?}: {e}"))
}

fn parse(text: &str, options: &ParseOptions) -> Result<Bai2Document, ParseError> {
    Bai2Document::parse_str(text, options)
}

#[test]
fn validation_does_not_change_the_model_of_a_valid_file() {
    let text = fixture_text();

    let validated = parse(&text, &ParseOptions::default()).expect("valid file must parse");
    let unvalidated = parse(&text, &ParseOptions::default().with_validation(false))
        .expect("valid file must parse without validation");

    assert_eq!(validated, unvalidated);
}

#[test]
fn blank_lines_do_not_affect_the_result() {
    let text = fixture_text();
    let with_blanks: String = text
        .lines()
        .flat_map(|line| [line, "", "   "])
        .collect::<Vec<_>>()
        .join("\n");

    let plain = parse(&text, &ParseOptions::default()).unwrap();
    let spaced = parse(&with_blanks, &ParseOptions::default()).unwrap();

    assert_eq!(plain, spaced);
}

#[test]
fn repeated_parses_are_identical() {
    let text = fixture_text();
    let first = parse(&text, &ParseOptions::default()).unwrap();
    let second = parse(&text, &ParseOptions::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn wrong_account_count_fails_only_with_validation() {
    // в первом 49 объявлено 8 записей, делаем 9
    let text = fixture_text().replacen("49,1650000,8/", "49,1650000,9/", 1);

    let err = parse(&text, &ParseOptions::default()).unwrap_err();
    match err {
        ParseError::Record {
            position, source, ..
        } => {
            assert_eq!(position, 10);
            match source {
                RecordError::AccountCountMismatch { expected, got } => {
                    assert_eq!(expected, 8);
                    assert_eq!(got, 9);
                }
                other => panic!("expected AccountCountMismatch, got {other:?}"),
            }
        }
        other => panic!("expected Record error, got {other:?}"),
    }

    let doc = parse(&text, &ParseOptions::default().with_validation(false))
        .expect("count mismatch must be ignored without validation");
    assert_eq!(doc.groups[0].accounts[0].trailer.num_of_records, Some(9));
}

#[test]
fn wrong_file_count_is_reported_at_the_trailer() {
    let text = fixture_text().replacen("99,1826250,2,21/", "99,1826250,2,20/", 1);

    let err = parse(&text, &ParseOptions::default()).unwrap_err();
    assert_eq!(err.position(), Some(21));
    match err.record_error() {
        Some(RecordError::FileCountMismatch { expected, got }) => {
            assert_eq!(*expected, 21);
            assert_eq!(*got, 20);
        }
        other => panic!("expected FileCountMismatch, got {other:?}"),
    }
}

#[test]
fn missing_group_trailer_is_unclosed_group() {
    // группа со счетами без 98 - ошибка даже без валидации счётчиков
    let text = fixture_text().replacen("98,76250,1,5/\n", "", 1);

    let err = parse(&text, &ParseOptions::default().with_validation(false)).unwrap_err();
    match err.record_error() {
        Some(RecordError::UnclosedContainer(Container::Group)) => {}
        other => panic!("expected UnclosedContainer(Group), got {other:?}"),
    }
}

#[test]
fn truncated_file_is_unclosed_file() {
    let text = fixture_text().replacen("99,1826250,2,21/\n", "", 1);

    let err = parse(&text, &ParseOptions::default()).unwrap_err();
    match err {
        ParseError::UnclosedContainer(Container::File) => {}
        other => panic!("expected UnclosedContainer(File), got {other:?}"),
    }
}

#[test]
fn unknown_record_code_reports_position_and_line() {
    let text = fixture_text().replacen("16,575,", "17,575,", 1);

    let err = parse(&text, &ParseOptions::default()).unwrap_err();
    match err {
        ParseError::Record {
            position,
            line,
            source,
        } => {
            assert_eq!(position, 18);
            assert!(line.starts_with("17,575,"));
            match source {
                RecordError::UnknownRecordType(code) => assert_eq!(code, "17"),
                other => panic!("expected UnknownRecordType, got {other:?}"),
            }
        }
        other => panic!("expected Record error, got {other:?}"),
    }
}

#[test]
fn strict_type_codes_reject_unknown_codes() {
    let text = fixture_text().replacen("16,575,", "16,999,", 1);

    let lenient = parse(&text, &ParseOptions::default()).expect("unknown type code is tolerated");
    let zba = &lenient.groups[1].accounts[0].transactions[0].transaction;
    assert_eq!(zba.type_code, "999");
    assert_eq!(zba.transaction_type, bai2_parser::TransactionType::Misc);

    let strict = ParseOptions::default().with_ignore_unknown_type_codes(false);
    let err = parse(&text, &strict).unwrap_err();
    match err.record_error() {
        Some(RecordError::UnknownTypeCode(code)) => assert_eq!(code, "999"),
        other => panic!("expected UnknownTypeCode, got {other:?}"),
    }
}

#[test]
fn pipe_delimited_file_parses_like_comma_delimited() {
    let text = fixture_text();
    let piped = text.replace(',', "|");

    let comma = parse(&text, &ParseOptions::default()).unwrap();
    let pipe = parse(&piped, &ParseOptions::default().with_delimiter('|')).unwrap();

    assert_eq!(comma.transaction_count(), pipe.transaction_count());
    assert_eq!(
        comma.groups[0].accounts[0].transactions[0].transaction,
        pipe.groups[0].accounts[0].transactions[0].transaction
    );
}
