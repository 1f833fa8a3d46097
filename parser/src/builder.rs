use tracing::debug;

use crate::error::{Container, ParseError, RecordError};
use crate::model::{
    AccountIdentifier, AccountSection, AccountTrailer, Bai2Document, Continuation, FileHeader,
    FileTrailer, GroupHeader, GroupSection, GroupTrailer, Record, Transaction, TransactionSection,
};
use crate::options::ParseOptions;
use crate::record::{RawRecord, RecordCode};

/// Счёт, у которого ещё не было `49`
#[derive(Debug)]
struct OpenAccount {
    identifier: AccountIdentifier,
    summary: Vec<Continuation>,
    transactions: Vec<TransactionSection>,
}

/// Группа, у которой ещё не было `98`
#[derive(Debug)]
struct OpenGroup {
    header: GroupHeader,
    accounts: Vec<AccountSection>,
}

/// Счётчики записей по уровням
#[derive(Debug, Default)]
struct Counters {
    file: usize,
    group: usize,
    account: usize,
}

/// Конечный автомат, собирающий иерархию файл -> группа -> счёт -> транзакция
///
/// Принимает строки строго по порядку, без заглядывания вперёд.
/// Открытые контейнеры принадлежат самому билдеру и попадают в документ при закрытии трейлером.
#[derive(Debug)]
pub(crate) struct HierarchyBuilder<'o> {
    options: &'o ParseOptions,
    header: Option<FileHeader>,
    groups: Vec<GroupSection>,
    open_group: Option<OpenGroup>,
    open_account: Option<OpenAccount>,
    trailer: Option<FileTrailer>,
    /// последняя запись, к которой может относиться `88`
    previous: Option<RecordCode>,
    counters: Counters,
}

impl<'o> HierarchyBuilder<'o> {
    pub(crate) fn new(options: &'o ParseOptions) -> Self {
        HierarchyBuilder {
            options,
            header: None,
            groups: Vec::new(),
            open_group: None,
            open_account: None,
            trailer: None,
            previous: None,
            counters: Counters::default(),
        }
    }

    /// Обрабатывает одну физическую строку
    ///
    /// Пустые строки пропускаются и ни на что не влияют.
    pub(crate) fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        self.counters.file += 1;
        self.counters.group += 1;
        let position = self.counters.file;

        self.apply(line, position).map_err(|source| ParseError::Record {
            position,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
            source,
        })
    }

    fn apply(&mut self, line: &str, position: usize) -> Result<(), RecordError> {
        let raw = RawRecord::classify(line, self.options.delimiter)?;
        debug!(position, code = %raw.code, "reading record");

        if raw.code != RecordCode::FileHeader && self.header.is_none() {
            // `88` первой записью - это прежде всего продолжение без владельца
            if raw.code == RecordCode::Continuation {
                return Err(RecordError::InvalidContinuationPlacement);
            }
            return Err(RecordError::InvalidNesting {
                code: raw.code,
                reason: "file must start with a file header",
            });
        }
        if self.trailer.is_some() {
            return Err(RecordError::InvalidNesting {
                code: raw.code,
                reason: "record after file trailer",
            });
        }

        match raw.code {
            RecordCode::FileHeader => self.on_file_header(&raw, position),
            RecordCode::GroupHeader => self.on_group_header(&raw, position),
            RecordCode::AccountIdentifier => self.on_account_identifier(&raw, position),
            RecordCode::Transaction => self.on_transaction(&raw, position),
            RecordCode::Continuation => self.on_continuation(&raw, position),
            RecordCode::AccountTrailer => self.on_account_trailer(&raw, position),
            RecordCode::GroupTrailer => self.on_group_trailer(&raw, position),
            RecordCode::FileTrailer => self.on_file_trailer(&raw, position),
        }?;

        if raw.code != RecordCode::Continuation {
            self.previous = Some(raw.code);
        }
        Ok(())
    }

    fn on_file_header(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        if self.header.is_some() {
            return Err(RecordError::InvalidNesting {
                code: raw.code,
                reason: "duplicate file header",
            });
        }

        self.header = Some(FileHeader::from_raw(raw, position)?);
        // заголовок файла не входит ни в одну группу
        self.counters.group = 0;
        Ok(())
    }

    fn on_group_header(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        if self.open_group.is_some() {
            return Err(RecordError::UnclosedContainer(Container::Group));
        }

        let header = GroupHeader::from_raw(raw, position)?;
        self.open_group = Some(OpenGroup {
            header,
            accounts: Vec::new(),
        });
        Ok(())
    }

    fn on_account_identifier(
        &mut self,
        raw: &RawRecord<'_>,
        position: usize,
    ) -> Result<(), RecordError> {
        if self.open_group.is_none() {
            return Err(RecordError::InvalidNesting {
                code: raw.code,
                reason: "account identifier outside of a group",
            });
        }
        if self.open_account.is_some() {
            return Err(RecordError::UnclosedContainer(Container::Account));
        }

        let identifier = AccountIdentifier::from_raw(raw, position)?;
        self.counters.account = 1;
        self.open_account = Some(OpenAccount {
            identifier,
            summary: Vec::new(),
            transactions: Vec::new(),
        });
        Ok(())
    }

    fn on_transaction(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        let transaction =
            Transaction::from_raw(raw, position, self.options.ignore_unknown_type_codes)?;

        let account = self.open_account.as_mut().ok_or(RecordError::InvalidNesting {
            code: raw.code,
            reason: "transaction outside of an account",
        })?;

        self.counters.account += 1;
        debug!(sequence = transaction.sequence(), %transaction, "transaction");
        account.transactions.push(TransactionSection {
            transaction,
            summary: Vec::new(),
        });
        Ok(())
    }

    fn on_continuation(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        let continuation = Continuation::from_raw(raw, position);

        let account = self
            .open_account
            .as_mut()
            .ok_or(RecordError::InvalidContinuationPlacement)?;

        match self.previous {
            Some(RecordCode::AccountIdentifier) => account.summary.push(continuation),
            Some(RecordCode::Transaction) => account
                .transactions
                .last_mut()
                .ok_or(RecordError::InvalidContinuationPlacement)?
                .summary
                .push(continuation),
            _ => return Err(RecordError::InvalidContinuationPlacement),
        }

        self.counters.account += 1;
        Ok(())
    }

    fn on_account_trailer(
        &mut self,
        raw: &RawRecord<'_>,
        position: usize,
    ) -> Result<(), RecordError> {
        let trailer = AccountTrailer::from_raw(raw, position)?;

        let account = self.open_account.take().ok_or(RecordError::InvalidNesting {
            code: raw.code,
            reason: "account trailer without an open account",
        })?;
        // open_account существует только внутри открытой группы
        let group = self.open_group.as_mut().ok_or(RecordError::InvalidNesting {
            code: raw.code,
            reason: "account trailer outside of a group",
        })?;

        self.counters.account += 1;
        if self.options.validate
            && let Some(declared) = trailer.num_of_records
            && declared != self.counters.account
        {
            return Err(RecordError::AccountCountMismatch {
                expected: self.counters.account,
                got: declared,
            });
        }
        self.counters.account = 0;

        group.accounts.push(AccountSection {
            identifier: account.identifier,
            summary: account.summary,
            transactions: account.transactions,
            trailer,
        });
        Ok(())
    }

    fn on_group_trailer(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        let trailer = GroupTrailer::from_raw(raw, position)?;

        if self.open_account.is_some() {
            return Err(RecordError::UnclosedContainer(Container::Account));
        }
        let group = self.open_group.take().ok_or(RecordError::InvalidNesting {
            code: raw.code,
            reason: "group trailer without an open group",
        })?;

        if self.options.validate
            && let Some(declared) = trailer.num_of_records
            && declared != self.counters.group
        {
            return Err(RecordError::GroupCountMismatch {
                expected: self.counters.group,
                got: declared,
            });
        }
        self.counters.group = 0;

        self.groups.push(GroupSection {
            header: group.header,
            accounts: group.accounts,
            trailer: Some(trailer),
        });
        Ok(())
    }

    fn on_file_trailer(&mut self, raw: &RawRecord<'_>, position: usize) -> Result<(), RecordError> {
        let trailer = FileTrailer::from_raw(raw, position)?;

        if self.open_account.is_some() {
            return Err(RecordError::UnclosedContainer(Container::Account));
        }
        // пустую группу без `98` закрывает трейлер файла
        if let Some(group) = self.open_group.take() {
            if !group.accounts.is_empty() {
                return Err(RecordError::UnclosedContainer(Container::Group));
            }
            self.groups.push(GroupSection {
                header: group.header,
                accounts: group.accounts,
                trailer: None,
            });
        }

        if self.options.validate
            && let Some(declared) = trailer.num_of_records
            && declared != self.counters.file
        {
            return Err(RecordError::FileCountMismatch {
                expected: self.counters.file,
                got: declared,
            });
        }

        self.trailer = Some(trailer);
        Ok(())
    }

    /// Завершает разбор: все контейнеры должны быть закрыты
    pub(crate) fn finish(self) -> Result<Bai2Document, ParseError> {
        let header = self.header.ok_or(ParseError::EmptyInput)?;

        if self.open_account.is_some() {
            return Err(ParseError::UnclosedContainer(Container::Account));
        }
        if self.open_group.is_some() {
            return Err(ParseError::UnclosedContainer(Container::Group));
        }
        let trailer = self
            .trailer
            .ok_or(ParseError::UnclosedContainer(Container::File))?;

        Ok(Bai2Document {
            header,
            groups: self.groups,
            trailer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str], options: &ParseOptions) -> Result<Bai2Document, ParseError> {
        let mut builder = HierarchyBuilder::new(options);
        for line in lines {
            builder.push_line(line)?;
        }
        builder.finish()
    }

    fn expect_record_error(err: ParseError) -> (usize, RecordError) {
        match err {
            ParseError::Record {
                position, source, ..
            } => (position, source),
            other => panic!("expected Record error, got {other:?}"),
        }
    }

    const HEADER: &str = "01,GSBI,cont001,210706,1249,1,,,2/";
    const GROUP: &str = "02,cont001,026015079,1,230906,2000,,/";
    const ACCOUNT: &str = "03,107049924,USD,,,,,060,13053325440,,,100,000,0,,400,000,0,/";

    #[test]
    fn header_group_trailer_scenario_validates() {
        let lines = [HEADER, GROUP, "99,13060195162,1,3/"];
        let doc = build(&lines, &ParseOptions::default()).unwrap();

        assert_eq!(doc.header.sender, "GSBI");
        assert_eq!(doc.groups.len(), 1);
        assert!(doc.groups[0].trailer.is_none());
        assert_eq!(doc.trailer.num_of_records, Some(3));
        assert_eq!(doc.trailer.sequence, 3);
    }

    #[test]
    fn full_account_builds_nested_sections() {
        let lines = [
            HEADER,
            GROUP,
            ACCOUNT,
            "88,account note",
            "16,447,60000,,SPB2322984714570,1111,ACH Credit Payment,Test",
            "88,first line",
            "88,second line",
            "16,165,100/",
            "49,13053325440,7/",
            "98,13060195162,1,9/",
            "99,13060195162,1,11/",
        ];
        let doc = build(&lines, &ParseOptions::default()).unwrap();

        let account = &doc.groups[0].accounts[0];
        assert_eq!(account.summary.len(), 1);
        assert_eq!(account.summary[0].record, "account note");
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(account.transactions[0].summary.len(), 2);
        assert_eq!(account.transactions[0].summary[1].record, "second line");
        assert!(account.transactions[1].summary.is_empty());
        assert_eq!(account.trailer.num_of_records, Some(7));
        assert_eq!(doc.groups[0].trailer.as_ref().unwrap().num_of_records, Some(9));
    }

    #[test]
    fn continuation_sequence_uses_file_position() {
        let lines = [
            HEADER,
            GROUP,
            ACCOUNT,
            "88,account note",
            "49,,3/",
            "98,,1,5/",
            "99,,1,7/",
        ];
        let doc = build(&lines, &ParseOptions::default()).unwrap();

        assert_eq!(doc.groups[0].accounts[0].summary[0].sequence, 4);
    }

    #[test]
    fn account_count_mismatch_reports_counted_and_declared() {
        let lines = [
            HEADER,
            GROUP,
            ACCOUNT,
            "16,447,60000,,SPB2322984714570,1111,ACH Credit Payment,Test",
            "49,13053325440,99/",
            "98,13060195162,4,16/",
            "99,13060195162,1,7/",
        ];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();
        let (position, source) = expect_record_error(err);

        assert_eq!(position, 5);
        match source {
            RecordError::AccountCountMismatch { expected, got } => {
                // 03 + 16 + 49
                assert_eq!(expected, 3);
                assert_eq!(got, 99);
            }
            other => panic!("expected AccountCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn two_record_account_with_wrong_declared_count() {
        let lines = [
            HEADER,
            GROUP,
            "03,107049924,USD/",
            "49,13053325440,99/",
            "98,13053325440,1,4/",
            "99,13053325440,1,6/",
        ];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();
        let (position, source) = expect_record_error(err);

        assert_eq!(position, 4);
        match source {
            RecordError::AccountCountMismatch { expected, got } => {
                // 03 + 49
                assert_eq!(expected, 2);
                assert_eq!(got, 99);
            }
            other => panic!("expected AccountCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn count_mismatches_are_ignored_without_validation() {
        let lines = [
            HEADER,
            GROUP,
            ACCOUNT,
            "16,447,60000/",
            "49,13053325440,99/",
            "98,13060195162,4,16/",
            "99,13060195162,1,70/",
        ];
        let options = ParseOptions::default().with_validation(false);
        let doc = build(&lines, &options).unwrap();

        assert_eq!(doc.transaction_count(), 1);
    }

    #[test]
    fn group_count_mismatch() {
        let lines = [HEADER, GROUP, "98,0,0,3/", "99,0,1,4/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        match expect_record_error(err).1 {
            RecordError::GroupCountMismatch { expected, got } => {
                assert_eq!(expected, 2);
                assert_eq!(got, 3);
            }
            other => panic!("expected GroupCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn file_count_mismatch() {
        let lines = [HEADER, GROUP, "98,0,0,2/", "99,0,1,5/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        match expect_record_error(err).1 {
            RecordError::FileCountMismatch { expected, got } => {
                assert_eq!(expected, 4);
                assert_eq!(got, 5);
            }
            other => panic!("expected FileCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn continuation_before_any_account_is_invalid() {
        let lines = [HEADER, GROUP, "88,Some continuation data"];
        let options = ParseOptions::default().with_validation(false);
        let err = build(&lines, &options).unwrap_err();
        let (position, source) = expect_record_error(err);

        assert_eq!(position, 3);
        assert!(matches!(source, RecordError::InvalidContinuationPlacement));
    }

    #[test]
    fn continuation_after_account_trailer_is_invalid() {
        let lines = [HEADER, GROUP, ACCOUNT, "16,165,100/", "49,,3/", "88,late note"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidContinuationPlacement
        ));
    }

    #[test]
    fn continuation_right_after_file_header_is_invalid() {
        let lines = [HEADER, "88,orphan"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidContinuationPlacement
        ));
    }

    #[test]
    fn continuation_as_first_record_is_invalid_placement() {
        let lines = ["88,orphan", HEADER, "99,,0,2/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();
        let (position, source) = expect_record_error(err);

        assert_eq!(position, 1);
        assert!(matches!(source, RecordError::InvalidContinuationPlacement));
    }

    #[test]
    fn empty_continuation_attaches_to_transaction() {
        let lines = [
            HEADER,
            GROUP,
            ACCOUNT,
            "16,165,100/",
            "88/",
            "49,,4/",
            "98,,1,6/",
            "99,,1,8/",
        ];
        let doc = build(&lines, &ParseOptions::default()).unwrap();

        let section = &doc.groups[0].accounts[0].transactions[0];
        assert_eq!(section.summary.len(), 1);
        assert_eq!(section.summary[0].record, "");
        assert_eq!(section.summary[0].code(), RecordCode::Continuation);
        assert_eq!(section.transaction.sequence(), 4);
    }

    #[test]
    fn transaction_outside_account_is_invalid_nesting() {
        let lines = [HEADER, GROUP, "16,165,100/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        match expect_record_error(err).1 {
            RecordError::InvalidNesting { code, .. } => assert_eq!(code, RecordCode::Transaction),
            other => panic!("expected InvalidNesting, got {other:?}"),
        }
    }

    #[test]
    fn account_outside_group_is_invalid_nesting() {
        let lines = [HEADER, ACCOUNT];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidNesting {
                code: RecordCode::AccountIdentifier,
                ..
            }
        ));
    }

    #[test]
    fn group_trailer_with_open_account_is_unclosed() {
        let lines = [HEADER, GROUP, ACCOUNT, "98,,1,3/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::UnclosedContainer(Container::Account)
        ));
    }

    #[test]
    fn second_group_header_before_trailer_is_unclosed() {
        let lines = [HEADER, GROUP, GROUP];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::UnclosedContainer(Container::Group)
        ));
    }

    #[test]
    fn duplicate_file_header_is_rejected() {
        let lines = [HEADER, HEADER];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidNesting {
                code: RecordCode::FileHeader,
                ..
            }
        ));
    }

    #[test]
    fn record_before_file_header_is_rejected() {
        let lines = [GROUP];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidNesting {
                code: RecordCode::GroupHeader,
                ..
            }
        ));
    }

    #[test]
    fn record_after_file_trailer_is_rejected() {
        let lines = [HEADER, "99,,0,2/", GROUP];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            expect_record_error(err).1,
            RecordError::InvalidNesting { .. }
        ));
    }

    #[test]
    fn eof_with_open_account_is_unclosed() {
        let lines = [HEADER, GROUP, ACCOUNT];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnclosedContainer(Container::Account)
        ));
    }

    #[test]
    fn eof_without_file_trailer_is_unclosed() {
        let lines = [HEADER, GROUP, "98,,0,2/"];
        let err = build(&lines, &ParseOptions::default()).unwrap_err();

        assert!(matches!(err, ParseError::UnclosedContainer(Container::File)));
    }

    #[test]
    fn no_records_is_empty_input() {
        let err = build(&["", "   "], &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::EmptyInput));
    }

    #[test]
    fn blank_lines_do_not_advance_counters() {
        let lines = [HEADER, "", GROUP, "  \t", "99,13060195162,1,3/", ""];
        let doc = build(&lines, &ParseOptions::default()).unwrap();

        assert_eq!(doc.trailer.sequence, 3);
    }

    #[test]
    fn error_keeps_raw_line_without_newline() {
        let options = ParseOptions::default();
        let mut builder = HierarchyBuilder::new(&options);
        builder.push_line("01,GSBI,cont001,210706,1249,1,,,2/\n").unwrap();
        let err = builder.push_line("77,bad/\r\n").unwrap_err();

        match err {
            ParseError::Record {
                position,
                line,
                source: RecordError::UnknownRecordType(code),
            } => {
                assert_eq!(position, 2);
                assert_eq!(line, "77,bad/");
                assert_eq!(code, "77");
            }
            other => panic!("expected UnknownRecordType, got {other:?}"),
        }
    }
}
