use chrono::{NaiveDate, Utc};
use contracts::domain::a001_barcode_record::BarcodeRecord;
use contracts::usecases::u501_import_barcodes::{
    BlockReason, CommitReceipt, IngestionForm, ReadTicket, ScanResult, SessionState,
};
use uuid::Uuid;

use super::customer_name::extract_name;
use super::error::IngestionError;
use super::scanner::scan;
use crate::domain::a001_barcode_record::BarcodeRegistry;
use crate::shared::config::ImportConfig;
use crate::shared::excel::SheetDecoder;
use crate::shared::logger;

/// Результат асинхронного чтения файла, привязанный к билету
#[derive(Debug)]
pub struct ReadCompletion {
    pub ticket: ReadTicket,
    pub bytes: std::io::Result<Vec<u8>>,
}

/// Подготовленные к фиксации данные одной загрузки
#[derive(Debug, Clone, PartialEq)]
pub struct StagedUpload {
    pub file_name: String,
    pub scan: ScanResult,
    /// Имя клиента, найденное в заголовке или имени файла (может быть пустым)
    pub derived_customer_name: String,
}

/// Сессия загрузки файла со штрихкодами.
///
/// Idle -> Reading -> Ready | Blocked -> (commit) -> Idle. Выбор нового
/// файла в любом состоянии заменяет подготовленные данные.
#[derive(Debug, Clone, Default)]
pub struct IngestionSession {
    config: ImportConfig,
    current: Option<ReadTicket>,
    staged: Option<StagedUpload>,
    form: IngestionForm,
}

impl IngestionSession {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.current, &self.staged) {
            (None, _) => SessionState::Idle,
            (Some(_), None) => SessionState::Reading,
            (Some(_), Some(_)) => {
                if self.blocking_reasons().is_empty() {
                    SessionState::Ready
                } else {
                    SessionState::Blocked
                }
            }
        }
    }

    pub fn can_commit(&self) -> bool {
        self.state() == SessionState::Ready
    }

    pub fn staged(&self) -> Option<&StagedUpload> {
        self.staged.as_ref()
    }

    pub fn form(&self) -> &IngestionForm {
        &self.form
    }

    pub fn current_ticket(&self) -> Option<&ReadTicket> {
        self.current.as_ref()
    }

    /// Все причины, по которым фиксация сейчас запрещена
    pub fn blocking_reasons(&self) -> Vec<BlockReason> {
        let mut reasons = Vec::new();
        if let Some(staged) = &self.staged {
            if !staged.scan.invalid.is_empty() {
                reasons.push(BlockReason::InvalidBarcodes {
                    count: staged.scan.invalid.len(),
                });
            }
            if !staged.scan.duplicate.is_empty() {
                reasons.push(BlockReason::DuplicateBarcodes {
                    count: staged.scan.duplicate.len(),
                });
            }
        }
        for field in self.form.missing_required() {
            reasons.push(BlockReason::MissingField {
                field: field.to_string(),
            });
        }
        reasons
    }

    // ------------------------------------------------------------------
    // Форма
    // ------------------------------------------------------------------

    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.form.customer_name = value.into();
    }

    pub fn set_allocation_date(&mut self, value: Option<NaiveDate>) {
        self.form.allocation_date = value;
    }

    pub fn set_pdi_date(&mut self, value: Option<NaiveDate>) {
        self.form.pdi_date = value;
    }

    pub fn set_indent_number(&mut self, value: impl Into<String>) {
        self.form.indent_number = value.into();
    }

    // ------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------

    /// Пользователь выбрал файл. Подготовленные данные прошлого файла
    /// сбрасываются, незавершённое чтение станет устаревшим. Введённые
    /// пользователем поля формы сохраняются.
    pub fn begin_read(&mut self, file_name: &str) -> ReadTicket {
        let ticket = ReadTicket {
            session_id: Uuid::new_v4(),
            file_name: file_name.to_string(),
        };

        if let Some(previous) = &self.current {
            tracing::info!(
                "Upload {} replaced by new file selection",
                previous.session_id
            );
        }

        self.current = Some(ticket.clone());
        self.staged = None;

        tracing::info!("Reading {} (session {})", file_name, ticket.session_id);
        ticket
    }

    /// Завершение чтения: декодирование, сканирование, заполнение имени клиента.
    ///
    /// Результат с чужим билетом отбрасывается без изменений состояния.
    /// Ошибка чтения или декодирования возвращает сессию в Idle.
    pub fn complete_read<D: SheetDecoder>(
        &mut self,
        completion: ReadCompletion,
        decoder: &D,
    ) -> Result<SessionState, IngestionError> {
        if self.current.as_ref() != Some(&completion.ticket) {
            tracing::warn!(
                "Discarding stale read of {} (session {})",
                completion.ticket.file_name,
                completion.ticket.session_id
            );
            return Err(IngestionError::StaleRead);
        }

        let file_name = completion.ticket.file_name;

        let bytes = match completion.bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to read {}: {}", file_name, e);
                self.reset();
                return Err(IngestionError::Io(e));
            }
        };

        let grid = match decoder.decode_first_sheet(&bytes) {
            Ok(grid) => grid,
            Err(source) => {
                tracing::error!("Failed to decode {}: {}", file_name, source);
                self.reset();
                return Err(IngestionError::Decoding { file_name, source });
            }
        };

        let scan = scan(&grid);
        let derived_customer_name = extract_name(&file_name, grid.heading().unwrap_or(""));

        if derived_customer_name.is_empty() {
            tracing::info!("Customer name not found in {}, manual entry required", file_name);
        } else {
            self.form.customer_name = derived_customer_name.clone();
        }

        self.staged = Some(StagedUpload {
            file_name,
            scan,
            derived_customer_name,
        });

        Ok(self.state())
    }

    /// Фиксация: по одной записи на каждый валидный штрихкод, с общими
    /// метаданными формы и одним общим временем загрузки.
    pub fn commit(
        &mut self,
        registry: &mut BarcodeRegistry,
    ) -> Result<CommitReceipt, IngestionError> {
        let (ticket, staged) = match (&self.current, &self.staged) {
            (Some(ticket), Some(staged)) => (ticket, staged),
            _ => return Err(IngestionError::NoFileLoaded),
        };

        if staged.scan.has_issues() {
            let limit = self.config.issue_display_limit;
            let mut details = staged.scan.invalid_lines(limit);
            details.extend(staged.scan.duplicate_lines(limit));
            return Err(IngestionError::ScanIssues {
                invalid: staged.scan.invalid.len(),
                duplicate: staged.scan.duplicate.len(),
                details,
            });
        }

        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(IngestionError::MissingRequiredFields(missing));
        }

        let timestamp = Utc::now();
        let customer_name = self.form.customer_name.trim().to_string();
        let allocation_date = format_form_date(self.form.allocation_date);
        let pdi_date = format_form_date(self.form.pdi_date);

        let records: Vec<BarcodeRecord> = staged
            .scan
            .valid
            .iter()
            .map(|barcode| BarcodeRecord {
                barcode: barcode.clone(),
                customer_name: customer_name.clone(),
                allocation_date: allocation_date.clone(),
                pdi_date: pdi_date.clone(),
                indent_number: self.form.indent_number.clone(),
                timestamp,
            })
            .collect();

        let receipt = CommitReceipt {
            session_id: ticket.session_id,
            file_name: staged.file_name.clone(),
            committed: records.len(),
            timestamp,
        };

        registry.append(records);
        self.reset();

        logger::log(
            "u501",
            &format!(
                "Committed {} barcodes from {} for {} at {}",
                receipt.committed, receipt.file_name, customer_name, timestamp
            ),
        );

        Ok(receipt)
    }

    /// Закрытие диалога без фиксации
    pub fn cancel(&mut self) {
        if let Some(ticket) = &self.current {
            tracing::info!("Upload {} cancelled", ticket.session_id);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.current = None;
        self.staged = None;
        self.form = IngestionForm::default();
    }
}

fn format_form_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::excel::{CellValue, CodecError, Grid};

    /// Декодер, возвращающий заранее заданный лист (или ошибку на пустых байтах)
    struct FixedGrid(Grid);

    impl SheetDecoder for FixedGrid {
        fn decode_first_sheet(&self, bytes: &[u8]) -> Result<Grid, CodecError> {
            if bytes.is_empty() {
                return Err(CodecError::Open("empty file".into()));
            }
            Ok(self.0.clone())
        }
    }

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    fn clean_grid() -> FixedGrid {
        FixedGrid(Grid::from_rows(vec![
            vec![s("100W - 50 NOS Acme Corp")],
            vec![s("ICON0000000000001")],
            vec![s("ICON0000000000002")],
            vec![s("ICON123A0123456789")],
        ]))
    }

    fn dirty_grid() -> FixedGrid {
        FixedGrid(Grid::from_rows(vec![
            vec![s("ICON0000000000001"), s("ICONXYZ")],
            vec![s("ICON0000000000001")],
        ]))
    }

    fn date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, 15)
    }

    fn load(session: &mut IngestionSession, decoder: &FixedGrid, file_name: &str) -> SessionState {
        let ticket = session.begin_read(file_name);
        session
            .complete_read(
                ReadCompletion {
                    ticket,
                    bytes: Ok(vec![1]),
                },
                decoder,
            )
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = IngestionSession::new(ImportConfig::default());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.can_commit());
    }

    #[test]
    fn test_reading_until_completion() {
        let mut session = IngestionSession::new(ImportConfig::default());
        session.begin_read("file.xlsx");
        assert_eq!(session.state(), SessionState::Reading);
    }

    #[test]
    fn test_clean_file_blocked_until_allocation_date() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let state = load(&mut session, &clean_grid(), "barcodes.xlsx");

        assert_eq!(state, SessionState::Blocked);
        assert_eq!(session.form().customer_name, "Acme Corp");
        assert_eq!(
            session.blocking_reasons(),
            vec![BlockReason::MissingField {
                field: "allocationDate".into()
            }]
        );

        session.set_allocation_date(date());
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[test]
    fn test_commit_creates_records_with_shared_timestamp() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let mut registry = BarcodeRegistry::new();
        load(&mut session, &clean_grid(), "barcodes.xlsx");
        session.set_allocation_date(date());
        session.set_pdi_date(NaiveDate::from_ymd_opt(2024, 4, 1));
        session.set_indent_number("IND-9");

        let receipt = session.commit(&mut registry).unwrap();

        assert_eq!(receipt.committed, 3);
        assert_eq!(receipt.file_name, "barcodes.xlsx");
        assert_eq!(
            registry.barcodes(),
            vec!["ICON0000000000001", "ICON0000000000002", "ICON123A0123456789"]
        );
        for record in registry.records() {
            assert_eq!(record.timestamp, receipt.timestamp);
            assert_eq!(record.customer_name, "Acme Corp");
            assert_eq!(record.allocation_date, "2024-03-15");
            assert_eq!(record.pdi_date, "2024-04-01");
            assert_eq!(record.indent_number, "IND-9");
        }
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_missing_fields_keep_state() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let mut registry = BarcodeRegistry::new();
        let decoder = FixedGrid(Grid::from_rows(vec![vec![s("ICON0000000000001")]]));
        load(&mut session, &decoder, "plain.xlsx");
        session.set_customer_name("   ");

        match session.commit(&mut registry) {
            Err(IngestionError::MissingRequiredFields(fields)) => {
                assert_eq!(fields, vec!["customerName", "allocationDate"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(registry.is_empty());
        assert_eq!(session.state(), SessionState::Blocked);

        // Восстановимо: заполняем и повторяем
        session.set_customer_name("Acme Corp");
        session.set_allocation_date(date());
        assert_eq!(session.commit(&mut registry).unwrap().committed, 1);
        assert_eq!(registry.records()[0].pdi_date, "");
    }

    #[test]
    fn test_scan_issues_block_commit() {
        let mut session = IngestionSession::new(ImportConfig {
            issue_display_limit: 1,
        });
        let mut registry = BarcodeRegistry::new();
        load(&mut session, &dirty_grid(), "dirty.xlsx");
        session.set_customer_name("Acme Corp");
        session.set_allocation_date(date());

        assert_eq!(session.state(), SessionState::Blocked);
        assert_eq!(
            session.blocking_reasons(),
            vec![
                BlockReason::InvalidBarcodes { count: 1 },
                BlockReason::DuplicateBarcodes { count: 1 },
            ]
        );

        match session.commit(&mut registry) {
            Err(IngestionError::ScanIssues {
                invalid,
                duplicate,
                details,
            }) => {
                assert_eq!((invalid, duplicate), (1, 1));
                assert_eq!(details, vec!["B1: ICONXYZ", "A2: ICON0000000000001"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_commit_without_file() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let mut registry = BarcodeRegistry::new();
        assert!(matches!(
            session.commit(&mut registry),
            Err(IngestionError::NoFileLoaded)
        ));
        session.begin_read("pending.xlsx");
        assert!(matches!(
            session.commit(&mut registry),
            Err(IngestionError::NoFileLoaded)
        ));
    }

    #[test]
    fn test_stale_read_is_discarded() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let first = session.begin_read("first.xlsx");
        let second = session.begin_read("second.xlsx");

        let stale = session.complete_read(
            ReadCompletion {
                ticket: first,
                bytes: Ok(vec![1]),
            },
            &dirty_grid(),
        );
        assert!(matches!(stale, Err(IngestionError::StaleRead)));
        assert_eq!(session.state(), SessionState::Reading);
        assert_eq!(session.current_ticket(), Some(&second));

        let state = session
            .complete_read(
                ReadCompletion {
                    ticket: second,
                    bytes: Ok(vec![1]),
                },
                &clean_grid(),
            )
            .unwrap();
        assert_eq!(state, SessionState::Blocked);
        assert_eq!(session.staged().unwrap().file_name, "second.xlsx");
    }

    #[test]
    fn test_reselect_replaces_staged_data_keeps_form() {
        let mut session = IngestionSession::new(ImportConfig::default());
        load(&mut session, &dirty_grid(), "dirty.xlsx");
        session.set_indent_number("IND-1");
        session.set_customer_name("Manual");

        load(&mut session, &clean_grid(), "clean.xlsx");

        let staged = session.staged().unwrap();
        assert_eq!(staged.file_name, "clean.xlsx");
        assert!(!staged.scan.has_issues());
        assert_eq!(session.form().indent_number, "IND-1");
        // Найденное имя перекрывает введённое
        assert_eq!(session.form().customer_name, "Acme Corp");
    }

    #[test]
    fn test_form_entered_before_file_survives_read() {
        let mut session = IngestionSession::new(ImportConfig::default());
        session.set_customer_name("Typed Name");
        session.set_allocation_date(date());
        session.set_indent_number("IND-1");

        let decoder = FixedGrid(Grid::from_rows(vec![vec![s("ICON0000000000001")]]));
        let state = load(&mut session, &decoder, "plain.xlsx");

        assert_eq!(state, SessionState::Ready);
        assert_eq!(
            session.form(),
            &IngestionForm {
                customer_name: "Typed Name".into(),
                allocation_date: date(),
                pdi_date: None,
                indent_number: "IND-1".into(),
            }
        );
        assert_eq!(session.staged().unwrap().derived_customer_name, "");
    }

    #[test]
    fn test_decoding_failure_returns_to_idle() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let ticket = session.begin_read("broken.xlsx");
        let result = session.complete_read(
            ReadCompletion {
                ticket,
                bytes: Ok(Vec::new()),
            },
            &clean_grid(),
        );

        assert!(matches!(result, Err(IngestionError::Decoding { .. })));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_io_failure_returns_to_idle() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let ticket = session.begin_read("gone.xlsx");
        let result = session.complete_read(
            ReadCompletion {
                ticket,
                bytes: Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            },
            &clean_grid(),
        );

        assert!(matches!(result, Err(IngestionError::Io(_))));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_cancel() {
        let mut session = IngestionSession::new(ImportConfig::default());
        load(&mut session, &clean_grid(), "barcodes.xlsx");
        session.cancel();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.form(), &IngestionForm::default());
    }

    #[test]
    fn test_sheet_without_barcodes_commits_nothing() {
        let mut session = IngestionSession::new(ImportConfig::default());
        let mut registry = BarcodeRegistry::new();
        let decoder = FixedGrid(Grid::from_rows(vec![vec![s("just text")]]));
        load(&mut session, &decoder, "100W-5 NOS Acme.xlsx");
        session.set_allocation_date(date());

        let receipt = session.commit(&mut registry).unwrap();
        assert_eq!(receipt.committed, 0);
        assert!(registry.is_empty());
    }
}
