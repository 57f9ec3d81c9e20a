use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_import_barcodes::{ReadTicket, SessionState};
use std::path::{Path, PathBuf};

use super::error::IngestionError;
use super::session::{IngestionSession, ReadCompletion};
use crate::shared::excel::{SheetDecoder, XlsxDecoder};

/// Executor для UseCase загрузки штрихкодов из файла
#[derive(Debug, Clone, Default)]
pub struct ImportExecutor<D = XlsxDecoder> {
    decoder: D,
}

impl ImportExecutor<XlsxDecoder> {
    pub fn new() -> Self {
        Self {
            decoder: XlsxDecoder,
        }
    }
}

impl<D: SheetDecoder> ImportExecutor<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Выбор файла + чтение + сканирование за один вызов
    pub async fn load_file(
        &self,
        session: &mut IngestionSession,
        path: &Path,
    ) -> Result<SessionState, IngestionError> {
        let file_name = display_name(path);
        let ticket = session.begin_read(&file_name);
        let completion = read_upload(ticket, path.to_path_buf()).await;
        session.complete_read(completion, &self.decoder)
    }

    /// То же для уже прочитанных байтов (например, тело HTTP-загрузки)
    pub fn load_bytes(
        &self,
        session: &mut IngestionSession,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<SessionState, IngestionError> {
        let ticket = session.begin_read(file_name);
        session.complete_read(
            ReadCompletion {
                ticket,
                bytes: Ok(bytes),
            },
            &self.decoder,
        )
    }
}

impl<D> UseCaseMetadata for ImportExecutor<D> {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_barcodes"
    }

    fn display_name() -> &'static str {
        "Загрузка штрихкодов из Excel"
    }
}

/// Чтение файла в фоне. Результат несёт билет, с которым чтение начато,
/// поэтому его можно применить к сессии позже.
pub async fn read_upload(ticket: ReadTicket, path: PathBuf) -> ReadCompletion {
    tracing::debug!("Reading {} for session {}", path.display(), ticket.session_id);
    let bytes = tokio::fs::read(&path).await;
    ReadCompletion { ticket, bytes }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
