use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::host::HostError;
use crate::i18n::{keys, Translator};
use crate::ledger::LedgerError;
use crate::state::AppState;
use crate::storage::{Storage, StorageError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 원장 조작 오류
    Ledger(LedgerError),
    /// 저장소 접근 오류
    Storage(StorageError),
    /// 호스트 채널 전송 오류
    Host(HostError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Ledger(e) => write!(f, "원장 오류: {e}"),
            AppError::Storage(e) => write!(f, "저장소 오류: {e}"),
            AppError::Host(e) => write!(f, "호스트 채널 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<LedgerError> for AppError {
    fn from(value: LedgerError) -> Self {
        AppError::Ledger(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        AppError::Storage(value)
    }
}

impl From<HostError> for AppError {
    fn from(value: HostError) -> Self {
        AppError::Host(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run<S: Storage>(
    config: &mut Config,
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Converter => ui_cli::handle_converter(tr, state)?,
            MenuChoice::Blowdown => ui_cli::handle_blowdown(tr, state)?,
            MenuChoice::Compressor => ui_cli::handle_compressor(tr, state)?,
            MenuChoice::Flow => ui_cli::handle_flow(tr, state)?,
            MenuChoice::Pipeline => ui_cli::handle_pipeline(tr, state)?,
            MenuChoice::History => ui_cli::handle_history(tr, state)?,
            MenuChoice::Favorites => ui_cli::handle_favorites(tr, state)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, state)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
