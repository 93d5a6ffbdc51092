use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category};
use crate::ledger::{Ledger, LedgerError, LoadIssue};
use crate::storage::{keys, Storage, StorageError};

/// 화면 테마. `theme` 키에 평문("light"/"dark")으로 저장된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(s: &str) -> Theme {
        if s.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// 애플리케이션 루트가 소유하는 전체 상태. 전역 가변 상태 대신
/// 이 구조체 하나를 통해서만 원장과 테마가 바뀐다.
#[derive(Debug)]
pub struct AppState<S: Storage> {
    pub current_category: Category,
    pub theme: Theme,
    pub ledger: Ledger<S>,
}

impl<S: Storage> AppState<S> {
    /// 저장소에서 상태를 재수화한다.
    pub fn load(
        storage: S,
        default_category: Category,
    ) -> Result<(Self, Vec<LoadIssue>), StorageError> {
        debug_assert_eq!(catalog::validate_tables(), Ok(()));
        let theme = storage
            .get(keys::THEME)?
            .map(|raw| Theme::parse(&raw))
            .unwrap_or(Theme::Light);
        let (ledger, issues) = Ledger::load(storage)?;
        Ok((
            Self {
                current_category: default_category,
                theme,
                ledger,
            },
            issues,
        ))
    }

    /// 테마를 바꾸고 즉시 저장한다.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), LedgerError> {
        self.theme = theme;
        self.ledger
            .storage_mut()
            .set(keys::THEME, theme.as_str())
            .map_err(LedgerError::Storage)
    }
}
