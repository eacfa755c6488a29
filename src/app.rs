use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::assistant::AssistantError;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    /// 어시스턴트 오류
    #[error("assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(console, tr)?;
        debug!(?choice, "menu selected");
        let handled = match choice {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(console, tr, config),
            MenuChoice::ReferenceTable => ui_cli::handle_reference_table(console, tr),
            MenuChoice::Assistant => ui_cli::handle_assistant(console, tr, config),
            MenuChoice::Settings => ui_cli::handle_settings(console, tr, config).and_then(|()| {
                config.save(config_path)?;
                info!(path = %config_path.display(), "config saved");
                Ok(())
            }),
            MenuChoice::Exit => break,
        };
        match handled {
            Ok(()) => {}
            // 하위 메뉴에서 입력이 끝나도 메인 메뉴와 같이 종료한다
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                debug!("input closed inside a sub-menu");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    config.save(config_path)?;
    console.say(tr.t(i18n::keys::APP_EXIT))?;
    Ok(())
}
