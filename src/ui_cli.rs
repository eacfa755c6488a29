use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::debug;

use crate::app::AppError;
use crate::assistant::{Assistant, Gated, PlaceholderAssistant};
use crate::config::{Config, MAX_DECIMALS};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::{Category, Quantity};
use crate::reference;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    ReferenceTable,
    Assistant,
    Settings,
    Exit,
}

/// 입력/출력 스트림 묶음. 테스트에서는 메모리 버퍼를 넣어 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 한 줄을 출력한다.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn require_line(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    fn read_f64(&mut self, prompt: &str, tr: &Translator) -> io::Result<f64> {
        loop {
            let s = self.require_line(prompt)?;
            match s.parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say(tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 처리한다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_REFERENCE_TABLE,
        keys::MAIN_MENU_ASSISTANT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        console.say(tr.t(key))?;
    }
    loop {
        let Some(sel) = console.read_line(tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::ReferenceTable),
            "3" => return Ok(MenuChoice::Assistant),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 변환 오류는 화면에 표시하고 메뉴로 돌아간다.
pub fn handle_unit_conversion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    cfg: &Config,
) -> Result<(), AppError> {
    console.say(tr.t(keys::UNIT_CONVERSION_HEADING))?;
    console.say(tr.t(keys::UNIT_CONVERSION_OPTIONS))?;
    let category = loop {
        let sel = console.require_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if sel.is_empty() {
            break cfg.default_category;
        }
        if let Some(category) = map_category(&sel) {
            break category;
        }
        console.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
    };
    console.say(&format!(
        "{} {}",
        tr.t(keys::UNIT_CONVERSION_AVAILABLE_UNITS),
        category.unit_names().join(", ")
    ))?;

    let value = console.read_f64(tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE), tr)?;
    let (default_from, default_to) = cfg.default_units.names_for(category);
    let from_unit = or_default(
        console.require_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?,
        default_from,
    );
    let to_unit = or_default(
        console.require_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?,
        default_to,
    );

    debug!(%category, value, from = %from_unit, to = %to_unit, "converting");
    match Quantity::new(value, &from_unit, &to_unit).convert_in(category) {
        Ok(result) => console.say(&format!(
            "{} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            format_result(result, cfg.decimals, &to_unit)
        ))?,
        Err(err) => {
            debug!(kind = ?err.kind(), "conversion rejected: {err}");
            console.say(&format!("{} {err}", tr.t(keys::UNIT_CONVERSION_FAILED)))?;
        }
    }
    Ok(())
}

/// 참고표를 출력한다.
pub fn handle_reference_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<(), AppError> {
    console.say(tr.t(keys::REFERENCE_HEADING))?;
    console.say(&reference::render_table(reference::REFERENCE_TABLE))?;
    Ok(())
}

/// 어시스턴트 질문/응답을 한 번 처리한다.
pub fn handle_assistant<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    cfg: &Config,
) -> Result<(), AppError> {
    console.say(tr.t(keys::ASSISTANT_HEADING))?;
    let query = console.require_line(tr.t(keys::ASSISTANT_PROMPT))?;
    let assistant = Gated::new(PlaceholderAssistant, cfg.assistant_enabled);
    match assistant.ask(&query) {
        Ok(answer) => console.say(&answer)?,
        Err(err) => console.say(&format!("⚠️ {}: {err}", tr.t(keys::ERROR_PREFIX)))?,
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    cfg: &mut Config,
) -> Result<(), AppError> {
    console.say(tr.t(keys::SETTINGS_HEADING))?;
    console.say(&format!(
        "{} decimals={}, category={}, language={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.decimals,
        cfg.default_category,
        cfg.language
    ))?;
    console.say(tr.t(keys::SETTINGS_OPTIONS))?;
    let sel = console.require_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.as_str() {
        "" => return Ok(()),
        "1" => {
            let s = console.require_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
            match s.parse::<usize>() {
                Ok(d) if d <= MAX_DECIMALS => {
                    cfg.decimals = d;
                    true
                }
                _ => false,
            }
        }
        "2" => {
            console.say(tr.t(keys::UNIT_CONVERSION_OPTIONS))?;
            let s = console.require_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
            match map_category(&s) {
                Some(c) => {
                    cfg.default_category = c;
                    true
                }
                None => false,
            }
        }
        "3" => {
            let s = console.require_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match s.to_lowercase().as_str() {
                code @ ("auto" | "ko" | "en") => {
                    cfg.language = code.to_string();
                    true
                }
                _ => false,
            }
        }
        _ => false,
    };
    console.say(tr.t(if changed {
        keys::SETTINGS_SAVED
    } else {
        keys::SETTINGS_INVALID
    }))?;
    Ok(())
}

/// 메뉴 번호 또는 분류 이름을 분류로 바꾼다.
pub fn map_category(sel: &str) -> Option<Category> {
    match sel.trim() {
        "1" => Some(Category::Length),
        "2" => Some(Category::Weight),
        "3" => Some(Category::Temperature),
        other => Category::parse(other),
    }
}

/// 변환 결과를 지정한 소수점 자리수로 표시한다.
pub fn format_result(value: f64, decimals: usize, unit: &str) -> String {
    format!("{value:.decimals$} {unit}")
}

fn or_default(input: String, default: &str) -> String {
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

/// 한 번의 비대화형 변환. 분류가 없으면 단위로 추론한다.
pub fn convert_once(
    category: Option<Category>,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<(Category, f64), AppError> {
    let converted = match category {
        Some(c) => (c, conversion::convert(c, value, from_unit, to_unit)?),
        None => conversion::convert_auto(value, from_unit, to_unit)?,
    };
    Ok(converted)
}
