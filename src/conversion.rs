//! 단위 변환 엔진.
//!
//! 모든 함수는 순수 함수이다. 전역 상태를 갖지 않으며 로그도 남기지 않는다.

use serde::Serialize;
use thiserror::Error;

use crate::quantity::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 분류에 속하지 않거나 알 수 없는 단위 문자열
    #[error("unknown unit '{unit}'{}", in_category(.category))]
    UnknownUnit {
        unit: String,
        category: Option<Category>,
    },
    /// 정의된 아홉 가지 온도 조합 밖의 요청
    #[error("unsupported temperature conversion: {from} -> {to}")]
    UnsupportedUnit { from: String, to: String },
    /// NaN/무한대 입력
    #[error("invalid value: {0} (must be a finite number)")]
    InvalidValue(f64),
    /// 결과가 f64 범위를 벗어남
    #[error("result of converting {value} {from} to {to} is out of range")]
    Overflow { value: f64, from: String, to: String },
    /// 두 단위가 서로 다른 분류에 속함
    #[error("units belong to different categories: {from} ({from_category}) -> {to} ({to_category})")]
    MismatchedUnits {
        from: String,
        from_category: Category,
        to: String,
        to_category: Category,
    },
}

fn in_category(category: &Option<Category>) -> String {
    match category {
        Some(c) => format!(" for {c}"),
        None => String::new(),
    }
}

/// 표시 계층이 분기할 때 쓰는 오류 종류 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UnknownUnit,
    UnsupportedUnit,
    InvalidValue,
    AmbiguousOrMismatchedUnits,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            ConversionError::UnsupportedUnit { .. } => ErrorKind::UnsupportedUnit,
            ConversionError::InvalidValue(_) | ConversionError::Overflow { .. } => {
                ErrorKind::InvalidValue
            }
            ConversionError::MismatchedUnits { .. } => ErrorKind::AmbiguousOrMismatchedUnits,
        }
    }

    fn unknown(unit: &str, category: Option<Category>) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.trim().to_string(),
            category,
        }
    }
}

/// 문자열로 전달된 단위명을 지정된 분류 안에서 해석해 환산한다.
///
/// 단위 문자열은 대소문자를 구분하지 않으며 `Meters`, `ft`, `lb`, `°C` 등을 사용할 수 있다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    let result = match category {
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            convert_length(value, from, to)
        }
        Category::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            convert_weight(value, from, to)
        }
        Category::Temperature => {
            let (from, to) = parse_temperature_pair(from_unit_str, to_unit_str)?;
            convert_temperature(value, from, to)
        }
    };
    // 유한 입력이라도 배율을 곱하면 f64 범위를 넘을 수 있다
    if !result.is_finite() {
        return Err(ConversionError::Overflow {
            value,
            from: from_unit_str.trim().to_string(),
            to: to_unit_str.trim().to_string(),
        });
    }
    Ok(result)
}

/// 두 단위 문자열만으로 분류를 추론한다.
pub fn infer_category(from_unit_str: &str, to_unit_str: &str) -> Result<Category, ConversionError> {
    let from = category_of(from_unit_str).ok_or_else(|| ConversionError::unknown(from_unit_str, None))?;
    let to = category_of(to_unit_str).ok_or_else(|| ConversionError::unknown(to_unit_str, None))?;
    if from != to {
        return Err(ConversionError::MismatchedUnits {
            from: from_unit_str.trim().to_string(),
            from_category: from,
            to: to_unit_str.trim().to_string(),
            to_category: to,
        });
    }
    Ok(from)
}

/// 분류를 추론한 뒤 변환한다.
pub fn convert_auto(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<(Category, f64), ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    let category = infer_category(from_unit_str, to_unit_str)?;
    let result = convert(category, value, from_unit_str, to_unit_str)?;
    Ok((category, result))
}

/// 단위 문자열이 속한 분류. 단위 이름은 분류 간에 겹치지 않는다.
pub fn category_of(unit: &str) -> Option<Category> {
    Category::ALL.into_iter().find(|c| c.contains(unit))
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    LengthUnit::parse(s).ok_or_else(|| ConversionError::unknown(s, Some(Category::Length)))
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    WeightUnit::parse(s).ok_or_else(|| ConversionError::unknown(s, Some(Category::Weight)))
}

fn parse_temperature_pair(
    from_s: &str,
    to_s: &str,
) -> Result<(TemperatureUnit, TemperatureUnit), ConversionError> {
    match (TemperatureUnit::parse(from_s), TemperatureUnit::parse(to_s)) {
        (Some(from), Some(to)) => Ok((from, to)),
        (from, to) => {
            // 다른 분류의 단위가 섞이면 정의되지 않은 조합이다
            for (parsed, raw) in [(from, from_s), (to, to_s)] {
                if parsed.is_none() && category_of(raw).is_none() {
                    return Err(ConversionError::unknown(raw, Some(Category::Temperature)));
                }
            }
            Err(ConversionError::UnsupportedUnit {
                from: from_s.trim().to_string(),
                to: to_s.trim().to_string(),
            })
        }
    }
}
