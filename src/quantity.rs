use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionError};
use crate::units::{LengthUnit, TemperatureUnit, WeightUnit};

/// 변환 가능한 물리량 분류. 닫힌 집합이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// 분류 이름을 대소문자 구분 없이 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Some(Category::Length),
            "weight" | "mass" => Some(Category::Weight),
            "temperature" | "temp" => Some(Category::Temperature),
            _ => None,
        }
    }

    /// 분류에 속한 단위의 표준 이름 목록.
    pub fn unit_names(self) -> Vec<&'static str> {
        match self {
            Category::Length => LengthUnit::ALL.iter().map(|u| u.name()).collect(),
            Category::Weight => WeightUnit::ALL.iter().map(|u| u.name()).collect(),
            Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        }
    }

    /// 주어진 단위 문자열이 이 분류에 속하는지 확인한다.
    pub fn contains(self, unit: &str) -> bool {
        match self {
            Category::Length => LengthUnit::parse(unit).is_some(),
            Category::Weight => WeightUnit::parse(unit).is_some(),
            Category::Temperature => TemperatureUnit::parse(unit).is_some(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 한 번의 변환 요청. (값, 입력 단위, 변환 단위)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<'a> {
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

impl<'a> Quantity<'a> {
    pub fn new(value: f64, from_unit: &'a str, to_unit: &'a str) -> Self {
        Self {
            value,
            from_unit,
            to_unit,
        }
    }

    /// 지정한 분류 안에서 변환한다.
    pub fn convert_in(&self, category: Category) -> Result<f64, ConversionError> {
        conversion::convert(category, self.value, self.from_unit, self.to_unit)
    }
}
