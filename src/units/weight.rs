use serde::{Deserialize, Serialize};

/// 질량(무게) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Grams,
    Milligrams,
    Pounds,
    Ounces,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::Kilogram,
        WeightUnit::Grams,
        WeightUnit::Milligrams,
        WeightUnit::Pounds,
        WeightUnit::Ounces,
    ];

    /// 1 kg 이 해당 단위로 몇인지 나타내는 배율.
    pub fn scale(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Grams => 1000.0,
            WeightUnit::Milligrams => 1_000_000.0,
            WeightUnit::Pounds => 2.20462,
            WeightUnit::Ounces => 35.274,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram",
            WeightUnit::Grams => "Grams",
            WeightUnit::Milligrams => "Milligrams",
            WeightUnit::Pounds => "Pounds",
            WeightUnit::Ounces => "Ounces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Grams => "g",
            WeightUnit::Milligrams => "mg",
            WeightUnit::Pounds => "lb",
            WeightUnit::Ounces => "oz",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Some(WeightUnit::Kilogram),
            "g" | "gram" | "grams" => Some(WeightUnit::Grams),
            "mg" | "milligram" | "milligrams" => Some(WeightUnit::Milligrams),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Ounces),
            _ => None,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value * to.scale() / from.scale()
}
