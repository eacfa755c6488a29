use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Miles,
    Yards,
    Inches,
    Feet,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Centimeters,
        LengthUnit::Millimeters,
        LengthUnit::Miles,
        LengthUnit::Yards,
        LengthUnit::Inches,
        LengthUnit::Feet,
    ];

    /// 1 m 가 해당 단위로 몇인지 나타내는 배율.
    pub fn scale(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 0.001,
            LengthUnit::Centimeters => 100.0,
            LengthUnit::Millimeters => 1000.0,
            LengthUnit::Miles => 0.000621371,
            LengthUnit::Yards => 1.09361,
            LengthUnit::Inches => 39.3701,
            LengthUnit::Feet => 3.28084,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "Meters",
            LengthUnit::Kilometers => "Kilometers",
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Millimeters => "Millimeters",
            LengthUnit::Miles => "Miles",
            LengthUnit::Yards => "Yards",
            LengthUnit::Inches => "Inches",
            LengthUnit::Feet => "Feet",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Millimeters => "mm",
            LengthUnit::Miles => "mi",
            LengthUnit::Yards => "yd",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
        }
    }

    /// 단위 문자열을 대소문자 구분 없이 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(LengthUnit::Kilometers)
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(LengthUnit::Centimeters)
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Some(LengthUnit::Millimeters)
            }
            "mi" | "mile" | "miles" => Some(LengthUnit::Miles),
            "yd" | "yard" | "yards" => Some(LengthUnit::Yards),
            "in" | "inch" | "inches" | "\"" => Some(LengthUnit::Inches),
            "ft" | "foot" | "feet" | "'" => Some(LengthUnit::Feet),
            _ => None,
        }
    }
}

/// 길이를 다른 단위로 변환한다. `value * scale(to) / scale(from)` 한 번으로 계산한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * to.scale() / from.scale()
}
