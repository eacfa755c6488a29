//! 온도 아홉 가지 조합과 거부 케이스 회귀 테스트.
use unit_conversion_toolbox::conversion::{convert, ConversionError, ErrorKind};
use unit_conversion_toolbox::quantity::Category;
use unit_conversion_toolbox::units::{convert_temperature, TemperatureUnit};

fn temp(v: f64, from: &str, to: &str) -> f64 {
    convert(Category::Temperature, v, from, to).expect("temperature conversion")
}

#[test]
fn celsius_reference_points() {
    assert_eq!(temp(0.0, "Celsius", "Fahrenheit"), 32.0);
    assert_eq!(temp(100.0, "Celsius", "Fahrenheit"), 212.0);
    assert_eq!(temp(0.0, "Celsius", "Kelvin"), 273.15);
}

#[test]
fn all_nine_pairs() {
    let v = 25.0;
    assert!((temp(v, "Celsius", "Fahrenheit") - 77.0).abs() < 1e-12);
    assert!((temp(v, "Celsius", "Kelvin") - 298.15).abs() < 1e-12);
    assert!((temp(77.0, "Fahrenheit", "Celsius") - 25.0).abs() < 1e-12);
    assert!((temp(77.0, "Fahrenheit", "Kelvin") - 298.15).abs() < 1e-9);
    assert!((temp(298.15, "Kelvin", "Celsius") - 25.0).abs() < 1e-9);
    assert!((temp(298.15, "Kelvin", "Fahrenheit") - 77.0).abs() < 1e-9);
    for unit in ["Celsius", "Fahrenheit", "Kelvin"] {
        assert_eq!(temp(-40.0, unit, unit), -40.0);
    }
}

#[test]
fn minus_forty_is_shared_by_celsius_and_fahrenheit() {
    assert!((temp(-40.0, "C", "F") + 40.0).abs() < 1e-12);
    assert!((temp(-40.0, "F", "C") + 40.0).abs() < 1e-12);
}

#[test]
fn pairs_invert_within_tolerance() {
    for a in TemperatureUnit::ALL {
        for b in TemperatureUnit::ALL {
            for v in [-273.15, -40.0, 0.0, 36.6, 451.0] {
                let back = convert_temperature(convert_temperature(v, a, b), b, a);
                assert!((back - v).abs() < 1e-9, "{a:?}->{b:?} v={v} back={back}");
            }
        }
    }
}

#[test]
fn unit_of_another_category_is_unsupported() {
    let err = convert(Category::Temperature, 10.0, "Celsius", "Meters").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedUnit);
    assert_eq!(
        err,
        ConversionError::UnsupportedUnit {
            from: "Celsius".to_string(),
            to: "Meters".to_string(),
        }
    );

    let err = convert(Category::Temperature, 10.0, "Pounds", "Kelvin").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedUnit);
}

#[test]
fn unrecognised_temperature_unit_never_passes_through() {
    let err = convert(Category::Temperature, 10.0, "Rankine", "Celsius").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUnit);
    let err = convert(Category::Temperature, 10.0, "Celsius", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUnit);
}
