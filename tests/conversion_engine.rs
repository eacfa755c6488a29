//! 선형(길이/무게) 변환 엔진의 성질 테스트.
use unit_conversion_toolbox::conversion::{convert, ConversionError, ErrorKind};
use unit_conversion_toolbox::quantity::{Category, Quantity};
use unit_conversion_toolbox::units::{LengthUnit, WeightUnit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

const SAMPLES: [f64; 6] = [0.0, 1.0, -2.5, 12.75, 1234.5678, 1.0e-6];

fn linear_units(category: Category) -> Vec<&'static str> {
    category.unit_names()
}

#[test]
fn same_unit_is_exact_identity() {
    for category in [Category::Length, Category::Weight] {
        for unit in linear_units(category) {
            for v in SAMPLES {
                let out = convert(category, v, unit, unit).expect("identity");
                assert_eq!(out, v, "{category} {unit}");
            }
        }
    }
}

#[test]
fn conversions_invert_within_tolerance() {
    for category in [Category::Length, Category::Weight] {
        let units = linear_units(category);
        for a in &units {
            for b in &units {
                for v in SAMPLES {
                    let there = convert(category, v, a, b).expect("forward");
                    let back = convert(category, there, b, a).expect("backward");
                    assert_close(&format!("{a}->{b}->{a}"), back, v, 1e-9);
                }
            }
        }
    }
}

#[test]
fn known_fixed_points() {
    assert_close("m->ft", convert(Category::Length, 1.0, "Meters", "Feet").unwrap(), 3.28084, 1e-12);
    assert_close(
        "kg->lb",
        convert(Category::Weight, 1.0, "Kilogram", "Pounds").unwrap(),
        2.20462,
        1e-12,
    );
    assert_close("km->m", convert(Category::Length, 2.0, "Kilometers", "Meters").unwrap(), 2000.0, 1e-12);
    assert_close("g->mg", convert(Category::Weight, 3.0, "Grams", "Milligrams").unwrap(), 3000.0, 1e-12);
    assert_close("kg->oz", convert(Category::Weight, 1.0, "kg", "oz").unwrap(), 35.274, 1e-12);
    assert_close("m->in", convert(Category::Length, 1.0, "m", "in").unwrap(), 39.3701, 1e-12);
}

#[test]
fn uses_single_scale_ratio() {
    let v = 7.5;
    let out = convert(Category::Length, v, "Feet", "Miles").unwrap();
    let expected = v * LengthUnit::Miles.scale() / LengthUnit::Feet.scale();
    assert_eq!(out, expected);

    let out = convert(Category::Weight, v, "Ounces", "Pounds").unwrap();
    let expected = v * WeightUnit::Pounds.scale() / WeightUnit::Ounces.scale();
    assert_eq!(out, expected);
}

#[test]
fn chained_conversion_is_transitive() {
    for v in SAMPLES {
        let km = convert(Category::Length, v, "Meters", "Kilometers").unwrap();
        let miles = convert(Category::Length, km, "Kilometers", "Miles").unwrap();
        let direct = convert(Category::Length, v, "Meters", "Miles").unwrap();
        assert_close("m->km->mi", miles, direct, 1e-9);
    }
}

#[test]
fn negative_values_are_converted() {
    let out = convert(Category::Length, -10.0, "Meters", "Centimeters").unwrap();
    assert_close("negative", out, -1000.0, 1e-12);
}

#[test]
fn scale_factors_are_positive_and_base_is_one() {
    assert_eq!(LengthUnit::Meters.scale(), 1.0);
    assert_eq!(WeightUnit::Kilogram.scale(), 1.0);
    for u in LengthUnit::ALL {
        assert!(u.scale().is_finite() && u.scale() > 0.0, "{u:?}");
    }
    for u in WeightUnit::ALL {
        assert!(u.scale().is_finite() && u.scale() > 0.0, "{u:?}");
    }
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(Category::Length, 5.0, "Meters", "Lightyears").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUnit);
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            unit: "Lightyears".to_string(),
            category: Some(Category::Length),
        }
    );
    assert!(err.to_string().contains("Lightyears"));
}

#[test]
fn unit_from_other_category_is_unknown_for_linear() {
    let err = convert(Category::Weight, 1.0, "Meters", "Pounds").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUnit);
    let err = convert(Category::Length, 1.0, "Meters", "Celsius").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUnit);
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for category in Category::ALL {
            let units = category.unit_names();
            let err = convert(category, v, units[0], units[1]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
        }
    }
}

#[test]
fn quantity_delegates_to_engine() {
    let q = Quantity::new(3.0, "Yards", "Feet");
    let out = q.convert_in(Category::Length).unwrap();
    assert_close("yd->ft", out, 3.0 * 3.28084 / 1.09361, 1e-12);
}

#[test]
fn engine_is_callable_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                convert(Category::Weight, i as f64, "Kilogram", "Grams").unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), i as f64 * 1000.0);
    }
}

#[test]
fn overflowing_result_is_rejected() {
    let err = convert(Category::Length, 1e306, "Kilometers", "Millimeters").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert!(matches!(err, ConversionError::Overflow { .. }), "{err}");

    let err = convert(Category::Weight, f64::MAX, "Kilogram", "Milligrams").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    // 범위 안의 큰 값은 왕복 변환이 그대로 성립한다
    let v = 1e300;
    let mm = convert(Category::Length, v, "Kilometers", "Millimeters").expect("in range");
    let back = convert(Category::Length, mm, "Millimeters", "Kilometers").expect("back");
    assert_close("km->mm->km", back / v, 1.0, 1e-9);
}
