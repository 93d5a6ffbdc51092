//! 변환 엔진 회귀 테스트.
use gas_engineering_toolbox::catalog::{self, Category, Strategy};
use gas_engineering_toolbox::conversion::{convert, format_result, ConversionError};

#[test]
fn tables_are_consistent() {
    assert_eq!(catalog::validate_tables(), Ok(()));
}

#[test]
fn default_pair_picks_two_distinct_units() {
    for category in Category::ALL {
        let units = category.units();
        if units.len() >= 2 {
            let (a, b) = catalog::default_pair(category).expect("pair");
            assert_eq!(a.id, units[0].id);
            assert_eq!(b.id, units[1].id);
            assert_ne!(a.id, b.id, "{}", category.as_str());
        }
    }
}

#[test]
fn linear_round_trip_all_pairs() {
    let x = 12.5;
    for category in Category::ALL {
        if category.strategy() != Strategy::LinearFactor {
            continue;
        }
        for a in category.units() {
            for b in category.units() {
                let there = convert(category, x, a.id, b.id).expect("convert");
                let back = convert(category, there, b.id, a.id).expect("convert back");
                assert!(
                    (back - x).abs() < 1e-9,
                    "{}: {} -> {} -> {}",
                    category.as_str(),
                    a.id,
                    b.id,
                    back
                );
            }
        }
    }
}

#[test]
fn km_to_mile() {
    let miles = convert(Category::Length, 1.0, "km", "mile").expect("convert");
    assert!((miles - 0.621371).abs() < 1e-6, "got {miles}");
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(convert(Category::Temperature, 0.0, "c", "f").unwrap(), 32.0);
    assert_eq!(
        convert(Category::Temperature, 100.0, "c", "k").unwrap(),
        373.15
    );
    assert_eq!(convert(Category::Temperature, 32.0, "f", "c").unwrap(), 0.0);
}

#[test]
fn temperature_round_trip() {
    for unit in ["c", "f", "k"] {
        let out = convert(Category::Temperature, 21.5, "c", unit).unwrap();
        let back = convert(Category::Temperature, out, unit, "c").unwrap();
        assert!((back - 21.5).abs() < 1e-9);
    }
}

#[test]
fn unknown_unit_is_reported() {
    match convert(Category::Length, 1.0, "furlong", "m") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}

#[test]
fn currency_direct_rate() {
    let rub = convert(Category::Currency, 100.0, "USD", "RUB").unwrap();
    assert!((rub - 9000.0).abs() < 1e-9);
}

#[test]
fn currency_inverse_rate() {
    // USD→JPY 148 만 있으므로 JPY→USD 는 역방향 나눗셈으로 풀린다.
    let usd = convert(Category::Currency, 148.0, "JPY", "USD").unwrap();
    assert!((usd - 1.0).abs() < 1e-9);
}

#[test]
fn currency_same_unit_short_circuits() {
    let v = convert(Category::Currency, 5.5, "USD", "USD").unwrap();
    assert_eq!(v, 5.5);
}

#[test]
fn currency_missing_rate_is_reported() {
    match convert(Category::Currency, 1.0, "GBP", "JPY") {
        Err(ConversionError::MissingRate { from, to }) => {
            assert_eq!(from, "GBP");
            assert_eq!(to, "JPY");
        }
        other => panic!("expected MissingRate, got {other:?}"),
    }
}

#[test]
fn generic_formatting_strips_trailing_zeros() {
    assert_eq!(format_result(Category::Length, 0.6213712), "0.621371");
    assert_eq!(format_result(Category::Length, 100.0), "100");
    assert_eq!(format_result(Category::Length, 1.5), "1.5");
}

#[test]
fn currency_formatting_keeps_two_digits() {
    assert_eq!(format_result(Category::Currency, 90.0), "90.00");
    assert_eq!(format_result(Category::Currency, 1.237), "1.24");
}
