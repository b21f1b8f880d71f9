#[cfg(test)]
mod tests {
    use super::super::converter::{convert_length, ConversionResult, Converter};
    use crate::units::{UnitCategory, LENGTH};

    const SAMPLES: [f64; 10] = [
        0.0,
        1.0,
        -1.0,
        0.1,
        2.5,
        -2.0,
        1000.0,
        1e-9,
        123456.789,
        -731271.5117751976,
    ];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_identity_conversion_for_every_unit() {
        for name in LENGTH.list_names() {
            for x in SAMPLES {
                assert_eq!(
                    convert_length(name, name, x),
                    ConversionResult::Success { value: x },
                    "{} -> {} should be identity for {}",
                    name,
                    name,
                    x
                );
            }
        }
    }

    #[test]
    fn test_every_pair_scales_by_factor_ratio() {
        for a in LENGTH.entries() {
            for b in LENGTH.entries().iter().filter(|b| b.name != a.name) {
                for x in SAMPLES {
                    assert_eq!(
                        convert_length(a.name, b.name, x),
                        ConversionResult::Success {
                            value: x * a.factor / b.factor
                        },
                        "{} {} -> {}",
                        x,
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_returns_input() {
        for a in LENGTH.list_names() {
            for b in LENGTH.list_names() {
                for x in SAMPLES {
                    let there = convert_length(a, b, x).value().unwrap();
                    let back = convert_length(b, a, there).value().unwrap();
                    assert!(approx_eq(back, x), "{} {} -> {} -> {}: {}", x, a, b, a, back);
                }
            }
        }
    }

    #[test]
    fn test_misses_carry_all_valid_names() {
        let converter = Converter::new(UnitCategory::Length);
        for (source, target) in [("bogus", "meter"), ("meter", "bogus"), ("x", "y")] {
            match converter.convert(source, target, 1.0) {
                ConversionResult::NameNotFound { valid_units, .. }
                | ConversionResult::NamesNotFound { valid_units, .. } => {
                    assert_eq!(valid_units, "meter, millimeter, kilometer");
                }
                ConversionResult::Success { .. } => panic!("Expected a miss"),
            }
        }
    }

    #[test]
    fn test_converter_reports_its_category() {
        let converter = Converter::new(UnitCategory::Length);
        assert_eq!(converter.category(), UnitCategory::Length);
        assert_eq!(converter.table().list_names(), LENGTH.list_names());
    }
}
