// Display rendering, checked against the fixed cases and as properties
use numcal::*;
use proptest::prelude::*;

#[test]
fn zero_has_no_sign() {
    assert_eq!(render(0.0).as_str(), "0");
    assert_eq!(render(-0.0).as_str(), "0");
}

#[test]
fn non_finite_is_undefined() {
    assert_eq!(render(f64::NAN).as_str(), "Undefined");
    assert_eq!(render(f64::INFINITY).as_str(), "Undefined");
    assert_eq!(render(f64::NEG_INFINITY).as_str(), "Undefined");
}

#[test]
fn magnitude_limit() {
    assert_eq!(render(9_999_999_999.0).as_str(), "9999999999");
    assert_eq!(render(-9_999_999_999.0).as_str(), "-9999999999");
    assert_eq!(render(9_999_999_999.4).as_str(), "Error");
    assert_eq!(render(10_000_000_000.0).as_str(), "Error");
    assert_eq!(render(-1e300).as_str(), "Error");
}

#[test]
fn fractions() {
    assert_eq!(render(0.5).as_str(), "0.5");
    assert_eq!(render(-0.5).as_str(), "-0.5");
    assert_eq!(render(123.456).as_str(), "123.456");
    assert_eq!(render(1.0 / 3.0).as_str(), "0.333333333");
    assert_eq!(render(2.0 / 3.0).as_str(), "0.666666667");
    assert_eq!(render(0.1 + 0.2).as_str(), "0.3");
    assert_eq!(render(12345.6789012345).as_str(), "12345.6789");
}

#[test]
fn rounding_carry_into_new_digit() {
    assert_eq!(render(9.99999999999).as_str(), "10");
    assert_eq!(render(999_999_999.96).as_str(), "1000000000");
}

#[test]
fn text_input_contract() {
    assert_eq!(render_text("-42").map(|t| t.as_str() == "-42"), Ok(true));
    assert_eq!(render_text("4x2"), Err(Error::InvalidInput));
}

fn assert_canonical(text: &str) {
    let digits = text.chars().filter(char::is_ascii_digit).count();
    assert!(digits >= 1 && digits <= MAX_DIGITS, "{text}: {digits} digits");
    assert!(!text.contains('e') && !text.contains('E'), "{text}: exponent");
    assert!(!text.ends_with('.'), "{text}: trailing point");
    if text.contains('.') {
        assert!(!text.ends_with('0'), "{text}: trailing fractional zero");
    }
    let magnitude = text.trim_start_matches('-');
    if magnitude.starts_with('.') {
        panic!("{text}: missing leading zero");
    }
}

proptest! {
    #[test]
    fn integers_render_as_plain_digits(n in -9_999_999_999i64..=9_999_999_999i64) {
        let shown = render(n as f64);
        prop_assert_eq!(shown.as_str(), n.to_string());
    }

    #[test]
    fn values_in_range_are_canonical(value in -MAX_MAGNITUDE..=MAX_MAGNITUDE) {
        assert_canonical(render(value).as_str());
    }

    #[test]
    fn small_values_are_canonical(value in -0.99f64..0.99f64) {
        let text = render(value);
        assert_canonical(text.as_str());
        prop_assert!(text.trim_start_matches('-').starts_with('0'));
    }

    #[test]
    fn rendering_stays_close_to_value(value in -1_000_000.0f64..1_000_000.0f64) {
        let shown: f64 = render(value).parse().unwrap();
        prop_assert!((shown - value).abs() <= 0.0001, "{} shown as {}", value, shown);
    }

    #[test]
    fn too_large_is_error(value in 10_000_000_000.0f64..1e300f64, negative in any::<bool>()) {
        let value = if negative { -value } else { value };
        let shown = render(value);
        prop_assert_eq!(shown.as_str(), "Error");
    }
}
