//! Unit tests for color resolution

use escolor::{resolve, ColorSpec, Error, Layer, NamedColor};

#[test]
fn every_named_color_resolves_in_any_case() {
    for (name, color) in NamedColor::ALL {
        let upper = resolve(name, Layer::Foreground).unwrap();
        let lower = resolve(&name.to_lowercase(), Layer::Foreground).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, color.base_code().to_string());
    }
}

#[test]
fn named_backgrounds_are_offset_by_ten() {
    for (name, color) in NamedColor::ALL {
        let bg = resolve(name, Layer::Background).unwrap();
        assert_eq!(bg, (color.base_code() + 10).to_string());
    }
}

#[test]
fn red_mixed_case() {
    let a = resolve("red", Layer::Foreground).unwrap();
    let b = resolve("RED", Layer::Foreground).unwrap();
    let c = resolve("Red", Layer::Foreground).unwrap();
    assert_eq!(a, "31");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn eight_bit_range_ends_at_255() {
    assert_eq!(resolve("255", Layer::Foreground).unwrap(), "38;5;255");
    assert!(matches!(
        resolve("256", Layer::Foreground),
        Err(Error::InvalidColor(Some(_)))
    ));
    assert!(resolve("999", Layer::Background).is_err());
}

#[test]
fn hex_equals_rgb_triple() {
    for layer in [Layer::Foreground, Layer::Background] {
        assert_eq!(
            resolve("FF0000", layer).unwrap(),
            resolve("255,0,0", layer).unwrap()
        );
        assert_eq!(
            resolve("#2986cc", layer).unwrap(),
            resolve("41,134,204", layer).unwrap()
        );
    }
    assert_eq!(resolve("FF0000", Layer::Foreground).unwrap(), "38;2;255;0;0");
    assert_eq!(resolve("255,0,0", Layer::Background).unwrap(), "48;2;255;0;0");
}

#[test]
fn resolution_is_deterministic() {
    for spec in ["cyan", "42", "#abcdef", "1,2,3"] {
        assert_eq!(
            resolve(spec, Layer::Foreground),
            resolve(spec, Layer::Foreground)
        );
    }
}

#[test]
fn shapes_outside_every_grammar_are_invalid() {
    for spec in ["orange", "-1", "1.5", "#12345", "12,34", "0x10", "RED "] {
        assert_eq!(
            ColorSpec::parse(spec),
            Err(Error::InvalidColor(Some(spec.to_string()))),
            "{spec}"
        );
    }
}

#[test]
fn empty_is_no_color_given() {
    let err = resolve("", Layer::Background).unwrap_err();
    assert_eq!(err, Error::InvalidColor(None));
    assert!(err.to_string().contains("NO COLOR GIVEN"));
}
