//! Unit conversion
//!
//! A fixed table of supported unit pairs. Unsupported pairs are a declared
//! result (an error naming both units), not a fault.

use thiserror::Error;

const KM_PER_MILE: f64 = 1.60934;
const MILES_PER_KM: f64 = 0.621371;
const LB_PER_KG: f64 = 2.20462;
const KG_PER_LB: f64 = 0.453592;

/// Errors produced by the unit converter
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The (from, to) pair is not in the conversion table
    #[error("unsupported conversion: {from} to {to}")]
    Unsupported { from: String, to: String },
}

/// Convert a value between two units.
///
/// Returns `"<value> <from> = <result> <to>"` with the result formatted to
/// four decimal places and unit names in canonical form.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<String, ConvertError> {
    let (Some(from), Some(to)) = (canonical(from_unit), canonical(to_unit)) else {
        return Err(ConvertError::Unsupported {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    };

    let result = match (from, to) {
        ("celsius", "fahrenheit") => value * 9.0 / 5.0 + 32.0,
        ("fahrenheit", "celsius") => (value - 32.0) * 5.0 / 9.0,
        ("kilometers", "miles") => value * MILES_PER_KM,
        ("miles", "kilometers") => value * KM_PER_MILE,
        ("kilograms", "pounds") => value * LB_PER_KG,
        ("pounds", "kilograms") => value * KG_PER_LB,
        _ => {
            return Err(ConvertError::Unsupported {
                from: from_unit.to_string(),
                to: to_unit.to_string(),
            })
        }
    };

    Ok(format!("{} {} = {:.4} {}", value, from, result, to))
}

/// Normalize a unit name: lowercase, with common short forms expanded.
/// Returns `None` for units outside the conversion table.
fn canonical(unit: &str) -> Option<&'static str> {
    match unit.trim().to_lowercase().as_str() {
        "celsius" | "c" => Some("celsius"),
        "fahrenheit" | "f" => Some("fahrenheit"),
        "kilometers" | "kilometres" | "km" => Some("kilometers"),
        "miles" | "mi" => Some("miles"),
        "kilograms" | "kg" => Some("kilograms"),
        "pounds" | "lb" | "lbs" => Some("pounds"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(
            convert(0.0, "celsius", "fahrenheit").unwrap(),
            "0 celsius = 32.0000 fahrenheit"
        );
        assert_eq!(
            convert(100.0, "celsius", "fahrenheit").unwrap(),
            "100 celsius = 212.0000 fahrenheit"
        );
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(
            convert(32.0, "fahrenheit", "celsius").unwrap(),
            "32 fahrenheit = 0.0000 celsius"
        );
    }

    #[test]
    fn test_distance_pairs() {
        assert_eq!(
            convert(10.0, "kilometers", "miles").unwrap(),
            "10 kilometers = 6.2137 miles"
        );
        assert_eq!(
            convert(10.0, "miles", "kilometers").unwrap(),
            "10 miles = 16.0934 kilometers"
        );
    }

    #[test]
    fn test_mass_pairs() {
        assert_eq!(
            convert(1.0, "kilograms", "pounds").unwrap(),
            "1 kilograms = 2.2046 pounds"
        );
        assert_eq!(
            convert(1.0, "pounds", "kilograms").unwrap(),
            "1 pounds = 0.4536 kilograms"
        );
    }

    #[test]
    fn test_short_form_aliases() {
        assert_eq!(
            convert(0.0, "C", "F").unwrap(),
            "0 celsius = 32.0000 fahrenheit"
        );
        assert_eq!(
            convert(5.0, "km", "mi").unwrap(),
            "5 kilometers = 3.1069 miles"
        );
    }

    #[test]
    fn test_unsupported_pair_names_both_units() {
        let err = convert(10.0, "celsius", "kelvin").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Unsupported {
                from: "celsius".to_string(),
                to: "kelvin".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unsupported conversion: celsius to kelvin");
    }

    #[test]
    fn test_same_unit_is_unsupported() {
        assert!(convert(1.0, "celsius", "celsius").is_err());
    }

    #[test]
    fn test_unknown_source_unit() {
        let err = convert(1.0, "furlongs", "miles").unwrap_err();
        assert_eq!(err.to_string(), "unsupported conversion: furlongs to miles");
    }

    #[test]
    fn test_monotonic() {
        for (from, to) in [
            ("celsius", "fahrenheit"),
            ("fahrenheit", "celsius"),
            ("kilometers", "miles"),
            ("miles", "kilometers"),
            ("kilograms", "pounds"),
            ("pounds", "kilograms"),
        ] {
            let low = converted_value(&convert(1.0, from, to).unwrap());
            let high = converted_value(&convert(2.0, from, to).unwrap());
            assert!(low < high, "{from} to {to}: {low} !< {high}");
        }
    }

    /// Parse the numeric result out of `"<value> <from> = <result> <to>"`.
    fn converted_value(formatted: &str) -> f64 {
        formatted
            .split(" = ")
            .nth(1)
            .and_then(|rhs| rhs.split(' ').next())
            .and_then(|n| n.parse().ok())
            .unwrap()
    }
}
