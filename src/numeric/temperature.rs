//! Celsius to Fahrenheit conversion.

/// Convert a single Celsius temperature to Fahrenheit.
///
/// Formula: `F = (C × 9/5) + 32`.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

/// Convert a slice of Celsius temperatures to Fahrenheit, element-wise.
pub fn to_fahrenheit(celsius: &[f64]) -> Vec<f64> {
    celsius.iter().copied().map(celsius_to_fahrenheit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_to_fahrenheit() {
        let celsius = [0.0, 10.0, 20.0, 25.0, 30.0, 35.0, 40.0, 100.0];
        assert_eq!(
            to_fahrenheit(&celsius),
            vec![32.0, 50.0, 68.0, 77.0, 86.0, 95.0, 104.0, 212.0]
        );
    }

    #[test]
    fn test_to_fahrenheit_empty() {
        assert_eq!(to_fahrenheit(&[]), Vec::<f64>::new());
    }
}
