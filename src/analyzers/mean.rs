use crate::error::{Result, WeatherError};
use crate::models::Numeric;

/// Arithmetic mean of `values`. Fails with `EmptyInput` when there is
/// nothing to divide by.
pub fn calculate_mean<T: Numeric>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(WeatherError::EmptyInput(
            "cannot calculate the mean of an empty sequence".to_string(),
        ));
    }

    let mut total = 0.0;
    for value in values {
        total += value.to_f64()?;
    }

    Ok(total / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_mean() {
        assert_eq!(calculate_mean(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(calculate_mean(&[49.0]).unwrap(), 49.0);
        assert_eq!(calculate_mean(&["-10", "10"]).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_mean_fails() {
        let empty: Vec<i32> = Vec::new();
        assert!(matches!(
            calculate_mean(&empty),
            Err(WeatherError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_non_numeric_mean_fails() {
        assert!(matches!(
            calculate_mean(&["3", "n/a"]),
            Err(WeatherError::TypeMismatch { .. })
        ));
    }
}
