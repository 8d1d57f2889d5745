//! Result type alias for OrderFlow

use super::errors::OrderFlowError;

/// Result type alias for OrderFlow operations
///
/// # Examples
///
/// ```
/// use orderflow::domain::result::Result;
/// use orderflow::domain::errors::OrderFlowError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(OrderFlowError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, OrderFlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i64> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i64> = Err(OrderFlowError::Other("boom".to_string()));
        assert!(result.is_err());
    }
}
