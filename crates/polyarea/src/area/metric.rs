use crate::error::AreaError;

/// Relative error in percent: `|estimated - reference| / reference * 100`.
///
/// Errors
/// - `DivisionByZero` if `reference == 0`.
/// - `InvalidParameter` if either value is non-finite.
pub fn relative_error(estimated: f64, reference: f64) -> Result<f64, AreaError> {
    if !(estimated.is_finite() && reference.is_finite()) {
        return Err(AreaError::invalid("areas must be finite"));
    }
    if reference == 0.0 {
        return Err(AreaError::DivisionByZero);
    }
    Ok((estimated - reference).abs() / reference.abs() * 100.0)
}
