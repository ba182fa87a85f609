//! Per-field validation helpers shared by constructors, setters, and the
//! catalog loader. Each rule lives here once so no aircraft kind duplicates
//! it.

use super::VehicleError;

/// Validate a mass-like quantity in tonnes: finite and strictly positive.
pub(crate) fn positive_tonnes(field: &'static str, tonnes: f64) -> Result<f64, VehicleError> {
    if !tonnes.is_finite() {
        return Err(VehicleError::InvalidType {
            field,
            expected: "a finite number",
        });
    }
    if tonnes <= 0.0 {
        return Err(VehicleError::NonPositive { field });
    }
    Ok(tonnes)
}

/// Validate a count-like quantity: strictly positive.
pub(crate) fn positive_count(field: &'static str, count: u32) -> Result<u32, VehicleError> {
    if count == 0 {
        return Err(VehicleError::NonPositive { field });
    }
    Ok(count)
}

/// Coerce a raw catalog number into an integer count. Fractional,
/// non-finite, and out-of-range values have the wrong shape for the field.
pub(crate) fn integer_from_raw(field: &'static str, raw: f64) -> Result<u32, VehicleError> {
    if !raw.is_finite() || raw.fract() != 0.0 || raw > f64::from(u32::MAX) {
        return Err(VehicleError::InvalidType {
            field,
            expected: "an integer",
        });
    }
    if raw <= 0.0 {
        return Err(VehicleError::NonPositive { field });
    }
    Ok(raw as u32)
}
