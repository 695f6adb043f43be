//! Input validation helpers
//!
//! Field-level rules live on the DTOs as `validator` derives; this module
//! turns a failed validation into a single field-level [`AppError`] before
//! any database access happens.

use validator::Validate;

use crate::utils::AppError;

/// Run derive-based validation and surface the first failure as a
/// field-level validation error.
pub fn check(payload: &impl Validate) -> Result<(), AppError> {
    let errors = match payload.validate() {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    // Field order inside validator is unspecified; any failing field works
    // for the inline error the panel displays.
    for (field, field_errors) in errors.field_errors() {
        if let Some(err) = field_errors.first() {
            let detail = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value ({})", err.code));
            return Err(AppError::validation(format!("{field}: {detail}")));
        }
    }

    Err(AppError::validation("invalid payload"))
}
