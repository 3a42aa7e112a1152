use crate::application::{
    dto::CallerOrigin,
    error::{ApplicationError, ApplicationResult},
    ports::security::AdminGate,
};

/// Reject the caller unless the gate recognises its origin as an admin.
///
/// Runs before any store access so a rejected caller learns nothing about
/// whether the targeted article exists.
pub async fn ensure_admin(gate: &dyn AdminGate, origin: &CallerOrigin) -> ApplicationResult<()> {
    if gate.is_admin(origin).await {
        Ok(())
    } else {
        tracing::warn!(origin = %origin, "admin-only operation attempted by non-admin origin");
        Err(ApplicationError::unauthorized("Unauthorized Access"))
    }
}
