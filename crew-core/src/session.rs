//! Session capability
//!
//! Authentication is an external collaborator. Views receive this
//! capability instead of reading ambient global state, so greeting and
//! sign-out logic stays testable without a real session subsystem.

/// Injected view of the authentication session
pub trait Session: Send + Sync {
    /// Whether a user is currently signed in
    fn is_signed_in(&self) -> bool;

    /// Display name of the signed-in user (name, else email)
    fn display_name(&self) -> Option<String>;

    /// End the session
    fn sign_out(&self);
}
