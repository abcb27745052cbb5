//! Confirmable administrative actions: activate/deactivate a user, change a
//! user's role, delete a team.

pub mod command;
pub mod dispatcher;

pub use command::{Command, ParameterKind, ParameterSpec, Subject};
pub use dispatcher::{AbortReason, ActionDispatcher, DispatchOutcome};
