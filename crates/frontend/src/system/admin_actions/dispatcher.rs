//! Action dispatcher
//!
//! One dispatch runs a [`Command`] against one subject:
//! confirm → collect parameter → request → interpret body → present.
//! The network call is the only suspension point; dialogs block.
//! Every failure ends here as a [`DispatchOutcome`] and a single alert, and
//! only a success reloads the page.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use contracts::system::admin::ActionOutcome;

use super::command::{Command, Subject};
use crate::shared::host::{PageLocation, UserDialogs};
use crate::shared::transport::{ActionTransport, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    EmptySubject,
    /// Confirmation answered "no"
    Declined,
    /// Parameter prompt cancelled or left empty
    ParameterMissing,
}

/// Terminal state of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Stopped before any request; nothing shown
    Aborted(AbortReason),
    /// Same command for the same subject is still pending
    AlreadyPending,
    /// Message shown, page reloaded
    Succeeded { message: String },
    /// Error shown, no reload
    Failed { error: String },
    /// Network error shown, no reload
    TransportFailed(TransportError),
}

type PendingSet = Rc<RefCell<HashSet<String>>>;

/// Marks (command, subject) as pending until dropped
struct InFlightGuard {
    pending: Option<PendingSet>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Some(pending) = &self.pending {
            pending.borrow_mut().remove(&self.key);
        }
    }
}

pub struct ActionDispatcher<H, T> {
    host: Rc<H>,
    transport: Rc<T>,
    guard_in_flight: bool,
    pending: PendingSet,
}

impl<H, T> ActionDispatcher<H, T>
where
    H: UserDialogs + PageLocation,
    T: ActionTransport,
{
    pub fn new(host: Rc<H>, transport: Rc<T>) -> Self {
        Self {
            host,
            transport,
            guard_in_flight: true,
            pending: PendingSet::default(),
        }
    }

    pub fn with_in_flight_guard(mut self, enabled: bool) -> Self {
        self.guard_in_flight = enabled;
        self
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    pub async fn dispatch(&self, command: &Command, subject: &str) -> DispatchOutcome {
        let Some(subject) = Subject::new(subject) else {
            log::warn!("{}: empty subject, nothing dispatched", command.name);
            return DispatchOutcome::Aborted(AbortReason::EmptySubject);
        };

        let Some(_guard) = self.acquire(command, &subject) else {
            log::warn!("{} {}: already pending, ignored", command.name, subject);
            return DispatchOutcome::AlreadyPending;
        };

        if let Some(prompt) = command.confirmation_prompt(&subject) {
            if !self.host.confirm(&prompt) {
                log::info!("{} {}: declined", command.name, subject);
                return DispatchOutcome::Aborted(AbortReason::Declined);
            }
        }

        let parameter = match command.parameter {
            Some(spec) => {
                let value = self
                    .host
                    .prompt_text(spec.prompt)
                    .and_then(|raw| spec.kind.accept(&raw));
                match value {
                    Some(value) => {
                        if !spec.kind.is_recognised(&value) {
                            log::warn!(
                                "{} {}: unrecognised {} `{}`, sending anyway",
                                command.name,
                                subject,
                                spec.kind.name(),
                                value
                            );
                        }
                        Some(value)
                    }
                    None => {
                        log::info!("{} {}: no {} entered", command.name, subject, spec.kind.name());
                        return DispatchOutcome::Aborted(AbortReason::ParameterMissing);
                    }
                }
            }
            None => None,
        };

        let request = match command.request(&subject, parameter.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                let error = TransportError::Encode(e.to_string());
                return self.transport_failed(command, &subject, error);
            }
        };
        log::debug!(
            "{} {}: pending {} {}",
            command.name,
            subject,
            request.method,
            request.path
        );

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(e) => return self.transport_failed(command, &subject, e),
        };

        let outcome = match ActionOutcome::from_body(&response.body) {
            Ok(outcome) => outcome,
            Err(e) => {
                let error = TransportError::MalformedBody {
                    status: response.status,
                    reason: e.to_string(),
                };
                return self.transport_failed(command, &subject, error);
            }
        };

        match outcome {
            ActionOutcome::Success { message } => {
                log::info!("{} {}: succeeded ({})", command.name, subject, message);
                self.host.alert(&message);
                self.host.reload();
                DispatchOutcome::Succeeded { message }
            }
            ActionOutcome::Failure { error } => {
                log::warn!(
                    "{} {}: failed with HTTP {}: {}",
                    command.name,
                    subject,
                    response.status,
                    error
                );
                self.host
                    .alert(&format!("❌ {}: {}", command.failure_label(&subject), error));
                DispatchOutcome::Failed { error }
            }
        }
    }

    fn acquire(&self, command: &Command, subject: &Subject) -> Option<InFlightGuard> {
        let key = format!("{} {}", command.name, subject);
        if !self.guard_in_flight {
            return Some(InFlightGuard { pending: None, key });
        }
        if !self.pending.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            pending: Some(self.pending.clone()),
            key,
        })
    }

    fn transport_failed(
        &self,
        command: &Command,
        subject: &Subject,
        error: TransportError,
    ) -> DispatchOutcome {
        log::error!("{} {}: {}", command.name, subject, error);
        self.host.alert(&format!("⚠️ Network error: {}", error));
        DispatchOutcome::TransportFailed(error)
    }
}
