use std::fmt;

use contracts::system::admin::ChangeRoleRequest;
use contracts::system::routes;
use contracts::system::users::UserRole;
use serde_json::Value;

use crate::shared::api_utils::{render_path, render_text};
use crate::shared::transport::{ActionRequest, HttpMethod};

/// Identifier an action is applied to: a username or a team id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject(String);

impl Subject {
    /// `None` for an empty or whitespace-only identifier
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a prompted parameter is and how it travels in the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Sent as `{"role": "<value>"}`
    Role,
}

impl ParameterKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Role => "role",
        }
    }

    /// Trimmed value, or `None` when nothing usable was entered
    pub fn accept(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Whether the value is one the server is known to accept. Unknown values
    /// are still sent; the server has the final word.
    pub fn is_recognised(&self, value: &str) -> bool {
        match self {
            ParameterKind::Role => value.parse::<UserRole>().is_ok(),
        }
    }

    pub fn body(&self, value: &str) -> Result<Value, serde_json::Error> {
        match self {
            ParameterKind::Role => serde_json::to_value(ChangeRoleRequest {
                role: value.to_string(),
            }),
        }
    }
}

/// Free-text parameter collected by prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub prompt: &'static str,
    pub kind: ParameterKind,
}

/// A named administrative operation bound to one endpoint.
///
/// Templates use the `{subject}` placeholder. In `endpoint_template` the
/// subject is percent-encoded; in user-facing texts it is inserted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub endpoint_template: &'static str,
    pub method: HttpMethod,
    /// Confirmation prompt; `None` means the command runs without asking
    pub confirmation: Option<&'static str>,
    pub parameter: Option<ParameterSpec>,
    /// Names what failed, e.g. "Error activating {subject}"
    pub failure_template: &'static str,
}

impl Command {
    pub fn requires_confirmation(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn confirmation_prompt(&self, subject: &Subject) -> Option<String> {
        self.confirmation
            .map(|template| render_text(template, subject.as_str()))
    }

    pub fn endpoint(&self, subject: &Subject) -> String {
        render_path(self.endpoint_template, subject.as_str())
    }

    pub fn failure_label(&self, subject: &Subject) -> String {
        render_text(self.failure_template, subject.as_str())
    }

    /// Build the request; `parameter` is ignored by commands that take none
    pub fn request(
        &self,
        subject: &Subject,
        parameter: Option<&str>,
    ) -> Result<ActionRequest, serde_json::Error> {
        let body = match (self.parameter, parameter) {
            (Some(spec), Some(value)) => Some(spec.kind.body(value)?),
            _ => None,
        };

        Ok(ActionRequest {
            method: self.method,
            path: self.endpoint(subject),
            body,
        })
    }
}

pub const ACTIVATE_USER: Command = Command {
    name: "activate_user",
    endpoint_template: routes::ACTIVATE_USER,
    method: HttpMethod::Post,
    confirmation: Some("Activate user {subject}?"),
    parameter: None,
    failure_template: "Error activating {subject}",
};

pub const DEACTIVATE_USER: Command = Command {
    name: "deactivate_user",
    endpoint_template: routes::DEACTIVATE_USER,
    method: HttpMethod::Post,
    confirmation: Some("Deactivate user {subject}?"),
    parameter: None,
    failure_template: "Error deactivating {subject}",
};

pub const CHANGE_ROLE: Command = Command {
    name: "change_role",
    endpoint_template: routes::CHANGE_ROLE,
    method: HttpMethod::Post,
    confirmation: None,
    parameter: Some(ParameterSpec {
        prompt: "Enter new role (ADMIN / TEAM_LEADER / MEMBER):",
        kind: ParameterKind::Role,
    }),
    failure_template: "Failed to change role for {subject}",
};

pub const DELETE_TEAM: Command = Command {
    name: "delete_team",
    endpoint_template: routes::ADMIN_DELETE_TEAM,
    method: HttpMethod::Post,
    confirmation: Some("Are you sure you want to delete team {subject}?"),
    parameter: None,
    failure_template: "Error deleting team {subject}",
};

#[cfg(test)]
pub(crate) const ALL: [&Command; 4] =
    [&ACTIVATE_USER, &DEACTIVATE_USER, &CHANGE_ROLE, &DELETE_TEAM];
