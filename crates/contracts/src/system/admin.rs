//! Body contract of the administrative action endpoints.
//!
//! Every action endpoint (`/activate_user/..`, `/deactivate_user/..`,
//! `/change_role/..`, `/admin-deleteTeam/..`) answers with a JSON object that
//! carries either `message` or `error`. The HTTP status is not part of the
//! contract: failures come back as `500 {"error": ...}`. An empty `message`
//! is treated as absent.

use serde::{Deserialize, Serialize};

/// Raw view of the response body, before the variant is decided.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decided result of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success { message: String },
    Failure { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedResponse {
    #[error("response is not valid JSON: {0}")]
    NotJson(String),
    #[error("response has an unexpected shape: {0}")]
    Invalid(String),
    #[error("response carries neither `message` nor `error`")]
    Empty,
    #[error("response carries both `message` and `error`")]
    Ambiguous,
}

impl TryFrom<ActionResponse> for ActionOutcome {
    type Error = MalformedResponse;

    fn try_from(response: ActionResponse) -> Result<Self, Self::Error> {
        let message = response.message.filter(|message| !message.is_empty());
        match (message, response.error) {
            (Some(message), None) => Ok(ActionOutcome::Success { message }),
            (None, Some(error)) => Ok(ActionOutcome::Failure { error }),
            (None, None) => Err(MalformedResponse::Empty),
            (Some(_), Some(_)) => Err(MalformedResponse::Ambiguous),
        }
    }
}

impl ActionOutcome {
    pub fn from_body(body: &str) -> Result<Self, MalformedResponse> {
        let response: ActionResponse = serde_json::from_str(body).map_err(|e| {
            if e.is_data() {
                MalformedResponse::Invalid(e.to_string())
            } else {
                MalformedResponse::NotJson(e.to_string())
            }
        })?;
        response.try_into()
    }
}

/// Body of `POST /change_role/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}
