use std::collections::HashSet;
use std::rc::Rc;

use contracts::system::routes::SUBJECT_PLACEHOLDER;

use crate::shared::api_utils::render_path;
use crate::shared::host::PageLocation;

/// An activatable element on the current page
pub trait Trigger {
    fn on_activate(&self, handler: Box<dyn Fn()>);
}

/// Page-wide lookup of triggers by id; absence is a normal answer
pub trait TriggerRegistry {
    type Trigger: Trigger;

    fn find(&self, trigger_id: &str) -> Option<Self::Trigger>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBinding {
    pub trigger_id: &'static str,
    pub destination: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("navigation binding has an empty trigger id")]
    EmptyTrigger,
    #[error("trigger `{trigger_id}` has invalid destination `{destination}`")]
    InvalidDestination {
        trigger_id: String,
        destination: String,
    },
    #[error("trigger `{0}` is bound more than once")]
    DuplicateTrigger(String),
}

impl NavigationBinding {
    pub const fn new(trigger_id: &'static str, destination: &'static str) -> Self {
        Self {
            trigger_id,
            destination,
        }
    }

    /// Destination must be an absolute path without whitespace or an
    /// unfilled subject placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_id.trim().is_empty() {
            return Err(ConfigError::EmptyTrigger);
        }
        let destination = self.destination;
        if !destination.starts_with('/')
            || destination.chars().any(char::is_whitespace)
            || destination.contains(SUBJECT_PLACEHOLDER)
        {
            return Err(ConfigError::InvalidDestination {
                trigger_id: self.trigger_id.to_string(),
                destination: destination.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    pub bound: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub invalid: Vec<&'static str>,
}

/// Binds triggers to full-page navigation.
///
/// `bind_all` must run exactly once per page load; a second call attaches a
/// second handler to every present trigger.
pub struct NavigationRouter<L> {
    location: Rc<L>,
}

impl<L: PageLocation + 'static> NavigationRouter<L> {
    pub fn new(location: Rc<L>) -> Self {
        Self { location }
    }

    /// A trigger id listed twice keeps its first binding; the repeat counts
    /// as invalid.
    pub fn bind_all<R: TriggerRegistry>(
        &self,
        registry: &R,
        bindings: &[NavigationBinding],
    ) -> BindReport {
        let mut report = BindReport::default();
        let mut seen = HashSet::new();

        for binding in bindings {
            let checked = binding.validate().and_then(|()| {
                if seen.insert(binding.trigger_id) {
                    Ok(())
                } else {
                    Err(ConfigError::DuplicateTrigger(binding.trigger_id.to_string()))
                }
            });
            if let Err(e) = checked {
                log::warn!("Skipping navigation binding: {}", e);
                report.invalid.push(binding.trigger_id);
                continue;
            }

            let Some(trigger) = registry.find(binding.trigger_id) else {
                report.missing.push(binding.trigger_id);
                continue;
            };

            let location = self.location.clone();
            let destination = binding.destination;
            trigger.on_activate(Box::new(move || location.assign(destination)));
            report.bound.push(binding.trigger_id);
        }

        log::debug!("Triggers absent from this page: {:?}", report.missing);
        log::info!(
            "Navigation bound: {} triggers, {} absent, {} invalid",
            report.bound.len(),
            report.missing.len(),
            report.invalid.len()
        );
        report
    }

    /// Navigate to a per-subject page such as `/admin-viewTeam/{subject}`.
    /// Returns `false` without navigating for an empty subject.
    pub fn navigate_to_subject(&self, template: &str, subject: &str) -> bool {
        if subject.trim().is_empty() {
            log::warn!("Not navigating to {}: empty subject", template);
            return false;
        }
        self.location.assign(&render_path(template, subject));
        true
    }
}
