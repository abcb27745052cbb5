//! Test doubles for the host page, the network and the trigger registry

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::shared::host::{PageLocation, UserDialogs};
use crate::shared::transport::{ActionRequest, ActionTransport, RawResponse, TransportError};
use crate::system::navigation::router::{Trigger, TriggerRegistry};

/// Answers dialogs from fixed values and records everything shown
pub struct RecordingHost {
    pub confirm_answer: Cell<bool>,
    pub prompt_answer: RefCell<Option<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub reloads: Cell<usize>,
    pub navigations: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            confirm_answer: Cell::new(true),
            prompt_answer: RefCell::new(None),
            confirms: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        let host = Self::new();
        host.confirm_answer.set(false);
        host
    }

    pub fn answering(prompt_answer: Option<&str>) -> Self {
        let host = Self::new();
        *host.prompt_answer.borrow_mut() = prompt_answer.map(str::to_string);
        host
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl UserDialogs for RecordingHost {
    fn confirm(&self, prompt: &str) -> bool {
        self.confirms.borrow_mut().push(prompt.to_string());
        self.confirm_answer.get()
    }

    fn prompt_text(&self, prompt: &str) -> Option<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.prompt_answer.borrow().clone()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

impl PageLocation for RecordingHost {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn assign(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_string());
    }
}

/// Replies with queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    pub requests: RefCell<Vec<ActionRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ActionTransport for ScriptedTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
    }
}

/// Holds the first request open until the test sends its response
pub struct PendingTransport {
    receiver: RefCell<Option<oneshot::Receiver<RawResponse>>>,
    pub requests: RefCell<Vec<ActionRequest>>,
}

impl PendingTransport {
    pub fn new() -> (Self, oneshot::Sender<RawResponse>) {
        let (sender, receiver) = oneshot::channel();
        let transport = Self {
            receiver: RefCell::new(Some(receiver)),
            requests: RefCell::new(Vec::new()),
        };
        (transport, sender)
    }
}

#[async_trait(?Send)]
impl ActionTransport for PendingTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let receiver = self.receiver.borrow_mut().take();
        match receiver {
            Some(receiver) => receiver
                .await
                .map_err(|_| TransportError::Network("request canceled".into())),
            None => Err(TransportError::Network("connection refused".into())),
        }
    }
}

type Handlers = Rc<RefCell<Vec<Box<dyn Fn()>>>>;

pub struct FakeTrigger {
    handlers: Handlers,
}

impl Trigger for FakeTrigger {
    fn on_activate(&self, handler: Box<dyn Fn()>) {
        self.handlers.borrow_mut().push(handler);
    }
}

/// In-memory page: a set of trigger ids that can be clicked
#[derive(Default)]
pub struct FakeRegistry {
    triggers: HashMap<String, Handlers>,
    pub lookups: RefCell<Vec<String>>,
}

impl FakeRegistry {
    pub fn with_triggers(ids: &[&str]) -> Self {
        Self {
            triggers: ids
                .iter()
                .map(|id| (id.to_string(), Handlers::default()))
                .collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    pub fn handler_count(&self, id: &str) -> usize {
        self.triggers
            .get(id)
            .map(|handlers| handlers.borrow().len())
            .unwrap_or(0)
    }

    pub fn click(&self, id: &str) {
        if let Some(handlers) = self.triggers.get(id) {
            for handler in handlers.borrow().iter() {
                handler();
            }
        }
    }
}

impl TriggerRegistry for FakeRegistry {
    type Trigger = FakeTrigger;

    fn find(&self, trigger_id: &str) -> Option<FakeTrigger> {
        self.lookups.borrow_mut().push(trigger_id.to_string());
        self.triggers.get(trigger_id).map(|handlers| FakeTrigger {
            handlers: handlers.clone(),
        })
    }
}
