pub mod shared;
pub mod system;

use std::rc::Rc;

use contracts::system::routes;
use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;

use shared::config::{load_config, read_page_override, CONSOLE_LOG_CEILING};
use shared::host::BrowserHost;
use shared::transport::GlooTransport;
use system::admin_actions::command::{self, Command};
use system::admin_actions::ActionDispatcher;
use system::navigation::bindings::NAVIGATION_BINDINGS;
use system::navigation::dom::{on_dom_ready, DomTriggerRegistry};
use system::navigation::NavigationRouter;

type PageDispatcher = ActionDispatcher<BrowserHost, GlooTransport>;

thread_local! {
    static DISPATCHER: OnceCell<Rc<PageDispatcher>> = OnceCell::new();
}

/// Attach the controller to the server-rendered page
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // initializes logging using the `log` crate; narrowed once config is read
    _ = console_log::init_with_level(CONSOLE_LOG_CEILING);

    let page_override = read_page_override();
    let config = match load_config(page_override.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load client config: {}", e);
            return;
        }
    };
    log::set_max_level(config.logging.level().to_level_filter());

    let host = Rc::new(BrowserHost);
    let transport = Rc::new(GlooTransport::new(config.api.base_url.clone()));
    let dispatcher = ActionDispatcher::new(host.clone(), transport)
        .with_in_flight_guard(config.dispatch.guard_in_flight);

    let installed = DISPATCHER.with(|cell| cell.set(Rc::new(dispatcher)).is_ok());
    if !installed {
        log::warn!("Controller already attached to this page");
        return;
    }

    on_dom_ready(move || {
        let Some(registry) = DomTriggerRegistry::from_window() else {
            log::error!("No document to bind navigation triggers in");
            return;
        };
        NavigationRouter::new(host).bind_all(&registry, NAVIGATION_BINDINGS);
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Templates pass usernames as strings and team ids as numbers
fn subject_from_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}

fn spawn_dispatch(command: &'static Command, subject: &JsValue) {
    let subject = subject_from_js(subject);
    let Some(dispatcher) = DISPATCHER.with(|cell| cell.get().cloned()) else {
        log::error!("{} called before the controller was attached", command.name);
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        dispatcher.dispatch(command, &subject).await;
    });
}

#[wasm_bindgen(js_name = activateUser)]
pub fn activate_user(username: JsValue) {
    spawn_dispatch(&command::ACTIVATE_USER, &username);
}

#[wasm_bindgen(js_name = deactivateUser)]
pub fn deactivate_user(username: JsValue) {
    spawn_dispatch(&command::DEACTIVATE_USER, &username);
}

#[wasm_bindgen(js_name = changeRole)]
pub fn change_role(username: JsValue) {
    spawn_dispatch(&command::CHANGE_ROLE, &username);
}

#[wasm_bindgen(js_name = deleteTeam)]
pub fn delete_team(team_id: JsValue) {
    spawn_dispatch(&command::DELETE_TEAM, &team_id);
}

#[wasm_bindgen(js_name = viewTeam)]
pub fn view_team(team_id: JsValue) {
    NavigationRouter::new(Rc::new(BrowserHost))
        .navigate_to_subject(routes::ADMIN_VIEW_TEAM, &subject_from_js(&team_id));
}
