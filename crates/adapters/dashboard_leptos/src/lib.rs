use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use jellyreboot_app::services::session::{Command, SessionClient};
use jellyreboot_domain::credentials::LoginForm;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod page;
pub mod transport;

use page::PageUi;
use transport::GlooTransport;

/// How often the status panel refreshes itself while visible.
const REFRESH_INTERVAL_MS: u32 = 30_000;

type Client = SessionClient<GlooTransport, PageUi>;

/// Forwards commands from DOM events to the session client.
#[derive(Clone)]
struct Dispatcher {
    client: Rc<Client>,
}

impl Dispatcher {
    fn send(&self, command: Command) {
        let client = Rc::clone(&self.client);
        spawn_local(async move {
            client.handle(command).await;
        });
    }
}

/// Refresh the status periodically while the content view is shown.
fn spawn_auto_refresh(client: Rc<Client>) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if client.view().is_content() && !client.is_restarting() {
                if let Err(err) = client.fetch_status().await {
                    leptos::logging::warn!("status refresh failed: {err}");
                }
            }
        }
    });
}

/// Root application component: login form and status panel.
#[component]
pub fn App() -> impl IntoView {
    let ui = PageUi::new();
    let client = Rc::new(SessionClient::new(GlooTransport::default(), ui));
    client.initialize();
    spawn_auto_refresh(Rc::clone(&client));

    let dispatcher = Dispatcher { client };
    let username_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();

    let on_submit = {
        let dispatcher = dispatcher.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let username = username_ref.get().map(|i| i.value()).unwrap_or_default();
            let password = password_ref.get().map(|i| i.value()).unwrap_or_default();
            dispatcher.send(Command::Login(LoginForm::new(username, password)));
        }
    };
    let on_restart = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.send(Command::Restart)
    };
    let on_refresh = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.send(Command::RefreshStatus)
    };
    let on_logout = move |_| dispatcher.send(Command::Logout);

    view! {
        <main>
            <h1>"JellyReboot"</h1>
            <form id="loginForm" class:hidden=move || ui.view.get().is_content() on:submit=on_submit>
                <label for="username">"Username"</label>
                <input id="username" type="text" autocomplete="username" required node_ref=username_ref/>
                <label for="password">"Password"</label>
                <input id="password" type="password" autocomplete="current-password" required node_ref=password_ref/>
                <button type="submit">"Log in"</button>
            </form>
            <div id="content" class:hidden=move || ui.view.get().is_login()>
                <p>"Status: " <span id="status">{move || ui.status.get()}</span></p>
                <pre id="details">{move || ui.details.get()}</pre>
                <button id="restartButton" disabled=move || !ui.restart_enabled.get() on:click=on_restart>
                    "Restart Jellyfin"
                </button>
                <button on:click=on_refresh>"Refresh"</button>
                <button on:click=on_logout>"Log out"</button>
            </div>
        </main>
    }
}
