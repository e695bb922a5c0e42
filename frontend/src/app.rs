//! Application root.
//!
//! Fetches the runtime `ClientConfig` from the host once, then mounts the
//! roster screen with it. When the host does not serve a configuration
//! (e.g. the bundle runs under a dev server) the built-in defaults are used.

use common::config::ClientConfig;
use gloo_console as console;
use wasm_bindgen_futures::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::mahasiswa::MahasiswaComponent;

pub enum Msg {
    ConfigLoaded(ClientConfig),
}

pub struct App {
    config: Option<ClientConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.config {
            Some(config) => html! {
                <MahasiswaComponent config={config.clone()} />
            },
            None => html! {},
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = match api::fetch_client_config().await {
                    Ok(config) => config,
                    Err(err) => {
                        console::log!("Using default configuration:", err.to_string());
                        ClientConfig::default()
                    }
                };
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}
