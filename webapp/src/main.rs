#![allow(non_snake_case)]
use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use tracing::{Level, error};

use portfolio::config::UiConfig;

mod common;

mod components;
use components::{
    back_to_top::BackToTop,
    contact::Contact,
    navigation::NavBar,
    sections::{About, Experience, Hero, Projects, Skills},
};

mod content;

mod ui;
use ui::UiContext;

// tuning is baked in at build time; a bad file should cost the tuning, not the page
const UI_CONFIG: &str = include_str!("../ui.toml");

fn load_config() -> UiConfig {
    UiConfig::from_toml_str(UI_CONFIG).unwrap_or_else(|err| {
        error!("failed to parse ui.toml, using defaults: {err}");
        UiConfig::default()
    })
}

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());

    // the theme is resolved here, during the first render, so the attribute is in
    // place before anything paints; listeners wait for the rendered document
    let context = use_hook(|| Rc::new(RefCell::new(UiContext::new(&config))));

    {
        let context = context.clone();
        use_effect(move || context.borrow_mut().bind());
    }
    use_drop(move || context.borrow_mut().teardown());

    rsx! {
        style { "{common::style::PAGE_STYLES}" }
        NavBar {}
        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            Experience {}
            Contact {}
        }
        BackToTop {}
    }
}
