#![allow(warnings)]
//! FitScore Frontend Entry Point

mod config;
mod logger;
mod storage;
mod context;
mod store;
mod components;
mod steps;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::default().log_level);
    mount_to_body(App);
}
