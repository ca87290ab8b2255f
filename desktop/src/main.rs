#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use api::ResultSet;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::i18n::{self, Language};
use ui::views::{ResultsPage, Scan};
use ui::THEME_CSS;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/results")]
    MenuResults {},
}

#[cfg(feature = "desktop")]
fn main() {
    // Phone-sized window: the results screen is laid out for a narrow column.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("MenuSnap – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(420.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let results = use_signal(|| Option::<ResultSet>::None);
    use_context_provider(|| results);

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }
        Router::<Route> {}
    }
}

#[component]
fn Landing() -> Element {
    let mut results = use_context::<Signal<Option<ResultSet>>>();
    let language = use_hook(Language::preferred);
    let nav = navigator();

    rsx! {
        Scan {
            language,
            on_sample: move |set: ResultSet| {
                info!("[desktop] showing sample result set ({} dishes)", set.dishes_found);
                results.set(Some(set));
                nav.push(Route::MenuResults {});
            },
        }
    }
}

#[component]
fn MenuResults() -> Element {
    let mut results = use_context::<Signal<Option<ResultSet>>>();
    let language = use_hook(Language::preferred);
    let nav = navigator();

    rsx! {
        ResultsPage {
            results: results(),
            language,
            on_scan_another: move |_| {
                results.set(None);
                nav.push(Route::Landing {});
            },
            on_new_scan: move |_| {
                nav.push(Route::Landing {});
            },
        }
    }
}
