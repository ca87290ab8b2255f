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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Current scan result, shared by both routes.
    let results = use_signal(|| Option::<ResultSet>::None);
    use_context_provider(|| results);

    rsx! {
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
                info!("[web] showing sample result set ({} dishes)", set.dishes_found);
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
