use api::ResultSet;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n::Language;
use crate::t;

/// Pre-scan landing page. Capture and upload belong to the host; this view
/// only offers the bundled sample so the results screen can be explored.
#[component]
pub fn Scan(language: Language, on_sample: EventHandler<ResultSet>) -> Element {
    let mut sample_failed = use_signal(|| false);

    let load_sample = move |_: MouseEvent| match ResultSet::sample() {
        Ok(set) => {
            sample_failed.set(false);
            on_sample.call(set);
        }
        Err(err) => {
            warn!("[scan] {err}");
            sample_failed.set(true);
        }
    };

    rsx! {
        section { class: "page page-scan",
            h1 { {t!(language, "scan-title")} }
            p { {t!(language, "scan-intro")} }
            button {
                r#type: "button",
                class: "button button--pill button--primary",
                onclick: load_sample,
                {t!(language, "scan-try-sample")}
            }
            if sample_failed() {
                p { class: "page-scan__error", {t!(language, "scan-sample-error")} }
            }
        }
    }
}
