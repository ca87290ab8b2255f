use std::cell::RefCell;
use std::rc::Rc;

use api::ResultSet;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{LanguagePicker, MenuItemCard};
use crate::core::format::format_seconds;
use crate::core::{ImageResolver, ImageSignal, ResolverRegistry, Transition};
use crate::i18n::Language;
use crate::results::{CardEntry, MenuSections};
use crate::t;

type SharedRegistry = Rc<RefCell<ResolverRegistry>>;

/// Results screen for one scanned menu.
///
/// Renders nothing when `results` is `None`. The page owns the current
/// language and the per-item image resolvers; navigation is delegated to the
/// host through `on_scan_another` / `on_new_scan`. `preview_image` is the
/// photo of the scanned menu; `language` is the initial language.
#[component]
pub fn ResultsPage(
    results: Option<ResultSet>,
    on_scan_another: EventHandler<()>,
    on_new_scan: EventHandler<()>,
    #[props(default)]
    preview_image: Option<String>,
    #[props(default)]
    language: Option<Language>,
) -> Element {
    let mut current = use_signal(|| language.unwrap_or_default());

    // Resolver state is mutated from image events without going through a
    // signal; `revision` is bumped afterwards so the page re-renders.
    let registry: SharedRegistry = use_hook(|| Rc::new(RefCell::new(ResolverRegistry::default())));
    let revision = use_signal(|| 0u64);
    let _revision = revision();

    let Some(results) = results else {
        return rsx! {};
    };

    let lang = current();
    let sections = {
        let mut registry_ref = registry.borrow_mut();
        let keys = registry_ref.sync(results.items());
        let entries = keys
            .into_iter()
            .zip(results.items())
            .map(|(key, item)| CardEntry {
                resolver: registry_ref
                    .resolver(&key)
                    .cloned()
                    .unwrap_or_else(|| ImageResolver::new(item.candidates())),
                key,
                item: item.clone(),
            })
            .collect();
        MenuSections::partition(entries)
    };
    let no_items = sections.is_empty();
    let MenuSections {
        appetizers,
        main_course,
    } = sections;

    let found = t!(lang, "results-found", count = results.dishes_found);
    let ocr_time = t!(lang, "results-ocr-time", seconds = format_seconds(results.ocr_time));

    rsx! {
        section { class: "page page-results menu-results",
            header { class: "menu-results__header",
                button {
                    r#type: "button",
                    class: "icon-button",
                    aria_label: t!(lang, "results-back"),
                    onclick: move |_| on_scan_another.call(()),
                    span { class: "icon icon--back", aria_hidden: "true" }
                }
                h1 { class: "menu-results__title", {t!(lang, "results-title")} }
                div { class: "menu-results__header-actions",
                    LanguagePicker {
                        language: lang,
                        on_change: move |next: Language| {
                            debug!("[i18n] results language {lang} -> {next}");
                            current.set(next);
                        },
                    }
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: t!(lang, "results-close"),
                        onclick: move |_| on_scan_another.call(()),
                        span { class: "icon icon--close", aria_hidden: "true" }
                    }
                }
            }

            div { class: "menu-results__summary",
                h2 { class: "menu-results__found", "{found}" }
                p { class: "menu-results__ocr-time", "{ocr_time}" }
            }

            if let Some(src) = preview_image {
                div { class: "menu-results__preview",
                    img { src: "{src}", alt: t!(lang, "results-preview-alt") }
                }
            }

            if no_items {
                p { class: "menu-results__empty", {t!(lang, "results-empty")} }
            }

            if !appetizers.is_empty() {
                {render_section(t!(lang, "section-appetizers"), appetizers, lang, &registry, revision)}
            }
            if !main_course.is_empty() {
                {render_section(t!(lang, "section-main-course"), main_course, lang, &registry, revision)}
            }

            button {
                r#type: "button",
                class: "button button--pill menu-results__scan-another",
                onclick: move |_| on_scan_another.call(()),
                {t!(lang, "action-scan-another")}
            }

            nav { class: "menu-results__bottom-bar",
                button {
                    r#type: "button",
                    class: "icon-button icon-button--raised",
                    aria_label: t!(lang, "results-back"),
                    onclick: move |_| on_scan_another.call(()),
                    span { class: "icon icon--back", aria_hidden: "true" }
                }
                button {
                    r#type: "button",
                    class: "icon-button icon-button--primary",
                    aria_label: t!(lang, "action-new-scan"),
                    onclick: move |_| on_new_scan.call(()),
                    span { class: "icon icon--plus", aria_hidden: "true" }
                }
            }
        }
    }
}

fn render_section(
    title: String,
    entries: Vec<CardEntry>,
    language: Language,
    registry: &SharedRegistry,
    revision: Signal<u64>,
) -> Element {
    rsx! {
        div { class: "menu-section",
            h2 { class: "menu-section__title", "{title}" }
            div { class: "menu-section__grid",
                for entry in entries.into_iter() {
                    {render_card(entry, language, registry.clone(), revision)}
                }
            }
        }
    }
}

fn render_card(
    entry: CardEntry,
    language: Language,
    registry: SharedRegistry,
    mut revision: Signal<u64>,
) -> Element {
    let CardEntry {
        key,
        item,
        resolver,
    } = entry;
    let dom_key = key.to_string();

    rsx! {
        MenuItemCard {
            key: "{dom_key}",
            item,
            resolver,
            language,
            on_image: move |signal: ImageSignal| {
                let transition = registry.borrow_mut().apply(&key, signal);
                if transition != Transition::Ignored {
                    revision.with_mut(|r| *r += 1);
                }
            },
        }
    }
}
