use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n::{Language, LocalizationContext};
use crate::t;

/// Compact language switcher. Only emits codes that passed validation, so the
/// caller's current language is never left unsupported.
#[component]
pub fn LanguagePicker(language: Language, on_change: EventHandler<Language>) -> Element {
    let on_input = move |evt: FormEvent| {
        let mut ctx = LocalizationContext::new(language);
        match ctx.select(&evt.value()) {
            Ok(next) if next != language => on_change.call(next),
            Ok(_) => {}
            Err(err) => warn!("[i18n] {err}; keeping {language}"),
        }
    };

    rsx! {
        div { class: "language-picker",
            span { class: "icon icon--globe", aria_hidden: "true" }
            label {
                class: "visually-hidden",
                r#for: "language-select",
                {t!(language, "language-label")}
            }
            select {
                id: "language-select",
                class: "language-picker__select",
                value: "{language.code()}",
                oninput: on_input,
                for lang in Language::all() {
                    option {
                        key: "{lang.code()}",
                        value: "{lang.code()}",
                        title: "{lang.label()}",
                        selected: lang == language,
                        "{lang.code().to_uppercase()}"
                    }
                }
            }
        }
    }
}
