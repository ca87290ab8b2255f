use api::MenuItem;
use dioxus::prelude::*;

use crate::core::{ImageResolver, ImageSignal, ImageStatus, LoadOutcome};
use crate::i18n::{display_name, Language};
use crate::t;

/// One recognized dish: image region, localized name, description, price and
/// a link out to the full-size image.
///
/// The card owns no state. It renders the resolver snapshot it is given and
/// reports the `<img>` load/error events, tagged with the attempt that was on
/// screen, back through `on_image`.
#[component]
pub fn MenuItemCard(
    item: MenuItem,
    resolver: ImageResolver,
    language: Language,
    on_image: EventHandler<ImageSignal>,
) -> Element {
    let name = display_name(&item, language).to_string();
    let attempt = resolver.attempt();
    let full_image = resolver.full_image_link().map(str::to_owned);

    let report = move |outcome: LoadOutcome| {
        if let Some(attempt) = attempt {
            on_image.call(ImageSignal { attempt, outcome });
        }
    };

    let media = match resolver.status() {
        ImageStatus::Placeholder => rsx! {
            div {
                class: "menu-card__placeholder",
                role: "img",
                aria_label: t!(language, "card-no-image"),
                span { class: "icon icon--image", aria_hidden: "true" }
            }
        },
        ImageStatus::Loading { url } | ImageStatus::Loaded { url } => {
            let loaded = resolver.is_loaded();
            let image_class = if loaded {
                "menu-card__image menu-card__image--loaded"
            } else {
                "menu-card__image"
            };
            rsx! {
                img {
                    class: image_class,
                    src: "{url}",
                    alt: "{name}",
                    "referrerpolicy": "no-referrer",
                    onload: move |_| report(LoadOutcome::Loaded),
                    onerror: move |_| report(LoadOutcome::Failed),
                }
                if !loaded {
                    div {
                        class: "menu-card__spinner",
                        role: "status",
                        aria_label: t!(language, "card-loading"),
                        span { class: "spinner" }
                    }
                }
            }
        }
    };

    rsx! {
        article { class: "menu-card",
            div { class: "menu-card__media", {media} }
            div { class: "menu-card__body",
                h3 { class: "menu-card__name", "{name}" }
                if let Some(description) = item.description.as_ref() {
                    p { class: "menu-card__description", "{description}" }
                }
                if let Some(price) = item.price.as_ref() {
                    p { class: "menu-card__price", "{price}" }
                }
                if let Some(href) = full_image {
                    a {
                        class: "menu-card__link",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!(language, "card-view-image")}
                    }
                }
            }
        }
    }
}
