//! Shared UI crate for MenuSnap. The results view, its image resolution and
//! localization live here; platform crates only provide routing.

pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Dish card with image fallback (components/menu_item_card.rs)
    pub mod menu_item_card;
    pub use menu_item_card::MenuItemCard;

    // Closed-set language switcher (components/language_picker.rs)
    pub mod language_picker;
    pub use language_picker::LanguagePicker;
}

/// Shared theme, inlined by every platform shell.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
