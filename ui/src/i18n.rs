//! Internationalization (i18n) support for `menusnap-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle loading + language negotiation)
//! - `fluent` (message formatting, reached through `i18n-embed`)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/menusnap-ui.ftl   (fallback/reference)
//!   zh/menusnap-ui.ftl
//!   es/menusnap-ui.ftl
//! ```
//!
//! The supported set is closed: one [`Language`] variant per folder. Each
//! language gets its own immutable loader, built once on first use, so a
//! language switch never mutates shared state. It only changes which loader
//! a render reads from.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!(language, "results-title");
//! let found = t!(language, "results-found", count = 3);
//! ```
//!
//! To add a new locale:
//! 1. Copy `en/menusnap-ui.ftl` to `i18n/<code>/menusnap-ui.ftl` and translate it.
//! 2. Add a [`Language`] variant (code + native label).
//! 3. Run tests to ensure completeness.
//!
//! Menu item names are not in the bundles: they come from the backend's
//! per-item `translations` map and are picked by [`display_name`].
use std::fmt;
use std::str::FromStr;

use api::MenuItem;
use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro bound to an explicit language.
/// Examples:
///     t!(language, "results-title")
///     t!(language, "results-found", count = 4)
///
/// Keys and arguments are checked at compile time against the fallback
/// bundle.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "menusnap-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported language code `{0}`")]
    Unsupported(String),
    #[error("no message `{key}` in the `{language}` bundle")]
    MissingKey { key: String, language: Language },
}

/// Languages the results view can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English.
    En,
    /// Chinese (Simplified). The results screen opens in Chinese.
    #[default]
    Zh,
    /// Spanish.
    Es,
}

impl Language {
    /// Bundle consulted for any message a locale leaves out.
    pub const FALLBACK: Language = Language::En;

    /// All supported languages in picker order.
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Zh, Self::Es]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Es => "es",
        }
    }

    /// Native name, for picker tooltips.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Es => "Español",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Zh => 1,
            Self::Es => 2,
        }
    }

    /// Strict lookup: only the exact codes returned by [`Language::code`].
    pub fn from_code(code: &str) -> Result<Self, LocaleError> {
        Self::all()
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }

    pub fn identifier(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("supported language codes are valid identifiers")
    }

    /// First supported language among the platform's preferences, else the default.
    pub fn preferred() -> Self {
        requested_languages()
            .iter()
            .find_map(|id| Self::from_code(id.language.as_str()).ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// One loader per language, indexed by [`Language::index`].
static LOADERS: Lazy<[FluentLanguageLoader; 3]> = Lazy::new(|| Language::all().map(build_loader));

fn build_loader(language: Language) -> FluentLanguageLoader {
    let fallback = Language::FALLBACK.identifier();
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    match i18n_embed::select(&loader, &Localizations, &[language.identifier()]) {
        Ok(loaded) => info!("[i18n] {language} bundle ready ({loaded:?})"),
        Err(err) => warn!("[i18n] Failed loading {language} bundle ({err}); continuing with fallback"),
    }
    loader
}

/// Loader for `language`, consumed by the `t!` macro.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    &LOADERS[language.index()]
}

/// Load every bundle up front (idempotent).
pub fn init() {
    Lazy::force(&LOADERS);
}

/// Runtime lookup for keys that are not known at compile time.
pub fn ui_text(key: &str, language: Language) -> Result<String, LocaleError> {
    let loader = loader(language);
    if !loader.has(key) {
        return Err(LocaleError::MissingKey {
            key: key.to_string(),
            language,
        });
    }
    Ok(loader.get(key))
}

/// Name to show for `item`: its translation for `language` when the backend
/// supplied a non-blank one, otherwise the canonical dish name.
pub fn display_name(item: &MenuItem, language: Language) -> &str {
    item.translations
        .get(language.code())
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&item.dish)
}

/// The session's current language. Changes are all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalizationContext {
    current: Language,
}

impl LocalizationContext {
    pub fn new(current: Language) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch to `code`. Unsupported codes are rejected and the current
    /// language is kept.
    pub fn select(&mut self, code: &str) -> Result<Language, LocaleError> {
        let next = Language::from_code(code)?;
        self.current = next;
        Ok(next)
    }

    pub fn text(&self, key: &str) -> Result<String, LocaleError> {
        ui_text(key, self.current)
    }

    pub fn display_name<'a>(&self, item: &'a MenuItem) -> &'a str {
        display_name(item, self.current)
    }
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tom_yum() -> MenuItem {
        MenuItem::new("Tom Yum").with_translation("es", "Sopa Tom Yum")
    }

    #[test]
    fn embedded_locales_match_supported_set() {
        let mut codes: Vec<String> = Language::all().iter().map(|l| l.code().to_string()).collect();
        codes.sort();
        assert_eq!(available_languages(), codes);
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(t!(Language::En, "results-empty"), "No menu items found");
        assert_eq!(t!(Language::Es, "card-view-image"), "Ver imagen completa");
        assert_eq!(t!(Language::Zh, "section-appetizers"), "开胃菜");
    }

    #[test]
    fn runtime_lookup_rejects_unknown_key() {
        assert_eq!(
            ui_text("results-title", Language::En).as_deref(),
            Ok("Menu Results")
        );
        assert_eq!(
            ui_text("no-such-message", Language::Es),
            Err(LocaleError::MissingKey {
                key: "no-such-message".into(),
                language: Language::Es,
            })
        );
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Ok(lang));
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
        assert_eq!(
            Language::from_code("fr"),
            Err(LocaleError::Unsupported("fr".into()))
        );
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn display_name_prefers_translation() {
        let item = tom_yum();
        assert_eq!(display_name(&item, Language::Es), "Sopa Tom Yum");
        assert_eq!(display_name(&item, Language::En), "Tom Yum");
        assert_eq!(display_name(&item, Language::Zh), "Tom Yum");
    }

    #[test]
    fn blank_translation_falls_back_to_dish() {
        let item = MenuItem::new("Pad Thai")
            .with_translation("zh", "")
            .with_translation("es", "   ");
        for lang in Language::all() {
            assert_eq!(display_name(&item, lang), "Pad Thai");
        }
    }

    #[test]
    fn display_name_is_per_item() {
        let items = [tom_yum(), MenuItem::new("Satay")];
        let names: Vec<&str> = items.iter().map(|i| display_name(i, Language::Es)).collect();
        assert_eq!(names, ["Sopa Tom Yum", "Satay"]);
    }

    #[test]
    fn unsupported_selection_keeps_current_language() {
        let mut ctx = LocalizationContext::new(Language::Es);
        assert!(ctx.select("de").is_err());
        assert_eq!(ctx.current(), Language::Es);

        assert_eq!(ctx.select("en"), Ok(Language::En));
        assert_eq!(ctx.current(), Language::En);
        assert_eq!(ctx.display_name(&tom_yum()), "Tom Yum");
    }

    #[test]
    fn context_text_follows_current_language() {
        let mut ctx = LocalizationContext::default();
        assert_eq!(ctx.current(), Language::Zh);
        assert_eq!(ctx.text("results-empty").as_deref(), Ok("未识别到菜单项"));
        ctx.select("es").unwrap();
        assert_eq!(
            ctx.text("results-empty").as_deref(),
            Ok("No se encontraron elementos del menú")
        );
    }
}
