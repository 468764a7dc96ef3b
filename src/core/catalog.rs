//! Message catalogs that prompt labels are resolved from.
//!
//! The bundled catalogs are compiled in from `<root>/locales`, a user supplied
//! TOML file can be layered on top of them to override individual entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::locales::Language;

/// Lookup of localized text by key.
pub trait MessageCatalog {
    /// Returns the text of `key`, or `None` if this catalog does not have it.
    fn get(&self, key: &str) -> Option<String>;

    /// Like [`get`](MessageCatalog::get), but treats a missing key as an error.
    fn require(&self, key: &str) -> Result<String> {
        match self.get(key) {
            Some(text) => Ok(text),
            None => bail!("missing localized message for key '{key}'"),
        }
    }
}

/// Catalog backed by the translations bundled with this crate.
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    locale: String,
}

impl BundledCatalog {
    pub fn new(lang: Language) -> Self {
        Self {
            locale: lang.locale_str().to_string(),
        }
    }

    /// Use a raw locale string, such as `zh-CN`.
    ///
    /// # Error
    /// Fails if no bundled translation exists for `locale`.
    pub fn with_locale(locale: &str) -> Result<Self> {
        if !rust_i18n::available_locales!().iter().any(|l| *l == locale) {
            bail!("no bundled messages available for locale '{locale}'");
        }
        Ok(Self {
            locale: locale.to_string(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl MessageCatalog for BundledCatalog {
    fn get(&self, key: &str) -> Option<String> {
        let text = t!(key, locale = self.locale.as_str());
        // untranslated keys come back as the key itself, with or without a locale prefix
        if text == key || text == format!("{}.{key}", self.locale) {
            None
        } else {
            Some(text.into_owned())
        }
    }
}

/// Catalog loaded from a TOML file made of flat `key = "text"` entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TomlCatalog {
    entries: HashMap<String, String>,
}

impl TomlCatalog {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid message catalog")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("unable to read message catalog '{}'", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse message catalog '{}'", path.display()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for TomlCatalog {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Two catalogs where entries of `overrides` shadow those of `base`.
pub struct LayeredCatalog<O, B> {
    overrides: O,
    base: B,
}

impl<O: MessageCatalog, B: MessageCatalog> LayeredCatalog<O, B> {
    pub fn new(overrides: O, base: B) -> Self {
        Self { overrides, base }
    }
}

impl<O: MessageCatalog, B: MessageCatalog> MessageCatalog for LayeredCatalog<O, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.overrides.get(key).or_else(|| self.base.get(key))
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for &C {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for Box<C> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
