// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsight Locale: locale tags and translation catalogs.
//!
//! The dashboard's label text is externally supplied; the core only consumes
//! resolved strings. This crate provides the two pieces that make that work:
//!
//! - [`Locale`]: the supported UI locales with their URL tags. Unknown tags
//!   fall back to Vietnamese, the dashboard's default.
//! - [`Catalog`]: immutable per-locale key→string tables with fallback to a
//!   default locale. Catalogs are built once with [`CatalogBuilder`] and are
//!   cheap to clone.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorsight_locale::{Catalog, CatalogBuilder, Locale};
//!
//! let catalog: Catalog = CatalogBuilder::new()
//!     .set(Locale::Vi, "sensor.map", "Bản Đồ Cảm Biến")
//!     .set(Locale::En, "sensor.map", "Sensor Map")
//!     .build();
//!
//! assert_eq!(catalog.get(Locale::En, "sensor.map"), Some("Sensor Map"));
//! // Missing in Chinese: falls back to the default locale.
//! assert_eq!(catalog.get(Locale::Zh, "sensor.map"), Some("Bản Đồ Cảm Biến"));
//! // Missing everywhere: the caller decides what to show (typically the key).
//! assert_eq!(catalog.get(Locale::En, "sensor.unknown"), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

/// A UI locale, identified by its URL path tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Vietnamese (`vn`), the dashboard default.
    #[default]
    Vi,
    /// English (`en`).
    En,
    /// Chinese (`zh`).
    Zh,
}

impl Locale {
    /// All supported locales, in presentation order.
    pub const ALL: [Self; 3] = [Self::Vi, Self::En, Self::Zh];

    /// Returns the locale's URL path tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Vi => "vn",
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parses a URL path tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }

    /// Parses a URL path tag, falling back to the default locale.
    ///
    /// This mirrors the dashboard's routing behavior: an unrecognized path
    /// segment is treated as Vietnamese rather than an error.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    fn index(self) -> usize {
        match self {
            Self::Vi => 0,
            Self::En => 1,
            Self::Zh => 2,
        }
    }
}

/// Immutable per-locale translation tables.
///
/// Lookup first consults the requested locale's table, then the default
/// locale's. A key missing from both yields `None`; callers typically show
/// the key itself in that case rather than failing.
///
/// Internally, `Catalog` wraps an `Rc` of sorted key→string tables, making
/// cloning cheap and lookup O(log n).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    inner: Rc<CatalogData>,
}

#[derive(Debug, Default)]
struct CatalogData {
    /// One table per [`Locale`], each sorted by key for binary search.
    tables: [Vec<(String, String)>; 3],
    fallback: Locale,
}

impl Catalog {
    /// Looks up `key` for `locale`, falling back to the default locale.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.get_exact(locale, key)
            .or_else(|| self.get_exact(self.inner.fallback, key))
    }

    /// Looks up `key` for exactly `locale`, with no fallback.
    #[must_use]
    pub fn get_exact(&self, locale: Locale, key: &str) -> Option<&str> {
        let table = &self.inner.tables[locale.index()];
        table
            .binary_search_by(|(existing, _)| existing.as_str().cmp(key))
            .ok()
            .map(|idx| table[idx].1.as_str())
    }

    /// Returns the number of entries across all locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.tables.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.tables.iter().all(Vec::is_empty)
    }
}

/// Builder for [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    tables: [Vec<(String, String)>; 3],
    fallback: Locale,
}

impl CatalogBuilder {
    /// Creates an empty builder with the default fallback locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale consulted when a key is missing from the requested one.
    #[must_use]
    pub fn fallback(mut self, locale: Locale) -> Self {
        self.fallback = locale;
        self
    }

    /// Sets the text for `key` in `locale`, replacing any previous value.
    #[must_use]
    pub fn set(mut self, locale: Locale, key: impl Into<String>, text: impl Into<String>) -> Self {
        let table = &mut self.tables[locale.index()];
        let key = key.into();
        match table.binary_search_by(|(existing, _)| existing.cmp(&key)) {
            Ok(idx) => table[idx].1 = text.into(),
            Err(idx) => table.insert(idx, (key, text.into())),
        }
        self
    }

    /// Builds the immutable catalog.
    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            inner: Rc::new(CatalogData {
                tables: self.tables,
                fallback: self.fallback,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogBuilder, Locale};

    #[test]
    fn tag_roundtrip_and_default() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::from_tag_or_default("de"), Locale::Vi);
        assert_eq!(Locale::from_tag_or_default("zh"), Locale::Zh);
    }

    #[test]
    fn lookup_prefers_the_requested_locale() {
        let catalog = CatalogBuilder::new()
            .set(Locale::Vi, "status.normal", "Bình thường")
            .set(Locale::En, "status.normal", "Normal")
            .build();

        assert_eq!(catalog.get(Locale::En, "status.normal"), Some("Normal"));
        assert_eq!(catalog.get(Locale::Vi, "status.normal"), Some("Bình thường"));
    }

    #[test]
    fn missing_keys_fall_back_to_the_default_locale() {
        let catalog = CatalogBuilder::new()
            .set(Locale::Vi, "sensor.detail", "Thông số cảm biến")
            .build();

        assert_eq!(
            catalog.get(Locale::Zh, "sensor.detail"),
            Some("Thông số cảm biến")
        );
        assert_eq!(catalog.get(Locale::Zh, "sensor.other"), None);
    }

    #[test]
    fn explicit_fallback_locale() {
        let catalog = CatalogBuilder::new()
            .fallback(Locale::En)
            .set(Locale::En, "list.empty", "No sensors found")
            .build();

        assert_eq!(catalog.get(Locale::Zh, "list.empty"), Some("No sensors found"));
    }

    #[test]
    fn set_replaces_existing_entries() {
        let catalog = CatalogBuilder::new()
            .set(Locale::En, "k", "first")
            .set(Locale::En, "k", "second")
            .build();

        assert_eq!(catalog.get(Locale::En, "k"), Some("second"));
        assert_eq!(catalog.len(), 1);
    }
}
