//! Product catalog: millet name → storefront URL

use crate::core::string::normalize_name;
use std::collections::BTreeMap;

/// Collection page used when no product matches
pub const FALLBACK_PRODUCT_URL: &str = "https://milletamma.com/collections/millet-basket";

const DEFAULT_PRODUCT_URLS: &[(&str, &str)] = &[
    ("pearl", "https://milletamma.com/products/bajra-perl-milet-flour-organic-500gm"),
    ("foxtail", "https://milletamma.com/products/foxtail-millet-organic-500gm"),
    ("finger", "https://milletamma.com/products/ragi-finger-millet-flour-organic-500gm"),
    ("barnyard", "https://milletamma.com/products/barnyard-millet-organic-500gm"),
    ("little", "https://milletamma.com/products/little-millet-organic-500gm"),
    ("kodo", "https://milletamma.com/products/kodo-millet-organic-500gm"),
    ("proso", "https://milletamma.com/products/proso-millet-organic-500gm"),
    ("sorghum", "https://milletamma.com/products/jowar-sorghum-flour-organic-500gm"),
    ("bajra", "https://milletamma.com/products/bajra-perl-milet-flour-organic-500gm"),
    ("ragi", "https://milletamma.com/products/ragi-finger-millet-flour-organic-500gm"),
    ("jowar", "https://milletamma.com/products/jowar-sorghum-flour-organic-500gm"),
    ("kangni", "https://milletamma.com/products/foxtail-millet-organic-500gm"),
    ("kutki", "https://milletamma.com/products/little-millet-organic-500gm"),
    ("sama", "https://milletamma.com/products/barnyard-millet-organic-500gm"),
    ("chena", "https://milletamma.com/products/proso-millet-organic-500gm"),
];

const MILLET_SUFFIX: &str = " millet";

/// Normalize a recommendation name into a storefront key.
///
/// Lowercases, strips a trailing `" millet"`, and trims: `"Ragi Millet"` → `"ragi"`.
pub fn normalize_product_key(name: &str) -> String {
    let lower = normalize_name(name);
    lower
        .strip_suffix(MILLET_SUFFIX)
        .unwrap_or(lower.as_str())
        .trim()
        .to_string()
}

/// How a name was resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkMatch {
    /// The normalized name is a catalog key
    Exact,
    /// The named catalog key and the normalized name contain one another
    Partial(String),
    /// Nothing matched; the collection page is used
    Fallback,
}

/// A resolved storefront link (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLink {
    /// Normalized key that was looked up
    pub key: String,
    pub url: String,
    pub matched: LinkMatch,
}

/// Read-only lookup table from normalized millet keys to product URLs
///
/// Keys are held in a `BTreeMap` so partial matches are scanned in ascending
/// key order: the first match wins and is the same on every run, whatever
/// order the table was built in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    urls: BTreeMap<String, String>,
    fallback_url: String,
}

impl ProductCatalog {
    pub fn new<K, V>(urls: impl IntoIterator<Item = (K, V)>, fallback_url: impl Into<String>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            urls: urls
                .into_iter()
                .map(|(k, v)| (normalize_name(k.as_ref()), v.into()))
                .filter(|(k, _)| !k.is_empty())
                .collect(),
            fallback_url: fallback_url.into(),
        }
    }

    /// Add or replace entries, keeping the rest of the table.
    pub fn with_overrides<K, V>(mut self, urls: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (k, v) in urls {
            let key = normalize_name(k.as_ref());
            if !key.is_empty() {
                self.urls.insert(key, v.into());
            }
        }
        self
    }

    pub fn with_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = url.into();
        self
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Resolve a millet name to a storefront link.
    ///
    /// Exact key match first, then the first key (ascending) that is a
    /// substring of the name or contains it, then the fallback URL.
    pub fn resolve(&self, name: &str) -> ProductLink {
        let key = normalize_product_key(name);

        if key.is_empty() {
            return self.fallback(key);
        }

        if let Some(url) = self.urls.get(&key) {
            return ProductLink {
                key,
                url: url.clone(),
                matched: LinkMatch::Exact,
            };
        }

        let partial = self
            .urls
            .iter()
            .find(|(candidate, _)| key.contains(candidate.as_str()) || candidate.contains(&key));

        match partial {
            Some((candidate, url)) => ProductLink {
                url: url.clone(),
                matched: LinkMatch::Partial(candidate.clone()),
                key,
            },
            None => self.fallback(key),
        }
    }

    fn fallback(&self, key: String) -> ProductLink {
        ProductLink {
            key,
            url: self.fallback_url.clone(),
            matched: LinkMatch::Fallback,
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_URLS.iter().copied(), FALLBACK_PRODUCT_URL)
    }
}
