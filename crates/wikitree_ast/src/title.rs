//! Page identity types: titles, namespaces and languages.
//!
//! Title resolution itself happens upstream of the tree. These types carry the
//! already-resolved identity that nodes need for locators and template lookups.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A wiki language edition, identified by its wiki code (`en`, `de`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language {
    wiki_code: Cow<'static, str>,
}

impl Language {
    pub const ENGLISH: Language = Language::from_static("en");
    pub const GERMAN: Language = Language::from_static("de");
    pub const FRENCH: Language = Language::from_static("fr");

    /// Creates a language from a static wiki code.
    pub const fn from_static(wiki_code: &'static str) -> Self {
        Self {
            wiki_code: Cow::Borrowed(wiki_code),
        }
    }

    /// Creates a language from an owned wiki code.
    pub fn new(wiki_code: impl Into<String>) -> Self {
        Self {
            wiki_code: Cow::Owned(wiki_code.into()),
        }
    }

    /// Returns the wiki code.
    pub fn wiki_code(&self) -> &str {
        &self.wiki_code
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wiki_code)
    }
}

/// A MediaWiki namespace, identified by its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(i32);

impl Namespace {
    pub const MAIN: Namespace = Namespace(0);
    pub const USER: Namespace = Namespace(2);
    pub const FILE: Namespace = Namespace(6);
    pub const TEMPLATE: Namespace = Namespace(10);
    pub const CATEGORY: Namespace = Namespace(14);

    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the numeric namespace code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns the canonical prefix, or `None` for the main namespace and
    /// namespaces without a known canonical name.
    pub const fn prefix(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("User"),
            6 => Some("File"),
            10 => Some("Template"),
            14 => Some("Category"),
            _ => None,
        }
    }
}

/// A resolved page title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WikiTitle {
    decoded: String,
    namespace: Namespace,
    language: Language,
}

impl WikiTitle {
    pub fn new(decoded: impl Into<String>, namespace: Namespace, language: Language) -> Self {
        Self {
            decoded: decoded.into(),
            namespace,
            language,
        }
    }

    /// Shorthand for a main-namespace title in the default language.
    pub fn main(decoded: impl Into<String>) -> Self {
        Self::new(decoded, Namespace::MAIN, Language::default())
    }

    /// Shorthand for a template-namespace title in the default language.
    pub fn template(decoded: impl Into<String>) -> Self {
        Self::new(decoded, Namespace::TEMPLATE, Language::default())
    }

    /// The human-readable title, without namespace prefix.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The title with underscores for spaces, without namespace prefix.
    pub fn encoded(&self) -> String {
        self.decoded.replace(' ', "_")
    }

    /// The encoded title including the namespace prefix, if any.
    pub fn encoded_with_namespace(&self) -> String {
        match self.namespace.prefix() {
            Some(prefix) => format!("{}:{}", prefix, self.encoded()),
            None => self.encoded(),
        }
    }

    /// Canonical locator of the page on its wiki.
    pub fn page_iri(&self) -> String {
        format!(
            "http://{}.wikipedia.org/wiki/{}",
            self.language.wiki_code(),
            self.encoded_with_namespace()
        )
    }
}

impl fmt::Display for WikiTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.prefix() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.decoded),
            None => f.write_str(&self.decoded),
        }
    }
}
