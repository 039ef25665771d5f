//! The lookup protocol: turning a `{section => key}` argument into a [`SectionKey`].
//!
//! Reads and writes are addressed with a single pair whose first half names
//! the section and whose second half names the key.  Any argument type that
//! implements [`Lookup`] is accepted, and its shape is checked explicitly:
//!
//! | Argument                                   | Result                     |
//! |--------------------------------------------|----------------------------|
//! | `("header", "project")`                    | `header` / `project`       |
//! | one-entry `HashMap`/`BTreeMap`/`IndexMap`  | its only pair              |
//! | `[("header", "project")]`                  | its only pair              |
//! | empty or multi-entry map, array or slice   | [`ConfigError::LookupShape`] |
//! | a bare string such as `"hi"`               | [`ConfigError::LookupShape`] |
//! | `None`, or a pair with a `None` half       | [`ConfigError::LookupShape`] |
//!
//! Each half is stringified through [`LookupPart`], so `("constants", 3)`
//! addresses key `"3"`.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;

use crate::error::ConfigError;

/// A validated section name plus key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub section: String,
    pub key: String,
}

impl SectionKey {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.section, self.key)
    }
}

/// One half of a lookup pair.  `None` means the half is absent.
pub trait LookupPart {
    fn lookup_part(&self) -> Option<String>;
}

impl LookupPart for str {
    fn lookup_part(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl LookupPart for String {
    fn lookup_part(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl LookupPart for Cow<'_, str> {
    fn lookup_part(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl LookupPart for () {
    fn lookup_part(&self) -> Option<String> {
        None
    }
}

impl<T: LookupPart + ?Sized> LookupPart for &T {
    fn lookup_part(&self) -> Option<String> {
        (**self).lookup_part()
    }
}

impl<T: LookupPart> LookupPart for Option<T> {
    fn lookup_part(&self) -> Option<String> {
        self.as_ref().and_then(LookupPart::lookup_part)
    }
}

macro_rules! display_lookup_part {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LookupPart for $ty {
                fn lookup_part(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_lookup_part!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// An argument that addresses one entry of a document.
pub trait Lookup {
    /// Validates the argument's shape and extracts the section and key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LookupShape`] unless the argument is exactly one
    /// pair with both halves present.
    fn section_key(&self) -> Result<SectionKey, ConfigError>;
}

fn pair<S, K>(section: &S, key: &K) -> Result<SectionKey, ConfigError>
where
    S: LookupPart + ?Sized,
    K: LookupPart + ?Sized,
{
    match (section.lookup_part(), key.lookup_part()) {
        (Some(section), Some(key)) => Ok(SectionKey { section, key }),
        _ => Err(ConfigError::LookupShape),
    }
}

fn single_entry<S, K>(len: usize, first: Option<(&S, &K)>) -> Result<SectionKey, ConfigError>
where
    S: LookupPart,
    K: LookupPart,
{
    match (len, first) {
        (1, Some((section, key))) => pair(section, key),
        _ => Err(ConfigError::LookupShape),
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        (**self).section_key()
    }
}

impl<L: Lookup> Lookup for Option<L> {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        self.as_ref()
            .ok_or(ConfigError::LookupShape)
            .and_then(Lookup::section_key)
    }
}

impl Lookup for SectionKey {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        Ok(self.clone())
    }
}

// A scalar is never a `{section => key}` pair.
impl Lookup for str {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        Err(ConfigError::LookupShape)
    }
}

impl Lookup for String {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        Err(ConfigError::LookupShape)
    }
}

impl Lookup for () {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        Err(ConfigError::LookupShape)
    }
}

impl<S: LookupPart, K: LookupPart> Lookup for (S, K) {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        pair(&self.0, &self.1)
    }
}

impl<S: LookupPart, K: LookupPart, H> Lookup for HashMap<S, K, H> {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        single_entry(self.len(), self.iter().next())
    }
}

impl<S: LookupPart, K: LookupPart> Lookup for BTreeMap<S, K> {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        single_entry(self.len(), self.iter().next())
    }
}

impl<S: LookupPart, K: LookupPart, H> Lookup for IndexMap<S, K, H> {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        single_entry(self.len(), self.iter().next())
    }
}

impl<S: LookupPart, K: LookupPart> Lookup for [(S, K)] {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        single_entry(self.len(), self.first().map(|(s, k)| (s, k)))
    }
}

impl<S: LookupPart, K: LookupPart, const N: usize> Lookup for [(S, K); N] {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        self.as_slice().section_key()
    }
}

impl<S: LookupPart, K: LookupPart> Lookup for Vec<(S, K)> {
    fn section_key(&self) -> Result<SectionKey, ConfigError> {
        self.as_slice().section_key()
    }
}
