//! # Property maps
//!
//! A property map is the format-agnostic view of a tag: every piece of metadata is a key (such as
//! `TITLE` or `REPLAYGAIN_TRACK_GAIN`) mapped to one or more string values. Keys are compared
//! case-insensitively and are stored upper-cased.
//!
//! Tags may also hold data that cannot be expressed as text properties (binary frames, for
//! example). A tag reports those through [`PropertyMap::unsupported_data`] so a caller can later
//! ask for them to be dropped with [`Tag::remove_unsupported_properties`].
//!
//! [`Tag::remove_unsupported_properties`]: crate::Tag::remove_unsupported_properties

use std::collections::{btree_map, BTreeMap};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: BTreeMap<String, Vec<String>>,
    unsupported: Vec<String>,
}

fn normalize(key: &str) -> String {
    key.to_uppercase()
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `values` to the list stored under `key`, creating it if needed.
    pub fn insert<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(normalize(key))
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// Stores `values` under `key`, discarding whatever was there before.
    pub fn replace<I, S>(&mut self, key: &str, values: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(normalize(key), values.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(&normalize(key)).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(&normalize(key))
    }

    /// Number of keys, not values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no keys. Unsupported data does not count.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Drops every key whose value list is empty.
    pub fn remove_empty(&mut self) {
        self.entries.retain(|_, values| !values.is_empty());
    }

    pub fn unsupported_data(&self) -> &[String] {
        &self.unsupported
    }

    pub fn add_unsupported_data(&mut self, name: impl Into<String>) {
        self.unsupported.push(name.into());
    }

    /// Removes the first value stored under `key`, and the key itself once it runs out of values.
    pub(crate) fn pop_front(&mut self, key: &str) {
        let key = normalize(key);
        if let Some(values) = self.entries.get_mut(&key) {
            if values.len() <= 1 {
                self.entries.remove(&key);
            } else {
                values.remove(0);
            }
        }
    }
}

pub struct Iter<'a>(btree_map::Iter<'a, String, Vec<String>>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for PropertyMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key.as_ref(), [value]);
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut map = PropertyMap::new();
        map.insert("Title", ["Foo"]);
        assert!(map.contains("TITLE"));
        assert_eq!(map.get("title"), Some(&["Foo".to_string()][..]));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["TITLE"]);
    }

    #[test]
    fn insert_appends_and_replace_overwrites() {
        let mut map = PropertyMap::new();
        map.insert("ARTIST", ["A"]);
        map.insert("artist", ["B"]);
        assert_eq!(map.get("ARTIST").unwrap(), ["A", "B"]);

        let old = map.replace("ARTIST", ["C"]);
        assert_eq!(old, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(map.get("ARTIST").unwrap(), ["C"]);
    }

    #[test]
    fn remove_empty_drops_bare_keys() {
        let mut map = PropertyMap::new();
        map.insert("GENRE", Vec::<String>::new());
        map.insert("ALBUM", ["Bar"]);
        assert_eq!(map.len(), 2);
        map.remove_empty();
        assert_eq!(map.len(), 1);
        assert!(!map.contains("GENRE"));
    }

    #[test]
    fn pop_front_consumes_values_then_key() {
        let mut map: PropertyMap = [("COMMENT", "one"), ("COMMENT", "two")].into_iter().collect();
        map.pop_front("comment");
        assert_eq!(map.get("COMMENT").unwrap(), ["two"]);
        map.pop_front("comment");
        assert!(map.is_empty());
        // Popping a missing key is a no-op
        map.pop_front("comment");
        assert!(map.is_empty());
    }

    #[test]
    fn unsupported_data_is_not_a_property() {
        let mut map = PropertyMap::new();
        map.add_unsupported_data("APIC");
        assert!(map.is_empty());
        assert_eq!(map.unsupported_data(), ["APIC"]);
    }
}
