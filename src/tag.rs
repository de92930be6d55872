//! # Tags
//!
//! A [`Tag`] is one block of metadata written in one format convention: an ID3v2 frame set, an
//! APE item list, a Vorbis comment, and so on. This crate never parses any of those; it only
//! relies on the accessor surface below, which every format can provide.
//!
//! Absence is not modelled separately from emptiness: an empty string and a zero number both
//! mean "not set", so a tag cannot distinguish an explicit zero year from a missing one.

use crate::{PictureMap, PropertyMap};
use std::any::Any;

const TITLE: &str = "TITLE";
const ARTIST: &str = "ARTIST";
const ALBUM: &str = "ALBUM";
const COMMENT: &str = "COMMENT";
const GENRE: &str = "GENRE";
const DATE: &str = "DATE";
const TRACK_NUMBER: &str = "TRACKNUMBER";

/// Upcast to [`Any`], so a slot holding a `dyn Tag` can be downcast to its concrete type.
///
/// Implemented for every `'static` type; there is no need to implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub trait Tag: AsAny {
    fn title(&self) -> String;
    fn artist(&self) -> String;
    fn album(&self) -> String;
    fn comment(&self) -> String;
    fn genre(&self) -> String;
    fn year(&self) -> u32;
    fn track(&self) -> u32;
    fn track_total(&self) -> u32;
    fn pictures(&self) -> PictureMap;

    /// The total track count as text, for formats that store it as a free-form string.
    fn track_total_text(&self) -> String {
        match self.track_total() {
            0 => String::new(),
            total => total.to_string(),
        }
    }

    fn set_title(&mut self, value: &str);
    fn set_artist(&mut self, value: &str);
    fn set_album(&mut self, value: &str);
    fn set_comment(&mut self, value: &str);
    fn set_genre(&mut self, value: &str);
    fn set_year(&mut self, value: u32);
    fn set_track(&mut self, value: u32);
    fn set_pictures(&mut self, pictures: &PictureMap);

    /// Exports the tag as a property map.
    ///
    /// The default only knows about the standard fields, see [`standard_properties`]. Formats
    /// able to store arbitrary keys should override it.
    fn properties(&self) -> PropertyMap {
        standard_properties(self)
    }

    /// Replaces the tag's contents with `properties`, returning whatever could not be stored.
    ///
    /// The default only knows about the standard fields, see [`set_standard_properties`].
    fn set_properties(&mut self, properties: &PropertyMap) -> PropertyMap {
        set_standard_properties(self, properties)
    }

    /// Drops the named unsupported data, as previously reported through
    /// [`PropertyMap::unsupported_data`]. Formats with nothing unsupported can ignore this.
    fn remove_unsupported_properties(&mut self, _names: &[String]) {}

    fn is_empty(&self) -> bool {
        self.title().is_empty()
            && self.artist().is_empty()
            && self.album().is_empty()
            && self.comment().is_empty()
            && self.genre().is_empty()
            && self.year() == 0
            && self.track() == 0
    }
}

/// Builds a property map from the standard fields of `tag`.
///
/// Text fields map to `TITLE`, `ARTIST`, `ALBUM`, `COMMENT` and `GENRE`, numbers to `DATE` and
/// `TRACKNUMBER`. Empty strings and zeros are left out.
pub fn standard_properties<T: Tag + ?Sized>(tag: &T) -> PropertyMap {
    let mut map = PropertyMap::new();
    for (key, value) in [
        (TITLE, tag.title()),
        (ARTIST, tag.artist()),
        (ALBUM, tag.album()),
        (COMMENT, tag.comment()),
        (GENRE, tag.genre()),
    ] {
        if !value.is_empty() {
            map.insert(key, [value]);
        }
    }
    for (key, value) in [(DATE, tag.year()), (TRACK_NUMBER, tag.track())] {
        if value > 0 {
            map.insert(key, [value.to_string()]);
        }
    }
    map
}

/// Stores the standard keys of `properties` in `tag` through its setters.
///
/// The first value of each standard key is stored; standard fields missing from `properties` are
/// cleared. Everything that was not stored is returned: non-standard keys, further values of
/// standard keys, and `DATE`/`TRACKNUMBER` values that are not numbers.
pub fn set_standard_properties<T: Tag + ?Sized>(
    tag: &mut T,
    properties: &PropertyMap,
) -> PropertyMap {
    let mut rest = properties.clone();
    rest.remove_empty();

    let first = |key: &str| rest.get(key).and_then(|values| values.first()).cloned();

    let mut consumed = Vec::new();
    let text_setters: [(&str, fn(&mut T, &str)); 5] = [
        (TITLE, T::set_title),
        (ARTIST, T::set_artist),
        (ALBUM, T::set_album),
        (COMMENT, T::set_comment),
        (GENRE, T::set_genre),
    ];
    for (key, set) in text_setters {
        match first(key) {
            Some(value) => {
                set(tag, &value);
                consumed.push(key);
            }
            None => set(tag, ""),
        }
    }

    let number_setters: [(&str, fn(&mut T, u32)); 2] =
        [(DATE, T::set_year), (TRACK_NUMBER, T::set_track)];
    for (key, set) in number_setters {
        match first(key).and_then(|value| value.trim().parse().ok()) {
            Some(value) => {
                set(tag, value);
                consumed.push(key);
            }
            None => set(tag, 0),
        }
    }

    for key in consumed {
        rest.pop_front(key);
    }
    rest
}

/// Copies the standard fields of `source` into `target`.
///
/// When `overwrite` is false, only fields that are empty in `target` are filled in.
pub fn duplicate(source: &dyn Tag, target: &mut dyn Tag, overwrite: bool) {
    if overwrite || target.title().is_empty() {
        target.set_title(&source.title());
    }
    if overwrite || target.artist().is_empty() {
        target.set_artist(&source.artist());
    }
    if overwrite || target.album().is_empty() {
        target.set_album(&source.album());
    }
    if overwrite || target.comment().is_empty() {
        target.set_comment(&source.comment());
    }
    if overwrite || target.genre().is_empty() {
        target.set_genre(&source.genre());
    }
    if overwrite || target.year() == 0 {
        target.set_year(source.year());
    }
    if overwrite || target.track() == 0 {
        target.set_track(source.track());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only implements the required methods, so every default is exercised.
    #[derive(Default)]
    struct Bare {
        title: String,
        artist: String,
        album: String,
        comment: String,
        genre: String,
        year: u32,
        track: u32,
        track_total: u32,
        pictures: PictureMap,
    }

    impl Tag for Bare {
        fn title(&self) -> String {
            self.title.clone()
        }
        fn artist(&self) -> String {
            self.artist.clone()
        }
        fn album(&self) -> String {
            self.album.clone()
        }
        fn comment(&self) -> String {
            self.comment.clone()
        }
        fn genre(&self) -> String {
            self.genre.clone()
        }
        fn year(&self) -> u32 {
            self.year
        }
        fn track(&self) -> u32 {
            self.track
        }
        fn track_total(&self) -> u32 {
            self.track_total
        }
        fn pictures(&self) -> PictureMap {
            self.pictures.clone()
        }
        fn set_title(&mut self, value: &str) {
            self.title = value.to_owned();
        }
        fn set_artist(&mut self, value: &str) {
            self.artist = value.to_owned();
        }
        fn set_album(&mut self, value: &str) {
            self.album = value.to_owned();
        }
        fn set_comment(&mut self, value: &str) {
            self.comment = value.to_owned();
        }
        fn set_genre(&mut self, value: &str) {
            self.genre = value.to_owned();
        }
        fn set_year(&mut self, value: u32) {
            self.year = value;
        }
        fn set_track(&mut self, value: u32) {
            self.track = value;
        }
        fn set_pictures(&mut self, pictures: &PictureMap) {
            self.pictures = pictures.clone();
        }
    }

    #[test]
    fn default_emptiness() {
        let mut tag = Bare::default();
        assert!(tag.is_empty());
        // The total track count is not one of the fields that make a tag non-empty
        tag.track_total = 12;
        assert!(tag.is_empty());
        tag.year = 1999;
        assert!(!tag.is_empty());
    }

    #[test]
    fn track_total_text_follows_number() {
        let mut tag = Bare::default();
        assert_eq!(tag.track_total_text(), "");
        tag.track_total = 9;
        assert_eq!(tag.track_total_text(), "9");
    }

    #[test]
    fn default_properties_skip_absent_fields() {
        let tag = Bare { title: "Foo".into(), year: 2001, ..Default::default() };
        let map = tag.properties();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("TITLE").unwrap(), ["Foo"]);
        assert_eq!(map.get("DATE").unwrap(), ["2001"]);
        assert!(!map.contains("TRACKNUMBER"));
    }

    #[test]
    fn default_set_properties_returns_leftovers() {
        let mut tag = Bare { genre: "Jazz".into(), track: 4, ..Default::default() };
        let mut map = PropertyMap::new();
        map.insert("title", ["One", "Two"]);
        map.insert("DATE", ["not a year"]);
        map.insert("ARTIST", ["Someone"]);
        map.insert("MOOD", ["Calm"]);

        let rest = tag.set_properties(&map);

        assert_eq!(tag.title, "One");
        assert_eq!(tag.artist, "Someone");
        // Missing standard keys clear their field
        assert_eq!(tag.genre, "");
        assert_eq!(tag.track, 0);
        // Unparsable numbers clear the field and are handed back
        assert_eq!(tag.year, 0);

        assert_eq!(rest.get("TITLE").unwrap(), ["Two"]);
        assert_eq!(rest.get("DATE").unwrap(), ["not a year"]);
        assert_eq!(rest.get("MOOD").unwrap(), ["Calm"]);
        assert!(!rest.contains("ARTIST"));
    }

    #[test]
    fn duplicate_respects_overwrite() {
        let source = Bare {
            title: "New".into(),
            artist: "Band".into(),
            year: 2020,
            ..Default::default()
        };
        let mut target = Bare { title: "Old".into(), ..Default::default() };

        duplicate(&source, &mut target, false);
        assert_eq!(target.title, "Old");
        assert_eq!(target.artist, "Band");
        assert_eq!(target.year, 2020);

        duplicate(&source, &mut target, true);
        assert_eq!(target.title, "New");
    }

    #[test]
    fn downcast_through_as_any() {
        let mut tag: Box<dyn Tag> = Box::new(Bare::default());
        tag.set_title("Foo");
        // Calling `as_any` on the box itself would downcast the box, not the tag
        let bare = (*tag).as_any().downcast_ref::<Bare>().unwrap();
        assert_eq!(bare.title, "Foo");
    }
}
