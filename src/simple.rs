//! A [`Tag`] that lives entirely in memory.
//!
//! Useful for building metadata from scratch before copying it into a format-specific tag with
//! [`duplicate`](crate::duplicate), or as a slot of its own in a [`TagUnion`](crate::TagUnion).

use crate::{
    tag::{set_standard_properties, standard_properties},
    PictureMap, PropertyMap, Tag,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleTag {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub comment: String,
    pub genre: String,
    pub year: u32,
    pub track: u32,
    pub track_total: u32,
    pub pictures: PictureMap,
    /// Every property that has no dedicated field above.
    pub extra: PropertyMap,
    /// Names of data held by the tag that has no text form, such as binary frames.
    pub unsupported: Vec<String>,
}

impl SimpleTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    pub fn with_track(mut self, track: u32, total: u32) -> Self {
        self.track = track;
        self.track_total = total;
        self
    }

    pub fn with_pictures(mut self, pictures: PictureMap) -> Self {
        self.pictures = pictures;
        self
    }

    pub fn with_property<S: Into<String>>(mut self, key: &str, value: S) -> Self {
        self.extra.insert(key, [value]);
        self
    }

    pub fn with_unsupported(mut self, name: impl Into<String>) -> Self {
        self.unsupported.push(name.into());
        self
    }
}

impl Tag for SimpleTag {
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

    fn properties(&self) -> PropertyMap {
        let mut map = standard_properties(self);
        for (key, values) in &self.extra {
            map.insert(key, values.iter().cloned());
        }
        for name in &self.unsupported {
            map.add_unsupported_data(name.as_str());
        }
        map
    }

    /// Stores the standard fields and keeps everything else as extra properties, so nothing is
    /// ever returned.
    fn set_properties(&mut self, properties: &PropertyMap) -> PropertyMap {
        self.extra = set_standard_properties(self, properties);
        PropertyMap::new()
    }

    /// Drops the listed unsupported data. Text properties are left alone.
    fn remove_unsupported_properties(&mut self, names: &[String]) {
        self.unsupported.retain(|held| !names.contains(held));
    }

    fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.artist.is_empty()
            && self.album.is_empty()
            && self.comment.is_empty()
            && self.genre.is_empty()
            && self.year == 0
            && self.track == 0
            && self.track_total == 0
            && self.pictures.is_empty()
            && self.extra.is_empty()
            && self.unsupported.is_empty()
    }
}
