//! # Embedded pictures
//!
//! Audio tags may embed any number of images (cover art, artist photos, ...). Each picture
//! carries a role taken from the list shared by ID3v2 `APIC` frames and FLAC `PICTURE` blocks,
//! so a [`PictureMap`] groups pictures by that role.
//!
//! ## Related Links
//!
//! - [ID3v2.4 native frames, section 4.14](https://id3.org/id3v2.4.0-frames)
//! - [FLAC format, METADATA_BLOCK_PICTURE](https://xiph.org/flac/format.html#metadata_block_picture)

use std::collections::{btree_map, BTreeMap};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum PictureType {
    #[default]
    Other = 0x00,
    FileIcon = 0x01,
    OtherFileIcon = 0x02,
    FrontCover = 0x03,
    BackCover = 0x04,
    LeafletPage = 0x05,
    Media = 0x06,
    LeadArtist = 0x07,
    Artist = 0x08,
    Conductor = 0x09,
    Band = 0x0A,
    Composer = 0x0B,
    Lyricist = 0x0C,
    RecordingLocation = 0x0D,
    DuringRecording = 0x0E,
    DuringPerformance = 0x0F,
    MovieScreenCapture = 0x10,
    ColouredFish = 0x11,
    Illustration = 0x12,
    BandLogo = 0x13,
    PublisherLogo = 0x14,
}

impl From<u8> for PictureType {
    fn from(byte: u8) -> Self {
        use PictureType::*;
        match byte {
            0x01 => FileIcon,
            0x02 => OtherFileIcon,
            0x03 => FrontCover,
            0x04 => BackCover,
            0x05 => LeafletPage,
            0x06 => Media,
            0x07 => LeadArtist,
            0x08 => Artist,
            0x09 => Conductor,
            0x0A => Band,
            0x0B => Composer,
            0x0C => Lyricist,
            0x0D => RecordingLocation,
            0x0E => DuringRecording,
            0x0F => DuringPerformance,
            0x10 => MovieScreenCapture,
            0x11 => ColouredFish,
            0x12 => Illustration,
            0x13 => BandLogo,
            0x14 => PublisherLogo,
            // Unknown roles are kept as pictures, just without a role
            _ => Other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Picture {
    pub mime: String,
    pub description: String,
    pub kind: PictureType,
    pub data: Vec<u8>,
}

impl Picture {
    pub fn new(kind: PictureType, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self { mime: mime.into(), description: String::new(), kind, data }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PictureMap(BTreeMap<PictureType, Vec<Picture>>);

impl PictureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `picture` under its own [`PictureType`], after any pictures already there.
    pub fn insert(&mut self, picture: Picture) {
        self.0.entry(picture.kind).or_default().push(picture);
    }

    pub fn get(&self, kind: PictureType) -> &[Picture] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn remove(&mut self, kind: PictureType) -> Vec<Picture> {
        self.0.remove(&kind).unwrap_or_default()
    }

    /// Total number of pictures across every type.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Picture> {
        self.0.values().flatten()
    }

    pub fn types(&self) -> btree_map::Keys<'_, PictureType, Vec<Picture>> {
        self.0.keys()
    }
}

impl FromIterator<Picture> for PictureMap {
    fn from_iter<T: IntoIterator<Item = Picture>>(iter: T) -> Self {
        let mut map = Self::new();
        for picture in iter {
            map.insert(picture);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_type_from_byte() {
        assert_eq!(PictureType::from(0x03), PictureType::FrontCover);
        assert_eq!(PictureType::from(0x14), PictureType::PublisherLogo);
        assert_eq!(PictureType::from(0xFF), PictureType::Other);
        assert_eq!(PictureType::BackCover as u8, 0x04);
    }

    #[test]
    fn pictures_group_by_type() {
        let map: PictureMap = [
            Picture::new(PictureType::FrontCover, "image/png", vec![1]),
            Picture::new(PictureType::BackCover, "image/jpeg", vec![2]),
            Picture::new(PictureType::FrontCover, "image/jpeg", vec![3]),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(PictureType::FrontCover).len(), 2);
        assert_eq!(map.get(PictureType::FrontCover)[1].data, vec![3]);
        assert!(map.get(PictureType::Media).is_empty());
        assert_eq!(map.types().count(), 2);
    }

    #[test]
    fn empty_lists_do_not_count() {
        let mut map = PictureMap::new();
        map.insert(Picture::new(PictureType::Artist, "image/png", vec![]));
        assert!(!map.is_empty());
        map.remove(PictureType::Artist);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
