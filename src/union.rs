//! # Tag unions
//!
//! Many audio files carry more than one tag: an MP3 may have ID3v2 at the front, APE and ID3v1 at
//! the back; a FLAC file may have a Vorbis comment alongside a stray ID3v2 block. A [`TagUnion`]
//! holds one slot per tag format and answers as if it were a single tag:
//!
//! - Reads go through the slots in index order and return the first value that is present. An
//!   empty string, a zero and an empty picture collection all count as absent.
//! - Writes go to every occupied slot. Empty slots are never filled in implicitly.
//!
//! The union knows nothing about which formats exist. Whoever fills the slots decides their
//! precedence by choosing the index each format lands in.

use crate::{
    error::{Error, Result},
    PictureMap, PropertyMap, Tag,
};
use log::{debug, trace};
use std::{
    any::type_name,
    fmt,
    ops::{Index, IndexMut},
};

/// A fixed number of optional, owned tags presented as a single [`Tag`].
pub struct TagUnion<const N: usize> {
    slots: [Option<Box<dyn Tag>>; N],
}

/// A union of two tags.
pub type DoubleTagUnion = TagUnion<2>;

/// A union of three tags.
pub type TripleTagUnion = TagUnion<3>;

impl<const N: usize> TagUnion<N> {
    /// Creates a union with every slot empty.
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| None) }
    }

    /// Number of slots, occupied or not.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of slots currently holding a tag.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The tag in slot `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`try_tag`](Self::try_tag) for a checked lookup.
    pub fn tag(&self, index: usize) -> Option<&dyn Tag> {
        self[index].as_deref()
    }

    /// Mutable access to the tag in slot `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn tag_mut(&mut self, index: usize) -> Option<&mut (dyn Tag + 'static)> {
        self[index].as_deref_mut()
    }

    /// Like [`tag`](Self::tag), but reports an out-of-range `index` as an error.
    pub fn try_tag(&self, index: usize) -> Result<Option<&dyn Tag>> {
        self.slots
            .get(index)
            .map(Option::as_deref)
            .ok_or(Error::SlotOutOfRange { index, len: N })
    }

    /// Stores `tag` in slot `index`, dropping whatever was there before.
    ///
    /// Passing `None` empties the slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`try_set`](Self::try_set) for a checked store.
    pub fn set(&mut self, index: usize, tag: Option<Box<dyn Tag>>) {
        drop(self.replace(index, tag));
    }

    /// Like [`set`](Self::set), but reports an out-of-range `index` as an error.
    pub fn try_set(&mut self, index: usize, tag: Option<Box<dyn Tag>>) -> Result<()> {
        let slot = self.slot_mut(index)?;
        log_assignment(index, slot.is_some(), tag.is_some());
        *slot = tag;
        Ok(())
    }

    /// Stores `tag` in slot `index` and hands back the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn replace(&mut self, index: usize, tag: Option<Box<dyn Tag>>) -> Option<Box<dyn Tag>> {
        let slot = &mut self[index];
        log_assignment(index, slot.is_some(), tag.is_some());
        std::mem::replace(slot, tag)
    }

    /// Empties slot `index` and hands back the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn take(&mut self, index: usize) -> Option<Box<dyn Tag>> {
        self.replace(index, None)
    }

    /// Typed access to slot `index`, for code that fills the union one format at a time.
    ///
    /// If the slot is empty and `create` is set, a default `T` is stored there first. An empty
    /// slot without `create` yields `Ok(None)`.
    pub fn access<T: Tag + Default>(
        &mut self,
        index: usize,
        create: bool,
    ) -> Result<Option<&mut T>> {
        let slot = self.slot_mut(index)?;
        if slot.is_none() {
            if !create {
                return Ok(None);
            }
            debug!("Creating {} in slot {}", type_name::<T>(), index);
            *slot = Some(Box::new(T::default()));
        }
        match slot.as_deref_mut() {
            Some(tag) => match tag.as_any_mut().downcast_mut::<T>() {
                Some(tag) => Ok(Some(tag)),
                None => Err(Error::SlotTypeMismatch { index, expected: type_name::<T>() }),
            },
            None => Ok(None),
        }
    }

    /// The occupied slots' tags, in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tag> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Box<dyn Tag>>> {
        self.slots.get_mut(index).ok_or(Error::SlotOutOfRange { index, len: N })
    }

    // Returns the first value read from an occupied slot that passes `present`.
    fn first_present<T>(
        &self,
        field: &str,
        read: impl Fn(&dyn Tag) -> T,
        present: impl Fn(&T) -> bool,
    ) -> Option<T> {
        self.slots.iter().enumerate().find_map(|(index, slot)| {
            let value = read(slot.as_deref()?);
            if present(&value) {
                trace!("Read {} from slot {}", field, index);
                Some(value)
            } else {
                None
            }
        })
    }

    fn first_text(&self, field: &str, read: impl Fn(&dyn Tag) -> String) -> String {
        self.first_present(field, read, |value| !value.is_empty()).unwrap_or_default()
    }

    fn first_number(&self, field: &str, read: impl Fn(&dyn Tag) -> u32) -> u32 {
        self.first_present(field, read, |value| *value > 0).unwrap_or_default()
    }

    // Applies `write` to every occupied slot, in index order.
    fn broadcast(&mut self, field: &str, mut write: impl FnMut(&mut dyn Tag)) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(tag) = slot.as_deref_mut() {
                trace!("Writing {} to slot {}", field, index);
                write(tag);
            }
        }
    }
}

fn log_assignment(index: usize, had_tag: bool, has_tag: bool) {
    match (had_tag, has_tag) {
        (false, true) => debug!("Assigning slot {}", index),
        (true, true) => debug!("Replacing tag in slot {}", index),
        (true, false) => debug!("Releasing slot {}", index),
        (false, false) => (),
    }
}

impl<const N: usize> Tag for TagUnion<N> {
    fn title(&self) -> String {
        self.first_text("title", |tag| tag.title())
    }

    fn artist(&self) -> String {
        self.first_text("artist", |tag| tag.artist())
    }

    fn album(&self) -> String {
        self.first_text("album", |tag| tag.album())
    }

    fn comment(&self) -> String {
        self.first_text("comment", |tag| tag.comment())
    }

    fn genre(&self) -> String {
        self.first_text("genre", |tag| tag.genre())
    }

    fn year(&self) -> u32 {
        self.first_number("year", |tag| tag.year())
    }

    fn track(&self) -> u32 {
        self.first_number("track", |tag| tag.track())
    }

    fn track_total(&self) -> u32 {
        self.first_number("track total", |tag| tag.track_total())
    }

    fn track_total_text(&self) -> String {
        self.first_text("track total text", |tag| tag.track_total_text())
    }

    fn pictures(&self) -> PictureMap {
        self.first_present("pictures", |tag| tag.pictures(), |pictures| !pictures.is_empty())
            .unwrap_or_default()
    }

    fn set_title(&mut self, value: &str) {
        self.broadcast("title", |tag| tag.set_title(value));
    }

    fn set_artist(&mut self, value: &str) {
        self.broadcast("artist", |tag| tag.set_artist(value));
    }

    fn set_album(&mut self, value: &str) {
        self.broadcast("album", |tag| tag.set_album(value));
    }

    fn set_comment(&mut self, value: &str) {
        self.broadcast("comment", |tag| tag.set_comment(value));
    }

    fn set_genre(&mut self, value: &str) {
        self.broadcast("genre", |tag| tag.set_genre(value));
    }

    fn set_year(&mut self, value: u32) {
        self.broadcast("year", |tag| tag.set_year(value));
    }

    fn set_track(&mut self, value: u32) {
        self.broadcast("track", |tag| tag.set_track(value));
    }

    fn set_pictures(&mut self, pictures: &PictureMap) {
        self.broadcast("pictures", |tag| tag.set_pictures(pictures));
    }

    /// The properties of the first tag that is not empty as a whole.
    ///
    /// This gates on [`Tag::is_empty`] of each slot, not on the emptiness of any one field.
    fn properties(&self) -> PropertyMap {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot.as_deref() {
                Some(tag) if !tag.is_empty() => {
                    trace!("Read properties from slot {}", index);
                    return tag.properties();
                }
                _ => (),
            }
        }
        PropertyMap::new()
    }

    fn remove_unsupported_properties(&mut self, names: &[String]) {
        self.broadcast("unsupported properties", |tag| {
            tag.remove_unsupported_properties(names)
        });
    }

    fn is_empty(&self) -> bool {
        self.iter().all(|tag| tag.is_empty())
    }
}

impl<const N: usize> Default for TagUnion<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for TagUnion<N> {
    type Output = Option<Box<dyn Tag>>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.slots.get(index) {
            Some(slot) => slot,
            None => panic!("{}", Error::SlotOutOfRange { index, len: N }),
        }
    }
}

impl<const N: usize> IndexMut<usize> for TagUnion<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.slots.get_mut(index) {
            Some(slot) => slot,
            None => panic!("{}", Error::SlotOutOfRange { index, len: N }),
        }
    }
}

impl<const N: usize> fmt::Debug for TagUnion<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupancy: Vec<bool> = self.slots.iter().map(Option::is_some).collect();
        f.debug_struct("TagUnion").field("occupied", &occupancy).finish()
    }
}
