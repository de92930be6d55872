//! # TagUnion
//!
//! Audio files routinely carry several metadata tags at once, each in a different format. This
//! library presents a fixed number of them as one [`Tag`]:
//!
//! - Reads return the value from the first slot that has one, so slot order is precedence.
//! - Writes are applied to every occupied slot.
//!
//! Parsing and serializing the individual formats is left to the code that fills the slots; all
//! it has to do is implement [`Tag`].
//!
//! ```
//! use tagunion::{DoubleTagUnion, SimpleTag, Tag};
//!
//! let mut union = DoubleTagUnion::new();
//! union.set(1, Some(Box::new(SimpleTag::new().with_title("Fallback").with_year(1997))));
//! assert_eq!(union.title(), "Fallback");
//!
//! union.set(0, Some(Box::new(SimpleTag::new().with_title("Preferred"))));
//! assert_eq!(union.title(), "Preferred");
//! assert_eq!(union.year(), 1997);
//!
//! union.set_genre("Ambient");
//! assert_eq!(union.tag(1).unwrap().genre(), "Ambient");
//! ```

#[macro_use]
mod utils;

pub mod error;
pub mod picture;
pub mod property_map;
pub mod simple;
pub mod tag;
pub mod union;

pub use error::Error;
pub use picture::{Picture, PictureMap, PictureType};
pub use property_map::PropertyMap;
pub use simple::SimpleTag;
pub use tag::{duplicate, Tag};
pub use union::{DoubleTagUnion, TagUnion, TripleTagUnion};
