//! The Gramps document model.
//!
//! One struct per element of the Gramps 1.7.1 DTD. Field conventions:
//!
//! - mandatory attribute or element: plain field, default value when the
//!   source omits it;
//! - optional attribute or element: `Option<T>`, so absent, present-false and
//!   present-true stay distinguishable;
//! - repeated element: `Vec<T>` in source order, empty when absent;
//! - date: `Option<DateValue>`, at most one of the four date shapes.
//!
//! The `priv` attribute is exposed as `private`; `type` keeps its name as
//! `r#type`. References to other records hold the target's handle and are
//! never resolved here.

mod citation;
mod common;
mod date;
mod document;
mod event;
mod family;
mod media;
mod note;
mod person;
mod place;
mod repository;
mod source;
mod tag;

pub use citation::Citation;
pub use common::{
    Address, Attribute, EventRef, HandleRef, LdsOrd, LdsValue, RepoRef, SrcAttribute, Url,
};
pub use date::{DateRange, DateStr, DateVal, DateValue};
pub use document::{
    Bookmark, Bookmarks, Citations, Created, Document, Events, Families, Header, Map, NameFormat,
    Namemaps, Notes, Objects, People, Places, Repositories, Researcher, Sources, Tags,
};
pub use event::Event;
pub use family::{ChildRef, Family, Rel};
pub use media::{File, MediaObject, ObjRef, Region};
pub use note::{Note, Range, Style};
pub use person::{Name, Person, PersonRef, Surname};
pub use place::{Coord, Location, PlaceName, PlaceObj, PlaceRef};
pub use repository::Repository;
pub use source::Source;
pub use tag::Tag;
