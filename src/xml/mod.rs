//! XML node tree, reader, writer and the total navigation helper used by the
//! XLIFF codecs.

pub mod element;
pub mod query;

pub use element::{Document, Element, Node, escape_text, escape_value, make_element, make_text};
pub use query::{Query, Selector};
