//! Host-side viewport contract for the endstop scroll guard.
//!
//! The endstop crate never talks to a UI toolkit directly. Everything it
//! needs from the host editor (the current line layout, the document's line
//! sequence, pixel metrics, and a way to move the view) is expressed here as
//! the [`TextViewport`] trait plus a handful of small value types:
//!
//! - [`Extent`]: a line's span in document coordinates, used for identity
//!   comparison between the layout and the document.
//! - [`Visibility`] / [`ViewLine`]: one laid-out line as the host reports it.
//! - [`ScrollDirection`]: toward the document start or end.
//! - [`ViewportError`]: faults the host may raise while being queried.
//!
//! Any toolkit binding that can answer these queries and perform line-wise
//! scrolling can supply a conforming implementation; the `viewport_fixture`
//! crate provides the scripted one used by tests.

mod error;
mod extent;
mod layout;
mod traits;

pub use error::ViewportError;
pub use extent::Extent;
pub use layout::{visible_line_capacity, ViewLine, Visibility};
pub use traits::{ScrollDirection, TextViewport, VisibleLines};
