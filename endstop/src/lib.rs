//! Stop mouse-wheel scrolling at the last line of a document.
//!
//! Host editors usually let the view keep scrolling after the final line,
//! leaving a stretch of empty space below the text. `endstop` intercepts
//! wheel events in front of the host's default scroller and corrects the
//! landing position so the document's last line ends up flush with the
//! viewport bottom, never past it. Upward scrolling is untouched.
//!
//! The host is abstracted behind [`endstop_viewport::TextViewport`]; attach
//! a [`WheelInterceptor`] to each view and feed it raw [`WheelEvent`]s:
//!
//! ```
//! use endstop::{WheelEvent, WheelInterceptor};
//! use viewport_fixture::FixtureViewport;
//!
//! // 100-line document, 20 lines visible.
//! let view = FixtureViewport::new(100, 300.0, 15.0).with_top(70);
//! let mut guard = WheelInterceptor::new(view);
//!
//! // Ten notches toward the end lands exactly bottom-aligned.
//! let mut event = WheelEvent::new(-300.0);
//! guard.handle(&mut event);
//! assert!(event.is_handled());
//! guard.viewport().assert_top(80);
//! ```
//!
//! Every event comes back marked handled, even when a host fault forces the
//! guard to give up mid-pass; faults go to the configured
//! [`DiagnosticSink`] instead of escaping into event dispatch.

mod corrector;
mod diagnostics;
mod error;
mod event;
mod interceptor;
mod settings;

pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use error::{CorrectionError, Result};
pub use event::{ScrollRequest, WheelEvent};
pub use interceptor::WheelInterceptor;
pub use settings::{WheelSettings, DEFAULT_DELTA_PER_LINE};
