//! Time-driven playback
//!
//! - [`controller`]: transport controls (play, pause, resume, step, speed) over
//!   a precomputed sort timeline
//! - [`insert`]: live animation of a single insert trace, guarded by a [`LiveFlag`]
//! - [`scheduler`]: the single-slot cancellable tick both of them use
//! - [`display`]: the [`DisplayState`] renderers read
//!
//! # Timing Model
//!
//! There are no threads. The event loop passes the current [`Instant`] to
//! `poll`, and a transition happens only when a scheduled tick is due. Every
//! new schedule cancels the previous one, so at most one transition per
//! stream is ever pending.
//!
//! [`Instant`]: std::time::Instant

pub mod controller;
pub mod display;
pub mod insert;
pub mod scheduler;

pub use controller::{PlaybackController, PlaybackState};
pub use display::DisplayState;
pub use insert::{InsertAnimation, InsertProgress, LiveFlag};
pub use scheduler::{TickId, TickScheduler};
