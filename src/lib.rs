//! # Introduction
//!
//! heapviz animates a binary max-heap: inserts bubble up node by node, and a
//! heap sort can be played, paused, stepped backward and forward, and sped up
//! or slowed down in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! insert:  Input → MaxHeap::insert → trace → InsertAnimation → DisplayState
//! sort:    MaxHeap (clone) → generate_sort_steps → PlaybackController → DisplayState
//! ```
//!
//! 1. [`heap`]: the instrumented max-heap; every mutating call returns the
//!    compare/swap trace it performed.
//! 2. [`snapshot`]: runs a whole heap sort on a private copy and records one
//!    immutable [`snapshot::Step`] per visible moment.
//! 3. [`playback`]: cursor and transport controls over the steps, the live
//!    insert animation, and cancellable tick scheduling.
//! 4. [`visualizer`]: the operations the UI calls (add, sort, reset,
//!    play/pause, step, speed, export).
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Supporting modules: [`config`] (timings, limits, CLI), [`validation`],
//! [`export`], [`errors`], [`logging`].

pub mod config;
pub mod errors;
pub mod export;
pub mod heap;
pub mod logging;
pub mod playback;
pub mod snapshot;
pub mod ui;
pub mod validation;
pub mod visualizer;
