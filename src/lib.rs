//! Dirty-tracked label widgets for small RGB565 displays.
//!
//! This crate provides the display layer of a countdown-timer style UI:
//! rectangular, independently repaintable text boxes that track their
//! last-painted state and skip redundant draw calls.
//!
//! - [`widgets`]: the core [`Label`] / [`ValueLabel`] types and their
//!   redraw protocol
//! - [`colors`]: RGB565 palette constants
//! - [`config`]: screen layout and timing constants
//! - [`styles`]: font references and pre-built [`LabelStyle`] presets
//!
//! # Redraw Protocol
//!
//! Every widget keeps a snapshot of the visual fields it painted last
//! (text or numeric value, text color, background color). A call to
//! [`Widget::redraw`] compares current fields against that snapshot and
//! only touches the display when something differs or the caller forces
//! it. Mutators that change a visual field request a non-forced redraw
//! immediately, so a widget is repainted at most once per actual change.
//!
//! # no_std Compatibility
//!
//! The library is `no_std` and allocation-free: all text lives in
//! fixed-capacity `heapless` strings sized at compile time. The optional
//! `simulator` feature adds a desktop demo binary on top of
//! `embedded-graphics-simulator`.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use widgets::{FormatError, Label, LabelStyle, ValueLabel, Widget};
