//! Font references and pre-built label styles.
//!
//! `LabelStyle` values are plain `Copy` data, so the presets here are
//! `const`: they live in the binary's read-only data section and cost
//! nothing to hand to a widget constructor. Dynamic styling (e.g. flipping
//! a button to its active color) goes through the widget's color setters
//! instead of building a new style.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::Alignment,
};
use profont::PROFONT_24_POINT;

use crate::colors::{BUTTON, BUTTON_ACTIVE, TEXT, TITLE_BACKGROUND, TITLE_TEXT};
use crate::widgets::LabelStyle;

// =============================================================================
// Font References
// =============================================================================

/// Large font for the countdown digits (`ProFont` 24pt).
pub const TIMER_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for buttons and headlines (10x20 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_10X20;

/// Small font for auxiliary text (6x10 pixels).
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Label Style Presets (const - zero runtime cost)
// =============================================================================

/// Title bar and list headers: medium font on dark gray.
pub const TITLE_STYLE: LabelStyle = LabelStyle::new(TITLE_BACKGROUND, TITLE_TEXT, LABEL_FONT, 1, Alignment::Center);

/// Idle on-screen button: medium font on navy.
pub const BUTTON_STYLE: LabelStyle = LabelStyle::new(BUTTON, TEXT, LABEL_FONT, 1, Alignment::Center);

/// Active control: medium font on olive.
pub const BUTTON_ACTIVE_STYLE: LabelStyle = LabelStyle::new(BUTTON_ACTIVE, TEXT, LABEL_FONT, 1, Alignment::Center);

/// The countdown display itself: large font on navy.
pub const TIMER_STYLE: LabelStyle = LabelStyle::new(BUTTON, TEXT, TIMER_FONT, 1, Alignment::Center);
