//! Color constants for the timer display.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to many embedded displays (ILI9341, ST7789) and
//! requires no conversion when writing to the display buffer.
//!
//! Standard colors come from the `RgbColor` and `WebColors` traits of
//! `embedded_graphics` rather than hand-built `Rgb565::new(r, g, b)`
//! values, so the channel values are guaranteed correct.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

// =============================================================================
// Base Palette
// =============================================================================

/// Pure black (0, 0, 0). General screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). General text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Navy blue. Background of the title bar and idle buttons.
pub const NAVY: Rgb565 = Rgb565::CSS_NAVY;

/// Olive. Background of the currently active control.
pub const OLIVE: Rgb565 = Rgb565::CSS_OLIVE;

/// Dark gray. Background of list headers.
pub const DARK_GRAY: Rgb565 = Rgb565::CSS_DARK_GRAY;

// =============================================================================
// Role Aliases
// =============================================================================
//
// The UI code refers to colors by role, so restyling the whole screen is
// a matter of changing the aliases here.

/// General screen background.
pub const BACKGROUND: Rgb565 = BLACK;

/// Background of title bar and buttons (identical in this palette).
pub const BUTTON: Rgb565 = NAVY;

/// Background of an active control.
pub const BUTTON_ACTIVE: Rgb565 = OLIVE;

/// General text color.
pub const TEXT: Rgb565 = WHITE;

/// Background for list/section headers.
pub const TITLE_BACKGROUND: Rgb565 = DARK_GRAY;

/// Text color for list/section headers.
pub const TITLE_TEXT: Rgb565 = TEXT;
