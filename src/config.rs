//! Screen layout and timing constants for the countdown timer UI.
//!
//! Layout values like the main-area bounds are computed at compile time as
//! `const`, so the rendering code never recalculates positions per frame.
//! All of this is static configuration data: the widgets in
//! [`crate::widgets`] take positions and sizes as plain parameters and do
//! not depend on anything here.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (320x240 landscape TFT).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Largest valid X coordinate.
pub const MAX_X: i32 = SCREEN_WIDTH as i32 - 1;

/// Largest valid Y coordinate.
pub const MAX_Y: i32 = SCREEN_HEIGHT as i32 - 1;

// =============================================================================
// Main Area (caption row and button row excluded)
// =============================================================================

/// Left edge of the main area.
pub const MAIN_LEFT: i32 = 0;

/// Top edge of the main area, below the caption row.
pub const MAIN_TOP: i32 = 32;

/// Width of the main area (full screen width).
pub const MAIN_WIDTH: u32 = SCREEN_WIDTH;

/// Height of the main area (caption and button rows take 32px each).
pub const MAIN_HEIGHT: u32 = SCREEN_HEIGHT - 64;

/// Right edge of the main area.
pub const MAIN_RIGHT: i32 = MAIN_LEFT + MAIN_WIDTH as i32 - 1;

/// Bottom edge of the main area.
pub const MAIN_BOTTOM: i32 = MAIN_TOP + MAIN_HEIGHT as i32 - 1;

// =============================================================================
// Button Row
// =============================================================================
//
// The three buttons sit on a fixed row near the bottom edge, horizontally
// aligned with the physical buttons below the screen.

/// Y coordinate of the on-screen button labels.
pub const BUTTONS_Y: i32 = SCREEN_HEIGHT as i32 - 28;

/// X coordinate of the left button label.
pub const LEFT_BUTTON_X: i32 = 40;

/// X coordinate of the middle button label.
pub const MIDDLE_BUTTON_X: i32 = 134;

/// X coordinate of the right button label.
pub const RIGHT_BUTTON_X: i32 = 228;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Length of one tick of the main loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Holding a button longer than this counts as repeated presses.
pub const BUTTON_REPEAT_AFTER: Duration = Duration::from_millis(400);

// =============================================================================
// Countdown Defaults
// =============================================================================

/// Starting minutes when no previous setting is stored.
pub const FALLBACK_INITIAL_MINUTES: i16 = 5;

/// Starting seconds when no previous setting is stored.
pub const FALLBACK_INITIAL_SECONDS: i16 = 0;

/// Step size when adjusting the seconds value.
pub const SECONDS_STEP: i16 = 5;
