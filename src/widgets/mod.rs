//! Stateful, redrawable display widgets.
//!
//! Two widget kinds share one redraw protocol:
//!
//! - [`Label`]: a rounded box holding a text string
//! - [`ValueLabel`]: the same box rendering a bounded `i16` through a
//!   printf-style format pattern
//!
//! # Architecture
//!
//! Each widget owns a snapshot of the visual fields it painted last (the
//! *baseline*). [`Widget::redraw`] compares current fields against the
//! baseline and returns without touching the display when nothing changed;
//! otherwise it repaints its bounding box through the shared low-level
//! paint routine and copies the current fields into the baseline. The
//! baseline starts out as a sentinel that compares unequal to any real
//! content, so the first non-forced redraw always paints.
//!
//! Mutators that change a visual field (text, value, colors with
//! `immediate` set) request a non-forced redraw right away. Geometry
//! mutators never repaint: after `move_to` the caller must force a redraw
//! itself, and nothing erases the pixels at the old position.
//!
//! Widgets draw straight to the caller's `DrawTarget` with no coordination
//! between instances; keeping bounding boxes disjoint is the layout's job.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

mod label;
mod primitives;
mod value;

pub use label::{Label, LabelStyle};
pub use value::{FormatError, ValueLabel};

// =============================================================================
// Shared Widget Constants
// =============================================================================

/// Corner radius of the widget background box.
pub const CORNER_RADIUS: u32 = 3;

/// Padding added to the text footprint in both directions.
pub const BOX_PADDING: u32 = 8;

/// Vertical inset of the text within the box (half the padding).
pub const TEXT_INSET: i32 = (BOX_PADDING / 2) as i32;

/// Minimum width of a widget, in characters, when neither an explicit
/// character budget nor initial text is given.
pub const MIN_WIDTH_CHARS: u32 = 3;

/// Capacity of a label's owned text storage.
pub const LABEL_TEXT_MAX: usize = 32;

/// Capacity of the formatted-value buffer of a [`ValueLabel`]. Format
/// patterns whose worst-case output exceeds this are rejected at
/// construction.
pub const VALUE_TEXT_MAX: usize = 16;

/// Common redraw protocol of all widgets.
///
/// `redraw` reports whether a repaint actually happened, which is also the
/// only way to observe that a deferred color change is still pending.
pub trait Widget {
    /// Repaint if any visual field differs from the last-painted state,
    /// or unconditionally when `force` is set. Returns `true` if the
    /// display was touched.
    fn redraw<D>(&mut self, display: &mut D, force: bool) -> bool
    where
        D: DrawTarget<Color = Rgb565>;

    /// Unconditional repaint; always resynchronizes the baseline.
    fn draw<D>(&mut self, display: &mut D) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.redraw(display, true)
    }

    /// The widget's bounding box on the display.
    fn bounds(&self) -> Rectangle;
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use core::convert::Infallible;

    use embedded_graphics::Pixel;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    /// A display stub that only counts how many pixels get written.
    ///
    /// Repaint-exactly-once properties are asserted on the pixel count:
    /// a no-op redraw leaves it unchanged.
    pub struct CountingDisplay {
        pub pixels: usize,
    }

    impl CountingDisplay {
        pub fn new() -> Self {
            Self { pixels: 0 }
        }
    }

    impl OriginDimensions for CountingDisplay {
        fn size(&self) -> Size {
            Size::new(320, 240)
        }
    }

    impl DrawTarget for CountingDisplay {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            self.pixels += pixels.into_iter().count();
            Ok(())
        }
    }
}
