//! Text label widget with last-painted state tracking.
//!
//! A [`Label`] is a rounded box on the display holding a text string, a
//! text color and a background color. It remembers what it painted last
//! and [`Label::redraw`] becomes a no-op while nothing visible changed.
//!
//! Text is copied into owned fixed-capacity storage at assignment
//! (truncating at [`LABEL_TEXT_MAX`] characters), so the caller keeps no
//! lifetime obligations toward the widget.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use heapless::String;

use super::{BOX_PADDING, LABEL_TEXT_MAX, MIN_WIDTH_CHARS, Widget, primitives};

// =============================================================================
// Style
// =============================================================================

/// Visual style of a label, fixed at construction except for the two
/// colors (which have setters on the widget).
///
/// See [`crate::styles`] for const presets wired to the palette.
#[derive(Clone, Copy, Debug)]
pub struct LabelStyle {
    /// Fill color of the background box.
    pub back_color: Rgb565,
    /// Color of the text.
    pub text_color: Rgb565,
    /// Monospaced font used for drawing and for sizing the box.
    pub font: &'static MonoFont<'static>,
    /// Integer scale factor applied to the font metrics when sizing.
    pub text_size: u32,
    /// Horizontal text alignment within the box.
    pub alignment: Alignment,
}

impl LabelStyle {
    pub const fn new(
        back_color: Rgb565,
        text_color: Rgb565,
        font: &'static MonoFont<'static>,
        text_size: u32,
        alignment: Alignment,
    ) -> Self {
        Self { back_color, text_color, font, text_size, alignment }
    }
}

// =============================================================================
// Baseline Snapshot
// =============================================================================

/// Last-painted text, with two special states.
///
/// `Forced` is the construction-time sentinel: it compares unequal to any
/// content, including the empty string, so the first redraw always paints.
/// `Blank` records a paint without content and compares equal to empty
/// current text, so "no content" never looks stale against itself.
#[derive(Clone, Debug, PartialEq, Eq)]
enum DrawnText {
    Forced,
    Blank,
    Text(String<LABEL_TEXT_MAX>),
}

impl DrawnText {
    /// Snapshot the text that was just painted.
    fn record(text: &str) -> Self {
        if text.is_empty() {
            Self::Blank
        } else {
            let mut copy = String::new();
            copy.push_str(text).ok();
            Self::Text(copy)
        }
    }

    /// Whether `current` matches this snapshot (empty ≡ blank).
    fn matches(&self, current: &str) -> bool {
        match self {
            Self::Forced => false,
            Self::Blank => current.is_empty(),
            Self::Text(drawn) => drawn.as_str() == current,
        }
    }
}

// =============================================================================
// Label
// =============================================================================

/// A rectangular, independently repaintable text element.
pub struct Label {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    back_color: Rgb565,
    text_color: Rgb565,
    font: &'static MonoFont<'static>,
    text_style: TextStyle,
    text: String<LABEL_TEXT_MAX>,
    // Baseline: what the display currently shows.
    drawn_text: DrawnText,
    drawn_back_color: Rgb565,
    drawn_text_color: Rgb565,
}

impl Label {
    /// Create a label at `position`.
    ///
    /// The box is sized from the font metrics: height is the scaled line
    /// height plus [`BOX_PADDING`]; width budgets the larger of
    /// `max_chars`, the initial text length and [`MIN_WIDTH_CHARS`]
    /// characters at the scaled glyph advance, plus [`BOX_PADDING`].
    pub fn new(position: Point, style: LabelStyle, max_chars: u32, initial_text: Option<&str>) -> Self {
        let mut text = String::new();
        if let Some(initial) = initial_text {
            copy_truncated(&mut text, initial);
        }

        let advance = style.font.character_size.width + style.font.character_spacing;
        let chars = max_chars.max(text.chars().count() as u32).max(MIN_WIDTH_CHARS);

        Self {
            x: position.x,
            y: position.y,
            width: chars * advance * style.text_size + BOX_PADDING,
            height: style.font.character_size.height * style.text_size + BOX_PADDING,
            back_color: style.back_color,
            text_color: style.text_color,
            font: style.font,
            text_style: TextStyleBuilder::new()
                .alignment(style.alignment)
                .baseline(Baseline::Top)
                .build(),
            text,
            drawn_text: DrawnText::Forced,
            drawn_back_color: style.back_color,
            drawn_text_color: style.text_color,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text and request a non-forced redraw.
    pub fn set_text<D>(&mut self, display: &mut D, text: &str)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.assign_text(text);
        self.redraw(display, false);
    }

    /// Change the background color. With `immediate` unset the change
    /// stays pending until the next redraw request from elsewhere.
    pub fn set_back_color<D>(&mut self, display: &mut D, color: Rgb565, immediate: bool)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.back_color = color;
        if immediate {
            self.redraw(display, false);
        }
    }

    /// Change the text color. Same deferral rule as [`Self::set_back_color`].
    pub fn set_text_color<D>(&mut self, display: &mut D, color: Rgb565, immediate: bool)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text_color = color;
        if immediate {
            self.redraw(display, false);
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the top-left corner. Does not repaint: the caller must force
    /// a redraw afterwards, and the pixels at the old position stay put.
    pub fn move_to(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Repaint if text or colors differ from the last-painted state, or
    /// unconditionally when `force` is set. Returns whether it painted.
    pub fn redraw<D>(&mut self, display: &mut D, force: bool) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !force && self.colors_clean() && self.drawn_text.matches(self.text.as_str()) {
            return false;
        }
        self.paint(display);
        true
    }

    /// Unconditional repaint; always resynchronizes the baseline.
    pub fn draw<D>(&mut self, display: &mut D) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.redraw(display, true)
    }

    /// Replace the owned text without requesting a redraw.
    pub(crate) fn assign_text(&mut self, text: &str) {
        self.text.clear();
        copy_truncated(&mut self.text, text);
    }

    /// Whether both colors match the last-painted state.
    pub(crate) fn colors_clean(&self) -> bool {
        self.text_color == self.drawn_text_color && self.back_color == self.drawn_back_color
    }

    /// Paint box and text unconditionally, then record the baseline.
    /// Shared by [`Label::redraw`] and the value widget's redraw.
    pub(crate) fn paint<D>(&mut self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        log::trace!("repainting {}x{} label at ({}, {})", self.width, self.height, self.x, self.y);
        primitives::paint_box(
            display,
            self.bounds(),
            self.back_color,
            MonoTextStyle::new(self.font, self.text_color),
            self.text_style,
            self.text.as_str(),
        );
        self.drawn_back_color = self.back_color;
        self.drawn_text_color = self.text_color;
        self.drawn_text = DrawnText::record(self.text.as_str());
    }
}

impl Widget for Label {
    fn redraw<D>(&mut self, display: &mut D, force: bool) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Label::redraw(self, display, force)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

/// Copy `src` into `dst`, dropping characters past the capacity.
fn copy_truncated<const N: usize>(dst: &mut String<N>, src: &str) {
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
