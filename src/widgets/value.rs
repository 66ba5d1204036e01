//! Integer-valued label widget.
//!
//! A [`ValueLabel`] renders a bounded `i16` through a printf-style format
//! pattern. Staleness is decided on the numeric value itself, never on the
//! formatted string: for a fixed pattern, equal values format identically,
//! so comparing the cheap representation is enough.
//!
//! The pattern is parsed and validated at construction. A pattern whose
//! worst-case output would not fit the fixed-capacity text buffer is
//! rejected with [`FormatError`] instead of overflowing at render time.

use core::fmt::Write;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;
use thiserror::Error;

use super::{Label, LabelStyle, VALUE_TEXT_MAX, Widget};

/// Pattern used when the caller supplies none: plain decimal.
const DEFAULT_FORMAT: &str = "%d";

/// Widest possible `i16` rendering ("-32768").
const MAX_VALUE_CHARS: usize = 6;

// =============================================================================
// Format Pattern
// =============================================================================

/// Reasons a format pattern is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The pattern contains no `%d` conversion.
    #[error("format pattern has no %d conversion")]
    MissingConversion,
    /// The pattern contains more than one conversion.
    #[error("format pattern has more than one conversion")]
    MultipleConversions,
    /// A conversion other than `%d` (with optional `0` flag and width).
    #[error("unsupported conversion character `{0}`")]
    UnsupportedConversion(char),
    /// The pattern ends in the middle of a conversion.
    #[error("format pattern ends inside a conversion")]
    TruncatedConversion,
    /// Worst-case output exceeds the formatted-text buffer.
    #[error("worst-case output of {needed} chars exceeds the {capacity}-char buffer")]
    Overflow { needed: usize, capacity: usize },
}

/// One token scanned out of the pattern.
enum Token {
    Literal(char),
    Conversion { width: u8, zero_pad: bool },
}

/// Scan the token starting at `ch`; `rest` is advanced past it.
fn next_token(ch: char, rest: &mut core::str::Chars<'_>) -> Result<Token, FormatError> {
    if ch != '%' {
        return Ok(Token::Literal(ch));
    }
    let mut cur = rest.next().ok_or(FormatError::TruncatedConversion)?;
    if cur == '%' {
        return Ok(Token::Literal('%'));
    }

    let zero_pad = cur == '0';
    if zero_pad {
        cur = rest.next().ok_or(FormatError::TruncatedConversion)?;
    }
    let mut width: u32 = 0;
    while let Some(digit) = cur.to_digit(10) {
        width = (width * 10 + digit).min(u32::from(u8::MAX));
        cur = rest.next().ok_or(FormatError::TruncatedConversion)?;
    }
    if cur != 'd' {
        return Err(FormatError::UnsupportedConversion(cur));
    }
    Ok(Token::Conversion { width: width as u8, zero_pad })
}

/// A validated printf-subset pattern: literal text around exactly one `%d`
/// conversion with optional `0` flag and minimum width. `%%` escapes a
/// literal percent sign.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValueFormat {
    prefix: String<VALUE_TEXT_MAX>,
    suffix: String<VALUE_TEXT_MAX>,
    width: u8,
    zero_pad: bool,
}

impl ValueFormat {
    /// Parse and validate `pattern`.
    ///
    /// Worst-case output length is the literal text plus the larger of the
    /// requested width and the widest `i16`; patterns exceeding
    /// [`VALUE_TEXT_MAX`] are rejected here so rendering can never overflow
    /// the buffer.
    fn parse(pattern: &str) -> Result<Self, FormatError> {
        let mut parsed = Self {
            prefix: String::new(),
            suffix: String::new(),
            width: 0,
            zero_pad: false,
        };
        let mut literal_chars = 0usize;
        let mut seen = false;

        // First pass: locate the conversion and bound the output length.
        let mut chars = pattern.chars();
        while let Some(ch) = chars.next() {
            match next_token(ch, &mut chars)? {
                Token::Literal(_) => literal_chars += 1,
                Token::Conversion { width, zero_pad } => {
                    if seen {
                        return Err(FormatError::MultipleConversions);
                    }
                    seen = true;
                    parsed.width = width;
                    parsed.zero_pad = zero_pad;
                }
            }
        }
        if !seen {
            return Err(FormatError::MissingConversion);
        }
        let needed = literal_chars + MAX_VALUE_CHARS.max(parsed.width as usize);
        if needed > VALUE_TEXT_MAX {
            return Err(FormatError::Overflow { needed, capacity: VALUE_TEXT_MAX });
        }

        // Second pass: store the literals around the conversion. The
        // pushes cannot fail, the total length was just validated.
        let mut in_suffix = false;
        let mut chars = pattern.chars();
        while let Some(ch) = chars.next() {
            // Token errors were already caught in the first pass.
            match next_token(ch, &mut chars) {
                Ok(Token::Literal(literal)) if in_suffix => {
                    parsed.suffix.push(literal).ok();
                }
                Ok(Token::Literal(literal)) => {
                    parsed.prefix.push(literal).ok();
                }
                Ok(Token::Conversion { .. }) => in_suffix = true,
                Err(_) => break,
            }
        }

        Ok(parsed)
    }

    /// Format `value` into a fresh buffer. The capacity was validated at
    /// parse time, so the writes cannot fail.
    fn render(&self, value: i16) -> String<VALUE_TEXT_MAX> {
        let mut out: String<VALUE_TEXT_MAX> = String::new();
        out.push_str(self.prefix.as_str()).ok();
        let width = self.width as usize;
        if width == 0 {
            write!(out, "{value}").ok();
        } else if self.zero_pad {
            write!(out, "{value:0width$}").ok();
        } else {
            write!(out, "{value:width$}").ok();
        }
        out.push_str(self.suffix.as_str()).ok();
        out
    }
}

// =============================================================================
// ValueLabel
// =============================================================================

/// A [`Label`] specialized for a bounded integer value.
///
/// The box geometry comes from `max_chars` exactly as for a plain label;
/// the formatted value is not consulted for sizing, so the caller's
/// character budget should cover the widest expected rendering.
pub struct ValueLabel {
    label: Label,
    value: i16,
    drawn_value: i16,
    format: ValueFormat,
}

impl ValueLabel {
    /// Create a value label at `position`.
    ///
    /// `format` defaults to plain decimal (`"%d"`). The baseline value is
    /// initialized to the bitwise complement of `initial_value` so the
    /// first redraw always paints; the initial text is formatted here so
    /// that first paint already shows correct content.
    pub fn new(
        position: Point,
        style: LabelStyle,
        max_chars: u32,
        initial_value: i16,
        format: Option<&str>,
    ) -> Result<Self, FormatError> {
        let format = ValueFormat::parse(format.unwrap_or(DEFAULT_FORMAT)).inspect_err(|err| {
            log::debug!("rejecting value label format pattern: {err}");
        })?;

        let mut this = Self {
            label: Label::new(position, style, max_chars, None),
            value: initial_value,
            drawn_value: !initial_value,
            format,
        };
        let text = this.format.render(this.value);
        this.label.assign_text(text.as_str());
        Ok(this)
    }

    /// The current value.
    pub fn value(&self) -> i16 {
        self.value
    }

    /// Replace the value and request a non-forced redraw.
    pub fn set_value<D>(&mut self, display: &mut D, value: i16)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.value = value;
        self.redraw(display, false);
    }

    /// Repaint if the value or a color differs from the last-painted
    /// state, or unconditionally when `force` is set.
    ///
    /// The value is formatted only when a repaint actually happens.
    pub fn redraw<D>(&mut self, display: &mut D, force: bool) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !force && self.label.colors_clean() && self.value == self.drawn_value {
            return false;
        }
        let text = self.format.render(self.value);
        self.label.assign_text(text.as_str());
        self.label.paint(display);
        self.drawn_value = self.value;
        true
    }

    /// Unconditional repaint; always resynchronizes the baseline.
    pub fn draw<D>(&mut self, display: &mut D) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.redraw(display, true)
    }

    /// The formatted text currently held by the widget.
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Change the background color; dispatches to this widget's own
    /// redraw so the staleness check covers the value.
    pub fn set_back_color<D>(&mut self, display: &mut D, color: Rgb565, immediate: bool)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.label.set_back_color(display, color, false);
        if immediate {
            self.redraw(display, false);
        }
    }

    /// Change the text color. Same deferral rule as [`Self::set_back_color`].
    pub fn set_text_color<D>(&mut self, display: &mut D, color: Rgb565, immediate: bool)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.label.set_text_color(display, color, false);
        if immediate {
            self.redraw(display, false);
        }
    }

    // Geometry passes straight through to the inner label.

    pub fn width(&self) -> u32 {
        self.label.width()
    }

    pub fn height(&self) -> u32 {
        self.label.height()
    }

    pub fn set_width(&mut self, width: u32) {
        self.label.set_width(width);
    }

    pub fn set_height(&mut self, height: u32) {
        self.label.set_height(height);
    }

    pub fn x(&self) -> i32 {
        self.label.x()
    }

    pub fn y(&self) -> i32 {
        self.label.y()
    }

    pub fn position(&self) -> Point {
        self.label.position()
    }

    /// See [`Label::move_to`]: no repaint, no erase at the old position.
    pub fn move_to(&mut self, position: Point) {
        self.label.move_to(position);
    }
}

impl Widget for ValueLabel {
    fn redraw<D>(&mut self, display: &mut D, force: bool) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        ValueLabel::redraw(self, display, force)
    }

    fn bounds(&self) -> Rectangle {
        Widget::bounds(&self.label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::text::Alignment;

    use super::*;
    use crate::colors::{NAVY, OLIVE, WHITE};
    use crate::widgets::testing::CountingDisplay;

    fn test_style() -> LabelStyle {
        LabelStyle::new(NAVY, WHITE, &FONT_6X10, 1, Alignment::Center)
    }

    fn test_label(initial_value: i16, format: Option<&str>) -> ValueLabel {
        ValueLabel::new(Point::zero(), test_style(), 6, initial_value, format).expect("test pattern must parse")
    }

    // -------------------------------------------------------------------------
    // Format Pattern Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_plain_decimal() {
        let format = ValueFormat::parse("%d").expect("plain decimal must parse");
        assert_eq!(format.render(42).as_str(), "42");
        assert_eq!(format.render(-7).as_str(), "-7");
        assert_eq!(format.render(i16::MIN).as_str(), "-32768");
    }

    #[test]
    fn test_zero_padded_width() {
        let format = ValueFormat::parse("%02d").expect("zero-padded width must parse");
        assert_eq!(format.render(7).as_str(), "07");
        assert_eq!(format.render(42).as_str(), "42");
        assert_eq!(format.render(-7).as_str(), "-7", "the sign counts toward the width");
    }

    #[test]
    fn test_space_padded_width() {
        let format = ValueFormat::parse("%4d").expect("width must parse");
        assert_eq!(format.render(5).as_str(), "   5");
        assert_eq!(format.render(12345).as_str(), "12345", "width is a minimum, not a cap");
    }

    #[test]
    fn test_literals_and_percent_escape() {
        let format = ValueFormat::parse("t=%3ds").expect("literals must parse");
        assert_eq!(format.render(5).as_str(), "t=  5s");

        let format = ValueFormat::parse("%d%%").expect("%% escape must parse");
        assert_eq!(format.render(50).as_str(), "50%");
    }

    #[test]
    fn test_rejected_patterns() {
        assert_eq!(ValueFormat::parse("seconds"), Err(FormatError::MissingConversion));
        assert_eq!(ValueFormat::parse("%d:%d"), Err(FormatError::MultipleConversions));
        assert_eq!(ValueFormat::parse("%x"), Err(FormatError::UnsupportedConversion('x')));
        assert_eq!(ValueFormat::parse("%f"), Err(FormatError::UnsupportedConversion('f')));
        assert_eq!(ValueFormat::parse("100%"), Err(FormatError::TruncatedConversion));
        assert_eq!(ValueFormat::parse("%03"), Err(FormatError::TruncatedConversion));
    }

    #[test]
    fn test_overflowing_pattern_rejected() {
        // 12 literal chars + 6 worst-case digits = 18 > 16
        assert_eq!(
            ValueFormat::parse("temperature %d"),
            Err(FormatError::Overflow { needed: 18, capacity: VALUE_TEXT_MAX })
        );
        // A huge width alone blows the budget
        assert_eq!(
            ValueFormat::parse("%32d"),
            Err(FormatError::Overflow { needed: 32, capacity: VALUE_TEXT_MAX })
        );
        // 10 literal chars + 6 digits = 16 still fits
        assert!(ValueFormat::parse("1234567890%d").is_ok());
    }

    #[test]
    fn test_constructor_propagates_format_error() {
        let result = ValueLabel::new(Point::zero(), test_style(), 6, 0, Some("%q"));
        assert_eq!(result.err(), Some(FormatError::UnsupportedConversion('q')));
    }

    // -------------------------------------------------------------------------
    // Redraw Protocol Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_redraw_forced_by_sentinel() {
        let mut display = CountingDisplay::new();
        let mut widget = test_label(42, None);

        assert!(widget.redraw(&mut display, false), "complemented baseline must force the first paint");
        assert!(!widget.redraw(&mut display, false), "second redraw with no change must be a no-op");
    }

    #[test]
    fn test_value_change_renders_new_text() {
        let mut display = CountingDisplay::new();
        let mut widget = test_label(42, Some("%d"));

        widget.draw(&mut display);
        assert_eq!(widget.text(), "42");

        widget.set_value(&mut display, -7);
        assert_eq!(widget.text(), "-7", "repaint must re-render the formatted text");
        assert_eq!(widget.value(), -7);
        assert!(!widget.redraw(&mut display, false), "baseline resynchronized after the repaint");
    }

    #[test]
    fn test_repeated_same_value_repaints_once() {
        let mut display = CountingDisplay::new();
        let mut widget = test_label(10, None);
        widget.draw(&mut display);

        let painted = display.pixels;
        widget.set_value(&mut display, 10);
        widget.set_value(&mut display, 10);
        widget.set_value(&mut display, 10);
        assert_eq!(display.pixels, painted, "identical values must not repaint");
    }

    #[test]
    fn test_initial_text_formatted_before_first_paint() {
        let widget = test_label(305, Some("%02d"));
        assert_eq!(widget.text(), "305", "constructor must pre-format the initial value");
    }

    #[test]
    fn test_color_change_dispatches_to_value_redraw() {
        let mut display = CountingDisplay::new();
        let mut widget = test_label(3, None);
        widget.draw(&mut display);

        // Deferred: nothing painted yet.
        let painted = display.pixels;
        widget.set_back_color(&mut display, OLIVE, false);
        assert_eq!(display.pixels, painted, "deferred color change must not repaint");

        // The pending color flushes through the value-aware redraw.
        assert!(widget.redraw(&mut display, false));
        assert_eq!(widget.text(), "3");
        assert!(!widget.redraw(&mut display, false));

        // Immediate path repaints right away.
        widget.set_text_color(&mut display, OLIVE, true);
        assert!(!widget.redraw(&mut display, false), "immediate change already painted");
    }

    #[test]
    fn test_draw_always_repaints() {
        let mut display = CountingDisplay::new();
        let mut widget = test_label(1, None);

        assert!(widget.draw(&mut display));
        let painted = display.pixels;
        assert!(widget.draw(&mut display), "draw bypasses the staleness check");
        assert!(display.pixels > painted);
    }

    #[test]
    fn test_sentinel_differs_even_for_zero() {
        // !0 == -1, so value 0 still forces the first paint.
        let mut display = CountingDisplay::new();
        let mut widget = test_label(0, None);
        assert!(widget.redraw(&mut display, false));
    }

    #[test]
    fn test_geometry_delegation() {
        let mut widget = test_label(0, None);
        assert_eq!(widget.width(), 6 * 6 + 8, "width comes from the max_chars budget");
        assert_eq!(widget.height(), 10 + 8);

        widget.move_to(Point::new(11, 13));
        assert_eq!(widget.position(), Point::new(11, 13));
        assert_eq!((widget.x(), widget.y()), (11, 13));

        widget.set_width(70);
        widget.set_height(30);
        let bounds = Widget::bounds(&widget);
        assert_eq!(bounds.size, Size::new(70, 30));
    }
}
