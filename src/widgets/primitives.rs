//! Low-level paint routine shared by all widget kinds.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Text, TextStyle};

use super::{CORNER_RADIUS, TEXT_INSET};

/// Fill the widget's rounded background box and draw `text` over it.
///
/// Does no staleness checking; callers decide whether painting is needed.
/// The text anchor sits at the horizontal center of the box, `TEXT_INSET`
/// below its top edge, with the actual alignment taken from `text_style`.
pub fn paint_box<D>(
    display: &mut D,
    bounds: Rectangle,
    back_color: Rgb565,
    character_style: MonoTextStyle<'_, Rgb565>,
    text_style: TextStyle,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(bounds, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(back_color))
        .draw(display)
        .ok();

    if text.is_empty() {
        return;
    }

    let anchor = Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + TEXT_INSET,
    );
    Text::with_text_style(text, anchor, character_style, text_style)
        .draw(display)
        .ok();
}
