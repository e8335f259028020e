use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::DisplayBlock;

/// Left margin of every line, in pixels.
pub const LEFT_MARGIN: i32 = 5;
/// Vertical distance between consecutive lines, in pixels.
pub const LINE_PITCH: i32 = 8;

/// A screen that shows one [`DisplayBlock`] at a time.
pub trait DisplayOutput {
    type Error;

    /// Replaces whatever is on screen with `block`, and pushes it to the device.
    fn render(&mut self, block: &DisplayBlock) -> Result<(), Self::Error>;
}

/// Clears `target` and draws `block` into it, one line per [`LINE_PITCH`], top to bottom.
///
/// Drivers with an off-screen buffer call this and then flush.
pub fn draw_block<D>(target: &mut D, block: &DisplayBlock) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

    target.clear(BinaryColor::Off)?;
    let mut y = 0;
    for line in block.iter() {
        Text::with_baseline(line, Point::new(LEFT_MARGIN, y), style, Baseline::Top).draw(target)?;
        y += LINE_PITCH;
    }

    Ok(())
}
