use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::Escape;

/// Turns an escape classification into a display colour. Every escape
/// outcome has a colour, so mapping cannot fail.
pub trait ColourMap: Send + Sync {
    fn map(&self, escape: Escape) -> Colour;

    fn display_name(&self) -> &str;
}
