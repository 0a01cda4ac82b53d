use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::Escape;

/// Points inside the set are black; escaping points get brighter the faster
/// they escape, reaching near-white for an escape on the first iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreyscaleEscapeSpeed {
    max_iterations: u32,
}

impl GreyscaleEscapeSpeed {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }
}

impl ColourMap for GreyscaleEscapeSpeed {
    fn map(&self, escape: Escape) -> Colour {
        match escape {
            Escape::Inside { .. } => Colour::BLACK,
            Escape::Escaped { iterations } => {
                let speed = f64::from(iterations) / f64::from(self.max_iterations);
                Colour::grey((1.0 - speed) as f32)
            }
        }
    }

    fn display_name(&self) -> &str {
        "Greyscale escape speed"
    }
}
