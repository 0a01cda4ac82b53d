pub mod adapters;
pub mod cli;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::interactive::{FrameData, FrameListener, RenderSession, SessionError};
pub use crate::controllers::still::still_controller::StillRenderController;
pub use crate::core::actions::render_pass::render_pass::{
    PassParams, render_pass, render_pass_cancelable,
};
pub use crate::core::colour_maps::greyscale::GreyscaleEscapeSpeed;
pub use crate::core::config::render_config::{ConfigError, RenderConfig};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::viewport::{MoveDirection, Viewport, ZoomDirection};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
