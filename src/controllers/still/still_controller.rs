use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::actions::render_pass::render_pass::{PassParams, render_pass};
use crate::core::colour_maps::greyscale::GreyscaleEscapeSpeed;
use crate::core::config::render_config::{ConfigError, RenderConfig};
use crate::core::data::frame_buffer::FrameBuffer;

/// Renders a single frame synchronously and hands it to a file presenter.
/// No session, no background thread.
pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    /// Renders the configured initial view at the finest configured sample
    /// size.
    pub fn render(
        &mut self,
        config: &RenderConfig,
        width: u32,
        height: u32,
    ) -> Result<Duration, ConfigError> {
        config.validate()?;

        let fractal = config.build_fractal()?;
        let colour_map = GreyscaleEscapeSpeed::new(config.max_iterations);
        let params = PassParams {
            width,
            height,
            sample_size: config.sample_size_bounds()?.min(),
            viewport: config.initial_viewport(),
        };

        info!(
            "rendering {} ({}) {}x{} at {} with sample size {}, {} iterations",
            fractal.kind().display_name(),
            colour_map.display_name(),
            width,
            height,
            params.viewport,
            params.sample_size,
            config.max_iterations
        );

        let start = Instant::now();
        self.frame = Some(render_pass(&params, &fractal, &colour_map));
        let duration = start.elapsed();

        debug!("still render took {:?}", duration);

        Ok(duration)
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, filepath.as_ref())?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockFilePresenter {
        presented: RefCell<Vec<(u32, u32, PathBuf)>>,
    }

    impl FilePresenterPort for &MockFilePresenter {
        fn present(&self, frame: &FrameBuffer, filepath: &Path) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((frame.width(), frame.height(), filepath.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn test_render_then_write_presents_frame() {
        let presenter = MockFilePresenter::default();
        let mut controller = StillRenderController::new(&presenter);
        let config = RenderConfig {
            max_iterations: 50,
            initial_scale: 3.0,
            ..RenderConfig::default()
        };

        controller.render(&config, 30, 20).unwrap();
        controller.write("out.ppm").unwrap();

        assert_eq!(
            presenter.presented.borrow().as_slice(),
            &[(30, 20, PathBuf::from("out.ppm"))]
        );
    }

    #[test]
    fn test_center_of_default_view_is_inside() {
        let presenter = MockFilePresenter::default();
        let mut controller = StillRenderController::new(&presenter);

        controller.render(&RenderConfig::default(), 21, 21).unwrap();

        let frame = controller.frame().unwrap();
        assert_eq!(frame.pixel(Point { x: 10, y: 10 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_write_without_render_does_nothing() {
        let presenter = MockFilePresenter::default();
        let controller = StillRenderController::new(&presenter);

        controller.write("never.ppm").unwrap();

        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let presenter = MockFilePresenter::default();
        let mut controller = StillRenderController::new(&presenter);
        let config = RenderConfig {
            escape_radius: -1.0,
            ..RenderConfig::default()
        };

        assert!(matches!(
            controller.render(&config, 10, 10),
            Err(ConfigError::Fractal(_))
        ));
        assert!(controller.frame().is_none());
    }
}
