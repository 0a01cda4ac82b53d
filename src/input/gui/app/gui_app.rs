use std::time::Instant;

use log::{debug, info};
use winit::event::ElementState;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::controllers::interactive::{FrameData, RenderSession};
use crate::input::gui::app::keyboard_input::KeyboardInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    session: RenderSession,
    keyboard: KeyboardInputState,
    /// Time of the last applied input tick; `None` while no key is held.
    last_tick: Option<Instant>,
    last_presented_version: Option<u64>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(presenter: T, session: RenderSession) -> Self {
        Self {
            presenter,
            session,
            keyboard: KeyboardInputState::default(),
            last_tick: None,
            last_presented_version: None,
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let was_idle = !self.keyboard.any_held();

        if self.keyboard.handle_key_event(key_code, state) && was_idle && self.keyboard.any_held() {
            self.last_tick = Some(Instant::now());
        }
    }

    /// Applies held keys for the time since the previous tick. Returns
    /// `true` while input is active so the caller keeps ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.keyboard.any_held() {
            self.last_tick = None;
            return false;
        }

        let dt = self
            .last_tick
            .replace(now)
            .map_or(0.0, |previous| now.saturating_duration_since(previous).as_secs_f64());

        self.session.on_move_intent(self.keyboard.move_direction(), dt);
        self.session.on_zoom_intent(self.keyboard.zoom_direction(), dt);

        true
    }

    pub fn focus_lost(&mut self) {
        self.keyboard.reset();
        self.last_tick = None;
    }

    /// Draws the newest published frame, uploading it first if it has not
    /// been shown yet.
    pub fn render(&mut self, window: &Window) -> Result<(), GuiError> {
        let unseen = self
            .session
            .published_frame()
            .filter(|frame| self.last_presented_version != Some(frame.version));

        if let Some(frame) = unseen {
            self.presenter.present(&frame)?;
            self.last_presented_version = Some(frame.version);
            window.set_title(&self.title(&frame));
        }

        self.presenter.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)?;
        self.session.on_view_changed(width, height);

        Ok(())
    }

    pub fn shutdown(&mut self) {
        info!("closing window at {}", self.session.viewport());
        self.session.shutdown();
    }

    fn title(&self, frame: &FrameData) -> String {
        debug!(
            "presenting version {} ({}x{}, sample size {})",
            frame.version,
            frame.width(),
            frame.height(),
            frame.sample_size
        );

        format!(
            "{} | {} | sample {} | {} ms",
            WINDOW_TITLE,
            self.session.viewport(),
            frame.sample_size,
            frame.render_duration.as_millis()
        )
    }
}
