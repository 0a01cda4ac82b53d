use std::marker::PhantomData;
use std::time::{Duration, Instant};

use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::RenderSession;
use crate::core::config::render_config::RenderConfig;
use crate::input::gui::app::gui_app::{GuiApp, WINDOW_TITLE};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

/// Interval between input ticks while a key is held.
const INPUT_TICK: Duration = Duration::from_millis(16);

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed or Escape is pressed.
    pub fn execute(&self, config: &RenderConfig, width: u32, height: u32) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(width, height))
                .with_min_inner_size(LogicalSize::new(64, 64))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let size = window.inner_size();
        let session = RenderSession::new(
            config,
            size.width,
            size.height,
            Some(presenter.share_listener()),
        )?;
        let mut app = GuiApp::new(presenter, session);
        let mut failure: Option<GuiError> = None;

        info!("window opened at {}x{}", size.width, size.height);

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                window.request_redraw();
            }
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    app.shutdown();
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            ..
                        },
                    ..
                } => {
                    if key_code == KeyCode::Escape && state == ElementState::Pressed {
                        app.shutdown();
                        elwt.exit();
                    } else {
                        app.handle_key_event(key_code, state);
                    }
                }
                WindowEvent::Focused(false) => {
                    app.focus_lost();
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!("resize failed: {}", err);
                        failure = Some(err);
                        app.shutdown();
                        elwt.exit();
                    }
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.render(window) {
                        error!("render failed: {}", err);
                        failure = Some(err);
                        app.shutdown();
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();

                if app.tick(now) {
                    elwt.set_control_flow(ControlFlow::WaitUntil(now + INPUT_TICK));
                } else {
                    elwt.set_control_flow(ControlFlow::Wait);
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
