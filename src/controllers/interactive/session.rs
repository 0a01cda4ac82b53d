use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::ports::frame_listener::FrameListener;
use crate::controllers::interactive::quality::{QualityDecision, after_publish};
use crate::controllers::interactive::state::{ViewState, clamp_input_dt};
use crate::core::actions::cancellation::{CancelToken, Cancelled, StaleVersion};
use crate::core::actions::render_pass::render_pass::{PassParams, render_pass_cancelable};
use crate::core::colour_maps::greyscale::GreyscaleEscapeSpeed;
use crate::core::config::render_config::{ConfigError, RenderConfig, SampleSizeBounds};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::{MoveDirection, Viewport, ZoomDirection};
use crate::core::fractals::fractal_kinds::Fractal;
use log::{debug, info, trace};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const WORKER_THREAD_NAME: &str = "render-coordinator";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct SharedState {
    view: Mutex<ViewState>,
    wake: Condvar,
    /// Mirror of the view version, readable without the view lock.
    live_version: AtomicU64,
    shutdown: AtomicBool,
    published: Mutex<Option<Arc<FrameData>>>,
    listener: Option<Arc<dyn FrameListener>>,
    fractal: Fractal,
    colour_map: GreyscaleEscapeSpeed,
    bounds: SampleSizeBounds,
    max_input_dt: f64,
}

impl SharedState {
    fn new(
        config: &RenderConfig,
        width: u32,
        height: u32,
        listener: Option<Arc<dyn FrameListener>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.sample_size_bounds()?;
        let fractal = config.build_fractal()?;
        let view = ViewState::new(config.initial_viewport(), width, height, bounds);

        Ok(Self {
            live_version: AtomicU64::new(view.version()),
            view: Mutex::new(view),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            published: Mutex::new(None),
            listener,
            colour_map: GreyscaleEscapeSpeed::new(config.max_iterations),
            fractal,
            bounds,
            max_input_dt: config.max_input_dt,
        })
    }

    /// Applies `change` under the view lock and wakes the worker when it
    /// reports an accepted change.
    fn update_view(&self, change: impl FnOnce(&mut ViewState, SampleSizeBounds) -> bool) -> bool {
        let mut view = lock(&self.view);

        if !change(&mut view, self.bounds) {
            return false;
        }

        self.live_version.store(view.version(), Ordering::Release);
        trace!(
            "view version {} now {} at {}x{}",
            view.version(),
            view.viewport(),
            view.width(),
            view.height()
        );
        drop(view);

        self.wake.notify_one();
        true
    }

    /// Blocks until the view version differs from `last_seen`, returning the
    /// snapshot for the next pass, or `None` once shut down.
    fn next_job(&self, last_seen: Option<u64>) -> Option<(u64, PassParams)> {
        let mut view = lock(&self.view);

        loop {
            if self.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if last_seen != Some(view.version()) {
                return Some((view.version(), view.pass_params()));
            }

            view = self.wake.wait(view).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Installs `buffer` as the visible frame if `version` is still current,
    /// then schedules the refinement pass when the quality policy asks for
    /// one. The version check and the swap happen under the view lock, so a
    /// frame whose version has been superseded is never visible.
    fn publish(
        &self,
        version: u64,
        sample_size: NonZeroU32,
        frame_buffer: FrameBuffer,
        render_duration: Duration,
    ) -> bool {
        let mut view = lock(&self.view);

        if view.version() != version {
            debug!("pass {} finished after version {}, discarded", version, view.version());
            return false;
        }

        let frame = Arc::new(FrameData {
            version,
            sample_size,
            frame_buffer,
            render_duration,
        });

        let previous = lock(&self.published).replace(frame);
        drop(previous);

        debug!(
            "published version {} at sample size {} in {:?}",
            version, sample_size, render_duration
        );

        match after_publish(self.bounds, sample_size) {
            QualityDecision::Refine { sample_size } => {
                view.refine(sample_size);
                self.live_version.store(view.version(), Ordering::Release);
                debug!(
                    "refinement scheduled as version {} at sample size {}",
                    view.version(),
                    sample_size
                );
            }
            QualityDecision::Settle => {
                trace!("version {} settled", version);
            }
        }
        drop(view);

        if let Some(listener) = &self.listener {
            listener.frame_published(version);
        }

        true
    }

    fn worker_loop(&self) {
        let mut last_seen = None;

        while let Some((version, params)) = self.next_job(last_seen) {
            last_seen = Some(version);

            trace!(
                "pass {} started: {}x{} at sample size {}",
                version, params.width, params.height, params.sample_size
            );

            let stale = StaleVersion::new(&self.live_version, version);
            let cancel = || self.shutdown.load(Ordering::Relaxed) || stale.is_cancelled();

            let start = Instant::now();
            match render_pass_cancelable(&params, &self.fractal, &self.colour_map, &cancel) {
                Ok(buffer) => {
                    self.publish(version, params.sample_size, buffer, start.elapsed());
                }
                Err(Cancelled) => {
                    trace!("pass {} aborted after {:?}", version, start.elapsed());
                }
            }
        }

        debug!("render worker stopped");
    }
}

/// The interactive rendering core: owns the view, the published frame and
/// the background compute thread that keeps the frame in step with the view.
///
/// Input methods may be called from any thread. Each accepted change bumps
/// the view version, which aborts the pass in flight and starts a coarse
/// pass; once a coarse pass publishes undisturbed, one fine pass follows.
pub struct RenderSession {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderSession {
    pub fn new(
        config: &RenderConfig,
        width: u32,
        height: u32,
        listener: Option<Arc<dyn FrameListener>>,
    ) -> Result<Self, SessionError> {
        let shared = Arc::new(SharedState::new(config, width, height, listener)?);
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker_shared.worker_loop())
            .map_err(SessionError::SpawnWorker)?;

        info!(
            "render session started: {}x{}, {}, sample sizes {}..={}",
            width,
            height,
            config.initial_viewport(),
            shared.bounds.min(),
            shared.bounds.max()
        );

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Records a new surface size. Returns `false` for a zero-area size,
    /// which is ignored.
    pub fn on_view_changed(&self, width: u32, height: u32) -> bool {
        let accepted = self
            .shared
            .update_view(|view, bounds| view.resize(width, height, bounds));

        if accepted {
            debug!("view resized to {}x{}", width, height);
        }

        accepted
    }

    /// Pans for `dt` seconds. `None` means no movement key is held this tick.
    pub fn on_move_intent(&self, direction: Option<MoveDirection>, dt: f64) -> bool {
        let dt = clamp_input_dt(dt, self.shared.max_input_dt);

        self.shared
            .update_view(|view, bounds| view.apply_move(direction, dt, bounds))
    }

    /// Zooms for `dt` seconds. `None` means no zoom key is held this tick.
    pub fn on_zoom_intent(&self, direction: Option<ZoomDirection>, dt: f64) -> bool {
        let dt = clamp_input_dt(dt, self.shared.max_input_dt);

        self.shared
            .update_view(|view, bounds| view.apply_zoom(direction, dt, bounds))
    }

    /// The most recently published frame. Holding the returned handle keeps
    /// that frame alive even after a newer one replaces it.
    #[must_use]
    pub fn published_frame(&self) -> Option<Arc<FrameData>> {
        lock(&self.shared.published).clone()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared.live_version.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        lock(&self.shared.view).viewport()
    }

    #[must_use]
    pub fn sample_size(&self) -> NonZeroU32 {
        lock(&self.shared.view).sample_size()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        let view = lock(&self.shared.view);
        (view.width(), view.height())
    }

    /// Stops the compute thread and waits for it. The pass in flight aborts
    /// at its next check. Idempotent.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);

        // Taking the view lock orders the flag before the worker's next wait.
        drop(lock(&self.shared.view));
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
            info!("render session shut down");
        }
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
