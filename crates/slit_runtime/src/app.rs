//! Frame driver
//!
//! Owns the simulation context and the presentation resources. Each redraw
//! samples one batch of particles, repaints the canvas and presents it; redraws
//! are requested at the configured target rate.

use slit_core::time::FrameClock;
use slit_core::Simulation;
use slit_metrics::{FrameStats, ImpactTally, RollingWindow};
use slit_render::scene::{self, Scene};
use slit_render::window::{window_attributes, WindowConfig};
use slit_render::{rgb, wgpu, Canvas, Palette, Presenter, RenderError};
use slit_services::settings::PaletteSettings;
use slit_services::{InputAction, KeyBindings, KeyState, Settings};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::Key,
    window::{Window, WindowId},
};

/// Frames averaged for the reported frame rate.
const STATS_WINDOW: usize = 120;

pub struct App {
    window_config: WindowConfig,
    bindings: KeyBindings,
    palette: Palette,
    sim: Simulation,
    canvas: Canvas,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    stats: FrameStats,
    tally: ImpactTally,
    frame_impacts: RollingWindow<u32>,
    report_interval: Duration,
    last_report: Instant,
    fatal: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let Settings {
            window,
            simulation,
            palette,
            input,
            metrics,
        } = settings;

        let window_config = WindowConfig {
            title: window.title,
            width: simulation.screen_width,
            height: simulation.screen_height,
        };
        let canvas = Canvas::new(simulation.screen_width, simulation.screen_height);
        let now = Instant::now();

        Self {
            window_config,
            bindings: input,
            palette: palette_from(&palette),
            sim: Simulation::new(simulation),
            canvas,
            clock: FrameClock::new(window.target_fps, now),
            window: None,
            presenter: None,
            stats: FrameStats::new(STATS_WINDOW),
            tally: ImpactTally::new(),
            frame_impacts: RollingWindow::new(STATS_WINDOW),
            report_interval: Duration::from_secs(metrics.report_interval_secs),
            last_report: now,
            fatal: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Apply a key event. Returns `true` if it changed the simulation.
    pub fn handle_key(&mut self, text: &str, state: KeyState, repeat: bool) -> bool {
        match self.bindings.action_for(text, state, repeat) {
            Some(InputAction::ToggleDetector) => {
                self.sim.toggle_detector();
                true
            }
            None => false,
        }
    }

    /// Sample this frame's particles and repaint the canvas.
    pub fn simulate_and_paint(&mut self) {
        let report = self.sim.step();
        self.tally.add(report.recorded, report.discarded);
        self.tally.observe_peak(self.sim.heatmap().peak());
        self.frame_impacts.push(report.recorded);

        let scene = Scene {
            field: self.sim.field(),
            slits: self.sim.slits(),
            heatmap: self.sim.heatmap(),
            detector: self.sim.detector(),
        };
        scene::paint(&mut self.canvas, &scene, &self.palette);
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.stats.begin();
        self.simulate_and_paint();

        let result = match self.presenter.as_mut() {
            Some(presenter) => presenter.present(&self.canvas),
            None => return,
        };

        match result {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                tracing::warn!(error = %err, "surface lost, reconfiguring");
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.reconfigure();
                }
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                tracing::debug!("surface timeout, frame skipped");
            }
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("presenting frame"));
                return;
            }
        }

        self.stats.end();
        self.report();
    }

    fn report(&mut self) {
        if self.last_report.elapsed() < self.report_interval {
            return;
        }
        self.last_report = Instant::now();

        slit_metrics::metrics! {
            let interval = self.tally.take();
            let (min_ms, max_ms) = self.stats.frame_time_range_ms();
            let (min_impacts, max_impacts) = self.frame_impacts.min_max();
            tracing::debug!(
                fps = self.stats.fps(),
                frame_ms = self.stats.frame_time_ms(),
                min_ms,
                max_ms,
                frames = self.clock.frame_count(),
                recorded = interval.recorded,
                discarded = interval.discarded,
                min_impacts,
                max_impacts,
                total = self.sim.heatmap().total(),
                peak = interval.peak,
                peak_gain = interval.peak_gain,
                "frame stats"
            );
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!(error = ?err, "fatal error, shutting down");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = Arc::new(event_loop.create_window(window_attributes(&self.window_config))?);

        let presenter = pollster::block_on(Presenter::new(
            Arc::clone(&window),
            self.canvas.width(),
            self.canvas.height(),
        ))?;

        tracing::info!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            "window ready; press '{}' to toggle the detector",
            self.bindings.toggle_detector
        );

        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init_graphics(event_loop) {
                self.fail(event_loop, err.context("initializing graphics"));
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(frames = self.clock.frame_count(), "close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Key::Character(text) = &event.logical_key {
                    self.handle_key(text.as_str(), key_state(event.state), event.repeat);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            self.clock.mark(now);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

fn key_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

fn palette_from(settings: &PaletteSettings) -> Palette {
    Palette {
        background: rgb(settings.background),
        slit: rgb(settings.slit),
        text: rgb(settings.text),
    }
}
