//=========================================================================
// Platform Subsystem
//
// Native host: owns the Winit window and drives the director.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌────────────────────────────────────────────┐
//  │  Winit Event Loop                          │
//  │   ↓ resumed()                              │
//  │  Window created                            │
//  │   ↓                                        │
//  │  HeadlessDirector(logical window size)     │
//  │   ↓                                        │
//  │  Bootstrap::run_detected(Services)         │
//  │   ↓                                        │
//  │  RedrawRequested → director.tick(dt)       │
//  │  Resized         → director.set_win_size() │
//  │  CloseRequested  → exit                    │
//  └────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Lazy window**: created in `resumed()` (mobile compatibility)
// - **Bootstrap runs once**: a resume with an existing window is a no-op
// - **Pending roots are activated here**: on the browser kind the host
//   is the page, so it applies the run-or-fade rule itself
// - **Startup errors are fatal**: stored, event loop exited, returned
//   from `Engine::run`
//
//=========================================================================

//=== External Crates =====================================================

use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::bootstrap::{BootOutcome, Bootstrap};
use crate::core::{HeadlessDirector, Services, Size};
use crate::error::BootError;

//=== Platform ============================================================

/// Window owner and director driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(bootstrap)`, no window yet
/// 2. **Execution**: `platform.run()` blocks in the Winit event loop
/// 3. **Resume**: window created, first scene bootstrapped
/// 4. **Frames**: every redraw ticks the director
/// 5. **Shutdown**: window closed or startup failure
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    bootstrap: Bootstrap,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Engine services (None until the window exists).
    services: Option<Services<HeadlessDirector>>,

    /// Timestamp of the previous redraw.
    last_frame: Option<Instant>,

    /// First fatal error raised inside the event loop.
    error: Option<BootError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(bootstrap: Bootstrap) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            bootstrap,
            window: None,
            services: None,
            last_frame: None,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Invalid configuration (checked before any window exists), event
    /// loop failures, or the first startup error raised while creating
    /// the window or bootstrapping the scene.
    pub fn run(mut self) -> Result<(), BootError> {
        self.bootstrap.config().validate()?;
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Builds services for `window` and bootstraps the first scene.
    fn start(&mut self, window: &Window) -> Result<Services<HeadlessDirector>, BootError> {
        let win_size = to_size(window.inner_size(), window.scale_factor());
        let mut services = Services::new(HeadlessDirector::new(win_size));

        let outcome = self.bootstrap.run_detected(&mut services)?;
        if let BootOutcome::Pending(_) = outcome {
            debug!(target: "platform", "Activating pending scene from host");
            let fade = self.bootstrap.config().fade_duration;
            outcome.activate(&mut services.director, fade)?;
        }

        Ok(services)
    }

    /// Seconds since the previous frame (0 on the first frame).
    fn frame_delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        dt
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: BootError) {
        error!(target: "platform", "Startup failed: {}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

/// Converts a physical window size to logical units.
fn to_size(physical: PhysicalSize<u32>, scale_factor: f64) -> Size {
    let logical: LogicalSize<f32> = physical.to_logical(scale_factor);
    Size::new(logical.width, logical.height)
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let window_config = &self.bootstrap.config().window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        match self.start(&window) {
            Ok(services) => {
                window.request_redraw();
                self.services = Some(services);
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(physical) => {
                let scale = self.window.as_ref().map(|w| w.scale_factor()).unwrap_or(1.0);
                if let Some(services) = self.services.as_mut() {
                    services.director.set_win_size(to_size(physical, scale));
                }
            }

            WindowEvent::RedrawRequested => {
                let dt = self.frame_delta();
                if let Some(services) = self.services.as_mut() {
                    services.director.tick(dt);
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
