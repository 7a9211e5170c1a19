//=========================================================================
// Bootstrap
//=========================================================================
//
// Builds the first scene and activates it for the selected platform.
//
// Architecture:
// ```text
//   PlatformKind ──select_strategy()──> Box<dyn PlatformStrategy>
//                                           │
//   bootstrap(ctx, kind, config, factory)   │
//     1. resolve audio engine + director    │
//     2. window size + center  ◄────────────┤ resolve_window_size()
//     3. UI bundle resource path            │
//     4. SceneRoot + boot layer             │
//     5. activation            ◄────────────┘ attach_and_activate()
// ```
//
// Native kinds (mobile, desktop) activate through the director. The
// browser kind returns the prepared root for the page to activate.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::config::BootConfig;
use crate::core::scene::{BlankLayer, BootInfo, Layer, LayerFactory, SceneRoot};
use crate::core::{Director, EngineContext, PlatformKind, Size};
use crate::error::BootError;

//=== Module Declarations =================================================

mod browser;
mod native;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use browser::BrowserStrategy;
pub use native::{activate_scene, NativeStrategy};

//=== PlatformStrategy Trait ==============================================

/// Platform-specific half of the bootstrap.
pub trait PlatformStrategy {
    fn kind(&self) -> PlatformKind;

    /// Window size the root is built for.
    fn resolve_window_size(&self, ctx: &mut dyn EngineContext) -> Size;

    /// Finishes the root and activates it, or hands it back for external activation.
    fn attach_and_activate(
        &self,
        ctx: &mut dyn EngineContext,
        scene: SceneRoot,
    ) -> Result<BootOutcome, BootError>;
}

/// Picks the strategy for `kind`. Exactly one strategy exists per kind.
pub fn select_strategy(kind: PlatformKind, config: &BootConfig) -> Box<dyn PlatformStrategy> {
    match kind {
        PlatformKind::Browser => Box::new(BrowserStrategy::new(config.reference_width)),
        PlatformKind::Mobile | PlatformKind::Desktop => {
            Box::new(NativeStrategy::new(kind, config.fade_duration))
        }
    }
}

//=== BootOutcome =========================================================

/// Result of a bootstrap invocation.
#[derive(Debug)]
pub enum BootOutcome {
    /// The director was started with the new root.
    Started,

    /// A running scene is being faded out in favor of the new root.
    Replaced { fade_duration: f32 },

    /// The root is ready but not active; the caller activates it.
    Pending(SceneRoot),
}

impl BootOutcome {
    /// Whether the director already owns the new root.
    pub fn is_activated(&self) -> bool {
        !matches!(self, Self::Pending(_))
    }

    pub fn into_pending(self) -> Option<SceneRoot> {
        match self {
            Self::Pending(scene) => Some(scene),
            _ => None,
        }
    }

    /// Activates a pending root with the native run-or-fade rule.
    ///
    /// Already activated outcomes are returned unchanged.
    pub fn activate(
        self,
        director: &mut dyn Director,
        fade_duration: f32,
    ) -> Result<BootOutcome, BootError> {
        match self {
            Self::Pending(scene) => activate_scene(director, scene, fade_duration),
            activated => Ok(activated),
        }
    }
}

//=== bootstrap() =========================================================

/// Builds the first scene and activates it for `kind`.
///
/// Not idempotent: every call builds an independent root and issues
/// its own activation.
///
/// # Errors
///
/// Propagates config validation, boot layer attachment and director
/// activation failures. All of them are fatal for startup.
pub fn bootstrap(
    ctx: &mut dyn EngineContext,
    kind: PlatformKind,
    config: &BootConfig,
    factory: &mut dyn FnMut(&BootInfo) -> Box<dyn Layer>,
) -> Result<BootOutcome, BootError> {
    info!(target: "boot", "Bootstrapping first scene ({} platform)", kind);
    config.validate()?;
    let strategy = select_strategy(kind, config);

    //--- 1. Resolve services ---------------------------------------------
    let backend = ctx.audio_engine().backend_name().to_string();
    debug!(target: "boot", "Audio engine resolved: {}", backend);
    ctx.director();
    debug!(target: "boot", "Director resolved");

    //--- 2. Window metrics ------------------------------------------------
    let win_size = strategy.resolve_window_size(ctx);
    let center = win_size.center();
    debug!(
        target: "boot",
        "Window {}x{}, center ({}, {})",
        win_size.width,
        win_size.height,
        center.x,
        center.y
    );

    //--- 3. UI bundle path ------------------------------------------------
    ctx.ui_loader().set_resource_path(&config.resource_path);

    //--- 4. Scene graph ---------------------------------------------------
    let mut scene = SceneRoot::new(win_size);
    let info = BootInfo {
        win_size,
        center,
        resource_path: config.resource_path.clone(),
    };
    scene.attach_boot_layer(factory(&info))?;

    //--- 5. Activation ----------------------------------------------------
    let outcome = strategy.attach_and_activate(ctx, scene)?;
    info!(target: "boot", "Bootstrap complete (activated: {})", outcome.is_activated());
    Ok(outcome)
}

//=== Bootstrap ===========================================================

/// Reusable bootstrap: configuration plus boot layer factory.
///
/// ```rust
/// # use aetheric_boot::prelude::*;
/// struct MainMenu;
/// impl Layer for MainMenu {
///     fn name(&self) -> &str { "main-menu" }
/// }
///
/// let mut services = Services::new(HeadlessDirector::new(Size::new(960.0, 640.0)));
/// let mut boot = Bootstrap::new(BootConfig::default())
///     .with_boot_layer(|_info| Box::new(MainMenu) as Box<dyn Layer>);
///
/// let outcome = boot.run(&mut services, PlatformKind::Desktop).unwrap();
/// assert!(outcome.is_activated());
/// ```
pub struct Bootstrap {
    config: BootConfig,
    factory: LayerFactory,
}

impl Bootstrap {
    /// Creates a bootstrap with a [`BlankLayer`] boot layer.
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            factory: Box::new(|_info: &BootInfo| Box::new(BlankLayer) as Box<dyn Layer>),
        }
    }

    /// Sets the boot layer factory.
    pub fn with_boot_layer<F>(mut self, factory: F) -> Self
    where
        F: FnMut(&BootInfo) -> Box<dyn Layer> + 'static,
    {
        self.factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Runs the bootstrap for `kind`.
    pub fn run(
        &mut self,
        ctx: &mut dyn EngineContext,
        kind: PlatformKind,
    ) -> Result<BootOutcome, BootError> {
        bootstrap(ctx, kind, &self.config, &mut self.factory)
    }

    /// Runs the bootstrap for the configured or detected platform.
    pub fn run_detected(&mut self, ctx: &mut dyn EngineContext) -> Result<BootOutcome, BootError> {
        let kind = self.config.platform_kind();
        self.run(ctx, kind)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingContext};
    use super::*;
    use crate::core::{HeadlessDirector, Point, Services, UiLoader};

    fn recorded_bootstrap(ctx: &mut RecordingContext, kind: PlatformKind) -> BootOutcome {
        let mut factory = ctx.layer_factory();
        bootstrap(ctx, kind, &BootConfig::default(), &mut factory).unwrap()
    }

    //=====================================================================
    // Call Sequence Tests
    //=====================================================================

    #[test]
    fn native_call_sequence_without_running_scene() {
        let mut ctx = RecordingContext::new(Size::new(960.0, 640.0));

        let outcome = recorded_bootstrap(&mut ctx, PlatformKind::Desktop);

        assert!(matches!(outcome, BootOutcome::Started));
        assert_eq!(
            ctx.calls(),
            vec![
                Call::ResolveAudio,
                Call::ResolveDirector,
                Call::WinSize,
                Call::SetResourcePath("res/CCB/".to_string()),
                Call::CreateBootLayer,
                Call::QueryRunningScene { running: false },
                Call::Run,
            ]
        );

        let running = ctx.director.running_scene().unwrap();
        assert_eq!(running.center(), Point::new(480.0, 320.0));
        assert_eq!(running.child_count(), 1);
        assert_eq!(running.size_ratio(), None);
    }

    #[test]
    fn native_call_sequence_with_running_scene() {
        let mut ctx = RecordingContext::with_running_scene(Size::new(960.0, 640.0));

        let outcome = recorded_bootstrap(&mut ctx, PlatformKind::Mobile);

        assert!(matches!(outcome, BootOutcome::Replaced { .. }));
        assert_eq!(
            ctx.calls(),
            vec![
                Call::ResolveAudio,
                Call::ResolveDirector,
                Call::WinSize,
                Call::SetResourcePath("res/CCB/".to_string()),
                Call::CreateBootLayer,
                Call::QueryRunningScene { running: true },
                Call::Replace { fade: Some(0.5) },
            ]
        );
    }

    #[test]
    fn browser_never_activates() {
        let mut ctx = RecordingContext::new(Size::new(960.0, 640.0));

        let outcome = recorded_bootstrap(&mut ctx, PlatformKind::Browser);

        assert_eq!(ctx.activation_count(), 0);
        assert_eq!(ctx.count(&Call::QueryRunningScene { running: false }), 0);
        assert!(ctx.director.running_scene().is_none());

        let scene = outcome.into_pending().expect("browser outcome should be pending");
        assert_eq!(scene.size_ratio(), Some(2.0));
        assert_eq!(scene.position(), Point::ORIGIN);
        assert_eq!(scene.center(), Point::new(480.0, 320.0));
        assert_eq!(scene.child_count(), 1);
    }

    #[test]
    fn non_browser_kinds_activate_exactly_once() {
        for kind in [PlatformKind::Mobile, PlatformKind::Desktop] {
            let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

            let outcome = recorded_bootstrap(&mut ctx, kind);

            assert!(outcome.is_activated());
            assert_eq!(ctx.activation_count(), 1, "kind {}", kind);
            assert_eq!(ctx.count(&Call::CreateBootLayer), 1);
        }
    }

    #[test]
    fn bootstrap_is_not_idempotent() {
        let mut ctx = RecordingContext::new(Size::new(960.0, 640.0));

        let first = recorded_bootstrap(&mut ctx, PlatformKind::Desktop);
        let second = recorded_bootstrap(&mut ctx, PlatformKind::Desktop);

        assert!(matches!(first, BootOutcome::Started));
        assert!(matches!(second, BootOutcome::Replaced { .. }));
        assert_eq!(ctx.count(&Call::CreateBootLayer), 2);
        assert_eq!(ctx.count(&Call::Run), 1);
        assert_eq!(ctx.count(&Call::Replace { fade: Some(0.5) }), 1);
    }

    #[test]
    fn custom_resource_path_and_fade_are_used() {
        let mut ctx = RecordingContext::with_running_scene(Size::new(960.0, 640.0));
        let config = BootConfig {
            resource_path: "assets/ui/".to_string(),
            fade_duration: 1.0,
            ..BootConfig::default()
        };
        let mut factory = ctx.layer_factory();

        bootstrap(&mut ctx, PlatformKind::Desktop, &config, &mut factory).unwrap();

        assert_eq!(ctx.count(&Call::SetResourcePath("assets/ui/".to_string())), 1);
        assert_eq!(ctx.count(&Call::Replace { fade: Some(1.0) }), 1);
    }

    #[test]
    fn factory_receives_window_metrics() {
        let mut ctx = RecordingContext::new(Size::new(1024.0, 768.0));
        let mut seen = None;
        let mut factory = |info: &BootInfo| {
            seen = Some(info.clone());
            Box::new(BlankLayer) as Box<dyn Layer>
        };

        bootstrap(&mut ctx, PlatformKind::Desktop, &BootConfig::default(), &mut factory)
            .unwrap();

        let info = seen.unwrap();
        assert_eq!(info.win_size, Size::new(1024.0, 768.0));
        assert_eq!(info.center, Point::new(512.0, 384.0));
        assert_eq!(info.resource_path, "res/CCB/");
    }

    #[test]
    fn invalid_config_is_rejected_before_any_service_call() {
        let mut ctx = RecordingContext::new(Size::new(960.0, 640.0));
        let config = BootConfig {
            reference_width: 0.0,
            ..BootConfig::default()
        };
        let mut factory = ctx.layer_factory();

        let result = bootstrap(&mut ctx, PlatformKind::Browser, &config, &mut factory);

        assert!(matches!(result, Err(BootError::InvalidReferenceWidth(_))));
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn invalid_fade_in_config_is_rejected() {
        let mut ctx = RecordingContext::with_running_scene(Size::new(960.0, 640.0));
        let config = BootConfig {
            fade_duration: f32::NAN,
            ..BootConfig::default()
        };
        let mut factory = ctx.layer_factory();

        let result = bootstrap(&mut ctx, PlatformKind::Desktop, &config, &mut factory);

        assert!(matches!(result, Err(BootError::InvalidFadeDuration(_))));
        assert_eq!(ctx.activation_count(), 0);
    }

    //=====================================================================
    // Strategy Selection Tests
    //=====================================================================

    #[test]
    fn select_strategy_is_exhaustive() {
        let config = BootConfig::default();
        assert_eq!(select_strategy(PlatformKind::Browser, &config).kind(), PlatformKind::Browser);
        assert_eq!(select_strategy(PlatformKind::Mobile, &config).kind(), PlatformKind::Mobile);
        assert_eq!(select_strategy(PlatformKind::Desktop, &config).kind(), PlatformKind::Desktop);
    }

    //=====================================================================
    // Outcome Tests
    //=====================================================================

    #[test]
    fn pending_outcome_can_be_activated_later() {
        let mut director = HeadlessDirector::new(Size::new(480.0, 320.0));
        let pending = BootOutcome::Pending(SceneRoot::new(Size::new(480.0, 320.0)));

        let outcome = pending.activate(&mut director, 0.5).unwrap();

        assert!(matches!(outcome, BootOutcome::Started));
        assert!(director.running_scene().is_some());
    }

    #[test]
    fn activated_outcome_is_unchanged_by_activate() {
        let mut director = HeadlessDirector::new(Size::new(480.0, 320.0));

        let outcome = BootOutcome::Started.activate(&mut director, 0.5).unwrap();

        assert!(matches!(outcome, BootOutcome::Started));
        assert!(director.running_scene().is_none());
    }

    //=====================================================================
    // Bootstrap Wrapper Tests
    //=====================================================================

    #[test]
    fn bootstrap_with_headless_services() {
        let mut services = Services::new(HeadlessDirector::new(Size::new(960.0, 640.0)));
        let mut boot = Bootstrap::new(BootConfig::default());

        let outcome = boot.run(&mut services, PlatformKind::Desktop).unwrap();

        assert!(matches!(outcome, BootOutcome::Started));
        assert_eq!(services.ui_loader.resource_path().to_str(), Some("res/CCB/"));
        let running = services.director.running_scene().unwrap();
        assert_eq!(running.boot_layer().map(|layer| layer.name()), Some("blank"));
    }

    #[test]
    fn second_run_on_headless_director_fades() {
        let mut services = Services::new(HeadlessDirector::new(Size::new(960.0, 640.0)));
        let mut boot = Bootstrap::new(BootConfig::default());

        boot.run(&mut services, PlatformKind::Desktop).unwrap();
        let outcome = boot.run(&mut services, PlatformKind::Desktop).unwrap();

        assert!(matches!(outcome, BootOutcome::Replaced { fade_duration } if fade_duration == 0.5));
        assert!(services.director.outgoing_scene().is_some());

        services.director.tick(0.5);
        assert!(services.director.outgoing_scene().is_none());
    }

    #[test]
    fn run_detected_uses_configured_platform() {
        let mut services = Services::new(HeadlessDirector::new(Size::new(960.0, 640.0)));
        let config = BootConfig {
            platform: Some(PlatformKind::Browser),
            ..BootConfig::default()
        };

        let outcome = Bootstrap::new(config).run_detected(&mut services).unwrap();

        assert!(!outcome.is_activated());
        assert!(services.director.running_scene().is_none());
    }
}
