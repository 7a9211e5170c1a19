//=========================================================================
// Test Doubles
//=========================================================================
//
// Recording engine context used by the bootstrap tests.
//
// Every service call is appended to a shared log so tests can assert
// on exact call order. Service resolution is logged on first access
// only, mirroring a one-time singleton lookup.
//
//=========================================================================

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::scene::{BootInfo, Layer, SceneRoot, SceneTransition};
use crate::core::{AudioEngine, Director, EngineContext, Size, SilentAudio, UiLoader};
use crate::error::DirectorError;

//=== Call ================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ResolveAudio,
    ResolveDirector,
    WinSize,
    SetResourcePath(String),
    CreateBootLayer,
    QueryRunningScene { running: bool },
    Run,
    Replace { fade: Option<f32> },
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

//=== FakeDirector ========================================================

pub(crate) struct FakeDirector {
    win_size: Size,
    running: Option<SceneRoot>,
    log: CallLog,
}

impl Director for FakeDirector {
    fn win_size(&self) -> Size {
        self.log.borrow_mut().push(Call::WinSize);
        self.win_size
    }

    fn running_scene(&self) -> Option<&SceneRoot> {
        self.log.borrow_mut().push(Call::QueryRunningScene {
            running: self.running.is_some(),
        });
        self.running.as_ref()
    }

    fn run_with_scene(&mut self, scene: SceneRoot) -> Result<(), DirectorError> {
        self.log.borrow_mut().push(Call::Run);
        if self.running.is_some() {
            return Err(DirectorError::AlreadyRunning);
        }
        self.running = Some(scene);
        Ok(())
    }

    fn replace_scene(&mut self, transition: SceneTransition) -> Result<(), DirectorError> {
        let (fade, scene) = match transition {
            SceneTransition::Immediate(scene) => (None, scene),
            SceneTransition::Fade(fade) => (Some(fade.duration()), fade.into_scene()),
        };
        self.log.borrow_mut().push(Call::Replace { fade });
        if self.running.is_none() {
            return Err(DirectorError::NotRunning);
        }
        self.running = Some(scene);
        Ok(())
    }
}

//=== FakeLoader ==========================================================

struct FakeLoader {
    path: PathBuf,
    log: CallLog,
}

impl UiLoader for FakeLoader {
    fn set_resource_path(&mut self, path: &str) {
        self.log.borrow_mut().push(Call::SetResourcePath(path.to_string()));
        self.path = PathBuf::from(path);
    }

    fn resource_path(&self) -> &Path {
        &self.path
    }
}

//=== RecordingContext ====================================================

pub(crate) struct RecordingContext {
    pub(crate) log: CallLog,
    pub(crate) director: FakeDirector,
    audio: SilentAudio,
    loader: FakeLoader,
    audio_resolved: bool,
    director_resolved: bool,
}

impl RecordingContext {
    pub(crate) fn new(win_size: Size) -> Self {
        let log = CallLog::default();
        Self {
            director: FakeDirector {
                win_size,
                running: None,
                log: log.clone(),
            },
            audio: SilentAudio::new(),
            loader: FakeLoader {
                path: PathBuf::new(),
                log: log.clone(),
            },
            audio_resolved: false,
            director_resolved: false,
            log,
        }
    }

    /// Context whose director already runs a scene.
    pub(crate) fn with_running_scene(win_size: Size) -> Self {
        let mut ctx = Self::new(win_size);
        ctx.director.running = Some(SceneRoot::new(win_size));
        ctx
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.log.borrow().iter().filter(|c| *c == call).count()
    }

    pub(crate) fn activation_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Run | Call::Replace { .. }))
            .count()
    }

    /// Boot layer factory that records its invocations in this context's log.
    pub(crate) fn layer_factory(&self) -> impl FnMut(&BootInfo) -> Box<dyn Layer> + 'static {
        let log = self.log.clone();
        move |_info: &BootInfo| {
            log.borrow_mut().push(Call::CreateBootLayer);
            Box::new(NamedLayer("boot")) as Box<dyn Layer>
        }
    }
}

impl EngineContext for RecordingContext {
    fn audio_engine(&mut self) -> &mut dyn AudioEngine {
        if !self.audio_resolved {
            self.audio_resolved = true;
            self.log.borrow_mut().push(Call::ResolveAudio);
        }
        &mut self.audio
    }

    fn director(&mut self) -> &mut dyn Director {
        if !self.director_resolved {
            self.director_resolved = true;
            self.log.borrow_mut().push(Call::ResolveDirector);
        }
        &mut self.director
    }

    fn ui_loader(&mut self) -> &mut dyn UiLoader {
        &mut self.loader
    }
}

//=== NamedLayer ==========================================================

pub(crate) struct NamedLayer(pub(crate) &'static str);

impl Layer for NamedLayer {
    fn name(&self) -> &str {
        self.0
    }
}
