//! Core engine implementation

use crate::{
    application::{AppError, AppEvent, Application},
    assets::{AssetError, AssetManager},
    audio::{backend::AudioBackend, AudioError, AudioSettings, AudioSystem},
    ecs::{components::Lifetime, World},
    events::EventQueue,
    foundation::{math::Vec2, time::FixedClock},
    input::InputManager,
    physics::PhysicsWorld,
    render::{Presenter, RenderList},
};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

/// A delayed call that came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// Id returned by [`Engine::delayed_call`]
    pub id: u64,
    /// Name given when scheduling
    pub name: &'static str,
}

/// Supplies input to the main loop and receives finished frames
pub trait FrameDriver: Presenter {
    /// Events for the frame about to run
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent>;

    /// Return `false` to end the main loop
    fn keep_running(&self) -> bool {
        true
    }
}

/// Main engine struct
///
/// The engine coordinates all subsystems and manages the main loop.
pub struct Engine {
    /// ECS world containing all entities and components
    pub world: World,

    /// Asset manifest
    pub assets: AssetManager,

    /// Sound cues
    pub audio: AudioSystem,

    /// Input handling system
    pub input: InputManager,

    physics: PhysicsWorld,
    timers: EventQueue<TimerEvent>,
    next_timer_id: u64,
    clock: FixedClock,
    view: Vec2,
    rng: StdRng,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: &EngineConfig, audio_backend: Box<dyn AudioBackend>) -> Result<Self, EngineError> {
        if config.window.width <= 0.0 || config.window.height <= 0.0 {
            return Err(EngineError::InitializationFailed(format!(
                "view size must be positive, got {}x{}",
                config.window.width, config.window.height
            )));
        }
        if config.timestep <= 0.0 {
            return Err(EngineError::InitializationFailed(format!(
                "timestep must be positive, got {}",
                config.timestep
            )));
        }

        log::info!(
            "Initializing engine: '{}' {}x{} @ {:.1} Hz",
            config.window.title,
            config.window.width,
            config.window.height,
            1.0 / config.timestep
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            world: World::new(),
            assets: AssetManager::new(&config.asset_root),
            audio: AudioSystem::new(audio_backend, config.audio),
            input: InputManager::new(),
            physics: PhysicsWorld::new(config.broadphase_cell_size),
            timers: EventQueue::new(),
            next_timer_id: 0,
            clock: FixedClock::new(config.timestep),
            view: Vec2::new(config.window.width, config.window.height),
            rng,
            running: true,
        })
    }

    /// Run the preload and create phases of an application
    pub fn boot<T: Application>(&mut self, app: &mut T, verify_assets: bool) -> Result<(), EngineError> {
        app.preload(&mut self.assets)
            .map_err(|e| EngineError::ApplicationError(format!("App preload: {e}")))?;
        if verify_assets {
            self.assets.verify_files()?;
        }
        app.create(self)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;
        log::info!("Application created with {} entities", self.world.len());
        Ok(())
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application, D: FrameDriver>(
        config: &EngineConfig,
        audio_backend: Box<dyn AudioBackend>,
        app: &mut T,
        driver: &mut D,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(config, audio_backend)?;
        engine.boot(app, config.verify_assets)?;

        log::info!("Starting main loop...");

        let mut outcome = Ok(());
        while engine.running && driver.keep_running() {
            let events = driver.poll_events(engine.clock.frame_count());
            match engine.step(app, events) {
                Ok(frame) => driver.present(&frame),
                Err(e) => {
                    log::error!("Frame {} failed: {}", engine.clock.frame_count(), e);
                    outcome = Err(e);
                    break;
                }
            }
        }

        // Cleanup runs on the error path too
        app.cleanup(&mut engine);
        engine.audio.stop_all();

        log::info!("Engine shutdown complete after {} frames", engine.clock.frame_count());
        outcome.map(|()| engine)
    }

    /// Advance one frame and return its draw list
    pub fn step<T: Application>(
        &mut self,
        app: &mut T,
        events: impl IntoIterator<Item = AppEvent>,
    ) -> Result<RenderList, EngineError> {
        self.input.begin_frame();
        for event in events {
            self.handle_event(app, event)?;
        }

        self.clock.tick();
        let delta_time = self.clock.delta_time();

        let started = self.physics.step(&mut self.world, delta_time);
        if !started.is_empty() {
            log::trace!("{} collision(s) started", started.len());
            app.on_collision_start(self, &started)
                .map_err(|e| EngineError::ApplicationError(format!("App collision: {e}")))?;
        }

        for timer in self.timers.drain_due(self.clock.elapsed()) {
            app.on_timer(self, &timer)
                .map_err(|e| EngineError::ApplicationError(format!("App timer '{}': {e}", timer.name)))?;
        }

        self.expire_lifetimes();

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

        self.audio.update();

        let mut frame = RenderList::new();
        app.render(self, &mut frame);
        frame.finish();
        Ok(frame)
    }

    /// Handle an application event
    fn handle_event<T: Application>(&mut self, app: &mut T, event: AppEvent) -> Result<(), EngineError> {
        match event {
            AppEvent::CloseRequested => {
                self.quit();
            }
            AppEvent::FocusLost => {
                self.input.release_all();
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::WindowResized { width, height } => {
                if width <= 0.0 || height <= 0.0 {
                    log::warn!("Ignoring resize to {}x{}", width, height);
                    return Ok(());
                }
                log::debug!("View resized to {}x{}", width, height);
                self.view = Vec2::new(width, height);
                app.on_resize(self, width, height)
                    .map_err(|e| EngineError::ApplicationError(format!("App resize: {e}")))?;
            }
        }

        Ok(())
    }

    /// Despawn entities whose lifetime ran out
    fn expire_lifetimes(&mut self) {
        let now = self.clock.elapsed();
        let expired: Vec<_> = self
            .world
            .query::<Lifetime>()
            .filter(|(_, lifetime)| lifetime.is_expired(now))
            .map(|(entity, _)| entity)
            .collect();

        for entity in expired {
            log::trace!("Lifetime expired for entity {}", entity.id());
            self.world.despawn(entity);
        }
    }

    /// Schedule `on_timer` to fire after `delay` seconds of simulated time
    pub fn delayed_call(&mut self, delay: f64, name: &'static str) -> u64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        self.timers.post(self.clock.elapsed() + delay.max(0.0), TimerEvent { id, name });
        id
    }

    /// Number of delayed calls not yet delivered
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop should continue
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the ECS world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current view size in pixels (the wrap bounds)
    pub fn view_size(&self) -> Vec2 {
        self.view
    }

    /// Centre of the view
    pub fn view_center(&self) -> Vec2 {
        self.view * 0.5
    }

    /// Simulated seconds since start
    pub fn time(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Random number generator shared by the game
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Seconds per simulation step
    pub timestep: f32,

    /// Broad-phase grid cell size in pixels
    pub broadphase_cell_size: f32,

    /// Directory asset paths are relative to
    pub asset_root: String,

    /// Fail at boot if declared asset files are missing
    pub verify_assets: bool,

    /// Audio volume settings
    pub audio: AudioSettings,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// View width in pixels
    pub width: f32,

    /// View height in pixels
    pub height: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            timestep: crate::foundation::time::REFERENCE_STEP,
            broadphase_cell_size: 64.0,
            asset_root: "assets".to_string(),
            verify_assets: false,
            audio: AudioSettings::default(),
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arcade Engine".to_string(),
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine initialization failed
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Asset error
    #[error("Asset error: {0}")]
    AssetError(#[from] AssetError),

    /// Audio error
    #[error("Audio error: {0}")]
    AudioError(#[from] AudioError),
}

impl From<AppError> for EngineError {
    fn from(error: AppError) -> Self {
        Self::ApplicationError(error.to_string())
    }
}
