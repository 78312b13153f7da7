use termfolio_terminal::{
    AssetHost, BootSequence, Clock, Session, build_hero_registry, build_skills_registry,
};
use termfolio_types::config::FolioConfig;
use termfolio_types::theme::ThemeState;

/// The screens the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Boot,
    Hero,
    Skills,
}

/// All mutable application state.
pub struct AppState<C: Clock + Clone> {
    pub mode: Mode,
    pub theme: ThemeState,
    pub boot: Option<BootSequence<C>>,
    pub hero: Session<C>,
    pub skills: Session<C>,
    clock: C,
}

impl<C: Clock + Clone> AppState<C> {
    pub fn new(config: &FolioConfig, clock: C, host: Box<dyn AssetHost>) -> Self {
        let hero = Session::new(
            build_hero_registry(&config.terminal),
            config.terminal.clone(),
            clock.clone(),
        )
        .with_host(host);
        let skills = Session::new(
            build_skills_registry(),
            config.terminal.clone(),
            clock.clone(),
        );
        let boot = config
            .boot
            .enabled
            .then(|| BootSequence::new(&config.boot, clock.clone()));
        let mode = if boot.is_some() { Mode::Boot } else { Mode::Hero };
        Self {
            mode,
            theme: ThemeState::from_dark_flag(config.dark_mode),
            boot,
            hero,
            skills,
            clock,
        }
    }

    /// Advance the boot loader and both terminals.
    pub fn tick(&mut self) {
        if let Some(ref mut boot) = self.boot {
            boot.tick();
            if boot.is_done() {
                self.finish_boot();
            }
        }
        self.hero.tick();
        self.skills.tick();
    }

    /// Leave the loader immediately.
    pub fn finish_boot(&mut self) {
        if self.boot.take().is_some() {
            log::info!("boot finished");
            self.mode = Mode::Hero;
        }
    }

    /// Flip between the hero and skills terminals.
    pub fn switch_section(&mut self) {
        self.mode = match self.mode {
            Mode::Boot => Mode::Boot,
            Mode::Hero => Mode::Skills,
            Mode::Skills => Mode::Hero,
        };
    }

    pub fn active_session(&self) -> Option<&Session<C>> {
        match self.mode {
            Mode::Boot => None,
            Mode::Hero => Some(&self.hero),
            Mode::Skills => Some(&self.skills),
        }
    }

    pub fn active_session_mut(&mut self) -> Option<&mut Session<C>> {
        match self.mode {
            Mode::Boot => None,
            Mode::Hero => Some(&mut self.hero),
            Mode::Skills => Some(&mut self.skills),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Stop every in-flight reveal before exit.
    pub fn teardown(&mut self) {
        self.hero.teardown();
        self.skills.teardown();
        self.boot = None;
    }
}
