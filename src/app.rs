// App state and main event loop.
// Owns the view state and the playback timer, and routes keys, ticks, and frames.

use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::DashError;
use crate::state::{PlaybackTick, PlaybackTimer, PlaybackTransition, ViewState};
use crate::ui;

/// Active tab in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Endpoints,
    Consent,
    Sca,
    Compliance,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Endpoints,
        Tab::Consent,
        Tab::Sca,
        Tab::Compliance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Endpoints => "API Endpoints",
            Tab::Consent => "Consent Lifecycle",
            Tab::Sca => "SCA Flows",
            Tab::Compliance => "Compliance Matrix",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "◈",
            Tab::Endpoints => "⬡",
            Tab::Consent => "↻",
            Tab::Sca => "⊡",
            Tab::Compliance => "☰",
        }
    }

    /// Stable identifier, as used in config.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Endpoints => "endpoints",
            Tab::Consent => "consent",
            Tab::Sca => "sca",
            Tab::Compliance => "compliance",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DashError::UnknownTab(s.to_string()))
    }
}

/// Main application state.
pub struct App {
    /// Tab, selection, filter, and playback state.
    pub view: ViewState,
    /// When the overview was last entered (restarts the count-up figures).
    pub overview_since: Instant,
    /// Whether the app should exit.
    pub should_quit: bool,
    tick_interval: Duration,
    frame_interval: Duration,
    tick_tx: UnboundedSender<PlaybackTick>,
    tick_rx: UnboundedReceiver<PlaybackTick>,
    /// Live playback timer; present exactly while playback is running.
    timer: Option<PlaybackTimer>,
    next_generation: u64,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let mut view = ViewState::new(catalog);
        view.set_active_tab(config.initial_tab);
        Self {
            view,
            overview_since: Instant::now(),
            should_quit: false,
            tick_interval: config.tick_interval(),
            frame_interval: config.frame_interval(),
            tick_tx,
            tick_rx,
            timer: None,
            next_generation: 0,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                _ = frames.tick() => {}
                Some(tick) = self.tick_rx.recv() => self.handle_tick(tick),
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => self.should_quit = true,
                },
            }
        }

        if self.timer_armed() {
            debug!("cancelling playback timer on exit");
            self.timer = None;
        }
        info!("event loop finished");
        Ok(())
    }

    /// Whether a playback timer is currently armed.
    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Arm or cancel the timer to follow a playback transition.
    fn apply(&mut self, transition: PlaybackTransition) {
        match transition {
            PlaybackTransition::Started => {
                self.next_generation += 1;
                self.timer = Some(PlaybackTimer::start(
                    self.next_generation,
                    self.tick_interval,
                    self.tick_tx.clone(),
                ));
            }
            PlaybackTransition::Stopped => {
                // Dropping the handle aborts the task before anything else runs
                self.timer = None;
            }
            PlaybackTransition::Restarted
            | PlaybackTransition::Advanced
            | PlaybackTransition::Unchanged => {}
        }
    }

    pub fn play(&mut self) {
        let transition = self.view.start_consent_playback();
        self.apply(transition);
    }

    pub fn jump_to_stage(&mut self, index: usize) {
        let transition = self.view.jump_to_consent_stage(index);
        self.apply(transition);
    }

    pub fn jump_relative(&mut self, delta: isize) {
        let transition = self.view.jump_consent_relative(delta);
        self.apply(transition);
    }

    /// Step playback for a tick from the live timer; stale ticks are dropped.
    pub fn handle_tick(&mut self, tick: PlaybackTick) {
        match &self.timer {
            Some(timer) if timer.owns(tick) => {
                let transition = self.view.step_consent_stage();
                self.apply(transition);
            }
            live => debug!(
                generation = tick.generation,
                live = ?live.as_ref().map(|timer| timer.generation()),
                "discarding stale playback tick"
            ),
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.switch_tab(|view| view.set_active_tab(tab));
    }

    /// Apply a tab change to the view, then run the enter/leave side effects.
    fn switch_tab(&mut self, change: impl FnOnce(&mut ViewState)) {
        let previous = self.view.active_tab();
        change(&mut self.view);
        let tab = self.view.active_tab();
        if tab == previous {
            return;
        }
        if previous == Tab::Endpoints {
            self.view.set_hovered_endpoint(None);
        }
        if tab == Tab::Overview {
            self.overview_since = Instant::now();
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_tab(ViewState::next_tab),
            KeyCode::BackTab => self.switch_tab(ViewState::prev_tab),
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.set_tab(Tab::ALL[index]);
            }
            _ => match self.view.active_tab() {
                Tab::Endpoints => self.handle_endpoints_key(key),
                Tab::Consent => self.handle_consent_key(key),
                Tab::Overview | Tab::Sca | Tab::Compliance => {}
            },
        }
    }

    fn handle_endpoints_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.view.hover_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.view.hover_next(),
            KeyCode::Enter => self.view.select_hovered(),
            KeyCode::Esc => self.view.set_hovered_endpoint(None),
            KeyCode::Char('g') => self.view.cycle_filter_group(),
            KeyCode::Char('s') => self.view.cycle_filter_status(),
            _ => {}
        }
    }

    fn handle_consent_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char(' ') => self.play(),
            KeyCode::Left | KeyCode::Char('h') => self.jump_relative(-1),
            KeyCode::Right | KeyCode::Char('l') => self.jump_relative(1),
            KeyCode::Home => self.jump_to_stage(0),
            KeyCode::End => {
                let last = self.view.consent().stage_count() - 1;
                self.jump_to_stage(last);
            }
            _ => {}
        }
    }
}
