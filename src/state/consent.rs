// Consent lifecycle playback state machine.
// Linear walk over the consent stages, auto-advanced by a timer or scrubbed manually.

use tracing::{debug, warn};

/// What a playback operation did to the playing flag.
///
/// The owner of the playback timer arms it on `Started` and drops it on
/// `Stopped`; the other outcomes leave the timer as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackTransition {
    /// Playing went from false to true.
    Started,
    /// Play pressed while already playing; index reset, flag unchanged.
    Restarted,
    /// Tick moved to the next stage.
    Advanced,
    /// Playing went from true to false.
    Stopped,
    /// Nothing observable changed the playing flag.
    Unchanged,
}

/// Stage index plus playing flag for a sequence of `stage_count` stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentPlayback {
    index: usize,
    playing: bool,
    stage_count: usize,
}

impl ConsentPlayback {
    /// Initial state (0, not playing). `stage_count` is at least one.
    pub fn new(stage_count: usize) -> Self {
        Self {
            index: 0,
            playing: false,
            stage_count: stage_count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    fn last(&self) -> usize {
        self.stage_count - 1
    }

    /// Restart from the first stage and play.
    pub fn play(&mut self) -> PlaybackTransition {
        let was_playing = self.playing;
        *self = Self {
            index: 0,
            playing: true,
            ..*self
        };
        debug!(was_playing, "consent playback started");
        if was_playing {
            PlaybackTransition::Restarted
        } else {
            PlaybackTransition::Started
        }
    }

    /// Timer tick: advance one stage. Playback stops on reaching the last
    /// stage, or immediately if already there; it never wraps.
    ///
    /// Ignored while not playing.
    pub fn tick(&mut self) -> PlaybackTransition {
        if !self.playing {
            return PlaybackTransition::Unchanged;
        }
        if self.index < self.last() {
            self.index += 1;
        }
        if self.index == self.last() {
            self.playing = false;
            debug!(index = self.index, "consent playback reached final stage");
            PlaybackTransition::Stopped
        } else {
            debug!(index = self.index, "consent playback advanced");
            PlaybackTransition::Advanced
        }
    }

    /// Manual scrub to `index`, interrupting playback.
    ///
    /// Out-of-range indices are clamped to the last stage.
    pub fn jump(&mut self, index: usize) -> PlaybackTransition {
        let target = if index > self.last() {
            warn!(
                index,
                last = self.last(),
                "consent stage out of range, clamping"
            );
            self.last()
        } else {
            index
        };

        let was_playing = self.playing;
        // Single assignment so index and flag change together
        *self = Self {
            index: target,
            playing: false,
            ..*self
        };

        if was_playing {
            PlaybackTransition::Stopped
        } else {
            PlaybackTransition::Unchanged
        }
    }

    /// Whether stage `i` is already behind the current one.
    pub fn is_completed(&self, i: usize) -> bool {
        i < self.index
    }
}
