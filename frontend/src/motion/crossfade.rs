//! Two-video crossfade that hides the loop point of the hero background.
//!
//! A fade starts shortly before the foreground video ends. The incoming video
//! is rewound and played, faded in, and only then is the outgoing video faded
//! out and rewound for its next turn. The scheduler never touches the DOM or
//! a timer: callers feed it playback positions and the current time, and
//! apply the [`VideoCommand`]s it hands back.

/// Milliseconds on whatever monotonic clock the caller uses.
pub type Millis = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoSlot {
    Primary,
    Secondary,
}

impl VideoSlot {
    pub fn other(self) -> Self {
        match self {
            VideoSlot::Primary => VideoSlot::Secondary,
            VideoSlot::Secondary => VideoSlot::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCommand {
    /// Seek to 0 and start playback.
    Restart(VideoSlot),
    /// Opacity 1, no blur.
    Reveal(VideoSlot),
    /// Opacity 0, 1px blur.
    Conceal(VideoSlot),
    /// Seek to 0 and clear the blur.
    Rewind(VideoSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossfadePhase {
    Idle,
    /// Incoming video is playing underneath, still transparent.
    Cueing,
    /// Incoming video is fading in over the outgoing one.
    FadingIn,
    /// Outgoing video is fading out; it is rewound when this phase ends.
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossfadeTimings {
    /// Remaining playback, in seconds, below which a fade starts.
    pub threshold_secs: f64,
    pub reveal_at: Millis,
    pub conceal_at: Millis,
    pub reset_at: Millis,
}

impl Default for CrossfadeTimings {
    fn default() -> Self {
        Self {
            threshold_secs: 3.0,
            reveal_at: 100.0,
            conceal_at: 600.0,
            reset_at: 1100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    started_at: Millis,
    outgoing: VideoSlot,
    incoming: VideoSlot,
}

#[derive(Debug, Clone)]
pub struct CrossfadeScheduler {
    timings: CrossfadeTimings,
    foreground: VideoSlot,
    phase: CrossfadePhase,
    fade: Option<Fade>,
}

impl Default for CrossfadeScheduler {
    fn default() -> Self {
        Self::new(CrossfadeTimings::default())
    }
}

impl CrossfadeScheduler {
    pub fn new(timings: CrossfadeTimings) -> Self {
        Self {
            timings,
            foreground: VideoSlot::Primary,
            phase: CrossfadePhase::Idle,
            fade: None,
        }
    }

    pub fn foreground(&self) -> VideoSlot {
        self.foreground
    }

    pub fn phase(&self) -> CrossfadePhase {
        self.phase
    }

    /// The transition lock: held from the start of a fade until its reset.
    pub fn is_locked(&self) -> bool {
        self.fade.is_some()
    }

    /// Feeds a `timeupdate` from one of the videos. Starts a fade when the
    /// foreground video is inside the threshold and no fade is running.
    pub fn observe(
        &mut self,
        slot: VideoSlot,
        current_time: f64,
        duration: f64,
        now: Millis,
    ) -> Vec<VideoCommand> {
        if slot != self.foreground || self.is_locked() || !duration.is_finite() {
            return Vec::new();
        }
        if duration - current_time >= self.timings.threshold_secs {
            return Vec::new();
        }
        self.begin(now)
    }

    /// Starts a fade away from the current foreground video. Ignored while
    /// the lock is held.
    pub fn begin(&mut self, now: Millis) -> Vec<VideoCommand> {
        if self.is_locked() {
            return Vec::new();
        }
        let outgoing = self.foreground;
        let incoming = outgoing.other();
        self.fade = Some(Fade {
            started_at: now,
            outgoing,
            incoming,
        });
        self.phase = CrossfadePhase::Cueing;
        self.foreground = incoming;
        log::debug!("crossfade {:?} -> {:?} started", outgoing, incoming);
        vec![VideoCommand::Restart(incoming)]
    }

    /// Returns every command that has come due by `now`.
    pub fn tick(&mut self, now: Millis) -> Vec<VideoCommand> {
        let mut commands = Vec::new();
        while let Some(fade) = self.fade {
            let elapsed = now - fade.started_at;
            match self.phase {
                CrossfadePhase::Cueing if elapsed >= self.timings.reveal_at => {
                    commands.push(VideoCommand::Reveal(fade.incoming));
                    self.phase = CrossfadePhase::FadingIn;
                }
                CrossfadePhase::FadingIn if elapsed >= self.timings.conceal_at => {
                    commands.push(VideoCommand::Conceal(fade.outgoing));
                    self.phase = CrossfadePhase::FadingOut;
                }
                CrossfadePhase::FadingOut if elapsed >= self.timings.reset_at => {
                    commands.push(VideoCommand::Rewind(fade.outgoing));
                    self.phase = CrossfadePhase::Idle;
                    self.fade = None;
                    log::debug!("crossfade to {:?} finished", fade.incoming);
                }
                _ => break,
            }
        }
        commands
    }

    /// When the next command comes due, if a fade is running.
    pub fn next_deadline(&self) -> Option<Millis> {
        let fade = self.fade?;
        let offset = match self.phase {
            CrossfadePhase::Idle => return None,
            CrossfadePhase::Cueing => self.timings.reveal_at,
            CrossfadePhase::FadingIn => self.timings.conceal_at,
            CrossfadePhase::FadingOut => self.timings.reset_at,
        };
        Some(fade.started_at + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use VideoCommand::*;
    use VideoSlot::*;

    fn run_to_completion(scheduler: &mut CrossfadeScheduler) -> Vec<VideoCommand> {
        let mut commands = Vec::new();
        while let Some(deadline) = scheduler.next_deadline() {
            commands.extend(scheduler.tick(deadline));
        }
        commands
    }

    #[test]
    fn starts_when_foreground_is_near_its_end() {
        let mut scheduler = CrossfadeScheduler::default();
        assert!(scheduler.observe(Primary, 5.0, 10.0, 0.0).is_empty());

        let commands = scheduler.observe(Primary, 7.5, 10.0, 1_000.0);
        assert_eq!(commands, vec![Restart(Secondary)]);
        assert!(scheduler.is_locked());
        assert_eq!(scheduler.phase(), CrossfadePhase::Cueing);
        assert_eq!(scheduler.foreground(), Secondary);
    }

    #[test]
    fn sequence_follows_the_timeline() {
        let mut scheduler = CrossfadeScheduler::default();
        scheduler.observe(Primary, 8.0, 10.0, 0.0);

        assert!(scheduler.tick(99.0).is_empty());
        assert_eq!(scheduler.tick(100.0), vec![Reveal(Secondary)]);
        assert_eq!(scheduler.phase(), CrossfadePhase::FadingIn);
        assert_eq!(scheduler.next_deadline(), Some(600.0));

        assert_eq!(scheduler.tick(600.0), vec![Conceal(Primary)]);
        assert_eq!(scheduler.phase(), CrossfadePhase::FadingOut);
        assert!(scheduler.is_locked());

        assert_eq!(scheduler.tick(1_100.0), vec![Rewind(Primary)]);
        assert_eq!(scheduler.phase(), CrossfadePhase::Idle);
        assert!(!scheduler.is_locked());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn late_tick_flushes_every_due_step_in_order() {
        let mut scheduler = CrossfadeScheduler::default();
        scheduler.begin(50.0);
        assert_eq!(
            scheduler.tick(5_000.0),
            vec![Reveal(Secondary), Conceal(Primary), Rewind(Primary)]
        );
        assert!(!scheduler.is_locked());
    }

    #[test]
    fn crossfade_is_symmetric() {
        let mut scheduler = CrossfadeScheduler::default();

        scheduler.observe(Primary, 9.0, 10.0, 0.0);
        let first = run_to_completion(&mut scheduler);
        assert_eq!(scheduler.foreground(), Secondary);
        assert_eq!(first.last(), Some(&Rewind(Primary)));

        let commands = scheduler.observe(Secondary, 9.0, 10.0, 20_000.0);
        assert_eq!(commands, vec![Restart(Primary)]);
        let second = run_to_completion(&mut scheduler);
        assert_eq!(scheduler.foreground(), Primary);
        assert_eq!(second, vec![Reveal(Primary), Conceal(Secondary), Rewind(Secondary)]);
    }

    #[test]
    fn lock_blocks_a_second_fade() {
        let mut scheduler = CrossfadeScheduler::default();
        scheduler.observe(Primary, 7.5, 10.0, 0.0);

        // The incoming video also reports it is inside the threshold.
        assert!(scheduler.observe(Secondary, 7.5, 10.0, 200.0).is_empty());
        assert!(scheduler.begin(300.0).is_empty());
        assert_eq!(scheduler.foreground(), Secondary);

        run_to_completion(&mut scheduler);
        assert!(!scheduler.is_locked());
    }

    #[test]
    fn background_video_updates_are_ignored() {
        let mut scheduler = CrossfadeScheduler::default();
        assert!(scheduler.observe(Secondary, 9.9, 10.0, 0.0).is_empty());
        assert!(!scheduler.is_locked());
    }

    #[test]
    fn unknown_duration_never_starts_a_fade() {
        let mut scheduler = CrossfadeScheduler::default();
        assert!(scheduler.observe(Primary, 0.0, f64::NAN, 0.0).is_empty());
        assert!(scheduler.observe(Primary, 0.0, f64::INFINITY, 0.0).is_empty());
        assert!(!scheduler.is_locked());
    }
}
