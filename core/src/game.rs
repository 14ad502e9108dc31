use crate::generator::draw_target;
use crate::*;

/// Owns a round together with everything it needs from the outside world:
/// where targets come from, what time it is, and the victory tune.
pub struct GameState<G: TargetGenerator, C: Clock, S: Soundtrack> {
    session: SessionState,
    generator: G,
    clock: C,
    soundtrack: S,
    audio: AudioSlot<S::Handle>,
}

impl<G, C, S> GameState<G, C, S>
where
    G: TargetGenerator,
    C: Clock,
    S: Soundtrack,
{
    /// Fresh game with a newly drawn target.
    pub fn new(config: BoardConfig, mut generator: G, clock: C, soundtrack: S) -> Self {
        let target = draw_target(&mut generator, config);
        Self {
            session: SessionState::new_unchecked(config, target),
            generator,
            clock,
            soundtrack,
            audio: AudioSlot::new(),
        }
    }

    /// See [`SessionState::start`].
    pub fn start(
        config: BoardConfig,
        initial_target: Option<CellIndex>,
        mut generator: G,
        clock: C,
        soundtrack: S,
    ) -> Result<Self> {
        let session = SessionState::start(config, initial_target, &mut generator)?;
        Ok(Self {
            session,
            generator,
            clock,
            soundtrack,
            audio: AudioSlot::new(),
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn is_playing_audio(&self) -> bool {
        self.audio.is_held()
    }

    /// Handles a tap on `cell`, starting the victory tune when it hides the target.
    pub fn tap(&mut self, cell: CellIndex) -> Result<RevealOutcome> {
        let outcome = self.session.reveal(cell, self.clock.now())?;

        if outcome.is_found() {
            let soundtrack = &mut self.soundtrack;
            self.audio.acquire_with(|| soundtrack.play());
        }

        Ok(outcome)
    }

    pub fn reset(&mut self) {
        self.audio.release();
        self.session.reset(&mut self.generator);
    }

    /// View-lifecycle hook: the page went to the background or is being torn down.
    pub fn stop_audio(&mut self) {
        self.audio.release();
    }

    pub fn snapshot(&self) -> CellIndex {
        self.session.snapshot()
    }

    /// Replaces the current round with one hiding the target at `target`.
    pub fn restore(&mut self, target: CellIndex) -> Result<()> {
        let session = SessionState::new(self.session.config(), target)?;
        self.audio.release();
        self.session = session;
        Ok(())
    }
}
