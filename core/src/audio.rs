/// A started sound that must be stopped and released exactly once.
pub trait Playback {
    fn stop(&mut self);
}

/// Starts the victory tune. `None` means playback is unavailable; the game goes on silently.
pub trait Soundtrack {
    type Handle: Playback;

    fn play(&mut self) -> Option<Self::Handle>;
}

/// Soundtrack that never makes a sound.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silence;

impl Playback for Silence {
    fn stop(&mut self) {}
}

impl Soundtrack for Silence {
    type Handle = Silence;

    fn play(&mut self) -> Option<Self::Handle> {
        None
    }
}

/// Holds at most one playing handle and releases it on `release` or drop.
#[derive(Debug)]
pub struct AudioSlot<P: Playback> {
    handle: Option<P>,
}

impl<P: Playback> AudioSlot<P> {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_held(&self) -> bool {
        self.handle.is_some()
    }

    /// Releases whatever is still held, then stores the freshly started handle.
    pub fn acquire_with(&mut self, start: impl FnOnce() -> Option<P>) -> bool {
        self.release();
        self.handle = start();
        if self.handle.is_none() {
            log::debug!("audio unavailable, continuing without sound");
        }
        self.is_held()
    }

    /// Idempotent.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            log::debug!("releasing audio");
            handle.stop();
        }
    }
}

impl<P: Playback> Default for AudioSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Playback> Drop for AudioSlot<P> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[derive(Clone, Debug, Default)]
    pub(crate) struct Counters {
        pub started: Rc<Cell<u32>>,
        pub stopped: Rc<Cell<u32>>,
    }

    #[derive(Debug)]
    pub(crate) struct CountingHandle(Counters);

    impl Playback for CountingHandle {
        fn stop(&mut self) {
            self.0.stopped.set(self.0.stopped.get() + 1);
        }
    }

    #[derive(Clone, Debug, Default)]
    pub(crate) struct CountingSoundtrack {
        pub counters: Counters,
        pub unavailable: bool,
    }

    impl Soundtrack for CountingSoundtrack {
        type Handle = CountingHandle;

        fn play(&mut self) -> Option<Self::Handle> {
            if self.unavailable {
                return None;
            }
            let started = &self.counters.started;
            started.set(started.get() + 1);
            Some(CountingHandle(self.counters.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn release_is_idempotent() {
        let mut soundtrack = CountingSoundtrack::default();
        let counters = soundtrack.counters.clone();
        let mut slot = AudioSlot::new();

        assert!(slot.acquire_with(|| soundtrack.play()));
        slot.release();
        slot.release();

        assert!(!slot.is_held());
        assert_eq!(counters.started.get(), 1);
        assert_eq!(counters.stopped.get(), 1);
    }

    #[test]
    fn acquiring_again_stops_the_previous_handle() {
        let mut soundtrack = CountingSoundtrack::default();
        let counters = soundtrack.counters.clone();
        let mut slot = AudioSlot::new();

        slot.acquire_with(|| soundtrack.play());
        slot.acquire_with(|| soundtrack.play());

        assert_eq!(counters.started.get(), 2);
        assert_eq!(counters.stopped.get(), 1);
    }

    #[test]
    fn dropping_the_slot_stops_playback() {
        let mut soundtrack = CountingSoundtrack::default();
        let counters = soundtrack.counters.clone();
        {
            let mut slot = AudioSlot::new();
            slot.acquire_with(|| soundtrack.play());
        }

        assert_eq!(counters.stopped.get(), 1);
    }

    #[test]
    fn unavailable_audio_leaves_slot_empty() {
        let mut slot: AudioSlot<Silence> = AudioSlot::new();

        assert!(!slot.acquire_with(|| Silence.play()));
        slot.release();
    }
}
