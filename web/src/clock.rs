use afikomen_core::{Clock, Millis};
use web_time::{SystemTime, UNIX_EPOCH};

/// Wall clock, backed by `Date.now()` on wasm.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_millis().try_into().unwrap_or(Millis::MAX),
            Err(err) => {
                log::warn!("System clock is before the epoch: {}", err);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now() > 0);
    }
}
