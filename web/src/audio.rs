use afikomen_core::{Playback, Soundtrack};
use anyhow::anyhow;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, OscillatorNode, OscillatorType};

/// Seconds per beat of the victory phrase.
const BEAT_SECS: f64 = 0.18;

const GAIN: f32 = 0.2;

/// "Da-ye-nu, da-ye-nu, da-ye-nu" as `(frequency in Hz, beats)`.
const PHRASE: [(f32, u8); 12] = [
    (293.66, 1),
    (369.99, 1),
    (440.00, 2),
    (293.66, 1),
    (369.99, 1),
    (440.00, 2),
    (293.66, 1),
    (369.99, 1),
    (440.00, 1),
    (493.88, 1),
    (440.00, 1),
    (587.33, 3),
];

/// Frequency changes of the phrase relative to `start`, as `(frequency, at)`.
fn schedule(start: f64) -> impl Iterator<Item = (f32, f64)> {
    PHRASE.iter().scan(start, |at, &(frequency, beats)| {
        let note_at = *at;
        *at += f64::from(beats) * BEAT_SECS;
        Some((frequency, note_at))
    })
}

fn phrase_secs() -> f64 {
    PHRASE
        .iter()
        .map(|&(_, beats)| f64::from(beats) * BEAT_SECS)
        .sum()
}

fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> anyhow::Error {
    move |err| anyhow!("{}: {:?}", context, err)
}

/// Synthesizes the victory phrase once the afikomen is found.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct VictoryTune;

impl VictoryTune {
    fn try_play(&self) -> anyhow::Result<TuneHandle> {
        let context = AudioContext::new().map_err(js_err("could not create audio context"))?;
        let gain = context
            .create_gain()
            .map_err(js_err("could not create gain"))?;
        gain.gain().set_value(GAIN);
        gain.connect_with_audio_node(&context.destination())
            .map_err(js_err("could not connect gain"))?;

        let oscillator = context
            .create_oscillator()
            .map_err(js_err("could not create oscillator"))?;
        oscillator.set_type(OscillatorType::Triangle);
        oscillator
            .connect_with_audio_node(&gain)
            .map_err(js_err("could not connect oscillator"))?;

        let start = context.current_time();
        let frequency = oscillator.frequency();
        for (hz, at) in schedule(start) {
            frequency
                .set_value_at_time(hz, at)
                .map_err(js_err("could not schedule note"))?;
        }
        oscillator
            .start()
            .map_err(js_err("could not start oscillator"))?;
        oscillator
            .stop_with_when(start + phrase_secs())
            .map_err(js_err("could not schedule stop"))?;

        // contexts created outside a gesture start suspended
        let resume = context.resume().map_err(js_err("could not resume audio"))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(resume).await {
                log::warn!("victory tune was blocked: {:?}", err);
            }
        });

        Ok(TuneHandle {
            context,
            oscillator,
        })
    }
}

impl Soundtrack for VictoryTune {
    type Handle = TuneHandle;

    fn play(&mut self) -> Option<Self::Handle> {
        self.try_play()
            .map_err(|err| log::warn!("no sound: {:#}", err))
            .ok()
    }
}

#[derive(Debug)]
pub(crate) struct TuneHandle {
    context: AudioContext,
    oscillator: OscillatorNode,
}

impl Playback for TuneHandle {
    fn stop(&mut self) {
        if let Err(err) = self.oscillator.stop() {
            log::warn!("could not stop victory tune: {:?}", err);
        }
        // closing the context frees the audio thread
        if let Err(err) = self.context.close() {
            log::warn!("could not release victory tune: {:?}", err);
        }
    }
}
