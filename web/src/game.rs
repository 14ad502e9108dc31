use crate::audio::VictoryTune;
use crate::clock::SystemClock;
use crate::utils::*;
use afikomen_core as game;
use game::{BoxCell, CellIndex, GamePhase, RevealOutcome};
use gloo::events::EventListener;
use gloo::storage::errors::StorageError;
use gloo::timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

type WebGame = game::GameState<game::RandomTargetGenerator, SystemClock, VictoryTune>;

const TOAST_MILLIS: u32 = 3_500;

const FIND_MESSAGE: &str = "Find the Afikomen";
const FOUND_MESSAGE: &str = "Afikomen found!";

/// The only value carried across a reload: where the afikomen hides.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct SavedTarget(CellIndex);

impl StorageKey for SavedTarget {
    const KEY: &'static str = "afikomen:target";
}

/// A saved value that cannot be read counts as zero, the same as an empty slot in a saved bundle.
fn saved_target_from(loaded: Result<Option<SavedTarget>, StorageError>) -> Option<CellIndex> {
    match loaded {
        Ok(saved) => saved.map(|SavedTarget(target)| target),
        Err(err) => {
            log::warn!("Could not read saved target, using 0: {:?}", err);
            Some(0)
        }
    }
}

/// Where the target of the first round came from.
#[derive(Copy, Clone, Debug, PartialEq)]
enum TargetSource {
    Drawn,
    Restored(CellIndex),
    Discarded(CellIndex),
    SeedForced,
}

/// Puts a saved target back into `game`, unless a seed was forced or it does not fit the board.
fn apply_saved_target<G, C, S>(
    game: &mut game::GameState<G, C, S>,
    saved: Option<CellIndex>,
    seed_forced: bool,
) -> TargetSource
where
    G: game::TargetGenerator,
    C: game::Clock,
    S: game::Soundtrack,
{
    let source = match saved {
        None => TargetSource::Drawn,
        Some(_) if seed_forced => TargetSource::SeedForced,
        Some(target) => match game.restore(target) {
            Ok(()) => TargetSource::Restored(target),
            Err(err) => {
                log::warn!("Discarding saved target: {}", err);
                TargetSource::Discarded(target)
            }
        },
    };
    log::info!("initial target source: {:?}", source);
    source
}

/// View-stop hook; returns whether audio had to be released.
fn release_audio_if_hidden<G, C, S>(game: &mut game::GameState<G, C, S>, hidden: bool) -> bool
where
    G: game::TargetGenerator,
    C: game::Clock,
    S: game::Soundtrack,
{
    if !hidden {
        return false;
    }
    let was_playing = game.is_playing_audio();
    log::debug!("page hidden, stopping audio");
    game.stop_audio();
    was_playing
}

fn header_text(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Playing => FIND_MESSAGE,
        GamePhase::Found => FOUND_MESSAGE,
    }
}

fn found_message(elapsed: game::Elapsed) -> String {
    format!("Found in {:.1} seconds", elapsed.as_secs_f64())
}

fn cell_classes(cell: BoxCell) -> Classes {
    classes!(
        "box",
        match cell {
            BoxCell::Covered => None,
            BoxCell::Faded => Some("faded"),
        }
    )
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tap(CellIndex),
    Reset,
    DismissToast,
    VisibilityChanged,
}

#[derive(Properties, Clone, PartialEq)]
struct BoxProps {
    index: CellIndex,
    cell: BoxCell,
    callback: Callback<CellIndex>,
}

#[function_component(BoxView)]
fn box_component(props: &BoxProps) -> Html {
    let BoxProps {
        index,
        cell,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("box {} tapped", index);
        callback.emit(index);
    });

    html! {
        <td class={cell_classes(cell)} {onclick}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::BoardConfig,
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    game: WebGame,
    toast: Option<String>,
    _toast_timeout: Option<Timeout>,
    _visibility_listener: EventListener,
}

impl GameView {
    fn create_game(props: &GameProps) -> WebGame {
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let mut game = WebGame::new(
            props.config,
            game::RandomTargetGenerator::new(seed),
            SystemClock,
            VictoryTune,
        );
        let saved = saved_target_from(SavedTarget::session_load());
        apply_saved_target(&mut game, saved, props.seed.is_some());
        SavedTarget(game.snapshot()).session_save();
        game
    }

    fn create_visibility_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "visibilitychange", move |_| {
            link.send_message(Msg::VisibilityChanged)
        })
    }

    fn show_toast(&mut self, ctx: &Context<Self>, text: String) {
        let link = ctx.link().clone();
        self.toast = Some(text);
        self._toast_timeout = Some(Timeout::new(TOAST_MILLIS, move || {
            link.send_message(Msg::DismissToast)
        }));
    }

    fn tap(&mut self, ctx: &Context<Self>, index: CellIndex) -> bool {
        match self.game.tap(index) {
            Ok(RevealOutcome::Found { elapsed }) => {
                log::info!("afikomen found in {:?}", elapsed.duration());
                self.show_toast(ctx, found_message(elapsed));
                true
            }
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::error!("tap rejected: {}", err);
                false
            }
        }
    }

    fn view_grid(&self, ctx: &Context<Self>) -> Html {
        let session = self.game.session();
        let config = session.config();
        let callback = ctx.link().callback(Msg::Tap);

        html! {
            <table class="grid">
                {
                    for (0..config.rows()).map(|y| html! {
                        <tr>
                            {
                                for (0..config.columns()).map(|x| {
                                    let index = config.index_of((x, y));
                                    let cell = session.cell_at(index).unwrap_or_default();
                                    let callback = callback.clone();
                                    html! {
                                        <BoxView {index} {cell} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_found(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <>
                <div class="afikomen dancing" role="img" aria-label="The afikomen"/>
                <button class="reset" {onclick}>{"Hide it again"}</button>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: Self::create_game(ctx.props()),
            toast: None,
            _toast_timeout: None,
            _visibility_listener: Self::create_visibility_listener(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Tap(index) => self.tap(ctx, index),
            Reset => {
                log::debug!("reset");
                self.game.reset();
                self.toast = None;
                self._toast_timeout = None;
                true
            }
            DismissToast => {
                self._toast_timeout = None;
                self.toast.take().is_some()
            }
            VisibilityChanged => {
                release_audio_if_hidden(&mut self.game, gloo::utils::document().hidden());
                false
            }
        };

        SavedTarget(self.game.snapshot()).session_save();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.game.phase();
        let body = match phase {
            GamePhase::Playing => self.view_grid(ctx),
            GamePhase::Found => self.view_found(ctx),
        };
        let toast = self.toast.as_ref().map(|text| {
            html! {
                <div class="toast" role="status">{text.clone()}</div>
            }
        });

        html! {
            <div class="afikomen-game">
                <h1>{header_text(phase)}</h1>
                {body}
                {toast}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.game.stop_audio();
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo::storage::{SessionStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_target_survives_session_storage() {
        SavedTarget(17).session_save();

        assert_eq!(saved_target_from(SavedTarget::session_load()), Some(17));
    }

    #[wasm_bindgen_test]
    fn empty_session_storage_draws_fresh() {
        SessionStorage::delete(SavedTarget::KEY);

        assert_eq!(saved_target_from(SavedTarget::session_load()), None);
    }

    #[wasm_bindgen_test]
    fn garbage_in_session_storage_counts_as_zero() {
        SessionStorage::raw()
            .set_item(SavedTarget::KEY, "{not json")
            .unwrap();

        assert_eq!(saved_target_from(SavedTarget::session_load()), Some(0));
        SessionStorage::delete(SavedTarget::KEY);
    }
}
