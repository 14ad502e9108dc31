use afikomen_core::{BoardConfig, Coord};
use clap::Parser;
use wasm_bindgen::prelude::*;

mod audio;
mod clock;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of boxes per row
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.0)]
    columns: Coord,

    /// Number of rows
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.1)]
    rows: Coord,
}

impl Args {
    fn game_props(&self) -> game::GameProps {
        game::GameProps {
            config: BoardConfig::new((self.columns, self.rows)),
            seed: self.seed,
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_from_location_hash() {
        let args = Args::try_parse_from("#-vv&--seed=42&--columns=4".split(['#', '&'])).unwrap();
        let props = args.game_props();

        assert_eq!(props.seed, Some(42));
        assert_eq!(props.config.size, (4, 5));
    }

    #[test]
    fn empty_hash_uses_default_board() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();

        assert_eq!(args.game_props().config, BoardConfig::default());
        assert_eq!(args.seed, None);
    }
}
