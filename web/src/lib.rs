use clap::Parser;
use wasm_bindgen::prelude::*;

mod client;
mod game;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Parses flags out of a location hash such as `#-vv&--max-attempts=3`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        // clap wants a program name first
        let flags = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("").chain(flags))
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

    let args = match Args::from_location_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            args
        }
        Err(err) => {
            console_log::init_with_level(log::Level::Warn).expect("Error initializing logger");
            log::warn!("ignoring unparseable location hash {:?}: {}", location_hash, err);
            Args::default()
        }
    };
    log::debug!("config: {:?}", args.game);

    let root: web_sys::Element = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
