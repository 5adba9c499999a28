use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod theme;
mod utils;

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

    let settings = match settings::Settings::from_fragment(&location_hash) {
        Ok(settings) => {
            if let Some(log_level) = settings.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            settings
        }
        Err(err) => {
            console_log::init_with_level(log::Level::Warn).expect("Error initializing logger");
            log::warn!("ignoring invalid args {:?}: {}", location_hash, err);
            settings::Settings::default()
        }
    };
    log::debug!("settings: {:?}", settings);

    theme::Theme::apply(settings.theme);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        config: settings.game_config(),
        seed: settings.seed,
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
