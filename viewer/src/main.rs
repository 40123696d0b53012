mod hud;
mod paint;
mod state;
use state::State;

use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};

use std::time::{SystemTime, UNIX_EPOCH};

const DEFAULT_SYSTEM: &str = "systems/tata_surya.json5";

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path_to_system = {
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 2 {
            args[1].clone()
        } else {
            DEFAULT_SYSTEM.to_string()
        }
    };
    let loaded = match loader::load_file(&path_to_system) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Couldn't load {}: {}", path_to_system, e);
            std::process::exit(1);
        }
    };
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0);
    let system = loaded.into_solar_system().with_start_date(now_ms);

    let c = Conf::new();
    let built = ContextBuilder::new("tata_surya", "gamma-delta")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Tata Surya".to_owned(),
            samples: ggez::conf::NumSamples::Four,
            ..Default::default()
        })
        .window_mode(WindowMode {
            width: 1280.0,
            height: 800.0,
            resizable: true,
            ..Default::default()
        })
        .build();
    let (ref mut ctx, ref mut event_loop) = match built {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Couldn't open a window: {}", e);
            std::process::exit(1);
        }
    };

    let state = &mut State::new(ctx, system);

    if let Err(e) = event::run(ctx, event_loop, state) {
        log::error!("Stopped with an error: {}", e);
    }
}
