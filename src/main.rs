//! Breakout - headless frame driver
//!
//! Loads the configuration, projects the configured entities through the
//! model matrix onto the screen once, and dumps the result.

use breakout::config::AppConfig;
use breakout::scene::Scene;

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting {}", config.window.title);

    let scene = match Scene::from_config(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Invalid scene: {}", e);
            std::process::exit(1);
        }
    };

    let quads = scene.frame();
    if config.debug.dump_frame {
        scene.transform().model_matrix().print();
        for quad in &quads {
            println!("{}:", quad.name);
            for corner in &quad.corners {
                corner.print();
            }
        }
    }
}
