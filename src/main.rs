use helicopter_madness::{EngineBuilder, GameConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();
    log::info!(
        "Helicopter Madness starting ({}x{}, high scores in {:?})",
        config.stage_width,
        config.stage_height,
        config.high_score_file
    );

    EngineBuilder::new().with_config(config).build().run();
}
