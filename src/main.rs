use driftglow::EffectConfig;

fn main() {
    env_logger::init();

    if let Err(e) = driftglow::run(EffectConfig::default()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
