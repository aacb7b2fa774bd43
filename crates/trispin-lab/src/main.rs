use trispin_engine::logging::init_logging;
use trispin_lab::{LabApp, LabConfig};

fn main() {
    let config = LabConfig::default();
    init_logging(config.logging.clone());

    if let Err(err) = LabApp::run(config) {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}
