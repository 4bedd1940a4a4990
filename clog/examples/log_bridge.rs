use clog::{Attributes, LogLevel};

fn main() {
    clog::init(None, Attributes::NONE).unwrap();
    clog::init_log_bridge(log::LevelFilter::Trace).unwrap();
    clog::set_ignored_types(LogLevel::Trace).unwrap();

    log::info!("routed through clog");
    log::warn!("{} warnings", 2);
    log::trace!("ignored");

    clog::terminate().unwrap();
    log::error!("dropped, clog is terminated");
}
