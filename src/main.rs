fn main() {
    // Logging shares stdout with the subtitle display, so debug output from
    // the timer tasks stays off by default.
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("failed to build logger instance");

    let channels = sublate_bridge::BridgeChannels::default();
    sublate_backend::run(channels.backend_rx, channels.backend_tx);
    sublate_frontend::run(channels.frontend_rx, channels.frontend_tx)
        .expect("failed to run frontend");
}
