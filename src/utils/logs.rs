pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log files and pipes get no ANSI color codes.
        .with_ansi(false)
        // stdout belongs to the console replies.
        .with_writer(std::io::stderr)
        .json()
        .init();
}
