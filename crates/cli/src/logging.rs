use tracing::level_filters::LevelFilter;

/// Log to stderr. Only warnings by default, each `-v` shows another level of detail
pub fn init(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    2 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };

  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_target(false)
    .without_time()
    .with_writer(anstream::stderr)
    .init();
}
