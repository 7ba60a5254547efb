use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Map the number of `-v` flags to a level; warnings are always shown.
pub fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to stderr so stdout carries only the program's answer.
pub fn init(verbose: u8) {
    // A logger may already be installed, e.g. by a test harness.
    let _ = TermLogger::init(
        level(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
