//! Utility functions used throughout this crate, following the teacher's
//! `util.rs`.

use env_logger::fmt::Color as LogColor;
use log::LevelFilter;
use std::sync::Once;

use crate::opt::Opts;

/// Run `initialize_logging` one time
static ONCE: Once = Once::new();

/// Initialize logging for this crate. Verbosity level is reported on the
/// first line written, matching the original implementation's CLI contract.
pub(crate) fn initialize_logging(args: &Opts) {
    ONCE.call_once(|| {
        let level = match args.verbose {
            0 => LevelFilter::Off,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .format_timestamp(None)
            .format(|buf, record| {
                use std::io::Write;
                let mut style = buf.style();
                let level_style = match record.level() {
                    log::Level::Warn => style.set_color(LogColor::Yellow),
                    log::Level::Info => style.set_color(LogColor::Green),
                    log::Level::Debug => style.set_color(LogColor::Magenta),
                    log::Level::Trace => style.set_color(LogColor::Cyan),
                    log::Level::Error => style.set_color(LogColor::Red),
                };
                writeln!(buf, " {}: {}", level_style.value(record.level()), record.args())
            })
            .filter(None, level)
            .init();

        if args.verbose > 0 {
            log::warn!("Verbosity level set to {}", args.verbose);
        }
    });
}
