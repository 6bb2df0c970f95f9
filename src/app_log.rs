use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize console logging: compact stdout output without timestamps or
/// module targets, warnings and errors carry a pictographic prefix.
pub fn init() {
    env_logger::builder()
        .format(format_record)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();
}

fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let prefix = match record.level() {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    };
    writeln!(buf, "{}{}", prefix, record.args())
}
