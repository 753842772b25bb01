use log::Log;

/// Logs every record to stdout prefixed by its source location.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                println!("{file}:{line}: {}: {}", record.level(), record.args());
            }
            _ => {
                println!("{}: {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}
