use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(Local::now(), file, line, message));
    }

    fn format_line(&self, now: DateTime<Local>, file: &str, line: u32, message: &str) -> String {
        let timestamp = now.format(TIMESTAMP_FORMAT);
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first prefix.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
