use core::{
    fmt::{Display, Arguments},
    sync::atomic::{AtomicU8, self},
    time::Duration,
};
use std::{
    fmt::Write as _,
    io::{self, Write},
    time::Instant,
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

// Only ever holds a `&'static Logger`, so readers can hand out the reference after releasing the lock
static LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);

/// Install the global logger used by the logging macros.
pub fn set_logger(logger: &'static Logger) {
    Lazy::force(&PROCESS_START);
    *LOGGER.write() = Some(logger);
}

/// Get the global logger.
///
/// # Panics
///
/// Panics when no logger was installed with [`set_logger`].
pub fn get_logger() -> &'static Logger {
    let logger = *LOGGER.read();
    logger.expect("Logger was not set")
}

/// Get the global logger, if one was installed.
///
/// Library code logs through this, so it stays silent in programs that never install a logger.
pub fn try_get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

//--------------------------------------------------------------

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Time since the logging system was first used
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimeStamp(Duration);

impl TimeStamp {
    /// Get the duration since the process-wide start point
    pub const fn since_start(&self) -> Duration {
        self.0
    }
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{:>5}.{:03}]", self.0.as_secs(), self.0.subsec_millis()))
    }
}

/// Get the current timestamp
pub fn get_timestamp() -> TimeStamp {
    TimeStamp(PROCESS_START.elapsed())
}

//--------------------------------------------------------------

/// Logging level
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    /// Severe error: will probably result in a crash
    Severe,
    /// Error: may not result in a crash
    Error,
    /// Warning: While not as bad as an error, it may result to something like a performance regression
    Warning,
    /// General info
    Info,
    /// Verbose info
    Verbose,
    /// Debug info (includes verbose info)
    Debug,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Severe  => f.write_str("\x1B[1m\x1B[41m\x1B[30m[SEVERE ]\x1B[0m"),
            LogLevel::Error   => f.write_str(               "\x1B[91m[ERROR  ]\x1B[0m"),
            LogLevel::Warning => f.write_str(               "\x1B[93m[WARNING]\x1B[0m"),
            LogLevel::Info    => f.write_str(               "\x1B[37m[INFO   ]\x1B[0m"),
            LogLevel::Verbose => f.write_str(               "\x1B[90m[VERBOSE]\x1B[0m"),
            LogLevel::Debug   => f.write_str(               "\x1B[94m[DEBUG  ]\x1B[0m"),
        }
    }
}

/// Log category
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    category     : &'static str,
    sub_category : Option<&'static str>
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { category: name, sub_category: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { category: name, sub_category: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sub_category {
            Some(sub) => f.write_fmt(format_args!("{}({sub})", self.category)),
            None => f.write_fmt(format_args!("{}", self.category)),
        }
    }
}

/// Additional info about where the log occured
pub struct LogLocation {
    file : &'static str,
    line : u32,
    func : &'static str,
    time : TimeStamp,
}

impl LogLocation {
    /// Creates a new log location
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }

    /// Get the file name where the log occured
    pub const fn file(&self) -> &str {
        self.file
    }

    /// Get the line where the log occurred
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Get the function where the log occurred
    pub const fn function(&self) -> &str {
        self.func
    }

    /// Get the timestamp when the log occurred
    pub const fn timestamp(&self) -> TimeStamp {
        self.time
    }
}

struct LogLocationFormatter<'a> {
    loc   : &'a LogLocation,
    level : LogLevel
}

impl<'a> LogLocationFormatter<'a> {
    fn new(loc: &'a LogLocation, level: LogLevel) -> Self {
        Self { loc, level }
    }
}

impl<'a> Display for LogLocationFormatter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            LogLevel::Severe |
            LogLevel::Error |
            LogLevel::Debug => f.write_fmt(format_args!("({}:{}: {})", self.loc.file(), self.loc.line(), self.loc.function())),
            LogLevel::Warning |
            LogLevel::Info |
            LogLevel::Verbose => Ok(()),
        }
    }
}

pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::get_timestamp())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::get_timestamp())
    };
}

pub type LogWriter = Box<dyn Write + Send>;

pub struct LoggerState {
    writers:        [Option<LogWriter>; Self::MAX_WRITERS],
    cache:          Option<String>,
    always_flush:   bool,
    log_to_console: bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    pub const fn new() -> Self {
        const NONE: Option<LogWriter> = None;

        Self {
            writers: [NONE; Self::MAX_WRITERS],
            cache: None,
            always_flush: false,
            log_to_console: true,
        }
    }

    fn cache(&mut self) -> &mut String {
        self.cache.get_or_insert_with(|| String::with_capacity(Self::CACHE_FLUSH_LIMIT))
    }

    fn write_message(&mut self, message: &str) {
        self.cache().push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache().write_fmt(fmt_args);
        self.flush_when_needed();
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.as_ref().map_or(0, |cache| cache.len()) > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if let Some(cache) = &mut self.cache {
            if cache.is_empty() {
                return;
            }

            if self.log_to_console {
                let mut stdout = io::stdout().lock();
                _ = stdout.write_all(cache.as_bytes());
                _ = stdout.flush();
            }

            for writer in self.writers.iter_mut().flatten() {
                _ = writer.write_all(cache.as_bytes());
                _ = writer.flush();
            }
            cache.clear();
        }
    }
}

/// Logger
///
/// Supports up to 8 writers, e.g. terminal, file, external tool, etc
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: parking_lot::const_mutex(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Check if a message at `level` would be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to console
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Make sure to flush first, cause all messages before wanted/didn't want to be log to be written to console
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Add a writer.
    ///
    /// Returns `Ok(index)` if space was available. This index can be used to remove the writer later on.
    ///
    /// Otherwise returns an `Err` with the provided writer
    pub fn add_writer(&self, writer: LogWriter) -> Result<usize, LogWriter> {
        let mut state = self.state.lock();

        let empty = state.writers.iter_mut().enumerate().find(|val| val.1.is_none());
        match empty {
            Some((id, slot)) => {
                *slot = Some(writer);
                Ok(id)
            },
            None => Err(writer),
        }
    }

    /// Remove a writer from the logger
    pub fn remove_writer(&self, index: usize) -> Option<LogWriter> {
        let mut state = self.state.lock();
        state.flush();
        state.writers.get_mut(index).and_then(Option::take)
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"))
    }

    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter::new(&loc, level);
            let timestamp = loc.timestamp();
            let mut state = self.state.lock();
            state.format_message(format_args!("\x1B[38m{timestamp}\x1B[0m {level} [{category}] {loc_formatter}: "));
            state.format_message(format);
            state.write_message("\n");
        }
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Severe, $func, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Error, $func, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Debug, $func, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const CAT: LogCategory = LogCategory::new_with_sub("Test", "Logger");

    fn quiet_logger() -> (Logger, SharedBuffer) {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        let buffer = SharedBuffer::default();
        assert_eq!(logger.add_writer(Box::new(buffer.clone())).ok(), Some(0));
        (logger, buffer)
    }

    #[test]
    fn category_display() {
        assert_eq!(LogCategory::new("Main").to_string(), "Main");
        assert_eq!(CAT.to_string(), "Test(Logger)");
    }

    #[test]
    fn writes_after_flush() {
        let (logger, buffer) = quiet_logger();
        logger.log_fmt(CAT, LogLevel::Info, log_location!(), format_args!("grew to {}", 8));
        assert!(buffer.contents().is_empty());

        logger.flush();
        let text = buffer.contents();
        assert!(text.contains("[Test(Logger)]"));
        assert!(text.ends_with("grew to 8\n"));
    }

    #[test]
    fn always_flush_writes_immediately() {
        let (logger, buffer) = quiet_logger();
        logger.set_always_flush(true);
        logger.log(CAT, LogLevel::Warning, log_location!(), "careful");
        assert!(buffer.contents().contains("careful"));
    }

    #[test]
    fn max_level_filters() {
        let (logger, buffer) = quiet_logger();
        logger.set_max_level(LogLevel::Warning);
        assert!(logger.is_enabled(LogLevel::Error));
        assert!(!logger.is_enabled(LogLevel::Verbose));

        logger.log(CAT, LogLevel::Verbose, log_location!(), "hidden");
        logger.log(CAT, LogLevel::Error, log_location!(writes_after_flush), "shown");
        logger.flush();

        let text = buffer.contents();
        assert!(!text.contains("hidden"));
        assert!(text.contains("shown"));
        assert!(text.contains("writes_after_flush"));
    }

    #[test]
    fn writer_slots() {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        for i in 0..LoggerState::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());

        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert!(logger.remove_writer(LoggerState::MAX_WRITERS).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }

    #[test]
    fn timestamps_are_monotonic() {
        let first = get_timestamp();
        let second = get_timestamp();
        assert!(first <= second);
        assert!(first.to_string().starts_with('['));
    }
}
