use crate::config::Config;
use crate::level::Level;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

/// Output destination shared between a logger and whoever created it.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

// ISO 8601, millisecond precision, numeric UTC offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Source position of a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl From<&Location<'static>> for Caller<'static> {
    fn from(location: &Location<'static>) -> Self {
        Caller {
            file: location.file(),
            line: location.line(),
        }
    }
}

struct State {
    name: String,
    level: Level,
    writer: SharedWriter,
}

/// A named, leveled logger writing one line per message to a shared writer.
///
/// All state sits behind a single mutex which is held from the threshold
/// check until the line has been written, so concurrent callers never
/// interleave partial lines on the same logger.
pub struct Logger {
    state: Mutex<State>,
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn base_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

impl Logger {
    pub fn new(name: impl Into<String>, level: Level, writer: SharedWriter) -> Logger {
        Logger {
            state: Mutex::new(State {
                name: name.into(),
                level,
                writer,
            }),
        }
    }

    pub fn from_config(config: &Config, writer: SharedWriter) -> Logger {
        Logger::new(
            config.name.clone().unwrap_or_default(),
            config.level.unwrap_or_default(),
            writer,
        )
    }

    pub fn name(&self) -> String {
        lock(&self.state).name.clone()
    }

    pub fn level(&self) -> Level {
        lock(&self.state).level
    }

    /// Returns the current writer itself, not a copy.
    pub fn writer(&self) -> SharedWriter {
        lock(&self.state).writer.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        lock(&self.state).name = name.into();
    }

    /// No validation: a threshold above STATS silences the logger.
    pub fn set_level(&self, level: Level) {
        lock(&self.state).level = level;
    }

    /// The previous writer is neither flushed nor closed.
    pub fn set_writer(&self, writer: SharedWriter) {
        lock(&self.state).writer = writer;
    }

    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_at(level, Some(Location::caller().into()), args);
    }

    /// Writes `args` at `level`, attributing it to `caller` in trace output.
    ///
    /// Nothing is formatted when `level` is below the threshold. Errors from
    /// the writer are dropped.
    pub fn log_at(&self, level: Level, caller: Option<Caller<'_>>, args: fmt::Arguments<'_>) {
        let state = lock(&self.state);
        if level < state.level {
            return;
        }

        let now = chrono::Local::now();
        let mut line = String::new();
        let _ = write!(line, "{} {}", now.format(TIMESTAMP_FORMAT), state.name);
        if state.level == Level::TRACE {
            push_trace(&mut line, &state.name, caller);
        }
        let _ = write!(line, " {level}: ");
        // A failing Display impl leaves whatever it got through.
        let _ = line.write_fmt(args);
        line.push('\n');

        let _ = lock(&state.writer).write_all(line.as_bytes());
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::TRACE, args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARN, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    /// Logs at FATAL, then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::FATAL, args);
        std::process::exit(1);
    }

    #[track_caller]
    pub fn stats(&self, args: fmt::Arguments<'_>) {
        self.log(Level::STATS, args);
    }
}

// Appends ":<file>:<line>", dropping the file when the name already starts with it.
fn push_trace(line: &mut String, name: &str, caller: Option<Caller<'_>>) {
    let (file, lineno) = match caller {
        Some(caller) => (base_name(caller.file), caller.line),
        None => ("???", 0),
    };
    if !name.starts_with(file) {
        line.push(':');
        line.push_str(file);
    }
    let _ = write!(line, ":{lineno}");
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(String::new(), Level::TRACE, Arc::new(Mutex::new(io::stderr())))
    }
}

// Never blocks: a logger formatted inside its own log call is already locked.
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Logger");
        match self.state.try_lock() {
            Ok(state) => d.field("name", &state.name).field("level", &state.level),
            Err(TryLockError::Poisoned(err)) => {
                let state = err.into_inner();
                d.field("name", &state.name).field("level", &state.level)
            }
            Err(TryLockError::WouldBlock) => d.field("state", &format_args!("<locked>")),
        };
        d.finish_non_exhaustive()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Level::from(metadata.level()) >= self.level()
    }

    fn log(&self, record: &log::Record) {
        let caller = record.file().map(|file| Caller {
            file,
            line: record.line().unwrap_or(0),
        });
        self.log_at(record.level().into(), caller, *record.args());
    }

    fn flush(&self) {
        let _ = lock(&self.writer()).flush();
    }
}
