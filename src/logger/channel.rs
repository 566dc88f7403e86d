//! Diagnostic channel logger
//!
//! Handlers record diagnostics through the [`Logger`] trait instead of a
//! process-wide accessor, so tests can inject a recording implementation.

use super::writer;
use crate::error::HandlerError;

/// Channel-based diagnostic logger injected into request handlers
pub trait Logger: Send + Sync {
    /// Record `message` on `channel`
    fn save(&self, channel: &str, message: &str) -> Result<(), HandlerError>;
}

/// Writes `[channel] message` lines through the shared log writer
#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelLogger;

impl Logger for ChannelLogger {
    fn save(&self, channel: &str, message: &str) -> Result<(), HandlerError> {
        let line = format!("[{channel}] {message}");
        match writer::get() {
            Some(w) => w.write_info(&line)?,
            None => println!("{line}"),
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::Logger;
    use crate::error::HandlerError;
    use std::sync::Mutex;

    /// Keeps every saved entry in memory
    #[derive(Default)]
    pub struct RecordingLogger {
        entries: Mutex<Vec<(String, String)>>,
    }

    impl RecordingLogger {
        pub fn entries(&self) -> Vec<(String, String)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl Logger for RecordingLogger {
        fn save(&self, channel: &str, message: &str) -> Result<(), HandlerError> {
            self.entries
                .lock()
                .unwrap()
                .push((channel.to_string(), message.to_string()));
            Ok(())
        }
    }

    /// Always fails, for error propagation tests
    pub struct BrokenLogger;

    impl Logger for BrokenLogger {
        fn save(&self, _channel: &str, _message: &str) -> Result<(), HandlerError> {
            Err(HandlerError::Log(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "log sink closed",
            )))
        }
    }
}
