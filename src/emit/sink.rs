//! Line sinks.
//!
//! A sink accepts one complete line per call. Implementations must write the
//! line atomically with respect to other callers so concurrent requests
//! interleave at line granularity only.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for emitted lines.
pub trait LogSink: Send + Sync + std::fmt::Debug {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Write `line` followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Writes to the process's standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn name(&self) -> &'static str {
        "stderr"
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stderr().lock();
        writeln!(out, "{}", line)
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer_across_clones() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write_line("one").unwrap();
        sink.write_line("two").unwrap();

        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(clone.len(), 2);
    }
}
