pub mod memory;
pub mod stdout;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Outcome of a single [`ByteSink::write`] call.
///
/// The count is signed so that a misbehaving sink can report a negative
/// value; a count and an error may be reported together.
#[derive(Debug)]
pub struct WriteReport {
    pub written: isize,
    pub error: Option<io::Error>,
}

impl WriteReport {
    pub fn ok(written: isize) -> Self {
        Self { written, error: None }
    }

    pub fn failed(written: isize, error: io::Error) -> Self {
        Self { written, error: Some(error) }
    }
}

impl From<io::Result<usize>> for WriteReport {
    fn from(result: io::Result<usize>) -> Self {
        match result {
            Ok(n) => Self::ok(isize::try_from(n).unwrap_or(isize::MAX)),
            Err(e) => Self::failed(0, e),
        }
    }
}

/// A destination that accepts bytes.
pub trait ByteSink: Send + Sync {
    fn write(&self, bytes: &[u8]) -> WriteReport;
}

impl<S: ByteSink + ?Sized> ByteSink for &S {
    fn write(&self, bytes: &[u8]) -> WriteReport {
        (**self).write(bytes)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write(&self, bytes: &[u8]) -> WriteReport {
        (**self).write(bytes)
    }
}

pub fn create_sink(target: OutputTarget) -> Box<dyn ByteSink> {
    match target {
        OutputTarget::Stdout => Box::new(stdout::StdoutSink),
        OutputTarget::Stderr => Box::new(stdout::StderrSink),
    }
}
