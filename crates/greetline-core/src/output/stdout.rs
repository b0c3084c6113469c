use std::io::{self, Write};

use crate::output::{ByteSink, WriteReport};

pub struct StdoutSink;

impl ByteSink for StdoutSink {
    fn write(&self, bytes: &[u8]) -> WriteReport {
        write_fully(&mut io::stdout().lock(), bytes)
    }
}

pub struct StderrSink;

impl ByteSink for StderrSink {
    fn write(&self, bytes: &[u8]) -> WriteReport {
        write_fully(&mut io::stderr().lock(), bytes)
    }
}

/// Either every byte lands or an error is reported; a short write never
/// passes as success.
fn write_fully<W: Write>(writer: &mut W, bytes: &[u8]) -> WriteReport {
    writer.write_all(bytes).map(|()| bytes.len()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `chunk` bytes per call, failing with `Interrupted` first.
    struct Trickle {
        chunk: usize,
        interrupted: bool,
        out: Vec<u8>,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.chunk);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn short_writes_are_completed() {
        let mut writer = Trickle { chunk: 2, interrupted: false, out: Vec::new() };
        let report = write_fully(&mut writer, b"Good morning!\n");
        assert!(report.error.is_none());
        assert_eq!(report.written, 14);
        assert_eq!(writer.out, b"Good morning!\n");
    }

    #[test]
    fn writer_that_stops_accepting_reports_error() {
        let mut full: &mut [u8] = &mut [0u8; 4];
        let report = write_fully(&mut full, b"Good morning!\n");
        let err = report.error.expect("short buffer should fail");
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
