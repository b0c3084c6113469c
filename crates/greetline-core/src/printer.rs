use std::borrow::Cow;

use crate::errors::{GreetlineError, Result};
use crate::output::ByteSink;

/// Something that can print a single line of text.
pub trait LinePrinter {
    fn print_line(&self, line: &str) -> Result<()>;
}

impl<P: LinePrinter + ?Sized> LinePrinter for &P {
    fn print_line(&self, line: &str) -> Result<()> {
        (**self).print_line(line)
    }
}

impl<P: LinePrinter + ?Sized> LinePrinter for Box<P> {
    fn print_line(&self, line: &str) -> Result<()> {
        (**self).print_line(line)
    }
}

/// Adapts a plain function or closure into a [`LinePrinter`].
pub struct PrinterFn<F>(pub F);

impl<F> LinePrinter for PrinterFn<F>
where
    F: Fn(&str) -> Result<()>,
{
    fn print_line(&self, line: &str) -> Result<()> {
        (self.0)(line)
    }
}

/// Prints lines to a [`ByteSink`], terminating each with a newline.
pub struct LineWriter<S> {
    sink: S,
}

impl<S: ByteSink> LineWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: ByteSink> LinePrinter for LineWriter<S> {
    fn print_line(&self, line: &str) -> Result<()> {
        let line = terminate(line);
        let report = self.sink.write(line.as_bytes());

        // A negative count wins over any error the sink also returned.
        if report.written < 0 {
            return Err(GreetlineError::InvalidWriteResult);
        }
        if let Some(err) = report.error {
            return Err(GreetlineError::Sink(err));
        }

        tracing::debug!(bytes = report.written, "line written");
        Ok(())
    }
}

fn terminate(line: &str) -> Cow<'_, str> {
    if line.ends_with('\n') {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{line}\n"))
    }
}
