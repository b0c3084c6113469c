use crate::decorator::with_error_logging;
use crate::errors::Result;
use crate::logger::Logger;
use crate::output::ByteSink;
use crate::printer::{LinePrinter, LineWriter};

/// Print `message` once through a failure-logging [`LineWriter`] over `sink`.
pub fn run<S, L>(sink: S, logger: L, message: &str) -> Result<()>
where
    S: ByteSink,
    L: Logger,
{
    let printer = with_error_logging(LineWriter::new(sink), logger);
    printer.print_line(message)
}
