use crate::errors::Result;
use crate::logger::Logger;
use crate::printer::{LinePrinter, PrinterFn};

/// Wrap `printer` so that every failed line is reported to `logger`.
///
/// The returned printer forwards each line unchanged. When the inner printer
/// fails it logs `error occurred printing <line>` once and hands back the
/// original error; successful prints leave the logger untouched.
pub fn with_error_logging<P, L>(printer: P, logger: L) -> impl LinePrinter
where
    P: LinePrinter,
    L: Logger,
{
    PrinterFn(move |line: &str| -> Result<()> {
        let result = printer.print_line(line);
        if result.is_err() {
            logger.log(&format!("error occurred printing {line}"));
        }
        result
    })
}
