use std::path::PathBuf;

use clap::Parser;
use greetline_core::config;
use greetline_core::errors::Result;
use greetline_core::greeting;
use greetline_core::logger::{create_logger, Logger};
use greetline_core::output::{self, ByteSink, OutputTarget};

#[derive(Debug, Parser)]
#[command(
    name = "greetline",
    version,
    about = "Print a greeting line",
    long_about = "Print a single greeting line, reporting any write failure to the configured log."
)]
pub struct Cli {
    /// Config file to read instead of ~/.config/greetline/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Text to print (overrides config)
    #[arg(long, short)]
    pub message: Option<String>,

    /// Output target (overrides config)
    #[arg(long, short)]
    pub output: Option<OutputTarget>,
}

/// Print the greeting. Write failures are logged, never returned; only
/// an unusable `--config` file makes this fail.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let message = cli.message.unwrap_or(config.greeting);
    let target = cli.output.unwrap_or(config.output_target);

    let sink = output::create_sink(target);
    let logger = create_logger(config.log_target, &config.log_prefix, config.log_timestamps);

    print_greeting(sink, logger, &message)
}

/// A failed write has already been reported to `logger`, so it is not an error here.
fn print_greeting<S, L>(sink: S, logger: L, message: &str) -> Result<()>
where
    S: ByteSink,
    L: Logger,
{
    if let Err(e) = greeting::run(sink, logger, message) {
        tracing::debug!(error = %e, "greeting not written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use greetline_core::logger::TextLogger;
    use greetline_core::output::memory::MemorySink;
    use greetline_core::output::WriteReport;
    use std::io;

    struct FullSink;

    impl ByteSink for FullSink {
        fn write(&self, _bytes: &[u8]) -> WriteReport {
            WriteReport::failed(0, io::Error::new(io::ErrorKind::Other, "no space left"))
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_needed() {
        let cli = Cli::try_parse_from(["greetline"]).expect("bare invocation should parse");
        assert!(cli.config.is_none());
        assert!(cli.message.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from(["greetline", "--message", "Hi", "--output", "stderr"])
            .expect("overrides should parse");
        assert_eq!(cli.message.as_deref(), Some("Hi"));
        assert_eq!(cli.output, Some(OutputTarget::Stderr));
    }

    #[test]
    fn write_failure_is_logged_not_returned() {
        let logger = TextLogger::new(Vec::new());

        print_greeting(FullSink, &logger, "Good morning!").expect("write failures stay silent");

        assert_eq!(
            String::from_utf8(logger.into_inner()).unwrap(),
            "error occurred printing Good morning!\n"
        );
    }

    #[test]
    fn successful_greeting_logs_nothing() {
        let sink = MemorySink::new();
        let logger = TextLogger::new(Vec::new());

        print_greeting(&sink, &logger, "Good morning!").expect("memory sink never fails");

        assert_eq!(sink.calls(), vec![b"Good morning!\n".to_vec()]);
        assert!(logger.into_inner().is_empty());
    }
}
