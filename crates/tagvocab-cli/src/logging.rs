use log::LevelFilter;
use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level: `base`, raised one step per `-v`.
    pub fn level(
        &self,
        base: LevelFilter,
    ) -> LevelFilter {
        LevelFilter::iter()
            .skip(base as usize)
            .nth(self.verbose as usize)
            .unwrap_or(LevelFilter::Trace)
    }

    /// Initialize `stderrlog` for the `tagvocab` crates.
    pub fn setup_logging(
        &self,
        base: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(match self.level(base) {
                LevelFilter::Off => stderrlog::LogLevelNum::Off,
                LevelFilter::Error => stderrlog::LogLevelNum::Error,
                LevelFilter::Warn => stderrlog::LogLevelNum::Warn,
                LevelFilter::Info => stderrlog::LogLevelNum::Info,
                LevelFilter::Debug => stderrlog::LogLevelNum::Debug,
                LevelFilter::Trace => stderrlog::LogLevelNum::Trace,
            })
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
