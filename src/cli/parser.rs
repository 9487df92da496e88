use clap::Parser;

/// Command-line interface definition for resume.
///
/// The report takes no input: any argument the parser does not understand
/// (including `--help`) is ignored and the report is printed as usual.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "resume",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a fixed employment history and the total years of professional experience",
    long_about = None
)]
pub struct Cli {
    /// Pin the current year instead of reading the system clock (tests only)
    #[arg(
        long = "year",
        value_name = "YYYY",
        hide = true,
        value_parser = clap::value_parser!(i32).range(1..=9999)
    )]
    pub year: Option<i32>,

    /// Simulate an unreadable system clock (tests only)
    #[arg(long = "no-clock", hide = true, conflicts_with = "year")]
    pub no_clock: bool,
}

impl Cli {
    /// Parse the process arguments, falling back to defaults on any error.
    pub fn parse_lenient() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }
}
