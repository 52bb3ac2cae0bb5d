use std::path::PathBuf;

use clap::Parser;
use vtabs_core::Position;

/// Command-line arguments accepted by the `vtabs` binary.
#[derive(Parser, Debug)]
#[command(
    name = "vtabs",
    version,
    about = "Render a vertical tab widget into an HTML page"
)]
pub(crate) struct CliArgs {
    /// Widget configuration (JSON)
    #[arg(value_name = "FILE")]
    pub(crate) config: PathBuf,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Host page to render into (default: an empty page with a #vtabs container)"
    )]
    pub(crate) page: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "VTABS_CONFIG",
        help = "Settings file (JSON)"
    )]
    pub(crate) settings: Option<PathBuf>,
    #[arg(long, value_name = "SIDE", help = "Override the tab list position")]
    pub(crate) position: Option<Position>,
    #[arg(short, long, help = "Render debug panels")]
    pub(crate) debug: bool,
    #[arg(long, value_name = "INDEX", help = "Select a tab after rendering")]
    pub(crate) select: Option<usize>,
    #[arg(
        long,
        value_name = "N",
        default_value_t = 0,
        help = "Advance the auto-cycle N steps after selection"
    )]
    pub(crate) cycle_steps: usize,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write the page here instead of stdout"
    )]
    pub(crate) output: Option<PathBuf>,
}
