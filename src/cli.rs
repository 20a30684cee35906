use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::api::{ApiClient, DEFAULT_HOST, DEFAULT_REGION};
use crate::labels::LabelPreset;
use crate::report::write_report;

/// Realm status - show server status, population and PvP zone timers
#[derive(Parser, Debug)]
#[command(name = "realmstatus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Region to query (us, eu, ...)
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,
    /// Comma separated list of realm slugs to display
    #[arg(long, default_value = "")]
    pub realms: String,
    /// Also show realm type, battlegroup and PvP zone timers
    #[arg(long)]
    pub verbose: bool,
    /// Output label set
    #[arg(long, value_enum, default_value_t = LabelPreset::Classic)]
    pub labels: LabelPreset,
    /// API host the region is prefixed to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
}

impl Cli {
    /// Fetch, decode and print. Nothing is printed if the fetch fails.
    pub fn run(self) -> Result<()> {
        debug!(region = %self.region, realms = %self.realms, "starting");
        let api = ApiClient::new(&self.region, &self.host)?;
        let response = api.fetch_status(&self.realms)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(
            &mut out,
            &response,
            self.labels.label_set(),
            self.verbose,
            &chrono::Local,
        )
        .context("Failed to write report")?;
        out.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}
