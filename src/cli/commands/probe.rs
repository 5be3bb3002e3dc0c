//! Probe command implementation.
//!
//! `benchenv-probe` prints which optional packages the configured
//! interpreter can import, as a table or as JSON.

use crate::config::Settings;
use crate::error::Result;
use crate::probe::{Availability, PackageReport};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    settings: Settings,
    json: bool,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    /// Report rows for an already computed snapshot.
    pub fn render(&self, availability: &Availability) -> Result<String> {
        let report = availability.report();
        if self.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            return Ok(json);
        }
        Ok(render_table(&report))
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let availability = Availability::from_environment(&self.settings.probe_config());
        let output = self.render(&availability)?;

        if !self.json {
            ui.show_header(&format!("Package availability ({})", self.settings.python));
        }
        ui.message(&output);
        Ok(CommandResult::success())
    }
}

fn render_table(report: &[PackageReport]) -> String {
    let mut table = Table::new(&["Package", "Available", "Version"]);
    for row in report {
        let available = if row.available { "✓" } else { "✗" };
        let version = row.version.as_deref().unwrap_or("-");
        table.add_row(&[row.package, available, version]);
    }
    table.render()
}
