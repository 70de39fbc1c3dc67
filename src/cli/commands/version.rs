//! Version command implementation

use crate::cli::Output;
use crate::hooks::HookKind;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};
use anyhow::Result;
use clap::ValueEnum;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.header("🛡️ toolguard Version Information");

    output.status_indicator("VERSION", &format!("{} v{}", PKG_NAME, VERSION), true);
    output.blank_line();

    output.category("About");
    output.key_value("Description:", PKG_DESCRIPTION, false);

    output.category("Hooks");
    for kind in HookKind::value_variants() {
        output.key_value(&format!("{}:", kind.name()), kind.event(), false);
    }

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value("Profile:", if cfg!(debug_assertions) { "debug" } else { "release" }, false);

    output.blank_line();
    output.success("💡 Run 'toolguard --help' for usage information");

    Ok(())
}
