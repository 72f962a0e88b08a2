//! `fincalc version` -- print version, build info, and platform.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Version string, from the workspace version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier. Can be overridden via environment variable at build time.
const BUILD: &str = {
    match option_env!("FINCALC_BUILD") {
        Some(b) => b,
        None => "dev",
    }
};

/// Execute the `fincalc version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    if ctx.json {
        output_json(&serde_json::json!({
            "version": VERSION,
            "build": BUILD,
            "formulas": ctx.registry.len(),
            "os": os,
            "arch": arch,
        }));
    } else {
        println!("fincalc version {} ({}) {}/{}", VERSION, BUILD, os, arch);
    }

    Ok(())
}
