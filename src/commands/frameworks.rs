//! Implements `ezcp frameworks`: list the registered descriptors.

use anyhow::Result;
use console::style;

use crate::framework::FrameworkRegistry;

/// Execute the frameworks command
pub fn execute_frameworks() -> Result<()> {
    println!("{}", style("Supported frameworks:").bold());
    for descriptor in FrameworkRegistry::global().descriptors() {
        println!(
            "  {} {:<10} {:<8} {}",
            descriptor.icon(),
            style(descriptor.display_name()).cyan(),
            descriptor.name(),
            style(descriptor.framework().route()).dim()
        );
    }
    Ok(())
}
