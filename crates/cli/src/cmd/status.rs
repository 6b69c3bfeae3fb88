//! Show active slots followed by the project list

use anyhow::Result;
use dirman_core::Layout;

pub fn run(layout: &Layout) -> Result<()> {
    super::active::run(layout)?;
    println!();
    super::ls::run(layout)
}
