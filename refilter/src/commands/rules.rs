// refilter/src/commands/rules.rs
//! Rules command implementation: report the currently active rule set.

use anyhow::Result;

use refilter_core::RegexFilter;

pub fn run(filter: &RegexFilter) -> Result<()> {
    let names = filter.rule_names();
    println!("{} rule(s) active", names.len());
    for name in &names {
        println!("  {name}");
    }
    Ok(())
}
