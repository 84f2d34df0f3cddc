//! Replays one catalog scenario to stdout without the TUI.
//!
//! Run with: cargo run -p socrange-core --example replay_demo

use std::sync::Arc;

use socrange_core::api::{catalog, populate, transcript_for, Emission, ReplayScheduler, SystemClock};

fn main() -> anyhow::Result<()> {
    let use_case = catalog::find("1")
        .ok_or_else(|| anyhow::anyhow!("use case 1 missing from bundled catalog"))?;

    println!("=== {} ===", use_case.title);
    for line in transcript_for(use_case) {
        println!("{line}");
    }
    println!();

    let data = populate(&use_case.soar_data_template_id, &use_case.soar_data_params);
    let mut scheduler = ReplayScheduler::new(0, Arc::new(SystemClock));
    scheduler.start(&data)?;

    while let Some(emission) = scheduler.tick() {
        match emission {
            Emission::Alert(alert) => {
                println!("[ALERT {}] {} ({})", alert.severity, alert.alert_type, alert.id)
            }
            Emission::Event(event) => {
                println!("[{} {}] {}", event.level.as_str(), event.source, event.message)
            }
        }
    }

    Ok(())
}
