//! `socrange show <id>` - one use case in detail, including the transcript
//! the simulation will play.

use socrange_core::api::{catalog, transcript_for, CliError};

use super::cli::ShowArgs;

pub fn handle_show(args: ShowArgs) -> Result<i32, CliError> {
    let Some(uc) = catalog::find(&args.id) else {
        return Err(CliError::Command(format!(
            "unknown use case id: {} (try `socrange list`)",
            args.id
        )));
    };

    println!("Use Case {}: {}", uc.id, uc.title);
    println!("  Category:         {}", uc.category);
    println!("  Severity:         {}", uc.severity);
    println!("  Detection method: {}", uc.detection_method);
    println!("  Trigger:          {}", uc.trigger_conditions);
    println!("  Description:      {}", uc.description);
    if !uc.mitre_attack.is_empty() {
        println!("  MITRE ATT&CK:     {}", uc.mitre_attack.join(", "));
    }
    if !uc.log_sources.is_empty() {
        println!("  Log sources:      {}", uc.log_sources.join(", "));
    }
    if !uc.playbooks.is_empty() {
        println!("  Playbooks:        {}", uc.playbooks.join(", "));
    }
    println!("  SOAR template:    {}", uc.soar_data_template_id);

    println!("\nSimulation transcript:");
    for line in transcript_for(uc) {
        println!("  {line}");
    }

    Ok(0)
}
