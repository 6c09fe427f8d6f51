use super::config::ReputeConfig;
use repute::engine::{format_journal, JournalQuery, LedgerEngine};
use repute::replay::{run_script, Script, StepResult};
use std::path::Path;
use tracing::info;

/// Replay a transaction script through a fresh ledger
///
/// The admin identity comes from the config file. Each step's outcome is
/// printed in order, followed by the final state digest. With `json`, every
/// step is one JSON object per line and the summary is the last line.
pub async fn execute(
    script_path: &Path,
    config: &ReputeConfig,
    json: bool,
    show_journal: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::load(script_path)?;
    info!(
        script = %script_path.display(),
        steps = script.steps.len(),
        admin = %config.ledger.admin,
        "replaying script"
    );

    let engine = LedgerEngine::new(config.admin_identity());
    let report = run_script(&engine, &script).await?;

    if json {
        for outcome in &report.outcomes {
            println!("{}", serde_json::to_string(outcome)?);
        }
        println!(
            "{}",
            serde_json::json!({
                "steps": report.outcomes.len(),
                "accepted": report.accepted(),
                "rejected": report.rejected(),
                "final_now": report.final_now,
                "digest": report.digest.to_string(),
            })
        );
    } else {
        for outcome in &report.outcomes {
            match &outcome.result {
                StepResult::Accepted { value, events } => {
                    let value = value.map(|v| format!(" -> {}", v)).unwrap_or_default();
                    println!(
                        "✅ [{}] t={} {:?} by {}{}",
                        outcome.step, outcome.now, outcome.op, outcome.caller, value
                    );
                    for event in events {
                        println!("     {}", event);
                    }
                }
                StepResult::Rejected { error, message } => {
                    println!(
                        "❌ [{}] t={} {:?} by {}: {} ({})",
                        outcome.step, outcome.now, outcome.op, outcome.caller, error, message
                    );
                }
            }
        }
        println!();
        println!(
            "Steps: {} ({} accepted, {} rejected)",
            report.outcomes.len(),
            report.accepted(),
            report.rejected()
        );
        println!("Final time: {}", report.final_now);
        println!("State digest: {}", report.digest);
    }

    if show_journal {
        let entries = engine.journal(&JournalQuery::all()).await;
        println!();
        print!("{}", format_journal(&entries));
    }

    Ok(())
}
