//! `socrange anomaly` - train the anomaly detector on the bundled seven-day
//! log window, then score the eighth day and print the verdicts.

use socrange_core::api::{
    bundled_prediction_rows, bundled_training_rows, AppContext, CliError,
};

use super::cli::AnomalyArgs;

pub async fn handle_anomaly(args: AnomalyArgs, ctx: &AppContext) -> Result<i32, CliError> {
    let services = ctx.build_services(ctx.cfg()).await?;
    let Some(detector) = services.detector.as_ref() else {
        return Err(CliError::Command(
            "anomaly detection is disabled in config ([anomaly] enabled = false)".into(),
        ));
    };

    if !args.predict_only {
        let training = bundled_training_rows();
        println!("Training on {} log rows...", training.len());
        let summary = detector
            .train(training)
            .await
            .map_err(|e| CliError::Command(format!("training failed: {e}")))?;
        match summary.training_anomalies {
            Some(n) => println!("Training complete ({n} anomalies in the training window)."),
            None => println!("Training complete."),
        }
    }

    let rows = bundled_prediction_rows();
    println!("Scoring {} rows...", rows.len());
    let verdicts = detector
        .predict(rows)
        .await
        .map_err(|e| CliError::Command(format!("prediction failed: {e}")))?;

    let mut anomalies = 0usize;
    for verdict in &verdicts {
        let marker = if verdict.is_anomaly() {
            anomalies += 1;
            "ANOMALY"
        } else {
            "normal "
        };
        let agent = rows
            .get(verdict.log_index)
            .map(|row| row.agent_name.as_str())
            .unwrap_or("?");
        println!(
            "  [{marker}] row {:>2}  score {:>7.4}  {agent}",
            verdict.log_index, verdict.anomaly_score
        );
    }
    println!("{anomalies} of {} rows flagged as anomalous.", verdicts.len());

    Ok(0)
}
