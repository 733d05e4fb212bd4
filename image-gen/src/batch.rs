//! Sequential, best-effort batch over the job list

use std::path::Path;
use std::time::Duration;

use crate::client::ImageGenerator;
use crate::error::{GenerateError, Result};
use crate::jobs::GenerationJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Generated,
    /// Output file was already present; no request was made
    Skipped,
    Failed,
}

/// Job names grouped by what happened to them, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub generated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchReport {
    fn record(&mut self, job: &GenerationJob, outcome: JobOutcome) {
        let bucket = match outcome {
            JobOutcome::Generated => &mut self.generated,
            JobOutcome::Skipped => &mut self.skipped,
            JobOutcome::Failed => &mut self.failed,
        };
        bucket.push(job.name.to_string());
    }

    pub fn total(&self) -> usize {
        self.generated.len() + self.skipped.len() + self.failed.len()
    }
}

async fn generate_and_save<G: ImageGenerator>(
    generator: &G,
    job: &GenerationJob,
    path: &Path,
) -> Result<()> {
    let bytes = generator.generate(job).await?;
    tokio::fs::write(path, &bytes).await?;
    Ok(())
}

fn log_failure(job: &GenerationJob, err: &GenerateError) {
    log::error!("Error generating {}: {err}", job.name);
    if let Some(payload) = err.payload() {
        log::error!("{payload}");
    }
}

/// Run one job: skip if its file exists, otherwise generate and write it
pub async fn run_job<G: ImageGenerator>(
    generator: &G,
    job: &GenerationJob,
    out_dir: &Path,
) -> JobOutcome {
    let path = job.output_path(out_dir);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        log::info!("Skipping {}, already exists.", job.name);
        return JobOutcome::Skipped;
    }

    log::info!("Generating {}...", job.name);
    match generate_and_save(generator, job, &path).await {
        Ok(()) => {
            log::info!("Saved {}.png", job.name);
            JobOutcome::Generated
        }
        Err(err) => {
            log_failure(job, &err);
            JobOutcome::Failed
        }
    }
}

/// Run every job in order, pausing `delay` between consecutive jobs.
///
/// Failures are logged and recorded; they never stop the batch.
pub async fn run_batch<G: ImageGenerator>(
    generator: &G,
    jobs: &[GenerationJob],
    out_dir: &Path,
    delay: Duration,
) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, job) in jobs.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(delay).await;
        }
        let outcome = run_job(generator, job, out_dir).await;
        report.record(job, outcome);
    }
    log::info!(
        "All done! {} generated, {} skipped, {} failed",
        report.generated.len(),
        report.skipped.len(),
        report.failed.len()
    );
    report
}
