//! Simulation report generation.

use super::table::FrequencyTable;
use serde::Serialize;
use std::time::Duration;

/// Results of one simulation batch.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u64,
    pub num_dice: u32,
    pub seed: u64,
    pub parallel: bool,
    pub table: FrequencyTable,
    pub elapsed: Duration,
}

/// One row of the score distribution.
#[derive(Debug, Clone, Serialize)]
struct ScoreEntry {
    score: u32,
    count: u64,
    proportion: f64,
}

impl SimReport {
    /// Share of the requested runs that ended with `score`.
    pub fn proportion(&self, score: u32) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.table.count(score) as f64 / self.num_runs as f64
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn header_line(&self) -> String {
        format!(
            "Number of simulations was {} using {} dice.",
            self.num_runs, self.num_dice
        )
    }

    /// One line per distinct score, ascending.
    pub fn score_lines(&self) -> Vec<String> {
        self.table
            .iter()
            .map(|(score, count)| {
                format!(
                    "Total {} occurs {:.4} occurred {} times.",
                    score,
                    self.proportion(score),
                    count
                )
            })
            .collect()
    }

    pub fn footer_line(&self) -> String {
        format!(
            "Total simulation took {:.3} seconds.",
            self.elapsed_seconds()
        )
    }

    /// Generate the text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str(&self.header_line());
        report.push('\n');
        for line in self.score_lines() {
            report.push_str(&line);
            report.push('\n');
        }
        report.push_str(&self.footer_line());
        report
    }

    /// Summary statistics block.
    pub fn summary_text(&self) -> String {
        let mut report = String::new();

        report.push_str("── SUMMARY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Seed:          {}\n", self.seed));
        report.push_str(&format!(
            "  Mode:          {}\n",
            if self.parallel { "parallel" } else { "sequential" }
        ));
        report.push_str(&format!("  Mean Score:    {:.3}\n", self.table.mean()));
        report.push_str(&format!(
            "  Min Score:     {}\n",
            self.table.min_score().unwrap_or(0)
        ));
        report.push_str(&format!(
            "  Median Score:  {}\n",
            self.table.median().unwrap_or(0)
        ));
        report.push_str(&format!(
            "  Max Score:     {}\n",
            self.table.max_score().unwrap_or(0)
        ));
        report.push_str(&format!(
            "  Zero Scores:   {:.1}%\n",
            self.proportion(0) * 100.0
        ));
        let games_per_sec = if self.elapsed_seconds() > 0.0 {
            self.num_runs as f64 / self.elapsed_seconds()
        } else {
            0.0
        };
        report.push_str(&format!("  Games/sec:     {:.0}\n", games_per_sec));

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn entries(&self) -> Vec<ScoreEntry> {
        self.table
            .iter()
            .map(|(score, count)| ScoreEntry {
                score,
                count,
                proportion: self.proportion(score),
            })
            .collect()
    }
}

impl Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 10)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("num_dice", &self.num_dice)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("parallel", &self.parallel)?;
        state.serialize_field("elapsed_seconds", &self.elapsed_seconds())?;
        state.serialize_field("mean_score", &self.table.mean())?;
        state.serialize_field("min_score", &self.table.min_score())?;
        state.serialize_field("median_score", &self.table.median())?;
        state.serialize_field("max_score", &self.table.max_score())?;
        state.serialize_field("scores", &self.entries())?;
        state.end()
    }
}
