use crate::models::{
    Impact, PrioritizedSuggestion, ScoreBand, ScoreReport, ScoreSummary, ScoredDocument,
};
use anyhow::Result;
use colored::*;
use std::fs::File;
use std::io::Write;

pub struct Reporter;

impl Reporter {
    pub fn generate_report(
        source: &str,
        documents: Vec<ScoredDocument>,
        recommendations: Vec<PrioritizedSuggestion>,
    ) -> ScoreReport {
        let summary = Self::calculate_summary(&documents);
        let timestamp = chrono::Utc::now().to_rfc3339();

        ScoreReport {
            source: source.to_string(),
            documents,
            summary,
            recommendations,
            timestamp,
        }
    }

    fn calculate_summary(documents: &[ScoredDocument]) -> ScoreSummary {
        let total = documents.len();
        let mut seo_sum: u32 = 0;
        let mut overall_sum: u32 = 0;
        let mut high_count = 0;
        let mut medium_count = 0;
        let mut low_count = 0;

        for doc in documents {
            seo_sum += doc.analysis.seo_score as u32;
            overall_sum += doc.analysis.overall_score as u32;
            match doc.analysis.band {
                ScoreBand::High => high_count += 1,
                ScoreBand::Medium => medium_count += 1,
                ScoreBand::Low => low_count += 1,
            }
        }

        ScoreSummary {
            total_documents: total,
            average_seo_score: if total > 0 {
                (seo_sum / total as u32) as u8
            } else {
                0
            },
            average_overall_score: if total > 0 {
                (overall_sum / total as u32) as u8
            } else {
                0
            },
            high_count,
            medium_count,
            low_count,
        }
    }

    fn colored_score(score: u8) -> ColoredString {
        let text = format!("{}/100", score);
        match ScoreBand::from_score(score) {
            ScoreBand::High => text.bright_green(),
            ScoreBand::Medium => text.yellow(),
            ScoreBand::Low => text.bright_red(),
        }
    }

    pub fn print_text_report(report: &ScoreReport) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Scorely - Content Score Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "Source".bright_white().bold(), report.source);
        println!("{}: {}", "Timestamp".bright_white().bold(), report.timestamp);
        println!();

        // Summary
        println!("{}", "Summary".bright_yellow().bold().underline());
        println!(
            "  Documents Scored:  {}",
            report.summary.total_documents.to_string().bright_green()
        );
        println!(
            "  Average SEO:       {}",
            Self::colored_score(report.summary.average_seo_score)
        );
        println!(
            "  Average Overall:   {}",
            Self::colored_score(report.summary.average_overall_score)
        );
        println!(
            "  Bands:             {} high / {} medium / {} low",
            report.summary.high_count.to_string().bright_green(),
            report.summary.medium_count.to_string().yellow(),
            if report.summary.low_count > 0 {
                report.summary.low_count.to_string().bright_red()
            } else {
                report.summary.low_count.to_string().bright_green()
            }
        );
        println!();

        // Per-document breakdown
        for doc in &report.documents {
            println!("  {} {}", "Source:".bright_white().bold(), doc.source);
            if !doc.title.is_empty() {
                println!("    Title:       {}", doc.title.bright_white());
            }
            println!(
                "    SEO Score:   {}   Readability: {}   Engagement: {}",
                Self::colored_score(doc.analysis.seo_score),
                Self::colored_score(doc.analysis.readability_score),
                Self::colored_score(doc.analysis.engagement_score),
            );
            println!(
                "    Overall:     {} ({})",
                Self::colored_score(doc.analysis.overall_score),
                doc.analysis.band
            );

            println!("    Factors:");
            for factor in &doc.analysis.seo_factors {
                println!(
                    "      {:<18} {:>2}/{}",
                    factor.factor, factor.points, factor.max_points
                );
            }

            if !doc.analysis.suggestions.is_empty() {
                println!("    Suggestions:");
                for suggestion in &doc.analysis.suggestions {
                    println!("      [{}] {}", "FIX ".yellow(), suggestion);
                }
            }
            if !doc.analysis.strengths.is_empty() {
                println!("    Strengths:");
                for strength in &doc.analysis.strengths {
                    println!("      [{}] {}", "GOOD".bright_green(), strength);
                }
            }
            println!();
        }

        // Batch recommendations
        if !report.recommendations.is_empty() {
            println!("{}", "Recommendations".bright_yellow().bold().underline());
            for rec in &report.recommendations {
                let impact_str = match rec.impact {
                    Impact::High => "HIGH".bright_red(),
                    Impact::Medium => "MED ".yellow(),
                    Impact::Low => "LOW ".bright_cyan(),
                };
                print!("  [{}] {}", impact_str, rec.message);
                if let Some(action) = &rec.action {
                    print!(" {} {}", "->".dimmed(), action.label.dimmed());
                }
                println!();
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn save_json_report(report: &ScoreReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
