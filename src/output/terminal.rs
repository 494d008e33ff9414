// Colored terminal output for topics, rankings, and sentiment reports.
//
// This module handles all terminal-specific formatting: colors, bars,
// aligned columns. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analytics::frequency::TermCount;
use crate::analytics::sentiment::DocumentSentiment;
use crate::analytics::trends::TrendPoint;
use crate::lda::model::TopicSummary;

/// Display fitted topics as weight bars with their top terms.
pub fn display_topics(summaries: &[TopicSummary]) {
    println!(
        "\n{}",
        format!("=== Topics ({} discovered) ===", summaries.len()).bold()
    );
    println!();

    let bar_width: usize = 20;

    for summary in summaries {
        let filled = (summary.weight * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if summary.weight >= 0.25 {
            bar.bright_green()
        } else if summary.weight >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  Topic {:>2} {} {:.3}",
            summary.topic, colored_bar, summary.weight
        );

        let terms: Vec<String> = summary
            .terms
            .iter()
            .map(|(term, beta)| format!("{term} ({beta:.3})"))
            .collect();
        println!("      {}", terms.join(", ").dimmed());
        println!();
    }
}

/// Display a frequency ranking as an aligned table.
pub fn display_frequencies(ranked: &[TermCount], limit: usize) {
    println!(
        "\n{}",
        format!("=== Term Frequencies (top {limit}) ===").bold()
    );
    println!();
    println!("  {:>4}  {:<24} {:>8}", "Rank".dimmed(), "Term".dimmed(), "Count".dimmed());
    println!("  {}", "-".repeat(40).dimmed());
    for (i, tc) in ranked.iter().take(limit).enumerate() {
        println!("  {:>4}  {:<24} {:>8}", i + 1, tc.term, tc.count);
    }
}

/// Display per-document signed sentiment, positive scores green and
/// negative red.
pub fn display_sentiment(scores: &[DocumentSentiment]) {
    println!("\n{}", "=== Document Sentiment ===".bold());
    println!();
    println!(
        "  {:<32} {:>5} {:>5} {:>7}",
        "Document".dimmed(),
        "Pos".dimmed(),
        "Neg".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());
    for s in scores {
        let score = if s.score > 0 {
            format!("{:+}", s.score).bright_green()
        } else if s.score < 0 {
            format!("{:+}", s.score).bright_red()
        } else {
            s.score.to_string().dimmed()
        };
        println!(
            "  {:<32} {:>5} {:>5} {:>7}",
            s.doc_id, s.positive, s.negative, score
        );
    }
}

/// Display watch-term counts in date order.
pub fn display_trends(points: &[TrendPoint]) {
    if points.is_empty() {
        println!("No dated documents matched the watch list.");
        return;
    }
    println!("\n{}", "=== Watch-Term Trends ===".bold());
    println!();
    println!(
        "  {:<12} {:<24} {:<18} {:>6}",
        "Date".dimmed(),
        "Document".dimmed(),
        "Term".dimmed(),
        "Count".dimmed(),
    );
    println!("  {}", "-".repeat(62).dimmed());
    for p in points {
        println!(
            "  {:<12} {:<24} {:<18} {:>6}",
            p.date.to_string(),
            p.doc_id,
            p.term,
            p.count
        );
    }
}
