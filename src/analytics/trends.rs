// Watch-term tracking across time.
//
// Given a caller-supplied id -> publication date map and a watch list of
// terms, emit (date, term, count) points in date order. Documents without
// a date are skipped silently, since a corpus mixing dated statements with
// undated appendices is normal, not an error.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::corpus::matrix::DocTermMatrix;

/// One observation of a watch term in a dated document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub doc_id: String,
    pub term: String,
    pub count: u64,
}

/// Count every watch term in every dated document.
///
/// Points are sorted by date ascending; within one date they keep document
/// row order, then watch-list order. Watch terms never seen in the corpus
/// produce zero-count points for each dated document, so a flat line is
/// distinguishable from a missing term.
pub fn watch_term_series(
    dtm: &DocTermMatrix,
    dates: &HashMap<String, NaiveDate>,
    watch_terms: &[String],
) -> Vec<TrendPoint> {
    let mut points = Vec::new();
    let mut undated = 0usize;

    for (d, id) in dtm.doc_ids().iter().enumerate() {
        let Some(&date) = dates.get(id) else {
            undated += 1;
            continue;
        };
        let row = dtm.row(d);
        for term in watch_terms {
            let count = dtm
                .vocab
                .get(term)
                .and_then(|w| row.iter().find(|&&(t, _)| t == w))
                .map(|&(_, c)| u64::from(c))
                .unwrap_or(0);
            points.push(TrendPoint {
                date,
                doc_id: id.clone(),
                term: term.clone(),
                count,
            });
        }
    }

    // Stable sort preserves row order, then watch-list order, within a date.
    points.sort_by_key(|p| p.date);

    debug!(
        points = points.len(),
        undated,
        watch_terms = watch_terms.len(),
        "Built watch-term series"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::Document;
    use crate::corpus::tokenize::StopWords;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dtm() -> DocTermMatrix {
        let docs = vec![
            Document::new("mar", "inflation inflation growth"),
            Document::new("jun", "inflation easing"),
            Document::new("undated", "inflation"),
        ];
        DocTermMatrix::build(&docs, &StopWords::default()).unwrap()
    }

    #[test]
    fn points_sorted_by_date_ascending() {
        let dtm = dtm();
        // Insertion order deliberately reversed relative to time.
        let dates = HashMap::from([
            ("jun".to_string(), date(2024, 6, 12)),
            ("mar".to_string(), date(2024, 3, 20)),
        ]);
        let watch = vec!["inflation".to_string()];
        let series = watch_term_series(&dtm, &dates, &watch);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].doc_id, "mar");
        assert_eq!(series[0].count, 2);
        assert_eq!(series[1].doc_id, "jun");
        assert_eq!(series[1].count, 1);
    }

    #[test]
    fn undated_documents_are_skipped() {
        let dtm = dtm();
        let dates = HashMap::from([("mar".to_string(), date(2024, 3, 20))]);
        let watch = vec!["inflation".to_string()];
        let series = watch_term_series(&dtm, &dates, &watch);
        assert_eq!(series.len(), 1);
        assert!(series.iter().all(|p| p.doc_id != "undated"));
    }

    #[test]
    fn absent_watch_terms_report_zero_counts() {
        let dtm = dtm();
        let dates = HashMap::from([("mar".to_string(), date(2024, 3, 20))]);
        let watch = vec!["deflation".to_string()];
        let series = watch_term_series(&dtm, &dates, &watch);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].count, 0);
    }

    #[test]
    fn same_date_keeps_row_then_watch_order() {
        let dtm = dtm();
        let same = date(2024, 1, 1);
        let dates = HashMap::from([("mar".to_string(), same), ("jun".to_string(), same)]);
        let watch = vec!["inflation".to_string(), "growth".to_string()];
        let series = watch_term_series(&dtm, &dates, &watch);
        let order: Vec<(&str, &str)> = series
            .iter()
            .map(|p| (p.doc_id.as_str(), p.term.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("mar", "inflation"),
                ("mar", "growth"),
                ("jun", "inflation"),
                ("jun", "growth"),
            ]
        );
    }
}
