use csv::{ReaderBuilder, Trim};
use qwatch_shared_models::HistoryRecord;

/// Splits history text into records, using the first line as field names.
///
/// Nothing here fails: text with fewer than two lines yields no records, rows
/// with too few or too many fields yield partial records, and rows the reader
/// cannot decode are skipped with a warning.
pub fn parse_history(text: &str) -> Vec<HistoryRecord> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable history header");
            return Vec::new();
        }
    };

    reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(HistoryRecord::from_columns(headers.iter(), record.iter())),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable history row");
                None
            }
        })
        .collect()
}
