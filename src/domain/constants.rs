//! Business thresholds used by the processing rules

/// Orders with an amount strictly above this value get high priority.
pub const PRIORITY_THRESHOLD: f64 = 200.0;

/// Type A orders strictly above this amount get a note row in their export.
pub const HIGH_VALUE_ORDER_THRESHOLD: f64 = 150.0;

/// Type B orders must stay strictly below this amount to be processed.
pub const PROCESSED_ORDER_THRESHOLD: f64 = 100.0;

/// Minimum verification payload for a Type B order to be processed.
pub const VERIFICATION_DATA_THRESHOLD: f64 = 50.0;

/// Column headers of the Type A export.
pub const EXPORT_COLUMNS: [&str; 6] = ["ID", "Type", "Amount", "IsSpecial", "Status", "Priority"];

/// Label placed in the fifth column of the high-value note row.
pub const HIGH_VALUE_NOTE_LABEL: &str = "Note";

/// Text placed in the sixth column of the high-value note row.
pub const HIGH_VALUE_NOTE_TEXT: &str = "High value order";
