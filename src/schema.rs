//! # Column Schema and Row Assembly
//!
//! Rows are assembled in RAM as an ordered set of `{key, value}` columns.
//! Key order is the public contract: it is the column order of every CSV
//! line the logger ever emits, it survives remounts via the persisted
//! heading line, and it never changes retroactively: a key logged for the
//! first time mid-session appends a new column on the right.
//!
//! ## Cleaning
//!
//! Every string headed for persistent storage is scrubbed of byte sequences
//! that would corrupt the container. The header blob wraps all logger
//! output in an HTML comment, so the three-byte sequence `-->` must never
//! reach the medium; tabs collide with the host-side copy-to-clipboard
//! transform. Delimited fields (keys and values) additionally lose commas
//! and newlines. Cleaning substitutes [`REPLACEMENT_BYTE`] one-for-one: it
//! never changes the length of its input, and cleaning cleaned text is a
//! no-op.
//!
//! ## Timestamp Column
//!
//! When a time unit is selected, `end_row` synthesises a `Time (<unit>)`
//! column from the monotonic millisecond clock. Non-millisecond units carry
//! two fractional digits. The arithmetic deliberately mirrors the device
//! firmware this format originated on, including its quirks: the `Days`
//! unit labels its column `"hours"`, and values past a billion are
//! formatted by splitting into billions and zero-padded units.

use smallvec::SmallVec;

use crate::config::REPLACEMENT_BYTE;

/// Granularity of the synthesised timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// No timestamp column is added.
    #[default]
    None,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    /// Note: renders with the `hours` column label; see module docs.
    Days,
}

impl TimeUnit {
    /// Divisor applied to the millisecond clock. For fractional units this
    /// yields hundredths of the unit, split into integer part and fraction
    /// at render time.
    fn divisor(self) -> u64 {
        match self {
            TimeUnit::None | TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 10,
            TimeUnit::Minutes => 600,
            TimeUnit::Hours => 36_000,
            TimeUnit::Days => 864_000,
        }
    }

    fn has_fraction(self) -> bool {
        !matches!(self, TimeUnit::None | TimeUnit::Milliseconds)
    }

    /// Column heading for this unit, `None` when timestamps are disabled.
    pub(crate) fn column_name(self) -> Option<String> {
        let label = match self {
            TimeUnit::None => return None,
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            // Observed firmware behavior: the days unit reuses the hours
            // label. Preserved for container compatibility.
            TimeUnit::Days => "hours",
        };
        Some(format!("Time ({label})"))
    }
}

/// Renders the timestamp cell for a clock reading of `now_millis`.
pub(crate) fn render_timestamp(now_millis: u64, unit: TimeUnit) -> String {
    let t = now_millis / unit.divisor();
    let mut billions = t / 1_000_000_000;
    let mut units = t % 1_000_000_000;
    let mut fraction = 0;

    if unit.has_fraction() {
        fraction = units % 100;
        units /= 100;
        billions /= 100;
    }

    let mut out = String::new();
    if billions > 0 {
        out.push_str(&billions.to_string());
        out.push_str(&format!("{units:09}"));
    } else {
        out.push_str(&units.to_string());
    }
    if unit.has_fraction() {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}

/// Cleans a delimited field (key or value): `-->`, tabs, commas, newlines.
pub(crate) fn clean_field(s: &str) -> String {
    clean(s, true)
}

/// Cleans free-form text: only `-->` and tabs; separators survive.
pub(crate) fn clean_text(s: &str) -> String {
    clean(s, false)
}

fn clean(s: &str, strip_separators: bool) -> String {
    let src = s.as_bytes();
    let mut out = src.to_vec();

    for i in 0..src.len() {
        if i + 2 < src.len() && src[i] == b'-' && src[i + 1] == b'-' && src[i + 2] == b'>' {
            out[i] = REPLACEMENT_BYTE;
            out[i + 1] = REPLACEMENT_BYTE;
            out[i + 2] = REPLACEMENT_BYTE;
        }
        if src[i] == b'\t' || (strip_separators && (src[i] == b',' || src[i] == b'\n')) {
            out[i] = REPLACEMENT_BYTE;
        }
    }

    // INVARIANT: substitutions are ASCII-for-ASCII, so the bytes stay valid UTF-8.
    String::from_utf8(out).expect("ASCII substitution preserves UTF-8")
}

#[derive(Debug, Clone)]
pub(crate) struct Column {
    pub key: String,
    pub value: String,
}

/// The ordered, duplicate-free column list plus the pending row's values.
#[derive(Debug, Default)]
pub(crate) struct ColumnSet {
    columns: SmallVec<[Column; 8]>,
    changed: bool,
}

impl ColumnSet {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether a heading was added since the last persisted header line.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    /// Drops all columns and pending state. Used by reformat.
    pub fn reset(&mut self) {
        self.columns.clear();
        self.changed = false;
    }

    /// Empties every pending value, keeping the column list. Used by
    /// `begin_row`.
    pub fn reset_values(&mut self) {
        for column in &mut self.columns {
            column.value.clear();
        }
    }

    /// Sets the value of `key`'s column, appending a new column (and
    /// marking the schema changed) when the key is unknown.
    pub fn put(&mut self, key: String, value: String) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.value = value;
            return;
        }
        self.columns.push(Column { key, value });
        self.changed = true;
    }

    /// Adds `key` with an empty value if it is not already a column.
    pub fn ensure(&mut self, key: String) {
        if self.columns.iter().any(|c| c.key == key) {
            return;
        }
        self.columns.push(Column {
            key,
            value: String::new(),
        });
        self.changed = true;
    }

    /// Replaces the column list with keys recovered from the medium.
    pub fn load_keys(&mut self, keys: impl IntoIterator<Item = String>) {
        self.columns = keys
            .into_iter()
            .map(|key| Column {
                key,
                value: String::new(),
            })
            .collect();
        self.changed = false;
    }

    /// The complete CSV header line, `k1,k2,…,kN\n`.
    pub fn render_header(&self) -> String {
        let mut line = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&column.key);
        }
        line.push('\n');
        line
    }

    /// The CSV row for the pending values, or `None` when every value is
    /// empty (empty rows are not persisted).
    pub fn render_row(&self) -> Option<String> {
        let mut line = String::new();
        let mut empty = true;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            if !column.value.is_empty() {
                empty = false;
            }
            line.push_str(&column.value);
        }
        line.push('\n');

        (!empty).then_some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_preserves_length_and_is_idempotent() {
        let dirty = "a-->b\tc\nd,e";
        let field = clean_field(dirty);
        let text = clean_text(dirty);

        assert_eq!(field.len(), dirty.len());
        assert_eq!(text.len(), dirty.len());
        assert_eq!(clean_field(&field), field);
        assert_eq!(clean_text(&text), text);
    }

    #[test]
    fn field_cleaning_strips_separators() {
        assert_eq!(clean_field("a-->b\tc\nd,e"), "a###b#c#d#e");
    }

    #[test]
    fn text_cleaning_keeps_separators() {
        assert_eq!(clean_text("a-->b\tc\n"), "a###b#c\n");
    }

    #[test]
    fn comment_closer_detection_reads_the_original_bytes() {
        // The second arrow candidate only exists in the replaced output,
        // not the input; it must not be rewritten.
        assert_eq!(clean_text("-->->"), "###->");
        assert_eq!(clean_text("--->"), "-###");
    }

    #[test]
    fn timestamp_milliseconds_renders_integer() {
        assert_eq!(render_timestamp(12_340, TimeUnit::Milliseconds), "12340");
    }

    #[test]
    fn timestamp_seconds_carries_two_fraction_digits() {
        assert_eq!(render_timestamp(12_340, TimeUnit::Seconds), "12.34");
        assert_eq!(render_timestamp(5_000, TimeUnit::Seconds), "5.00");
        assert_eq!(render_timestamp(90_000, TimeUnit::Minutes), "1.50");
        assert_eq!(render_timestamp(5_400_000, TimeUnit::Hours), "1.50");
    }

    #[test]
    fn timestamp_past_a_billion_pads_units() {
        // 1_234_567_890_123 ms renders digit-for-digit despite the split.
        assert_eq!(
            render_timestamp(1_234_567_890_123, TimeUnit::Milliseconds),
            "1234567890123"
        );
    }

    #[test]
    fn days_unit_reuses_hours_label() {
        assert_eq!(TimeUnit::Days.column_name().unwrap(), "Time (hours)");
        assert_eq!(TimeUnit::None.column_name(), None);
    }

    #[test]
    fn columns_preserve_insertion_order() {
        let mut set = ColumnSet::default();
        set.put("x".into(), "1".into());
        set.put("y".into(), "2".into());
        set.put("x".into(), "3".into());

        assert_eq!(set.len(), 2);
        assert_eq!(set.render_header(), "x,y\n");
        assert_eq!(set.render_row().unwrap(), "3,2\n");
    }

    #[test]
    fn unset_columns_render_empty_cells() {
        let mut set = ColumnSet::default();
        set.put("x".into(), "1".into());
        set.put("y".into(), "2".into());
        set.reset_values();
        set.put("y".into(), "9".into());

        assert_eq!(set.render_row().unwrap(), ",9\n");
    }

    #[test]
    fn all_empty_row_is_not_rendered() {
        let mut set = ColumnSet::default();
        set.ensure("x".into());
        assert_eq!(set.render_row(), None);
    }

    #[test]
    fn loaded_keys_do_not_mark_schema_changed() {
        let mut set = ColumnSet::default();
        set.load_keys(vec!["a".to_string(), "b".to_string()]);

        assert!(!set.changed());
        assert_eq!(set.render_header(), "a,b\n");
    }
}
