//! Query execution plumbing
//!
//! Couples a caller's query context (row budget, equality quals) with the row
//! sink rows are streamed into. List hydrates stop early as soon as the sink
//! reports it is done, whether the budget ran out or the caller cancelled.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Upstream page-size cap, matching the limit the original plugin applies.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// One streamed row: ordered column/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<(String, Value)>);

impl Row {
    pub fn new(cells: Vec<(String, Value)>) -> Self {
        Self(cells)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == column).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serializes as a JSON object in column order.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// What the caller wants from a query: an optional row budget and equality
/// quals keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub limit: Option<u64>,
    pub quals: HashMap<String, Value>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_qual(mut self, column: &str, value: Value) -> Self {
        self.quals.insert(column.to_string(), value);
        self
    }

    pub fn qual(&self, column: &str) -> Option<&Value> {
        self.quals.get(column)
    }

    /// String qual value; empty strings count as unset, like the original's
    /// `EqualsQualString` checks.
    pub fn qual_str(&self, column: &str) -> Option<&str> {
        self.quals
            .get(column)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Whether the sink wants more rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    Continue,
    Done,
}

/// Caller-supplied destination for streamed rows.
pub trait RowSink {
    fn push(&mut self, row: Row) -> SinkState;
}

/// Adapts a closure into a [`RowSink`].
pub struct FnSink<F: FnMut(Row) -> SinkState>(pub F);

impl<F: FnMut(Row) -> SinkState> RowSink for FnSink<F> {
    fn push(&mut self, row: Row) -> SinkState {
        (self.0)(row)
    }
}

/// Per-query state handed to the executor: context, sink, remaining budget,
/// and the cancellation flag.
pub struct QueryData {
    ctx: QueryContext,
    sink: Box<dyn RowSink>,
    remaining: Option<u64>,
    cancelled: Arc<AtomicBool>,
}

impl QueryData {
    pub fn new(ctx: QueryContext, sink: Box<dyn RowSink>) -> Self {
        let remaining = ctx.limit;
        Self {
            ctx,
            sink,
            remaining,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn ctx(&self) -> &QueryContext {
        &self.ctx
    }

    /// Flag a caller can set from another task to stop the stream.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Rows left in the budget; `None` means unbounded.
    pub fn rows_remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Page size to request upstream: the budget capped at [`MAX_PAGE_SIZE`].
    pub fn page_size(&self) -> u64 {
        self.remaining.map_or(MAX_PAGE_SIZE, |r| r.min(MAX_PAGE_SIZE))
    }

    /// Stream one row. Returns `Done` once the budget is exhausted or the
    /// caller cancelled; a `Done` before pushing means the row was dropped.
    pub fn stream_row(&mut self, row: Row) -> SinkState {
        if self.cancelled.load(Ordering::Relaxed) {
            return SinkState::Done;
        }
        if self.remaining == Some(0) {
            return SinkState::Done;
        }
        let state = self.sink.push(row);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                return SinkState::Done;
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn row(id: u64) -> Row {
        Row::new(vec![("id".to_string(), json!(id))])
    }

    fn counting_data(limit: Option<u64>) -> (QueryData, Rc<RefCell<Vec<Row>>>) {
        let rows = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&rows);
        let mut ctx = QueryContext::new();
        ctx.limit = limit;
        let data = QueryData::new(
            ctx,
            Box::new(FnSink(move |r| {
                captured.borrow_mut().push(r);
                SinkState::Continue
            })),
        );
        (data, rows)
    }

    #[test]
    fn test_budget_stops_stream() {
        let (mut data, rows) = counting_data(Some(2));
        assert_eq!(data.stream_row(row(1)), SinkState::Continue);
        assert_eq!(data.stream_row(row(2)), SinkState::Done);
        // Third row is dropped, budget already spent
        assert_eq!(data.stream_row(row(3)), SinkState::Done);
        assert_eq!(rows.borrow().len(), 2);
    }

    #[test]
    fn test_zero_budget_streams_nothing() {
        let (mut data, rows) = counting_data(Some(0));
        assert_eq!(data.rows_remaining(), Some(0));
        assert_eq!(data.stream_row(row(1)), SinkState::Done);
        assert!(rows.borrow().is_empty());
    }

    #[test]
    fn test_unbounded_budget() {
        let (mut data, rows) = counting_data(None);
        for i in 0..100 {
            assert_eq!(data.stream_row(row(i)), SinkState::Continue);
        }
        assert_eq!(rows.borrow().len(), 100);
        assert_eq!(data.rows_remaining(), None);
    }

    #[test]
    fn test_cancellation_drops_rows() {
        let (mut data, rows) = counting_data(None);
        assert_eq!(data.stream_row(row(1)), SinkState::Continue);
        data.cancel_flag().store(true, Ordering::Relaxed);
        assert_eq!(data.stream_row(row(2)), SinkState::Done);
        assert_eq!(rows.borrow().len(), 1);
    }

    #[test]
    fn test_sink_can_end_the_stream() {
        let mut data = QueryData::new(
            QueryContext::new(),
            Box::new(FnSink(|_| SinkState::Done)),
        );
        assert_eq!(data.stream_row(row(1)), SinkState::Done);
    }

    #[test]
    fn test_page_size_caps_at_limit() {
        let (data, _) = counting_data(Some(25));
        assert_eq!(data.page_size(), 25);
        let (data, _) = counting_data(Some(100_000));
        assert_eq!(data.page_size(), MAX_PAGE_SIZE);
        let (data, _) = counting_data(None);
        assert_eq!(data.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_qual_str_ignores_empty() {
        let ctx = QueryContext::new()
            .with_qual("namespace", json!("default"))
            .with_qual("name", json!(""));
        assert_eq!(ctx.qual_str("namespace"), Some("default"));
        assert_eq!(ctx.qual_str("name"), None);
        assert_eq!(ctx.qual_str("missing"), None);
    }

    #[test]
    fn test_row_serializes_in_column_order() {
        let row = Row::new(vec![
            ("zeta".to_string(), json!(1)),
            ("alpha".to_string(), json!(2)),
        ]);
        let text = serde_json::to_string(&row).unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":2}"#);
    }
}
