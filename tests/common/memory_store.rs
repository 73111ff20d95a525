//! In-memory table store with PostgREST semantics for the subset the
//! creator client uses.

#![allow(dead_code)]

use async_trait::async_trait;
use creator_catalog::store::{StoreError, TableMethod, TableRequest, TableStore};
use parking_lot::Mutex;
use serde_json::{Map, Value};

#[derive(Default)]
struct Table {
    rows: Vec<Map<String, Value>>,
    next_id: i64,
}

/// In-memory store that records every request it executes.
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
    requests: Mutex<Vec<TableRequest>>,
    failures: Mutex<Vec<(TableMethod, u16)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with rows; ids continue after the highest one.
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let store = Self::new();
        {
            let mut table = store.table.lock();
            for row in rows {
                let row = row.as_object().cloned().expect("row must be an object");
                let id = row.get("id").and_then(Value::as_i64).expect("row needs an id");
                table.next_id = table.next_id.max(id);
                table.rows.push(row);
            }
        }
        store
    }

    /// Make the next request with this method fail with `status`.
    pub fn fail_next(&self, method: TableMethod, status: u16) {
        self.failures.lock().push((method, status));
    }

    pub fn requests(&self) -> Vec<TableRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn row_count(&self) -> usize {
        self.table.lock().rows.len()
    }

    fn take_failure(&self, method: TableMethod) -> Option<u16> {
        let mut failures = self.failures.lock();
        let pos = failures.iter().position(|(m, _)| *m == method)?;
        Some(failures.remove(pos).1)
    }
}

fn matches(row: &Map<String, Value>, request: &TableRequest) -> bool {
    let Some(filter) = &request.filter else {
        return true;
    };
    match row.get(&filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(other) => other.to_string() == filter.value,
        None => false,
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn execute(&self, request: TableRequest) -> Result<Value, StoreError> {
        self.requests.lock().push(request.clone());

        if let Some(status) = self.take_failure(request.method) {
            return Err(StoreError::from_status(status, b""));
        }

        let mut table = self.table.lock();
        let affected: Vec<Map<String, Value>> = match request.method {
            TableMethod::Select => table
                .rows
                .iter()
                .filter(|row| matches(row, &request))
                .cloned()
                .collect(),
            TableMethod::Insert => {
                let rows = match request.body.clone() {
                    Some(Value::Array(rows)) => rows,
                    Some(row @ Value::Object(_)) => vec![row],
                    other => panic!("insert body must be object or array, got {:?}", other),
                };
                let mut inserted = Vec::new();
                for row in rows {
                    let mut row = row.as_object().cloned().expect("row must be an object");
                    assert!(!row.contains_key("id"), "client must not send id");
                    table.next_id += 1;
                    row.insert("id".to_string(), Value::from(table.next_id));
                    table.rows.push(row.clone());
                    inserted.push(row);
                }
                inserted
            }
            TableMethod::Update => {
                let patch = request
                    .body
                    .clone()
                    .and_then(|b| b.as_object().cloned())
                    .expect("update body must be an object");
                let mut updated = Vec::new();
                for row in table.rows.iter_mut().filter(|row| matches(row, &request)) {
                    for (k, v) in &patch {
                        row.insert(k.clone(), v.clone());
                    }
                    updated.push(row.clone());
                }
                updated
            }
            TableMethod::Delete => {
                let (removed, kept): (Vec<_>, Vec<_>) = table
                    .rows
                    .drain(..)
                    .partition(|row| matches(row, &request));
                table.rows = kept;
                removed
            }
        };

        if request.method == TableMethod::Select || request.return_representation {
            Ok(Value::Array(affected.into_iter().map(Value::Object).collect()))
        } else {
            Ok(Value::Null)
        }
    }
}
