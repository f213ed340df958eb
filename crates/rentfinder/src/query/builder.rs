use std::future::{Future, IntoFuture};
use std::pin::Pin;

use serde_json::Value;

use rentfinder_core::record::{Filter, OrderBy, Record};

use crate::store::Store;

/// What a query does once it executes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Select,
    Update(Record),
    Delete,
}

impl Action {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Action::Select => "select",
            Action::Update(_) => "update",
            Action::Delete => "delete",
        }
    }
}

/// Accumulated query state, consumed by [`Store::execute`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Query {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub action: Action,
}

impl Query {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
            action: Action::Select,
        }
    }
}

/// A fresh or select-pending query.
///
/// Awaiting the builder directly returns every matching row in table order.
#[derive(Debug)]
#[must_use = "queries do nothing until awaited or finished with a terminal call"]
pub struct QueryBuilder {
    store: Store,
    query: Query,
}

impl QueryBuilder {
    pub(crate) fn new(store: Store, table: &str) -> Self {
        Self {
            store,
            query: Query::new(table),
        }
    }

    /// Marks the query as a read. Column lists are accepted but every
    /// field is returned.
    pub fn select(mut self, _columns: &str) -> Self {
        self.query.action = Action::Select;
        self
    }

    /// Adds an equality filter. Filters combine with AND.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.filters.push(Filter::new(field, value));
        self
    }

    /// Orders the matches by `field` and runs the read.
    pub async fn order(mut self, field: impl Into<String>, ascending: bool) -> Vec<Record> {
        self.query.order = Some(OrderBy::new(field, ascending));
        self.store.execute(self.query).await
    }

    /// Runs the read and returns the first match.
    pub async fn single(self) -> Option<Record> {
        self.store.execute(self.query).await.into_iter().next()
    }

    /// Stamps and stores `records`, ignoring any filters.
    pub async fn insert(self, records: Vec<Record>) -> Inserted {
        let rows = self.store.insert(&self.query.table, records).await;
        Inserted { rows }
    }

    /// Switches to an update. Filters added so far are kept.
    pub fn update(mut self, patch: Record) -> UpdateBuilder {
        self.query.action = Action::Update(patch);
        UpdateBuilder {
            store: self.store,
            query: self.query,
        }
    }

    /// Switches to a delete, which runs on the next `eq`.
    pub fn delete(mut self) -> DeleteBuilder {
        self.query.action = Action::Delete;
        DeleteBuilder {
            store: self.store,
            query: self.query,
        }
    }

    /// Runs the read and returns every match in table order.
    pub async fn execute(self) -> Vec<Record> {
        self.store.execute(self.query).await
    }
}

impl IntoFuture for QueryBuilder {
    type Output = Vec<Record>;
    type IntoFuture = Pin<Box<dyn Future<Output = Vec<Record>> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

/// An update waiting for its filters and a `single()` call.
#[derive(Debug)]
#[must_use = "updates do nothing until `single()` is awaited"]
pub struct UpdateBuilder {
    store: Store,
    query: Query,
}

impl UpdateBuilder {
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.filters.push(Filter::new(field, value));
        self
    }

    /// Accepted for call-shape compatibility; updates always return full rows.
    pub fn select(self, _columns: &str) -> Self {
        self
    }

    /// Applies the patch to every match and returns the first updated row.
    ///
    /// Without filters every row of the table is updated.
    pub async fn single(self) -> Option<Record> {
        self.store.execute(self.query).await.into_iter().next()
    }
}

/// A delete that runs as soon as it receives its filter.
#[derive(Debug)]
#[must_use = "deletes do nothing until `eq()` is awaited"]
pub struct DeleteBuilder {
    store: Store,
    query: Query,
}

impl DeleteBuilder {
    /// Deletes every row where `field` equals `value` and returns the removed rows.
    pub async fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Vec<Record> {
        self.query.filters.push(Filter::new(field, value));
        self.store.execute(self.query).await
    }
}

/// Result of an insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Inserted {
    rows: Vec<Record>,
}

impl Inserted {
    /// Accepted for call-shape compatibility with `insert(..).select().single()`.
    pub fn select(self, _columns: &str) -> Self {
        self
    }

    /// The first inserted record, as stored.
    pub async fn single(self) -> Option<Record> {
        self.rows.into_iter().next()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}
