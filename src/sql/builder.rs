//! Builds the parameterized SELECT, INSERT, UPDATE, DELETE and DDL for the tutorials table.

use crate::model::TutorialInput;
use crate::sql::params::BindValue;

pub const TABLE_NAME: &str = "tutorials";

const COLUMNS: &[&str] = &["id", "title", "description", "published"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(TABLE_NAME))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// CREATE SCHEMA + CREATE TABLE, both idempotent.
/// `title` and `description` are nullable since create and update accept them absent.
pub fn create_table(schema: &str) -> Vec<String> {
    vec![
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)),
        format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                "id" BIGSERIAL PRIMARY KEY,
                "title" VARCHAR(255),
                "description" VARCHAR(255),
                "published" BOOLEAN NOT NULL DEFAULT FALSE
            )"#,
            qualified_table(schema)
        ),
    ]
}

/// SELECT every row ORDER BY id.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        qualified_table(schema),
        quoted("id")
    );
    q
}

/// SELECT rows whose title contains `fragment` (case-sensitive, no wildcards).
/// A NULL title compares as the empty string, so the empty fragment matches every row.
pub fn select_by_title_contains(schema: &str, fragment: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Text(Some(fragment.to_string())));
    q.sql = format!(
        "SELECT {} FROM {} WHERE strpos(COALESCE({}, ''), ${}) > 0 ORDER BY {}",
        select_column_list(),
        qualified_table(schema),
        quoted("title"),
        n,
        quoted("id")
    );
    q
}

/// SELECT rows with an exact `published` match.
pub fn select_by_published(schema: &str, published: bool) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Bool(published));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${} ORDER BY {}",
        select_column_list(),
        qualified_table(schema),
        quoted("published"),
        n,
        quoted("id")
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        qualified_table(schema),
        quoted("id"),
        n
    );
    q
}

fn input_params(q: &mut QueryBuf, input: &TutorialInput) -> Vec<String> {
    vec![
        format!("${}", q.push_param(BindValue::Text(input.title.clone()))),
        format!("${}", q.push_param(BindValue::Text(input.description.clone()))),
        format!("${}", q.push_param(BindValue::Bool(input.published))),
    ]
}

/// INSERT all writable columns; id comes from the sequence.
pub fn insert(schema: &str, input: &TutorialInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = input_params(&mut q, input);
    let cols: Vec<String> = COLUMNS[1..].iter().map(|c| quoted(c)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    );
    q
}

/// UPDATE by id: overwrites every writable column.
pub fn update(schema: &str, id: i64, input: &TutorialInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = input_params(&mut q, input);
    let sets: Vec<String> = COLUMNS[1..]
        .iter()
        .zip(placeholders)
        .map(|(c, ph)| format!("{} = {}", quoted(c), ph))
        .collect();
    let id_param = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        qualified_table(schema),
        sets.join(", "),
        quoted("id"),
        id_param,
        select_column_list()
    );
    q
}

/// DELETE by id.
pub fn delete(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::I64(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", qualified_table(schema), quoted("id"), n);
    q
}

/// DELETE every row. The id sequence is left alone so ids are never reused.
pub fn delete_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {}", qualified_table(schema));
    q
}
