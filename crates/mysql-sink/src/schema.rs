//! Table schema and SQL generation.
//!
//! Everything here is pure string building so it can be tested without a
//! server.

use bulk_sink::Record;
use mysql_async::Value;

/// Width of the `VARCHAR` column created for each CSV field.
pub const TEXT_COLUMN_WIDTH: u32 = 32;

/// Name of the synthetic auto-increment primary key column.
pub const ID_COLUMN: &str = "id";

/// Columns of a destination table derived from a CSV header.
///
/// The table always starts with an auto-increment `id` column, followed by
/// one `VARCHAR` column per field name in header order. `id` values are
/// assigned by the server, never by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<String>,
}

impl TableSchema {
    pub fn from_field_names(name: &str, field_names: &[String]) -> Self {
        Self {
            name: name.to_string(),
            columns: field_names.to_vec(),
        }
    }

    /// Generate the DROP TABLE statement.
    pub fn drop_table(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", quote_ident(&self.name))
    }

    /// Generate the CREATE TABLE statement.
    pub fn create_table(&self) -> String {
        let mut column_defs = vec![format!(
            "  {} INT NOT NULL AUTO_INCREMENT",
            quote_ident(ID_COLUMN)
        )];
        column_defs.extend(
            self.columns
                .iter()
                .map(|c| format!("  {} VARCHAR({TEXT_COLUMN_WIDTH}) NULL", quote_ident(c))),
        );

        format!(
            "CREATE TABLE {} (\n{},\n  PRIMARY KEY ({})\n)",
            quote_ident(&self.name),
            column_defs.join(",\n"),
            quote_ident(ID_COLUMN)
        )
    }

    /// Generate a multi-row INSERT holding every record of `batch`.
    ///
    /// Cells are rendered as escaped string literals rather than bound
    /// parameters, so the statement is not subject to the 65,535 placeholder
    /// cap on prepared statements. The `id` column is omitted so the server
    /// assigns it.
    pub fn batch_insert(&self, batch: &[Record]) -> String {
        let rows: Vec<String> = batch
            .iter()
            .map(|record| {
                let cells: Vec<String> = self
                    .columns
                    .iter()
                    .map(|c| quote_literal(record.get(c).unwrap_or_default()))
                    .collect();
                format!("({})", cells.join(", "))
            })
            .collect();

        format!(
            "INSERT INTO {} ({}) VALUES {}",
            quote_ident(&self.name),
            self.columns
                .iter()
                .map(|c| quote_ident(c))
                .collect::<Vec<_>>()
                .join(", "),
            rows.join(", ")
        )
    }
}

/// Render `value` as an escaped MySQL string literal.
pub fn quote_literal(value: &str) -> String {
    Value::Bytes(value.as_bytes().to_vec()).as_sql(false)
}

/// Quote an identifier with backticks, doubling embedded backticks.
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}
