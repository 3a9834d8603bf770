//! Sink selection.

use async_trait::async_trait;
use bulk_sink::{BulkSink, Record, SinkError};
use mongodb_sink::{MongoSink, MongoSinkOpts};
use mysql_sink::{MySqlSink, MySqlSinkOpts};
use std::fmt;
use std::str::FromStr;

use crate::LoadError;

/// Destination kind named by `--source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    MySql,
    Mongo,
}

impl FromStr for SinkKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(SinkKind::MySql),
            "mongo" => Ok(SinkKind::Mongo),
            other => Err(LoadError::UnsupportedSink(other.to_string())),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::MySql => f.write_str("mysql"),
            SinkKind::Mongo => f.write_str("mongo"),
        }
    }
}

/// One of the supported sinks, chosen once from a `SinkKind`.
pub enum AnySink {
    Relational(MySqlSink),
    Document(MongoSink),
}

impl AnySink {
    /// Connect the sink for `kind` to `uri`, targeting `database`.
    pub async fn connect(kind: SinkKind, uri: &str, database: &str) -> Result<Self, SinkError> {
        match kind {
            SinkKind::MySql => {
                let opts = MySqlSinkOpts {
                    uri: uri.to_string(),
                    database: database.to_string(),
                };
                Ok(AnySink::Relational(MySqlSink::connect(&opts).await?))
            }
            SinkKind::Mongo => {
                let opts = MongoSinkOpts {
                    uri: uri.to_string(),
                    database: database.to_string(),
                };
                Ok(AnySink::Document(MongoSink::connect(&opts).await?))
            }
        }
    }

    pub fn kind(&self) -> SinkKind {
        match self {
            AnySink::Relational(_) => SinkKind::MySql,
            AnySink::Document(_) => SinkKind::Mongo,
        }
    }
}

#[async_trait]
impl BulkSink for AnySink {
    async fn prepare(&mut self, destination: &str, field_names: &[String]) -> Result<(), SinkError> {
        match self {
            AnySink::Relational(s) => s.prepare(destination, field_names).await,
            AnySink::Document(s) => s.prepare(destination, field_names).await,
        }
    }

    async fn insert_batch(&mut self, batch: &[Record]) -> Result<(), SinkError> {
        match self {
            AnySink::Relational(s) => s.insert_batch(batch).await,
            AnySink::Document(s) => s.insert_batch(batch).await,
        }
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        match self {
            AnySink::Relational(s) => s.close().await,
            AnySink::Document(s) => s.close().await,
        }
    }
}
