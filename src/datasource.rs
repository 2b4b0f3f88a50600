//! Data Connection Port
//!
//! Abstracts the backend a data reader connects to. Readers depend only on
//! the [`DataConnection`] capability, so backends are swappable without
//! modifying the reader. The literal `"connection"`/`"data"` strings are the
//! legacy stand-ins this library replicates.

/// Trait for data backends a reader can connect through.
pub trait DataConnection {
    /// Open the connection and return its handle string.
    fn connect(&self) -> String;
}

/// SQL-flavoured backend.
#[derive(Debug, Default)]
pub struct SqlConnection;

impl DataConnection for SqlConnection {
    fn connect(&self) -> String {
        "connection".to_string()
    }
}

/// Reads customer records through an injected connection.
///
/// Generic over the capability, never over a concrete backend type.
pub struct CustomerData<C: DataConnection> {
    connection: C,
}

impl<C: DataConnection> CustomerData<C> {
    /// Create a reader over any backend implementing [`DataConnection`].
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Open the connection and fetch the records.
    pub fn fetch(&self) -> String {
        let _handle = self.connection.connect();
        "data".to_string()
    }
}
