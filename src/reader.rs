//! An interaction table reader.

pub mod records;

use std::io::BufRead;
use std::io::{self};

use nonempty::NonEmpty;
use tracing::debug;

use crate::entity::EntitySet;
use crate::header;
use crate::record;
use crate::Table;

pub use records::Records;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// The header row does not describe an interaction table.
    SchemaMismatch(header::ParseError),

    /// A data row could not be parsed. The line number is 1-based, with the
    /// header on line 1.
    MalformedRow(usize, record::ParseError),

    /// The table contains a header but no records.
    EmptyDataset,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::SchemaMismatch(err) => write!(f, "schema mismatch: {err}"),
            Error::MalformedRow(line_no, err) => {
                write!(f, "malformed row at line {line_no}: {err}")
            }
            Error::EmptyDataset => write!(f, "the table contains no records"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// An interaction table reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an interaction table reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\tCDK1\n";
    /// let reader = pcomplex::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The line terminator (`\n` or `\r\n`) is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"Order\tProtein A\tProtein B\r\n1\tNEK9\tCDK1";
    /// let mut reader = pcomplex::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 27);
    /// assert_eq!(buffer, "Order\tProtein A\tProtein B");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 11);
    /// assert_eq!(buffer, "1\tNEK9\tCDK1");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Returns a fail-fast iterator over the records in the underlying reader.
    ///
    /// The first line is parsed as the header. Every following line that is
    /// not blank is parsed as a record. Iteration ends after the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\tCDK1\n\n";
    /// let mut reader = pcomplex::Reader::new(&data[..]);
    ///
    /// let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self) -> Records<'_, T> {
        Records::new(self)
    }

    /// Reads the entire interaction table.
    ///
    /// Entities are collected in the order they are first referenced, the
    /// first entity of a record before the second.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\tCDK1\nE2\t2\tCDK1\tINCENP\n";
    /// let mut reader = pcomplex::Reader::new(&data[..]);
    ///
    /// let table = reader.read_table()?;
    ///
    /// assert_eq!(table.records().len(), 2);
    /// assert_eq!(
    ///     table.entities().iter().collect::<Vec<_>>(),
    ///     vec!["NEK9", "CDK1", "INCENP"]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_table(&mut self) -> Result<Table> {
        let mut records = Vec::new();
        let mut entities = EntitySet::new();

        for result in self.records() {
            let record = result?;

            entities.insert(record.entity_a());
            entities.insert(record.entity_b());
            records.push(record);
        }

        let records = NonEmpty::from_vec(records).ok_or(Error::EmptyDataset)?;

        debug!(
            records = records.len(),
            entities = entities.len(),
            "read interaction table"
        );

        Ok(Table::new(records, entities))
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
