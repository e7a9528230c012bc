//! An iterator over the [records](crate::record::Record) of an interaction
//! table.

use std::io::BufRead;

use tracing::debug;
use tracing::trace;

use crate::header::Header;
use crate::header::DELIMITER;
use crate::reader::Error;
use crate::record::Record;
use crate::Reader;

/// The state of the iterator.
#[derive(Debug)]
enum State {
    /// The header has not been read yet.
    AwaitingHeader,

    /// The header has been read and records are being read.
    ReadingRecords(Header),

    /// The end of the table (or an error) has been reached.
    Done,
}

/// An iterator that traverses the records of an interaction table while
/// keeping track of the header and the current line number.
#[derive(Debug)]
pub struct Records<'a, T>
where
    T: BufRead,
{
    /// The inner reader.
    reader: &'a mut Reader<T>,

    /// The state of the iterator.
    state: State,

    /// The line number of the last line read.
    line_no: usize,

    /// The line buffer.
    buffer: String,
}

impl<'a, T> Records<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Records`].
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            state: State::AwaitingHeader,
            line_no: 0usize,
            buffer: String::new(),
        }
    }

    /// Gets the header, if it has been read.
    pub fn header(&self) -> Option<&Header> {
        match &self.state {
            State::ReadingRecords(header) => Some(header),
            _ => None,
        }
    }

    /// Reads the next line into the buffer, returning `false` at the end of
    /// the input.
    fn next_line(&mut self) -> Result<bool, Error> {
        let read = self
            .reader
            .read_line_raw(&mut self.buffer)
            .map_err(Error::Io)?;

        self.line_no += 1;
        Ok(read > 0)
    }

    /// Advances the iterator, leaving the state as-is on success.
    fn advance(&mut self) -> Result<Option<Record>, Error> {
        if let State::AwaitingHeader = self.state {
            // An empty input is treated as an empty header line, which then
            // fails to resolve the required columns.
            self.next_line()?;

            let header = self
                .buffer
                .parse::<Header>()
                .map_err(Error::SchemaMismatch)?;

            debug!(columns = header.len(), "parsed header");
            self.state = State::ReadingRecords(header);
        }

        loop {
            if !matches!(self.state, State::ReadingRecords(_)) || !self.next_line()? {
                return Ok(None);
            }

            if is_blank(&self.buffer) {
                trace!(line_no = self.line_no, "skipping blank line");
                continue;
            }

            let State::ReadingRecords(header) = &self.state else {
                return Ok(None);
            };

            return Record::try_from_line(header, &self.buffer)
                .map(Some)
                .map_err(|err| Error::MalformedRow(self.line_no, err));
        }
    }
}

/// Whether a line carries no cells at all. A line holding only delimiters is
/// a row of empty cells, not a blank line.
fn is_blank(line: &str) -> bool {
    !line.contains(DELIMITER) && line.trim().is_empty()
}

impl<T> Iterator for Records<'_, T>
where
    T: BufRead,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Column;
    use crate::record;

    #[test]
    fn test_blank_lines_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let data = b"ID\tOrder\tProtein A\tProtein B\n\nE1\t1\tNEK9\tCDK1\n  \nE2\t2\tCDK1\tINCENP\n\n\n";
        let mut reader = Reader::new(&data[..]);

        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].entity_b(), "INCENP");

        Ok(())
    }

    #[test]
    fn test_malformed_row_reports_line_number() {
        let data = b"ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\t\n";
        let mut reader = Reader::new(&data[..]);
        let mut records = reader.records();

        let err = records.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRow(2, record::ParseError::MissingField(Column::EntityB))
        ));

        assert!(records.next().is_none());
    }

    #[test]
    fn test_blank_lines_count_towards_line_numbers() {
        let data = b"ID\tOrder\tProtein A\tProtein B\n\nE1\t1\tNEK9\tCDK1\n\nE2\tx\tCDK1\tNEK9\n";
        let mut reader = Reader::new(&data[..]);

        let results = reader.records().collect::<Vec<_>>();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::MalformedRow(5, _))));
    }

    #[test]
    fn test_row_of_empty_cells_is_malformed() {
        let data = b"ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\tCDK1\n\t\t\t\nE3\t3\tCDK1\tPLK1\n";
        let mut reader = Reader::new(&data[..]);

        let results = reader.records().collect::<Vec<_>>();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(Error::MalformedRow(
                3,
                record::ParseError::MissingField(Column::Order)
            ))
        ));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("\t\t\t"));
        assert!(!is_blank(" \t "));
    }

    #[test]
    fn test_header_is_exposed() {
        let data = b"Order\tProtein A\tProtein B\n1\tNEK9\tCDK1\n";
        let mut reader = Reader::new(&data[..]);
        let mut records = reader.records();

        assert!(records.header().is_none());
        assert!(matches!(records.next(), Some(Ok(_))));
        assert_eq!(
            records.header().and_then(|h| h.position(&Column::EntityA)),
            Some(1)
        );
    }

    #[test]
    fn test_empty_input() {
        let mut reader = Reader::new(&b""[..]);
        let mut records = reader.records();

        assert!(matches!(records.next(), Some(Err(Error::SchemaMismatch(_)))));
        assert!(records.next().is_none());
    }
}
