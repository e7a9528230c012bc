//! The header row of an interaction table.

pub mod column;

use std::str::FromStr;

pub use column::Column;

/// The delimiter between fields in every row of the table.
pub const DELIMITER: char = '\t';

/// The UTF-8 byte-order mark, which some spreadsheet exports prepend.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// The columns that every header must resolve.
const REQUIRED_COLUMNS: [Column; 3] = [Column::Order, Column::EntityA, Column::EntityB];

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a header row.
#[derive(Debug)]
pub enum ParseError {
    /// A required column is not present in the header.
    MissingColumn(Column),

    /// A required column is present more than once in the header.
    DuplicateColumn(Column),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingColumn(column) => {
                write!(f, "missing required column: {column}")
            }
            ParseError::DuplicateColumn(column) => {
                write!(f, "required column appears more than once: {column}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A [`Result`](std::result::Result) with a [`ParseError`].
type Result<T> = std::result::Result<T, ParseError>;

////////////////////////////////////////////////////////////////////////////////////////
// Header
////////////////////////////////////////////////////////////////////////////////////////

/// The header row of an interaction table.
///
/// The header records the [`Column`] at each position along with the positions
/// of the three required columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// The column at each position (or [`None`] if the name was blank).
    columns: Vec<Option<Column>>,

    /// The position of the order column.
    order: usize,

    /// The position of the first protein column.
    entity_a: usize,

    /// The position of the second protein column.
    entity_b: usize,
}

impl Header {
    /// Gets the columns of the [`Header`] in positional order.
    ///
    /// Blank column names are reported as [`None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::header::Column;
    /// use pcomplex::header::Header;
    ///
    /// let header = "ID\tOrder\tProtein A\tProtein B".parse::<Header>()?;
    /// let columns = header.columns().collect::<Vec<_>>();
    ///
    /// assert_eq!(columns.len(), 4);
    /// assert_eq!(columns[1], Some(&Column::Order));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn columns(&self) -> impl Iterator<Item = Option<&Column>> + '_ {
        self.columns.iter().map(Option::as_ref)
    }

    /// Gets the number of columns in the [`Header`], blank ones included.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the [`Header`] has no columns. Always `false` for a parsed
    /// header, since it holds at least the required columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Gets the position of a required column.
    ///
    /// Returns [`None`] for columns that are not required.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::header::Column;
    /// use pcomplex::header::Header;
    ///
    /// let header = "ID\tOrder\tProtein A\tProtein B".parse::<Header>()?;
    ///
    /// assert_eq!(header.position(&Column::Order), Some(1));
    /// assert_eq!(header.position(&Column::EntityB), Some(3));
    /// assert_eq!(header.position(&Column::Other(String::from("id"))), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn position(&self, column: &Column) -> Option<usize> {
        match column {
            Column::Order => Some(self.order),
            Column::EntityA => Some(self.entity_a),
            Column::EntityB => Some(self.entity_b),
            Column::Other(_) => None,
        }
    }
}

impl FromStr for Header {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix(BYTE_ORDER_MARK).unwrap_or(s);

        let columns = s
            .split(DELIMITER)
            .map(Column::from_name)
            .collect::<Vec<_>>();

        let [order, entity_a, entity_b] = REQUIRED_COLUMNS.map(|required| {
            let positions = columns
                .iter()
                .enumerate()
                .filter(|(_, column)| column.as_ref() == Some(&required))
                .map(|(i, _)| i)
                .collect::<Vec<_>>();

            match positions.as_slice() {
                [i] => Ok(*i),
                [] => Err(ParseError::MissingColumn(required)),
                _ => Err(ParseError::DuplicateColumn(required)),
            }
        });

        Ok(Header {
            columns,
            order: order?,
            entity_a: entity_a?,
            entity_b: entity_b?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_header() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = "ID\tOrder\tProtein A\tProtein B".parse::<Header>()?;

        assert_eq!(header.len(), 4);
        assert_eq!(header.position(&Column::Order), Some(1));
        assert_eq!(header.position(&Column::EntityA), Some(2));
        assert_eq!(header.position(&Column::EntityB), Some(3));

        Ok(())
    }

    #[test]
    fn test_header_accepts_normalized_synonyms()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = "proteinb\t ORDER \tprotein a".parse::<Header>()?;

        assert_eq!(header.position(&Column::Order), Some(1));
        assert_eq!(header.position(&Column::EntityA), Some(2));
        assert_eq!(header.position(&Column::EntityB), Some(0));

        Ok(())
    }

    #[test]
    fn test_header_with_blank_columns() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = "\u{feff}Order\t\tProtein A\t \tProtein B".parse::<Header>()?;

        let columns = header.columns().collect::<Vec<_>>();
        assert_eq!(
            columns,
            vec![
                Some(&Column::Order),
                None,
                Some(&Column::EntityA),
                None,
                Some(&Column::EntityB)
            ]
        );

        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let err = "ID\tOrder\tProtein A".parse::<Header>().unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn(Column::EntityB)));
        assert_eq!(err.to_string(), "missing required column: proteinb");

        let err = "".parse::<Header>().unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn(Column::Order)));
    }

    #[test]
    fn test_duplicate_column() {
        let err = "Order\tProtein A\tprotein a\tProtein B"
            .parse::<Header>()
            .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateColumn(Column::EntityA)));
        assert_eq!(
            err.to_string(),
            "required column appears more than once: proteina"
        );
    }
}
