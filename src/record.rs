//! An interaction record.

pub mod time;

use std::collections::HashMap;

pub use time::Time;

use crate::header::column;
use crate::header::Column;
use crate::header::Header;
use crate::header::DELIMITER;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a record.
#[derive(Debug)]
pub enum ParseError {
    /// A required field is absent or empty.
    MissingField(Column),

    /// The order field is not a finite number.
    InvalidOrder(time::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingField(column) => write!(f, "missing value for field: {column}"),
            ParseError::InvalidOrder(err) => write!(f, "invalid order: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A [`Result`](std::result::Result) with a [`ParseError`].
type Result<T> = std::result::Result<T, ParseError>;

////////////////////////////////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////////////////////////////////

/// A timed interaction between two entities: one row of an interaction table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The time index of the interaction.
    order: Time,

    /// The first entity.
    entity_a: String,

    /// The second entity.
    entity_b: String,

    /// Every other column, keyed by normalized column name.
    extra: HashMap<String, String>,
}

impl Record {
    /// Attempts to create a new [`Record`] with no extra fields.
    ///
    /// Each value is trimmed of surrounding whitespace before it is checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::record::Record;
    ///
    /// let record = Record::try_new("1", "NEK9", "CDK1")?;
    /// assert_eq!(record.entity_a(), "NEK9");
    ///
    /// assert!(Record::try_new("1", "NEK9", " ").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(order: &str, entity_a: &str, entity_b: &str) -> Result<Self> {
        Ok(Self {
            order: parse_order(order.trim())?,
            entity_a: required(Column::EntityA, Some(entity_a))?.into(),
            entity_b: required(Column::EntityB, Some(entity_b))?.into(),
            extra: HashMap::new(),
        })
    }

    /// Attempts to parse a [`Record`] from a data line given the table's
    /// [`Header`].
    ///
    /// Fields are matched to columns by position. Cells past the end of the
    /// header are ignored and cells missing from the end of the line are
    /// treated as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::header::Header;
    /// use pcomplex::record::Record;
    ///
    /// let header = "ID\tOrder\tProtein A\tProtein B".parse::<Header>()?;
    /// let record = Record::try_from_line(&header, "E1\t1\t NEK9 \tCDK1")?;
    ///
    /// assert_eq!(record.order().as_str(), "1");
    /// assert_eq!(record.entity_a(), "NEK9");
    /// assert_eq!(record.entity_b(), "CDK1");
    /// assert_eq!(record.id(), Some("E1"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_line(header: &Header, line: &str) -> Result<Self> {
        let mut order = None;
        let mut entity_a = None;
        let mut entity_b = None;
        let mut extra = HashMap::new();

        for (column, value) in header.columns().zip(line.split(DELIMITER)) {
            let value = value.trim();

            match column {
                Some(Column::Order) => order = Some(value),
                Some(Column::EntityA) => entity_a = Some(value),
                Some(Column::EntityB) => entity_b = Some(value),
                Some(Column::Other(name)) => {
                    extra.insert(name.clone(), value.to_string());
                }
                None => {}
            }
        }

        let order = parse_order(required(Column::Order, order)?)?;
        let entity_a = required(Column::EntityA, entity_a)?.into();
        let entity_b = required(Column::EntityB, entity_b)?.into();

        Ok(Self {
            order,
            entity_a,
            entity_b,
            extra,
        })
    }

    /// Gets the time index of the interaction.
    pub fn order(&self) -> &Time {
        &self.order
    }

    /// Gets the first entity of the interaction.
    pub fn entity_a(&self) -> &str {
        &self.entity_a
    }

    /// Gets the second entity of the interaction.
    pub fn entity_b(&self) -> &str {
        &self.entity_b
    }

    /// Gets the extra (non-required) fields, keyed by normalized column name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::header::Header;
    /// use pcomplex::record::Record;
    ///
    /// let header = "Order\tProtein A\tProtein B\tMethod Used".parse::<Header>()?;
    /// let record = Record::try_from_line(&header, "3\tNEK9\tCDK1\tY2H")?;
    ///
    /// assert_eq!(record.extra().get("methodused").map(String::as_str), Some("Y2H"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extra(&self) -> &HashMap<String, String> {
        &self.extra
    }

    /// Gets the value of the optional `id` column, if it was present.
    pub fn id(&self) -> Option<&str> {
        self.extra.get(column::ID).map(String::as_str)
    }

    /// Gets the partner of `entity` within this interaction.
    ///
    /// Returns [`None`] if `entity` does not take part in the interaction. For
    /// a self-interaction, the partner is the entity itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::record::Record;
    ///
    /// let record = Record::try_new("1", "NEK9", "CDK1")?;
    ///
    /// assert_eq!(record.partner_of("NEK9"), Some("CDK1"));
    /// assert_eq!(record.partner_of("CDK1"), Some("NEK9"));
    /// assert_eq!(record.partner_of("INCENP"), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn partner_of(&self, entity: &str) -> Option<&str> {
        if self.entity_a == entity {
            Some(&self.entity_b)
        } else if self.entity_b == entity {
            Some(&self.entity_a)
        } else {
            None
        }
    }

    /// Whether both sides of the interaction are the same entity.
    pub fn is_self_interaction(&self) -> bool {
        self.entity_a == self.entity_b
    }
}

/// Ensures that a required field has a non-empty value.
fn required(column: Column, value: Option<&str>) -> Result<&str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ParseError::MissingField(column)),
    }
}

/// Parses the value of the order field.
fn parse_order(value: &str) -> Result<Time> {
    if value.is_empty() {
        return Err(ParseError::MissingField(Column::Order));
    }

    value.parse().map_err(ParseError::InvalidOrder)
}
