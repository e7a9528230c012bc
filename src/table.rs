//! A parsed interaction table.

use std::str::FromStr;

use nonempty::NonEmpty;

use crate::entity::EntitySet;
use crate::reader;
use crate::record::Record;
use crate::track::Builder;
use crate::track::Track;
use crate::Reader;

/// A parsed interaction table: its records along with the entities they
/// reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table {
    /// The records, in table order.
    records: NonEmpty<Record>,

    /// The entities, in first-seen order.
    entities: EntitySet,
}

impl Table {
    /// Creates a new [`Table`].
    pub(crate) fn new(records: NonEmpty<Record>, entities: EntitySet) -> Self {
        Self { records, entities }
    }

    /// Gets the records of the [`Table`] in table order.
    pub fn records(&self) -> &NonEmpty<Record> {
        &self.records
    }

    /// Gets the entities referenced by the [`Table`] in first-seen order.
    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    /// Builds the [tracks](Track) for every entity in the [`Table`].
    ///
    /// # Examples
    ///
    /// ```
    /// let table = pcomplex::parse("Order\tProtein A\tProtein B\n1\tNEK9\tCDK1\n")?;
    /// let tracks = table.tracks();
    ///
    /// assert_eq!(tracks.len(), 2);
    /// assert_eq!(tracks[0].entity(), "NEK9");
    /// assert_eq!(tracks[1].entity(), "CDK1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn tracks(&self) -> Vec<Track> {
        Builder.build_from(&self.records)
    }

    /// Consumes `self` and returns the records and entities.
    pub fn into_parts(self) -> (NonEmpty<Record>, EntitySet) {
        (self.records, self.entities)
    }
}

impl FromStr for Table {
    type Err = reader::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reader::new(s.as_bytes()).read_table()
    }
}

/// Parses an interaction table held in memory.
///
/// # Examples
///
/// ```
/// let table = pcomplex::parse(
///     "ID\tOrder\tProtein A\tProtein B\nE1\t1\tNEK9\tCDK1\nE2\t2\tCDK1\tINCENP\n",
/// )?;
///
/// assert_eq!(table.records().len(), 2);
/// assert_eq!(table.entities().len(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(raw: &str) -> Result<Table, reader::Error> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_is_collected() -> Result<(), Box<dyn std::error::Error>> {
        let table = parse(
            "Order\tProtein A\tProtein B\n1\tNEK9\tCDK1\n2\tCDK1\tCDK1\n3\tPLK1\tNEK9\n",
        )?;

        for record in table.records() {
            assert!(table.entities().contains(record.entity_a()));
            assert!(table.entities().contains(record.entity_b()));
        }

        assert_eq!(
            table.entities().iter().collect::<Vec<_>>(),
            vec!["NEK9", "CDK1", "PLK1"]
        );

        Ok(())
    }

    #[test]
    fn test_into_parts() -> Result<(), Box<dyn std::error::Error>> {
        let (records, entities) = parse("Order\tProtein A\tProtein B\n1\tNEK9\tCDK1")?.into_parts();

        assert_eq!(records.len(), 1);
        assert_eq!(entities.len(), 2);

        Ok(())
    }
}
