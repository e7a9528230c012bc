//! Per-entity timelines of interactions.
//!
//! A [`Track`] lists every interaction an entity takes part in, in table
//! order, as a sequence of [`Partner`]s. Tracks are built in a single pass
//! over the records using a [`Builder`].

pub mod builder;

use nonempty::NonEmpty;

pub use builder::Builder;

use crate::record::Time;

/// One interaction on a [`Track`]: the other entity and when it happened.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Partner {
    /// The other entity in the interaction.
    partner: String,

    /// The time index of the interaction.
    time: Time,
}

impl Partner {
    /// Creates a new [`Partner`].
    pub fn new(partner: impl Into<String>, time: Time) -> Self {
        Self {
            partner: partner.into(),
            time,
        }
    }

    /// Gets the other entity in the interaction.
    pub fn partner(&self) -> &str {
        &self.partner
    }

    /// Gets the time index of the interaction.
    pub fn time(&self) -> &Time {
        &self.time
    }
}

/// The interactions of a single entity, in table order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Track {
    /// The entity this track belongs to.
    entity: String,

    /// The interactions of the entity.
    partners: NonEmpty<Partner>,
}

impl Track {
    /// Gets the entity this [`Track`] belongs to.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Gets the partners of the entity in table order. Partners are never
    /// sorted by time.
    pub fn partners(&self) -> &NonEmpty<Partner> {
        &self.partners
    }

    /// Gets the number of interactions on the [`Track`].
    ///
    /// This is always the number of [partners](Track::partners()).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.partners.len()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Track {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct as _;

        let partners = self.partners.iter().collect::<Vec<_>>();

        let mut state = serializer.serialize_struct("Track", 3)?;
        state.serialize_field("entity", &self.entity)?;
        state.serialize_field("partners", &partners)?;
        state.serialize_field("length", &self.len())?;
        state.end()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_track_serializes_its_length() -> Result<(), Box<dyn std::error::Error>> {
        let track = Track {
            entity: String::from("CDK1"),
            partners: NonEmpty::from((
                Partner::new("NEK9", "1".parse()?),
                vec![Partner::new("INCENP", "2".parse()?)],
            )),
        };

        assert_eq!(
            serde_json::to_string(&track)?,
            r#"{"entity":"CDK1","partners":[{"partner":"NEK9","time":1},{"partner":"INCENP","time":2}],"length":2}"#
        );

        Ok(())
    }
}
