//! A builder for [`Track`]s.

use std::collections::HashMap;

use nonempty::NonEmpty;
use tracing::debug;

use crate::record::Record;
use crate::record::Time;
use crate::track::Partner;
use crate::track::Track;

/// An adjacency index from each entity to its partners, in first-seen order.
#[derive(Debug, Default)]
struct Index<'a> {
    /// The slot of each entity within `slots`.
    slots_by_entity: HashMap<&'a str, usize>,

    /// The entities and their partners, in first-seen order.
    slots: Vec<(&'a str, NonEmpty<Partner>)>,
}

impl<'a> Index<'a> {
    /// Appends `partner` to the partners of `entity`.
    fn push(&mut self, entity: &'a str, partner: &str, time: &Time) {
        let partner = Partner::new(partner, time.clone());

        match self.slots_by_entity.get(entity) {
            Some(&slot) => self.slots[slot].1.push(partner),
            None => {
                self.slots_by_entity.insert(entity, self.slots.len());
                self.slots.push((entity, NonEmpty::new(partner)));
            }
        }
    }

    /// Consumes the index and materializes the tracks.
    fn into_tracks(self) -> Vec<Track> {
        self.slots
            .into_iter()
            .map(|(entity, partners)| Track {
                entity: entity.to_string(),
                partners,
            })
            .collect()
    }
}

/// A builder for [`Track`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder;

impl Builder {
    /// Builds one [`Track`] per entity referenced by `records`.
    ///
    /// Tracks are returned in the order in which their entities are first
    /// referenced. Each track lists, in record order, the other side of every
    /// record its entity appears in. A self-interaction appears exactly once
    /// on its entity's track. No records yields no tracks.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::record::Record;
    /// use pcomplex::track::Builder;
    ///
    /// let records = vec![
    ///     Record::try_new("1", "NEK9", "CDK1")?,
    ///     Record::try_new("2", "CDK1", "INCENP")?,
    /// ];
    ///
    /// let tracks = Builder.build_from(&records);
    /// assert_eq!(tracks.len(), 3);
    ///
    /// let cdk1 = &tracks[1];
    /// assert_eq!(cdk1.entity(), "CDK1");
    /// assert_eq!(cdk1.len(), 2);
    /// assert_eq!(cdk1.partners()[0].partner(), "NEK9");
    /// assert_eq!(cdk1.partners()[1].partner(), "INCENP");
    /// assert_eq!(cdk1.partners()[1].time().as_str(), "2");
    ///
    /// assert!(Builder.build_from(&Vec::<Record>::new()).is_empty());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn build_from<'a, I>(&self, records: I) -> Vec<Track>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut index = Index::default();

        for record in records {
            index.push(record.entity_a(), record.entity_b(), record.order());

            if !record.is_self_interaction() {
                index.push(record.entity_b(), record.entity_a(), record.order());
            }
        }

        let tracks = index.into_tracks();
        debug!(tracks = tracks.len(), "built tracks");

        tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, &str, &str)]) -> Vec<Record> {
        rows.iter()
            .map(|(order, a, b)| Record::try_new(order, a, b).unwrap())
            .collect()
    }

    /// Builds tracks by filtering every record once per entity.
    fn build_naively(records: &[Record]) -> Vec<(String, Vec<(String, String)>)> {
        let mut entities = Vec::<&str>::new();

        for record in records {
            for entity in [record.entity_a(), record.entity_b()] {
                if !entities.contains(&entity) {
                    entities.push(entity);
                }
            }
        }

        entities
            .into_iter()
            .map(|entity| {
                let partners = records
                    .iter()
                    .filter_map(|r| {
                        r.partner_of(entity)
                            .map(|p| (p.to_string(), r.order().to_string()))
                    })
                    .collect();
                (entity.to_string(), partners)
            })
            .collect()
    }

    fn flatten(tracks: &[Track]) -> Vec<(String, Vec<(String, String)>)> {
        tracks
            .iter()
            .map(|t| {
                let partners = t
                    .partners()
                    .iter()
                    .map(|p| (p.partner().to_string(), p.time().to_string()))
                    .collect();
                (t.entity().to_string(), partners)
            })
            .collect()
    }

    #[test]
    fn test_matches_naive_construction() {
        let records = records(&[
            ("1", "NEK9", "CDK1"),
            ("2", "CDK1", "INCENP"),
            ("3", "AURKB", "CDK1"),
            ("3", "INCENP", "AURKB"),
            ("5", "NEK9", "NEK9"),
            ("4", "CDK1", "NEK9"),
        ]);

        let tracks = Builder.build_from(&records);
        assert_eq!(flatten(&tracks), build_naively(&records));

        for track in &tracks {
            assert_eq!(track.len(), track.partners().len());
        }
    }

    #[test]
    fn test_partners_keep_record_order() {
        let records = records(&[("10", "CDK1", "NEK9"), ("2", "CDK1", "PLK1")]);
        let tracks = Builder.build_from(&records);

        let times = tracks[0]
            .partners()
            .iter()
            .map(|p| p.time().as_str())
            .collect::<Vec<_>>();
        assert_eq!(times, vec!["10", "2"]);
    }

    #[test]
    fn test_self_interaction_is_counted_once() {
        let records = records(&[("1", "CDK1", "CDK1"), ("2", "CDK1", "CDK1")]);
        let tracks = Builder.build_from(&records);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].len(), 2);
        assert!(tracks[0].partners().iter().all(|p| p.partner() == "CDK1"));
    }

    #[test]
    fn test_duplicate_interactions_are_kept() {
        let records = records(&[("1", "NEK9", "CDK1"), ("1", "NEK9", "CDK1")]);
        let tracks = Builder.build_from(&records);

        assert_eq!(tracks[0].len(), 2);
        assert_eq!(tracks[1].len(), 2);
    }

    #[test]
    fn test_building_is_idempotent() {
        let records = records(&[("1", "NEK9", "CDK1"), ("2", "CDK1", "INCENP")]);
        assert_eq!(Builder.build_from(&records), Builder.build_from(&records));
    }
}
