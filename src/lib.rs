//! `pcomplex` is a crate for turning tables of timed protein-protein
//! interactions into per-protein timelines.
//!
//! The crate is a two-stage pipeline:
//!
//! - Parsing a tab-separated interaction table into
//!   [records](crate::record::Record) and the [set of entities](EntitySet)
//!   they reference.
//! - Building a [`Track`](crate::track::Track) for every entity: the ordered
//!   list of the entity's interaction partners and the time index of each
//!   interaction.
//!
//! ## Interaction tables
//!
//! The first line of a table is its header. Column names are normalized
//! before they are matched (whitespace is removed and the name is
//! lowercased), so `Protein A`, `protein a`, and `ProteinA` all name the same
//! column. Three columns are required:
//!
//! - `Order`: the time index of the interaction (a number).
//! - `Protein A` and `Protein B`: the two interacting entities.
//!
//! Every other column (such as `ID`) is carried along on each record as an
//! [extra field](crate::record::Record::extra()). Blank lines are skipped.
//! Parsing stops at the first malformed row and reports its line number.
//!
//! You can parse a table held in memory with [`parse()`] or stream one from
//! any [`BufRead`](std::io::BufRead) with [`Reader::read_table()`].
//!
//! ## Tracks
//!
//! Tracks are built in a single pass over the records with
//! [`track::Builder`] (or [`Table::tracks()`]). A track lists partners in
//! the order of the records they came from, never sorted by time. A record
//! whose two entities are the same (a self-interaction) appears once on that
//! entity's track.
//!
//! Below is a representative example of the whole pipeline.
//!
//! ```
//! let data = "ID\tOrder\tProtein A\tProtein B\n\
//!             E1\t1\tNEK9\tCDK1\n\
//!             E2\t2\tCDK1\tINCENP\n";
//!
//! let table = pcomplex::parse(data)?;
//! assert_eq!(
//!     table.entities().iter().collect::<Vec<_>>(),
//!     vec!["NEK9", "CDK1", "INCENP"]
//! );
//!
//! for track in table.tracks() {
//!     println!("{} ({} interactions)", track.entity(), track.len());
//!
//!     for partner in track.partners() {
//!         println!("  {} at {}", partner.partner(), partner.time());
//!     }
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod entity;
pub mod header;
pub mod reader;
pub mod record;
pub mod table;
pub mod track;

pub use entity::EntitySet;
pub use table::parse;
pub use table::Table;

pub use self::reader::Reader;
