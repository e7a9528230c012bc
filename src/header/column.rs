//! A column within the header row of an interaction table.

use std::sync::LazyLock;

use regex::Regex;

/// The normalized name of the order column.
pub const ORDER: &str = "order";

/// The normalized name of the first protein column.
pub const PROTEIN_A: &str = "proteina";

/// The normalized name of the second protein column.
pub const PROTEIN_B: &str = "proteinb";

/// The normalized name of the (optional) identifier column.
pub const ID: &str = "id";

/// Any run of whitespace within a column name.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a raw column name.
///
/// Normalization removes all whitespace (leading, trailing, and internal) and
/// lowercases what remains, so `"Protein A"`, `" protein a "`, and
/// `"PROTEINA"` all resolve to the same key.
///
/// # Examples
///
/// ```
/// use pcomplex::header::column::normalize;
///
/// assert_eq!(normalize("Protein A"), "proteina");
/// assert_eq!(normalize("  Order\u{a0}"), "order");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    WHITESPACE.replace_all(name, "").to_lowercase()
}

/// A column in an interaction table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Column {
    /// The time index of the interaction.
    Order,

    /// The first interacting entity.
    EntityA,

    /// The second interacting entity.
    EntityB,

    /// Any other column, keyed by its normalized name.
    Other(String),
}

impl Column {
    /// Resolves a raw column name into a [`Column`].
    ///
    /// Returns [`None`] if the name is empty once normalized. Such columns
    /// carry no key and are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::header::Column;
    ///
    /// assert_eq!(Column::from_name("Protein B"), Some(Column::EntityB));
    /// assert_eq!(Column::from_name("ID"), Some(Column::Other(String::from("id"))));
    /// assert_eq!(Column::from_name("   "), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize(name);

        match normalized.as_str() {
            "" => None,
            ORDER => Some(Column::Order),
            PROTEIN_A => Some(Column::EntityA),
            PROTEIN_B => Some(Column::EntityB),
            _ => Some(Column::Other(normalized)),
        }
    }

    /// Whether every data row must carry a value for this column.
    pub fn is_required(&self) -> bool {
        !matches!(self, Column::Other(_))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::Order => write!(f, "{ORDER}"),
            Column::EntityA => write!(f, "{PROTEIN_A}"),
            Column::EntityB => write!(f, "{PROTEIN_B}"),
            Column::Other(name) => write!(f, "{name}"),
        }
    }
}
