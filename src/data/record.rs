use num_traits::ToPrimitive;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use crate::error::{Result, TreeError};

pub trait DataValue: Debug + Clone + Copy + Send + Sync + Display + 'static {}

impl<T> DataValue for T where T: Debug + Clone + Copy + Send + Sync + Display + 'static {}

/// Attribute value. Must be comparable and convertible to `f64` so that it can be
/// tested against a midpoint threshold.
pub trait Number: DataValue + PartialOrd + ToPrimitive {}
impl<T> Number for T where T: DataValue + PartialOrd + ToPrimitive {}

/// Class label. `Ord` gives majority voting a deterministic tie-break.
pub trait ClassLabel: DataValue + Eq + Ord + Hash {}
impl<T> ClassLabel for T where T: DataValue + Eq + Ord + Hash {}

/// A single labeled observation.
#[derive(Clone, PartialEq)]
pub struct Record<XT: Number = i64, YT: ClassLabel = i64> {
    id: u64,
    label: YT,
    attributes: BTreeMap<String, XT>,
}

impl<XT: Number, YT: ClassLabel> Debug for Record<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Record {{ id: {}, y: {}, ", self.id, self.label)?;
        let mut first = true;
        for (name, value) in &self.attributes {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
            first = false;
        }
        write!(f, " }}")
    }
}

impl<XT: Number, YT: ClassLabel> Record<XT, YT> {
    pub fn new(id: u64, label: YT, attributes: BTreeMap<String, XT>) -> Self {
        Self {
            id,
            label,
            attributes,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> YT {
        self.label
    }

    pub fn attributes(&self) -> &BTreeMap<String, XT> {
        &self.attributes
    }

    pub fn value(&self, attribute: &str) -> Option<XT> {
        self.attributes.get(attribute).copied()
    }

    /// Returns the attribute value widened to `f64`, ready for threshold comparison.
    ///
    /// # Errors
    ///
    /// Fails if the record has no such attribute or the value isn't representable as `f64`.
    pub fn numeric_value(&self, attribute: &str) -> Result<f64> {
        let value = self
            .value(attribute)
            .ok_or_else(|| TreeError::MissingAttribute {
                attribute: attribute.to_string(),
                record: self.id,
            })?;
        value.to_f64().ok_or_else(|| {
            TreeError::InvalidInput(format!(
                "value {} of attribute '{}' can't be represented as f64",
                value, attribute
            ))
        })
    }
}
