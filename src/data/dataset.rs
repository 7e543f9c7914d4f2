use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

use super::record::{ClassLabel, Number, Record};
use crate::error::{Result, TreeError};

/// Non-empty, ordered collection of records sharing one attribute key set.
#[derive(Clone)]
pub struct Dataset<XT: Number = i64, YT: ClassLabel = i64> {
    attribute_names: Vec<String>,
    records: Vec<Record<XT, YT>>,
}

impl<XT: Number, YT: ClassLabel> Debug for Dataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        writeln!(f, "    attributes: {:?},", self.attribute_names)?;
        writeln!(f, "    records: [")?;
        for record in &self.records {
            writeln!(f, "        {:?},", record)?;
        }
        write!(f, "    ]\n}}")
    }
}

impl<XT: Number, YT: ClassLabel> Dataset<XT, YT> {
    /// Creates a dataset from already built records.
    ///
    /// The attribute names are taken from the first record, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `records` is empty or if any record's attribute keys differ
    /// from those of the first record.
    pub fn new(records: Vec<Record<XT, YT>>) -> Result<Self> {
        let first = records
            .first()
            .ok_or_else(|| TreeError::InvalidInput("dataset is empty".into()))?;
        let attribute_names: Vec<String> = first.attributes().keys().cloned().collect();

        for record in &records {
            let keys_match = record.attributes().len() == attribute_names.len()
                && record
                    .attributes()
                    .keys()
                    .zip(attribute_names.iter())
                    .all(|(key, name)| key == name);
            if !keys_match {
                return Err(TreeError::InvalidInput(format!(
                    "record {} has attributes {:?}, expected {:?}",
                    record.id(),
                    record.attributes().keys().collect::<Vec<_>>(),
                    attribute_names
                )));
            }
        }

        Ok(Self {
            attribute_names,
            records,
        })
    }

    /// Creates a dataset from row-major values, assigning sequential ids starting at 0.
    ///
    /// # Arguments
    ///
    /// * `attribute_names` - Column names, one per value in each row.
    /// * `rows` - Attribute values of each record.
    /// * `labels` - Class label of each record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if rows and labels differ in length, if a row has the wrong
    /// width, or if there are no rows.
    pub fn from_rows(
        attribute_names: &[String],
        rows: Vec<Vec<XT>>,
        labels: Vec<YT>,
    ) -> Result<Self> {
        if rows.len() != labels.len() {
            return Err(TreeError::InvalidInput(format!(
                "{} rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }

        let records = rows
            .into_iter()
            .zip(labels)
            .enumerate()
            .map(|(id, (row, label))| {
                if row.len() != attribute_names.len() {
                    return Err(TreeError::InvalidInput(format!(
                        "row {} has {} values, expected {}",
                        id,
                        row.len(),
                        attribute_names.len()
                    )));
                }
                let attributes: BTreeMap<_, _> =
                    attribute_names.iter().cloned().zip(row).collect();
                Ok(Record::new(id as u64, label, attributes))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(records)
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn records(&self) -> &[Record<XT, YT>] {
        &self.records
    }

    pub fn labels(&self) -> Vec<YT> {
        self.records.iter().map(Record::label).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shuffles the records and splits them into a training and a test dataset.
    ///
    /// # Arguments
    ///
    /// * `train_size` - Fraction of records going to the training set, in `[0, 1]`.
    /// * `seed` - Seed for the shuffle; `None` seeds from system entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `train_size` is out of range, and `InvalidInput` if
    /// either side of the split would be empty.
    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter(
                "Train size should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.records.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.records.len() as f64 * train_size).floor() as usize;

        let pick = |indices: &[usize]| {
            indices
                .iter()
                .map(|&index| self.records[index].clone())
                .collect::<Vec<_>>()
        };

        let train = Self::new(pick(&indices[..train_size]))?;
        let test = Self::new(pick(&indices[train_size..]))?;
        Ok((train, test))
    }
}
