//! The update applicator: sequencing and merging RUIN (Insert/Delete/
//! Modify) records against a [`FeatureStore`] in strict file and record
//! version order.

use std::collections::BTreeMap;

use crate::feature::{Feature, Foid};
use crate::warning::{Collector, Severity, Warning};

/// The update operation named by a RUIN record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateInstruction {
    /// Insert a new feature.
    Insert,
    /// Delete an existing feature.
    Delete,
    /// Modify an existing feature.
    Modify,
    /// A code not in {1, 2, 3}.
    Unknown(u8),
}

impl UpdateInstruction {
    /// Interprets the `RUIN` subfield value.
    pub fn from_code(ruin: u8) -> UpdateInstruction {
        match ruin {
            1 => UpdateInstruction::Insert,
            2 => UpdateInstruction::Delete,
            3 => UpdateInstruction::Modify,
            other => UpdateInstruction::Unknown(other),
        }
    }
}

/// One RUIN record: the operation, its target FOID, and (for Insert and
/// Modify) the feature payload.
#[derive(Debug, Clone)]
pub struct UpdateRecord {
    /// Target feature identity.
    pub foid: Foid,
    /// The operation to apply.
    pub instruction: UpdateInstruction,
    /// The feature payload, for Insert (the full feature) or Modify (the
    /// fields being overwritten). `None` for Delete, or for a Modify that
    /// carries no payload (a `MODIFY_MISSING_FEATURE` condition).
    pub feature: Option<Feature>,
}

/// One named update dataset: its sequence number, record version, and the
/// RUIN records it carries.
#[derive(Debug, Clone)]
pub struct UpdateDataset {
    /// File name, e.g. `"US5WA50M.001"`.
    pub name: String,
    /// Sequence number (the `NNN` suffix).
    pub sequence_number: u32,
    /// Record version this update advances the store to.
    pub record_version: u16,
    /// The RUIN records carried by this dataset, in order.
    pub records: Vec<UpdateRecord>,
}

/// A feature paired with the record version it was last written at.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedFeature {
    /// The feature's current state.
    pub feature: Feature,
    /// The record version this state corresponds to.
    pub version: u16,
}

/// A FOID-keyed store of [`VersionedFeature`]s, mutated in place by the
/// update applicator.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: BTreeMap<Foid, VersionedFeature>,
}

impl FeatureStore {
    /// Builds a store from a base cell's freshly parsed features, all at
    /// record version 0.
    pub fn from_base_features(features: Vec<Feature>) -> FeatureStore {
        let mut store = FeatureStore::default();
        for feature in features {
            store.features.insert(
                feature.foid,
                VersionedFeature { feature, version: 0 },
            );
        }
        store
    }

    /// Looks up a feature by FOID.
    pub fn get(&self, foid: &Foid) -> Option<&VersionedFeature> {
        self.features.get(foid)
    }

    /// Number of features currently in the store.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the store holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All features currently in the store, FOID order.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values().map(|versioned| &versioned.feature)
    }
}

/// Counts and sequencing metadata from applying one or more update
/// datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSummary {
    /// Number of Insert operations applied successfully.
    pub inserted: u32,
    /// Number of Modify operations applied successfully.
    pub modified: u32,
    /// Number of Delete operations applied successfully.
    pub deleted: u32,
    /// Record version after the last applied update.
    pub final_record_version: u16,
    /// Names of the update datasets applied, in order.
    pub applied: Vec<String>,
    /// Human-readable warning messages emitted while applying.
    pub warnings: Vec<String>,
}

/// Applies a sequence of [`UpdateDataset`]s to `store` in order, enforcing
/// strictly increasing sequence numbers and record versions.
pub fn apply_sequential_updates(
    store: &mut FeatureStore,
    updates: &[UpdateDataset],
    collector: &mut Collector,
) -> Result<UpdateSummary, crate::error::Error> {
    let mut summary = UpdateSummary::default();
    let mut last_sequence: u32 = 0;
    let mut last_version: u16 = 0;

    for update in updates {
        if update.sequence_number != last_sequence + 1 {
            collector.warn(Warning::new(
                "UPDATE_GAP",
                Severity::Error,
                format!(
                    "expected update sequence {:03}, found {:03}",
                    last_sequence + 1,
                    update.sequence_number
                ),
            ))?;
            continue;
        }
        if update.record_version <= last_version {
            collector.warn(Warning::new(
                "UPDATE_RVER_MISMATCH",
                Severity::Error,
                format!(
                    "update {} carries record version {} which does not exceed {}",
                    update.name, update.record_version, last_version
                ),
            ))?;
            continue;
        }

        for record in &update.records {
            apply_one(store, record, update.record_version, &mut summary, collector)?;
        }

        last_sequence = update.sequence_number;
        last_version = update.record_version;
        summary.final_record_version = update.record_version;
        summary.applied.push(update.name.clone());
    }

    summary.warnings = collector
        .warnings()
        .iter()
        .map(|warning| warning.message.clone())
        .collect();
    Ok(summary)
}

fn apply_one(
    store: &mut FeatureStore,
    record: &UpdateRecord,
    record_version: u16,
    summary: &mut UpdateSummary,
    collector: &mut Collector,
) -> Result<(), crate::error::Error> {
    match record.instruction {
        UpdateInstruction::Insert => {
            if store.features.contains_key(&record.foid) {
                collector.push(
                    "INSERT_EXISTS",
                    Severity::Warning,
                    format!("insert target {} already exists", record.foid),
                )?;
                return Ok(());
            }
            if let Some(feature) = record.feature.clone() {
                store.features.insert(
                    record.foid,
                    VersionedFeature { feature, version: record_version },
                );
                summary.inserted += 1;
            }
        }
        UpdateInstruction::Delete => {
            if store.features.remove(&record.foid).is_none() {
                collector.push(
                    "DELETE_MISSING",
                    Severity::Warning,
                    format!("delete target {} does not exist", record.foid),
                )?;
                return Ok(());
            }
            summary.deleted += 1;
        }
        UpdateInstruction::Modify => {
            let Some(existing) = store.features.get(&record.foid).cloned() else {
                collector.push(
                    "MODIFY_MISSING",
                    Severity::Warning,
                    format!("modify target {} does not exist", record.foid),
                )?;
                return Ok(());
            };
            let Some(payload) = record.feature.clone() else {
                collector.push(
                    "MODIFY_MISSING_FEATURE",
                    Severity::Warning,
                    format!("modify for {} carries no feature payload", record.foid),
                )?;
                return Ok(());
            };
            let merged = merge(existing.feature, payload);
            store.features.insert(
                record.foid,
                VersionedFeature { feature: merged, version: record_version },
            );
            summary.modified += 1;
        }
        UpdateInstruction::Unknown(code) => {
            collector.push(
                "UNKNOWN_UPDATE_INSTRUCTION",
                Severity::Warning,
                format!("update instruction code {code} is not recognized"),
            )?;
        }
    }
    Ok(())
}

fn merge(mut existing: Feature, payload: Feature) -> Feature {
    for (acronym, value) in payload.attributes {
        existing.attributes.insert(acronym, value);
    }
    if !matches!(payload.geometry, crate::geometry::Geometry::Empty) {
        existing.geometry = payload.geometry;
    }
    if payload.object_class_acronym != "UNKNOWN" {
        existing.object_class_acronym = payload.object_class_acronym;
    }
    existing.label = payload.label.or(existing.label);
    existing
}
