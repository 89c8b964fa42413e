// crates/atlas-core/src/model.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A tourist spot listed for a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub name: String,
    #[serde(default, rename = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Spot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            description: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// An emergency service and the number to dial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    pub service: String,
    pub number: String,
}

impl Helpline {
    pub fn new(service: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            number: number.into(),
        }
    }
}

/// Everything the panel shows for one state or union territory.
///
/// The serialized field names match the `stateData.json` documents served
/// at `/api/state-data`, so both the embedded table and remote documents
/// deserialize into this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(default)]
    pub spots: Vec<Spot>,
    /// Tagline shown next to the state name on the spots tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub helplines: Vec<Helpline>,
}

/// Name-tolerant read access to state records.
///
/// Implementors provide [`StateLookup::exact`]; [`StateLookup::record`]
/// falls back to a folded (accent- and case-insensitive) comparison so
/// a GeoJSON source spelling `"KERALA"` still finds `"Kerala"`.
pub trait StateLookup {
    /// Exact key match.
    fn exact(&self, name: &str) -> Option<&StateRecord>;

    /// Match on [`fold_key`] form.
    fn folded(&self, key: &str) -> Option<&StateRecord>;

    #[inline]
    fn record(&self, name: &str) -> Option<&StateRecord> {
        self.exact(name).or_else(|| self.folded(&fold_key(name)))
    }
}

/// Static mapping of state display name to [`StateRecord`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    records: BTreeMap<String, StateRecord>,
    by_folded: HashMap<String, String>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: BTreeMap<String, StateRecord>) -> Self {
        let by_folded = records
            .keys()
            .map(|k| (fold_key(k), k.clone()))
            .collect();
        Self { records, by_folded }
    }

    pub fn insert(&mut self, name: impl Into<String>, record: StateRecord) {
        let name = name.into();
        self.by_folded.insert(fold_key(&name), name.clone());
        self.records.insert(name, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// State names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl StateLookup for StateTable {
    fn exact(&self, name: &str) -> Option<&StateRecord> {
        self.records.get(name)
    }

    fn folded(&self, key: &str) -> Option<&StateRecord> {
        self.by_folded.get(key).and_then(|k| self.records.get(k))
    }
}

impl Serialize for StateTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, StateRecord>::deserialize(deserializer).map(Self::from_records)
    }
}

/// A remote table laid over a base table.
///
/// A record present in `overlay` shadows the base record of the same name
/// entirely; the two are not merged field by field.
#[derive(Clone, Copy, Debug)]
pub struct LayeredTable<'a, O: StateLookup, B: StateLookup> {
    pub overlay: &'a O,
    pub base: &'a B,
}

impl<'a, O: StateLookup, B: StateLookup> LayeredTable<'a, O, B> {
    pub fn new(overlay: &'a O, base: &'a B) -> Self {
        Self { overlay, base }
    }
}

impl<O: StateLookup, B: StateLookup> StateLookup for LayeredTable<'_, O, B> {
    fn exact(&self, name: &str) -> Option<&StateRecord> {
        self.overlay.exact(name).or_else(|| self.base.exact(name))
    }

    fn folded(&self, key: &str) -> Option<&StateRecord> {
        self.overlay.folded(key).or_else(|| self.base.folded(key))
    }

    fn record(&self, name: &str) -> Option<&StateRecord> {
        let key = fold_key(name);
        self.overlay
            .exact(name)
            .or_else(|| self.overlay.folded(&key))
            .or_else(|| self.base.exact(name))
            .or_else(|| self.base.folded(&key))
    }
}
