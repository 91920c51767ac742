//! Diagram element → navigation URL mapping.
//!
//! The diagram's text elements carry `data-cluster="text-…"` attributes. This
//! module knows the full set of them, derives a display label for each, and
//! turns a user-supplied mapping file into:
//!
//! - `navigation_dictionary.json`: `{ element id: { name, url, original } }`
//! - `navigation_code.js`: a snippet the viewer loads to make elements clickable
//!
//! Mapping file format (`name` is optional and defaults to the label):
//!
//! ```json
//! {
//!   "text-observer": { "name": "Observer Theory", "url": "pages/observer.html" },
//!   "text-ontology": { "url": "pages/ontology.html" }
//! }
//! ```
//!
//! Output entries follow the element table order, not the mapping file order.

use crate::loader::{self, LoadError};
use crate::writer::{self, WriteError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DICTIONARY_FILENAME: &str = "navigation_dictionary.json";
pub const SCRIPT_FILENAME: &str = "navigation_code.js";

const SCRIPT_TEMPLATE: &str = include_str!("../static/navigation.js");
const SCRIPT_DATA_MARKER: &str = "__NAVIGATION_DATA__";

/// Every clickable text element in the diagram, in diagram order.
pub const TEXT_ELEMENTS: [&str; 19] = [
    "text-machine-encoding",
    "text-encoding",
    "text-territory",
    "text-relational",
    "text-contact",
    "text-atavic",
    "text-ontology",
    "text-point",
    "text-synthesis",
    "text-precognitive",
    "text-ontogeny",
    "text-selected",
    "text-decoder",
    "text-lateral",
    "text-poetics",
    "text-manifestation",
    "text-object",
    "text-prompt",
    "text-observer",
];

/// Labels that differ from the mechanical `text-foo-bar` → `FOO BAR` rule.
const LABEL_OVERRIDES: &[(&str, &str)] = &[("PRECOGNITIVE", "PRECOGNITIVE STRUCTURES")];

#[derive(Error, Debug)]
pub enum MapError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Readable label for an element id.
///
/// `text-machine-encoding` → `MACHINE ENCODING`,
/// `text-precognitive` → `PRECOGNITIVE STRUCTURES`.
pub fn format_label(element_id: &str) -> String {
    let base = element_id
        .strip_prefix("text-")
        .unwrap_or(element_id)
        .replace('-', " ")
        .to_uppercase();
    LABEL_OVERRIDES
        .iter()
        .find(|(from, _)| *from == base)
        .map(|(_, to)| to.to_string())
        .unwrap_or(base)
}

pub fn is_known_element(element_id: &str) -> bool {
    element_position(element_id).is_some()
}

fn element_position(element_id: &str) -> Option<usize> {
    TEXT_ELEMENTS.iter().position(|e| *e == element_id)
}

/// One entry of the mapping file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Where one element navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub url: String,
    /// The element's derived label, kept even when `name` overrides it.
    pub original: String,
}

/// Element mappings keyed by position in [`TEXT_ELEMENTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationMap {
    entries: BTreeMap<usize, NavEntry>,
}

/// Mapping-file entries that were not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingIssues {
    pub unknown_elements: Vec<String>,
    pub missing_url: Vec<String>,
}

impl MappingIssues {
    pub fn is_empty(&self) -> bool {
        self.unknown_elements.is_empty() && self.missing_url.is_empty()
    }
}

impl NavigationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a known element. Returns `false` (and changes nothing) for ids
    /// outside [`TEXT_ELEMENTS`].
    pub fn insert(&mut self, element_id: &str, name: Option<&str>, url: &str) -> bool {
        let Some(pos) = element_position(element_id) else {
            return false;
        };
        let label = format_label(element_id);
        let name = name
            .filter(|n| !n.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| label.clone());
        self.entries.insert(
            pos,
            NavEntry {
                name,
                url: url.to_string(),
                original: label,
            },
        );
        true
    }

    /// Apply every usable entry from a mapping file.
    pub fn apply_mappings(&mut self, mappings: &BTreeMap<String, MappingInput>) -> MappingIssues {
        let mut issues = MappingIssues::default();
        for (element_id, input) in mappings {
            if !is_known_element(element_id) {
                warn!(element = %element_id, "ignoring unknown element");
                issues.unknown_elements.push(element_id.clone());
                continue;
            }
            match input.url.as_deref().filter(|u| !u.trim().is_empty()) {
                Some(url) => {
                    self.insert(element_id, input.name.as_deref(), url);
                }
                None => {
                    warn!(element = %element_id, "skipping mapping without url");
                    issues.missing_url.push(element_id.clone());
                }
            }
        }
        issues
    }

    pub fn get(&self, element_id: &str) -> Option<&NavEntry> {
        element_position(element_id).and_then(|pos| self.entries.get(&pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(element id, entry)` pairs in diagram order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &NavEntry)> {
        self.entries
            .iter()
            .map(|(pos, entry)| (TEXT_ELEMENTS[*pos], entry))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_javascript(&self) -> Result<String, serde_json::Error> {
        let data = self.to_json()?;
        Ok(SCRIPT_TEMPLATE.replacen(SCRIPT_DATA_MARKER, &data, 1))
    }
}

impl Serialize for NavigationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (element_id, entry) in self.iter() {
            map.serialize_entry(element_id, entry)?;
        }
        map.end()
    }
}

/// Inputs for one mapping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    pub mappings: PathBuf,
    pub out_dir: PathBuf,
}

#[derive(Debug)]
pub struct MapReport {
    pub navigation: NavigationMap,
    pub issues: MappingIssues,
    /// Files written; empty when nothing was mapped.
    pub outputs: Vec<PathBuf>,
}

/// Load a mapping file and, if anything mapped, write the dictionary and
/// the viewer script into `options.out_dir`.
pub fn run(options: &MapOptions) -> Result<MapReport, MapError> {
    let mappings: BTreeMap<String, MappingInput> = loader::read_json(&options.mappings)?;
    let mut navigation = NavigationMap::new();
    let issues = navigation.apply_mappings(&mappings);

    let mut outputs = Vec::new();
    if !navigation.is_empty() {
        outputs.push(write_output(
            &options.out_dir,
            DICTIONARY_FILENAME,
            &navigation.to_json()?,
        )?);
        outputs.push(write_output(
            &options.out_dir,
            SCRIPT_FILENAME,
            &navigation.to_javascript()?,
        )?);
    }

    Ok(MapReport {
        navigation,
        issues,
        outputs,
    })
}

fn write_output(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, WriteError> {
    let path = writer::write_file(dir, filename, contents)?;
    info!(path = %path.display(), "saved");
    Ok(path)
}
