//! Named-entity extraction: tokenize, tag, chunk, keep the configured labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chunk::{EntityLabel, NamedEntityChunker, extract_entities};
use crate::config::SaplingConfig;
use crate::error::Result;
use crate::tagging::pos_tag;

pub const DEFAULT_TEXT: &str =
    "Barack Obama was born in Hawaii. He was elected president of the USA.";

/// Entities in text order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReport {
    pub entities: Vec<(String, EntityLabel)>,
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .entities
            .iter()
            .map(|(text, label)| format!("('{text}', '{label}')"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

pub fn run(text: &str, config: &SaplingConfig) -> Result<EntityReport> {
    let tagged = pos_tag(text)?;
    let tree = NamedEntityChunker::new().chunk(&tagged)?;
    log::debug!("{tree}");

    Ok(EntityReport {
        entities: extract_entities(&tree, &config.entities.labels),
    })
}
