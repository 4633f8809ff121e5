//! Named-entity chunking.
//!
//! A chunker groups tagged tokens into typed entity spans. The result is a
//! flat [`ChunkTree`]: a sequence of plain tagged leaves and entity nodes,
//! in text order.

pub mod chunker;
pub mod gazetteer;

pub use chunker::{NamedEntityChunker, ne_chunk};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaplingError};
use crate::tagging::TaggedToken;

/// The type of a named entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// People, including fictional characters.
    Person,
    /// Geo-political entities: countries, states, cities.
    Gpe,
    /// Companies, agencies, institutions.
    Organization,
    /// Non-political locations: rivers, mountains, seas.
    Location,
    /// Buildings, airports, bridges.
    Facility,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Facility => "FACILITY",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PERSON" => Ok(EntityLabel::Person),
            "GPE" => Ok(EntityLabel::Gpe),
            "ORGANIZATION" => Ok(EntityLabel::Organization),
            "LOCATION" => Ok(EntityLabel::Location),
            "FACILITY" => Ok(EntityLabel::Facility),
            _ => Err(SaplingError::invalid_argument(format!(
                "Unknown entity label: {s}"
            ))),
        }
    }
}

/// A labelled span of tagged tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub leaves: Vec<TaggedToken>,
}

impl Entity {
    pub fn new(label: EntityLabel, leaves: Vec<TaggedToken>) -> Self {
        Entity { label, leaves }
    }

    /// The entity words joined with single spaces.
    pub fn text(&self) -> String {
        self.leaves
            .iter()
            .map(|leaf| leaf.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One element of a chunk tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkNode {
    Leaf(TaggedToken),
    Entity(Entity),
}

/// The chunked form of a tagged sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkTree {
    pub nodes: Vec<ChunkNode>,
}

impl ChunkTree {
    pub fn new(nodes: Vec<ChunkNode>) -> Self {
        ChunkTree { nodes }
    }

    /// All entity nodes, in text order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.nodes.iter().filter_map(|node| match node {
            ChunkNode::Entity(entity) => Some(entity),
            ChunkNode::Leaf(_) => None,
        })
    }

    /// Every tagged token, flattening entity nodes.
    pub fn leaves(&self) -> Vec<&TaggedToken> {
        self.nodes
            .iter()
            .flat_map(|node| match node {
                ChunkNode::Leaf(leaf) => std::slice::from_ref(leaf).iter(),
                ChunkNode::Entity(entity) => entity.leaves.iter(),
            })
            .collect()
    }
}

impl fmt::Display for ChunkTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(S")?;
        for node in &self.nodes {
            match node {
                ChunkNode::Leaf(leaf) => write!(f, " {leaf}")?,
                ChunkNode::Entity(entity) => {
                    write!(f, " ({}", entity.label)?;
                    for leaf in &entity.leaves {
                        write!(f, " {leaf}")?;
                    }
                    write!(f, ")")?;
                }
            }
        }
        write!(f, ")")
    }
}

/// Entity texts and labels from `tree`, keeping only the requested labels.
pub fn extract_entities(tree: &ChunkTree, labels: &[EntityLabel]) -> Vec<(String, EntityLabel)> {
    tree.entities()
        .filter(|entity| labels.contains(&entity.label))
        .map(|entity| (entity.text(), entity.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::PosTag;

    fn sample_tree() -> ChunkTree {
        ChunkTree::new(vec![
            ChunkNode::Entity(Entity::new(
                EntityLabel::Person,
                vec![
                    TaggedToken::new("Ada", PosTag::Nnp),
                    TaggedToken::new("Lovelace", PosTag::Nnp),
                ],
            )),
            ChunkNode::Leaf(TaggedToken::new("visited", PosTag::Vbd)),
            ChunkNode::Entity(Entity::new(
                EntityLabel::Organization,
                vec![TaggedToken::new("IBM", PosTag::Nnp)],
            )),
        ])
    }

    #[test]
    fn test_extract_entities_filters_labels() {
        let tree = sample_tree();
        assert_eq!(
            extract_entities(&tree, &[EntityLabel::Person, EntityLabel::Gpe]),
            vec![("Ada Lovelace".to_string(), EntityLabel::Person)]
        );
        assert!(extract_entities(&tree, &[]).is_empty());
    }

    #[test]
    fn test_tree_display() {
        assert_eq!(
            sample_tree().to_string(),
            "(S (PERSON Ada/NNP Lovelace/NNP) visited/VBD (ORGANIZATION IBM/NNP))"
        );
    }

    #[test]
    fn test_leaves_flatten_entities() {
        let tree = sample_tree();
        let words: Vec<&str> = tree.leaves().iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["Ada", "Lovelace", "visited", "IBM"]);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("gpe".parse::<EntityLabel>().unwrap(), EntityLabel::Gpe);
        assert_eq!(EntityLabel::Organization.to_string(), "ORGANIZATION");
        assert!("PLACE".parse::<EntityLabel>().is_err());
    }

    #[test]
    fn test_label_serde() {
        assert_eq!(serde_json::to_string(&EntityLabel::Gpe).unwrap(), r#""GPE""#);
    }
}
