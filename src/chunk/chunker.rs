//! Gazetteer and context based named-entity chunker.

use ahash::AHashMap;

use super::gazetteer::{
    FACILITY_CUE_SET, GEO_POLITICAL_SET, GIVEN_NAME_SET, LOCATION_CUE_SET, ORGANIZATION_CUE_SET,
    ORGANIZATION_SET, TITLE_SET,
};
use super::{ChunkNode, ChunkTree, Entity, EntityLabel};
use crate::error::Result;
use crate::tagging::TaggedToken;

/// Groups runs of proper nouns into entities and labels each run.
///
/// A run is a maximal sequence of `NNP`/`NNPS` tokens. Runs joined by `of`
/// or `&` are merged when the combined name looks like an organisation
/// (`Bank of America`). Leading titles (`President`, `Dr.`) stay outside the
/// span and mark it as a person.
///
/// Labels are decided in this order: user entries, geo-political gazetteer,
/// known organisations and organisation cue words, location and facility
/// cue words, known given names, the preceding preposition
/// (`in`/`from`/`at`/`to`/`near` suggest a place) and finally the span shape.
#[derive(Clone, Debug, Default)]
pub struct NamedEntityChunker {
    entries: AHashMap<String, EntityLabel>,
}

impl NamedEntityChunker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force `name` (matched case-insensitively) to `label`.
    pub fn with_entry<S: AsRef<str>>(mut self, name: S, label: EntityLabel) -> Self {
        self.entries.insert(name.as_ref().to_lowercase(), label);
        self
    }

    /// Chunk a tagged sentence.
    pub fn chunk(&self, tokens: &[TaggedToken]) -> Result<ChunkTree> {
        let mut nodes = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            if !tokens[i].tag.is_proper_noun() {
                nodes.push(ChunkNode::Leaf(tokens[i].clone()));
                i += 1;
                continue;
            }

            let mut end = proper_run_end(tokens, i);
            while end + 1 < tokens.len()
                && is_connector(&tokens[end])
                && tokens[end + 1].tag.is_proper_noun()
            {
                let next_end = proper_run_end(tokens, end + 1);
                if !has_organization_cue(&tokens[i..next_end]) {
                    break;
                }
                end = next_end;
            }

            let mut start = i;
            while start + 1 < end && TITLE_SET.contains(lowercase(&tokens[start]).as_str()) {
                nodes.push(ChunkNode::Leaf(tokens[start].clone()));
                start += 1;
            }

            let label = if start > i {
                EntityLabel::Person
            } else {
                let prev_word = i.checked_sub(1).map(|p| lowercase(&tokens[p]));
                self.label_span(&tokens[start..end], prev_word.as_deref())
            };

            log::debug!(
                "Chunked {label} span of {} token(s) at {start}",
                end - start
            );
            nodes.push(ChunkNode::Entity(Entity::new(
                label,
                tokens[start..end].to_vec(),
            )));
            i = end;
        }

        Ok(ChunkTree::new(nodes))
    }

    fn label_span(&self, span: &[TaggedToken], prev_word: Option<&str>) -> EntityLabel {
        let words: Vec<String> = span.iter().map(lowercase).collect();
        let text = words.join(" ");

        if let Some(label) = self.entries.get(&text) {
            return *label;
        }
        if GEO_POLITICAL_SET.contains(text.as_str()) {
            return EntityLabel::Gpe;
        }
        if ORGANIZATION_SET.contains(text.as_str()) || has_organization_cue(span) {
            return EntityLabel::Organization;
        }

        let last = words.last().map(String::as_str).unwrap_or_default();
        let first = words.first().map(String::as_str).unwrap_or_default();
        if LOCATION_CUE_SET.contains(last) || LOCATION_CUE_SET.contains(first) {
            return EntityLabel::Location;
        }
        if FACILITY_CUE_SET.contains(last) {
            return EntityLabel::Facility;
        }
        if GIVEN_NAME_SET.contains(first) {
            return EntityLabel::Person;
        }
        if matches!(prev_word, Some("in" | "from" | "at" | "to" | "near")) {
            return EntityLabel::Gpe;
        }
        if span.len() == 1 && is_all_caps(&span[0].word) {
            return EntityLabel::Organization;
        }
        EntityLabel::Person
    }
}

/// Chunk with the default chunker.
pub fn ne_chunk(tokens: &[TaggedToken]) -> Result<ChunkTree> {
    NamedEntityChunker::new().chunk(tokens)
}

fn lowercase(token: &TaggedToken) -> String {
    token.word.to_lowercase()
}

fn proper_run_end(tokens: &[TaggedToken], start: usize) -> usize {
    let mut end = start;
    while end < tokens.len() && tokens[end].tag.is_proper_noun() {
        end += 1;
    }
    end
}

fn is_connector(token: &TaggedToken) -> bool {
    matches!(token.word.as_str(), "of" | "&")
}

fn has_organization_cue(span: &[TaggedToken]) -> bool {
    span.iter()
        .any(|token| ORGANIZATION_CUE_SET.contains(lowercase(token).as_str()))
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::extract_entities;
    use crate::tagging::{PosTag, pos_tag};

    fn tokens(pairs: &[(&str, PosTag)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(word, tag)| TaggedToken::new(*word, *tag))
            .collect()
    }

    #[test]
    fn test_obama_sentence() {
        let tagged =
            pos_tag("Barack Obama was born in Hawaii. He was elected president of the USA.")
                .unwrap();
        let tree = ne_chunk(&tagged).unwrap();

        assert_eq!(
            extract_entities(&tree, &[EntityLabel::Person, EntityLabel::Gpe]),
            vec![
                ("Barack Obama".to_string(), EntityLabel::Person),
                ("Hawaii".to_string(), EntityLabel::Gpe),
                ("USA".to_string(), EntityLabel::Gpe),
            ]
        );
        assert_eq!(tree.leaves().len(), tagged.len());
    }

    #[test]
    fn test_organization_with_connector() {
        let tagged = tokens(&[
            ("He", PosTag::Prp),
            ("joined", PosTag::Vbd),
            ("the", PosTag::Dt),
            ("Bank", PosTag::Nnp),
            ("of", PosTag::In),
            ("America", PosTag::Nnp),
        ]);
        let tree = ne_chunk(&tagged).unwrap();
        let entities: Vec<&Entity> = tree.entities().collect();

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text(), "Bank of America");
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_connector_without_cue_splits() {
        let tagged = tokens(&[
            ("Paris", PosTag::Nnp),
            ("of", PosTag::In),
            ("Troy", PosTag::Nnp),
        ]);
        let tree = ne_chunk(&tagged).unwrap();
        assert_eq!(tree.entities().count(), 2);
    }

    #[test]
    fn test_title_marks_person() {
        let tagged = tokens(&[
            ("President", PosTag::Nnp),
            ("Lincoln", PosTag::Nnp),
            ("spoke", PosTag::Vbd),
        ]);
        let tree = ne_chunk(&tagged).unwrap();

        assert_eq!(
            extract_entities(&tree, &[EntityLabel::Person]),
            vec![("Lincoln".to_string(), EntityLabel::Person)]
        );
        assert_eq!(tree.nodes.len(), 3);
    }

    #[test]
    fn test_context_and_shape_fallbacks() {
        let chunker = NamedEntityChunker::new();
        let moved = tokens(&[
            ("She", PosTag::Prp),
            ("moved", PosTag::Vbd),
            ("to", PosTag::To),
            ("Springfield", PosTag::Nnp),
        ]);
        let tree = chunker.chunk(&moved).unwrap();
        assert_eq!(tree.entities().next().unwrap().label, EntityLabel::Gpe);

        let acronym = tokens(&[("ACME", PosTag::Nnp), ("grew", PosTag::Vbd)]);
        let tree = chunker.chunk(&acronym).unwrap();
        assert_eq!(
            tree.entities().next().unwrap().label,
            EntityLabel::Organization
        );
    }

    #[test]
    fn test_known_organizations_and_places() {
        let tagged = tokens(&[
            ("Google", PosTag::Nnp),
            ("opened", PosTag::Vbd),
            ("near", PosTag::In),
            ("Lake", PosTag::Nnp),
            ("Geneva", PosTag::Nnp),
        ]);
        let tree = ne_chunk(&tagged).unwrap();
        let labels: Vec<EntityLabel> = tree.entities().map(|e| e.label).collect();
        assert_eq!(labels, vec![EntityLabel::Organization, EntityLabel::Location]);
    }

    #[test]
    fn test_custom_entry() {
        let chunker = NamedEntityChunker::new().with_entry("Sapling", EntityLabel::Organization);
        let tagged = tokens(&[("Sapling", PosTag::Nnp)]);
        let tree = chunker.chunk(&tagged).unwrap();
        assert_eq!(
            tree.entities().next().unwrap().label,
            EntityLabel::Organization
        );
    }
}
