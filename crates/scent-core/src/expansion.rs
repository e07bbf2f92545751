//! Expansion graph — synonym and intent relations between search terms.
//!
//! The graph is authored as undirected [`Relation`]s rather than key→list
//! pairs, so "A expands to B" always implies "B expands to A":
//!
//! - a [`Relation::Clique`] links every member to every other member (true
//!   synonyms: sandalwood ⇄ santal ⇄ sandalo);
//! - a [`Relation::Star`] links a hub to each spoke and each spoke back to the
//!   hub only (intent words: "office" ⇄ clean, fresh, light — but "clean" does
//!   not expand to "light").
//!
//! [`ExpansionTable`] flattens the graph into one [`ExpansionEntry`] per term,
//! indexed by an FST for lookup.

use fst::Map;
use phf::phf_map;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Alternatives listed in a generated entry label before it is elided.
const LABEL_ALTERNATIVES: usize = 4;

/// One undirected relation of the expansion graph.
#[derive(Debug, Clone, Copy)]
pub enum Relation {
    Clique(&'static [&'static str]),
    Star(&'static str, &'static [&'static str]),
}

impl Relation {
    /// Terms this relation links `term` to, in authored order.
    fn neighbours(&self, term: &str) -> Vec<&'static str> {
        match *self {
            Relation::Clique(members) if members.iter().any(|m| *m == term) => {
                members.iter().copied().filter(|m| *m != term).collect()
            }
            Relation::Star(hub, spokes) if hub == term => spokes.to_vec(),
            Relation::Star(hub, spokes) if spokes.iter().any(|s| *s == term) => vec![hub],
            _ => Vec::new(),
        }
    }

    fn terms(&self) -> impl Iterator<Item = &'static str> {
        let (head, rest): (Option<&'static str>, &'static [&'static str]) = match *self {
            Relation::Clique(members) => (None, members),
            Relation::Star(hub, spokes) => (Some(hub), spokes),
        };
        head.into_iter().chain(rest.iter().copied())
    }
}

/// The authored graph. All terms are already in normalized form.
pub const RELATIONS: &[Relation] = &[
    // Woods and resins
    Relation::Clique(&["sandalwood", "santal", "sandalo", "santalum", "sandal"]),
    Relation::Clique(&["ambroxan", "amberwood", "woody amber"]),
    Relation::Clique(&["ambergris", "ambroxan"]),
    Relation::Star("ambergris", &["salty amber", "marine amber"]),
    Relation::Star("ambery", &["amber", "resinous"]),
    Relation::Clique(&["incense", "olibanum", "frankincense"]),
    Relation::Clique(&["oud", "agarwood"]),
    // Florals and powders
    Relation::Clique(&["iris", "orris"]),
    Relation::Star("powdery", &["iris", "orris"]),
    // Sweet
    Relation::Clique(&["tonka", "coumarin"]),
    Relation::Star("tonka", &["sweet almond"]),
    Relation::Clique(&["vanilla", "vanille"]),
    Relation::Star("vanilla", &["creamy", "sweet"]),
    Relation::Star("vanille", &["creamy", "sweet"]),
    Relation::Star("sweet", &["gourmand", "sugary"]),
    Relation::Star("gourmand", &["dessert", "edible"]),
    // Citrus
    Relation::Star("citrus", &["bergamot", "grapefruit", "lemon", "lime", "orange"]),
    Relation::Star("bright", &["citrus", "bergamot", "grapefruit", "lemon", "lime", "orange"]),
    // Musks
    Relation::Clique(&["musk", "musky"]),
    Relation::Star("skin scent", &["musk", "musky"]),
    // Intent words
    Relation::Star("clean", &["fresh", "airy"]),
    Relation::Star("fresh", &["airy", "citrus", "green"]),
    Relation::Clique(&["blue", "aquatic", "marine", "ozonic"]),
    Relation::Star("blue", &["fresh"]),
    Relation::Star("marine", &["salty"]),
    Relation::Star("green", &["herbal", "leafy"]),
    Relation::Star("spicy", &["warm spicy", "pepper", "cardamom"]),
    Relation::Star("smoky", &["incense", "leather", "dark"]),
    Relation::Star("office", &["clean", "fresh", "light"]),
    Relation::Star("summer", &["fresh", "citrus", "blue"]),
    Relation::Star("winter", &["amber", "spicy", "vanilla"]),
    Relation::Star("night", &["dark", "amber", "spicy"]),
    Relation::Star("sexy", &["amber", "musk", "vanilla"]),
];

/// Hand-written banner wording for terms whose generated label reads poorly.
/// Terms not listed get `term ⇄ alt/alt/…`.
pub static LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "sandalwood" => "sandalwood ⇄ santal/sandalo",
    "santal" => "santal ⇄ sandalwood/sandalo",
    "sandalo" => "sandalo ⇄ sandalwood/santal",
    "santalum" => "santalum ⇄ sandalwood",
    "sandal" => "sandal ⇄ sandalwood/santal",
    "ambroxan" => "ambroxan ⇄ amberwood/ambergris",
    "amberwood" => "amberwood ⇄ ambroxan",
    "ambergris" => "ambergris ⇄ ambroxan/marine",
    "ambery" => "ambery ⇄ amber/resinous",
    "incense" => "incense ⇄ frankincense/olibanum",
    "frankincense" => "frankincense ⇄ incense/olibanum",
    "olibanum" => "olibanum ⇄ incense/frankincense",
    "iris" => "iris ⇄ orris/powdery",
    "orris" => "orris ⇄ iris/powdery",
    "citrus" => "citrus ⇄ bergamot/grapefruit/lemon/lime/orange",
    "bergamot" => "bergamot ⇄ citrus/bright",
    "grapefruit" => "grapefruit ⇄ citrus/bright",
    "lemon" => "lemon ⇄ citrus/bright",
    "lime" => "lime ⇄ citrus/bright",
    "orange" => "orange ⇄ citrus/bright",
    "vanilla" => "vanilla ⇄ creamy/sweet",
    "vanille" => "vanille ⇄ vanilla",
    "musky" => "musky ⇄ musk/skin scent",
    "musk" => "musk ⇄ musky/skin scent",
    "clean" => "clean ⇄ fresh/airy",
    "fresh" => "fresh ⇄ clean/airy/citrus/green",
    "blue" => "blue ⇄ aquatic/marine/ozonic",
    "aquatic" => "aquatic ⇄ marine/ozonic",
    "marine" => "marine ⇄ aquatic/salty",
    "green" => "green ⇄ herbal/leafy",
    "sweet" => "sweet ⇄ vanilla/gourmand",
    "gourmand" => "gourmand ⇄ dessert-like",
    "spicy" => "spicy ⇄ warm spice/pepper",
    "smoky" => "smoky ⇄ incense/dark",
    "winter" => "winter ⇄ amber/spice/vanilla",
    "night" => "night ⇄ dark/amber/spice",
};

/// Partial-substring inference: a typed term containing any needle pulls in
/// the whole family, so misspelled or truncated input ("sandalw") still
/// expands.
#[derive(Debug, Clone, Copy)]
pub struct FamilyInference {
    pub needles: &'static [&'static str],
    pub family: &'static [&'static str],
    pub label: &'static str,
}

pub const INFERENCES: &[FamilyInference] = &[
    FamilyInference {
        needles: &["santal", "sandalo", "sandal"],
        family: &["sandalwood", "santal", "sandalo", "santalum", "sandal"],
        label: "sandalwood family terms",
    },
    FamilyInference {
        needles: &["ambrox"],
        family: &["ambroxan", "amberwood", "woody amber"],
        label: "ambroxan family terms",
    },
];

impl FamilyInference {
    pub fn applies_to(&self, term: &str) -> bool {
        self.needles.iter().any(|n| term.contains(n))
    }
}

/// Interchangeable terms for one key plus a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionEntry {
    pub alternatives: Vec<&'static str>,
    pub label: String,
}

/// Read-only, process-wide view of [`RELATIONS`] keyed by term.
pub struct ExpansionTable {
    index: Map<Vec<u8>>,
    keys: Vec<&'static str>,
    entries: Vec<ExpansionEntry>,
}

static TABLE: LazyLock<ExpansionTable> = LazyLock::new(|| ExpansionTable::build(RELATIONS));

impl ExpansionTable {
    /// The table built from [`RELATIONS`].
    pub fn global() -> &'static ExpansionTable {
        &TABLE
    }

    /// Flatten `relations` into per-term entries.
    ///
    /// # Panics
    ///
    /// Panics if the FST index cannot be built, which only happens for
    /// unsorted input; keys come from a `BTreeMap`, so they never are.
    pub fn build(relations: &[Relation]) -> Self {
        let mut by_term: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for relation in relations {
            for term in relation.terms() {
                let alts = by_term.entry(term).or_default();
                for n in relation.neighbours(term) {
                    if !alts.contains(&n) {
                        alts.push(n);
                    }
                }
            }
        }

        let index = Map::from_iter(
            by_term
                .keys()
                .enumerate()
                .map(|(i, k)| (k.as_bytes(), i as u64)),
        )
        .expect("expansion keys are sorted and unique");

        let keys: Vec<&'static str> = by_term.keys().copied().collect();
        let entries = by_term
            .into_iter()
            .map(|(term, alternatives)| ExpansionEntry {
                label: entry_label(term, &alternatives),
                alternatives,
            })
            .collect();

        Self { index, keys, entries }
    }

    /// Exact-key lookup. `term` must already be normalized.
    pub fn entry(&self, term: &str) -> Option<&ExpansionEntry> {
        self.index
            .get(term)
            .and_then(|i| self.entries.get(i as usize))
    }

    /// Every `(key, entry)` pair in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &ExpansionEntry)> {
        self.keys.iter().copied().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry_label(term: &str, alternatives: &[&str]) -> String {
    if let Some(label) = LABELS.get(term) {
        return (*label).to_string();
    }
    let shown: Vec<&str> = alternatives.iter().take(LABEL_ALTERNATIVES).copied().collect();
    let more = if alternatives.len() > LABEL_ALTERNATIVES { "/…" } else { "" };
    format!("{term} ⇄ {}{more}", shown.join("/"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_entry_is_mirrored() {
        let table = ExpansionTable::global();
        for (key, entry) in table.entries() {
            for alt in &entry.alternatives {
                let back = table
                    .entry(alt)
                    .unwrap_or_else(|| panic!("{alt:?} (from {key:?}) has no entry"));
                assert!(
                    back.alternatives.contains(&key),
                    "{key:?} expands to {alt:?} but {alt:?} does not expand back"
                );
            }
        }
    }

    #[test]
    fn table_terms_are_normalized() {
        for (key, entry) in ExpansionTable::global().entries() {
            assert_eq!(normalize(key), key);
            for alt in &entry.alternatives {
                assert_eq!(normalize(alt), *alt);
            }
        }
    }

    #[test]
    fn no_entry_expands_to_itself() {
        for (key, entry) in ExpansionTable::global().entries() {
            assert!(!entry.alternatives.contains(&key), "{key:?} lists itself");
        }
    }

    #[test]
    fn inference_families_are_table_terms() {
        let table = ExpansionTable::global();
        for inference in INFERENCES {
            for term in inference.family {
                assert!(table.entry(term).is_some(), "{term:?} missing from table");
            }
        }
    }

    #[test]
    fn clique_links_all_members() {
        let e = ExpansionTable::global().entry("sandalo").expect("sandalo entry");
        assert_eq!(e.alternatives, vec!["sandalwood", "santal", "santalum", "sandal"]);
        assert_eq!(e.label, "sandalo ⇄ sandalwood/santal");
    }

    #[test]
    fn star_spokes_only_reach_the_hub() {
        let table = ExpansionTable::global();
        let light = table.entry("light").expect("light entry");
        assert_eq!(light.alternatives, vec!["office"]);
        assert!(!table.entry("clean").expect("clean entry").alternatives.contains(&"light"));
    }

    #[test]
    fn fresh_covers_its_intent_terms() {
        let fresh = ExpansionTable::global().entry("fresh").expect("fresh entry");
        for t in ["clean", "airy", "citrus", "green"] {
            assert!(fresh.alternatives.contains(&t), "fresh is missing {t}");
        }
    }

    #[test]
    fn unknown_term_has_no_entry() {
        assert!(ExpansionTable::global().entry("chypre").is_none());
        assert!(ExpansionTable::global().entry("").is_none());
    }

    #[test]
    fn long_generated_labels_are_elided() {
        let bright = ExpansionTable::global().entry("bright").expect("bright entry");
        assert!(bright.alternatives.len() > LABEL_ALTERNATIVES);
        assert_eq!(bright.label, "bright ⇄ citrus/bergamot/grapefruit/lemon/…");
    }

    #[test]
    fn hand_written_labels_override_generated_ones() {
        let table = ExpansionTable::global();
        let gourmand = table.entry("gourmand").expect("gourmand entry");
        assert_eq!(gourmand.label, "gourmand ⇄ dessert-like");
        let spicy = table.entry("spicy").expect("spicy entry");
        assert_eq!(spicy.label, "spicy ⇄ warm spice/pepper");
        // No override: generated from the graph.
        assert_eq!(table.entry("oud").expect("oud entry").label, "oud ⇄ agarwood");
    }

    #[test]
    fn every_label_override_names_a_table_term() {
        let table = ExpansionTable::global();
        for (term, label) in LABELS.entries() {
            assert!(table.entry(term).is_some(), "{term:?} has a label but no entry");
            assert!(label.starts_with(&format!("{term} ⇄ ")), "{label:?} does not lead with {term:?}");
        }
    }
}
