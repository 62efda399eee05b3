// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for census vocabulary.
//!
//! Relationship names and transcript labels for every census language,
//! embedded as static tables.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] with its `code()` and `from_code()` arms
//! 2. Create a `const XX: &[(&str, &str)]` table below
//! 3. Add `Lang::Xx => XX` to the match in `catalog_for()`

use serde::{Deserialize, Serialize};

/// Languages with a census vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Da,
    De,
    Fr,
    Cs,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Da => "da",
            Lang::De => "de",
            Lang::Fr => "fr",
            Lang::Cs => "cs",
        }
    }

    /// Parse an ISO 639-1 code. Case-sensitive, lowercase only.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "da" => Some(Lang::Da),
            "de" => Some(Lang::De),
            "fr" => Some(Lang::Fr),
            "cs" => Some(Lang::Cs),
            _ => None,
        }
    }

    /// Language of a locale tag such as `en-GB` or `da`. Unknown languages
    /// fall back to English.
    pub fn from_locale(tag: &str) -> Lang {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        Lang::from_code(&primary).unwrap_or_default()
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Da, Lang::De, Lang::Fr, Lang::Cs]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key, falling back to English. Unknown keys give `""`.
///
/// ```
/// use treeline::locale::{t, Lang};
/// assert_eq!(t(Lang::En, "relation.daughter"), "daughter");
/// assert_eq!(t(Lang::Da, "relation.daughter"), "datter");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Like [`t`] but returns the key itself when nothing matches.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Da => DA,
        Lang::De => DE,
        Lang::Fr => FR,
        Lang::Cs => CS,
    }
}

// ─── English (every key is defined here) ──────────────

const EN: &[(&str, &str)] = &[
    ("relation.head", "head"),
    ("relation.husband", "husband"),
    ("relation.wife", "wife"),
    ("relation.spouse", "spouse"),
    ("relation.son", "son"),
    ("relation.daughter", "daughter"),
    ("relation.child", "child"),
    ("relation.son_in_law", "son-in-law"),
    ("relation.daughter_in_law", "daughter-in-law"),
    ("relation.child_in_law", "child-in-law"),
    ("relation.grandson", "grandson"),
    ("relation.granddaughter", "granddaughter"),
    ("relation.grandchild", "grandchild"),
    ("relation.father", "father"),
    ("relation.mother", "mother"),
    ("relation.parent", "parent"),
    ("relation.father_in_law", "father-in-law"),
    ("relation.mother_in_law", "mother-in-law"),
    ("relation.parent_in_law", "parent-in-law"),
    ("relation.brother", "brother"),
    ("relation.sister", "sister"),
    ("relation.sibling", "sibling"),
    ("relation.brother_in_law", "brother-in-law"),
    ("relation.sister_in_law", "sister-in-law"),
    ("relation.sibling_in_law", "sibling-in-law"),
    ("relation.nephew", "nephew"),
    ("relation.niece", "niece"),
    ("relation.sibling_child", "nephew or niece"),
    ("relation.grandfather", "grandfather"),
    ("relation.grandmother", "grandmother"),
    ("relation.grandparent", "grandparent"),
    ("transcript.title", "Census transcript"),
    ("transcript.head", "Head of household"),
];

// ─── Danish ─────────────────────────────────────────────────────────

const DA: &[(&str, &str)] = &[
    ("relation.head", "husfader"),
    ("relation.husband", "ægtemand"),
    ("relation.wife", "hustru"),
    ("relation.spouse", "ægtefælle"),
    ("relation.son", "søn"),
    ("relation.daughter", "datter"),
    ("relation.child", "barn"),
    ("relation.son_in_law", "svigersøn"),
    ("relation.daughter_in_law", "svigerdatter"),
    ("relation.child_in_law", "svigerbarn"),
    ("relation.grandson", "barnebarn"),
    ("relation.granddaughter", "barnebarn"),
    ("relation.grandchild", "barnebarn"),
    ("relation.father", "fader"),
    ("relation.mother", "moder"),
    ("relation.parent", "forælder"),
    ("relation.father_in_law", "svigerfader"),
    ("relation.mother_in_law", "svigermoder"),
    ("relation.parent_in_law", "svigerforælder"),
    ("relation.brother", "broder"),
    ("relation.sister", "søster"),
    ("relation.sibling", "søskende"),
    ("relation.brother_in_law", "svoger"),
    ("relation.sister_in_law", "svigerinde"),
    ("relation.sibling_in_law", "svoger"),
    ("relation.nephew", "brodersøn"),
    ("relation.niece", "broderdatter"),
    ("relation.sibling_child", "nevø eller niece"),
    ("relation.grandfather", "bedstefader"),
    ("relation.grandmother", "bedstemoder"),
    ("relation.grandparent", "bedsteforælder"),
    ("transcript.title", "Folketælling"),
    ("transcript.head", "Husstandens overhoved"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("relation.head", "Haushaltungsvorstand"),
    ("relation.husband", "Ehemann"),
    ("relation.wife", "Ehefrau"),
    ("relation.spouse", "Ehegatte"),
    ("relation.son", "Sohn"),
    ("relation.daughter", "Tochter"),
    ("relation.child", "Kind"),
    ("relation.son_in_law", "Schwiegersohn"),
    ("relation.daughter_in_law", "Schwiegertochter"),
    ("relation.child_in_law", "Schwiegerkind"),
    ("relation.grandson", "Enkel"),
    ("relation.granddaughter", "Enkelin"),
    ("relation.grandchild", "Enkelkind"),
    ("relation.father", "Vater"),
    ("relation.mother", "Mutter"),
    ("relation.parent", "Elternteil"),
    ("relation.father_in_law", "Schwiegervater"),
    ("relation.mother_in_law", "Schwiegermutter"),
    ("relation.parent_in_law", "Schwiegerelternteil"),
    ("relation.brother", "Bruder"),
    ("relation.sister", "Schwester"),
    ("relation.sibling", "Geschwister"),
    ("relation.brother_in_law", "Schwager"),
    ("relation.sister_in_law", "Schwägerin"),
    ("relation.sibling_in_law", "Verschwägerte"),
    ("relation.nephew", "Neffe"),
    ("relation.niece", "Nichte"),
    ("relation.sibling_child", "Neffe oder Nichte"),
    ("relation.grandfather", "Großvater"),
    ("relation.grandmother", "Großmutter"),
    ("relation.grandparent", "Großelternteil"),
    ("transcript.title", "Volkszählung"),
    ("transcript.head", "Haushaltungsvorstand"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("relation.head", "chef"),
    ("relation.husband", "époux"),
    ("relation.wife", "épouse"),
    ("relation.spouse", "conjoint"),
    ("relation.son", "fils"),
    ("relation.daughter", "fille"),
    ("relation.child", "enfant"),
    ("relation.son_in_law", "gendre"),
    ("relation.daughter_in_law", "belle-fille"),
    ("relation.child_in_law", "bel-enfant"),
    ("relation.grandson", "petit-fils"),
    ("relation.granddaughter", "petite-fille"),
    ("relation.grandchild", "petit-enfant"),
    ("relation.father", "père"),
    ("relation.mother", "mère"),
    ("relation.parent", "parent"),
    ("relation.father_in_law", "beau-père"),
    ("relation.mother_in_law", "belle-mère"),
    ("relation.parent_in_law", "beau-parent"),
    ("relation.brother", "frère"),
    ("relation.sister", "sœur"),
    ("relation.sibling", "germain"),
    ("relation.brother_in_law", "beau-frère"),
    ("relation.sister_in_law", "belle-sœur"),
    ("relation.sibling_in_law", "allié"),
    ("relation.nephew", "neveu"),
    ("relation.niece", "nièce"),
    ("relation.sibling_child", "neveu ou nièce"),
    ("relation.grandfather", "grand-père"),
    ("relation.grandmother", "grand-mère"),
    ("relation.grandparent", "grand-parent"),
    ("transcript.title", "Recensement"),
    ("transcript.head", "Chef de ménage"),
];

// ─── Czech ──────────────────────────────────────────────────────────

const CS: &[(&str, &str)] = &[
    ("relation.head", "přednosta"),
    ("relation.husband", "manžel"),
    ("relation.wife", "manželka"),
    ("relation.spouse", "choť"),
    ("relation.son", "syn"),
    ("relation.daughter", "dcera"),
    ("relation.child", "dítě"),
    ("relation.son_in_law", "zeť"),
    ("relation.daughter_in_law", "snacha"),
    ("relation.child_in_law", "zeť nebo snacha"),
    ("relation.grandson", "vnuk"),
    ("relation.granddaughter", "vnučka"),
    ("relation.grandchild", "vnouče"),
    ("relation.father", "otec"),
    ("relation.mother", "matka"),
    ("relation.parent", "rodič"),
    ("relation.father_in_law", "tchán"),
    ("relation.mother_in_law", "tchyně"),
    ("relation.parent_in_law", "tchán nebo tchyně"),
    ("relation.brother", "bratr"),
    ("relation.sister", "sestra"),
    ("relation.sibling", "sourozenec"),
    ("relation.brother_in_law", "švagr"),
    ("relation.sister_in_law", "švagrová"),
    ("relation.sibling_in_law", "švagr nebo švagrová"),
    ("relation.nephew", "synovec"),
    ("relation.niece", "neteř"),
    ("relation.sibling_child", "synovec nebo neteř"),
    ("relation.grandfather", "děd"),
    ("relation.grandmother", "babička"),
    ("relation.grandparent", "prarodič"),
    ("transcript.title", "Sčítání lidu"),
    ("transcript.head", "Přednosta domácnosti"),
];
