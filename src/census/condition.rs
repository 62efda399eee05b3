// SPDX-License-Identifier: PMPL-1.0-or-later

//! Marital condition at the census date.
//!
//! The condition is worked out once ([`Condition::at`]) and then spelled
//! with the vocabulary of the census form. Some French forms use one
//! column per condition and mark the matching one with `1`.

use crate::date::{age_years, GedcomDate};
use crate::types::{Family, Individual, Sex};

/// Marital condition of an individual on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Unmarried and below the vocabulary's child age.
    Child,
    Single,
    Married,
    Widowed,
    Divorced,
}

impl Condition {
    /// Decide the condition of `individual` on `date`. `child_age` gives
    /// the age below which an unmarried person counts as a child.
    pub fn at(individual: Individual<'_>, date: &GedcomDate, child_age: impl Fn(Sex) -> i32) -> Self {
        let Some(family) = spouse_family(individual, date) else {
            let is_child = individual
                .birth_date()
                .map(|birth| age_years(birth, date) < child_age(individual.sex()))
                .unwrap_or(false);
            return if is_child {
                Condition::Child
            } else {
                Condition::Single
            };
        };

        let divorced = family.is_divorced()
            && family
                .divorce_date()
                .map(|divorce| divorce.is_before(date))
                .unwrap_or(true);
        if divorced {
            return Condition::Divorced;
        }

        match family.spouse_of(&individual) {
            Some(spouse) if spouse.died_before(date) => Condition::Widowed,
            _ => Condition::Married,
        }
    }
}

/// The latest spouse family with a marriage dated before `date`.
pub(crate) fn spouse_family<'t>(individual: Individual<'t>, date: &GedcomDate) -> Option<Family<'t>> {
    individual
        .spouse_families()
        .into_iter()
        .filter_map(|family| {
            let married = family.marriage_date()?;
            married.is_before(date).then_some((married.min_date(), family))
        })
        .max_by_key(|(married, _)| *married)
        .map(|(_, family)| family)
}

/// Words for each condition, by sex. Unknown sex uses the male word.
#[derive(Debug, Clone, Copy)]
pub struct ConditionVocabulary {
    pub husband: &'static str,
    pub wife: &'static str,
    pub bachelor: &'static str,
    pub spinster: &'static str,
    pub boy: &'static str,
    pub girl: &'static str,
    pub divorce: &'static str,
    pub divorcee: &'static str,
    pub widower: &'static str,
    pub widow: &'static str,
    pub age_boy: i32,
    pub age_girl: i32,
}

impl ConditionVocabulary {
    const fn new() -> Self {
        Self {
            husband: "",
            wife: "",
            bachelor: "",
            spinster: "",
            boy: "",
            girl: "",
            divorce: "",
            divorcee: "",
            widower: "",
            widow: "",
            age_boy: 14,
            age_girl: 12,
        }
    }

    pub fn child_age(&self, sex: Sex) -> i32 {
        match sex {
            Sex::Female => self.age_girl,
            _ => self.age_boy,
        }
    }

    pub fn word(&self, condition: Condition, sex: Sex) -> &'static str {
        let female = sex == Sex::Female;
        let (male_word, female_word) = match condition {
            Condition::Child => (self.boy, self.girl),
            Condition::Single => (self.bachelor, self.spinster),
            Condition::Married => (self.husband, self.wife),
            Condition::Widowed => (self.widower, self.widow),
            Condition::Divorced => (self.divorce, self.divorcee),
        };
        if female {
            female_word
        } else {
            male_word
        }
    }

    /// Condition of `individual` at `date`, in this vocabulary.
    pub fn describe(&self, individual: Individual<'_>, date: &GedcomDate) -> &'static str {
        let sex = individual.sex();
        let condition = Condition::at(individual, date, |sex| self.child_age(sex));
        self.word(condition, sex)
    }
}

pub const ENGLISH: ConditionVocabulary = ConditionVocabulary {
    husband: "Mar",
    wife: "Mar",
    bachelor: "Unm",
    spinster: "Unm",
    divorce: "Div",
    divorcee: "Div",
    widower: "Wid",
    widow: "Wid",
    ..ConditionVocabulary::new()
};

pub const DANISH: ConditionVocabulary = ConditionVocabulary {
    husband: "Gift",
    wife: "Gift",
    bachelor: "Ugift",
    spinster: "Ugift",
    divorce: "Skilt",
    divorcee: "Skilt",
    widower: "Enkemand",
    widow: "Enke",
    ..ConditionVocabulary::new()
};

pub const US: ConditionVocabulary = ConditionVocabulary {
    husband: "M",
    wife: "M",
    bachelor: "S",
    spinster: "S",
    boy: "S",
    girl: "S",
    divorce: "D",
    divorcee: "D",
    widower: "W",
    widow: "W",
    ..ConditionVocabulary::new()
};

pub const GERMAN: ConditionVocabulary = ConditionVocabulary {
    husband: "verh.",
    wife: "verh.",
    bachelor: "ledig",
    spinster: "ledig",
    boy: "ledig",
    girl: "ledig",
    divorce: "gesch.",
    divorcee: "gesch.",
    widower: "verw.",
    widow: "verw.",
    ..ConditionVocabulary::new()
};

pub const CZECH: ConditionVocabulary = ConditionVocabulary {
    husband: "ženatý",
    wife: "vdaná",
    bachelor: "svobodný",
    spinster: "svobodná",
    boy: "svobodný",
    girl: "svobodná",
    divorce: "rozvedený",
    divorcee: "rozvedená",
    widower: "vdovec",
    widow: "vdova",
    ..ConditionVocabulary::new()
};

/// French mark columns: each is `1` for exactly one condition and sex.
const fn mark(condition: MarkOn) -> ConditionVocabulary {
    let mut vocabulary = ConditionVocabulary::new();
    match condition {
        MarkOn::Garcon => {
            vocabulary.boy = "1";
            vocabulary.bachelor = "1";
        }
        MarkOn::Homme => vocabulary.husband = "1",
        MarkOn::Veuf => vocabulary.widower = "1",
        MarkOn::Fille => {
            vocabulary.girl = "1";
            vocabulary.spinster = "1";
        }
        MarkOn::Femme => vocabulary.wife = "1",
        MarkOn::Veuve => vocabulary.widow = "1",
    }
    vocabulary
}

#[derive(Clone, Copy)]
enum MarkOn {
    Garcon,
    Homme,
    Veuf,
    Fille,
    Femme,
    Veuve,
}

pub const FRENCH_GARCON: ConditionVocabulary = mark(MarkOn::Garcon);
pub const FRENCH_HOMME: ConditionVocabulary = mark(MarkOn::Homme);
pub const FRENCH_VEUF: ConditionVocabulary = mark(MarkOn::Veuf);
pub const FRENCH_FILLE: ConditionVocabulary = mark(MarkOn::Fille);
pub const FRENCH_FEMME: ConditionVocabulary = mark(MarkOn::Femme);
pub const FRENCH_VEUVE: ConditionVocabulary = mark(MarkOn::Veuve);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, FamilyRecord, IndividualRecord, Tree};

    fn date(text: &str) -> GedcomDate {
        GedcomDate::parse(text).unwrap()
    }

    fn person(xref: &str, sex: Sex, born: &str) -> IndividualRecord {
        IndividualRecord::new(xref, sex).born(Event::dated(date(born)))
    }

    fn couple(family: FamilyRecord) -> Tree {
        Tree::new(
            vec![
                person("I1", Sex::Male, "1820"),
                person("I2", Sex::Female, "1825"),
                person("I3", Sex::Male, "1862"),
                person("I4", Sex::Female, "1801"),
            ],
            vec![family],
        )
    }

    #[test]
    fn married_couple() {
        let tree = couple(
            FamilyRecord::new("F1", Some("I1"), Some("I2")).married(Event::dated(date("1845"))),
        );
        let census = date("02 APR 1871");
        let husband = tree.individual("I1").unwrap();
        let wife = tree.individual("I2").unwrap();
        assert_eq!(ENGLISH.describe(husband, &census), "Mar");
        assert_eq!(DANISH.describe(wife, &census), "Gift");
        assert_eq!(CZECH.describe(husband, &census), "ženatý");
        assert_eq!(CZECH.describe(wife, &census), "vdaná");
        assert_eq!(FRENCH_HOMME.describe(husband, &census), "1");
        assert_eq!(FRENCH_FEMME.describe(husband, &census), "");
        assert_eq!(FRENCH_FEMME.describe(wife, &census), "1");
    }

    #[test]
    fn marriage_after_census_means_single() {
        let tree = couple(
            FamilyRecord::new("F1", Some("I1"), Some("I2")).married(Event::dated(date("1875"))),
        );
        let census = date("02 APR 1871");
        assert_eq!(ENGLISH.describe(tree.individual("I1").unwrap(), &census), "Unm");
        assert_eq!(US.describe(tree.individual("I2").unwrap(), &census), "S");
    }

    #[test]
    fn undated_marriage_is_ignored() {
        let tree = couple(FamilyRecord::new("F1", Some("I1"), Some("I2")).married(Event::default()));
        let census = date("1871");
        assert_eq!(GERMAN.describe(tree.individual("I1").unwrap(), &census), "ledig");
    }

    #[test]
    fn widowed_when_spouse_died() {
        let tree = Tree::new(
            vec![
                person("I1", Sex::Male, "1820"),
                person("I2", Sex::Female, "1825").died(Event::dated(date("1860"))),
            ],
            vec![FamilyRecord::new("F1", Some("I1"), Some("I2")).married(Event::dated(date("1845")))],
        );
        let census = date("02 APR 1871");
        let husband = tree.individual("I1").unwrap();
        assert_eq!(ENGLISH.describe(husband, &census), "Wid");
        assert_eq!(DANISH.describe(husband, &census), "Enkemand");
        assert_eq!(FRENCH_VEUF.describe(husband, &census), "1");
    }

    #[test]
    fn divorced() {
        let tree = couple(
            FamilyRecord::new("F1", Some("I1"), Some("I2"))
                .married(Event::dated(date("1845")))
                .divorced(Event::dated(date("1850"))),
        );
        let census = date("02 APR 1871");
        assert_eq!(ENGLISH.describe(tree.individual("I2").unwrap(), &census), "Div");
        assert_eq!(CZECH.describe(tree.individual("I2").unwrap(), &census), "rozvedená");
    }

    #[test]
    fn children_use_child_words() {
        let tree = couple(FamilyRecord::new("F1", Some("I1"), Some("I2")).with_children(&["I3"]));
        let census = date("02 APR 1871");
        let child = tree.individual("I3").unwrap();
        assert_eq!(ENGLISH.describe(child, &census), "");
        assert_eq!(US.describe(child, &census), "S");
        assert_eq!(FRENCH_GARCON.describe(child, &census), "1");
        // Unmarried adults are single.
        assert_eq!(ENGLISH.describe(child, &date("1890")), "Unm");
    }

    #[test]
    fn latest_marriage_wins() {
        let tree = Tree::new(
            vec![
                person("I1", Sex::Male, "1800"),
                person("I2", Sex::Female, "1801").died(Event::dated(date("1840"))),
                person("I4", Sex::Female, "1810"),
            ],
            vec![
                FamilyRecord::new("F1", Some("I1"), Some("I2")).married(Event::dated(date("1825"))),
                FamilyRecord::new("F2", Some("I1"), Some("I4")).married(Event::dated(date("1845"))),
            ],
        );
        let husband = tree.individual("I1").unwrap();
        assert_eq!(ENGLISH.describe(husband, &date("1842")), "Wid");
        assert_eq!(ENGLISH.describe(husband, &date("1851")), "Mar");
    }
}
