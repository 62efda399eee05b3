// SPDX-License-Identifier: PMPL-1.0-or-later

//! Close relationships between a household member and the head.

use crate::locale::{t, Lang};
use crate::types::{Individual, Sex};

/// How `individual` is related to `head`, as a catalog key
/// (`relation.son`, ...). `None` when there is no close relationship.
pub fn relationship_key<'t>(head: Individual<'t>, individual: Individual<'t>) -> Option<&'static str> {
    if head == individual {
        return Some("relation.head");
    }

    let sex = individual.sex();
    let by_sex = |male: &'static str, female: &'static str, unknown: &'static str| match sex {
        Sex::Male => male,
        Sex::Female => female,
        Sex::Unknown => unknown,
    };

    let spouses = head.spouses();
    let children = head.children();
    let parents = head.parents();
    let siblings = head.siblings();

    if spouses.contains(&individual) {
        return Some(by_sex("relation.husband", "relation.wife", "relation.spouse"));
    }
    if children.contains(&individual) {
        return Some(by_sex("relation.son", "relation.daughter", "relation.child"));
    }
    if parents.contains(&individual) {
        return Some(by_sex("relation.father", "relation.mother", "relation.parent"));
    }
    if siblings.contains(&individual) {
        return Some(by_sex("relation.brother", "relation.sister", "relation.sibling"));
    }
    if children.iter().any(|child| child.spouses().contains(&individual)) {
        return Some(by_sex(
            "relation.son_in_law",
            "relation.daughter_in_law",
            "relation.child_in_law",
        ));
    }
    if spouses.iter().any(|spouse| spouse.parents().contains(&individual)) {
        return Some(by_sex(
            "relation.father_in_law",
            "relation.mother_in_law",
            "relation.parent_in_law",
        ));
    }
    if children.iter().any(|child| child.children().contains(&individual)) {
        return Some(by_sex(
            "relation.grandson",
            "relation.granddaughter",
            "relation.grandchild",
        ));
    }
    if parents.iter().any(|parent| parent.parents().contains(&individual)) {
        return Some(by_sex(
            "relation.grandfather",
            "relation.grandmother",
            "relation.grandparent",
        ));
    }
    let sibling_in_law = spouses
        .iter()
        .any(|spouse| spouse.siblings().contains(&individual))
        || siblings
            .iter()
            .any(|sibling| sibling.spouses().contains(&individual));
    if sibling_in_law {
        return Some(by_sex(
            "relation.brother_in_law",
            "relation.sister_in_law",
            "relation.sibling_in_law",
        ));
    }
    if siblings
        .iter()
        .any(|sibling| sibling.children().contains(&individual))
    {
        return Some(by_sex(
            "relation.nephew",
            "relation.niece",
            "relation.sibling_child",
        ));
    }
    None
}

/// The relationship of `individual` to `head`, in `lang`. Empty when
/// they are not closely related.
pub fn relationship_name<'t>(head: Individual<'t>, individual: Individual<'t>, lang: Lang) -> String {
    relationship_key(head, individual)
        .map(|key| t(lang, key).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FamilyRecord, IndividualRecord, Tree};

    /// Three generations: I1+I2 head couple with children I3 (son) and I4
    /// (daughter); I3 married I5 and has I6. I2's parents are I7 and I8.
    /// I1's sister I9 has a son I10 with husband I11.
    fn household() -> Tree {
        Tree::new(
            vec![
                IndividualRecord::new("I1", Sex::Male),
                IndividualRecord::new("I2", Sex::Female),
                IndividualRecord::new("I3", Sex::Male),
                IndividualRecord::new("I4", Sex::Female),
                IndividualRecord::new("I5", Sex::Female),
                IndividualRecord::new("I6", Sex::Unknown),
                IndividualRecord::new("I7", Sex::Male),
                IndividualRecord::new("I8", Sex::Female),
                IndividualRecord::new("I9", Sex::Female),
                IndividualRecord::new("I10", Sex::Male),
                IndividualRecord::new("I11", Sex::Male),
                IndividualRecord::new("I12", Sex::Male),
                IndividualRecord::new("I13", Sex::Male),
            ],
            vec![
                FamilyRecord::new("F1", Some("I1"), Some("I2")).with_children(&["I3", "I4"]),
                FamilyRecord::new("F2", Some("I3"), Some("I5")).with_children(&["I6"]),
                FamilyRecord::new("F3", Some("I7"), Some("I8")).with_children(&["I2"]),
                FamilyRecord::new("F4", Some("I12"), None).with_children(&["I1", "I9"]),
                FamilyRecord::new("F5", Some("I11"), Some("I9")).with_children(&["I10"]),
            ],
        )
    }

    fn key(tree: &Tree, xref: &str) -> Option<&'static str> {
        let head = tree.individual("I1").unwrap();
        relationship_key(head, tree.individual(xref).unwrap())
    }

    #[test]
    fn close_relationships() {
        let tree = household();
        assert_eq!(key(&tree, "I1"), Some("relation.head"));
        assert_eq!(key(&tree, "I2"), Some("relation.wife"));
        assert_eq!(key(&tree, "I3"), Some("relation.son"));
        assert_eq!(key(&tree, "I4"), Some("relation.daughter"));
        assert_eq!(key(&tree, "I5"), Some("relation.daughter_in_law"));
        assert_eq!(key(&tree, "I6"), Some("relation.grandchild"));
        assert_eq!(key(&tree, "I7"), Some("relation.father_in_law"));
        assert_eq!(key(&tree, "I8"), Some("relation.mother_in_law"));
        assert_eq!(key(&tree, "I9"), Some("relation.sister"));
        assert_eq!(key(&tree, "I10"), Some("relation.nephew"));
        assert_eq!(key(&tree, "I11"), Some("relation.brother_in_law"));
        assert_eq!(key(&tree, "I12"), Some("relation.father"));
        assert_eq!(key(&tree, "I13"), None);
    }

    #[test]
    fn localized_names() {
        let tree = household();
        let head = tree.individual("I1").unwrap();
        let son = tree.individual("I3").unwrap();
        assert_eq!(relationship_name(head, son, Lang::En), "son");
        assert_eq!(relationship_name(head, son, Lang::Da), "søn");
        assert_eq!(relationship_name(head, head, Lang::De), "Haushaltungsvorstand");
        let stranger = tree.individual("I13").unwrap();
        assert_eq!(relationship_name(head, stranger, Lang::En), "");
    }

    #[test]
    fn relative_to_other_head() {
        let tree = household();
        let head = tree.individual("I3").unwrap();
        let grandmother = tree.individual("I8").unwrap();
        let father = tree.individual("I1").unwrap();
        assert_eq!(relationship_key(head, father), Some("relation.father"));
        assert_eq!(relationship_key(head, grandmother), Some("relation.grandmother"));
    }
}
