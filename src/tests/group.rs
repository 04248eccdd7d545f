use std::collections::HashSet;

use super::seeded;
use crate::{
    IndexTarget, Member, PronounError, PronounForm, PronounGroup, PronounRecord, RecordForms, Registry,
    RegistryConfig, Selection,
};

fn loud() -> Registry {
    seeded(RegistryConfig::default().with_fail_quietly(false))
}

#[test]
fn test_create_group_splits_on_delimiter() {
    let registry = Registry::new();
    let group = registry.create_group("he/they", "/").unwrap();
    assert_eq!(group.len(), 2);
    assert_eq!(group.identities(), ["he", "they"]);
}

#[test]
fn test_create_group_custom_delimiter_and_whitespace() {
    let registry = Registry::new();
    let group = registry.create_group(" she , they ,", ",").unwrap();
    assert_eq!(group.identities(), ["she", "they"]);
}

#[test]
fn test_create_group_from_list() {
    let registry = Registry::new();
    let group = registry.create_group_from(vec!["she", "he", "she"]).unwrap();
    assert_eq!(group.identities(), ["she", "he"]);
}

#[test]
fn test_single_member_group_is_deterministic() {
    let registry = Registry::new();
    let group = registry.create_group("he", "/").unwrap();
    for _ in 0..100 {
        assert_eq!(group.subject(Selection::new()).unwrap(), "he");
        assert_eq!(group.object(Selection::new()).unwrap(), "him");
        assert_eq!(group.possessive_adjective(Selection::new()).unwrap(), "his");
    }
}

#[test]
fn test_unresolvable_construction() {
    let registry = loud();
    assert_eq!(
        registry.create_group("he/xe", "/").unwrap_err(),
        PronounError::PronounNotFound("xe".to_string())
    );

    let quiet = Registry::new();
    let group = quiet.create_group("he/xe", "/").unwrap();
    assert_eq!(group.identities(), ["he", "they"]);
}

#[test]
fn test_empty_input_uses_fallback() {
    let registry = Registry::new();
    let group = registry.create_group("", "/").unwrap();
    assert_eq!(group.identities(), ["they"]);

    let group = PronounGroup::fallback(&registry).unwrap();
    assert_eq!(group.identities(), ["they"]);
}

#[test]
fn test_records_as_members() {
    let mut registry = Registry::new();
    let ze = registry
        .new_record(RecordForms::new("ze", "zir", "zirs", "zir", "zirself"), false)
        .unwrap();
    let fae = PronounRecord::new(RecordForms::new("fae", "faer", "faers", "faer", "faerself")).unwrap();

    let group = PronounGroup::new(
        &registry,
        vec![Member::from(&ze), Member::from(fae), Member::from("he")],
    )
    .unwrap();

    assert_eq!(group.identities(), ["ze", "fae", "he"]);
    assert!(!registry.contains("ze"));
}

#[test]
fn test_select_by_index() {
    let registry = loud();
    let group = registry.create_group("he/she/they", "/").unwrap();

    assert_eq!(group.select(Selection::at(1)).unwrap().identity(), "she");
    assert_eq!(
        group.select(Selection::at(3)).unwrap_err(),
        PronounError::IndexOutOfRange {
            index: 3,
            target: IndexTarget::Member { members: 3 },
        }
    );
    insta::assert_snapshot!(
        group.select(Selection::at(3)).unwrap_err().to_string(),
        @"no member in a group of 3 at index 3"
    );
    assert_eq!(group.select(Selection::at(3).quiet(true)).unwrap().identity(), "he");
}

#[test]
fn test_select_without_random_is_first_member() {
    let registry = seeded(RegistryConfig::default().with_use_random(false));
    let group = registry.create_group("she/he", "/").unwrap();
    for _ in 0..20 {
        assert_eq!(group.select(Selection::new()).unwrap().identity(), "she");
    }
}

#[test]
fn test_select_random_reaches_every_member() {
    let registry = seeded(RegistryConfig::default());
    let group = registry.create_group("he/she/they", "/").unwrap();

    let seen: HashSet<String> = (0..300)
        .map(|_| group.select(Selection::new()).unwrap().identity().to_string())
        .collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_empty_group_selection() {
    let registry = loud();
    let mut group = registry.create_group("he", "/").unwrap();
    group.remove("he").unwrap();
    assert!(group.is_empty());

    assert_eq!(group.select(Selection::new()).unwrap_err(), PronounError::EmptyGroup);
    assert_eq!(group.select(Selection::new().quiet(true)).unwrap().identity(), "they");
}

#[test]
fn test_add_and_remove() {
    let registry = Registry::new();
    let mut group = registry.create_group("he", "/").unwrap();

    group.add("she").unwrap();
    group.add_all(vec!["they", "he"]).unwrap();
    assert_eq!(group.identities(), ["he", "she", "they"]);

    group.remove_all(vec!["he", "she"]).unwrap();
    assert_eq!(group.identities(), ["they"]);
}

#[test]
fn test_add_unresolvable() {
    let registry = loud();
    let mut group = registry.create_group("he", "/").unwrap();

    let err = group.add_all(vec!["she", "xe"]).unwrap_err();
    assert_eq!(err, PronounError::UnresolvedPronoun("xe".to_string()));
    insta::assert_snapshot!(err.to_string(), @r###"could not resolve group member "xe""###);
    assert_eq!(group.identities(), ["he"]);

    let err = group.remove("xe").unwrap_err();
    assert_eq!(err, PronounError::UnresolvedPronoun("xe".to_string()));
    assert_eq!(group.identities(), ["he"]);
}

#[test]
fn test_add_unresolvable_quietly_uses_fallback() {
    let registry = Registry::new();
    let mut group = registry.create_group("he", "/").unwrap();
    group.add("xe").unwrap();
    assert_eq!(group.identities(), ["he", "they"]);
}

#[test]
fn test_form_index_applies_to_member_and_entry() {
    let registry = loud();
    let group = registry.create_group("he/they", "/").unwrap();

    // Index 1 selects "they" and then its second reflexive entry.
    assert_eq!(group.reflexive(Selection::at(1)).unwrap(), "themselves");

    let err = group.reflexive(Selection::at(2)).unwrap_err();
    assert!(matches!(
        err,
        PronounError::IndexOutOfRange {
            target: IndexTarget::Member { .. },
            ..
        }
    ));
}

#[test]
fn test_form_out_of_range_entry() {
    let registry = loud();
    let mut record = PronounRecord::new(RecordForms::new("ey", "em", "eirs", "eir", "emself")).unwrap();
    record.extend(PronounForm::Object, "them");
    let mut group = PronounGroup::new(&registry, vec![record]).unwrap();
    group.add("they").unwrap();

    // Index 1 picks "they", whose object form has a single entry.
    assert_eq!(group.object(Selection::at(1)).unwrap(), "them");

    let only_ey = PronounGroup::new(&registry, vec![Member::from(&group.members()[0])]).unwrap();
    assert_eq!(
        only_ey.object(Selection::at(5)).unwrap_err(),
        PronounError::IndexOutOfRange {
            index: 5,
            target: IndexTarget::Form {
                form: PronounForm::Object,
                identity: "ey".to_string(),
            },
        }
    );
    assert_eq!(only_ey.object(Selection::at(5).quiet(true)).unwrap(), "em");
}

#[test]
fn test_registry_mutation_does_not_touch_existing_groups() {
    let mut registry = Registry::new();
    let before = registry.create_group("he", "/").unwrap();

    registry.extend_record("he", PronounForm::Object, "hym").unwrap();

    assert_eq!(before.members()[0].forms(PronounForm::Object), ["him"]);
    let after = registry.create_group("he", "/").unwrap();
    assert_eq!(after.members()[0].forms(PronounForm::Object), ["him", "hym"]);
}

#[test]
fn test_group_resolves_records_registered_later() {
    let mut registry = loud();
    let mut group = registry.create_group("he", "/").unwrap();
    assert!(group.registry().same_registry(&registry));

    assert_eq!(
        group.add("ze").unwrap_err(),
        PronounError::UnresolvedPronoun("ze".to_string())
    );

    registry
        .new_record(RecordForms::new("ze", ["zir", "hir"], "zirs", "zir", "zirself"), true)
        .unwrap();
    group.add("ze").unwrap();

    assert_eq!(group.identities(), ["he", "ze"]);
    assert_eq!(group.reflexive(Selection::at(1)).unwrap(), "zirself");
}

#[test]
fn test_group_keeps_records_removed_from_registry() {
    let mut registry = loud();
    let mut group = registry.create_group("she/he", "/").unwrap();

    let removed = registry.remove("she").unwrap();
    assert!(!registry.contains("she"));

    assert_eq!(group.identities(), ["she", "he"]);
    assert_eq!(group.select(Selection::at(0)).unwrap(), removed);
    assert_eq!(group.subject(Selection::at(0)).unwrap(), "she");
    assert_eq!(group.possessive(Selection::at(0)).unwrap(), "hers");

    // New resolution goes through the edited table.
    let mut other = registry.create_group("he", "/").unwrap();
    assert_eq!(
        other.add("she").unwrap_err(),
        PronounError::UnresolvedPronoun("she".to_string())
    );

    // Removing by the held record still works on the group itself.
    group.remove(&removed).unwrap();
    assert_eq!(group.identities(), ["he"]);
}

#[test]
fn test_groups_share_random_source_with_registry() {
    let registry = seeded(RegistryConfig::default());
    let first = registry.create_group("he/she/they", "/").unwrap();
    let second = registry.create_group("he/she/they", "/").unwrap();

    let interleaved: Vec<_> = (0..10)
        .flat_map(|_| {
            vec![
                first.select(Selection::new()).unwrap().identity().to_string(),
                second.select(Selection::new()).unwrap().identity().to_string(),
            ]
        })
        .collect();

    let registry = seeded(RegistryConfig::default());
    let single = registry.create_group("he/she/they", "/").unwrap();
    let sequential: Vec<_> = (0..20)
        .map(|_| single.select(Selection::new()).unwrap().identity().to_string())
        .collect();

    assert_eq!(interleaved, sequential);
}

#[test]
fn test_possessive_forms() {
    let registry = Registry::new();
    let group = registry.create_group("she", "/").unwrap();
    assert_eq!(group.possessive(Selection::new()).unwrap(), "hers");
    assert_eq!(group.possessive_adjective(Selection::new()).unwrap(), "her");
    assert_eq!(group.form(PronounForm::Reflexive, Selection::new()).unwrap(), "herself");
}
