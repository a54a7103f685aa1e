// tests/gender_partition.rs
//
// End-to-end behaviour of the gender matcher: accumulation, consolidation,
// labeling, and the failure modes.
use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use race_scrape::config::options::{Consolidation, GenderConfig};
use race_scrape::gender::Group;
use race_scrape::{Gender, GenderError, GenderMatcher, NameTime};

type Evidence = (&'static str, &'static str, &'static [&'static str]);

fn nt(s: &str) -> NameTime {
    NameTime::from(s)
}

fn add_all(m: &mut GenderMatcher, evidence: &[Evidence]) {
    for (bib, key, peers) in evidence {
        m.add(bib, nt(key), peers.iter().map(|p| nt(p))).unwrap();
    }
}

fn final_groups(m: &GenderMatcher) -> BTreeSet<Group> {
    m.partitioner().groups().iter().cloned().collect()
}

// Males A (2154), C, E; females B (2155), D, F. Each page lists only part of
// its gender, so some orders fragment before finalize.
const SIX: [Evidence; 6] = [
    ("2154", "A=00:30:00", &[]),
    ("3", "C=00:33:00", &["E=00:35:00"]),
    ("5", "E=00:35:00", &["A=00:30:00"]),
    ("2155", "B=00:31:00", &["D=00:34:00"]),
    ("4", "D=00:34:00", &[]),
    ("6", "F=00:36:00", &["B=00:31:00"]),
];

#[test]
fn minimal_scenario() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    m.add("2154", nt("Alice=00:20:00"), []).unwrap();
    m.add("2155", nt("Bob=00:21:00"), []).unwrap();
    m.add("9001", nt("Carol=00:22:00"), [nt("Alice=00:20:00")]).unwrap();
    m.add("9002", nt("Dave=00:23:00"), [nt("Bob=00:21:00")]).unwrap();

    let map = m.finalize().unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(map.gender_for("2154"), Ok(Gender::Male));
    assert_eq!(map.gender_for("9001"), Ok(Gender::Male));
    assert_eq!(map.gender_for("2155"), Ok(Gender::Female));
    assert_eq!(map.gender_for("9002"), Ok(Gender::Female));
    assert_eq!(map.counts(), (2, 2));
}

#[test]
fn four_entrants_converge_to_two_groups() {
    let mut m = GenderMatcher::new(&GenderConfig::default());
    add_all(&mut m, &[
        ("9001", "Carl=00:45:00", &["Adam=00:40:00"]),
        ("2155", "Bea=00:42:00", &[]),
        ("9002", "Dora=00:50:00", &["Bea=00:42:00"]),
        ("2154", "Adam=00:40:00", &["Carl=00:45:00"]),
    ]);
    assert_eq!(m.partitioner().group_count(), 2);

    let map = m.finalize().unwrap();
    assert_eq!(m.partitioner().group_count(), 2);
    assert_eq!(map.gender_for("9001"), Ok(Gender::Male));
    assert_eq!(map.gender_for("2154"), Ok(Gender::Male));
    assert_eq!(map.gender_for("2155"), Ok(Gender::Female));
    assert_eq!(map.gender_for("9002"), Ok(Gender::Female));
}

#[test]
fn fragments_are_joined_at_finalize() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &SIX);
    // {A,E} {C,E} {B,D,F}: E overlaps two groups, only the first took it
    assert_eq!(m.partitioner().group_count(), 3);

    let map = m.finalize().unwrap();
    assert_eq!(m.partitioner().group_count(), 2);
    for bib in ["2154", "3", "5"] {
        assert_eq!(map.gender_for(bib), Ok(Gender::Male), "bib {bib}");
    }
    for bib in ["2155", "4", "6"] {
        assert_eq!(map.gender_for(bib), Ok(Gender::Female), "bib {bib}");
    }
}

#[test]
fn final_partition_ignores_add_order() {
    let reference = {
        let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
        add_all(&mut m, &SIX);
        let map = m.finalize().unwrap();
        (final_groups(&m), map)
    };

    let mut orders: Vec<Vec<Evidence>> = vec![SIX.iter().rev().cloned().collect()];
    for seed in [1u64, 7, 42, 1234] {
        let mut order = SIX.to_vec();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        orders.push(order);
    }

    for order in orders {
        let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
        add_all(&mut m, &order);
        let map = m.finalize().unwrap();
        assert_eq!(final_groups(&m), reference.0);
        assert_eq!(map, reference.1);
    }
}

#[test]
fn repeated_add_changes_nothing() {
    let mut once = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut once, &SIX);

    // Back-to-back duplicates land in the group the first copy went to.
    let mut twice = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    for e in SIX {
        add_all(&mut twice, &[e, e]);
    }
    assert_eq!(twice.partitioner().groups(), once.partitioner().groups());
    let expected = once.finalize().unwrap();
    assert_eq!(twice.finalize().unwrap(), expected);

    // A late replay can fold groups differently, but not the final partition.
    let mut replay = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut replay, &SIX);
    add_all(&mut replay, &SIX);
    assert_eq!(replay.finalize().unwrap(), expected);
    assert_eq!(final_groups(&replay), final_groups(&once));
}

#[test]
fn every_registered_bib_gets_one_label() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &SIX);
    let map = m.finalize().unwrap();

    assert_eq!(map.len(), SIX.len());
    let (males, females) = map.counts();
    assert_eq!(males + females, SIX.len());
    for (bib, _, _) in SIX {
        assert!(map.gender_for(bib).is_ok(), "bib {bib}");
    }
}

#[test]
fn random_pairs_agrees_with_union_find() {
    let mut uf = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut uf, &SIX);
    let expected = uf.finalize().unwrap();

    for seed in 0..5u64 {
        let mut config = GenderConfig::with_anchors("2154", "2155");
        config.strategy = Consolidation::RandomPairs { max_attempts: 10_000 };
        let mut m = GenderMatcher::new(&config);
        add_all(&mut m, &SIX);
        let map = m.finalize_with_rng(&mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(map, expected);
        assert_eq!(final_groups(&m), final_groups(&uf));
    }
}

#[test]
fn missing_anchor_when_no_reference_bib_was_added() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    m.add("1", nt("X=1"), []).unwrap();
    m.add("2", nt("Y=2"), []).unwrap();
    assert_eq!(m.finalize(), Err(GenderError::MissingAnchor(Gender::Male)));
}

#[test]
fn unknown_bib_is_reported() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &SIX);
    let map = m.finalize().unwrap();
    assert_eq!(map.gender_for("404"), Err(GenderError::UnknownBib("404".into())));
}

#[test]
fn finalize_is_once_only() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &SIX);
    m.finalize().unwrap();

    assert_eq!(m.finalize(), Err(GenderError::AlreadyFinalized));
    assert_eq!(m.add("7", nt("G=00:37:00"), []), Err(GenderError::AlreadyFinalized));
}

#[test]
fn disconnected_third_group_does_not_converge() {
    let evidence: [Evidence; 4] = [
        ("2154", "A=1", &[]),
        ("2155", "B=2", &[]),
        ("9", "Island=9", &[]),
        ("10", "Cove=10", &["Island=9"]),
    ];

    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &evidence);
    assert_eq!(m.finalize(), Err(GenderError::NonConvergent { groups: 3 }));

    let mut config = GenderConfig::with_anchors("2154", "2155");
    config.strategy = Consolidation::RandomPairs { max_attempts: 500 };
    let mut m = GenderMatcher::new(&config);
    add_all(&mut m, &evidence);
    assert_eq!(
        m.finalize_with_rng(&mut StdRng::seed_from_u64(3)),
        Err(GenderError::NonConvergent { groups: 3 })
    );
}

#[test]
fn name_time_collision_leaves_first_bib_unlabeled() {
    let mut m = GenderMatcher::new(&GenderConfig::with_anchors("2154", "2155"));
    add_all(&mut m, &[
        ("2154", "A=1", &[]),
        ("2155", "B=2", &[]),
        ("50", "Sam=00:50:00", &["A=1"]),
        ("51", "Sam=00:50:00", &["A=1"]),
    ]);
    let map = m.finalize().unwrap();
    assert_eq!(map.gender_for("51"), Ok(Gender::Male));
    assert_eq!(map.gender_for("50"), Err(GenderError::UnknownBib("50".into())));
}
