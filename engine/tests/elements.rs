use dungeon_engine::{adjusted_damage, relation, Element, Relation};
use proptest::prelude::*;

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Air),
        Just(Element::Earth),
        Just(Element::Fire),
        Just(Element::Water),
    ]
}

proptest! {
    #[test]
    fn same_element_is_neutral(e in element(), d in 0i32..=200) {
        prop_assert_eq!(adjusted_damage(e, e, d), d);
    }

    #[test]
    fn distinct_pairs_are_strong_or_weak(a in element(), b in element(), d in 0i32..=200) {
        prop_assume!(a != b);
        let out = adjusted_damage(a, b, d);
        let back = adjusted_damage(b, a, d);
        match relation(a, b) {
            Relation::Strong => {
                prop_assert_eq!(out, 2 * d);
                prop_assert_eq!(back, d / 2);
            }
            Relation::Weak => {
                prop_assert_eq!(out, d / 2);
                // The reverse is either the strong direction or another weak one.
                prop_assert!(back == 2 * d || back == d / 2);
            }
            Relation::Neutral => prop_assert!(false, "distinct elements are never neutral"),
        }
    }
}

#[test]
fn mutual_weak_pairs() {
    use Element::*;
    for (a, b) in [(Air, Fire), (Earth, Water)] {
        assert_eq!(adjusted_damage(a, b, 9), 4);
        assert_eq!(adjusted_damage(b, a, 9), 4);
    }
}

#[test]
fn each_unordered_pair_has_one_class() {
    let mut strong = 0;
    let mut mutual_weak = 0;
    for (i, &a) in Element::ALL.iter().enumerate() {
        for &b in &Element::ALL[i + 1..] {
            match (relation(a, b), relation(b, a)) {
                (Relation::Strong, Relation::Weak) | (Relation::Weak, Relation::Strong) => strong += 1,
                (Relation::Weak, Relation::Weak) => mutual_weak += 1,
                other => panic!("{a} vs {b} classified as {other:?}"),
            }
        }
    }
    assert_eq!((strong, mutual_weak), (4, 2));
}

#[test]
fn weak_hit_of_one_rounds_to_zero() {
    assert_eq!(adjusted_damage(Element::Earth, Element::Fire, 1), 0);
}
