use std::collections::HashSet;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Clip {
    name: String,
    src: String,
}

impl Named for Clip {
    fn name(&self) -> &str {
        &self.name
    }
}

fn clip(name: &str, src: &str) -> Clip {
    Clip {
        name: name.to_string(),
        src: src.to_string(),
    }
}

fn pool(n: usize) -> Vec<Clip> {
    (0..n)
        .map(|i| clip(&format!("clip_{i}.mp4"), &format!("/static/clip_{i}.mp4")))
        .collect()
}

fn names(items: &[Clip]) -> Vec<&str> {
    items.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn returns_exactly_count_distinct_items_from_the_pool() {
    let items = pool(11);
    let mut rng = seeded_rng(Some(7));
    for count in 1..=11 {
        let picked = select_unique(&items, count, &mut rng);
        assert_eq!(picked.len(), count);
        let distinct: HashSet<&str> = picked.iter().map(|c| c.name()).collect();
        assert_eq!(distinct.len(), count);
        assert!(picked.iter().all(|c| items.contains(c)));
    }
}

#[test]
fn zero_count_or_empty_pool_yields_nothing() {
    let mut rng = seeded_rng(Some(1));
    assert!(select_unique(&pool(5), 0, &mut rng).is_empty());
    assert!(select_unique::<Clip, _>(&[], 3, &mut rng).is_empty());
}

#[test]
fn count_above_distinct_names_returns_each_name_once() {
    let items = vec![
        clip("a.mp4", "/static/a.mp4"),
        clip("b.mp4", "/static/b.mp4"),
        clip("a.mp4", "/static/copy/a.mp4"),
        clip("c.mp4", "/static/c.mp4"),
        clip("b.mp4", "/static/copy/b.mp4"),
    ];
    let mut rng = seeded_rng(Some(3));
    for count in [3, 4, 5, 50] {
        let picked = select_unique(&items, count, &mut rng);
        let mut got = names(&picked);
        got.sort_unstable();
        assert_eq!(got, vec!["a.mp4", "b.mp4", "c.mp4"], "count {count}");
    }
}

#[test]
fn duplicates_never_appear_even_when_pool_is_large_enough() {
    let items = vec![
        clip("x", "1"),
        clip("x", "2"),
        clip("x", "3"),
        clip("y", "4"),
    ];
    let mut rng = seeded_rng(Some(11));
    let picked = select_unique(&items, 3, &mut rng);
    let mut got = names(&picked);
    got.sort_unstable();
    assert_eq!(got, vec!["x", "y"]);
}

#[test]
fn input_is_left_untouched() {
    let items = pool(6);
    let before = items.clone();
    let mut rng = seeded_rng(Some(5));
    let _ = select_unique(&items, 4, &mut rng);
    assert_eq!(items, before);
}

#[test]
fn same_seed_gives_same_selection() {
    let items = pool(9);
    let a = select_unique(&items, 5, &mut seeded_rng(Some(42)));
    let b = select_unique(&items, 5, &mut seeded_rng(Some(42)));
    assert_eq!(a, b);
}

#[test]
fn repeated_runs_produce_different_orderings() {
    let items = pool(6);
    let mut rng = seeded_rng(None);
    let mut seen = HashSet::new();
    for _ in 0..50 {
        let picked = select_unique(&items, 6, &mut rng);
        seen.insert(names(&picked).join(","));
    }
    assert!(seen.len() > 1);
}

#[test]
fn shuffle_is_roughly_uniform_over_first_position() {
    let mut rng = seeded_rng(Some(2024));
    let mut first_counts = [0usize; 4];
    let trials = 8000;
    for _ in 0..trials {
        let mut v = [0usize, 1, 2, 3];
        shuffle(&mut v, &mut rng);
        first_counts[v[0]] += 1;
    }
    for count in first_counts {
        let share = count as f64 / trials as f64;
        assert!((share - 0.25).abs() < 0.03, "share {share}");
    }
}

#[test]
fn shuffle_keeps_every_element() {
    let mut rng = seeded_rng(Some(31));
    let mut v: Vec<usize> = (0..20).collect();
    shuffle(&mut v, &mut rng);
    let mut sorted = v.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());
}

#[test]
fn pick_one_handles_empty_and_single() {
    let mut rng = seeded_rng(Some(9));
    assert!(pick_one::<Clip, _>(&[], &mut rng).is_none());
    let one = vec![clip("song.mp3", "/static/song.mp3")];
    assert_eq!(pick_one(&one, &mut rng), Some(&one[0]));
}

#[test]
fn works_over_borrowed_items() {
    let items = pool(4);
    let refs: Vec<&Clip> = items.iter().collect();
    let picked = select_unique(&refs, 2, &mut seeded_rng(Some(8)));
    assert_eq!(picked.len(), 2);
    assert_ne!(picked[0].name(), picked[1].name());
}

#[test]
fn entropy_helper_respects_count() {
    assert_eq!(select_unique_random(&pool(8), 5).len(), 5);
}
