//! Property-based tests for tube and pattern invariants

use colorstack::core::{generate_pattern, matches, Block, Pattern, SimpleRng, Tube};
use colorstack::types::{Color, MAX_PATTERN_LENGTH};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn fill(capacity: usize, colors: &[Color]) -> Tube {
    colors
        .iter()
        .fold(Tube::with_capacity(capacity).unwrap(), |tube, c| {
            tube.push(Block::new(*c)).unwrap_or(tube)
        })
}

proptest! {
    #[test]
    fn prop_tube_never_exceeds_capacity(
        capacity in 1usize..16,
        colors in prop::collection::vec(color(), 0..40),
    ) {
        let tube = fill(capacity, &colors);
        prop_assert!(tube.len() <= tube.capacity());
        prop_assert_eq!(tube.len(), colors.len().min(capacity));
    }

    #[test]
    fn prop_pop_undoes_push(
        colors in prop::collection::vec(color(), 0..8),
        extra in color(),
    ) {
        let tube = fill(8, &colors);
        let block = Block::new(extra);
        if let Some(pushed) = tube.push(block) {
            let (popped, top) = pushed.pop();
            prop_assert_eq!(top, Some(block));
            prop_assert_eq!(popped, tube);
        } else {
            prop_assert!(tube.is_full());
        }
    }

    #[test]
    fn prop_suffix_always_matches(
        prefix in prop::collection::vec(color(), 0..6),
        suffix in prop::collection::vec(color(), 1..=MAX_PATTERN_LENGTH),
    ) {
        let all: Vec<Color> = prefix.iter().chain(suffix.iter()).copied().collect();
        let tube = fill(16, &all);
        let pattern = Pattern::new(&suffix).unwrap();
        prop_assert!(matches(&tube, &pattern));

        let consumed = tube.consume_match(pattern.len());
        prop_assert_eq!(consumed.colors().collect::<Vec<_>>(), prefix);
        prop_assert_eq!(consumed.id(), tube.id());
    }

    #[test]
    fn prop_match_requires_exact_suffix(
        colors in prop::collection::vec(color(), 0..10),
        target in prop::collection::vec(color(), 1..=MAX_PATTERN_LENGTH),
    ) {
        let tube = fill(16, &colors);
        let pattern = Pattern::new(&target).unwrap();
        let expected = colors.len() >= target.len() && colors.ends_with(&target);
        prop_assert_eq!(matches(&tube, &pattern), expected);
    }

    #[test]
    fn prop_changing_one_suffix_color_breaks_match(
        prefix in prop::collection::vec(color(), 0..6),
        suffix in prop::collection::vec(color(), 1..=MAX_PATTERN_LENGTH),
        index in any::<prop::sample::Index>(),
        shift in 1usize..Color::ALL.len(),
    ) {
        let pattern = Pattern::new(&suffix).unwrap();
        let i = index.index(suffix.len());
        let current = Color::ALL.iter().position(|c| *c == suffix[i]).unwrap();
        let mut changed = suffix.clone();
        changed[i] = Color::ALL[(current + shift) % Color::ALL.len()];

        let all: Vec<Color> = prefix.iter().chain(changed.iter()).copied().collect();
        let tube = fill(16, &all);
        prop_assert_ne!(changed[i], suffix[i]);
        prop_assert!(!matches(&tube, &pattern));
    }

    #[test]
    fn prop_oversized_consume_is_noop(
        colors in prop::collection::vec(color(), 0..6),
        extra in 1usize..4,
    ) {
        let tube = fill(8, &colors);
        prop_assert_eq!(tube.consume_match(colors.len() + extra), tube);
    }

    #[test]
    fn prop_generated_pattern_uses_palette(
        seed in any::<u32>(),
        length in 1usize..=MAX_PATTERN_LENGTH,
        palette in prop::collection::vec(color(), 1..6),
    ) {
        let mut rng = SimpleRng::new(seed);
        let pattern = generate_pattern(&palette, length, &mut rng).unwrap();
        prop_assert_eq!(pattern.len(), length);
        prop_assert!(pattern.colors().iter().all(|c| palette.contains(c)));
    }
}
