// tests/sampler_tests.rs

use std::collections::HashSet;

use quiz_backend::{
    models::question::{Category, Choice, Question},
    quiz::{partition, select, select_with_rng},
};
use rand::{SeedableRng, rngs::StdRng};

fn evaluable(i: usize) -> Question {
    Question {
        text: format!("Evaluable {}", i),
        choices: vec![
            Choice {
                letter: "A".to_string(),
                text: "Right".to_string(),
                correct: true,
            },
            Choice {
                letter: "B".to_string(),
                text: "Wrong".to_string(),
                correct: false,
            },
        ],
        ..Default::default()
    }
}

fn image_only(i: usize) -> Question {
    Question {
        text: format!("Image {}", i),
        images: vec![format!("img/{}.png", i)],
        ..Default::default()
    }
}

fn other(i: usize) -> Question {
    Question {
        text: format!("Other {}", i),
        ..Default::default()
    }
}

fn pool(n_image: usize, n_eval: usize, n_other: usize) -> Vec<Question> {
    let mut pool = Vec::new();
    pool.extend((0..n_image).map(image_only));
    pool.extend((0..n_eval).map(evaluable));
    pool.extend((0..n_other).map(other));
    pool
}

fn categories(pool: &[Question], ids: &[usize]) -> Vec<Category> {
    ids.iter().map(|&id| pool[id].category()).collect()
}

#[test]
fn only_evaluable_pool_returns_everything() {
    let pool = pool(0, 5, 0);
    let selection = select(&pool, 50);

    assert_eq!(selection.len(), 5);
    assert!(selection.iter().all(|e| e.question.category() == Category::Evaluable));
}

#[test]
fn image_only_is_capped_at_ten() {
    let pool = pool(15, 20, 0);
    let selection = select(&pool, 50);
    let cats = categories(&pool, &selection.ids());

    assert_eq!(selection.len(), 30);
    assert!(cats[..10].iter().all(|c| *c == Category::ImageOnly));
    assert!(cats[10..].iter().all(|c| *c == Category::Evaluable));
}

#[test]
fn blocks_are_ordered_image_evaluable_other() {
    let pool = pool(3, 5, 100);
    let mut rng = StdRng::seed_from_u64(7);
    let selection = select_with_rng(&pool, 20, &mut rng);
    let cats = categories(&pool, &selection.ids());

    assert_eq!(selection.len(), 20);
    assert_eq!(&cats[..3], &[Category::ImageOnly; 3]);
    assert_eq!(&cats[3..8], &[Category::Evaluable; 5]);
    assert!(cats[8..].iter().all(|c| *c == Category::Other));
}

#[test]
fn other_is_not_drawn_when_evaluable_fills_the_paper() {
    let pool = pool(2, 30, 30);
    let selection = select(&pool, 12);
    let cats = categories(&pool, &selection.ids());

    assert_eq!(selection.len(), 12);
    assert_eq!(cats.iter().filter(|c| **c == Category::ImageOnly).count(), 2);
    assert_eq!(cats.iter().filter(|c| **c == Category::Evaluable).count(), 10);
    assert!(!cats.contains(&Category::Other));
}

#[test]
fn image_shortfall_is_not_backfilled_beyond_the_cap() {
    let pool = pool(25, 0, 0);
    let selection = select(&pool, 50);
    assert_eq!(selection.len(), 10);
}

#[test]
fn small_total_limits_image_only_draw() {
    let pool = pool(15, 5, 0);
    let selection = select(&pool, 4);
    let cats = categories(&pool, &selection.ids());

    assert_eq!(selection.len(), 4);
    assert!(cats.iter().all(|c| *c == Category::ImageOnly));
}

#[test]
fn zero_total_and_empty_pool_give_empty_selection() {
    assert!(select(&pool(5, 5, 5), 0).is_empty());
    assert!(select(&[], 50).is_empty());
}

#[test]
fn pool_without_choices_or_images_is_all_other() {
    let pool = pool(0, 0, 8);
    let parts = partition(&pool);

    assert_eq!(parts.other.len(), 8);
    assert!(parts.image_only.is_empty());
    assert!(parts.evaluable.is_empty());
    assert_eq!(select(&pool, 5).len(), 5);
}

#[test]
fn partition_is_exhaustive_and_disjoint() {
    let mut pool = pool(4, 6, 3);
    // An image with choices is evaluable, not image-only
    pool.push(Question {
        images: vec!["x.png".to_string()],
        ..evaluable(99)
    });

    let parts = partition(&pool);
    let mut ids: Vec<usize> = parts
        .image_only
        .iter()
        .chain(&parts.evaluable)
        .chain(&parts.other)
        .map(|e| e.id)
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, (0..pool.len()).collect::<Vec<_>>());
    assert_eq!(parts.evaluable.len(), 7);
    assert_eq!(parts.image_only.len(), 4);
    assert_eq!(parts.other.len(), 3);
}

#[test]
fn selection_is_bounded_and_unique_for_any_total() {
    let pool = pool(14, 9, 6);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for total in 0..40 {
            let selection = select_with_rng(&pool, total, &mut rng);
            let ids = selection.ids();
            let unique: HashSet<usize> = ids.iter().copied().collect();
            let images = categories(&pool, &ids)
                .into_iter()
                .filter(|c| *c == Category::ImageOnly)
                .count();

            assert!(ids.len() <= total);
            assert!(ids.len() <= pool.len());
            assert_eq!(unique.len(), ids.len());
            assert!(images <= 10);
        }
    }
}

#[test]
fn every_question_can_be_drawn() {
    let pool = pool(0, 5, 0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = HashSet::new();

    for _ in 0..200 {
        seen.extend(select_with_rng(&pool, 1, &mut rng).ids());
    }

    assert_eq!(seen.len(), 5);
}

#[test]
fn sampling_does_not_mutate_the_pool() {
    let pool = pool(12, 7, 4);
    let before = pool.clone();
    let _ = select(&pool, 15);
    assert_eq!(pool, before);
}
