// src/quiz/sampler.rs

use rand::{Rng, seq::SliceRandom};

use super::{Entry, Selection};
use crate::{
    config::IMAGE_ONLY_CAP,
    models::question::{Category, Question},
};

/// The question pool split into its three disjoint categories.
/// Each bucket keeps pool order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub image_only: Vec<Entry<'a>>,
    pub evaluable: Vec<Entry<'a>>,
    pub other: Vec<Entry<'a>>,
}

impl Partition<'_> {
    pub fn total(&self) -> usize {
        self.image_only.len() + self.evaluable.len() + self.other.len()
    }
}

pub fn partition(pool: &[Question]) -> Partition<'_> {
    let mut parts = Partition::default();

    for (id, question) in pool.iter().enumerate() {
        let entry = Entry { id, question };
        match question.category() {
            Category::ImageOnly => parts.image_only.push(entry),
            Category::Evaluable => parts.evaluable.push(entry),
            Category::Other => parts.other.push(entry),
        }
    }

    parts
}

/// Draws a random paper of at most `total` questions using the thread-local RNG.
pub fn select(pool: &[Question], total: usize) -> Selection<'_> {
    select_with_rng(pool, total, &mut rand::thread_rng())
}

/// Draws a random paper of at most `total` questions.
///
/// * Up to `IMAGE_ONLY_CAP` image-only questions come first.
/// * Evaluable questions fill what is left of `total`.
/// * Other questions are only drawn if evaluable ones run out.
///
/// A category that runs short is not topped up from the categories before it.
pub fn select_with_rng<'a, R>(pool: &'a [Question], total: usize, rng: &mut R) -> Selection<'a>
where
    R: Rng + ?Sized,
{
    let Partition {
        mut image_only,
        mut evaluable,
        mut other,
    } = partition(pool);

    image_only.shuffle(rng);
    evaluable.shuffle(rng);
    other.shuffle(rng);

    let n_image = IMAGE_ONLY_CAP.min(image_only.len()).min(total);
    let remaining = total - n_image;
    let n_evaluable = remaining.min(evaluable.len());
    let n_other = (remaining - n_evaluable).min(other.len());

    tracing::debug!(
        pool = pool.len(),
        total,
        n_image,
        n_evaluable,
        n_other,
        "Sampled quiz paper"
    );

    let mut entries = Vec::with_capacity(n_image + n_evaluable + n_other);
    entries.extend(image_only.into_iter().take(n_image));
    entries.extend(evaluable.into_iter().take(n_evaluable));
    entries.extend(other.into_iter().take(n_other));

    Selection::from_entries(entries)
}
