use itertools::Itertools;
use rand::seq::index;
use rand::Rng;

use crate::game::quiz::definition::Question;


#[derive(Clone, Copy, Debug)]
pub struct SetOptions {
    pub dedupe: bool,
    pub cap: Option<usize>,
    pub sample: Option<usize>,
}

impl Default for SetOptions {
    fn default() -> Self {
        SetOptions {
            dedupe: true,
            cap: None,
            sample: None,
        }
    }
}

// Step order matters: dedupe keeps the lexically-earliest occurrence, the
// sort is stable on equal ordinals, and capping runs post-sort so it keeps
// the lowest ordinals. Sampling is last and never re-sorts.
pub fn build<R>(records: Vec<Question>, options: &SetOptions, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut records = if options.dedupe {
        records
            .into_iter()
            .unique_by(|question| question.dedupe_key())
            .collect()
    } else {
        records
    };

    records.sort_by_key(|question| question.ordinal);

    if let Some(cap) = options.cap {
        records.truncate(cap);
    }

    if let Some(sample) = options.sample {
        if records.len() > sample {
            records = index::sample(rng, records.len(), sample)
                .into_iter()
                .map(|selected| records[selected].clone())
                .collect();
        }
    }

    records
}
