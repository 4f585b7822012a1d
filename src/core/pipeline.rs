use rand::seq::SliceRandom;

use crate::{
    core::{
        models::Language,
        OrbError,
    },
    source::WordSourceClient,
    store::WordStore,
};

/// One full refresh cycle: fetch, shuffle, persist, re-read.
///
/// The returned sequence is the freshly shuffled projection of every row
/// currently in the table, ready to be walked by a `PredictionCycle`. A
/// failure anywhere in the cycle leaves previously persisted rows intact.
pub async fn run_refresh_cycle(
    client: &WordSourceClient,
    store: &mut WordStore,
    language: Language,
) -> Result<Vec<String>, OrbError> {
    let mut pairs = client.fetch_word_pairs().await?;
    pairs.shuffle(&mut rand::rng());

    let inserted = store.refresh(&pairs)?;
    println!("Persisted {} fetched word pairs", inserted);

    store.all_rows(language)
}
