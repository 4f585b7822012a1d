#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::{
        core::{
            models::{
                Language,
                SavedPrediction,
                WordPair,
            },
            OrbError,
        },
        store::{
            saved_log::{
                SavedLog,
                SAVED_LOG_CAPACITY,
                SAVED_LOG_FILE,
            },
            WordStore,
        },
    };

    fn pair(word: &str, translation: &str) -> WordPair {
        WordPair { word: word.to_string(), translation: translation.to_string() }
    }

    fn sample_pairs(n: usize) -> Vec<WordPair> {
        (0..n).map(|i| pair(&format!("word{}", i), &format!("перевод{}", i))).collect()
    }

    fn prediction(text: &str) -> SavedPrediction {
        SavedPrediction::new(text.to_string(), String::new(), Language::En)
    }

    fn temp_log() -> (tempfile::TempDir, SavedLog) {
        let dir = tempdir().unwrap();
        let log = SavedLog::load_from(dir.path().join(SAVED_LOG_FILE)).unwrap();
        (dir, log)
    }

    #[test]
    fn refresh_then_all_rows_is_a_permutation() {
        let mut store = WordStore::open_in_memory().unwrap();
        let pairs = sample_pairs(20);
        store.refresh(&pairs).unwrap();

        let mut rows = store.all_rows(Language::En).unwrap();
        assert_eq!(rows.len(), 20);

        // Permutation equality, never order equality: the shuffle is
        // unseeded.
        let mut expected: Vec<String> = pairs.iter().map(|p| p.word.clone()).collect();
        rows.sort();
        expected.sort();
        assert_eq!(rows, expected);
    }

    #[test]
    fn all_rows_projects_the_translation_side() {
        let mut store = WordStore::open_in_memory().unwrap();
        let pairs = sample_pairs(5);
        store.refresh(&pairs).unwrap();

        let mut rows = store.all_rows(Language::Ru).unwrap();
        let mut expected: Vec<String> = pairs.iter().map(|p| p.translation.clone()).collect();
        rows.sort();
        expected.sort();
        assert_eq!(rows, expected);
    }

    #[test]
    fn single_pair_round() {
        let mut store = WordStore::open_in_memory().unwrap();
        store.refresh(&[pair("luck", "удача")]).unwrap();

        assert_eq!(store.row_count().unwrap(), 1);
        assert_eq!(store.all_rows(Language::En).unwrap(), vec!["luck".to_string()]);
        assert_eq!(store.all_rows(Language::Ru).unwrap(), vec!["удача".to_string()]);
    }

    #[test]
    fn refresh_appends_across_cycles() {
        // Earlier batches survive a refresh; the table grows. This is the
        // inherited contract, with recreate() as the explicit way out.
        let mut store = WordStore::open_in_memory().unwrap();
        store.refresh(&sample_pairs(3)).unwrap();
        store.refresh(&sample_pairs(3)).unwrap();

        assert_eq!(store.row_count().unwrap(), 6);
        assert_eq!(store.all_rows(Language::En).unwrap().len(), 6);
    }

    #[test]
    fn recreate_clears_accumulated_rows() {
        let mut store = WordStore::open_in_memory().unwrap();
        store.refresh(&sample_pairs(4)).unwrap();
        store.recreate().unwrap();

        assert_eq!(store.row_count().unwrap(), 0);

        // The table is usable again afterwards.
        store.refresh(&sample_pairs(2)).unwrap();
        assert_eq!(store.row_count().unwrap(), 2);
    }

    #[test]
    fn lookup_finds_the_counterpart_field() {
        let mut store = WordStore::open_in_memory().unwrap();
        store.refresh(&[pair("luck", "удача"), pair("journey", "путешествие")]).unwrap();

        assert_eq!(
            store.lookup_translation("luck", Language::En).unwrap(),
            Some("удача".to_string())
        );
        assert_eq!(
            store.lookup_translation("удача", Language::Ru).unwrap(),
            Some("luck".to_string())
        );
        assert_eq!(store.lookup_translation("missing", Language::En).unwrap(), None);
    }

    #[test]
    fn append_persists_and_reloads() {
        let (dir, mut log) = temp_log();
        log.append(prediction("luck")).unwrap();

        let reloaded = SavedLog::load_from(dir.path().join(SAVED_LOG_FILE)).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].text, "luck");
        assert_eq!(reloaded.entries()[0].tag, 0);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let (_dir, mut log) = temp_log();

        for i in 0..150 {
            log.append(prediction(&format!("p{}", i))).unwrap();
            assert!(log.len() <= SAVED_LOG_CAPACITY);
        }

        assert_eq!(log.len(), SAVED_LOG_CAPACITY);
        assert_eq!(log.entries()[0].text, "p50");
        assert_eq!(log.entries()[SAVED_LOG_CAPACITY - 1].text, "p149");
    }

    #[test]
    fn overflow_evicts_exactly_the_oldest_entry() {
        let (_dir, mut log) = temp_log();

        for i in 0..SAVED_LOG_CAPACITY {
            log.append(prediction(&format!("p{}", i))).unwrap();
        }
        assert_eq!(log.entries()[0].text, "p0");

        log.append(prediction("p100")).unwrap();

        assert_eq!(log.len(), SAVED_LOG_CAPACITY);
        assert_eq!(log.entries()[0].text, "p1");
        assert_eq!(log.entries()[SAVED_LOG_CAPACITY - 1].text, "p100");
    }

    #[test]
    fn toggle_tag_twice_restores_the_original() {
        let (_dir, mut log) = temp_log();
        for name in ["a", "b", "c"] {
            log.append(prediction(name)).unwrap();
        }

        log.toggle_tag(1).unwrap();
        assert_eq!(log.entries()[0].tag, 0);
        assert_eq!(log.entries()[1].tag, 1);
        assert_eq!(log.entries()[2].tag, 0);

        log.toggle_tag(1).unwrap();
        assert!(log.entries().iter().all(|entry| entry.tag == 0));
    }

    #[test]
    fn toggle_tag_rejects_an_out_of_range_index() {
        let (_dir, mut log) = temp_log();
        log.append(prediction("a")).unwrap();

        let result = log.toggle_tag(5);
        assert!(matches!(result, Err(OrbError::IndexOutOfRange { index: 5, len: 1 })));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let (_dir, mut log) = temp_log();
        for name in ["a", "b", "c", "d"] {
            log.append(prediction(name)).unwrap();
        }

        log.remove(1).unwrap();

        let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_rejects_an_out_of_range_index() {
        let (_dir, mut log) = temp_log();
        log.append(prediction("a")).unwrap();

        assert!(matches!(log.remove(1), Err(OrbError::IndexOutOfRange { .. })));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn came_true_count_follows_the_tags() {
        let (_dir, mut log) = temp_log();
        for name in ["a", "b", "c"] {
            log.append(prediction(name)).unwrap();
        }
        assert_eq!(log.came_true_count(), 0);

        log.toggle_tag(0).unwrap();
        log.toggle_tag(2).unwrap();
        assert_eq!(log.came_true_count(), 2);

        log.toggle_tag(2).unwrap();
        assert_eq!(log.came_true_count(), 1);
    }

    #[test]
    fn unreadable_entries_are_dropped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVED_LOG_FILE);

        fs::write(
            &path,
            r#"[
                {"text": "luck", "translation": "удача", "date": "2024-03-07T12:00:00Z", "tag": 0, "language": "en"},
                {"text": "broken", "translation": "", "date": "not-a-date", "tag": 0, "language": "en"}
            ]"#,
        )
        .unwrap();

        let log = SavedLog::load_from(path).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].text, "luck");
    }

    #[test]
    fn a_missing_file_starts_an_empty_log() {
        let (_dir, log) = temp_log();
        assert!(log.is_empty());
        assert_eq!(log.came_true_count(), 0);
    }
}
