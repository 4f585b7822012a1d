use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
        Mutex,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::{
    TaskRequest,
    TaskResult,
};
use crate::{
    core::{
        models::{
            Language,
            SavedPrediction,
        },
        pipeline::run_refresh_cycle,
        OrbError,
    },
    persistence::get_data_file_path,
    source::WordSourceClient,
    store::{
        saved_log::SAVED_LOG_FILE,
        SavedLog,
        WordStore,
        WORDS_DB_FILE,
    },
};

/// Owns the single worker that runs refresh cycles. Requests queue on an
/// mpsc channel and are handled strictly in arrival order, so a trigger
/// fired while a fetch is in flight waits for it to settle instead of
/// interleaving table writes.
///
/// The saved log is shared behind a mutex: each of its operations is a full
/// read-modify-write, and the lock keeps them from losing updates to one
/// another.
pub struct TaskManager {
    requests: mpsc::Sender<TaskRequest>,
    results: mpsc::Receiver<TaskResult>,
    saved_log: Arc<Mutex<SavedLog>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::with_paths(get_data_file_path(WORDS_DB_FILE), get_data_file_path(SAVED_LOG_FILE))
    }

    pub fn with_paths(db_path: PathBuf, log_path: PathBuf) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<TaskRequest>();
        let (result_tx, result_rx) = mpsc::channel::<TaskResult>();

        let saved_log = match SavedLog::load_from(log_path.clone()) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("Failed to load saved predictions: {}. Starting empty.", e);
                SavedLog::new(log_path)
            }
        };
        let saved_log = Arc::new(Mutex::new(saved_log));
        let worker_log = saved_log.clone();

        thread::spawn(move || {
            let runtime = Runtime::new().expect("Failed to create TaskManager runtime");

            let mut store = match WordStore::open(&db_path) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open word store: {}", e);
                    let _ = result_tx.send(TaskResult::WordsRefreshed(Err(e.to_string())));
                    return;
                }
            };

            let client = match WordSourceClient::new() {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("Failed to build word source client: {}", e);
                    let _ = result_tx.send(TaskResult::WordsRefreshed(Err(e.to_string())));
                    return;
                }
            };

            while let Ok(request) = request_rx.recv() {
                match request {
                    TaskRequest::Refresh(language) => {
                        let _ = result_tx.send(TaskResult::LoadingMessage(
                            "Fetching predictions...".to_string(),
                        ));

                        let result = runtime
                            .block_on(run_refresh_cycle(&client, &mut store, language))
                            .map_err(|e| e.to_string());

                        if let Err(e) = &result {
                            eprintln!("Refresh failed: {}", e);
                        }

                        let _ = result_tx.send(TaskResult::WordsRefreshed(result));
                    }
                    TaskRequest::Bookmark { text, language } => {
                        let result =
                            bookmark(&store, &worker_log, text, language).map_err(|e| e.to_string());

                        if let Err(e) = &result {
                            eprintln!("Bookmark failed: {}", e);
                        }

                        let _ = result_tx.send(TaskResult::PredictionSaved(result));
                    }
                }
            }
        });

        Self { requests: request_tx, results: result_rx, saved_log }
    }

    /// Queues a refresh; it runs after any cycle already in flight.
    pub fn request_refresh(&self, language: Language) {
        let _ = self.requests.send(TaskRequest::Refresh(language));
    }

    /// Queues saving the currently displayed prediction to the bookmark
    /// log, looking up its counterpart translation from the word table.
    pub fn request_bookmark(&self, text: String, language: Language) {
        let _ = self.requests.send(TaskRequest::Bookmark { text, language });
    }

    /// Shared handle to the bookmark log for direct reads, removals and
    /// tag toggles.
    pub fn saved_log(&self) -> Arc<Mutex<SavedLog>> {
        self.saved_log.clone()
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.results.try_recv() {
            results.push(result);
        }

        results
    }
}

fn bookmark(
    store: &WordStore,
    saved_log: &Arc<Mutex<SavedLog>>,
    text: String,
    language: Language,
) -> Result<usize, OrbError> {
    let translation = store.lookup_translation(&text, language)?.unwrap_or_default();
    let entry = SavedPrediction::new(text, translation, language);

    let mut log = saved_log
        .lock()
        .map_err(|_| OrbError::Custom("Saved log lock poisoned".to_string()))?;
    log.append(entry)?;

    Ok(log.len())
}
