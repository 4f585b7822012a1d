use crate::core::models::Language;

#[derive(Debug, Clone)]
pub enum TaskRequest {
    Refresh(Language),
    Bookmark { text: String, language: Language },
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    WordsRefreshed(Result<Vec<String>, String>),
    PredictionSaved(Result<usize, String>),
    LoadingMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::WordsRefreshed(_) => "words_refreshed",
            TaskResult::PredictionSaved(_) => "prediction_saved",
            TaskResult::LoadingMessage(_) => "loading_message",
        }
    }
}
