use std::{
    thread,
    time::Duration,
};

use mysticorb::{
    core::tasks::{
        TaskManager,
        TaskResult,
    },
    settings::Settings,
    store::PredictionCycle,
};

fn main() {
    let settings = Settings::load();
    println!("Language preference: {}", settings.language.as_str());

    let mut manager = TaskManager::new();
    manager.request_refresh(settings.language);

    let texts = 'wait: loop {
        for result in manager.poll_results() {
            match result {
                TaskResult::LoadingMessage(message) => println!("{}", message),
                TaskResult::WordsRefreshed(Ok(texts)) => break 'wait texts,
                TaskResult::WordsRefreshed(Err(e)) => {
                    eprintln!("Could not refresh predictions: {}", e);
                    return;
                }
                TaskResult::PredictionSaved(_) => {}
            }
        }

        thread::sleep(Duration::from_millis(100));
    };

    let mut cycle = match PredictionCycle::new(texts) {
        Some(cycle) => cycle,
        None => {
            println!("No predictions available yet.");
            return;
        }
    };

    println!("Your prediction: {}", cycle.current());

    // Normally the UI arms this once the reveal animation finishes.
    cycle.arm_bookmark();
    if cycle.bookmark_armed() {
        manager.request_bookmark(cycle.current().to_string(), settings.language);
    }

    for _ in 0..2 {
        println!("Next prediction: {}", cycle.advance());
    }

    // Give the queued bookmark a moment to settle before reading back.
    thread::sleep(Duration::from_millis(300));
    for result in manager.poll_results() {
        if let TaskResult::PredictionSaved(saved) = result {
            match saved {
                Ok(len) => println!("Saved. The log now holds {} predictions.", len),
                Err(e) => eprintln!("Could not save prediction: {}", e),
            }
        }
    }

    let saved_log = manager.saved_log();
    let log = saved_log.lock().expect("saved log lock");
    for entry in log.entries() {
        println!("{}  {}", entry.format_date(), entry.text);
    }
    println!("Predictions that came true: {}", log.came_true_count());
}
