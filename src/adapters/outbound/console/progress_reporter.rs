use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port with a single indicatif
/// spinner line that is rewritten in place and cleared on completion, so
/// stdout carries nothing but the report.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    current_root: RefCell<String>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            current_root: RefCell::new(String::new()),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            spinner.clone()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("Failed to set spinner template"),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            *spinner_option = Some(spinner.clone());
            spinner
        }
    }

    fn clear(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        *self.current_root.borrow_mut() = message.to_string();
        self.get_or_create_spinner().set_message(message.to_string());
    }

    fn report_progress(&self, measured: usize, current: &str) {
        let message = format!(
            "{} [{} measured, fetching {}]",
            self.current_root.borrow(),
            measured,
            current
        );
        self.get_or_create_spinner().set_message(message);
    }

    fn report_error(&self, message: &str) {
        self.clear();
        eprintln!("{}", message);
    }

    fn report_completion(&self) {
        self.clear();
    }
}
