use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub fn parse_log_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

pub fn setup_logging(log_level: &str) {
    // try_init: interactive mode may fall back to CLI setup after logging is up
    let _ = env_logger::Builder::new()
        .filter_level(parse_log_level(log_level))
        .format_target(false)
        .try_init();
}

/// Spinner shown while the engine runs.
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                pb.set_style(style);
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn finish(&self, success: bool) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let msg = if success {
            format!("Conversion completed in {:.2}s", elapsed)
        } else {
            format!("Conversion failed after {:.2}s", elapsed)
        };
        self.pb.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("error"), log::LevelFilter::Error);
        assert_eq!(parse_log_level("loud"), log::LevelFilter::Info);
    }

    #[test]
    fn test_hidden_progress() {
        let pm = ProgressManager::new("Converting", true);
        pm.finish(true);
        assert!(pm.pb.is_hidden());
    }
}
