//! Best-effort launching of external resources such as the resume document.

use std::process::Command;
use tracing::{info, warn};

/// Collaborator that performs [`crate::shell::Effect::OpenResource`].
///
/// Opening is fire-and-forget; failures are logged, never surfaced.
pub trait ResourceOpener {
    fn open(&self, locator: &str);
}

/// Opens resources with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn open(&self, locator: &str) {
        if try_open(locator) {
            info!(locator, "opened resource");
        } else {
            warn!(locator, "failed to open resource");
        }
    }
}

/// Opener that does nothing; used by `--json` and non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl ResourceOpener for NoopOpener {
    fn open(&self, _locator: &str) {}
}

fn try_open(locator: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        return Command::new("open")
            .arg(locator)
            .status()
            .is_ok_and(|status| status.success());
    }
    #[cfg(target_os = "windows")]
    {
        return Command::new("cmd")
            .args(["/C", "start", "", locator])
            .status()
            .is_ok_and(|status| status.success());
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return Command::new("xdg-open")
            .arg(locator)
            .status()
            .is_ok_and(|status| status.success());
    }
    #[allow(unreachable_code)]
    {
        let _ = locator;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl ResourceOpener for RecordingOpener {
        fn open(&self, locator: &str) {
            self.opened.borrow_mut().push(locator.to_string());
        }
    }

    #[test]
    fn openers_are_usable_as_trait_objects() {
        let recorder = RecordingOpener::default();
        let openers: [&dyn ResourceOpener; 2] = [&NoopOpener, &recorder];
        for opener in openers {
            opener.open("/resume.pdf");
        }
        assert_eq!(recorder.opened.borrow().as_slice(), ["/resume.pdf"]);
    }
}
