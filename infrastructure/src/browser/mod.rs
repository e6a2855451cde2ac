//! Navigator adapters
//!
//! [`SystemBrowserNavigator`] hands URLs to the platform opener;
//! [`ConsoleNavigator`] only prints them (headless runs, `--no-browser`).

use millet_application::Navigator;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["cmd"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "gio", "sensible-browser"];

/// Opens URLs in the user's default browser.
///
/// Created via `try_new()`, which returns `None` when no opener is
/// installed so callers can degrade to [`ConsoleNavigator`].
pub struct SystemBrowserNavigator {
    opener: PathBuf,
}

impl SystemBrowserNavigator {
    pub fn try_new() -> Option<Self> {
        let found = OPENERS
            .iter()
            .find_map(|name| which::which(name).ok());
        match found {
            Some(opener) => {
                debug!("Using browser opener {}", opener.display());
                Some(Self { opener })
            }
            None => {
                debug!("No browser opener found, falling back to console output");
                None
            }
        }
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.opener);
        if cfg!(target_os = "windows") {
            cmd.args(["/C", "start", "", url]);
        } else if self.opener.ends_with("gio") {
            cmd.args(["open", url]);
        } else {
            cmd.arg(url);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Spawn the opener and wait for it on a background thread so the
    /// exited process is reaped.
    fn launch(&self, url: &str) -> std::io::Result<JoinHandle<()>> {
        let mut child = self.command(url).spawn()?;
        let opener = self.opener.clone();
        std::thread::Builder::new()
            .name("millet-opener".to_string())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    debug!("{} exited with {}", opener.display(), status)
                }
                Ok(_) => {}
                Err(e) => warn!("Failed to wait for {}: {}", opener.display(), e),
            })
    }
}

impl Navigator for SystemBrowserNavigator {
    fn open(&self, url: &str) {
        match self.launch(url) {
            Ok(_) => info!("Opened {}", url),
            Err(e) => warn!("Failed to open {} with {}: {}", url, self.opener.display(), e),
        }
    }
}

/// Prints the URL instead of opening it
#[derive(Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn open(&self, url: &str) {
        println!("Open in your browser: {}", url);
    }
}

#[cfg(all(test, not(any(target_os = "macos", target_os = "windows"))))]
mod tests {
    use super::*;

    #[test]
    fn test_gio_gets_open_subcommand() {
        let navigator = SystemBrowserNavigator {
            opener: PathBuf::from("/usr/bin/gio"),
        };
        let cmd = navigator.command("https://milletamma.com");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["open", "https://milletamma.com"]);
    }

    #[test]
    fn test_xdg_open_gets_bare_url() {
        let navigator = SystemBrowserNavigator {
            opener: PathBuf::from("/usr/bin/xdg-open"),
        };
        let cmd = navigator.command("https://milletamma.com");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["https://milletamma.com"]);
    }

    /// Both spawning tests count children of the whole test process
    static SPAWN_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Children of this process that have exited but were never waited on
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "<pid> (<comm>) <state> <ppid> ..."; comm may contain spaces
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[test]
    fn test_launch_reaps_opener() {
        let _lock = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let navigator = SystemBrowserNavigator {
            opener: PathBuf::from("/bin/true"),
        };
        for _ in 0..3 {
            navigator
                .launch("https://milletamma.com")
                .unwrap()
                .join()
                .unwrap();
        }
        assert_eq!(zombie_children(), 0);
    }

    #[test]
    fn test_open_leaves_no_zombies() {
        let _lock = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let navigator = SystemBrowserNavigator {
            opener: PathBuf::from("/bin/true"),
        };
        for _ in 0..3 {
            navigator.open("https://milletamma.com");
        }

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while zombie_children() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
        assert_eq!(zombie_children(), 0);
    }
}
