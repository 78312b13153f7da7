//! Side effects that run after a command's output has been revealed.

use std::fmt;
use std::rc::Rc;

use termfolio_types::config::ResumeConfig;
use termfolio_types::error::{FolioError, Result};

/// The outside world a download command talks to.
///
/// The desktop front end copies files and launches viewers; tests use a
/// recording fake.
pub trait AssetHost {
    /// Save the asset at `path` under the suggested `filename`.
    fn save(&mut self, path: &str, filename: &str) -> Result<()>;

    /// Open the asset at `path` in a separate viewer.
    fn open_external(&mut self, path: &str) -> Result<()>;
}

/// Host for sessions that have no download support. Every request fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl AssetHost for NullHost {
    fn save(&mut self, path: &str, _filename: &str) -> Result<()> {
        Err(FolioError::Asset(format!("no asset host to save {path}")))
    }

    fn open_external(&mut self, path: &str) -> Result<()> {
        Err(FolioError::Asset(format!("no asset host to open {path}")))
    }
}

/// A save-or-open request for a static asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub path: String,
    pub filename: String,
    /// Opened externally if saving `path` fails.
    pub fallback_path: String,
}

impl Download {
    /// Try to save; on failure open the fallback. When both fail the error
    /// names both causes.
    pub fn run(&self, host: &mut dyn AssetHost) -> Result<()> {
        match host.save(&self.path, &self.filename) {
            Ok(()) => {
                log::info!("saved {} as {}", self.path, self.filename);
                Ok(())
            },
            Err(e) => {
                log::warn!(
                    "saving {} failed ({e}), opening {} instead",
                    self.path,
                    self.fallback_path
                );
                host.open_external(&self.fallback_path).map_err(|open_err| {
                    FolioError::Effect(format!(
                        "download of {} failed: {e}; fallback {}: {open_err}",
                        self.path, self.fallback_path
                    ))
                })
            },
        }
    }
}

impl From<&ResumeConfig> for Download {
    fn from(cfg: &ResumeConfig) -> Self {
        Self {
            path: cfg.path.clone(),
            filename: cfg.filename.clone(),
            fallback_path: cfg.fallback_path.clone(),
        }
    }
}

/// What a command does once its output is fully shown.
#[derive(Clone)]
pub enum SideEffect {
    /// Empty the session's output log.
    Clear,
    /// Save (or open) a static asset through the session's [`AssetHost`].
    Download(Download),
    /// Arbitrary zero-argument action.
    Action(Rc<dyn Fn() -> Result<()>>),
}

impl SideEffect {
    /// Wrap a closure as an [`SideEffect::Action`].
    pub fn action<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self::Action(Rc::new(f))
    }
}

impl fmt::Debug for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => f.write_str("Clear"),
            Self::Download(d) => f.debug_tuple("Download").field(d).finish(),
            Self::Action(_) => f.write_str("Action(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fail_save: bool,
        fail_open: bool,
        calls: Vec<String>,
    }

    impl AssetHost for Recorder {
        fn save(&mut self, path: &str, filename: &str) -> Result<()> {
            self.calls.push(format!("save {path} {filename}"));
            if self.fail_save {
                Err(FolioError::Asset("blocked".into()))
            } else {
                Ok(())
            }
        }

        fn open_external(&mut self, path: &str) -> Result<()> {
            self.calls.push(format!("open {path}"));
            if self.fail_open {
                Err(FolioError::Asset("no viewer".into()))
            } else {
                Ok(())
            }
        }
    }

    fn resume() -> Download {
        Download::from(&ResumeConfig::default())
    }

    #[test]
    fn save_success_skips_fallback() {
        let mut host = Recorder::default();
        resume().run(&mut host).unwrap();
        assert_eq!(host.calls, vec!["save /Resume.pdf Resume.pdf"]);
    }

    #[test]
    fn save_failure_opens_fallback() {
        let mut host = Recorder {
            fail_save: true,
            ..Recorder::default()
        };
        resume().run(&mut host).unwrap();
        assert_eq!(
            host.calls,
            vec!["save /Resume.pdf Resume.pdf", "open /assets/docs/Resume.pdf"]
        );
    }

    #[test]
    fn double_failure_is_effect_error() {
        let mut host = Recorder {
            fail_save: true,
            fail_open: true,
            ..Recorder::default()
        };
        let err = resume().run(&mut host).unwrap_err();
        assert!(matches!(err, FolioError::Effect(_)));
        let msg = format!("{err}");
        assert!(msg.starts_with("side effect failed: download of /Resume.pdf"));
        assert!(msg.contains("blocked"));
        assert!(msg.contains("no viewer"));
    }

    #[test]
    fn null_host_fails_both() {
        let mut host = NullHost;
        assert!(resume().run(&mut host).is_err());
    }

    #[test]
    fn debug_hides_closure() {
        let e = SideEffect::action(|| Ok(()));
        assert_eq!(format!("{e:?}"), "Action(..)");
        assert_eq!(format!("{:?}", SideEffect::Clear), "Clear");
    }
}
