//! Desktop asset host: saves assets into the download directory and opens
//! them with the system viewer.

use std::fs;
use std::path::{Component, Path, PathBuf};

use termfolio_terminal::AssetHost;
use termfolio_types::config::FolioConfig;
use termfolio_types::error::{FolioError, Result};

/// Resolves site-absolute asset paths (`/Resume.pdf`) against a local root.
pub struct DesktopHost {
    asset_root: PathBuf,
    download_dir: PathBuf,
}

impl DesktopHost {
    pub fn new(asset_root: PathBuf, download_dir: PathBuf) -> Self {
        Self {
            asset_root,
            download_dir,
        }
    }

    /// Use the configured download directory, else the user's, else the
    /// working directory.
    pub fn from_config(config: &FolioConfig) -> Self {
        let download_dir = config
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        log::info!(
            "assets from {}, downloads to {}",
            config.asset_root.display(),
            download_dir.display()
        );
        Self::new(config.asset_root.clone(), download_dir)
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let rel = Path::new(path.trim_start_matches('/'));
        if rel
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(FolioError::Asset(format!("refusing path outside assets: {path}")));
        }
        let full = self.asset_root.join(rel);
        if full.is_file() {
            Ok(full)
        } else {
            Err(FolioError::Asset(format!("{} not found", full.display())))
        }
    }
}

/// Accept only a bare file name, so a download never lands outside the
/// download directory.
fn plain_file_name(filename: &str) -> Result<&Path> {
    let name = Path::new(filename);
    let mut parts = name.components();
    match (parts.next(), parts.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(FolioError::Asset(format!("invalid download file name: {filename:?}"))),
    }
}

impl AssetHost for DesktopHost {
    fn save(&mut self, path: &str, filename: &str) -> Result<()> {
        let src = self.resolve(path)?;
        let dest = self.download_dir.join(plain_file_name(filename)?);
        fs::create_dir_all(&self.download_dir)?;
        fs::copy(&src, &dest)?;
        log::info!("saved {} to {}", src.display(), dest.display());
        Ok(())
    }

    fn open_external(&mut self, path: &str) -> Result<()> {
        let src = self.resolve(path)?;
        open::that(&src)
            .map_err(|e| FolioError::Asset(format!("opening {}: {e}", src.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_copies_into_download_dir() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("Resume.pdf"), b"%PDF-1.7").unwrap();

        let mut host = DesktopHost::new(
            assets.path().to_path_buf(),
            downloads.path().join("nested"),
        );
        host.save("/Resume.pdf", "Resume.pdf").unwrap();
        let copied = fs::read(downloads.path().join("nested").join("Resume.pdf")).unwrap();
        assert_eq!(copied, b"%PDF-1.7");
    }

    #[test]
    fn save_missing_asset_is_error() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let mut host = DesktopHost::new(assets.path().to_path_buf(), downloads.path().to_path_buf());
        let err = host.save("/Resume.pdf", "Resume.pdf").unwrap_err();
        assert!(matches!(err, FolioError::Asset(_)));
    }

    #[test]
    fn open_missing_asset_is_error() {
        let assets = tempfile::tempdir().unwrap();
        let mut host = DesktopHost::new(assets.path().to_path_buf(), assets.path().to_path_buf());
        assert!(host.open_external("/assets/docs/Resume.pdf").is_err());
    }

    #[test]
    fn parent_components_rejected() {
        let assets = tempfile::tempdir().unwrap();
        let mut host = DesktopHost::new(assets.path().to_path_buf(), assets.path().to_path_buf());
        let err = host.save("/../etc/passwd", "x").unwrap_err();
        assert!(format!("{err}").contains("outside assets"));
    }

    #[test]
    fn download_name_must_stay_in_download_dir() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("Resume.pdf"), b"%PDF").unwrap();
        let mut host = DesktopHost::new(
            assets.path().to_path_buf(),
            downloads.path().join("inner"),
        );
        for bad in ["../Resume.pdf", "/tmp/Resume.pdf", "docs/Resume.pdf", "", ".."] {
            let err = host.save("/Resume.pdf", bad).unwrap_err();
            assert!(format!("{err}").contains("invalid download file name"), "{bad}");
        }
        assert!(!downloads.path().join("Resume.pdf").exists());
        assert!(!downloads.path().join("inner").exists());
        host.save("/Resume.pdf", "CV.pdf").unwrap();
        assert!(downloads.path().join("inner").join("CV.pdf").is_file());
    }

    #[test]
    fn from_config_prefers_configured_dir() {
        let config = FolioConfig {
            download_dir: Some(PathBuf::from("/tmp/folio-downloads")),
            ..FolioConfig::default()
        };
        let host = DesktopHost::from_config(&config);
        assert_eq!(host.download_dir, PathBuf::from("/tmp/folio-downloads"));
        assert_eq!(host.asset_root, PathBuf::from("public"));
    }
}
