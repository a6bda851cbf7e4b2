use crate::domain::{DeviceProfile, ProfileError};
use crate::extensions::path_ext::FileName;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads and validates every profile in `directory` whose extension is one of `extensions`.
///
/// Files that cannot be read or that fail to decode are logged and skipped.
#[instrument]
pub async fn load_profiles_from(directory: &str, extensions: &[String]) -> Result<Vec<DeviceProfile>, LoaderError> {
    info!("📁 Loading device profiles...");
    let files = list_files(directory, extensions)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (profiles, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading device profiles... OK, {} loaded, {} failed", profiles.len(), errors.len());
    Ok(profiles.into_iter().filter_map(Result::ok).collect())
}

#[instrument]
async fn list_files(directory: &str, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                let matches_extension = path.lowercase_extension().is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)));
                if path.is_file() && matches_extension {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<DeviceProfile, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || decode(&path, &content).map_err(|e| LoaderError::Profile { source: e, path })).await?,
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn decode(path: &Path, content: &str) -> Result<DeviceProfile, ProfileError> {
    match path.lowercase_extension().as_deref() {
        Some("yaml" | "yml") => DeviceProfile::from_yaml(content),
        _ => DeviceProfile::from_json(content),
    }
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Profile { source, path } => warn!("⚠️ Rejected '{}': {}", path.string_file_name(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to read '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Profile { source: ProfileError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
