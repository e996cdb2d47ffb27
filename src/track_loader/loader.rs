use crate::domain::TrackingSession;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{debug, info, instrument, warn};

/// Loads the sessions in `directory` ordered by start time, skipping files that fail to load.
#[instrument]
pub async fn load_sessions_from(directory: &str, extension: &str) -> Result<Vec<TrackingSession>, LoaderError> {
    info!("📁 Loading tracking sessions...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (sessions, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading tracking sessions... OK, {} loaded, {} failed", sessions.len(), errors.len());
    let mut sessions: Vec<TrackingSession> = sessions.into_iter().filter_map(Result::ok).collect();
    sessions.sort_by_key(|session| session.start_time);
    Ok(sessions)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<TrackingSession, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || {
                debug!("📄 Parsing '{}'", file_name(&path));
                serde_json::from_str::<TrackingSession>(&content).map_err(|e| LoaderError::Parse { source: e, path })
            })
            .await?,
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Parse { source, path } => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::env::temp_dir;

    fn resources(path: &str) -> String {
        format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), path)
    }

    #[tokio::test]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let temp_dir = temp_dir().join(format!("hike_stats_list_files_{}", std::process::id()));
        fs::create_dir_all(&temp_dir).await?;

        let file1 = temp_dir.join("track.json");
        let file2 = temp_dir.join("notes.txt");
        let file3 = temp_dir.join("track2.json");

        fs::write(&file1, "{}").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "{}").await?;
        fs::create_dir_all(temp_dir.join("nested.json")).await?;

        let mut files = list_files(temp_dir.to_string_lossy().as_ref(), "json").await?;
        files.sort();
        let string_file_names = files.iter().map(|e| e.to_string_lossy()).collect::<Vec<_>>();

        assert_eq!(
            string_file_names,
            vec![file1.to_string_lossy().into_owned(), file3.to_string_lossy().into_owned(),]
        );

        fs::remove_dir_all(&temp_dir).await?;
        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn load_files_returns_a_session_for_a_valid_track_file() -> Result<(), LoaderError> {
        let path = PathBuf::from(resources("tracks/morningHike.json"));
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Ok(session) => {
                assert_eq!(session.id, "session-morning-hike");
                assert_eq!(session.points.len(), 4);
            }
            Err(err) => assert!(false, "Expected a session, found {:?}", err),
        }

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn load_files_returns_an_error_for_an_invalid_track_file() -> Result<(), LoaderError> {
        let path = PathBuf::from(resources("tracks/invalid/missingRecordedAt.json"));
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path]).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(err) => assert!(matches!(err, LoaderError::Parse { source: _, path: _ })),
            _ => assert!(false, "Expected a LoaderError::Parse"),
        }

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn load_files_returns_an_error_for_a_missing_file() {
        let result = load_files(vec![PathBuf::from(resources("tracks/doesNotExist.json"))]).await;
        assert!(matches!(result[0], Err(LoaderError::Io { source: _, path: Some(_) })));
    }

    #[test_log::test(tokio::test)]
    async fn load_sessions_from_skips_invalid_files_and_orders_by_start_time() -> Result<(), LoaderError> {
        let sessions = load_sessions_from(&resources("tracks"), "json").await?;

        let ids = sessions.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["session-morning-hike", "session-evening-walk"]);

        Ok(())
    }

    #[rstest]
    #[case("tracks/morningHike.json", "morningHike.json")]
    #[case("morningHike", "morningHike")]
    #[case("/", "unknown")]
    fn file_name_falls_back_to_unknown(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(file_name(Path::new(path)), expected);
    }

    #[test_log::test(tokio::test)]
    async fn load_sessions_from_fails_for_a_missing_directory() {
        let result = load_sessions_from(&resources("does/not/exist"), "json").await;
        assert!(matches!(result, Err(LoaderError::Io { source: _, path: None })));
    }
}
