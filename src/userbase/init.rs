use crate::api::UserbaseApi;
use crate::config::UserbaseConfig;
use crate::error::{Result, UserbaseError};
use crate::event_log::EventLog;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct UserbaseContext {
    pub api: UserbaseApi<FileStore>,
    pub config: UserbaseConfig,
    pub data_dir: PathBuf,
}

/// Where the store, log and config live.
///
/// An explicit directory wins, then the per-user data directory when
/// `use_global` is set, then the working directory.
pub fn resolve_data_dir(
    cwd: &Path,
    explicit: Option<&Path>,
    use_global: bool,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            cwd.join(dir)
        });
    }
    if use_global {
        let proj_dirs = ProjectDirs::from("com", "userbase", "userbase").ok_or_else(|| {
            UserbaseError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    Ok(cwd.to_path_buf())
}

/// Load config, open the event log and build the API over `data_dir`.
pub fn initialize(data_dir: PathBuf) -> Result<UserbaseContext> {
    let config = UserbaseConfig::load(&data_dir)?;
    let log = EventLog::open(config.log_path(&data_dir))?;

    let store = FileStore::new(
        config.primary_path(&data_dir),
        config.backup_path(&data_dir),
        log.clone(),
    );
    let api = UserbaseApi::new(store, log, config.match_options(), data_dir.clone());

    Ok(UserbaseContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewUser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let cwd = Path::new("/work");
        let dir = resolve_data_dir(cwd, Some(Path::new("people")), true).unwrap();
        assert_eq!(dir, PathBuf::from("/work/people"));

        let dir = resolve_data_dir(cwd, Some(Path::new("/srv/people")), false).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/people"));
    }

    #[test]
    fn defaults_to_working_directory() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_data_dir(cwd, None, false).unwrap(), cwd);
    }

    #[test]
    fn initialize_uses_configured_file_names() {
        let temp = TempDir::new().unwrap();
        let mut config = UserbaseConfig::default();
        config.set("primary-file", "main.json").unwrap();
        config.set("backup-file", "mirror.json").unwrap();
        config.save(temp.path()).unwrap();

        let mut ctx = initialize(temp.path().to_path_buf()).unwrap();
        ctx.api.add_user(NewUser::new("Ann", 40)).unwrap();

        assert!(temp.path().join("main.json").exists());
        assert!(temp.path().join("mirror.json").exists());
        let log = fs::read_to_string(temp.path().join("user_database_log.txt")).unwrap();
        assert!(log.contains("User added: Name=Ann"));
    }
}
