use fridge_logbook::availability::ServiceMode;
use fridge_logbook::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const MANAGED_VARS: &[&str] = &[
    "LOGBOOK_PROFILE",
    "LOGBOOK_API_BIND_ADDR",
    "LOGBOOK_LOG_LEVEL",
    "LOGBOOK_LOG_FORMAT",
    "LOGBOOK_DATABASE_URL",
    "LOGBOOK_DB_MAX_CONNECTIONS",
    "LOGBOOK_RUN_MIGRATIONS",
    "LOGBOOK_DEFAULT_MIN_TEMP",
    "LOGBOOK_DEFAULT_MAX_TEMP",
];

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        for key in MANAGED_VARS {
            env::remove_var(key);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

fn loader_for(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_base_dir(PathBuf::from(dir.path()))
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "json");
    assert_eq!(cfg.database_url, None);
    assert!(cfg.run_migrations);
    assert_eq!(cfg.default_band().min_temp, 0.0);
    assert_eq!(cfg.default_band().max_temp, 5.0);
    assert_eq!(ServiceMode::from_config(&cfg), ServiceMode::Demo);
    cfg.bind_addr().expect("default bind addr parses");
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "LOGBOOK_API_BIND_ADDR=127.0.0.1:3000\n");
    write_env_file(
        &temp_dir,
        ".env.test",
        "LOGBOOK_API_BIND_ADDR=192.168.0.10:5000\nLOGBOOK_DEFAULT_MAX_TEMP=8\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "LOGBOOK_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "LOGBOOK_PROFILE=test\nLOGBOOK_API_BIND_ADDR=127.0.0.1:4000\n",
    );

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    assert_eq!(cfg.default_max_temp, 8.0);
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "LOGBOOK_API_BIND_ADDR=127.0.0.1:3000\nLOGBOOK_LOG_FORMAT=json\n",
    );

    unsafe {
        env::set_var("LOGBOOK_API_BIND_ADDR", "0.0.0.0:9090");
        env::set_var("LOGBOOK_LOG_FORMAT", "pretty");
    }

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with env override");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:9090");
    assert_eq!(cfg.log_format, "pretty");

    clear_env();
}

#[test]
fn database_url_switches_to_live_mode() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "LOGBOOK_DATABASE_URL=postgres://kitchen:secret@db:5432/logbook\nLOGBOOK_RUN_MIGRATIONS=false\n",
    );

    let cfg = loader_for(&temp_dir).load().expect("config loads");

    assert_eq!(ServiceMode::from_config(&cfg), ServiceMode::Live);
    assert!(!cfg.run_migrations);
    let redacted = cfg.redacted_json().unwrap();
    assert!(!redacted.contains("secret"));
    assert!(redacted.contains("db:5432"));
    clear_env();
}

#[test]
fn blank_database_url_stays_in_demo_mode() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("LOGBOOK_DATABASE_URL", "   ");
    }

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_for(&temp_dir).load().expect("config loads");

    assert_eq!(cfg.database_url, None);
    assert_eq!(ServiceMode::from_config(&cfg), ServiceMode::Demo);
    clear_env();
}

#[test]
fn invalid_bind_addr_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("LOGBOOK_API_BIND_ADDR", "not-an-addr");
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_for(&temp_dir)
        .load()
        .expect_err("invalid bind addr should fail");
    assert!(format!("{}", err).contains("invalid api bind address"));

    clear_env();
}

#[test]
fn invalid_values_are_reported_by_key() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();

    unsafe {
        env::set_var("LOGBOOK_RUN_MIGRATIONS", "sometimes");
    }
    let err = loader_for(&temp_dir).load().expect_err("bad bool fails");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "RUN_MIGRATIONS"));
    clear_env();

    unsafe {
        env::set_var("LOGBOOK_DEFAULT_MIN_TEMP", "cold");
    }
    let err = loader_for(&temp_dir).load().expect_err("bad float fails");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "DEFAULT_MIN_TEMP"));
    clear_env();

    unsafe {
        env::set_var("LOGBOOK_DEFAULT_MIN_TEMP", "6");
        env::set_var("LOGBOOK_DEFAULT_MAX_TEMP", "2");
    }
    let err = loader_for(&temp_dir).load().expect_err("inverted band fails");
    assert!(matches!(err, ConfigError::InvalidDefaultBand { .. }));
    clear_env();
}
