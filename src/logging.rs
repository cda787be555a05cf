use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name) {
            init_result = Err(err);
        }
    });
    init_result
}

fn init_logging_inner(app_name: &str) -> Result<(), String> {
    let level = level_source(
        std::env::var("IBAN_CHECK_LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let level = parse_level(level.as_deref());
    let log_dir = log_dir(std::env::var("IBAN_CHECK_LOG_DIR").ok().as_deref());

    // stdout carries the verdict, so log lines go to stderr.
    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}

fn level_source(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary.or(fallback)
}

fn parse_level(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|value| value.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

fn log_dir(value: Option<&str>) -> Option<PathBuf> {
    match value.map(str::trim) {
        None | Some("off") | Some("none") | Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}
