use anyhow::Context;
use ccrm::domain::config::AppConfig;
use ccrm::{Records, init};
use ccrm_kernel::config::load_config;
use ccrm_logger::Logger;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // An explicit path must load; the default file is optional.
    let (config, fallback) = match std::env::args_os().nth(1) {
        Some(path) => (load_config::<AppConfig>(Some(&path)).context("Loading configuration")?, None),
        None => match load_config::<AppConfig>(None::<&str>) {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::default(), Some(err)),
        },
    };

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;
    if let Some(err) = fallback {
        warn!(error = %err, "No configuration file loaded, using built-in defaults");
    }

    let records = init(&config)?;
    log_catalog(&records);

    Ok(())
}

fn log_catalog(records: &Records) {
    for course in records.courses().list_active() {
        info!(
            semester = %course.semester(),
            instructor = course.instructor(),
            department = course.department(),
            "{course}"
        );
    }

    let stats = records.reporting().course_statistics();
    info!(
        total = stats.total_courses,
        active = stats.active_courses,
        departments = stats.by_department.len(),
        data_dir = %records.data_dir().display(),
        "Catalog ready"
    );
}
