mod loader;
mod model;

pub use loader::{LOCAL_CONFIG_NAME, load_config, load_from_path};
pub use model::{BoundaryConfig, Config, ReportConfig, ScanConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.scan.extensions, vec!["py".to_string()]);
        assert!(!config.scan.exclude_dirs.is_empty());
        assert_eq!(config.report.dir, "reports");
    }

    #[test]
    fn sections_are_independently_overridable() {
        let config = Config {
            report: ReportConfig {
                dir: "health".to_string(),
            },
            ..Config::default()
        };

        assert_eq!(config.report.dir, "health");
        assert_eq!(config.scan, ScanConfig::default());
    }
}
