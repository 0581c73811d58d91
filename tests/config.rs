#[cfg(test)]
mod tests {
    use breakplan::libs::config::{Config, CONFIG_FILE_NAME};
    use breakplan::libs::data_storage::DataStorage;
    use breakplan::libs::error::ValidationError;
    use breakplan::libs::generator::BreakPolicy;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("breakplan"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.breaks.is_none());
        assert_eq!(config.break_policy(), BreakPolicy::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_policy_values(_ctx: &mut ConfigTestContext) {
        let policy = BreakPolicy::default();
        assert_eq!(policy.anchors_percent, [25, 50, 75]);
        assert_eq!(policy.durations, [30, 45, 30]);
        assert_eq!(policy.staff_stagger, 20);
        assert_eq!(policy.department_gap, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            breaks: Some(BreakPolicy {
                anchors_percent: [20, 50, 80],
                durations: [15, 60, 15],
                staff_stagger: 15,
                department_gap: 5,
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        let loaded = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.break_policy().durations, [15, 60, 15]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_sections_are_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();

        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.trim(), "{}");
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_policy_is_rejected(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        let write = |anchors: &str, durations: &str, stagger: u32| {
            let content = format!(
                r#"{{"breaks":{{"anchors_percent":{},"durations":{},"staff_stagger":{},"department_gap":10}}}}"#,
                anchors, durations, stagger
            );
            std::fs::write(&path, content).unwrap();
        };

        write("[25,50,10000000]", "[30,45,30]", 20);
        let err = Config::read_from(&ctx.storage).unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::AnchorOutOfRange(10000000)));

        write("[25,50,75]", "[0,45,30]", 20);
        let err = Config::read_from(&ctx.storage).unwrap_err();
        assert!(matches!(err.downcast_ref::<ValidationError>(), Some(ValidationError::DurationOutOfRange { got: 0, .. })));

        write("[25,50,75]", "[30,121,30]", 20);
        assert!(Config::read_from(&ctx.storage).is_err());

        write("[25,50,75]", "[30,45,30]", 100000);
        assert!(Config::read_from(&ctx.storage).is_err());

        write("[0,50,100]", "[5,120,30]", 20);
        let policy = Config::read_from(&ctx.storage).unwrap().break_policy();
        assert_eq!(policy.durations, [5, 120, 30]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_policy_validation(_ctx: &mut ConfigTestContext) {
        assert_eq!(BreakPolicy::default().validate(), Ok(()));

        let policy = BreakPolicy {
            anchors_percent: [25, 101, 75],
            ..BreakPolicy::default()
        };
        assert_eq!(policy.validate(), Err(ValidationError::AnchorOutOfRange(101)));

        let policy = BreakPolicy {
            durations: [30, 4, 30],
            ..BreakPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "breaks = 1").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }
}
