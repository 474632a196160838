use crate::config::LogLevel;

// Declare every log target once
macro_rules! define_log_targets {
    ($(($const_name:ident, $field_name:ident, $target_str:literal)),* $(,)?) => {
        $(
            pub const $const_name: &str = $target_str;
        )*

        pub fn log_targets() -> Vec<&'static str> {
            vec![
                $(
                    $const_name,
                )*
            ]
        }

        pub fn log_level_for(config: &crate::config::LogConfig, target: &str) -> LogLevel {
            match target {
                $(
                    $const_name => config.$field_name,
                )*
                _ => config.level,
            }
        }

        // Fails to compile if LogConfig is missing a target level field
        pub const fn validate_log_config_fields() {
            use crate::config::LogConfig;

            let _config = LogConfig {
                ansi_enabled: true,
                format: crate::config::LogFormat::Pretty,
                output: crate::config::LogOutput::Stdout,
                level: LogLevel::Info,
                $(
                    $field_name: LogLevel::Info,
                )*
            };
        }

        // When adding a target (NEW_TARGET, new_target_level, "new_target"):
        // 1. Add it to the define_log_targets! invocation below
        // 2. Add `pub new_target_level: LogLevel` with the default serde attribute to LogConfig
        // 3. Assign it in LogConfig::with_level and LogConfig::set_default_levels
    };
}

define_log_targets!(
    (DEVELOPMENT, development_level, "development"),
    (CONFIG, config_level, "config"),
    (SYNTH, synth_level, "synth"),
    (SCHEMA, schema_level, "schema"),
    (STORE, store_level, "store"),
    (EXPORT, export_level, "export"),
);

const _: () = validate_log_config_fields();
