use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, the config
/// file, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuillConfig {
    /// Build configuration
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Content directory containing markdown files
    pub content: String,
    /// Static asset directory copied verbatim into the output
    #[serde(rename = "static")]
    pub static_dir: String,
    /// Template file holding the page placeholders
    pub template: String,
    /// Output directory for the generated site
    pub output: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./content".to_string(),
            static_dir: "./static".to_string(),
            template: "./template.html".to_string(),
            output: "./public".to_string(),
            config: "./quill.toml".to_string(),
        }
    }
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
        }
    }
}

impl QuillConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (QUILL_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| "./quill.toml".to_string());

        let mut builder = ConfigBuilder::builder();

        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // Only layer the file in when it exists; a missing quill.toml
        // just means defaults.
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        builder = builder.add_source(
            Environment::with_prefix("QUILL")
                .prefix_separator("_")
                .separator("__"), // double underscore for nested keys
        );

        // CLI flags win over everything else
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(content) = args.get_one::<String>("source") {
            cli_overrides.insert("build.content".to_string(), content.clone());
        }
        if let Some(static_dir) = args.get_one::<String>("static") {
            cli_overrides.insert("build.static".to_string(), static_dir.clone());
        }
        if let Some(template) = args.get_one::<String>("template") {
            cli_overrides.insert("build.template".to_string(), template.clone());
        }
        if let Some(output) = args.get_one::<String>("output") {
            cli_overrides.insert("build.output".to_string(), output.clone());
        }
        if let Some(config) = args.get_one::<String>("config") {
            cli_overrides.insert("build.config".to_string(), config.clone());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        let merged = builder.build()?;
        let quill_config: QuillConfig = merged.try_deserialize()?;

        Ok(quill_config)
    }

    /// Get the build configuration
    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}

/// Load configuration specifically for build commands
pub fn load_build_config(args: &ArgMatches) -> Result<QuillConfig> {
    QuillConfig::load(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};

    #[test]
    fn test_default_config() {
        let config = QuillConfig::default();
        assert_eq!(config.build.content, "./content");
        assert_eq!(config.build.static_dir, "./static");
        assert_eq!(config.build.template, "./template.html");
        assert_eq!(config.build.output, "./public");
    }

    #[test]
    fn test_cli_args_override() {
        let app = Command::new("test")
            .arg(Arg::new("source").long("source").value_name("DIR"))
            .arg(Arg::new("static").long("static").value_name("DIR"))
            .arg(Arg::new("template").long("template").value_name("FILE"))
            .arg(Arg::new("output").long("output").value_name("DIR"))
            .arg(Arg::new("config").long("config").value_name("FILE"));

        let matches = app
            .try_get_matches_from(vec![
                "test",
                "--source",
                "/custom/content",
                "--output",
                "/custom/public",
            ])
            .unwrap();

        let config = QuillConfig::load(&matches).unwrap();
        assert_eq!(config.build.content, "/custom/content");
        assert_eq!(config.build.output, "/custom/public");
        // Should still have defaults for non-overridden values
        assert_eq!(config.build.template, "./template.html");
    }
}
