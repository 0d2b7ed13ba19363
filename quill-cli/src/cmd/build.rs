use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use quill_core::SiteBuilder;

use crate::config::load_build_config;

pub fn make_subcommand() -> Command {
    Command::new("build")
        .about("Build the site from markdown content")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Content directory containing markdown files"),
        )
        .arg(
            Arg::new("static")
                .long("static")
                .value_name("DIR")
                .help("Static asset directory copied into the output"),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("FILE")
                .help("HTML template with {{ Title }} and {{ Content }} placeholders"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the generated site"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let quill_config = load_build_config(args)?;
    let build = quill_config.build_config();

    let site = SiteBuilder::new()
        .content_dir(&build.content)
        .static_dir(&build.static_dir)
        .template_path(&build.template)
        .output_dir(&build.output)
        .build()?;
    site.generate_all()?;

    println!("Site built successfully in {}", build.output);

    Ok(())
}
