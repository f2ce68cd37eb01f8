use clap::Parser;
use comic_packer::{logging, output, pack};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "comic-packer")]
#[command(about = "Pack image folders into comic chapters with ComicInfo.xml")]
#[command(long_about = "\
Pack image folders into comic chapters with ComicInfo.xml

Every subdirectory of each ROOT is one chapter. Its name supplies the metadata:

  comics/
  ├── Title [Writer] (Action) (Drama)/     # Series=Title, Writer=Penciller=Writer
  │   ├── 001.jpg                          # Genre=\"Action, Drama\"
  │   └── 002.jpg
  └── output/                              # Written here, never read as a source
      └── Title [Writer] (Action) (Drama)/
          ├── Chapter01.zip
          ├── cover.jpg                    # First image by name
          └── ComicInfo.xml

Existing output directories are skipped, so re-running only packs new folders.")]
#[command(version = version_string())]
struct Cli {
    /// Directories whose subdirectories are packed
    #[arg(required = true)]
    roots: Vec<PathBuf>,

    /// Do not copy a cover image next to the archive
    #[arg(long)]
    no_cover: bool,

    /// File name of the chapter archive
    #[arg(long, default_value = "Chapter01.zip")]
    archive_name: String,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pack_config(&self) -> pack::PackConfig {
        pack::PackConfig {
            generate_cover: !self.no_cover,
            archive_name: self.archive_name.clone(),
            ..pack::PackConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = cli.pack_config();
    let reports: Vec<pack::RootReport> = cli
        .roots
        .iter()
        .map(|root| pack::pack_root(root, &config))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            output::print_root_report(report);
        }
    }

    Ok(())
}
