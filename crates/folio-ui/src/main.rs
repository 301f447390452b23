#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Folio UI wasm entry point and native offline preview.

#[cfg(target_arch = "wasm32")]
fn main() {
    folio_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs;
    use std::io::{self, Write};
    use std::path::PathBuf;

    use anyhow::{Context, bail};
    use clap::{Args, Parser, Subcommand};
    use folio_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
    use folio_ui::preview::{PreviewOptions, render_preview};
    use folio_ui::{Hydration, PageConfig};

    #[derive(Debug, Parser)]
    #[command(name = "folio-ui", about = "Folio portfolio page tooling")]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Hydrate a site checkout offline and print every slot's markup.
        Preview(PreviewArgs),
    }

    #[derive(Debug, Args)]
    struct PreviewArgs {
        /// Site directory the asset paths are resolved against.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Language to render (`en`, `zh`).
        #[arg(long)]
        lang: Option<String>,
        /// JSON page configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Log output format (`pretty`, `json`).
        #[arg(long, env = "FOLIO_LOG_FORMAT")]
        log_format: Option<String>,
        /// Log level or filter directive.
        #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
        log_level: String,
    }

    pub(super) fn run() -> anyhow::Result<()> {
        match Cli::parse().command {
            Command::Preview(args) => preview(args),
        }
    }

    fn preview(args: PreviewArgs) -> anyhow::Result<()> {
        let format = match args.log_format.as_deref() {
            Some(name) => LogFormat::from_name(name)
                .with_context(|| format!("unknown log format `{name}`"))?,
            None => LogFormat::infer(),
        };
        init_logging(&LoggingConfig {
            level: &args.log_level,
            format,
        })?;

        let config = match &args.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                PageConfig::from_json(&raw)
                    .with_context(|| format!("invalid page config {}", path.display()))?
            }
            None => PageConfig::default(),
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start runtime")?;
        let output = runtime.block_on(render_preview(PreviewOptions {
            root: args.root,
            language: args.lang,
            config,
        }));
        if output.hydration == Hydration::Unhydrated {
            bail!("translations failed to load; see log output");
        }

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "<!-- title: {} ({}) -->", output.title, output.language)?;
        for (id, html) in output.slots {
            writeln!(stdout, "<!-- #{id} -->")?;
            writeln!(stdout, "{html}")?;
        }
        Ok(())
    }
}
