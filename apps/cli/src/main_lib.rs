use std::sync::Arc;

use anyhow::bail;
use chrono::Local;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use networth_core::utils::sanitize_value_input;
use networth_core::{
    CategoryRegistry, FileReportExporter, ItemField, ItemKind, LedgerService, LedgerServiceTrait,
    ReportExporter, ReportFormat,
};

use crate::commands::{Command, HELP};
use crate::config::{Config, LogFormat};
use crate::views;

const PROMPT: &str = "networth> ";

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so they never interleave with the views on stdout.
    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// One interactive session: a ledger, its categories and an export target.
pub struct Session {
    ledger_service: Arc<dyn LedgerServiceTrait>,
    exporter: Arc<dyn ReportExporter>,
    default_format: ReportFormat,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let category_registry = Arc::new(CategoryRegistry::default());
        Self {
            ledger_service: Arc::new(LedgerService::with_starter_rows(category_registry)),
            exporter: Arc::new(FileReportExporter::new(config.export_dir.clone())),
            default_format: config.report_format,
        }
    }

    /// Runs `command` and returns the text to show the user.
    pub async fn execute(&self, command: Command) -> anyhow::Result<String> {
        tracing::debug!(?command, "Executing command");
        let service = &self.ledger_service;
        let registry = service.category_registry();

        let output = match command {
            Command::Add(kind) => {
                let (ledger, id) = service.add_item(kind)?;
                format!(
                    "Added {} #{}\n\n{}",
                    kind,
                    id,
                    views::render_items(&ledger, registry, kind)
                )
            }
            Command::Remove(kind, id) => {
                self.ensure_exists(kind, id)?;
                let ledger = service.remove_item(id, kind)?;
                views::render_items(&ledger, registry, kind)
            }
            Command::SetName(kind, id, name) => {
                self.ensure_exists(kind, id)?;
                let ledger = service.update_field(id, kind, ItemField::Name, &name)?;
                views::render_items(&ledger, registry, kind)
            }
            Command::SetValue(kind, id, raw) => {
                self.ensure_exists(kind, id)?;
                let value = sanitize_value_input(&raw);
                let ledger = service.update_field(id, kind, ItemField::Value, &value)?;
                format!(
                    "{}\n\n{}",
                    views::render_items(&ledger, registry, kind),
                    views::render_summary(&service.get_summary()?)
                )
            }
            Command::SetCategory(kind, id, key) => {
                self.ensure_exists(kind, id)?;
                if !registry.contains(kind, &key) {
                    bail!(
                        "Unknown {} category '{}'. Type 'categories {}' to list them.",
                        kind,
                        key,
                        kind
                    );
                }
                let ledger = service.update_category(id, kind, &key)?;
                views::render_items(&ledger, registry, kind)
            }
            Command::Categories(kind) => views::render_categories(registry, kind),
            Command::List => {
                views::render_ledger(&service.get_ledger()?, registry, &service.get_summary()?)
            }
            Command::Overview => {
                let report = service.build_report(Local::now().date_naive())?;
                views::render_overview(&report)
            }
            Command::Summary => views::render_summary(&service.get_summary()?),
            Command::Export(format) => self.export(format.unwrap_or(self.default_format)).await,
            Command::Help => HELP.to_string(),
            Command::Quit | Command::Nothing => String::new(),
        };
        Ok(output)
    }

    /// Builds and writes the report. Failures are logged and described to the
    /// user; the ledger is left as it was.
    async fn export(&self, format: ReportFormat) -> String {
        let report = match self.ledger_service.build_report(Local::now().date_naive()) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Error building report: {}", e);
                return format!("Export failed: {}", e);
            }
        };

        match self.exporter.export(&report, format).await {
            Ok(path) => format!("Report written to {}", path.display()),
            Err(e) => {
                tracing::error!("Error exporting {} report: {}", format, e);
                format!("Export failed: {}", e)
            }
        }
    }

    fn ensure_exists(&self, kind: ItemKind, id: u32) -> anyhow::Result<()> {
        if self.ledger_service.get_ledger()?.find(kind, id).is_none() {
            bail!("There is no {} #{}", kind, id);
        }
        Ok(())
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let session = Session::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let intro = session.execute(Command::List).await?;
    write_block(&mut stdout, "Track your wealth. Type 'help' for commands.").await?;
    write_block(&mut stdout, &intro).await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                write_block(&mut stdout, &e.to_string()).await?;
                continue;
            }
        };

        match session.execute(command).await {
            Ok(output) if output.is_empty() => {}
            Ok(output) => write_block(&mut stdout, &output).await?,
            Err(e) => {
                tracing::warn!("Command failed: {:#}", e);
                write_block(&mut stdout, &format!("Error: {:#}", e)).await?;
            }
        }
    }

    tracing::info!("Session closed");
    Ok(())
}

async fn write_block(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
