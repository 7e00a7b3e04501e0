//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::engine::{FetchFolderPageRequest, FetchFolderPageResponse, FolderPager};
use crate::error::{Result, ResultExt};
use crate::provider::JsonFileProvider;
use crate::types::{Folder, FolderId, OrgId};
use std::fmt::Write as _;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::All { org } => self.all(&config, *org).await,
            Commands::Page {
                org,
                size,
                starting_at,
            } => self.page(&config, *org, *size, *starting_at).await,
            Commands::Walk {
                org,
                size,
                starting_at,
            } => self.walk(&config, *org, *size, *starting_at).await,
            Commands::Serve { port } => {
                let server = crate::cli::ServerConfig {
                    data_path: config.data.path.clone(),
                    pagination: config.pagination,
                };
                crate::cli::serve(server, port.unwrap_or(config.server.port)).await
            }
        }
    }

    /// Load the config file if one was given, then apply flag overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PagerConfig::default(),
        };
        if let Some(data) = &self.cli.data {
            config.data.path.clone_from(data);
        }
        Ok(config)
    }

    fn pager(&self, config: &PagerConfig) -> FolderPager<JsonFileProvider> {
        FolderPager::new(JsonFileProvider::new(&config.data.path))
    }

    async fn all(&self, config: &PagerConfig, org: OrgId) -> Result<()> {
        let response = self.pager(config).fetch_all(org).await?;
        match self.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&response).context("Failed to encode folders")?
            ),
            OutputFormat::Pretty => print!("{}", render_folders(&response.folders)),
        }
        Ok(())
    }

    async fn page(
        &self,
        config: &PagerConfig,
        org: OrgId,
        size: Option<usize>,
        starting_at: Option<FolderId>,
    ) -> Result<()> {
        let size = config.pagination.resolve_size(size)?;
        let request = FetchFolderPageRequest::new(org, size).starting_at(starting_at);
        let page = self.pager(config).fetch_page(&request).await?;
        self.emit_page(1, &page)
    }

    async fn walk(
        &self,
        config: &PagerConfig,
        org: OrgId,
        size: Option<usize>,
        starting_at: Option<FolderId>,
    ) -> Result<()> {
        let size = config.pagination.resolve_size(size)?;
        let pages = self.pager(config).walk(org, size, starting_at).await?;
        if self.cli.verbose {
            let total: usize = pages.iter().map(|p| p.folders.len()).sum();
            eprintln!("{} pages, {total} folders", pages.len());
        }
        for (index, page) in pages.iter().enumerate() {
            self.emit_page(index + 1, page)?;
        }
        Ok(())
    }

    fn emit_page(&self, number: usize, page: &FetchFolderPageResponse) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(page).context("Failed to encode page")?
            ),
            OutputFormat::Pretty => print!("{}", render_page(number, page)),
        }
        Ok(())
    }
}

/// Render folders as an aligned id/name listing
fn render_folders(folders: &[Folder]) -> String {
    let mut out = String::new();
    for folder in folders {
        let _ = writeln!(out, "{}  {}", folder.id, folder.name);
    }
    if folders.is_empty() {
        out.push_str("(no folders)\n");
    }
    out
}

/// Render one page with a header and its continuation cursor
fn render_page(number: usize, page: &FetchFolderPageResponse) -> String {
    let mut out = format!("Page {number} ({} folders)\n", page.folders.len());
    out.push_str(&render_folders(&page.folders));
    match page.next {
        Some(next) => {
            let _ = writeln!(out, "next: {next}");
        }
        None => out.push_str("next: (end)\n"),
    }
    out
}
