use anyhow::Context;
use quill_config::QuillConfig;
use quill_core::identity::AuthIdentity;
use quill_db::service::TaskService;
use quill_intake::TaskIntake;

use crate::cli::GlobalFlags;
use crate::context::resolve_identity;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TaskService,
    pub config: QuillConfig,
    pub identity: Option<AuthIdentity>,
}

impl AppContext {
    /// Open the configured task database and resolve the acting user.
    pub async fn init(config: QuillConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(dir) = config.database.parent_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let service = TaskService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open task database at {}", config.database.path))?;

        let identity = resolve_identity(flags, &config);
        if identity.is_none() {
            tracing::debug!("no user configured; commands that touch tasks will fail");
        }

        Ok(Self {
            service,
            config,
            identity,
        })
    }

    /// The create-task workflow writing through this context's database.
    #[must_use]
    pub const fn intake(&self) -> TaskIntake<&TaskService> {
        TaskIntake::with_keyword_suggestions(&self.service)
    }
}
