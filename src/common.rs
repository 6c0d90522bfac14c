use crate::config::Config;
use anyhow::{Result, anyhow};
use clap::Args;

#[derive(Args, Clone, Default, Debug)]
pub struct CommonParams {
    /// Override the configured Jira ticket prefix
    #[arg(
        long,
        help = "Override the configured Jira ticket prefix (e.g. PDE for PDE-123)"
    )]
    pub ticket_prefix: Option<String>,

    /// Override the configured email signature line
    #[arg(long, help = "Override the email signature line")]
    pub team_signature: Option<String>,
}

impl CommonParams {
    pub fn apply_to_config(&self, config: &mut Config) -> Result<bool> {
        let mut changes_made = false;

        if let Some(prefix) = &self.ticket_prefix {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(anyhow!("Ticket prefix must not be empty"));
            }
            if config.ticket_prefix != prefix {
                config.ticket_prefix = prefix.to_string();
                changes_made = true;
            }
        }

        if let Some(signature) = &self.team_signature
            && config.team_signature != *signature
        {
            config.team_signature.clone_from(signature);
            changes_made = true;
        }

        Ok(changes_made)
    }
}
