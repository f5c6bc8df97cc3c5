#[cfg(feature = "cli")]
use crate::domain::model::ApiRequest;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_exactly_one, validate_query_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "number-facts")]
#[command(about = "Report number-theoretic facts about a number as JSON")]
pub struct CliConfig {
    /// Value of the `number` parameter, e.g. 153 or 7.5
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    #[arg(long, help = "Raw query string, e.g. 'number=153'")]
    pub query: Option<String>,

    #[arg(long, help = "Print only the JSON body instead of the full response")]
    pub body_only: bool,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_request(&self) -> ApiRequest {
        match (&self.number, &self.query) {
            (Some(number), _) => ApiRequest::with_number(number.clone()),
            (None, Some(query)) => ApiRequest::from_query_string(query),
            (None, None) => ApiRequest::default(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_exactly_one("NUMBER", &self.number, "--query", &self.query)?;

        if let Some(query) = &self.query {
            validate_query_string("--query", query)?;
        }

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}
