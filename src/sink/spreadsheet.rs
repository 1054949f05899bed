//! src/sink/spreadsheet.rs
use crate::configuration::SinkSettings;
use crate::sink::{AuthError, Row, RowSink, SinkAuthorizer, SinkError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

#[derive(serde::Deserialize)]
struct Keyfile {
    client_email: String,
    token: SecretString,
}

/// Builds a spreadsheet session from the JSON keyfile named in the sink
/// settings.
pub struct SpreadsheetAuthorizer {
    settings: SinkSettings,
}

impl SpreadsheetAuthorizer {
    pub fn new(settings: SinkSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SinkAuthorizer for SpreadsheetAuthorizer {
    #[tracing::instrument(name = "Authorize spreadsheet sink", skip(self), fields(spreadsheet_id = %self.settings.spreadsheet_id))]
    async fn authorize(&self) -> Result<Box<dyn RowSink>, AuthError> {
        let raw =
            std::fs::read_to_string(&self.settings.keyfile_path).map_err(|source| {
                AuthError::Keyfile {
                    path: self.settings.keyfile_path.clone(),
                    source,
                }
            })?;
        let keyfile: Keyfile = serde_json::from_str(&raw)?;
        if keyfile.token.expose_secret().is_empty() {
            return Err(AuthError::MissingToken);
        }
        tracing::debug!(client_email = %keyfile.client_email, "Obtained sink credentials");

        Ok(Box::new(SpreadsheetSink {
            http: reqwest::Client::new(),
            endpoint: self.settings.endpoint.clone(),
            spreadsheet_id: self.settings.spreadsheet_id.clone(),
            token: keyfile.token,
        }))
    }
}

/// Authorized append session against the spreadsheet values API.
#[derive(Debug)]
pub struct SpreadsheetSink {
    http: reqwest::Client,
    endpoint: String,
    spreadsheet_id: String,
    token: SecretString,
}

#[async_trait]
impl RowSink for SpreadsheetSink {
    #[tracing::instrument(name = "Append rows to spreadsheet", skip_all, fields(rows = rows.len()))]
    async fn append(&self, rows: &[Row]) -> Result<(), SinkError> {
        let values: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| serde_json::json!([row.word, row.count]))
            .collect();
        let url = format!(
            "{}/v4/spreadsheets/{}/values/A1:append?valueInputOption=RAW",
            self.endpoint, self.spreadsheet_id
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(&serde_json::json!({ "values": values }))
            .send()
            .await
            .map_err(|err| SinkError::Transport(err.into()))?;

        match response.error_for_status() {
            Ok(_) => Ok(()),
            Err(err) => Err(SinkError::Rejected(err.to_string())),
        }
    }
}
