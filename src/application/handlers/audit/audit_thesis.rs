//! AuditThesisHandler - Classify an AI initiative through the model, with fallback

use std::sync::Arc;

use thiserror::Error;

use crate::domain::audit::{
    build_prompt, response_schema, AuditDiagnostic, AuditOutcome, AuditRequest,
};
use crate::domain::foundation::SessionId;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, DiagnosticSchemaValidator, FinishReason,
    RequestMetadata, ResponseFormat, SchemaValidationError, TokenUsage,
};

/// Name the schema is registered under with providers that need one.
const SCHEMA_NAME: &str = "audit_diagnostic";

/// Command to audit an initiative.
#[derive(Debug, Clone)]
pub struct AuditThesisCommand {
    pub request: AuditRequest,
    pub session_id: Option<SessionId>,
}

impl AuditThesisCommand {
    pub fn new(request: AuditRequest) -> Self {
        Self {
            request,
            session_id: None,
        }
    }

    pub fn for_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Why a model answer was not usable.
///
/// Never returned to callers; every variant is logged and replaced by the
/// fallback diagnostic.
#[derive(Debug, Error)]
pub enum AuditFailure {
    #[error("provider call failed: {0}")]
    Provider(#[from] AIError),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("response was cut off at the token limit")]
    Truncated,

    #[error("response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("response does not match the diagnostic schema: {0}")]
    Schema(#[from] SchemaValidationError),

    #[error("response could not be read as a diagnostic: {0}")]
    Deserialize(String),
}

/// A trusted diagnostic plus what the provider reported about producing it.
struct ModelAnswer {
    diagnostic: AuditDiagnostic,
    usage: TokenUsage,
    model: String,
    finish_reason: FinishReason,
}

/// Handler for thesis audits.
pub struct AuditThesisHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    validator: Arc<dyn DiagnosticSchemaValidator>,
}

impl<P: ?Sized + AIProvider> AuditThesisHandler<P> {
    pub fn new(ai_provider: Arc<P>, validator: Arc<dyn DiagnosticSchemaValidator>) -> Self {
        Self {
            ai_provider,
            validator,
        }
    }

    /// Audits the initiative. Never fails: any problem yields the fallback.
    pub async fn handle(&self, cmd: AuditThesisCommand) -> AuditOutcome {
        let provider = self.ai_provider.provider_info();

        match self.try_audit(&cmd).await {
            Ok(answer) => {
                tracing::info!(
                    session_id = ?cmd.session_id,
                    provider = %provider.name,
                    model = %answer.model,
                    prompt_tokens = answer.usage.prompt_tokens,
                    completion_tokens = answer.usage.completion_tokens,
                    total_tokens = answer.usage.total_tokens,
                    finish_reason = ?answer.finish_reason,
                    category = %answer.diagnostic.category,
                    roi_estimate = %answer.diagnostic.roi_estimate,
                    "Audit completed"
                );
                AuditOutcome::from_model(answer.diagnostic)
            }
            Err(failure) => {
                let retryable = matches!(&failure, AuditFailure::Provider(e) if e.is_retryable());
                tracing::warn!(
                    session_id = ?cmd.session_id,
                    provider = %provider.name,
                    model = %provider.model,
                    retryable,
                    error = %failure,
                    "Audit failed, returning fallback diagnostic"
                );
                AuditOutcome::fallback()
            }
        }
    }

    async fn try_audit(&self, cmd: &AuditThesisCommand) -> Result<ModelAnswer, AuditFailure> {
        let request = CompletionRequest::new(
            RequestMetadata::new(cmd.session_id),
            build_prompt(&cmd.request),
        )
        .with_response_format(ResponseFormat::json_schema(
            SCHEMA_NAME,
            response_schema().clone(),
        ));

        let response = self.ai_provider.complete(request).await?;
        if response.finish_reason == FinishReason::Length {
            return Err(AuditFailure::Truncated);
        }

        Ok(ModelAnswer {
            diagnostic: self.parse_diagnostic(&response.content)?,
            usage: response.usage,
            model: response.model,
            finish_reason: response.finish_reason,
        })
    }

    /// Parses and validates the model's answer text.
    fn parse_diagnostic(&self, content: &str) -> Result<AuditDiagnostic, AuditFailure> {
        if content.trim().is_empty() {
            return Err(AuditFailure::EmptyResponse);
        }

        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| AuditFailure::MalformedJson(e.to_string()))?;

        self.validator.validate(&value)?;

        serde_json::from_value(value).map_err(|e| AuditFailure::Deserialize(e.to_string()))
    }
}
