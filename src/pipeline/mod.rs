//! Research pipeline driver.
//!
//! A run moves through `Triage → [Clarify] → Instructions → Research →
//! Present/Persist` exactly once. Clarification runs only when triage asks for
//! it. Every stage propagates its errors; [`ResearchPipeline::run`] is the only
//! place they are caught and reported.

mod clarify;
mod present;

pub use clarify::*;
pub use present::*;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::backend::{ModelBackend, ResearchResult};
use crate::console::{offload, Terminal};
use crate::error::{AppError, AppResult};
use crate::reports::{confirms_save, ReportStore};
use crate::roles::{
    ClarifyingQuestions, ResearchInstructions, Role, RoleRegistry, StructuredOutput, TriageVerdict,
};

/// Prompt for the research topic.
pub const TOPIC_PROMPT: &str = "🤔 Research topic? ";

/// Prompt for the save confirmation.
pub const SAVE_PROMPT: &str = "\n💾 Save to file? (Y/n): ";

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No topic was given; nothing ran.
    NoQuery,
    /// The report was shown, and saved when `saved` is set.
    Completed { saved: Option<PathBuf> },
    /// A stage failed and the error line was printed.
    Failed { message: String },
}

/// Drives one research run against a backend and a terminal.
pub struct ResearchPipeline<R, W> {
    backend: Arc<dyn ModelBackend>,
    roles: RoleRegistry,
    terminal: Terminal<R, W>,
    reports: ReportStore,
}

impl<R: BufRead, W: Write> ResearchPipeline<R, W> {
    /// Create a pipeline.
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        roles: RoleRegistry,
        terminal: Terminal<R, W>,
        reports: ReportStore,
    ) -> Self {
        Self {
            backend,
            roles,
            terminal,
            reports,
        }
    }

    /// Execute one run. `topic` skips the topic prompt when given.
    pub async fn run(&mut self, topic: Option<String>) -> RunOutcome {
        match self.drive(topic).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Research run failed");
                let message = e.to_string();
                if let Err(io_err) = self.terminal.say(format_args!("❌ Error: {}", message)) {
                    warn!(error = %io_err, "Failed to print error line");
                }
                RunOutcome::Failed { message }
            }
        }
    }

    /// Consume the pipeline and return its terminal.
    pub fn into_terminal(self) -> Terminal<R, W> {
        self.terminal
    }

    async fn drive(&mut self, topic: Option<String>) -> AppResult<RunOutcome> {
        self.print_banner()?;

        let query = match topic {
            Some(topic) => topic.trim().to_string(),
            None => self.terminal.prompt(TOPIC_PROMPT)?.unwrap_or_default(),
        };
        if query.is_empty() {
            info!("No research topic given");
            return Ok(RunOutcome::NoQuery);
        }

        let result = self.research(&query).await?;

        self.terminal.say(render_results(&result.body))?;
        let citations = result.citations();
        debug!(citations = citations.len(), "Citations extracted");
        self.terminal.say(render_sources(&citations))?;

        let answer = self.terminal.prompt(SAVE_PROMPT)?.unwrap_or_default();
        if !confirms_save(&answer) {
            return Ok(RunOutcome::Completed { saved: None });
        }

        let path = self.reports.save(&query, &result.body, Local::now()).await?;
        self.terminal
            .say(format_args!("✅ Saved to {}", path.display()))?;

        Ok(RunOutcome::Completed { saved: Some(path) })
    }

    /// Run every backend stage for `query` and return the research result.
    pub async fn research(&mut self, query: &str) -> AppResult<ResearchResult> {
        self.terminal
            .say(format_args!("🔬 Deep Research: {}\n", query))?;

        let verdict: TriageVerdict = self
            .call_structured(Role::Triage, query, "🔍 Analyzing query...")
            .await?;
        info!(
            needs_clarification = verdict.needs_clarification,
            "Triage complete"
        );

        let enriched = if verdict.needs_clarification {
            self.clarify(query).await?
        } else {
            query.to_string()
        };

        let brief: ResearchInstructions = self
            .call_structured(
                Role::Instructions,
                &enriched,
                "✍️ Writing research instructions...",
            )
            .await?;
        debug!(chars = brief.instructions.len(), "Research instructions ready");

        self.call_research(&brief.instructions).await
    }

    /// Ask clarifying questions and return the enriched query.
    async fn clarify(&mut self, query: &str) -> AppResult<String> {
        let set: ClarifyingQuestions = self
            .call_structured(Role::Clarify, query, "📝 Getting clarifications...")
            .await?;

        if set.questions.is_empty() {
            debug!("No clarifying questions returned");
            return Ok(query.to_string());
        }

        let answers = collect_answers(&mut self.terminal, &set.questions)?;
        info!(
            questions = set.questions.len(),
            answers = answers.len(),
            "Clarification complete"
        );

        Ok(enrich_query(query, &answers))
    }

    async fn call_structured<T: StructuredOutput>(
        &mut self,
        role: Role,
        input: &str,
        label: &str,
    ) -> AppResult<T> {
        let binding = self.roles.get(role)?.clone();
        let backend = Arc::clone(&self.backend);
        let input = input.to_string();
        let animate = self.terminal.animates();

        let value = offload(self.terminal.output_mut(), label, animate, async move {
            backend
                .run_structured(&binding, &input)
                .await
                .map_err(AppError::from)
        })
        .await?;

        Ok(T::from_value(value)?)
    }

    async fn call_research(&mut self, instructions: &str) -> AppResult<ResearchResult> {
        let binding = self.roles.get(Role::Research)?.clone();
        let backend = Arc::clone(&self.backend);
        let input = instructions.to_string();
        let animate = self.terminal.animates();

        offload(
            self.terminal.output_mut(),
            "🔬 Conducting deep research... (2-3 minutes)",
            animate,
            async move {
                backend
                    .run_research(&binding, &input)
                    .await
                    .map_err(AppError::from)
            },
        )
        .await
    }

    fn print_banner(&mut self) -> AppResult<()> {
        let model = self.roles.research_model().unwrap_or("unconfigured model");
        self.terminal
            .say(format_args!("🔬 Deep Research\nUsing {}\n", model))?;
        Ok(())
    }
}
