//! Wizard controller
//!
//! Drives the current-step pointer through the registered steps: validates
//! the draft on every advance, keeps a history for back-navigation, and
//! finalizes by committing the whole draft through the persistence gateway.
//! One controller owns one session's state; hosts sharing a controller
//! across callers must serialize access externally.

use crate::error::{OutsetError, OutsetResult};
use crate::storage::gateway::PersistenceGateway;

use super::draft::{Draft, DraftStore};
use super::registry::StepRegistry;
use super::step::{ValidationOutcome, WizardStep};

/// Lifecycle state of one wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Collecting input at the step with this index
    AtStep(usize),
    /// A finalize commit is in flight
    Finalizing,
    /// The draft was committed; terminal
    Finalized,
    /// The session was aborted and the draft discarded; terminal
    Cancelled,
}

impl WizardState {
    /// Short name used in invalid-transition errors
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::AtStep(_) => "collecting input",
            WizardState::Finalizing => "finalizing",
            WizardState::Finalized => "finalized",
            WizardState::Cancelled => "cancelled",
        }
    }

    /// Whether this state admits no further operations except `reset`
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Finalized | WizardState::Cancelled)
    }
}

/// Result of a successful `advance` call
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Validation passed; the wizard is now at the given step index
    Moved { step: usize },
    /// Validation rejected the draft; state is unchanged
    Rejected(ValidationOutcome),
    /// The last step passed validation and the draft was committed
    Finalized,
}

/// State machine driving one wizard session
pub struct WizardController {
    registry: StepRegistry,
    store: DraftStore,
    history: Vec<usize>,
    state: WizardState,
    gateway: Box<dyn PersistenceGateway>,
}

impl WizardController {
    /// Create a controller positioned at the first registered step
    ///
    /// Fails if the registry is empty: `AtStep(0)` must reference a real
    /// step from the moment of construction.
    pub fn new(
        registry: StepRegistry,
        gateway: Box<dyn PersistenceGateway>,
    ) -> OutsetResult<Self> {
        if registry.is_empty() {
            return Err(OutsetError::Validation(
                "wizard requires at least one registered step".into(),
            ));
        }

        Ok(Self {
            registry,
            store: DraftStore::new(),
            history: Vec::new(),
            state: WizardState::AtStep(0),
            gateway,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The registered steps
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// The session's draft
    pub fn draft(&self) -> &Draft {
        self.store.get()
    }

    /// Visited step indices available for back-navigation
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The step the wizard is currently collecting input for
    pub fn current_step(&self) -> OutsetResult<&WizardStep> {
        let index = self.require_active("inspect current step")?;
        self.registry.step_at(index)
    }

    /// Shallow-merge a partial draft into the session draft
    pub fn update_draft(&mut self, partial: Draft) -> OutsetResult<&Draft> {
        self.require_active("update draft")?;
        Ok(self.store.patch(partial))
    }

    /// Validate the current step and move forward
    ///
    /// On the last step a passing validation commits the draft through the
    /// gateway: success finalizes the session; failure restores the current
    /// step with the draft intact and surfaces a retryable `Persistence`
    /// error.
    pub async fn advance(&mut self) -> OutsetResult<Advance> {
        let index = self.require_active("advance")?;
        let step = self.registry.step_at(index)?;

        let outcome = step.validate(self.store.get());
        if !outcome.is_valid() {
            return Ok(Advance::Rejected(outcome));
        }

        if index + 1 < self.registry.count() {
            // History never holds duplicate consecutive entries
            if self.history.last() != Some(&index) {
                self.history.push(index);
            }
            self.state = WizardState::AtStep(index + 1);
            return Ok(Advance::Moved { step: index + 1 });
        }

        // Last step: the commit is the single in-flight operation. Another
        // advance observing `Finalizing` fails instead of racing.
        self.state = WizardState::Finalizing;
        match self.gateway.commit(self.store.get()).await {
            Ok(()) => {
                // The session draft dies with the session; the committed
                // copy now lives behind the gateway
                self.store.reset();
                self.state = WizardState::Finalized;
                Ok(Advance::Finalized)
            }
            Err(e) => {
                self.state = WizardState::AtStep(index);
                Err(e.into())
            }
        }
    }

    /// Return to the most recently visited step without re-validating
    ///
    /// Draft fields filled on later steps are preserved.
    pub fn retreat(&mut self) -> OutsetResult<usize> {
        self.require_active("retreat")?;
        let prior = self.history.pop().ok_or(OutsetError::NoPriorStep)?;
        self.state = WizardState::AtStep(prior);
        Ok(prior)
    }

    /// Abort the session and discard the draft; idempotent
    pub fn cancel(&mut self) -> OutsetResult<()> {
        match self.state {
            WizardState::Cancelled => Ok(()),
            WizardState::Finalizing => Err(OutsetError::OperationInProgress),
            WizardState::Finalized => {
                Err(OutsetError::invalid_transition("cancel", self.state.name()))
            }
            WizardState::AtStep(_) => {
                self.store.reset();
                self.history.clear();
                self.state = WizardState::Cancelled;
                Ok(())
            }
        }
    }

    /// Re-initialize to the first step with an empty draft
    ///
    /// The only operation permitted from a terminal state.
    pub fn reset(&mut self) -> OutsetResult<()> {
        if self.state == WizardState::Finalizing {
            return Err(OutsetError::OperationInProgress);
        }
        self.store.reset();
        self.history.clear();
        self.state = WizardState::AtStep(0);
        Ok(())
    }

    /// Completion fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        match self.state {
            WizardState::AtStep(index) => (index + 1) as f64 / self.registry.count() as f64,
            WizardState::Finalizing | WizardState::Finalized => 1.0,
            WizardState::Cancelled => 0.0,
        }
    }

    fn require_active(&self, operation: &'static str) -> OutsetResult<usize> {
        match self.state {
            WizardState::AtStep(index) => Ok(index),
            WizardState::Finalizing => Err(OutsetError::OperationInProgress),
            state => Err(OutsetError::invalid_transition(operation, state.name())),
        }
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("registry", &self.registry)
            .field("store", &self.store)
            .field("history", &self.history)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::storage::gateway::{GatewayError, MemoryGateway};

    fn budget_registry() -> StepRegistry {
        let mut registry = StepRegistry::new();
        registry
            .register(
                WizardStep::new("income", "Income")
                    .require("monthly_income", "Monthly income is required"),
            )
            .unwrap();
        registry
            .register(WizardStep::new("spending", "Spending").validate_with(|draft| {
                match draft.get_i64("spending_cap") {
                    Some(cents) if cents >= 0 => ValidationOutcome::ok(),
                    Some(_) => ValidationOutcome::reject("spending_cap", "must not be negative"),
                    None => ValidationOutcome::reject("spending_cap", "is required"),
                }
            }))
            .unwrap();
        registry.register(WizardStep::new("review", "Review")).unwrap();
        registry
    }

    fn budget_controller() -> (WizardController, Arc<MemoryGateway>) {
        let gateway = Arc::new(MemoryGateway::new());
        let controller =
            WizardController::new(budget_registry(), Box::new(gateway.clone())).unwrap();
        (controller, gateway)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[tokio::test]
    async fn test_full_run_through_finalize() {
        let (mut ctrl, gateway) = budget_controller();
        assert_eq!(ctrl.state(), WizardState::AtStep(0));
        assert_eq!(ctrl.current_step().unwrap().id(), "income");
        assert!(close(ctrl.progress(), 1.0 / 3.0));

        ctrl.update_draft(Draft::new().with("monthly_income", 500000)).unwrap();
        assert_eq!(ctrl.advance().await.unwrap(), Advance::Moved { step: 1 });
        assert!(close(ctrl.progress(), 2.0 / 3.0));

        ctrl.update_draft(Draft::new().with("spending_cap", 300000)).unwrap();
        assert_eq!(ctrl.advance().await.unwrap(), Advance::Moved { step: 2 });
        assert!(close(ctrl.progress(), 1.0));

        assert_eq!(ctrl.advance().await.unwrap(), Advance::Finalized);
        assert_eq!(ctrl.state(), WizardState::Finalized);
        assert!(ctrl.draft().is_empty());

        let committed = gateway.committed().unwrap();
        assert_eq!(committed.get_i64("monthly_income"), Some(500000));
        assert_eq!(committed.get_i64("spending_cap"), Some(300000));
    }

    #[tokio::test]
    async fn test_index_increases_by_one_per_advance() {
        let (mut ctrl, _gateway) = budget_controller();
        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();

        for expected in 1..3 {
            let advance = ctrl.advance().await.unwrap();
            assert_eq!(advance, Advance::Moved { step: expected });
            assert_eq!(ctrl.state(), WizardState::AtStep(expected));
        }
    }

    #[tokio::test]
    async fn test_rejected_advance_leaves_state_unchanged() {
        let (mut ctrl, gateway) = budget_controller();
        ctrl.update_draft(Draft::new().with("monthly_income", 500000)).unwrap();
        ctrl.advance().await.unwrap();

        ctrl.update_draft(Draft::new().with("spending_cap", -1)).unwrap();
        let advance = ctrl.advance().await.unwrap();

        match advance {
            Advance::Rejected(outcome) => {
                assert!(!outcome.is_valid());
                assert!(outcome.errors().contains_key("spending_cap"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(ctrl.state(), WizardState::AtStep(1));
        assert_eq!(gateway.attempts(), 0);
    }

    #[tokio::test]
    async fn test_no_silent_skip_ahead() {
        let (mut ctrl, _gateway) = budget_controller();

        // First step's validator has not passed, so step 1 stays unreachable
        let advance = ctrl.advance().await.unwrap();
        assert!(matches!(advance, Advance::Rejected(_)));
        assert_eq!(ctrl.state(), WizardState::AtStep(0));
    }

    #[tokio::test]
    async fn test_retreat_restores_prior_step_and_keeps_draft() {
        let (mut ctrl, _gateway) = budget_controller();
        ctrl.update_draft(Draft::new().with("monthly_income", 500000)).unwrap();
        ctrl.advance().await.unwrap();

        // Field filled on the later step survives the retreat
        ctrl.update_draft(Draft::new().with("spending_cap", 300000)).unwrap();
        assert_eq!(ctrl.retreat().unwrap(), 0);
        assert_eq!(ctrl.state(), WizardState::AtStep(0));
        assert_eq!(ctrl.draft().get_i64("spending_cap"), Some(300000));

        assert!(matches!(ctrl.retreat().unwrap_err(), OutsetError::NoPriorStep));
    }

    #[tokio::test]
    async fn test_history_has_no_consecutive_duplicates() {
        let (mut ctrl, _gateway) = budget_controller();
        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();

        ctrl.advance().await.unwrap();
        ctrl.retreat().unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();

        assert_eq!(ctrl.history(), &[0, 1]);
    }

    #[tokio::test]
    async fn test_cancel_discards_draft_and_is_idempotent() {
        let (mut ctrl, _gateway) = budget_controller();
        ctrl.update_draft(Draft::new().with("monthly_income", 500000)).unwrap();

        ctrl.cancel().unwrap();
        assert_eq!(ctrl.state(), WizardState::Cancelled);
        assert!(ctrl.draft().is_empty());
        assert!(close(ctrl.progress(), 0.0));

        // Idempotent
        ctrl.cancel().unwrap();

        assert!(matches!(
            ctrl.advance().await.unwrap_err(),
            OutsetError::InvalidTransition { .. }
        ));
        assert!(matches!(
            ctrl.update_draft(Draft::new()).unwrap_err(),
            OutsetError::InvalidTransition { .. }
        ));
    }

    #[tokio::test]
    async fn test_finalized_is_terminal_and_gateway_not_reinvoked() {
        let (mut ctrl, gateway) = budget_controller();
        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();
        assert_eq!(ctrl.advance().await.unwrap(), Advance::Finalized);
        assert_eq!(gateway.attempts(), 1);

        let err = ctrl.advance().await.unwrap_err();
        assert!(matches!(err, OutsetError::InvalidTransition { .. }));
        assert_eq!(gateway.attempts(), 1);

        assert!(matches!(
            ctrl.cancel().unwrap_err(),
            OutsetError::InvalidTransition { .. }
        ));
    }

    #[tokio::test]
    async fn test_gateway_failure_preserves_draft_for_retry() {
        let (mut ctrl, gateway) = budget_controller();
        gateway.fail_times(1);

        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();

        let err = ctrl.advance().await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(ctrl.state(), WizardState::AtStep(2));
        assert_eq!(ctrl.draft().get_i64("monthly_income"), Some(500000));

        // The retry succeeds with the same draft
        assert_eq!(ctrl.advance().await.unwrap(), Advance::Finalized);
        assert_eq!(gateway.attempts(), 2);
    }

    #[tokio::test]
    async fn test_reset_reinitializes_from_terminal_states() {
        let (mut ctrl, _gateway) = budget_controller();
        ctrl.update_draft(Draft::new().with("monthly_income", 500000)).unwrap();
        ctrl.cancel().unwrap();

        ctrl.reset().unwrap();
        assert_eq!(ctrl.state(), WizardState::AtStep(0));
        assert!(ctrl.draft().is_empty());
        assert!(ctrl.history().is_empty());

        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();
        assert_eq!(ctrl.state(), WizardState::Finalized);

        ctrl.reset().unwrap();
        assert_eq!(ctrl.state(), WizardState::AtStep(0));
        assert!(ctrl.draft().is_empty());
    }

    #[tokio::test]
    async fn test_empty_registry_rejected() {
        let err =
            WizardController::new(StepRegistry::new(), Box::new(MemoryGateway::new())).unwrap_err();
        assert!(err.is_validation());
    }

    /// Gateway whose commit never resolves, to park a finalize in flight.
    struct PendingGateway;

    #[async_trait]
    impl PersistenceGateway for PendingGateway {
        async fn commit(&self, _draft: &Draft) -> Result<(), GatewayError> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_advance_during_pending_finalize_is_operation_in_progress() {
        let mut ctrl =
            WizardController::new(budget_registry(), Box::new(PendingGateway)).unwrap();
        ctrl.update_draft(
            Draft::new()
                .with("monthly_income", 500000)
                .with("spending_cap", 300000),
        )
        .unwrap();
        ctrl.advance().await.unwrap();
        ctrl.advance().await.unwrap();

        {
            let mut finalize = tokio_test::task::spawn(ctrl.advance());
            assert!(finalize.poll().is_pending());
        }

        // The dropped commit is still considered in flight; in-flight
        // finalize cannot be cancelled, only observed.
        assert_eq!(ctrl.state(), WizardState::Finalizing);
        assert!(close(ctrl.progress(), 1.0));
        assert!(matches!(
            ctrl.advance().await.unwrap_err(),
            OutsetError::OperationInProgress
        ));
        assert!(matches!(
            ctrl.update_draft(Draft::new()).unwrap_err(),
            OutsetError::OperationInProgress
        ));
        assert!(matches!(
            ctrl.cancel().unwrap_err(),
            OutsetError::OperationInProgress
        ));
    }
}
