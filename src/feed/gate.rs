//! Two-phase commit between the tentative selection and the filtered view.

use super::selection::FilterSelection;

/// Where the gate is in its apply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    /// Nothing committed since the last selection change.
    #[default]
    Idle,
    /// Apply requested, waiting for the user to confirm.
    PendingApply {
        /// Phase to restore if the user cancels.
        was_committed: bool,
    },
    /// The current selection has been applied.
    Committed,
}

/// Tracks whether the tentative selection has been applied, and what was
/// applied last.
///
/// The committed selection survives invalidation: editing the checkboxes
/// does not change what is displayed until the next confirmed apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmGate {
    phase: GatePhase,
    committed_selection: FilterSelection,
}

impl ConfirmGate {
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_committed(&self) -> bool {
        self.phase == GatePhase::Committed
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, GatePhase::PendingApply { .. })
    }

    pub fn committed_selection(&self) -> &FilterSelection {
        &self.committed_selection
    }

    /// An empty committed selection is the unfiltered state.
    pub fn is_filtering_active(&self) -> bool {
        !self.committed_selection.is_empty()
    }

    /// Selection changed: drop back to `Idle` from any phase.
    pub fn invalidate(&mut self) {
        self.phase = GatePhase::Idle;
    }

    /// Enter `PendingApply`, remembering the phase to restore on cancel.
    pub fn begin_apply(&mut self) {
        if self.is_pending() {
            return;
        }
        self.phase = GatePhase::PendingApply {
            was_committed: self.is_committed(),
        };
    }

    /// Resolve a pending apply. Returns `true` when `selection` was committed.
    ///
    /// A resolution that arrives when nothing is pending is ignored.
    pub fn resolve(&mut self, confirmed: bool, selection: &FilterSelection) -> bool {
        let GatePhase::PendingApply { was_committed } = self.phase else {
            return false;
        };

        if confirmed {
            self.committed_selection = selection.clone();
            self.phase = GatePhase::Committed;
            true
        } else {
            self.phase = if was_committed {
                GatePhase::Committed
            } else {
                GatePhase::Idle
            };
            false
        }
    }
}
