use std::{fmt, str::FromStr};

/// Rank given to any label outside [`WorkflowState`].
pub const UNKNOWN_RANK: u32 = 999;

/// Lifecycle stage of a project, in default display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    Completed,
    Assigned,
    Approved,
    Closed,
    Created,
}

impl WorkflowState {
    pub const ALL: [WorkflowState; 5] = [
        WorkflowState::Completed,
        WorkflowState::Assigned,
        WorkflowState::Approved,
        WorkflowState::Closed,
        WorkflowState::Created,
    ];

    pub fn rank(self) -> u32 {
        match self {
            WorkflowState::Completed => 0,
            WorkflowState::Assigned => 1,
            WorkflowState::Approved => 2,
            WorkflowState::Closed => 3,
            WorkflowState::Created => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowState::Completed => "COMPLETED",
            WorkflowState::Assigned => "ASSIGNED",
            WorkflowState::Approved => "APPROVED",
            WorkflowState::Closed => "CLOSED",
            WorkflowState::Created => "CREATED",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowState {
    type Err = ();

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        WorkflowState::ALL
            .into_iter()
            .find(|state| state.as_str() == label)
            .ok_or(())
    }
}

/// Rank of a raw state label. Labels are matched exactly; anything else gets
/// [`UNKNOWN_RANK`].
pub fn rank_of(label: &str) -> u32 {
    label
        .parse::<WorkflowState>()
        .map_or(UNKNOWN_RANK, WorkflowState::rank)
}
