/// Action labels the external workflow understands.
///
/// Used to populate the portal's action picker. Submissions are never
/// rejected for carrying a label outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAction {
    AdminAssign,
    AdminReturn,
    AdminInProgress,
    AdminHold,
    AdminComplete,
    AdminCancel,
    AssigneeInProgress,
    AssigneeHold,
    AssigneeWaitingClientApproval,
    AssigneeComplete,
    AssigneeReturn,
    AssigneeCancel,
}

impl PendingAction {
    pub const ALL: [PendingAction; 12] = [
        Self::AdminAssign,
        Self::AdminReturn,
        Self::AdminInProgress,
        Self::AdminHold,
        Self::AdminComplete,
        Self::AdminCancel,
        Self::AssigneeInProgress,
        Self::AssigneeHold,
        Self::AssigneeWaitingClientApproval,
        Self::AssigneeComplete,
        Self::AssigneeReturn,
        Self::AssigneeCancel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminAssign => "ADMIN_ASSIGN",
            Self::AdminReturn => "ADMIN_RETURN",
            Self::AdminInProgress => "ADMIN_IN_PROGRESS",
            Self::AdminHold => "ADMIN_HOLD",
            Self::AdminComplete => "ADMIN_COMPLETE",
            Self::AdminCancel => "ADMIN_CANCEL",
            Self::AssigneeInProgress => "ASSIGNEE_IN_PROGRESS",
            Self::AssigneeHold => "ASSIGNEE_HOLD",
            Self::AssigneeWaitingClientApproval => "ASSIGNEE_WAITING_CLIENT_APPROVAL",
            Self::AssigneeComplete => "ASSIGNEE_COMPLETE",
            Self::AssigneeReturn => "ASSIGNEE_RETURN",
            Self::AssigneeCancel => "ASSIGNEE_CANCEL",
        }
    }

    pub fn is_known(value: &str) -> bool {
        Self::ALL.iter().any(|a| a.as_str() == value)
    }
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
