use crate::PendingAction;

#[test]
fn test_pending_action_labels() {
    assert_eq!(PendingAction::AdminAssign.as_str(), "ADMIN_ASSIGN");
    assert_eq!(
        PendingAction::AssigneeWaitingClientApproval.to_string(),
        "ASSIGNEE_WAITING_CLIENT_APPROVAL"
    );
}

#[test]
fn test_pending_action_all_labels_are_distinct() {
    let mut labels: Vec<&str> = PendingAction::ALL.iter().map(|a| a.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), PendingAction::ALL.len());
}

#[test]
fn test_pending_action_is_known_matches_exact_label_only() {
    assert!(PendingAction::is_known("ASSIGNEE_COMPLETE"));
    assert!(!PendingAction::is_known("assignee_complete"));
    assert!(!PendingAction::is_known("NOT_A_THING"));
}
