use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send a workflow action for a requisition
    Submit {
        /// Requisition ID
        #[arg(long)]
        req_id: String,

        /// Pending action label (e.g. ADMIN_ASSIGN)
        #[arg(long)]
        action: String,

        /// Email of the person taking the action
        #[arg(long)]
        by: String,

        /// Free-text reason
        #[arg(long)]
        reason: Option<String>,

        /// New assignee email
        #[arg(long)]
        assignee_email: Option<String>,

        /// Drive file ID of the lifting plan
        #[arg(long)]
        lifting_plan_file_id: Option<String>,
    },

    /// List the most recently updated requisitions
    List,

    /// Check that the server is up
    Health,
}
