#[derive(Debug, Clone)]
pub enum Message {
    // === CREDENTIAL MESSAGES ===
    TokenMissing,
    PromptToken,
    TokenSaved(String),   // path
    InvalidToken(String), // credential file path

    // === WORKSPACE MESSAGES ===
    NoWorkspace,
    WorkspaceSelected(String), // workspace name
    WorkspaceNotSelected,

    // === ACTIVITY MESSAGES ===
    NoDefaultActivity,
    ActivitiesHeader,
    PromptActivityId,
    DefaultActivityNotFound(u64), // account id

    // === BRANCH MESSAGES ===
    BranchNameUnavailable(String), // reason

    // === TASK MESSAGES ===
    SearchingTask(String), // query
    TaskNotFound(String),  // query
    TaskFound(String),     // task name
    TaskUrl(String),       // url
    TaskAbortHint,

    // === TIME TRACKING MESSAGES ===
    PromptHours,
    HoursMustBePositive(String), // raw input
    TimeTracked(String),         // task name

    // === API MESSAGES ===
    ApiRequestFailed { status: u16, path: String },
    ApiDecodeFailed(String), // path
    ApiEncodeFailed(String), // path
    TransportFailed(String), // reason

    // === GENERAL MESSAGES ===
    ShutdownRequested,
    PromptFailed(String),
}
