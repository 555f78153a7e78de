#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskNotFound(i32),
    TaskRejected(String),
    TasksHeader,
    NoTasksFound,
    NoMatchingTasks,
    SearchResultsHeader(String),
    ConfirmDeleteTask(String),
    OperationCancelled,
    InvalidSortCriterion(String),
    NoFilterProvided,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptDataFile,

    // === EDIT PROMPTS ===
    EditingTask(String),
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    SelectTaskPriority,
    SelectTaskStatus,
}
