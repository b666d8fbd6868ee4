#[derive(Debug, Clone)]
pub enum Message {
    // === ENGINE MESSAGES ===
    EngineStarted {
        interval: u64,
        max_failures: u32,
    },
    EngineStopped,
    EnginePaused,
    EngineResumed,
    InteractionFailed(String),         // underlying error
    InteractionFailureCount(u32, u32), // current, max
    FailureThresholdReached(u32),      // max
    ShuttingDownNotice,
    PausedNotice,
    ResumedNotice,
    ShortcutIgnored(String), // frontmost application
    ShortcutIgnoredNotice(String),

    // === INPUT LISTENER MESSAGES ===
    ListenerStarted,
    ListenerStopped,
    ErrorInInputHook(String), // error message

    // === SLEEP PREVENTION MESSAGES ===
    SleepPreventionActive,
    SleepPreventionUnavailable(String), // error message
    SleepPreventionReleased,

    // === AUTOMATION MESSAGES ===
    RestoreFocusFailed(String), // error message
    NotificationFailed(String), // error message
    FrontmostQueryFailed(String),

    // === CONFIGURATION MESSAGES ===
    InvalidInterval,
    InvalidMaxFailures,

    // === SIGNAL MESSAGES ===
    ReceivedSigterm,
    ReceivedSigint,
    ReceivedCtrlC,
    CtrlCListenFailed(String), // error message
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === SUMMARY MESSAGES ===
    SessionSummaryHeader,
    UnexpectedFailure(String), // error message
    Goodbye,
}
