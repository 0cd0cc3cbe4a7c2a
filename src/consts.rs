/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket label for check-ins without a session goal
pub(crate) const NO_GOAL: &str = "(no goal)";

/// Log file written by the Focus Time app
pub(crate) const LOG_FILE_NAME: &str = "focus_log.jsonl";

/// Environment variable overriding the log location
pub(crate) const LOG_PATH_ENV: &str = "FOCUS_TIME_LOG";

/// Keywords searched when `notes` is given none
pub(crate) const DEFAULT_KEYWORDS: [&str; 2] = ["progress", "stuck"];

/// Goals shown in the ranking
pub(crate) const TOP_GOALS: usize = 10;

/// Display width for goal labels
pub(crate) const GOAL_LABEL_WIDTH: usize = 50;

/// Search matches shown in the listing
pub(crate) const SEARCH_DISPLAY_LIMIT: usize = 20;

/// Default chart document written by the chart sink
#[cfg_attr(not(feature = "charts"), allow(dead_code))]
pub(crate) const DEFAULT_CHART_OUTPUT: &str = "focus_analysis.json";
