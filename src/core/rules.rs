//! Status classification rules
//!
//! Status labels come from an open vocabulary, so categories are decided by
//! configurable markers rather than a closed enum.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct StatusRules {
    /// Exact label of an on-task check-in
    pub(crate) on_task: String,
    /// Substrings marking a distraction
    pub(crate) distraction: Vec<String>,
    /// Substrings marking a break
    pub(crate) breaks: Vec<String>,
}

impl Default for StatusRules {
    fn default() -> Self {
        StatusRules {
            on_task: "On Task".to_string(),
            distraction: ["Social", "Email", "Chat", "Other Distraction"]
                .map(String::from)
                .to_vec(),
            breaks: vec!["Break".to_string()],
        }
    }
}

impl StatusRules {
    pub(crate) fn is_on_task(&self, status: &str) -> bool {
        status == self.on_task
    }

    pub(crate) fn is_distraction(&self, status: &str) -> bool {
        contains_any(status, &self.distraction)
    }

    pub(crate) fn is_break(&self, status: &str) -> bool {
        contains_any(status, &self.breaks)
    }
}

fn contains_any(status: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|m| !m.is_empty() && status.contains(m.as_str()))
}
