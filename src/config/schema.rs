//! Configuration schema definitions.
//!
//! Maps the `.update-notifier.yml` file format.

use serde::{Deserialize, Serialize};

use crate::ui::BoxStyle;
use crate::updates::PackageManager;

/// Root configuration structure for .update-notifier.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Package the notification is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Suggest the global install command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,

    /// Custom message template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Show notifications inside npm/yarn scripts too
    #[serde(default, skip_serializing_if = "is_false")]
    pub notify_in_automated_context: bool,

    /// Package manager used for the update command
    pub package_manager: PackageManager,

    /// Box layout
    #[serde(rename = "box")]
    pub box_style: BoxStyle,
}

fn is_false(b: &bool) -> bool {
    !*b
}
