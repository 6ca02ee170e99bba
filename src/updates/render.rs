//! Rendering an update notification into a bordered box.

use crate::ui::{BoxStyle, MessageBox, NotifierTheme};

use super::template::{substitute, PackageManager, Placeholders, DEFAULT_TEMPLATE};
use super::version::UpdateInfo;

/// Builds the text of an update notification.
///
/// Rendering is pure: the same inputs always produce the same string.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    theme: NotifierTheme,
    style: BoxStyle,
    package_manager: PackageManager,
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer {
    /// Create a renderer with the plain theme and default box style.
    pub fn new() -> Self {
        Self {
            theme: NotifierTheme::plain(),
            style: BoxStyle::default(),
            package_manager: PackageManager::default(),
        }
    }

    pub fn with_theme(mut self, theme: NotifierTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    /// Command the user should run to update.
    pub fn update_command(&self, info: &UpdateInfo, include_global_flag: bool) -> String {
        self.package_manager
            .update_command(&info.package_name, include_global_flag)
    }

    /// The message text before boxing.
    ///
    /// The default template gets themed values; a custom template is
    /// substituted with plain values.
    pub fn message(
        &self,
        info: &UpdateInfo,
        template: Option<&str>,
        include_global_flag: bool,
    ) -> String {
        let command = self.update_command(info, include_global_flag);

        match template {
            Some(template) => substitute(template, &Placeholders::new(info, command)),
            None => {
                let values = Placeholders {
                    package_name: info.package_name.clone(),
                    current_version: self
                        .theme
                        .current
                        .apply_to(&info.current_version)
                        .to_string(),
                    latest_version: self
                        .theme
                        .latest
                        .apply_to(&info.latest_version)
                        .to_string(),
                    update_command: self.theme.command.apply_to(command).to_string(),
                };
                substitute(DEFAULT_TEMPLATE, &values)
            }
        }
    }

    /// Render the full boxed notification.
    pub fn render(
        &self,
        info: &UpdateInfo,
        template: Option<&str>,
        include_global_flag: bool,
    ) -> String {
        MessageBox::new(&self.message(info, template, include_global_flag))
            .style(self.style)
            .border(self.theme.border.clone())
            .render()
    }
}

/// Render a notification with the plain theme and default box style.
pub fn render(info: &UpdateInfo, template: Option<&str>, include_global_flag: bool) -> String {
    MessageRenderer::new().render(info, template, include_global_flag)
}
