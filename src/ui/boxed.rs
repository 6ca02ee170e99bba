//! Bordered, centred message boxes.

use console::{measure_text_width, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Characters used to draw a box border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Rounded corners: ╭─╮
    #[default]
    Round,
    /// Square corners: ┌─┐
    Single,
    /// Double lines: ╔═╗
    Double,
    /// Plain ASCII: +-+
    Classic,
}

/// The six glyphs that make up a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    /// Glyphs for this style.
    pub fn chars(&self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::Round => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Single => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Self::Classic => ('+', '+', '+', '+', '-', '|'),
        };
        BorderChars {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round" => Ok(Self::Round),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "classic" => Ok(Self::Classic),
            _ => Err(format!("unknown border style: {}", s)),
        }
    }
}

/// Default number of spaces between the border and the widest line.
///
/// Three spaces reproduces the established npm notifier layout, where the
/// box is eight columns wider than the widest line. Padding 1 gives the
/// compact four-column form.
pub const DEFAULT_PADDING: usize = 3;

/// Largest padding accepted from flags or config. Rendering clamps to it.
pub const MAX_PADDING: usize = 32;

/// Layout settings for a [`MessageBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Border glyph set.
    pub border_style: BorderStyle,
    /// Spaces on each side between the border and the widest line.
    pub padding: usize,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::default(),
            padding: DEFAULT_PADDING,
        }
    }
}

/// A block of text framed by a border, each line centred.
///
/// Widths are measured in terminal columns with ANSI escapes ignored, so
/// pre-styled text lines up the same as plain text.
#[derive(Debug, Clone)]
pub struct MessageBox {
    lines: Vec<String>,
    style: BoxStyle,
    border: Style,
}

impl MessageBox {
    /// Create a box around `text`, one row per `\n`-separated line.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            style: BoxStyle::default(),
            border: Style::new(),
        }
    }

    /// Set the layout.
    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the style applied to border glyphs.
    pub fn border(mut self, border: Style) -> Self {
        self.border = border;
        self
    }

    /// Widest content line, in columns.
    pub fn content_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| measure_text_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Render the box.
    ///
    /// The result starts and ends with a newline. Inside the border there
    /// is one blank row above and below the content.
    pub fn render(&self) -> String {
        let chars = self.style.border_style.chars();
        let content_width = self.content_width();
        let padding = self.style.padding.min(MAX_PADDING);
        let inner_width = content_width + padding * 2;
        let pad = " ".repeat(padding);

        let horizontal = chars.horizontal.to_string().repeat(inner_width);
        let vertical = self.border.apply_to(chars.vertical).to_string();

        let mut rows = Vec::with_capacity(self.lines.len() + 4);
        rows.push(
            self.border
                .apply_to(format!("{}{}{}", chars.top_left, horizontal, chars.top_right))
                .to_string(),
        );

        let blank = format!("{}{}{}", vertical, " ".repeat(inner_width), vertical);
        rows.push(blank.clone());

        for line in &self.lines {
            let slack = content_width - measure_text_width(line);
            let left = slack / 2;
            let right = slack - left;
            rows.push(format!(
                "{}{}{}{}{}{}{}",
                vertical,
                pad,
                " ".repeat(left),
                line,
                " ".repeat(right),
                pad,
                vertical
            ));
        }

        rows.push(blank);
        rows.push(
            self.border
                .apply_to(format!(
                    "{}{}{}",
                    chars.bottom_left, horizontal, chars.bottom_right
                ))
                .to_string(),
        );

        format!("\n{}\n", rows.join("\n"))
    }
}
