/*!
 * Screenplay layout rendering.
 *
 * Each input line is rendered according to its detected role:
 * - `Name (parenthetical): dialogue` shorthand expands to a centered name,
 *   an indented parenthetical and indented dialogue
 * - Scene headings are upper-cased at the left margin
 * - Transitions are upper-cased and right-aligned
 * - Character cues are upper-cased and centered
 * - Parentheticals and dialogue are indented
 * - Anything else is kept verbatim as action
 *
 * Blank lines pass through to keep vertical spacing.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::screenplay::classifier::{classify, Category};

/// Single-line dialogue shorthand: name, optional parenthetical, colon, text.
static INLINE_DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([\w\-\s]+?)(?:\s*\(([^)]+)\))?\s*:\s*(.+)$").expect("Invalid inline dialogue regex")
});

/// Column widths and indents used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width character names are centered in
    #[serde(default = "default_center_width")]
    pub center_width: usize,

    /// Left indent of parentheticals
    #[serde(default = "default_paren_indent")]
    pub paren_indent: usize,

    /// Left indent of dialogue
    #[serde(default = "default_dialogue_indent")]
    pub dialogue_indent: usize,

    /// Column transitions are right-aligned to
    #[serde(default = "default_transition_column")]
    pub transition_column: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_width: default_center_width(),
            paren_indent: default_paren_indent(),
            dialogue_indent: default_dialogue_indent(),
            transition_column: default_transition_column(),
        }
    }
}

fn default_center_width() -> usize {
    40
}

fn default_paren_indent() -> usize {
    10
}

fn default_dialogue_indent() -> usize {
    5
}

fn default_transition_column() -> usize {
    60
}

/// Rule that produced a rendering, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutRule {
    Blank,
    InlineDialogue,
    SceneHeading,
    Transition,
    CharacterCue,
    Emotion,
    Dialogue,
    Action,
}

/// Output produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub rule: LayoutRule,

    /// One output line, or up to three for the inline shorthand
    pub lines: Vec<String>,
}

impl RenderedLine {
    fn single(rule: LayoutRule, line: String) -> Self {
        Self { rule, lines: vec![line] }
    }
}

/// Renders raw screenplay text in industry layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutRenderer {
    config: LayoutConfig,
}

impl LayoutRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Render a whole script, one or more output lines per input line.
    pub fn render(&self, text: &str) -> String {
        text.lines()
            .flat_map(|raw| self.render_line(raw).lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render one physical line. The first matching rule wins.
    pub fn render_line(&self, raw: &str) -> RenderedLine {
        let line = raw.trim();
        if line.is_empty() {
            return RenderedLine::single(LayoutRule::Blank, String::new());
        }

        if let Some(rendered) = self.render_inline_dialogue(line) {
            return rendered;
        }

        let tags = classify(line);
        match tags.structural() {
            Some(Category::SceneHeading) => {
                return RenderedLine::single(LayoutRule::SceneHeading, line.to_uppercase());
            }
            Some(Category::Transition) => {
                let width = self.config.transition_column;
                return RenderedLine::single(
                    LayoutRule::Transition,
                    format!("{:>width$}", line.to_uppercase(), width = width),
                );
            }
            Some(Category::CharacterCue) => {
                return RenderedLine::single(LayoutRule::CharacterCue, self.centered_name(line));
            }
            Some(Category::Emotion) => {
                return RenderedLine::single(LayoutRule::Emotion, indent(line, self.config.paren_indent));
            }
            _ => {}
        }

        if tags.contains(Category::Dialogue) {
            return RenderedLine::single(LayoutRule::Dialogue, indent(line, self.config.dialogue_indent));
        }

        RenderedLine::single(LayoutRule::Action, line.to_string())
    }

    fn render_inline_dialogue(&self, line: &str) -> Option<RenderedLine> {
        let caps = INLINE_DIALOGUE_REGEX.captures(line)?;
        let name = caps.get(1)?.as_str();
        let dialogue = caps.get(3)?.as_str();

        let mut lines = vec![self.centered_name(name)];
        if let Some(paren) = caps.get(2) {
            lines.push(indent(&format!("({})", paren.as_str().trim()), self.config.paren_indent));
        }
        lines.push(indent(dialogue.trim(), self.config.dialogue_indent));

        Some(RenderedLine {
            rule: LayoutRule::InlineDialogue,
            lines,
        })
    }

    fn centered_name(&self, name: &str) -> String {
        center(name.trim().to_uppercase().as_str(), self.config.center_width)
    }
}

/// Render text with the default layout.
pub fn format_script(text: &str) -> String {
    LayoutRenderer::default().render(text)
}

fn indent(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width), text)
}

/// Center text in `width` columns. With odd padding the extra space goes
/// left only when the width is odd.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
