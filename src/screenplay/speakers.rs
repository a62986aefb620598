/*!
 * Speaker tracking and dialogue attribution.
 *
 * This module provides:
 * - The character context cursor: the speaker named by the latest cue,
 *   cleared by blank lines
 * - Attribution of dialogue lines to a speaker, with an optional lookback
 *   over a cue and an interleaved parenthetical
 * - A single forward scan combining classification, a resolution policy,
 *   the cursor and attribution
 */

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::screenplay::classifier::{classify, Category, CategorySet, ResolutionPolicy};
use crate::screenplay::line::Line;

/// Name recorded for dialogue without a resolvable speaker.
pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// The character currently speaking, if any.
///
/// A cue sets it, a blank line clears it. Scene headings leave it untouched,
/// so a speaker carries over a scene boundary unless a blank line intervenes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterContext {
    current: Option<String>,
}

impl CharacterContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the active speaker.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Update the cursor with one scanned line.
    pub fn observe(&mut self, line: &Line, tags: CategorySet) {
        if tags.contains(Category::CharacterCue) {
            self.current = Some(line.trimmed.to_uppercase());
        } else if tags.contains(Category::Blank) {
            self.current = None;
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Owner of a dialogue line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribution {
    /// Attributed to a named character
    Speaker(String),
    /// No speaker could be resolved
    Unknown,
}

impl Attribution {
    /// Speaker name, or the `UNKNOWN` sentinel.
    pub fn name(&self) -> &str {
        match self {
            Attribution::Speaker(name) => name,
            Attribution::Unknown => UNKNOWN_SPEAKER,
        }
    }

    /// Whether this is an attribution gap.
    pub fn is_gap(&self) -> bool {
        matches!(self, Attribution::Unknown)
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a resolver looks for a dialogue line's speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributionRule {
    /// The character context cursor only
    Context,
    /// The previous line as a cue, or a parenthetical preceded by a cue
    Adjacent,
    /// The cursor first, then the adjacent lookback
    ContextOrAdjacent,
}

/// Resolves the speaker of dialogue lines.
#[derive(Debug, Clone, Copy)]
pub struct AttributionResolver {
    rule: AttributionRule,
}

impl AttributionResolver {
    pub fn new(rule: AttributionRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> AttributionRule {
        self.rule
    }

    /// Attribute the dialogue line at `position` (0-based within `lines`).
    pub fn resolve(&self, context: &CharacterContext, lines: &[Line], position: usize) -> Attribution {
        let from_context = || context.current().map(|name| Attribution::Speaker(name.to_string()));
        let from_lookback = || lookback_cue(lines, position).map(Attribution::Speaker);

        let resolved = match self.rule {
            AttributionRule::Context => from_context(),
            AttributionRule::Adjacent => from_lookback(),
            AttributionRule::ContextOrAdjacent => from_context().or_else(from_lookback),
        };

        resolved.unwrap_or(Attribution::Unknown)
    }
}

impl Default for AttributionResolver {
    fn default() -> Self {
        Self::new(AttributionRule::ContextOrAdjacent)
    }
}

/// Cue directly above `position`, possibly with one parenthetical in between.
fn lookback_cue(lines: &[Line], position: usize) -> Option<String> {
    let previous = position.checked_sub(1).and_then(|i| lines.get(i))?;
    let previous_tags = classify(&previous.trimmed);

    if previous_tags.contains(Category::CharacterCue) {
        return Some(previous.trimmed.to_uppercase());
    }

    if previous_tags.contains(Category::Emotion) {
        let cue = position.checked_sub(2).and_then(|i| lines.get(i))?;
        if classify(&cue.trimmed).contains(Category::CharacterCue) {
            return Some(cue.trimmed.to_uppercase());
        }
    }

    None
}

/// One line as seen by a context scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    pub line: &'a Line,

    /// Every category whose predicate holds
    pub tags: CategorySet,

    /// Category the policy acted on; `None` when ignored
    pub category: Option<Category>,

    /// Active speaker after this line was observed
    pub speaker: Option<String>,

    /// Set for lines resolved as dialogue
    pub attribution: Option<Attribution>,

    /// Number of scene headings seen so far, this line included
    pub scene: usize,
}

impl ScannedLine<'_> {
    pub fn is_dialogue(&self) -> bool {
        self.category == Some(Category::Dialogue)
    }

    pub fn is_action(&self) -> bool {
        self.category == Some(Category::Action)
    }

    /// Whether this line is dialogue without a speaker.
    pub fn is_attribution_gap(&self) -> bool {
        self.attribution.as_ref().is_some_and(Attribution::is_gap)
    }
}

/// Forward scan over a line sequence with a speaker cursor.
#[derive(Debug, Clone, Copy)]
pub struct ContextScanner {
    policy: ResolutionPolicy,
    resolver: AttributionResolver,
}

impl ContextScanner {
    pub fn new(policy: ResolutionPolicy, rule: AttributionRule) -> Self {
        Self {
            policy,
            resolver: AttributionResolver::new(rule),
        }
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Scan lines in order. The cursor starts empty and lives for this call only.
    pub fn scan<'a>(&self, lines: &'a [Line]) -> Vec<ScannedLine<'a>> {
        let mut context = CharacterContext::new();
        let mut scene = 0;
        let mut scanned = Vec::with_capacity(lines.len());

        for (position, line) in lines.iter().enumerate() {
            let tags = classify(&line.trimmed);
            if tags.contains(Category::SceneHeading) {
                scene += 1;
            }

            let category = self.policy.resolve(tags, context.is_active());
            context.observe(line, tags);

            let attribution = (category == Some(Category::Dialogue))
                .then(|| self.resolver.resolve(&context, lines, position));
            if let Some(Attribution::Unknown) = attribution {
                debug!("Line {}: dialogue has no speaker ({})", line.index, self.policy);
            }

            scanned.push(ScannedLine {
                line,
                tags,
                category,
                speaker: context.current().map(str::to_string),
                attribution,
                scene,
            });
        }

        scanned
    }
}

/// Scan with the given policy, attributing through the cursor then the lookback.
pub fn scan_with_context(lines: &[Line], policy: ResolutionPolicy) -> Vec<ScannedLine<'_>> {
    ContextScanner::new(policy, AttributionRule::ContextOrAdjacent).scan(lines)
}
