/*!
 * Line classification for screenplay text.
 *
 * Six lexical predicates map a trimmed line to its screenplay role:
 * - Structural roles (scene heading, transition, parenthetical, character cue)
 *   are mutually exclusive
 * - Action and dialogue overlap on declarative sentences and are left
 *   ambiguous here; consumers pick a [`ResolutionPolicy`]
 *
 * Classification looks at casing, length, punctuation and nothing else.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length in characters of a character cue.
pub const MAX_CUE_CHARS: usize = 40;

/// Maximum number of words in a character cue.
pub const MAX_CUE_WORDS: usize = 4;

const SCENE_PREFIXES: [&str; 2] = ["INT.", "EXT."];
const TRANSITION_SUFFIXES: [&str; 3] = ["TO:", "OUT:", "IN:"];

/// Screenplay role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SceneHeading,
    Transition,
    /// Parenthetical performance direction, e.g. `(angrily)`
    Emotion,
    CharacterCue,
    Action,
    Dialogue,
    Blank,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::SceneHeading,
        Category::Transition,
        Category::Emotion,
        Category::CharacterCue,
        Category::Action,
        Category::Dialogue,
        Category::Blank,
    ];

    /// Whether this is one of the four mutually exclusive structural roles.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Category::SceneHeading | Category::Transition | Category::Emotion | Category::CharacterCue
        )
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::SceneHeading => "scene heading",
            Category::Transition => "transition",
            Category::Emotion => "parenthetical",
            Category::CharacterCue => "character cue",
            Category::Action => "action",
            Category::Dialogue => "dialogue",
            Category::Blank => "blank",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Set of categories whose predicates hold for one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// A set holding a single category.
    pub fn only(category: Category) -> Self {
        Self(category.bit())
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Categories in the set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// The structural role in the set, if any.
    pub fn structural(&self) -> Option<Category> {
        self.iter().find(|c| c.is_structural())
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Category::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Scene heading: starts with `INT.` or `EXT.`, any case.
pub fn is_scene_heading(line: &str) -> bool {
    let upper = line.trim().to_uppercase();
    SCENE_PREFIXES.iter().any(|p| upper.starts_with(p))
}

/// Transition: ends with `TO:`, `OUT:` or `IN:`, any case.
///
/// A scene heading that happens to end the same way stays a scene heading.
pub fn is_transition(line: &str) -> bool {
    let upper = line.trim().to_uppercase();
    TRANSITION_SUFFIXES.iter().any(|s| upper.ends_with(s)) && !is_scene_heading(line)
}

/// Parenthetical: wrapped in `(` and `)`.
pub fn is_emotion(line: &str) -> bool {
    let line = line.trim();
    line.starts_with('(') && line.ends_with(')')
}

/// Character cue: a short all-caps line of one to four words.
pub fn is_character_name(line: &str) -> bool {
    let line = line.trim();
    let words = word_count(line);

    is_all_caps(line)
        && line.chars().count() <= MAX_CUE_CHARS
        && (1..=MAX_CUE_WORDS).contains(&words)
        && !is_scene_heading(line)
        && !is_transition(line)
        && !is_emotion(line)
}

/// Action: narrative text that is not a question or an exclamation.
pub fn is_action(line: &str) -> bool {
    let line = line.trim();
    is_narrative(line) && !line.ends_with(['?', '!'])
}

/// Dialogue: narrative text that is punctuated as a sentence or runs past three words.
pub fn is_dialogue(line: &str) -> bool {
    let line = line.trim();
    is_narrative(line) && (line.ends_with(['.', '?', '!']) || word_count(line) > 3)
}

/// Non-empty and none of the structural roles.
fn is_narrative(line: &str) -> bool {
    !line.is_empty()
        && !is_scene_heading(line)
        && !is_transition(line)
        && !is_character_name(line)
        && !is_emotion(line)
}

/// At least one cased character and no lowercase ones.
fn is_all_caps(text: &str) -> bool {
    !text.chars().any(char::is_lowercase) && text.chars().any(char::is_uppercase)
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Every category whose predicate holds for the line.
///
/// Blank lines yield `{Blank}`. A structural role is always alone in the set;
/// otherwise the set holds Action, Dialogue, or both.
pub fn classify(line: &str) -> CategorySet {
    let line = line.trim();
    if line.is_empty() {
        return CategorySet::only(Category::Blank);
    }

    if is_scene_heading(line) {
        return CategorySet::only(Category::SceneHeading);
    }
    if is_transition(line) {
        return CategorySet::only(Category::Transition);
    }
    if is_emotion(line) {
        return CategorySet::only(Category::Emotion);
    }
    if is_character_name(line) {
        return CategorySet::only(Category::CharacterCue);
    }

    let mut tags = CategorySet::empty();
    if is_action(line) {
        tags.insert(Category::Action);
    }
    if is_dialogue(line) {
        tags.insert(Category::Dialogue);
    }
    tags
}

/// How a consumer settles the action/dialogue overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Action wins over dialogue
    ActionFirst,
    /// Dialogue wins over action
    DialogueFirst,
    /// Dialogue only; action lines are ignored
    DialogueOnly,
    /// Dialogue only while a speaker is active, otherwise action
    ContextGated,
}

impl ResolutionPolicy {
    /// Pick the category a consumer acts on.
    ///
    /// Returns `None` when the policy ignores the line.
    pub fn resolve(self, tags: CategorySet, speaker_active: bool) -> Option<Category> {
        if tags.contains(Category::Blank) {
            return Some(Category::Blank);
        }
        if let Some(structural) = tags.structural() {
            return Some(structural);
        }

        let action = tags.contains(Category::Action);
        let dialogue = tags.contains(Category::Dialogue);

        match self {
            ResolutionPolicy::ActionFirst if action => Some(Category::Action),
            ResolutionPolicy::ActionFirst if dialogue => Some(Category::Dialogue),
            ResolutionPolicy::DialogueFirst if dialogue => Some(Category::Dialogue),
            ResolutionPolicy::DialogueFirst if action => Some(Category::Action),
            ResolutionPolicy::DialogueOnly if dialogue => Some(Category::Dialogue),
            ResolutionPolicy::ContextGated if dialogue && speaker_active => Some(Category::Dialogue),
            ResolutionPolicy::ContextGated if action => Some(Category::Action),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResolutionPolicy::ActionFirst => "action-first",
            ResolutionPolicy::DialogueFirst => "dialogue-first",
            ResolutionPolicy::DialogueOnly => "dialogue-only",
            ResolutionPolicy::ContextGated => "context-gated",
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
