/*!
 * Screenplay structure: classification, scenes, speakers and layout.
 *
 * # Architecture
 *
 * - `line`: Line and script containers
 * - `classifier`: Lexical role predicates and resolution policies
 * - `scenes`: Scene segmentation on headings
 * - `speakers`: Speaker cursor, dialogue attribution and context scans
 * - `layout`: Role-driven text layout
 */

pub mod line;
pub mod classifier;
pub mod scenes;
pub mod speakers;
pub mod layout;

// Re-export main types
pub use line::{Line, Script};
pub use classifier::{classify, Category, CategorySet, ResolutionPolicy};
pub use scenes::{segment_scenes, Scene, SceneSegmenter, Segmentation};
pub use speakers::{
    scan_with_context, Attribution, AttributionResolver, AttributionRule, CharacterContext,
    ContextScanner, ScannedLine, UNKNOWN_SPEAKER,
};
pub use layout::{format_script, LayoutConfig, LayoutRenderer, LayoutRule, RenderedLine};
