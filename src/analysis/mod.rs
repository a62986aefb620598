/*!
 * Script analysis reports built on the screenplay classifier.
 *
 * # Architecture
 *
 * - `structure`: Scene headings, transitions and adjacent-cue attribution
 * - `characters`: Dialogue distribution per speaker
 * - `development`: Character introductions and speaking presence
 * - `pacing`: Per-scene dialogue/action balance
 * - `readability`: Web, TV and stage readability flags
 * - `speaking`: Words and estimated speaking time per speaker
 * - `report`: All of the above bundled as named sections
 * - `tally`: Ordered per-character counters
 */

pub mod tally;
pub mod structure;
pub mod characters;
pub mod development;
pub mod pacing;
pub mod readability;
pub mod speaking;
pub mod report;

// Re-export main types
pub use tally::LineTally;
pub use structure::{StructuralWarning, StructureReport};
pub use characters::CharacterReport;
pub use development::DevelopmentReport;
pub use pacing::{PacingReport, SceneBalance};
pub use readability::{Medium, ReadabilityReport};
pub use speaking::SpeakingReport;
pub use report::{ReportKind, ScriptReport};
