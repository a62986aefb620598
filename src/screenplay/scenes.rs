/*!
 * Scene segmentation for screenplays.
 *
 * Scene headings delimit scenes. Every other line, blank lines included,
 * belongs to the scene opened by the closest heading above it. Lines before
 * the first heading form the preamble and are not a scene.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::screenplay::classifier::is_scene_heading;
use crate::screenplay::line::Line;

/// A scene opened by a heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based index in encounter order
    pub index: usize,

    /// Trimmed heading text
    pub heading: String,

    /// Lines after the heading, up to the next heading
    pub content: Vec<Line>,
}

impl Scene {
    pub fn new(index: usize, heading: &str) -> Self {
        Self {
            index,
            heading: heading.to_string(),
            content: Vec::new(),
        }
    }

    /// Number of content lines, blank lines included.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the scene holds nothing but blank lines.
    pub fn has_no_content(&self) -> bool {
        self.content.iter().all(Line::is_blank)
    }
}

/// Result of segmenting a script, preamble included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Lines before the first scene heading
    pub preamble: Vec<Line>,

    /// Scenes in encounter order
    pub scenes: Vec<Scene>,
}

/// Splits a line sequence into scenes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneSegmenter;

impl SceneSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Scenes in encounter order. A script without headings yields none.
    pub fn segment(&self, lines: &[Line]) -> Vec<Scene> {
        self.segment_with_preamble(lines).scenes
    }

    /// Scenes plus the lines seen before the first heading.
    pub fn segment_with_preamble(&self, lines: &[Line]) -> Segmentation {
        let mut segmentation = Segmentation::default();
        let mut current: Option<Scene> = None;

        for line in lines {
            if is_scene_heading(&line.trimmed) {
                if let Some(done) = current.take() {
                    segmentation.scenes.push(done);
                }
                let index = segmentation.scenes.len() + 1;
                current = Some(Scene::new(index, &line.trimmed));
                continue;
            }

            match current.as_mut() {
                Some(scene) => scene.content.push(line.clone()),
                None => segmentation.preamble.push(line.clone()),
            }
        }

        if let Some(done) = current {
            segmentation.scenes.push(done);
        }

        for scene in segmentation.scenes.iter().filter(|s| s.has_no_content()) {
            debug!("Scene {} ({}) has no content", scene.index, scene.heading);
        }

        segmentation
    }
}

/// Segment lines into scenes with the default segmenter.
pub fn segment_scenes(lines: &[Line]) -> Vec<Scene> {
    SceneSegmenter::new().segment(lines)
}
