//! Sentinel section extraction
//!
//! Generated frontends concatenate several files, each introduced by a
//! marker line such as `===== src/App.jsx =====`. The scanner walks the text
//! line by line with a three-state cursor and keeps the component and
//! stylesheet sections; every other marked file closes the current section.

/// Marker spellings that open the component section
pub const COMPONENT_MARKERS: [&str; 2] = ["===== src/App.jsx =====", "===== App.jsx ====="];

/// Marker spellings that open the stylesheet section
pub const STYLE_MARKERS: [&str; 2] = ["===== src/index.css =====", "===== index.css ====="];

/// Any line containing this closes the current section
pub const MARKER_DELIMITER: &str = "=====";

/// Scanner position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Outside,
    InComponent,
    InStyle,
}

/// Classification of one frontend line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    ComponentStart,
    StyleStart,
    OtherMarker,
    Content(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line; component markers take precedence over style markers
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if COMPONENT_MARKERS.iter().any(|m| line.contains(m)) {
            Self::ComponentStart
        } else if STYLE_MARKERS.iter().any(|m| line.contains(m)) {
            Self::StyleStart
        } else if line.contains(MARKER_DELIMITER) {
            Self::OtherMarker
        } else {
            Self::Content(line)
        }
    }
}

impl Cursor {
    /// Transition on one line
    #[must_use]
    pub fn step(self, line: Line<'_>) -> Self {
        match line {
            Line::ComponentStart => Self::InComponent,
            Line::StyleStart => Self::InStyle,
            Line::OtherMarker => Self::Outside,
            Line::Content(_) => self,
        }
    }
}

/// Extracted section buffers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Component source, one `\n`-terminated line per content line
    pub component: String,
    /// Stylesheet source
    pub style: String,
}

impl Sections {
    /// Whether the component section holds anything but whitespace
    #[inline]
    #[must_use]
    pub fn has_component(&self) -> bool {
        !self.component.trim().is_empty()
    }
}

/// Scan `frontend` and collect the component and stylesheet sections
///
/// Marker lines are never part of a section. A section left open at the end
/// of the text runs to the end.
#[must_use]
pub fn extract_sections(frontend: &str) -> Sections {
    let mut sections = Sections::default();
    let mut cursor = Cursor::default();

    for raw in frontend.lines() {
        let line = Line::classify(raw);
        match (cursor, line) {
            (Cursor::InComponent, Line::Content(text)) => {
                sections.component.push_str(text);
                sections.component.push('\n');
            }
            (Cursor::InStyle, Line::Content(text)) => {
                sections.style.push_str(text);
                sections.style.push('\n');
            }
            _ => {}
        }
        cursor = cursor.step(line);
    }

    sections
}
