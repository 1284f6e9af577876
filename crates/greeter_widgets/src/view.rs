//! Backend-agnostic view tree produced by `render`.
//!
//! The host draws it however it likes; tests and the headless harness query
//! it by element id.

use std::fmt;

use serde::Serialize;

/// Typography role of a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Title,
    Subtitle,
    Headline,
    Label,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewKind {
    Screen,
    TopBar,
    Column,
    Card,
    SegmentedRow,
    Segment { selected: bool },
    Text { text: String, style: TextStyle },
    Image { asset: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: ViewKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            id: None,
            kind,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Depth-first, pre-order walk.
    pub fn walk(&self, f: &mut impl FnMut(&ViewNode, usize)) {
        self.walk_at(0, f);
    }

    fn walk_at(&self, depth: usize, f: &mut impl FnMut(&ViewNode, usize)) {
        f(self, depth);
        for c in &self.children {
            c.walk_at(depth + 1, f);
        }
    }

    pub fn find(&self, id: &str) -> Option<&ViewNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Concatenated text of this node and its descendants.
    pub fn collect_text(&self) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |n, _| {
            if let Some(t) = n.text() {
                parts.push(t.to_string());
            }
        });
        parts.join(" ")
    }
}

/// Text element.
pub fn text(content: impl Into<String>, style: TextStyle) -> ViewNode {
    ViewNode::new(ViewKind::Text {
        text: content.into(),
        style,
    })
}

/// Image element referencing an asset path.
pub fn image(asset: impl Into<String>) -> ViewNode {
    ViewNode::new(ViewKind::Image {
        asset: asset.into(),
    })
}

/// A fully rendered screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewTree {
    pub root: ViewNode,
}

impl ViewTree {
    pub fn new(root: ViewNode) -> Self {
        Self { root }
    }

    pub fn find(&self, id: &str) -> Option<&ViewNode> {
        self.root.find(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// All text under element `id`, or `None` if it does not exist.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.find(id).map(ViewNode::collect_text)
    }

    /// Ids of segments currently marked selected.
    pub fn selected_ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.walk(&mut |n, _| {
            if let (ViewKind::Segment { selected: true }, Some(id)) = (&n.kind, &n.id) {
                out.push(id.clone());
            }
        });
        out
    }

    /// Every element id in document order.
    pub fn ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.walk(&mut |n, _| {
            if let Some(id) = &n.id {
                out.push(id.clone());
            }
        });
        out
    }
}

impl fmt::Display for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.root.walk(&mut |n, depth| {
            if result.is_err() {
                return;
            }
            result = write_outline_line(f, n, depth);
        });
        result
    }
}

fn write_outline_line(f: &mut fmt::Formatter<'_>, n: &ViewNode, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match &n.kind {
        ViewKind::Screen => write!(f, "screen")?,
        ViewKind::TopBar => write!(f, "top_bar")?,
        ViewKind::Column => write!(f, "column")?,
        ViewKind::Card => write!(f, "card")?,
        ViewKind::SegmentedRow => write!(f, "segmented_row")?,
        ViewKind::Segment { selected } => {
            write!(f, "segment")?;
            if *selected {
                write!(f, " [selected]")?;
            }
        }
        ViewKind::Text { text, .. } => write!(f, "text {text:?}")?,
        ViewKind::Image { asset } => write!(f, "image {asset}")?,
    }
    if let Some(id) = &n.id {
        write!(f, " #{id}")?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ViewTree {
        ViewTree::new(
            ViewNode::new(ViewKind::Screen).id("screen").child(
                ViewNode::new(ViewKind::SegmentedRow)
                    .id("row")
                    .child(
                        ViewNode::new(ViewKind::Segment { selected: false })
                            .id("a")
                            .child(image("flags/cn.svg"))
                            .child(text("A", TextStyle::Label)),
                    )
                    .child(
                        ViewNode::new(ViewKind::Segment { selected: true })
                            .id("b")
                            .child(text("B", TextStyle::Label)),
                    ),
            ),
        )
    }

    #[test]
    fn lookup_by_id() {
        let tree = sample();
        assert!(tree.contains("row"));
        assert!(!tree.contains("missing"));
        assert_eq!(tree.text_of("row").as_deref(), Some("A B"));
        assert_eq!(tree.selected_ids(), vec!["b".to_string()]);
        assert_eq!(tree.ids(), vec!["screen", "row", "a", "b"]);
    }

    #[test]
    fn outline_marks_selection() {
        let outline = sample().to_string();
        assert_eq!(
            outline,
            "screen #screen\n  segmented_row #row\n    segment #a\n      image flags/cn.svg\n      text \"A\"\n    segment [selected] #b\n      text \"B\"\n"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(text("hi", TextStyle::Title)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "text", "text": "hi", "style": "title" })
        );
    }
}
