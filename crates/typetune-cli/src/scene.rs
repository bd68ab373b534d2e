//! JSON scene documents.
//!
//! A scene is a node tree exported from a design tool:
//!
//! ```json
//! {
//!   "id": "page",
//!   "children": [
//!     {
//!       "id": "card",
//!       "fills": [{ "type": "SOLID", "color": { "r": 0.1, "g": 0.1, "b": 0.12 } }],
//!       "children": [
//!         {
//!           "id": "title",
//!           "text": {
//!             "fontFamily": "Inter",
//!             "fontStyle": "Bold",
//!             "fontSize": 32,
//!             "lineHeight": "auto",
//!             "letterSpacing": 0
//!           }
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A text layer with a missing `fontFamily` or `fontSize` stands for mixed
//! fonts or sizes and is skipped.
//!
//! Text layers may name a shared style with `textStyleId`. Shared styles
//! live in an optional `textStyles` object on the root node, keyed by id:
//!
//! ```json
//! { "textStyles": { "S:body": { "lineHeight": "150%", "letterSpacing": "0px" } } }
//! ```
//!
//! Writing values back edits the loaded document in place, so fields this
//! module does not model survive a load and save.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use typetune_core::{NodeTree, TextItem, is_dark_background};
use typetune_fonts::weight_from_style;
use typetune_model::{
    BgMode, CurrentValues, LetterSpacingValue, LineHeightValue, Paint, TextUpdate, TypographyInput,
};

/// Case transform applied to a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

/// Typography of a text node as exported.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLayer {
    pub font_family: Option<String>,
    pub font_style: String,
    /// Derived from `font_style` when absent.
    pub font_weight: Option<u16>,
    pub font_size: Option<f64>,
    pub text_case: TextCase,
    pub line_height: LineHeightValue,
    pub letter_spacing: LetterSpacingValue,
    pub text_style_id: Option<String>,
}

impl TextLayer {
    fn current(&self) -> CurrentValues {
        CurrentValues {
            line_height: self.line_height,
            letter_spacing: self.letter_spacing,
        }
    }
}

/// One node of a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneNode {
    pub id: String,
    #[serde(default)]
    pub fills: Option<Vec<Paint>>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
    #[serde(default)]
    pub text: Option<TextLayer>,
}

#[derive(Debug)]
struct FlatNode {
    id: String,
    /// JSON pointer of the node within the document.
    pointer: String,
    parent: Option<usize>,
    fills: Option<Vec<Paint>>,
    text: Option<TextLayer>,
}

/// A scene flattened into depth-first order, together with the document it
/// was read from.
#[derive(Debug)]
pub struct Scene {
    nodes: Vec<FlatNode>,
    document: Value,
}

/// Values written to one text layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub id: String,
    pub text_style_id: Option<String>,
    pub before: CurrentValues,
    pub after: CurrentValues,
}

impl Scene {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        let root = SceneNode::deserialize(&document)?;
        let mut nodes = Vec::new();
        flatten(root, None, "", &mut nodes);
        Ok(Self { nodes, document })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read scene {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse scene {}", path.display()))
    }

    /// Writes the document, including every applied change, to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.document)?;
        fs::write(path, text + "\n").with_context(|| format!("write scene {}", path.display()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the first node with `id`.
    pub fn find(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Writes `update` onto the text layer of node `id`.
    pub fn apply(&mut self, id: &str, update: TextUpdate) -> Result<TextChange> {
        let index = self.find(id).with_context(|| format!("no node {id}"))?;
        let node = &mut self.nodes[index];
        let layer = node
            .text
            .as_mut()
            .with_context(|| format!("node {id} is not a text layer"))?;
        let text = self
            .document
            .pointer_mut(&format!("{}/text", node.pointer))
            .and_then(Value::as_object_mut)
            .with_context(|| format!("node {id} has no text object"))?;

        let before = layer.current();
        let after = CurrentValues::from(update);
        write_values(text, after)?;
        layer.line_height = after.line_height;
        layer.letter_spacing = after.letter_spacing;
        Ok(TextChange {
            id: id.to_string(),
            text_style_id: layer.text_style_id.clone(),
            before,
            after,
        })
    }

    /// Writes `values` into the shared text style `style_id`.
    pub fn apply_style(&mut self, style_id: &str, values: CurrentValues) -> Result<()> {
        let pointer = format!("/textStyles/{}", style_id.replace('~', "~0").replace('/', "~1"));
        let style = self
            .document
            .pointer_mut(&pointer)
            .and_then(Value::as_object_mut)
            .with_context(|| format!("no text style {style_id}"))?;
        write_values(style, values)?;
        Ok(())
    }

    /// Text items in document order, capturing current values.
    ///
    /// Layers with mixed fonts or an unusable size are skipped with a
    /// warning. `bg_mode` decides the dark flag unless it is `Auto`.
    pub fn text_items(&self, bg_mode: BgMode) -> Vec<TextItem> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let layer = node.text.as_ref()?;
                self.text_item(index, &node.id, layer, bg_mode)
            })
            .collect()
    }

    fn text_item(
        &self,
        index: usize,
        id: &str,
        layer: &TextLayer,
        bg_mode: BgMode,
    ) -> Option<TextItem> {
        let Some(family) = layer.font_family.as_deref() else {
            warn!(node = id, "skipping text layer with mixed fonts");
            return None;
        };
        let Some(size) = layer
            .font_size
            .filter(|size| size.is_finite() && *size > 0.0)
        else {
            warn!(node = id, size = ?layer.font_size, "skipping text layer without a usable size");
            return None;
        };
        let weight = layer
            .font_weight
            .unwrap_or_else(|| weight_from_style(&layer.font_style));
        let dark = bg_mode.resolve(|| is_dark_background(self, &index));

        let input = TypographyInput::new(family, size)
            .with_weight(weight)
            .with_style(layer.font_style.as_str())
            .with_uppercase(layer.text_case == TextCase::Upper)
            .with_dark_background(dark);
        Some(TextItem::new(id, input, layer.current()))
    }
}

fn flatten(node: SceneNode, parent: Option<usize>, pointer: &str, nodes: &mut Vec<FlatNode>) {
    let index = nodes.len();
    nodes.push(FlatNode {
        id: node.id,
        pointer: pointer.to_string(),
        parent,
        fills: node.fills,
        text: node.text,
    });
    for (position, child) in node.children.into_iter().enumerate() {
        flatten(child, Some(index), &format!("{pointer}/children/{position}"), nodes);
    }
}

fn write_values(target: &mut Map<String, Value>, values: CurrentValues) -> Result<()> {
    if let Value::Object(fields) = serde_json::to_value(values)? {
        target.extend(fields);
    }
    Ok(())
}

impl NodeTree for Scene {
    type Id = usize;

    fn parent(&self, id: &usize) -> Option<usize> {
        self.nodes.get(*id)?.parent
    }

    fn fills(&self, id: &usize) -> Option<&[Paint]> {
        self.nodes.get(*id)?.fills.as_deref()
    }
}
