//! Background darkness from ancestor fills.

use std::iter;

use typetune_model::{Paint, PaintKind, Rgb};

/// Luminance below this is a dark background.
const DARK_THRESHOLD: f64 = 0.5;
/// Assumed luminance of image fills, which cannot be sampled.
const IMAGE_LUMINANCE: f64 = 0.5;

/// Read access to a node hierarchy.
pub trait NodeTree {
    type Id;

    /// Parent of `id`, or `None` at the root.
    fn parent(&self, id: &Self::Id) -> Option<Self::Id>;

    /// Fill list of `id`, or `None` for nodes that cannot carry fills.
    fn fills(&self, id: &Self::Id) -> Option<&[Paint]>;
}

/// Weighted luminance of linear RGB channels in `[0, 1]`.
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn color_luminance(color: Rgb) -> f64 {
    relative_luminance(color.r, color.g, color.b)
}

fn paint_luminance(paint: &Paint) -> Option<f64> {
    if !paint.visible {
        return None;
    }
    match &paint.kind {
        PaintKind::Solid { color } => Some(color_luminance(*color)),
        PaintKind::Image => Some(IMAGE_LUMINANCE),
        PaintKind::Video | PaintKind::Unknown => None,
        gradient => {
            let stops = gradient.gradient_stops().filter(|stops| !stops.is_empty())?;
            let total: f64 = stops.iter().map(|stop| color_luminance(stop.color)).sum();
            Some(total / stops.len() as f64)
        }
    }
}

/// Mean luminance of the visible paints that yield one.
///
/// Returns `None` when no paint contributed.
pub fn average_fill_luminance(paints: &[Paint]) -> Option<f64> {
    let (total, count) = paints
        .iter()
        .filter_map(paint_luminance)
        .fold((0.0, 0usize), |(total, count), luminance| {
            (total + luminance, count + 1)
        });
    (count > 0).then(|| total / count as f64)
}

fn decide(fills: Option<&[Paint]>) -> Option<bool> {
    let fills = fills.filter(|fills| !fills.is_empty())?;
    average_fill_luminance(fills).map(|luminance| luminance < DARK_THRESHOLD)
}

/// Decides darkness over ancestor fill lists, innermost first.
///
/// The first ancestor with a contributing fill decides; anything else is
/// skipped. Without a decision the background is light.
pub fn is_dark_chain<'a, I>(chain: I) -> bool
where
    I: IntoIterator<Item = Option<&'a [Paint]>>,
{
    chain.into_iter().find_map(decide).unwrap_or(false)
}

/// Whether the background behind `node` is dark, starting at its parent.
pub fn is_dark_background<T>(tree: &T, node: &T::Id) -> bool
where
    T: NodeTree + ?Sized,
{
    let ancestors = iter::successors(tree.parent(node), |id| tree.parent(id));
    is_dark_chain(ancestors.map(|id| tree.fills(&id)))
}
