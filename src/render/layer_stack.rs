use serde::{Deserialize, Serialize};

/// Named drawing surfaces of a live chart, one surface per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasLayerKind {
    Axis,
    Line,
}

impl CanvasLayerKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Line => "line",
        }
    }
}

/// Ordered list of layer kinds; clear and draw passes walk it front to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![CanvasLayerKind::Axis, CanvasLayerKind::Line],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CanvasLayerKind> + '_ {
        self.layers.iter().copied()
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, LayerStack};

    #[test]
    fn canonical_stack_draws_axis_before_line() {
        let stack = LayerStack::canonical();
        assert_eq!(
            stack.iter().collect::<Vec<_>>(),
            vec![CanvasLayerKind::Axis, CanvasLayerKind::Line]
        );
    }

    #[test]
    fn layer_names_match_surface_names() {
        assert_eq!(CanvasLayerKind::Axis.name(), "axis");
        assert_eq!(CanvasLayerKind::Line.name(), "line");
    }
}
