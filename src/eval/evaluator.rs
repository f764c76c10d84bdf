use crate::{
    caption::sync::{ActiveCaption, active_caption},
    composition::model::Composition,
    foundation::core::{Canvas, FrameIndex},
    primitives::{Layer, LayerCtx},
    visual::{color::Rgba8, node::Node},
};

/// Everything the external renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Output size.
    pub canvas: Canvas,
    /// Clear color.
    pub background: Rgba8,
    /// Top-level nodes in painter's order: underlays, visible scenes, overlays.
    pub nodes: Vec<Node>,
    /// Visible scenes in painter's order.
    pub scenes: Vec<SceneSample>,
    /// Matched caption, if any.
    pub caption: Option<ActiveCaption>,
}

/// A visible scene as resolved for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSample {
    /// Scene id.
    pub id: String,
    /// Stacking order.
    pub z: i32,
    /// Scene-local frame.
    pub local_frame: i64,
    /// Scene opacity.
    pub opacity: f64,
}

/// Stateless evaluator from composition timeline to frame description.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame. Frames past the composition end are not rejected; scenes simply
    /// stop being visible.
    #[tracing::instrument(skip(comp), fields(comp = %comp.meta.id))]
    pub fn render(comp: &Composition, frame: FrameIndex) -> FrameOutput {
        let canvas = comp.meta.canvas;
        let abs = LayerCtx {
            frame: frame.as_f64(),
            canvas,
        };

        let mut visible: Vec<((i32, usize), SceneSample, Node)> = Vec::new();
        for (index, def) in comp.scenes.iter().enumerate() {
            let Some(state) = def.scene.state_at(frame) else {
                continue;
            };
            let ctx = LayerCtx {
                frame: state.local_frame as f64,
                canvas,
            };
            let node = Node::group(render_layers(&def.layers, &ctx))
                .faded(state.opacity)
                .named(def.scene.id.clone());
            let sample = SceneSample {
                id: def.scene.id.clone(),
                z: def.z,
                local_frame: state.local_frame,
                opacity: state.opacity,
            };
            visible.push(((def.z, index), sample, node));
        }
        visible.sort_by_key(|(key, _, _)| *key);

        let mut nodes = Vec::with_capacity(visible.len() + 2);
        if !comp.underlays.is_empty() {
            nodes.push(Node::group(render_layers(&comp.underlays, &abs)).named("underlays"));
        }
        let mut scenes = Vec::with_capacity(visible.len());
        for (_, sample, node) in visible {
            scenes.push(sample);
            nodes.push(node);
        }
        if !comp.overlays.is_empty() {
            nodes.push(Node::group(render_layers(&comp.overlays, &abs)).named("overlays"));
        }

        FrameOutput {
            frame,
            canvas,
            background: comp.background,
            nodes,
            scenes,
            caption: active_caption(&comp.captions, frame),
        }
    }
}

fn render_layers(layers: &[Layer], ctx: &LayerCtx) -> Vec<Node> {
    layers.iter().map(|l| l.render(ctx)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
