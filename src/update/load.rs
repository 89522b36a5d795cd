//! Load completion handlers
//!
//! Both pipeline stages (fetch, then the optional transform) report back
//! here and pass the same generation checkpoint before touching the model.

use crate::commands::Cmd;
use crate::image::Image;
use crate::messages::LoadMsg;
use crate::model::ViewportModel;

pub fn update_load(model: &mut ViewportModel, msg: LoadMsg) -> Option<Cmd> {
    match msg {
        LoadMsg::FetchCompleted { generation, image } => {
            if !model.load.accept(generation) {
                return discard_stale(model, generation, "fetch");
            }

            match image {
                None => {
                    model.load.finish_failed();
                    model.presentation.image = None;
                    Some(Cmd::Redraw)
                }
                // Stay in Loading while the transform runs so no second fetch starts
                Some(image) if model.transform_enabled => {
                    Some(Cmd::RunTransform { generation, image })
                }
                Some(image) => {
                    show_image(model, image);
                    Some(Cmd::Redraw)
                }
            }
        }

        LoadMsg::TransformCompleted {
            generation,
            original,
            transformed,
        } => {
            if !model.load.accept(generation) {
                return discard_stale(model, generation, "transform");
            }

            let image = transformed.unwrap_or_else(|| {
                tracing::debug!(
                    "Transform produced no image for generation {}, showing original",
                    generation
                );
                original
            });
            show_image(model, image);
            Some(Cmd::Redraw)
        }
    }
}

fn show_image(model: &mut ViewportModel, image: Image) {
    model.load.finish_loaded(image.clone());
    model.presentation.image = Some(image);
    model.relayout_content();
}

/// Drop a result that lost the race against release or a newer fetch
fn discard_stale(model: &mut ViewportModel, generation: u64, stage: &str) -> Option<Cmd> {
    tracing::debug!(
        "Discarding stale {} result: generation {} (current {}, pending_release={})",
        stage,
        generation,
        model.load.generation(),
        model.load.pending_release()
    );

    if model.load.pending_release() && model.presentation.image.is_some() {
        model.presentation.image = None;
        return Some(Cmd::Redraw);
    }
    None
}
