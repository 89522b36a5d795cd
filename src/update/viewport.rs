//! Viewport update handlers
//!
//! Host-facing operations: load/release/retry, gestures and layout passes.

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::ViewportModel;

pub fn update_viewport(model: &mut ViewportModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::LoadImage => load_image(model),

        ViewportMsg::ReleaseImage => {
            let token = model.load.release();
            model.presentation.image = None;
            let cancel = token
                .map(|token| Cmd::CancelFetch { token })
                .unwrap_or_default();
            Some(Cmd::batch(vec![cancel, Cmd::Redraw]))
        }

        ViewportMsg::RetryLoadImage => retry_load_image(model),

        ViewportMsg::SingleTap => {
            if !model.gestures().single_tap {
                return None;
            }
            retry_load_image(model)
        }

        ViewportMsg::DoubleTap => {
            let change = model.zoom.toggle(model.load.state().is_failed())?;
            model.apply_zoom(change);
            Some(Cmd::Redraw)
        }

        ViewportMsg::LayoutChanged(frame) => {
            model.layout(frame);

            if model.wants_initial_load() {
                if let Some(generation) = model.load.begin_load() {
                    return Some(Cmd::batch(vec![
                        Cmd::FetchImage { generation },
                        Cmd::Redraw,
                    ]));
                }
            }
            Some(Cmd::Redraw)
        }

        ViewportMsg::ZoomScaleChanged(scale) => {
            let change = model.zoom.set_scale(scale)?;
            model.apply_zoom(change);
            Some(Cmd::Redraw)
        }

        ViewportMsg::ConfigChanged(config) => {
            // Zoom enablement and initial zoom are fixed at construction
            let config = config.normalized();
            model.config.max_scale = config.max_scale;
            model.config.fit_mode = config.fit_mode;
            tracing::debug!(
                "config changed: max_scale={} fit_mode={:?}",
                model.config.max_scale,
                model.config.fit_mode
            );
            None
        }
    }
}

fn load_image(model: &mut ViewportModel) -> Option<Cmd> {
    if model.presentation.image.is_some() {
        tracing::debug!("load_image ignored: content already present");
        return None;
    }
    let generation = model.load.begin_load()?;
    Some(Cmd::batch(vec![Cmd::FetchImage { generation }, Cmd::Redraw]))
}

fn retry_load_image(model: &mut ViewportModel) -> Option<Cmd> {
    let generation = model.load.retry()?;
    Some(Cmd::batch(vec![Cmd::FetchImage { generation }, Cmd::Redraw]))
}
