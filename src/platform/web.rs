//! Browser glue: HUD text nodes, blocking alerts, page reload

use web_sys::Element;

use crate::renderer::Hud;

/// `#score` and `#lives` text nodes
pub struct DomHud {
    score: Option<Element>,
    lives: Option<Element>,
}

impl DomHud {
    /// Missing elements are tolerated; their text is simply not shown
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let lookup = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
        let hud = Self {
            score: lookup("score"),
            lives: lookup("lives"),
        };
        if hud.score.is_none() || hud.lives.is_none() {
            log::warn!("Score/lives elements missing, HUD partially hidden");
        }
        hud
    }
}

impl Hud for DomHud {
    fn set_score(&mut self, text: &str) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(text));
        }
    }

    fn set_lives(&mut self, text: &str) {
        if let Some(el) = &self.lives {
            el.set_text_content(Some(text));
        }
    }
}

/// Blocking `alert()`, then a full page reload
pub fn notify_and_reload(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
    if let Err(e) = window.location().reload() {
        log::error!("reload failed: {:?}", e);
    }
}
