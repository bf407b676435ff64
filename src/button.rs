use crate::geometry::Bounds;
use crate::settings::{Difficulty, Settings};

/// Anything the mouse can click on.
pub trait Clickable {
    fn bounds(&self) -> Bounds;

    fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }
}

/// What a menu button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    Difficulty(Difficulty),
}

#[derive(Clone, Debug)]
pub struct Button {
    pub label: &'static str,
    pub action: ButtonAction,
    pub rect: Bounds,
}

impl Button {
    pub fn new(
        label: &'static str,
        action: ButtonAction,
        cx: f32,
        cy: f32,
        settings: &Settings,
    ) -> Self {
        Self {
            label,
            action,
            rect: Bounds::centered(cx, cy, settings.button_width, settings.button_height),
        }
    }
}

impl Clickable for Button {
    fn bounds(&self) -> Bounds {
        self.rect
    }
}

/// Play in the centre of the screen, then Easy/Medium/Hard below it,
/// each two button-heights further down.
pub fn menu_buttons(settings: &Settings) -> Vec<Button> {
    let cx = settings.screen_width / 2.0;
    let cy = settings.screen_height / 2.0;
    let step = settings.button_height * 2.0;

    let mut buttons = vec![Button::new("Play", ButtonAction::Play, cx, cy, settings)];
    for (i, difficulty) in Difficulty::all().iter().enumerate() {
        buttons.push(Button::new(
            difficulty.label(),
            ButtonAction::Difficulty(*difficulty),
            cx,
            cy + step * (i + 1) as f32,
            settings,
        ));
    }
    buttons
}

/// The first button under the point, if any.
pub fn hit_test<C: Clickable>(widgets: &[C], px: f32, py: f32) -> Option<&C> {
    widgets.iter().find(|w| w.is_clicked(px, py))
}
