//! Visual compositor: presentation parameters as a pure function of card
//! state.
//!
//! Nothing here keeps state or makes decisions beyond arithmetic. The
//! renderer (CSS, canvas, GPU) is free to paint these numbers however it
//! likes; the only guarantee is that they are correct and bounded.

use glam::Vec2;

use crate::flip::Face;
use crate::tilt::{clamp_percent, Tilt};

/// Tilt sum at which the highlight reaches full intensity.
const FULL_INTENSITY_TILT: f32 = 30.0;

/// Opacity of the hover-only front glare.
const FRONT_GLARE_OPACITY: f32 = 0.15;

/// Card state sampled for one composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    /// Target face.
    pub face: Face,
    /// Whether the flip lock is held.
    pub locked: bool,
    /// Whether the pointer is over the card.
    pub hovered: bool,
    /// Current rendered tilt.
    pub tilt: Tilt,
    /// Normalized highlight position.
    pub highlight: Vec2,
    /// Z rotation (degrees) applied to the hovered front face.
    pub hover_rotation: f32,
}

/// Rotation description for the card container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Static Z rotation while the front face is hovered, in degrees.
    pub hover_rotation_z: f32,
    /// Discrete flip angle: 0 for front, 180 for back.
    pub flip_rotation_y: f32,
    /// Live tilt, present only on a settled back face.
    pub tilt: Option<Tilt>,
    /// Z translation for compositing.
    pub translate_z: f32,
}

impl CardTransform {
    /// Render as a CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "rotateZ({}deg) rotateY({}deg)",
            self.hover_rotation_z, self.flip_rotation_y
        );
        if let Some(tilt) = self.tilt {
            css.push_str(&format!(
                " rotateX({}deg) rotateY({}deg)",
                tilt.x, tilt.y
            ));
        }
        css.push_str(&format!(" translateZ({})", self.translate_z));
        css
    }
}

/// Moving light placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// Normalized position in `[0, 100]`.
    pub position: Vec2,
    /// Strength in `[0, 1]`, growing with tilt.
    pub intensity: f32,
}

/// Holographic gradient parameters for the back face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackGlare {
    /// Primary radial gradient centre, pushed by the tilt.
    pub center: Vec2,
    /// Opposing radial gradient centre.
    pub mirrored: Vec2,
    /// Base alpha of the colour layers.
    pub color_intensity: f32,
    /// Angle of the linear colour sweep, in degrees.
    pub sweep_angle: f32,
    /// Angle of the white shimmer band, in degrees.
    pub shimmer_angle: f32,
    /// Peak alpha of the shimmer band.
    pub shimmer_alpha: f32,
}

/// Hover glare for the front face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontGlare {
    /// Gradient centre, following the pointer.
    pub position: Vec2,
    /// Base opacity.
    pub opacity: f32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Container rotation.
    pub transform: CardTransform,
    /// Highlight descriptor.
    pub highlight: Highlight,
    /// Back-face gradients, present while the back face is up.
    pub back_glare: Option<BackGlare>,
    /// Front-face glare, present while the front face is hovered.
    pub front_glare: Option<FrontGlare>,
}

/// Highlight intensity for a tilt: `(|x| + |y|) / 30`, clamped to `[0, 1]`.
#[must_use]
pub fn intensity(tilt: Tilt) -> f32 {
    let value = tilt.magnitude_l1() / FULL_INTENSITY_TILT;
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Compose presentation parameters from a state sample.
#[must_use]
pub fn compose(view: &CardView) -> Presentation {
    let live_tilt =
        (view.face == Face::Back && !view.locked).then_some(view.tilt);
    let hover_rotation_z =
        if view.face == Face::Front && view.hovered && !view.locked {
            view.hover_rotation
        } else {
            0.0
        };
    let flip_rotation_y = match view.face {
        Face::Front => 0.0,
        Face::Back => 180.0,
    };
    let shown_tilt = live_tilt.unwrap_or(Tilt::NEUTRAL);
    let highlight = Highlight {
        position: clamp_percent(view.highlight),
        intensity: intensity(shown_tilt),
    };

    Presentation {
        transform: CardTransform {
            hover_rotation_z,
            flip_rotation_y,
            tilt: live_tilt,
            translate_z: 0.0,
        },
        highlight,
        back_glare: (view.face == Face::Back)
            .then(|| back_glare(highlight, shown_tilt)),
        front_glare: (view.face == Face::Front && view.hovered).then_some(
            FrontGlare {
                position: highlight.position,
                opacity: FRONT_GLARE_OPACITY,
            },
        ),
    }
}

fn back_glare(highlight: Highlight, tilt: Tilt) -> BackGlare {
    let position = highlight.position;
    let center = clamp_percent(position + Vec2::new(tilt.y, tilt.x) * 2.0);
    BackGlare {
        center,
        mirrored: Vec2::splat(100.0) - center,
        color_intensity: 0.5 + highlight.intensity * 0.3,
        sweep_angle: (position.x + tilt.y) * 3.6,
        shimmer_angle: (position.x + tilt.y) * 2.0,
        shimmer_alpha: 0.3 + (tilt.x + tilt.y).abs() / 100.0,
    }
}
