use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate, progress},
        wave::Wave,
    },
    foundation::core::{Affine, Point, Rect, Vec2},
    visual::{
        color::Rgba8,
        node::{GradientStop, GroupNode, Node, NodeKind, Paint, Perspective, RoundedRect, Shape},
    },
};

/// Entrance: scale, rise and untilt eased in over `frames`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhoneEntry {
    /// Local frame the entrance starts at.
    pub delay: f64,
    /// Entrance length.
    pub frames: f64,
    /// Scale at the start of the entrance.
    pub from_scale: f64,
    /// Downward offset at the start of the entrance.
    pub from_offset_y: f64,
    /// Initial X tilt in degrees.
    pub from_rotate_x_deg: f64,
    /// Initial Y tilt in degrees.
    pub from_rotate_y_deg: f64,
}

impl Default for PhoneEntry {
    fn default() -> Self {
        Self {
            delay: 0.0,
            frames: 40.0,
            from_scale: 0.82,
            from_offset_y: 140.0,
            from_rotate_x_deg: 14.0,
            from_rotate_y_deg: -22.0,
        }
    }
}

/// Idle sway amplitudes; constant for every frame, so the card never comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhoneSway {
    /// X tilt amplitude in degrees.
    pub rotate_x_deg: f64,
    /// Y tilt amplitude in degrees.
    pub rotate_y_deg: f64,
    /// Vertical float amplitude in pixels.
    pub float_px: f64,
    /// Base angular speed in radians per frame.
    pub speed: f64,
}

impl Default for PhoneSway {
    fn default() -> Self {
        Self {
            rotate_x_deg: 1.2,
            rotate_y_deg: 2.5,
            float_px: 5.0,
            speed: 0.04,
        }
    }
}

/// Slow zoom and pan of the screen content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KenBurns {
    /// Local start frame.
    pub start: f64,
    /// Local end frame.
    pub end: f64,
    /// Zoom at `start`.
    pub zoom_from: f64,
    /// Zoom at `end`.
    pub zoom_to: f64,
    /// Pan at `start`.
    pub pan_from: Vec2,
    /// Pan at `end`.
    pub pan_to: Vec2,
}

impl Default for KenBurns {
    fn default() -> Self {
        Self {
            start: 20.0,
            end: 220.0,
            zoom_from: 1.0,
            zoom_to: 1.12,
            pan_from: Vec2::ZERO,
            pan_to: Vec2::new(0.0, -30.0),
        }
    }
}

/// Diagonal highlight band swept once across the screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Glare {
    /// Local start frame.
    pub start: f64,
    /// Sweep length in frames.
    pub duration: f64,
    /// Band width in pixels.
    pub band_px: f64,
    /// Peak opacity.
    pub opacity: f64,
    /// Band tilt in degrees.
    pub angle_deg: f64,
}

impl Default for Glare {
    fn default() -> Self {
        Self {
            start: 30.0,
            duration: 45.0,
            band_px: 90.0,
            opacity: 0.35,
            angle_deg: 20.0,
        }
    }
}

/// A phone-shaped card showing a screenshot, with 3D entrance, idle sway, Ken Burns motion and
/// a glare sweep. All four motions are independent closed-form terms.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhoneMockup {
    /// Symbolic screenshot reference.
    pub screen: String,
    /// Resting center on the canvas.
    pub center: Point,
    /// Card width.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Card height.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Outer corner radius.
    #[serde(default = "default_corner")]
    pub corner_radius: f64,
    /// Bezel thickness.
    #[serde(default = "default_bezel")]
    pub bezel_px: f64,
    /// Bezel color.
    #[serde(default = "default_bezel_color")]
    pub bezel_color: Rgba8,
    /// Perspective distance in pixels.
    #[serde(default = "default_perspective")]
    pub perspective_px: f64,
    /// Entrance.
    #[serde(default)]
    pub entry: PhoneEntry,
    /// Idle sway.
    #[serde(default)]
    pub sway: PhoneSway,
    /// Screen zoom/pan.
    #[serde(default)]
    pub ken_burns: KenBurns,
    /// Glare sweep.
    #[serde(default)]
    pub glare: Glare,
}

fn default_width() -> f64 {
    250.0
}

fn default_height() -> f64 {
    520.0
}

fn default_corner() -> f64 {
    36.0
}

fn default_bezel() -> f64 {
    8.0
}

fn default_bezel_color() -> Rgba8 {
    Rgba8::rgb(0x11, 0x11, 0x14)
}

fn default_perspective() -> f64 {
    1200.0
}

/// Sampled mockup motion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhoneState {
    /// Entrance opacity.
    pub opacity: f64,
    /// Uniform card scale.
    pub scale: f64,
    /// Vertical offset from `center` (entrance rise plus float).
    pub offset_y: f64,
    /// X tilt in degrees.
    pub rotate_x_deg: f64,
    /// Y tilt in degrees.
    pub rotate_y_deg: f64,
    /// Screen content zoom.
    pub zoom: f64,
    /// Screen content pan.
    pub pan: Vec2,
    /// Glare band center, relative to the screen's left edge.
    pub glare_x: f64,
    /// Glare opacity.
    pub glare_opacity: f64,
}

impl PhoneMockup {
    /// Mockup with default motion.
    pub fn new(screen: impl Into<String>, center: Point) -> Self {
        Self {
            screen: screen.into(),
            center,
            width: default_width(),
            height: default_height(),
            corner_radius: default_corner(),
            bezel_px: default_bezel(),
            bezel_color: default_bezel_color(),
            perspective_px: default_perspective(),
            entry: PhoneEntry::default(),
            sway: PhoneSway::default(),
            ken_burns: KenBurns::default(),
            glare: Glare::default(),
        }
    }

    /// Motion state at `frame`.
    pub fn state(&self, frame: f64) -> PhoneState {
        let e = &self.entry;
        let enter = interpolate(
            frame,
            &[e.delay, e.delay + e.frames],
            &[0.0, 1.0],
            InterpolateOpts::eased(Ease::OutCubic),
        );
        let rest = 1.0 - enter;
        let opacity = interpolate(
            frame,
            &[e.delay, e.delay + e.frames * 0.5],
            &[0.0, 1.0],
            InterpolateOpts::default(),
        );

        let s = &self.sway;
        let sway_x = Wave::new(s.rotate_x_deg, s.speed * 0.8).with_phase(1.3);
        let sway_y = Wave::new(s.rotate_y_deg, s.speed);
        let float = Wave::new(s.float_px, s.speed * 1.3).with_phase(0.7);

        let kb = &self.ken_burns;
        let k = interpolate(
            frame,
            &[kb.start, kb.end],
            &[0.0, 1.0],
            InterpolateOpts::eased(Ease::InOutCubic),
        );

        let g = &self.glare;
        let screen_w = self.screen_rect().width();
        let glare_x = interpolate(
            frame,
            &[g.start, g.start + g.duration],
            &[-g.band_px, screen_w + g.band_px],
            InterpolateOpts::eased(Ease::InOutCubic),
        );
        let glare_opacity =
            g.opacity * (std::f64::consts::PI * progress(frame, g.start, g.duration)).sin();

        PhoneState {
            opacity,
            scale: e.from_scale + (1.0 - e.from_scale) * enter,
            offset_y: e.from_offset_y * rest + float.sample(frame),
            rotate_x_deg: e.from_rotate_x_deg * rest + sway_x.sample(frame),
            rotate_y_deg: e.from_rotate_y_deg * rest + sway_y.sample(frame),
            zoom: kb.zoom_from + (kb.zoom_to - kb.zoom_from) * k,
            pan: kb.pan_from.lerp(kb.pan_to, k),
            glare_x,
            glare_opacity: glare_opacity.max(0.0),
        }
    }

    /// Card outline in card-local coordinates, centered on the origin.
    pub fn body_rect(&self) -> Rect {
        Rect::new(
            -self.width / 2.0,
            -self.height / 2.0,
            self.width / 2.0,
            self.height / 2.0,
        )
    }

    /// Screen area in card-local coordinates.
    pub fn screen_rect(&self) -> Rect {
        self.body_rect().inset(-self.bezel_px.max(0.0))
    }

    fn perspective(&self, st: &PhoneState) -> Perspective {
        Perspective {
            distance_px: self.perspective_px,
            rotate_x_deg: st.rotate_x_deg,
            rotate_y_deg: st.rotate_y_deg,
            origin: Point::ORIGIN,
        }
    }

    fn placement(&self, st: &PhoneState) -> Affine {
        Affine::translate(self.center.to_vec2() + Vec2::new(0.0, st.offset_y))
            * Affine::scale(st.scale)
    }

    /// Card corners on the canvas at `frame` (top-left, top-right, bottom-right, bottom-left).
    ///
    /// Perspective is applied in card space, then scale and placement.
    pub fn corners(&self, frame: f64) -> [Point; 4] {
        let st = self.state(frame);
        let place = self.placement(&st);
        self.perspective(&st)
            .project_rect(self.body_rect())
            .map(|p| place * p)
    }

    pub(crate) fn render(&self, frame: f64) -> Node {
        let st = self.state(frame);
        let body = self.body_rect();
        let screen = self.screen_rect();
        let inner_radius = (self.corner_radius - self.bezel_px).max(0.0);

        let shadow = Node::fill(
            Shape::Rect {
                rect: body.inflate(6.0, 6.0) + Vec2::new(0.0, 18.0),
                radius: self.corner_radius + 6.0,
            },
            Paint::Solid(Rgba8::BLACK),
        )
        .faded(0.35)
        .named("shadow");

        let frame_body = Node::fill(
            Shape::Rect {
                rect: body,
                radius: self.corner_radius,
            },
            Paint::Solid(self.bezel_color),
        );

        let content = Node::image(self.screen.clone(), screen, 0.0)
            .transformed(Affine::scale(st.zoom))
            .transformed(Affine::translate(st.pan))
            .named("screen");

        let glare_center = Point::new(screen.x0 + st.glare_x, screen.center().y);
        let half = self.glare.band_px / 2.0;
        let band = Rect::new(
            glare_center.x - half,
            screen.y0 - screen.height() * 0.25,
            glare_center.x + half,
            screen.y1 + screen.height() * 0.25,
        );
        let peak = Rgba8::WHITE.fade(st.glare_opacity);
        let glare = Node::fill(
            Shape::Rect {
                rect: band,
                radius: 0.0,
            },
            Paint::Linear {
                start: Point::new(band.x0, glare_center.y),
                end: Point::new(band.x1, glare_center.y),
                stops: vec![
                    GradientStop::new(0.0, Rgba8::TRANSPARENT),
                    GradientStop::new(0.5, peak),
                    GradientStop::new(1.0, Rgba8::TRANSPARENT),
                ],
            },
        )
        .transformed(Affine::rotate_about(
            self.glare.angle_deg.to_radians(),
            glare_center,
        ))
        .named("glare");

        let screen_group = Node::new(NodeKind::Group(GroupNode {
            children: vec![content, glare],
            perspective: None,
            clip: Some(RoundedRect {
                rect: screen,
                radius: inner_radius,
            }),
        }));

        let notch_w = self.width * 0.3;
        let notch = Node::fill(
            Shape::Rect {
                rect: Rect::new(
                    -notch_w / 2.0,
                    screen.y0 + 8.0,
                    notch_w / 2.0,
                    screen.y0 + 30.0,
                ),
                radius: 11.0,
            },
            Paint::Solid(self.bezel_color),
        );

        Node::new(NodeKind::Group(GroupNode {
            children: vec![shadow, frame_body, screen_group, notch],
            perspective: Some(self.perspective(&st)),
            clip: None,
        }))
        .transformed(self.placement(&st))
        .faded(st.opacity)
        .named("phone")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/phone.rs"]
mod tests;
