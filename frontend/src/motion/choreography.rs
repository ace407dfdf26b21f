//! Scroll-driven styling for the landing page.
//!
//! Every frame the page hands in the current scroll offset and the geometry
//! of the observed sections, and gets back the full set of inline style and
//! class writes for that frame. Nothing here reads or writes the DOM.

use std::fmt;

/// Scroll offset past which the header switches to its scrolled look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Tint applied over the hero video once the header is past it.
pub const MAX_TINT: f64 = 0.6;
/// Share of the hero height over which the tint ramps up. The download
/// widget also appears past this point.
pub const HERO_RAMP_SHARE: f64 = 0.8;
/// Sub-progress through the approach span at which the cards start lifting.
pub const LIFT_START: f64 = 0.7;
/// Lift distance, in viewport heights, at full sub-progress.
pub const LIFT_VIEWPORTS: f64 = 1.5;
/// Backdrop image travel across the hero-to-approach span.
pub const BACKDROP_PARALLAX_PX: f64 = 100.0;
/// Backdrop text travel across its visibility window.
pub const BACKDROP_TEXT_PARALLAX_PX: f64 = 30.0;
/// Title offsets at the start and end of its reveal.
pub const TITLE_HIDDEN_OFFSET_PX: f64 = 100.0;
pub const TITLE_SHOWN_OFFSET_PX: f64 = 20.0;
/// Share of a viewport height over which the title reveals.
pub const TITLE_REVEAL_SHARE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometry read once per frame. A section is `None` when its element is
/// not in the document, which turns off every block that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageGeometry {
    pub viewport_height: f64,
    pub hero: Option<SectionBox>,
    pub insights: Option<SectionBox>,
    pub backdrop: Option<SectionBox>,
    pub approach: Option<SectionBox>,
    pub process_cards: Option<SectionBox>,
    pub founder: Option<SectionBox>,
}

impl PageGeometry {
    fn hero_height(&self) -> f64 {
        self.hero.map_or(self.viewport_height, |hero| hero.height)
    }
}

/// `num / den` clamped to [0, 1]; an empty span counts as not started.
fn ratio(num: f64, den: f64) -> f64 {
    if den <= 0.0 || !num.is_finite() {
        return 0.0;
    }
    (num / den).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Base,
    Scrolled,
    PastVideo,
}

impl HeaderState {
    pub fn is_scrolled(self) -> bool {
        !matches!(self, HeaderState::Base)
    }

    pub fn is_past_video(self) -> bool {
        matches!(self, HeaderState::PastVideo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub state: HeaderState,
    pub tint: f64,
}

impl HeaderStyle {
    pub fn at(scroll: f64, hero_height: f64) -> Self {
        if scroll <= HEADER_SCROLL_THRESHOLD {
            return Self {
                state: HeaderState::Base,
                tint: 0.0,
            };
        }
        if scroll >= hero_height {
            return Self {
                state: HeaderState::PastVideo,
                tint: MAX_TINT,
            };
        }
        Self {
            state: HeaderState::Scrolled,
            tint: ratio(scroll, hero_height * HERO_RAMP_SHARE) * MAX_TINT,
        }
    }
}

/// Which background owns the viewport. Re-derived from the scroll offset
/// every frame, so scrolling back above the approach section hands the
/// viewport straight back to the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FounderPhase {
    #[default]
    BeforeApproach,
    AtOrAfterApproach,
}

impl FounderPhase {
    pub fn at(scroll: f64, approach_top: f64) -> Self {
        if scroll < approach_top {
            FounderPhase::BeforeApproach
        } else {
            FounderPhase::AtOrAfterApproach
        }
    }

    /// Moves to the phase for `scroll`. Returns true on a change.
    pub fn advance(&mut self, scroll: f64, approach_top: f64) -> bool {
        let next = Self::at(scroll, approach_top);
        let changed = next != *self;
        if changed {
            log::debug!("founder phase {:?} -> {:?} at {}", self, next, scroll);
        }
        *self = next;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageStyles {
    /// Backdrop image scrolling with parallax; founder layers hidden.
    Backdrop {
        image_offset: f64,
        /// Text parallax while the backdrop section is in its window.
        content_offset: Option<f64>,
    },
    /// Founder background and content pinned to the viewport.
    Founder { viewport_height: f64, lift: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStyle {
    /// Upward offset in pixels.
    pub offset: f64,
    pub opacity: f64,
}

impl TitleStyle {
    pub fn hidden() -> Self {
        Self {
            offset: TITLE_HIDDEN_OFFSET_PX,
            opacity: 0.0,
        }
    }

    fn revealed(progress: f64) -> Self {
        Self {
            offset: TITLE_HIDDEN_OFFSET_PX
                - progress * (TITLE_HIDDEN_OFFSET_PX - TITLE_SHOWN_OFFSET_PX),
            opacity: progress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyles {
    pub header: HeaderStyle,
    pub download_visible: bool,
    pub stage: Option<StageStyles>,
    pub title: Option<TitleStyle>,
}

/// Derives every style for one frame. `phase` carries the founder phase
/// between frames so changes can be reported.
pub fn compose_frame(scroll: f64, geometry: &PageGeometry, phase: &mut FounderPhase) -> FrameStyles {
    let scroll = if scroll.is_finite() { scroll.max(0.0) } else { 0.0 };
    let vh = geometry.viewport_height.max(0.0);
    let hero_height = geometry.hero_height();

    let header = HeaderStyle::at(scroll, hero_height);
    let download_visible = scroll > hero_height * HERO_RAMP_SHARE;
    let stage = compose_stage(scroll, vh, geometry, phase);

    let title = geometry.approach.map(|approach| {
        let viewport_bottom = scroll + vh;
        let mut title = if viewport_bottom >= approach.top {
            TitleStyle::revealed(ratio(viewport_bottom - approach.top, vh * TITLE_REVEAL_SHARE))
        } else {
            TitleStyle::hidden()
        };
        if let Some(StageStyles::Founder { lift, .. }) = stage {
            title.offset += lift;
        }
        title
    });

    FrameStyles {
        header,
        download_visible,
        stage,
        title,
    }
}

fn compose_stage(
    scroll: f64,
    vh: f64,
    geometry: &PageGeometry,
    phase: &mut FounderPhase,
) -> Option<StageStyles> {
    let hero = geometry.hero?;
    geometry.insights?;
    let backdrop = geometry.backdrop?;
    let approach = geometry.approach?;
    let cards = geometry.process_cards?;
    geometry.founder?;

    phase.advance(scroll, approach.top);
    let stage = match phase {
        FounderPhase::BeforeApproach => {
            let progress = ratio(scroll - hero.top, approach.top - hero.top);
            let window_start = backdrop.top - vh;
            let content_offset = (scroll >= window_start && scroll < backdrop.bottom()).then(|| {
                ratio(scroll - window_start, backdrop.height + vh) * BACKDROP_TEXT_PARALLAX_PX
            });
            StageStyles::Backdrop {
                image_offset: progress * BACKDROP_PARALLAX_PX,
                content_offset,
            }
        }
        FounderPhase::AtOrAfterApproach => {
            let progress = ratio(scroll - approach.top, approach.height + cards.height);
            let lift = if progress < LIFT_START {
                0.0
            } else {
                (progress - LIFT_START) / (1.0 - LIFT_START) * vh * LIFT_VIEWPORTS
            };
            StageStyles::Founder {
                viewport_height: vh,
                lift,
            }
        }
    };
    Some(stage)
}

/// Element a style write is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Header,
    VideoOverlay,
    DownloadWidget,
    BackdropImage,
    BackdropContent,
    FounderImage,
    FounderContent,
    ProcessCards,
    ApproachTitle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleWrite {
    Class { name: &'static str, on: bool },
    Property { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleAssignment {
    pub target: Target,
    pub write: StyleWrite,
}

impl fmt::Display for StyleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.write {
            StyleWrite::Class { name, on } => {
                write!(f, "{:?}.{} {}", self.target, name, if *on { "on" } else { "off" })
            }
            StyleWrite::Property { name, value } => write!(f, "{:?} {}: {}", self.target, name, value),
        }
    }
}

struct Assignments(Vec<StyleAssignment>);

impl Assignments {
    fn class(&mut self, target: Target, name: &'static str, on: bool) {
        self.0.push(StyleAssignment {
            target,
            write: StyleWrite::Class { name, on },
        });
    }

    fn set(&mut self, target: Target, name: &'static str, value: impl Into<String>) {
        self.0.push(StyleAssignment {
            target,
            write: StyleWrite::Property {
                name,
                value: value.into(),
            },
        });
    }

    fn pin(&mut self, target: Target, z_index: &'static str) {
        self.set(target, "position", "fixed");
        self.set(target, "top", "0px");
        self.set(target, "left", "0px");
        self.set(target, "width", "100vw");
        self.set(target, "height", "100vh");
        self.set(target, "transform", "translateY(0px)");
        self.set(target, "z-index", z_index);
    }
}

/// `translateY(-{px}px)`, without a negative zero.
fn lift_css(px: f64) -> String {
    if px > 0.0 {
        format!("translateY(-{}px)", px)
    } else {
        "translateY(0px)".to_string()
    }
}

impl FrameStyles {
    pub fn assignments(&self) -> Vec<StyleAssignment> {
        let mut out = Assignments(Vec::with_capacity(32));

        out.class(Target::Header, "scrolled", self.header.state.is_scrolled());
        out.class(Target::Header, "past-video", self.header.state.is_past_video());
        out.set(Target::VideoOverlay, "--scroll-tint-opacity", self.header.tint.to_string());
        out.class(Target::DownloadWidget, "visible", self.download_visible);

        match self.stage {
            Some(StageStyles::Backdrop {
                image_offset,
                content_offset,
            }) => {
                out.set(Target::BackdropImage, "opacity", "1");
                out.set(
                    Target::BackdropImage,
                    "transform",
                    format!("{} scale(1.0)", lift_css(image_offset)),
                );
                out.set(Target::FounderImage, "opacity", "0");
                out.set(Target::FounderImage, "transform", "translateY(100vh)");
                out.set(Target::FounderContent, "opacity", "0");
                out.set(Target::FounderContent, "visibility", "hidden");
                out.set(Target::FounderContent, "display", "none");
                match content_offset {
                    Some(offset) => {
                        out.set(Target::BackdropContent, "opacity", "1");
                        out.set(
                            Target::BackdropContent,
                            "transform",
                            format!("translateY(-200px) {}", lift_css(offset)),
                        );
                    }
                    None => {
                        out.set(Target::BackdropContent, "opacity", "0");
                        out.set(Target::BackdropContent, "transform", "translateY(-200px)");
                    }
                }
                out.set(Target::ProcessCards, "transform", "translateY(0px)");
            }
            Some(StageStyles::Founder {
                viewport_height,
                lift,
            }) => {
                out.set(Target::BackdropImage, "opacity", "0");
                out.set(
                    Target::BackdropImage,
                    "transform",
                    format!("{} scale(1.0)", lift_css(viewport_height)),
                );
                out.set(Target::BackdropContent, "opacity", "0");
                out.set(Target::BackdropContent, "transform", "translateY(-150px)");

                out.set(Target::FounderImage, "opacity", "1");
                out.pin(Target::FounderImage, "1");

                out.set(Target::ProcessCards, "transform", lift_css(lift));

                out.pin(Target::FounderContent, "2");
                out.set(Target::FounderContent, "opacity", "1");
                out.set(Target::FounderContent, "visibility", "visible");
                out.set(Target::FounderContent, "display", "flex");
            }
            None => {}
        }

        if let Some(title) = self.title {
            out.set(Target::ApproachTitle, "transform", lift_css(title.offset));
            out.set(Target::ApproachTitle, "opacity", title.opacity.to_string());
        }

        out.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn page() -> PageGeometry {
        PageGeometry {
            viewport_height: VH,
            hero: Some(SectionBox::new(0.0, 800.0)),
            insights: Some(SectionBox::new(800.0, 1600.0)),
            backdrop: Some(SectionBox::new(2400.0, 800.0)),
            approach: Some(SectionBox::new(3200.0, 800.0)),
            process_cards: Some(SectionBox::new(4000.0, 1200.0)),
            founder: Some(SectionBox::new(5200.0, 800.0)),
        }
    }

    fn frame(scroll: f64) -> FrameStyles {
        compose_frame(scroll, &page(), &mut FounderPhase::default())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn writes_for(styles: &FrameStyles, target: Target) -> Vec<StyleWrite> {
        styles
            .assignments()
            .into_iter()
            .filter(|a| a.target == target)
            .map(|a| a.write)
            .collect()
    }

    fn property(styles: &FrameStyles, target: Target, name: &str) -> Option<String> {
        writes_for(styles, target).into_iter().rev().find_map(|w| match w {
            StyleWrite::Property { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }

    #[test]
    fn top_of_page_is_untinted() {
        let styles = frame(0.0);
        assert_eq!(styles.header.state, HeaderState::Base);
        assert_eq!(styles.header.tint, 0.0);
        assert!(!styles.download_visible);
        assert_eq!(
            writes_for(&styles, Target::Header),
            vec![
                StyleWrite::Class { name: "scrolled", on: false },
                StyleWrite::Class { name: "past-video", on: false },
            ]
        );
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert_eq!(frame(50.0).header.state, HeaderState::Base);
        assert_eq!(frame(50.5).header.state, HeaderState::Scrolled);
    }

    #[test]
    fn tint_ramps_over_most_of_the_hero() {
        let styles = frame(0.4 * 800.0);
        assert_eq!(styles.header.state, HeaderState::Scrolled);
        assert!(close(styles.header.tint, 0.3));
        assert!(!styles.download_visible);
    }

    #[test]
    fn late_in_the_hero_is_scrolled_but_not_past_video() {
        let styles = frame(0.9 * 800.0);
        assert_eq!(styles.header.state, HeaderState::Scrolled);
        assert!(!styles.header.state.is_past_video());
        assert!(close(styles.header.tint, MAX_TINT));
        assert!(styles.download_visible);
    }

    #[test]
    fn past_the_hero_tint_is_pinned() {
        let styles = frame(801.0);
        assert_eq!(styles.header.state, HeaderState::PastVideo);
        assert_eq!(styles.header.tint, MAX_TINT);
        assert_eq!(
            property(&styles, Target::VideoOverlay, "--scroll-tint-opacity").as_deref(),
            Some("0.6")
        );
    }

    #[test]
    fn missing_hero_falls_back_to_viewport_height() {
        let geometry = PageGeometry {
            viewport_height: 1000.0,
            ..PageGeometry::default()
        };
        let styles = compose_frame(900.0, &geometry, &mut FounderPhase::default());
        assert!(styles.download_visible);
        assert_eq!(styles.header.state, HeaderState::Scrolled);
        assert!(styles.stage.is_none());
        assert!(styles.title.is_none());
    }

    #[test]
    fn backdrop_parallax_before_the_approach() {
        let styles = frame(2000.0);
        match styles.stage {
            Some(StageStyles::Backdrop {
                image_offset,
                content_offset,
            }) => {
                assert!(close(image_offset, 62.5));
                assert!(close(content_offset.unwrap_or_default(), 7.5));
            }
            other => panic!("unexpected stage {:?}", other),
        }
        assert_eq!(
            property(&styles, Target::BackdropImage, "transform").as_deref(),
            Some("translateY(-62.5px) scale(1.0)")
        );
        assert_eq!(
            property(&styles, Target::FounderContent, "display").as_deref(),
            Some("none")
        );
    }

    #[test]
    fn backdrop_text_hidden_outside_its_window() {
        let styles = frame(1000.0);
        assert!(matches!(
            styles.stage,
            Some(StageStyles::Backdrop { content_offset: None, .. })
        ));
        assert_eq!(
            property(&styles, Target::BackdropContent, "transform").as_deref(),
            Some("translateY(-200px)")
        );
    }

    #[test]
    fn founder_pins_at_the_approach_offset() {
        let mut phase = FounderPhase::default();
        let styles = compose_frame(3200.0, &page(), &mut phase);
        assert_eq!(phase, FounderPhase::AtOrAfterApproach);
        assert_eq!(
            styles.stage,
            Some(StageStyles::Founder {
                viewport_height: VH,
                lift: 0.0
            })
        );
        assert_eq!(property(&styles, Target::FounderContent, "position").as_deref(), Some("fixed"));
        assert_eq!(property(&styles, Target::FounderImage, "z-index").as_deref(), Some("1"));
        assert_eq!(
            property(&styles, Target::BackdropImage, "transform").as_deref(),
            Some("translateY(-800px) scale(1.0)")
        );
        assert_eq!(property(&styles, Target::ProcessCards, "transform").as_deref(), Some("translateY(0px)"));

        let title = styles.title.unwrap_or_else(TitleStyle::hidden);
        assert!(close(title.offset, TITLE_SHOWN_OFFSET_PX));
        assert!(close(title.opacity, 1.0));
    }

    #[test]
    fn cards_and_title_lift_late_in_the_approach() {
        // Sub-progress 0.85 of the 2000px approach + cards span.
        let styles = frame(3200.0 + 1700.0);
        let Some(StageStyles::Founder { lift, .. }) = styles.stage else {
            panic!("expected founder stage");
        };
        assert!(close(lift, 600.0));
        let title = styles.title.unwrap_or_else(TitleStyle::hidden);
        assert!(close(title.offset, 620.0));
    }

    #[test]
    fn lift_saturates_past_the_span() {
        let Some(StageStyles::Founder { lift, .. }) = frame(100_000.0).stage else {
            panic!("expected founder stage");
        };
        assert!(close(lift, VH * LIFT_VIEWPORTS));
    }

    #[test]
    fn scrolling_back_hands_the_viewport_back_to_the_backdrop() {
        let mut phase = FounderPhase::default();
        compose_frame(3300.0, &page(), &mut phase);
        assert_eq!(phase, FounderPhase::AtOrAfterApproach);

        let styles = compose_frame(3199.0, &page(), &mut phase);
        assert_eq!(phase, FounderPhase::BeforeApproach);
        assert_eq!(property(&styles, Target::FounderContent, "visibility").as_deref(), Some("hidden"));
    }

    #[test]
    fn title_reveals_over_part_of_a_viewport() {
        // Section top is 3200; the viewport bottom reaches it at scroll 2400.
        assert_eq!(frame(2399.0).title, Some(TitleStyle::hidden()));

        let half = frame(2400.0 + 240.0).title.unwrap_or_else(TitleStyle::hidden);
        assert!(close(half.opacity, 0.5));
        assert!(close(half.offset, 60.0));
    }

    #[test]
    fn negative_scroll_never_goes_negative() {
        let styles = frame(-100.0);
        assert_eq!(styles.header.tint, 0.0);
        let Some(StageStyles::Backdrop { image_offset, .. }) = styles.stage else {
            panic!("expected backdrop stage");
        };
        assert_eq!(image_offset, 0.0);
        for assignment in styles.assignments() {
            if let StyleWrite::Property { value, .. } = &assignment.write {
                assert!(!value.contains("--"), "bad value in {}", assignment);
                assert!(!value.starts_with('-'), "negative value in {}", assignment);
            }
        }
    }

    #[test]
    fn stage_is_skipped_without_its_sections() {
        let geometry = PageGeometry {
            founder: None,
            ..page()
        };
        let mut phase = FounderPhase::default();
        let styles = compose_frame(3500.0, &geometry, &mut phase);
        assert!(styles.stage.is_none());
        assert_eq!(phase, FounderPhase::BeforeApproach);
        assert!(writes_for(&styles, Target::FounderContent).is_empty());
        // The title only needs the approach section.
        assert!(styles.title.is_some());
    }

    #[test]
    fn ratio_handles_empty_spans() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(-5.0, 10.0), 0.0);
        assert_eq!(ratio(50.0, 10.0), 1.0);
    }
}
