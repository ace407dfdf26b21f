//! Binds the scroll choreography to the page's elements.
//!
//! Elements are resolved once when the page mounts. Each frame the binding
//! reads section geometry from them and writes back the assignments the
//! choreography produced.

use web_sys::HtmlElement;
use yew::NodeRef;

use crate::dom;
use crate::motion::choreography::{PageGeometry, SectionBox, StyleAssignment, StyleWrite, Target};

/// Node refs handed to the landing page markup.
#[derive(Clone, Default, PartialEq)]
pub struct LayoutRefs {
    pub header: NodeRef,
    pub video_overlay: NodeRef,
    pub download_widget: NodeRef,
    pub hero: NodeRef,
    pub insights: NodeRef,
    pub backdrop_section: NodeRef,
    pub backdrop_image: NodeRef,
    pub backdrop_content: NodeRef,
    pub approach_section: NodeRef,
    pub approach_title: NodeRef,
    pub process_cards: NodeRef,
    pub founder_section: NodeRef,
    pub founder_image: NodeRef,
    pub founder_content: NodeRef,
}

impl LayoutRefs {
    pub fn resolve(&self) -> LayoutElements {
        LayoutElements {
            header: self.header.cast(),
            video_overlay: self.video_overlay.cast(),
            download_widget: self.download_widget.cast(),
            hero: self.hero.cast(),
            insights: self.insights.cast(),
            backdrop_section: self.backdrop_section.cast(),
            backdrop_image: self.backdrop_image.cast(),
            backdrop_content: self.backdrop_content.cast(),
            approach_section: self.approach_section.cast(),
            approach_title: self.approach_title.cast(),
            process_cards: self.process_cards.cast(),
            founder_section: self.founder_section.cast(),
            founder_image: self.founder_image.cast(),
            founder_content: self.founder_content.cast(),
        }
    }
}

/// Elements the choreography reads from or writes to. Any of them may be
/// missing; the blocks depending on a missing element are skipped.
#[derive(Clone, Debug, Default)]
pub struct LayoutElements {
    pub header: Option<HtmlElement>,
    pub video_overlay: Option<HtmlElement>,
    pub download_widget: Option<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub insights: Option<HtmlElement>,
    pub backdrop_section: Option<HtmlElement>,
    pub backdrop_image: Option<HtmlElement>,
    pub backdrop_content: Option<HtmlElement>,
    pub approach_section: Option<HtmlElement>,
    pub approach_title: Option<HtmlElement>,
    pub process_cards: Option<HtmlElement>,
    pub founder_section: Option<HtmlElement>,
    pub founder_image: Option<HtmlElement>,
    pub founder_content: Option<HtmlElement>,
}

fn section_box(el: &HtmlElement) -> SectionBox {
    SectionBox::new(el.offset_top() as f64, el.offset_height() as f64)
}

impl LayoutElements {
    pub fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Header => self.header.as_ref(),
            Target::VideoOverlay => self.video_overlay.as_ref(),
            Target::DownloadWidget => self.download_widget.as_ref(),
            Target::BackdropImage => self.backdrop_image.as_ref(),
            Target::BackdropContent => self.backdrop_content.as_ref(),
            Target::FounderImage => self.founder_image.as_ref(),
            Target::FounderContent => self.founder_content.as_ref(),
            Target::ProcessCards => self.process_cards.as_ref(),
            Target::ApproachTitle => self.approach_title.as_ref(),
        }
    }

    /// Reads the current geometry. The backdrop and founder sections count
    /// as missing when their background image is, since the stage block
    /// cannot run without both layers.
    pub fn geometry(&self, viewport_height: f64) -> PageGeometry {
        let with_image = |section: &Option<HtmlElement>, image: &Option<HtmlElement>| {
            image.as_ref().and(section.as_ref()).map(section_box)
        };
        PageGeometry {
            viewport_height,
            hero: self.hero.as_ref().map(section_box),
            insights: self.insights.as_ref().map(section_box),
            backdrop: with_image(&self.backdrop_section, &self.backdrop_image),
            approach: self.approach_section.as_ref().map(section_box),
            process_cards: self.process_cards.as_ref().map(section_box),
            founder: with_image(&self.founder_section, &self.founder_image),
        }
    }

    /// Applies one frame of assignments. Writes aimed at missing elements are
    /// dropped; the header block needs the header itself.
    pub fn apply(&self, assignments: &[StyleAssignment]) {
        for assignment in assignments {
            let Some(el) = self.element(assignment.target) else {
                continue;
            };
            let result = match &assignment.write {
                StyleWrite::Class { name, on } => el.class_list().toggle_with_force(name, *on).map(|_| ()),
                StyleWrite::Property { name, value } => el.style().set_property(name, value),
            };
            if let Err(err) = result {
                log::warn!("failed to apply {}: {:?}", assignment, err);
            }
        }
    }

    /// Initial state of the approach title before the first frame.
    pub fn hide_approach_title(&self) {
        if let Some(title) = &self.approach_title {
            dom::set_style(title, "opacity", "0");
            dom::set_style(title, "transform", "translateY(-100px)");
        }
    }
}
