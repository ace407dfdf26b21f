use std::rc::Rc;

use yew::prelude::*;

use crate::components::carousel::InsightsCarousel;
use crate::components::download_widget::DownloadWidget;
use crate::components::hero_video::HeroVideo;
use crate::components::site_header::SiteHeader;
use crate::config;
use crate::dom;
use crate::dom::layout::LayoutRefs;
use crate::dom::scroller::use_smooth_scroll;
use crate::motion::choreography::{compose_frame, FounderPhase};
use crate::motion::smooth_scroll::ScrollEvent;
use crate::pages::sections::{
    ApproachSection, BackdropSection, FounderSection, MarketStats, ProcessCards, ServicesSection,
    SiteFooter, TeamSection, WhyInvestza,
};

/// Restyles the page on every frame the smooth scroller reports.
#[hook]
pub fn use_scroll_choreography(refs: Rc<LayoutRefs>) {
    let phase = use_mut_ref(FounderPhase::default);

    use_effect_with_deps(
        |refs| {
            refs.resolve().hide_approach_title();
            || ()
        },
        refs.clone(),
    );

    let on_scroll = use_memo(
        move |refs| {
            let refs = Rc::clone(refs);
            Callback::from(move |event: ScrollEvent| {
                let elements = refs.resolve();
                let geometry = elements.geometry(dom::viewport_height());
                let styles = compose_frame(event.scroll, &geometry, &mut phase.borrow_mut());
                elements.apply(&styles.assignments());
            })
        },
        refs,
    );

    use_smooth_scroll(config::scroll_options(), (*on_scroll).clone());
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let refs = use_memo(|_| LayoutRefs::default(), ());
    use_scroll_choreography(refs.clone());

    html! {
        <div class="landing-page">
            <SiteHeader node_ref={refs.header.clone()} />

            <HeroVideo
                section_ref={refs.hero.clone()}
                overlay_ref={refs.video_overlay.clone()}
            />

            <section class="wealth-insights" ref={refs.insights.clone()}>
                <div class="container">
                    <h2 class="insights-title">{"Wealth Insights from Experts."}</h2>
                    <InsightsCarousel />
                    <div class="insights-footer">
                        <button class="view-episodes-btn">
                            {"View All Episodes "}<span class="arrow-circle">{"→"}</span>
                        </button>
                    </div>
                    <MarketStats />
                </div>
            </section>

            <WhyInvestza />

            <BackdropSection
                section_ref={refs.backdrop_section.clone()}
                image_ref={refs.backdrop_image.clone()}
                content_ref={refs.backdrop_content.clone()}
            />

            <ApproachSection
                section_ref={refs.approach_section.clone()}
                title_ref={refs.approach_title.clone()}
            />

            <ProcessCards node_ref={refs.process_cards.clone()} />

            <FounderSection
                section_ref={refs.founder_section.clone()}
                image_ref={refs.founder_image.clone()}
                content_ref={refs.founder_content.clone()}
            />

            <ServicesSection />
            <TeamSection />
            <SiteFooter />

            <DownloadWidget node_ref={refs.download_widget.clone()} />

            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html.lenis, html.lenis body {
        height: auto;
    }

    .lenis.lenis-smooth {
        scroll-behavior: auto !important;
    }

    .landing-page {
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }

    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 2rem;
    }

    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 1.5rem 3rem;
        transition: background 0.4s ease, padding 0.4s ease;
    }

    .header.scrolled {
        padding: 1rem 3rem;
        backdrop-filter: blur(8px);
    }

    .header.past-video {
        background: rgba(0, 0, 0, 0.85);
    }

    .navbar {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .logo {
        height: 36px;
    }

    .nav-menu {
        display: flex;
        gap: 2.5rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }

    .nav-menu a {
        color: #fff;
        text-decoration: none;
        font-size: 0.95rem;
    }

    .nav-button, .cta-button, .view-episodes-btn, .learn-why-btn, .meet-team-btn {
        background: #fff;
        color: #000;
        border: none;
        border-radius: 999px;
        padding: 0.8rem 1.6rem;
        font-weight: 600;
        cursor: pointer;
        display: inline-flex;
        align-items: center;
        gap: 0.6rem;
    }

    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
    }

    .hero-video, .background-image-fallback {
        position: absolute;
        inset: 0;
    }

    .background-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: opacity 0.5s ease, filter 0.5s ease;
    }

    .background-video.video-2 {
        opacity: 0;
    }

    .background-image-fallback {
        background: url('/mountain-poster.jpg') center / cover no-repeat;
        z-index: -1;
    }

    .video-overlay {
        --scroll-tint-opacity: 0;
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, calc(0.25 + var(--scroll-tint-opacity)));
        pointer-events: none;
    }

    .hero-content {
        position: relative;
        z-index: 2;
        height: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }

    .hero-text-above, .hero-text-below {
        font-weight: 300;
        font-size: 1.8rem;
        margin: 0;
    }

    .hero-main-word {
        font-size: 6rem;
        letter-spacing: 0.02em;
        margin: 0.5rem 0;
    }

    .hero-buttons {
        margin-top: 2.5rem;
    }

    .wealth-insights {
        position: relative;
        z-index: 3;
        background: #000;
        padding: 6rem 0;
    }

    .insights-title {
        font-size: 2.6rem;
        margin-bottom: 3rem;
    }

    .insights-carousel {
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .carousel-viewport {
        overflow: hidden;
        width: 612px;
        max-width: 100%;
        margin: 0 auto;
    }

    .insights-cards {
        display: flex;
        will-change: transform;
    }

    .insight-card {
        flex: 0 0 612px;
        display: flex;
        gap: 1.5rem;
        padding: 1.5rem;
        box-sizing: border-box;
        background: #111;
        border-radius: 24px;
    }

    .expert-image {
        flex: 0 0 220px;
        height: 280px;
        border-radius: 16px;
        overflow: hidden;
    }

    .expert-video {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .insight-quote {
        font-size: 1.3rem;
        line-height: 1.5;
    }

    .expert-title {
        color: #999;
    }

    .carousel-arrow {
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.3);
        color: #fff;
        width: 48px;
        height: 48px;
        border-radius: 50%;
        font-size: 1.6rem;
        cursor: pointer;
    }

    .carousel-dots {
        display: flex;
        justify-content: center;
        gap: 0.6rem;
        margin: 2rem 0;
    }

    .dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
    }

    .dot.active {
        background: #fff;
    }

    .insights-footer, .stats-learn-section, .team-cta {
        display: flex;
        justify-content: center;
        margin-top: 2rem;
    }

    .statistics-section {
        margin-top: 6rem;
    }

    .stats-header h2 {
        font-size: 2rem;
        margin: 0;
        text-align: center;
    }

    .stats-grid, .feature-cards-grid, .process-cards-grid, .team-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
        margin-top: 3rem;
    }

    .stat-card, .feature-card, .team-member {
        background: #111;
        border-radius: 20px;
        padding: 2rem;
    }

    .why-investza {
        position: relative;
        z-index: 3;
        background: #000;
        padding: 6rem 0;
    }

    .why-investza-content {
        display: flex;
        justify-content: space-between;
        gap: 3rem;
    }

    .why-investza-left h2 {
        font-size: 3rem;
        margin: 0;
    }

    .why-subtitle {
        font-size: 1.5rem;
        margin: 0 0 0.5rem;
    }

    .why-description {
        color: #999;
    }

    .backdrop-section {
        position: relative;
        height: 100vh;
        z-index: 1;
    }

    .backdrop-container {
        position: relative;
        height: 100%;
        overflow: hidden;
    }

    .backdrop-image {
        position: absolute;
        inset: -10% 0 0 0;
        will-change: transform, opacity;
    }

    .backdrop-image img {
        width: 100%;
        height: 110%;
        object-fit: cover;
    }

    .backdrop-content {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        opacity: 0;
        transform: translateY(-200px);
        transition: opacity 0.6s ease;
    }

    .backdrop-stats {
        display: flex;
        justify-content: center;
        gap: 5rem;
    }

    .backdrop-stat-number {
        font-size: 3.5rem;
        font-weight: 700;
    }

    .backdrop-stat-label {
        color: rgba(255, 255, 255, 0.8);
        text-align: center;
    }

    .wealth-approach-section {
        position: relative;
        z-index: 3;
        min-height: 60vh;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .wealth-approach-title {
        font-size: 3.2rem;
        text-align: center;
        max-width: 900px;
        will-change: transform, opacity;
    }

    .process-cards-section {
        position: relative;
        z-index: 3;
        padding-bottom: 8rem;
        will-change: transform;
    }

    .process-card {
        background: rgba(20, 20, 20, 0.85);
        backdrop-filter: blur(12px);
        border-radius: 24px;
        padding: 2rem;
    }

    .process-number {
        color: #888;
        font-size: 0.9rem;
    }

    .process-description {
        color: #bbb;
        line-height: 1.6;
    }

    .founder-section {
        position: relative;
        height: 100vh;
    }

    .founder-image {
        opacity: 0;
        transform: translateY(100vh);
    }

    .founder-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .founder-content {
        display: none;
        align-items: center;
        justify-content: space-between;
        padding: 0 6rem;
        box-sizing: border-box;
        background: linear-gradient(90deg, rgba(0, 0, 0, 0.7), transparent);
    }

    .founder-quote {
        font-size: 1.8rem;
        line-height: 1.5;
        max-width: 640px;
        margin: 0;
    }

    .founder-profile {
        text-align: center;
    }

    .founder-profile-image img {
        width: 160px;
        height: 160px;
        border-radius: 50%;
        object-fit: cover;
    }

    .lenis-cards-section, .team-section, .footer {
        position: relative;
        z-index: 3;
        background: #000;
    }

    .lenis-cards-section {
        padding: 8rem 0;
    }

    .lenis-layout {
        display: flex;
        gap: 4rem;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 2rem;
    }

    .lenis-left {
        flex: 1;
        position: sticky;
        top: 8rem;
        align-self: flex-start;
    }

    .lenis-left h2 {
        font-size: 2.8rem;
        margin: 0 0 1rem;
    }

    .lenis-right {
        flex: 1;
    }

    .lenis-card {
        position: sticky;
        top: 8rem;
        background: #151515;
        border-radius: 24px;
        padding: 2.5rem;
        margin-bottom: 2rem;
        min-height: 220px;
    }

    .team-section {
        padding: 6rem 0;
    }

    .team-title {
        text-align: center;
        font-size: 2.4rem;
    }

    .member-image {
        height: 240px;
        border-radius: 16px;
        background: #222;
        color: #666;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .member-role {
        color: #999;
    }

    .footer {
        padding: 2rem 0;
        text-align: center;
        color: #777;
        border-top: 1px solid #222;
    }

    .download-widget {
        position: fixed;
        right: 2rem;
        bottom: 2rem;
        z-index: 200;
        padding: 1rem;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.12);
        backdrop-filter: blur(20px) saturate(180%);
        border: 1px solid rgba(255, 255, 255, 0.2);
        opacity: 0;
        pointer-events: none;
        transform: translateY(20px);
        transition: opacity 0.4s ease, transform 0.4s ease;
    }

    .download-widget.visible {
        opacity: 1;
        pointer-events: auto;
        transform: translateY(0);
    }

    .download-content {
        display: flex;
        gap: 1rem;
        align-items: center;
    }

    .qr-code-image {
        width: 72px;
        height: 72px;
    }

    .app-store-buttons {
        display: flex;
        gap: 0.5rem;
        margin-top: 0.5rem;
    }

    .store-icon {
        height: 28px;
    }

    @media (max-width: 768px) {
        .nav-menu {
            display: none;
        }

        .hero-main-word {
            font-size: 3.5rem;
        }

        .carousel-viewport, .insight-card {
            width: 100%;
            flex-basis: 100%;
        }

        .why-investza-content, .lenis-layout, .founder-content {
            flex-direction: column;
        }

        .download-widget {
            display: none;
        }
    }
"#;
