use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlMediaElement};
use yew::prelude::*;

use crate::content::{self, EXPERT_POSTERS};
use crate::dom::media;
use crate::motion::carousel::{Carousel, CarouselAction, Step, TrackTransition, REAL_CARDS, RESUME_DELAY_MS};

/// Mutes, loops and starts every expert clip inside the track. The `muted`
/// attribute alone does not satisfy autoplay policies for elements created
/// from script.
fn start_expert_videos(track: &HtmlElement) {
    let Ok(videos) = track.query_selector_all(".expert-video") else {
        return;
    };
    for i in 0..videos.length() {
        if let Some(video) = videos.item(i).and_then(|n| n.dyn_into::<HtmlMediaElement>().ok()) {
            video.set_muted(true);
            video.set_loop(true);
            media::play(&video, "expert video");
        }
    }
}

#[function_component(InsightsCarousel)]
pub fn insights_carousel() -> Html {
    let carousel = use_reducer(Carousel::new);
    let track_ref = use_node_ref();

    // Preload all expert stills so the cards never flash black
    use_effect_with_deps(
        |_| {
            media::preload_images(&EXPERT_POSTERS);
            || ()
        },
        (),
    );

    {
        let dispatcher = carousel.dispatcher();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = track_ref.cast::<HtmlElement>().map(|track| {
                    start_expert_videos(&track);
                    EventListener::new(&track, "transitionend", move |event| {
                        // Ignore transitions bubbling up from inside the cards.
                        if event.target() == event.current_target() {
                            dispatcher.dispatch(CarouselAction::TransitionEnd);
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        let suspended = carousel.transition() == TrackTransition::Suspended;
        use_effect_with_deps(
            move |suspended| {
                let timeout = suspended.then(|| {
                    Timeout::new(RESUME_DELAY_MS, move || {
                        dispatcher.dispatch(CarouselAction::ResumeTransition);
                    })
                });
                move || drop(timeout)
            },
            suspended,
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance(Step::Backward)))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance(Step::Forward)))
    };

    html! {
        <>
            <div class="insights-carousel">
                <button class="carousel-arrow left-arrow" onclick={prev}>
                    <span>{"‹"}</span>
                </button>

                <div class="carousel-viewport">
                    <div ref={track_ref} class="insights-cards" style={carousel.track_style()}>
                        { for content::carousel_slides().map(|expert| html! {
                            <div class="insight-card">
                                <div class="expert-image">
                                    <video
                                        src={expert.video}
                                        autoplay=true
                                        muted=true
                                        playsinline=true
                                        class="expert-video"
                                    />
                                </div>
                                <div class="insight-content">
                                    <p class="insight-quote">{expert.quote}</p>
                                    <h3 class="expert-name">{expert.name}</h3>
                                    <p class="expert-title">{expert.title}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <button class="carousel-arrow right-arrow" onclick={next}>
                    <span>{"›"}</span>
                </button>
            </div>

            <div class="carousel-dots">
                { for (1..=REAL_CARDS).map(|slot| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(slot)))
                    };
                    html! {
                        <span
                            key={slot}
                            class={classes!("dot", carousel.is_active_dot(slot).then(|| "active"))}
                            {onclick}
                        ></span>
                    }
                }) }
            </div>
        </>
    }
}
