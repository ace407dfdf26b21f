use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::content;
use crate::dom;
use crate::dom::media::{self, VideoPair, HAVE_FUTURE_DATA};
use crate::motion::crossfade::{CrossfadeScheduler, VideoCommand, VideoSlot};

#[derive(Clone)]
struct CrossfadeDriver {
    pair: Rc<VideoPair>,
    scheduler: Rc<RefCell<CrossfadeScheduler>>,
    alive: Rc<Cell<bool>>,
}

impl CrossfadeDriver {
    fn run(&self, commands: Vec<VideoCommand>) {
        for command in commands {
            self.pair.apply(command);
        }
    }

    fn on_time_update(&self, slot: VideoSlot) {
        let video = self.pair.get(slot);
        let commands = self
            .scheduler
            .borrow_mut()
            .observe(slot, video.current_time(), video.duration(), dom::now());
        if commands.is_empty() {
            return;
        }
        self.run(commands);
        self.schedule_next();
    }

    fn schedule_next(&self) {
        let Some(deadline) = self.scheduler.borrow().next_deadline() else {
            return;
        };
        let delay = (deadline - dom::now()).max(0.0).ceil() as u32;
        let driver = self.clone();
        Timeout::new(delay, move || {
            // The page may have gone away while the fade was in flight.
            if !driver.alive.get() {
                return;
            }
            let commands = driver.scheduler.borrow_mut().tick(dom::now());
            driver.run(commands);
            driver.schedule_next();
        })
        .forget();
    }
}

/// Loops the two hero videos into each other. Both refs must point at
/// `<video>` elements once mounted; otherwise the hook does nothing.
#[hook]
pub fn use_video_crossfade(primary: NodeRef, secondary: NodeRef) {
    use_effect_with_deps(
        move |(primary, secondary)| {
            let alive = Rc::new(Cell::new(true));
            let mut listeners = Vec::new();

            let pair = primary
                .cast::<HtmlVideoElement>()
                .zip(secondary.cast::<HtmlVideoElement>())
                .map(|(primary, secondary)| VideoPair { primary, secondary });

            if let Some(pair) = pair {
                pair.primary.set_muted(true);
                pair.secondary.set_muted(true);
                let driver = CrossfadeDriver {
                    pair: Rc::new(pair),
                    scheduler: Rc::new(RefCell::new(CrossfadeScheduler::default())),
                    alive: alive.clone(),
                };

                for slot in [VideoSlot::Primary, VideoSlot::Secondary] {
                    let video = driver.pair.get(slot).clone();
                    {
                        let driver = driver.clone();
                        listeners.push(EventListener::new(&video, "timeupdate", move |_| {
                            driver.on_time_update(slot);
                        }));
                    }
                    {
                        let driver = driver.clone();
                        listeners.push(EventListener::new(&video, "loadeddata", move |_| {
                            let foreground = driver.scheduler.borrow().foreground();
                            driver.pair.on_loaded(slot, foreground);
                        }));
                    }
                }

                if driver.pair.primary.ready_state() >= HAVE_FUTURE_DATA {
                    media::play(&driver.pair.primary, "hero video 1");
                }
            } else {
                log::warn!("hero videos not mounted, crossfade disabled");
            }

            move || {
                alive.set(false);
                drop(listeners);
            }
        },
        (primary, secondary),
    );
}

#[derive(Properties, PartialEq)]
pub struct HeroVideoProps {
    pub section_ref: NodeRef,
    pub overlay_ref: NodeRef,
}

#[function_component(HeroVideo)]
pub fn hero_video(props: &HeroVideoProps) -> Html {
    let primary = use_node_ref();
    let secondary = use_node_ref();
    use_video_crossfade(primary.clone(), secondary.clone());

    html! {
        <section id="home" class="hero" ref={props.section_ref.clone()}>
            <div class="hero-video">
                <video
                    ref={primary}
                    autoplay=true
                    muted=true
                    playsinline=true
                    preload="auto"
                    class="background-video video-1"
                    poster={content::HERO_POSTER}
                >
                    <source src={content::HERO_VIDEO} type="video/mp4" />
                </video>
                <video
                    ref={secondary}
                    muted=true
                    playsinline=true
                    preload="auto"
                    class="background-video video-2"
                    poster={content::HERO_POSTER}
                >
                    <source src={content::HERO_VIDEO} type="video/mp4" />
                </video>
                <div class="background-image-fallback"></div>
            </div>
            <div class="video-overlay" ref={props.overlay_ref.clone()}></div>
            <div class="hero-content">
                <h2 class="hero-text-above">{"Navigating the world of"}</h2>
                <h1 class="hero-main-word">{"Investments"}</h1>
                <h2 class="hero-text-below">{"with Tailored Strategies"}</h2>
                <div class="hero-buttons">
                    <button class="cta-button single">{"Schedule a Call"}</button>
                </div>
            </div>
        </section>
    }
}
