//! Static sections of the landing page. The ones the scroll choreography
//! animates take the node refs it needs.

use yew::prelude::*;

use crate::content;

#[function_component(MarketStats)]
pub fn market_stats() -> Html {
    html! {
        <div class="statistics-section">
            <div class="stats-header">
                { for content::MARKET_STATS_HEADLINE.iter().map(|line| html! { <h2>{*line}</h2> }) }
            </div>

            <div class="stats-grid">
                { for content::MARKET_STATS.iter().map(|stat| html! {
                    <div class="stat-card">
                        <div class="stat-icon">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                                <path d={stat.icon_path} />
                            </svg>
                        </div>
                        <p>{stat.text}</p>
                    </div>
                }) }
            </div>

            <div class="stats-learn-section">
                <button class="learn-why-btn">
                    {"Learn Why"}
                    <div class="learn-arrow-circle">{"→"}</div>
                </button>
            </div>
        </div>
    }
}

#[function_component(WhyInvestza)]
pub fn why_investza() -> Html {
    html! {
        <section class="why-investza" id="about">
            <div class="container">
                <div class="why-investza-content">
                    <div class="why-investza-left">
                        <h2>{"Why INVESTZA?"}</h2>
                    </div>
                    <div class="why-investza-right">
                        <p class="why-subtitle">{"We don't believe in a one-size-fits-all."}</p>
                        <p class="why-description">{"We believe wealth management should be unique to you"}</p>
                    </div>
                </div>

                <div class="feature-cards-section">
                    <div class="feature-cards-grid">
                        { for content::FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub section_ref: NodeRef,
    pub image_ref: NodeRef,
    pub content_ref: NodeRef,
}

#[function_component(BackdropSection)]
pub fn backdrop_section(props: &BackdropProps) -> Html {
    html! {
        <section class="backdrop-section" ref={props.section_ref.clone()}>
            <div class="backdrop-container">
                <div class="backdrop-image" ref={props.image_ref.clone()}>
                    <img src={content::BACKDROP_IMAGE} alt="Backdrop" />
                </div>
                <div class="backdrop-content" ref={props.content_ref.clone()}>
                    <div class="backdrop-stats">
                        { for content::BACKDROP_FIGURES.iter().map(|figure| html! {
                            <div class="backdrop-stat-item">
                                <div class="backdrop-stat-number">{figure.value}</div>
                                <div class="backdrop-stat-label">{figure.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ApproachProps {
    pub section_ref: NodeRef,
    pub title_ref: NodeRef,
}

#[function_component(ApproachSection)]
pub fn approach_section(props: &ApproachProps) -> Html {
    html! {
        <section class="wealth-approach-section" ref={props.section_ref.clone()}>
            <div class="wealth-approach-content">
                <h2 class="wealth-approach-title" ref={props.title_ref.clone()}>
                    {content::APPROACH_TITLE}
                </h2>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessCardsProps {
    pub node_ref: NodeRef,
}

#[function_component(ProcessCards)]
pub fn process_cards(props: &ProcessCardsProps) -> Html {
    html! {
        <section class="process-cards-section" ref={props.node_ref.clone()}>
            <div class="container">
                <div class="process-cards-grid">
                    { for content::PROCESS_STEPS.iter().map(|step| html! {
                        <div class="process-card">
                            <div class="process-card-content">
                                <div class="process-number">{step.number}</div>
                                <div class="process-icon">
                                    <svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor">
                                        <path d={step.icon_path} />
                                    </svg>
                                </div>
                                <h3 class="process-title">{step.title}</h3>
                                <p class="process-description">{step.body}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FounderProps {
    pub section_ref: NodeRef,
    pub image_ref: NodeRef,
    pub content_ref: NodeRef,
}

#[function_component(FounderSection)]
pub fn founder_section(props: &FounderProps) -> Html {
    html! {
        <section class="founder-section" ref={props.section_ref.clone()}>
            <div class="founder-container">
                <div class="founder-image" ref={props.image_ref.clone()}>
                    <img src={content::FOUNDER_BACKGROUND} alt="Founder Background" />
                </div>
                <div class="founder-content" ref={props.content_ref.clone()}>
                    <div class="founder-text">
                        <blockquote class="founder-quote">{content::FOUNDER_QUOTE}</blockquote>
                    </div>
                    <div class="founder-profile">
                        <div class="founder-profile-image">
                            <img src={content::FOUNDER_PORTRAIT} alt={content::FOUNDER_NAME} />
                        </div>
                        <h3 class="founder-name">{content::FOUNDER_NAME}</h3>
                        <p class="founder-title">{content::FOUNDER_ROLE}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section class="lenis-cards-section" id="events">
            <div class="lenis-cards-container">
                <div class="lenis-layout">
                    <div class="lenis-left">
                        <h2>{content::SERVICES_HEADLINE}</h2>
                        <p>{content::SERVICES_LEDE}</p>
                    </div>

                    <div class="lenis-right">
                        <div class="lenis-cards-wrapper">
                            { for content::SERVICES.iter().enumerate().map(|(i, service)| html! {
                                <div class="lenis-card" data-card={(i + 1).to_string()}>
                                    <div class="card-content">
                                        <h3>{service.title}</h3>
                                        <p>{service.body}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section class="team-section" id="teams">
            <div class="container">
                <h2 class="team-title">{"WHO'S BEHIND INVESTZA"}</h2>

                <div class="team-grid">
                    { for content::TEAM.iter().map(|member| html! {
                        <div class="team-member">
                            <div class="member-image">{"Photo Coming Soon"}</div>
                            <div class="member-info">
                                <h3 class="member-name">{member.name}</h3>
                                <p class="member-role">{member.role}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="team-cta">
                    <button class="meet-team-btn">
                        {"Meet the Team"}
                        <div class="btn-arrow">{"→"}</div>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{"© 2024 Your Brand. All rights reserved."}</p>
            </div>
        </footer>
    }
}
