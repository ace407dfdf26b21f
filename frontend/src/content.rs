//! Copy and asset paths for the landing page.

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Events", href: "#events" },
    NavLink { label: "Teams", href: "#teams" },
    NavLink { label: "About Us", href: "#about" },
];

pub const LOGO: &str = "/logo.svg";
pub const HERO_VIDEO: &str = "/hero_vid.mp4";
pub const HERO_POSTER: &str = "/mountain-poster.jpg";

#[derive(Debug, PartialEq)]
pub struct Expert {
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub video: &'static str,
}

pub static EXPERTS: [Expert; 5] = [
    Expert {
        name: "Aashish Sommaiyaa",
        title: "ED & CEO, Whiteosk capital management",
        quote: "\"Equity is always a no brainer.\"",
        video: "/expert1.mp4",
    },
    Expert {
        name: "Kalpen Parekh",
        title: "CEO & MD at DSP mutual funds",
        quote: "\"I feel blessed that I'm helping so many people build financial independence\"",
        video: "/expert2.mp4",
    },
    Expert {
        name: "Radhika Gupta",
        title: "MD & CEO, Edelweiss Asset Management",
        quote: "\"When you are 25, your greatest asset cannot be fanancial because you don't have wealth\"",
        video: "/expert3.mp4",
    },
    Expert {
        name: "Sanjay Choudhary",
        title: "Founder & CEO at Incuspaze",
        quote: "\"What is important is to keep going on....\"",
        video: "/expert4.mp4",
    },
    Expert {
        name: "Vijai Mantri",
        title: "Co-Founder & Chief Investment Strategist at JRL Money",
        quote: "\"Money has so much importance in your life but money should not drive one person\"",
        video: "/expert5.mp4",
    },
];

/// Poster stills, preloaded on mount.
pub const EXPERT_POSTERS: [&str; 5] = [
    "/expert1.jpg",
    "/expert2.jpg",
    "/expert3.jpg",
    "/expert4.jpg",
    "/expert5.jpg",
];

/// Track order: clone of the last card, the real cards, clone of the first.
pub fn carousel_slides() -> impl Iterator<Item = &'static Expert> {
    let last = EXPERTS.last();
    let first = EXPERTS.first();
    last.into_iter().chain(EXPERTS.iter()).chain(first)
}

pub struct MarketStat {
    pub icon_path: &'static str,
    pub text: &'static str,
}

pub const MARKET_STATS_HEADLINE: [&str; 2] = [
    "MORE THAN 50% MUTUAL FUND",
    "INVESTORS DON'T BEAT NIFTY50 RETURNS IN THE LONG RUN",
];

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat {
        icon_path: "M3,3H21V5H19V19A2,2 0 0,1 17,21H7A2,2 0 0,1 5,19V5H3V3M7,5V19H17V5H7M9,7H15V9H9V7M9,11H15V13H9V11M9,15H15V17H9V15Z",
        text: "Higher Exposure to Thematic Funds/High Allocation to Exciting Themes",
    },
    MarketStat {
        icon_path: "M16,6L18.29,8.29L13.41,13.17L9.41,9.17L2,16.59L3.41,18L9.41,12L13.41,16L19.71,9.71L22,12V6H16Z",
        text: "Risk Averse and Under-diversified",
    },
    MarketStat {
        icon_path: "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M16.2,16.2L11,13V7H12.5V12.2L17,14.9L16.2,16.2Z",
        text: "Focused on timing of investments and fund selection rather than asset allocation",
    },
    MarketStat {
        icon_path: "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M9.5,10.5C9.5,11.19 9.81,11.8 10.31,12.19L9.5,14C8.47,13.39 7.75,12.24 7.75,10.95C7.75,9.66 8.47,8.5 9.5,7.89V10.5M12,4.75C14.9,4.75 17.25,7.1 17.25,10C17.25,12.9 14.9,15.25 12,15.25C9.1,15.25 6.75,12.9 6.75,10C6.75,7.1 9.1,4.75 12,4.75Z",
        text: "Not having a reliable advisor, financial planner or mutual fund distributor with expertise",
    },
];

pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Personalized Strategies",
        body: "We plan investment strategies around your goals, risk appetite and timeline — no generic market trends, no pre-set models.",
    },
    Feature {
        title: "Backed by Institutional Grade Research",
        body: "Our team combines financial expertise with data-backed insights allowing you to make smarter and more confident decisions",
    },
    Feature {
        title: "Transparency & Trust at Every Step",
        body: "No hidden agendas or complicated jargon. Just honest advice, full visibility, and a partnership built on trust.",
    },
];

pub const BACKDROP_IMAGE: &str = "/backdrop1.png";

pub struct Figure {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BACKDROP_FIGURES: [Figure; 3] = [
    Figure { value: "500 +", label: "Clients" },
    Figure { value: "200CR +", label: "Assets Managed" },
    Figure { value: "2CR +", label: "Live SIP" },
];

pub const APPROACH_TITLE: &str = "Our Distinctive Approach to Wealth Creation";

pub struct ProcessStep {
    pub number: &'static str,
    pub icon_path: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        icon_path: "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M11,16.5L6.5,12L7.91,10.59L11,13.67L16.59,8.09L18,9.5L11,16.5Z",
        title: "Defining the Objective",
        body: "We understand the entire picture and define a clear financial objective establishing the foundation of your investment strategy.",
    },
    ProcessStep {
        number: "02",
        icon_path: "M12,2L13.09,8.26L22,9L13.09,9.74L12,16L10.91,9.74L2,9L10.91,8.26L12,2M12,21L10.91,14.74L2,14L10.91,13.26L12,7L13.09,13.26L22,14L13.09,14.74L12,21Z",
        title: "Strategic Planning",
        body: "With institutional grade research, we plan a custom strategy integrating optimized asset allocation and intelligent diversification meant only for you.",
    },
    ProcessStep {
        number: "03",
        icon_path: "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4M12,6A6,6 0 0,0 6,12A6,6 0 0,0 12,18A6,6 0 0,0 18,12A6,6 0 0,0 12,6M12,8A4,4 0 0,1 16,12A4,4 0 0,1 12,16A4,4 0 0,1 8,12A4,4 0 0,1 12,8Z",
        title: "Implementing the Strategy",
        body: "Your customized strategy is deployed seamlessly using suitable instruments and platforms with precision, absolute clarity and efficiency.",
    },
    ProcessStep {
        number: "04",
        icon_path: "M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4M11,6V12.41L15.36,14.95L16.64,12.59L13,10.59V6H11Z",
        title: "Consistent Monitoring",
        body: "We consistently monitor your portfolio and make prompt adjustments to ensure your investments stay aligned, tax efficient and on track.",
    },
];

pub const FOUNDER_BACKGROUND: &str = "/founder_bg.jpeg";
pub const FOUNDER_PORTRAIT: &str = "/abhishek_prof.png";
pub const FOUNDER_NAME: &str = "Abhishek Mehta";
pub const FOUNDER_ROLE: &str = "Founder & Chief Strategist";
pub const FOUNDER_QUOTE: &str = "\"At Investza, our mission is simple — to make wealth creation less intimidating and more accessible. We're here to cut through the noise, offer real guidance, and help you build a financial future that's truly yours.\"";

pub struct Service {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICES_HEADLINE: &str = "How Investza can help you grow your portfolio";
pub const SERVICES_LEDE: &str = "Your financial journey doesn't just end with investing — it's supposed to evolve.";

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Wealth Creation",
        body: "From mutual funds to alternative investments, we identify high-potential opportunities to grow your portfolio meaningfully.",
    },
    Service {
        title: "Tax Planning",
        body: "Integrating tax planning in your investment journey — we ensure you save more, comply effortlessly, and grow your wealth in a smart manner.",
    },
    Service {
        title: "Wealth Protection",
        body: "We deploy risk-managed strategies and periodic reviews to shield your portfolio from market volatility and unexpected setbacks.",
    },
    Service {
        title: "Portfolio Management",
        body: "Professional portfolio management with continuous monitoring and rebalancing to optimize your investment returns over time.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember { name: "Abhishek Mehta", role: "Founder & Chief Strategist" },
    TeamMember { name: "Pooja Chandgothia", role: "Founder & CEO" },
    TeamMember { name: "Varun Vinayan", role: "Vice President" },
];

pub const QR_CODE: &str = "/qr-code.svg";
pub const GOOGLE_PLAY_ICON: &str = "/google_play_icon.svg";
pub const APP_STORE_ICON: &str = "/app_store_icon.svg";
