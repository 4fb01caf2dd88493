pub const OWNER_NAME: &str = "Montukeshwar";
pub const OWNER_INITIALS: &str = "MV";

pub struct Socials {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub youtube: &'static str,
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub resume: &'static str,
    pub phone: &'static str,
}

pub const SOCIALS: Socials = Socials {
    github: "https://github.com/Montukv-git",
    linkedin: "https://www.linkedin.com/",
    youtube: "https://youtube.com/",
    email: "mailto:Montukeshwar20@gmail.com?subject=Hi%20Montukeshwar!",
    whatsapp: "https://wa.me/918964879725",
    resume: "/resume.pdf",
    phone: "tel:+918964879725",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub href: &'static str,
    pub new_tab: bool,
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        label: "Email Montukeshwar",
        href: SOCIALS.email,
        new_tab: false,
    },
    QuickLink {
        label: "LinkedIn",
        href: SOCIALS.linkedin,
        new_tab: true,
    },
    QuickLink {
        label: "GitHub",
        href: SOCIALS.github,
        new_tab: true,
    },
    QuickLink {
        label: "YouTube",
        href: SOCIALS.youtube,
        new_tab: true,
    },
    QuickLink {
        label: "Go to Work",
        href: "#work",
        new_tab: false,
    },
    QuickLink {
        label: "Download Résumé",
        href: SOCIALS.resume,
        new_tab: false,
    },
];

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "experience",
        label: "Experience",
    },
    NavItem {
        id: "work",
        label: "Work",
    },
    NavItem {
        id: "services",
        label: "Services",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Task Automator",
        description: "A no-code automation tool that connects APIs and browser actions to build mini workflows.",
        image: "https://placehold.co/800x520/png",
        link: "https://example.com/project-automator",
        tags: &["TypeScript", "Next.js", "Puppeteer"],
    },
    Project {
        title: "Realtime Chat Ops",
        description: "A developer-first chat assistant that deploys, monitors, and rolls back services from chat.",
        image: "https://placehold.co/800x520/png",
        link: "https://example.com/project-chatops",
        tags: &["Go", "WebSockets", "Redis"],
    },
    Project {
        title: "Vision Label Studio",
        description: "An image annotation app with active-learning loops to speed up dataset creation.",
        image: "https://placehold.co/800x520/png",
        link: "https://example.com/vision-label-studio",
        tags: &["Python", "FastAPI", "PostgreSQL"],
    },
];

pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "MVP in 30 Days",
        blurb: "Design, build, and ship a polished MVP fast, from idea to deploy with analytics and docs.",
    },
    Service {
        title: "AI Integrations",
        blurb: "Embed LLMs into your product: RAG, agents, evaluation, and cost/perf tuning for production.",
    },
    Service {
        title: "Automation & Ops",
        blurb: "CI/CD, cloud infra, and internal tools to automate busywork and keep releases smooth.",
    },
];

pub struct Role {
    pub role: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        role: "Product-Focused Developer",
        period: "2022 — Present",
        points: &[
            "Prototype → validate → productionize modern web apps and AI tooling.",
            "Ship autonomously: design systems, own code quality, and measure outcomes.",
            "Work with startups & SMEs to replace manual tasks with reliable automations.",
        ],
    },
    Role {
        role: "Freelance Engineer",
        period: "2019 — 2022",
        points: &[
            "Built custom dashboards, e‑commerce features, and API backends.",
            "Improved performance and accessibility across multiple client apps.",
        ],
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript/TypeScript",
    "Next.js / React",
    "Node.js / FastAPI",
    "Postgres / Prisma",
    "Auth / RBAC",
    "Testing / CI/CD",
    "LLM / RAG / Agents",
    "System Design",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Montukeshwar delivered an MVP in 3 weeks that our team actually uses daily.",
        name: "Aarav S.",
        role: "Founder, Fintech",
    },
    Testimonial {
        quote: "Super responsive, pragmatic, and obsessed with DX and performance.",
        name: "Natasha K.",
        role: "CTO, HealthTech",
    },
    Testimonial {
        quote: "Automations saved us ~25 hours/week across ops. Huge impact.",
        name: "Rohan M.",
        role: "Ops Lead, D2C",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What’s your typical engagement model?",
        answer: "Project-based MVPs or monthly retainers with a weekly cadence and clear outcomes.",
    },
    Faq {
        question: "Do you work with existing codebases?",
        answer: "Yes. I enjoy refactors, performance work, and adding new features without breaking things.",
    },
    Faq {
        question: "How soon can you start?",
        answer: "Usually within 1–2 weeks. For rush projects, I can often create a scoped sprint.",
    },
];

pub const CLIENT_LOGOS: &[&str] = &["Acme", "Nimbus", "Orbit", "Pulse", "Vertex", "Northstar"];
