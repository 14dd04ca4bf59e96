//! Static site content: everything the page templates render.

use crate::chat::{ChatNode, ChatOption, ChatScript};

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
    pub bio: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub images: &'static [&'static str],
}

pub struct Competency {
    pub name: &'static str,
    pub level: u8,
}

pub struct LeetCodeStats {
    pub headline: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub profile_url: &'static str,
}

pub struct Contribution {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// One "at a glance" line of the recruiter summary.
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Abhinav Anand",
    headline: "iOS Developer & Open-Source Contributor",
    tagline: "Building the Future of Tech with Web3 and iOS Innovation",
    subtitle: "3rd yr B.Tech undergrad at NIT-Durgapur",
    bio: &[
        "iOS developer, open-source contributor, and blockchain enthusiast. \
         Passionate about building impactful products and solving real-world \
         problems with code.",
        "Skilled in Swift, SwiftUI, and Web3. Always learning, always shipping.",
    ],
    email: "iabhinavanandworks@gmail.com",
    github: "https://github.com/AbhinavAnand241201",
    linkedin: "https://www.linkedin.com/in/abhinav-anand-858a3a250/",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        title: "About",
        href: "#about",
    },
    NavLink {
        title: "Projects",
        href: "#projects",
    },
    NavLink {
        title: "LeetCode",
        href: "#leetcode",
    },
    NavLink {
        title: "Contributions",
        href: "#contributions",
    },
    NavLink {
        title: "Contact",
        href: "#contact",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "confession-x",
        title: "Confession-X iOS App",
        description: "A privacy-focused confession app built with Swift, featuring \
                      secure user authentication and real-time updates. The app \
                      prioritizes user privacy while maintaining a seamless social \
                      experience.",
        tags: &["Swift", "SwiftUI", "Firebase", "Privacy"],
        github: "https://github.com/AbhinavAnand241201/Confession-X-iOS",
        demo: "https://github.com/AbhinavAnand241201/Confession-X-iOS",
        images: &[
            "/static/img/confession-x-1.svg",
            "/static/img/confession-x-2.svg",
            "/static/img/confession-x-3.svg",
        ],
    },
    Project {
        slug: "resume-matcher",
        title: "AI-Powered Resume Matcher",
        description: "An intelligent resume analysis tool that uses AI to match \
                      resumes with job descriptions. Built with Python and modern \
                      web technologies, it helps job seekers optimize their resumes \
                      for better matches.",
        tags: &["Python", "AI", "Flask", "NLP"],
        github: "https://github.com/AbhinavAnand241201/AI-Powered-Resume-Keyword-Matcher",
        demo: "https://github.com/AbhinavAnand241201/AI-Powered-Resume-Keyword-Matcher",
        images: &[
            "/static/img/resume-matcher-1.svg",
            "/static/img/resume-matcher-2.svg",
            "/static/img/resume-matcher-3.svg",
        ],
    },
    Project {
        slug: "threads-clone",
        title: "Threads iOS Clone",
        description: "A feature-rich iOS app clone of Threads, built with Swift and \
                      modern iOS development practices. Implements core social media \
                      features with a focus on performance and user experience.",
        tags: &["Swift", "SwiftUI", "Firebase", "Social Media"],
        github: "https://github.com/AbhinavAnand241201/threads-iOS-app",
        demo: "https://github.com/AbhinavAnand241201/threads-iOS-app",
        images: &[
            "/static/img/threads-clone-1.svg",
            "/static/img/threads-clone-2.svg",
            "/static/img/threads-clone-3.svg",
        ],
    },
];

pub const COMPETENCIES: &[Competency] = &[
    Competency {
        name: "DSA",
        level: 90,
    },
    Competency {
        name: "Swift UI",
        level: 95,
    },
    Competency {
        name: "GraphQL",
        level: 85,
    },
    Competency {
        name: "Java",
        level: 90,
    },
    Competency {
        name: "TypeScript",
        level: 85,
    },
    Competency {
        name: "Golang",
        level: 80,
    },
];

pub const LEETCODE: LeetCodeStats = LeetCodeStats {
    headline: "700+ Problems Solved",
    easy: "240+",
    medium: "380+",
    hard: "80+",
    profile_url: "https://leetcode.com",
};

pub const CONTRIBUTIONS: &[Contribution] = &[
    Contribution {
        name: "Bitcoin-Core",
        description: "Transaction batching work focused on optimizing transaction \
                      mechanisms.",
        url: "https://github.com/AbhinavAnand241201",
    },
    Contribution {
        name: "LND",
        description: "Contributions to the Lightning Network daemon and related \
                      Bitcoin tooling.",
        url: "https://github.com/AbhinavAnand241201",
    },
    Contribution {
        name: "Web3 Authentication Libraries",
        description: "Authentication libraries for Web3 applications.",
        url: "https://github.com/AbhinavAnand241201",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "iOS App Developer",
        blurb: "Proficient in Swift, SwiftUI, and iOS development practices with \
                focus on blockchain applications.",
    },
    Highlight {
        title: "Problem Solver",
        blurb: "700+ LeetCode problems solved with expertise in algorithms and \
                data structures.",
    },
    Highlight {
        title: "Open-Source Contributor",
        blurb: "Active contributor to LND and Bitcoin-Core, focusing on optimizing \
                transaction mechanisms.",
    },
];

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1oqa77ikJkqzqgUEOvufLZ9PkQzhSJE9C/view";

const CHAT_NODES: &[ChatNode] = &[
    ChatNode {
        id: "greeting",
        text: "Hey! 👋 Are you hiring a talented iOS developer?",
        options: &[
            ChatOption {
                label: "Yes!",
                next: "hiring",
            },
            ChatOption {
                label: "No, just browsing",
                next: "browsing",
            },
        ],
        scroll_target: None,
    },
    ChatNode {
        id: "hiring",
        text: "Great! Let me show you my best work!",
        options: &[],
        scroll_target: Some("projects"),
    },
    ChatNode {
        id: "browsing",
        text: "No worries! Want to see my skills in action? I've solved 700+ \
               LeetCode problems and contributed to Bitcoin-Core!",
        options: &[
            ChatOption {
                label: "Show LeetCode",
                next: "leetcode",
            },
            ChatOption {
                label: "Show Contributions",
                next: "contributions",
            },
        ],
        scroll_target: None,
    },
    ChatNode {
        id: "leetcode",
        text: "Let's look at my LeetCode profile where I've solved over 700 problems!",
        options: &[],
        scroll_target: Some("leetcode"),
    },
    ChatNode {
        id: "contributions",
        text: "Check out my open-source contributions to Web3 and Bitcoin technologies!",
        options: &[],
        scroll_target: Some("contributions"),
    },
    ChatNode {
        id: "explore",
        text: "Feel free to explore my portfolio. Let me know if you have any questions!",
        options: &[],
        scroll_target: None,
    },
];

pub const CHAT_SCRIPT: ChatScript = ChatScript::new(CHAT_NODES, "greeting", "explore");
