//! Copy shown on the landing page. None of it is backed by live data.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "How it Works", href: "#how-it-works" },
    NavLink { label: "Reviews", href: "#testimonials" },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📍",
        title: "Real-Time GPS",
        description: "Watch your bus move on the map in real-time. No more ghost buses or phantom delays.",
    },
    Feature {
        icon: "⏰",
        title: "Accurate ETAs",
        description: "AI-powered prediction algorithms provide arrival times you can actually trust.",
    },
    Feature {
        icon: "🔔",
        title: "Smart Alerts",
        description: "Get notified when your bus is 5 minutes away so you never have to run for it.",
    },
    Feature {
        icon: "🧭",
        title: "Trip Planner",
        description: "Find the fastest route combining bus, subway, and walking directions seamlessly.",
    },
];

pub const STATS: [Stat; 3] = [
    Stat { value: "2M+", label: "Daily Active Users" },
    Stat { value: "12k+", label: "Buses Tracked" },
    Stat { value: "98%", label: "Accuracy Rate" },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Select your route",
        description: "Choose from nearby stops or search for a specific bus line.",
    },
    Step {
        number: "02",
        title: "Watch it move",
        description: "See exactly where your bus is on the map in real-time.",
    },
    Step {
        number: "03",
        title: "Get on board",
        description: "Receive an alert 2 minutes before arrival. Walk to the stop. Ride.",
    },
];

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Product",
        links: &["Download", "Features", "Cities", "Integrations"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Privacy Policy", "Contact"],
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Twitter", "Instagram", "LinkedIn"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn nav_links_are_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }
}
