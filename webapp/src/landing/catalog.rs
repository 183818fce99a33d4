// static page content.  nothing here is fetched; prices and copy change by
// editing these tables

pub const PLAN_COUNT: usize = 3;

pub struct Plan {
    pub name: &'static str,
    pub short_name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub static PLANS: [Plan; PLAN_COUNT] = [
    Plan {
        name: "Basic Planner",
        short_name: "Basic",
        price: "$9.99/year",
        blurb: "Perfect for students who need essential planning features with clean, simple layouts for daily and weekly organization.",
        image_url: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        image_alt: "Basic digital planner interface with clean layout",
        features: &["Daily & Weekly Views", "Basic Templates", "Note-taking Pages"],
        popular: false,
    },
    Plan {
        name: "Pro Planner",
        short_name: "Pro",
        price: "$19.99/year",
        blurb: "Enhanced planning with goal tracking, habit monitoring, and customizable templates for serious students.",
        image_url: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        image_alt: "Pro digital planner with advanced features and goal tracking",
        features: &[
            "Everything in Basic",
            "Goal Tracking System",
            "Habit Tracker",
            "Cloud Sync",
        ],
        popular: true,
    },
    Plan {
        name: "Ultimate Planner",
        short_name: "Ultimate",
        price: "$29.99/year",
        blurb: "Complete academic management system with AI-powered insights, collaborative features, and premium support.",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        image_alt: "Ultimate planner with comprehensive features and analytics across devices",
        features: &[
            "Everything in Premium",
            "AI Study Insights",
            "Collaboration Tools",
            "Priority Support",
        ],
        popular: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Included,
    IncludedWith(&'static str),
    Excluded,
    Text(&'static str),
}

// one comparison row, cells ordered like PLANS
pub struct ComparisonRow {
    pub feature: &'static str,
    pub cells: [Cell; PLAN_COUNT],
}

pub static COMPARISON: [ComparisonRow; 5] = [
    ComparisonRow {
        feature: "Templates",
        cells: [
            Cell::IncludedWith("5 Basic"),
            Cell::IncludedWith("15 Premium"),
            Cell::IncludedWith("25+ All Access"),
        ],
    },
    ComparisonRow {
        feature: "Cloud Sync",
        cells: [Cell::Excluded, Cell::Included, Cell::Included],
    },
    ComparisonRow {
        feature: "Goal Tracking",
        cells: [Cell::Excluded, Cell::Included, Cell::Included],
    },
    ComparisonRow {
        feature: "Support",
        cells: [
            Cell::Text("Email"),
            Cell::Text("Email + Chat"),
            Cell::Text("Priority 24/7"),
        ],
    },
    ComparisonRow {
        feature: "AI Insights",
        cells: [Cell::Excluded, Cell::Excluded, Cell::Included],
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-palette",
        title: "Customizable Templates",
        description: "Personalize your planner with themes, colors, and layouts that match your study style and personality.",
    },
    Feature {
        icon: "fa-cloud",
        title: "Cloud Sync",
        description: "Access your planner from any device with automatic synchronization across all your platforms.",
    },
    Feature {
        icon: "fa-bullseye",
        title: "Goal Tracking",
        description: "Set academic goals, track progress, and celebrate achievements with visual progress indicators.",
    },
    Feature {
        icon: "fa-bell",
        title: "Smart Reminders",
        description: "Never miss an assignment or exam with intelligent notifications and deadline alerts.",
    },
    Feature {
        icon: "fa-mobile-alt",
        title: "Cross-Device Support",
        description: "Seamlessly switch between phone, tablet, and computer while maintaining perfect synchronization.",
    },
    Feature {
        icon: "fa-chart-line",
        title: "Progress Analytics",
        description: "Gain insights into your study habits with detailed analytics and productivity reports.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub stars: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Student Planner Pro completely transformed how I organize my studies. The goal tracking feature helped me improve my GPA by a full point!",
        name: "Sarah Chen",
        role: "Computer Science Major",
        stars: 5,
    },
    Testimonial {
        quote: "The cloud sync is a game-changer! I can plan on my laptop during lectures and check my schedule on my phone between classes. Absolutely love it!",
        name: "Marcus Johnson",
        role: "Business Administration",
        stars: 5,
    },
    Testimonial {
        quote: "As a medical student, organization is crucial. The templates are beautiful and the reminder system has saved me countless times. Worth every penny!",
        name: "Emily Rodriguez",
        role: "Pre-Med Student",
        stars: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn every_row_has_a_cell_per_plan() {
        for row in &COMPARISON {
            assert_eq!(row.cells.len(), PLANS.len(), "{}", row.feature);
        }
    }

    #[test]
    fn plans_get_more_expensive() {
        let prices: Vec<f64> = PLANS
            .iter()
            .map(|p| {
                p.price
                    .trim_start_matches('$')
                    .trim_end_matches("/year")
                    .parse()
                    .unwrap()
            })
            .collect();

        assert!(prices.windows(2).all(|w| w[0] < w[1]), "{prices:?}");
    }

    #[test]
    fn ultimate_includes_everything() {
        let last = PLANS.len() - 1;
        for row in &COMPARISON {
            assert_ne!(row.cells[last], Cell::Excluded, "{}", row.feature);
        }
    }

    #[test]
    fn testimonials_are_rated() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.stars)));
    }
}
