//! Deterministic template roadmap generator.
//!
//! Used whenever no provider is configured or the provider path fails. The
//! output is a pure function of (branch, interests, focus): four fixed
//! milestones with fixed duration bands, skills interpolated from the branch
//! and the first two interests, and search links built by URL-encoding them.

use compass_core::request::RoadmapRequest;
use compass_core::roadmap::{Phase, Resource, Roadmap};

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";
const COURSERA_SEARCH: &str = "https://www.coursera.org/search?query=";
const GITHUB_SEARCH: &str = "https://github.com/search?q=";
const UDACITY_SEARCH: &str = "https://www.udacity.com/search?query=";
const SCHOLAR_SEARCH: &str = "https://scholar.google.com/scholar?q=";

/// Link for resources without a canonical URL.
pub const PLACEHOLDER_LINK: &str = "#";

/// Milestone names, in phase order.
pub const MILESTONES: [&str; 4] = [
    "Foundation & Fundamentals",
    "Intermediate Development",
    "Advanced Specialization",
    "Professional Mastery",
];

/// Duration bands, in phase order.
pub const DURATIONS: [&str; 4] = ["3-6 months", "6-9 months", "9-18 months", "18-36 months"];

fn search(base: &str, query: &str) -> String {
    format!("{base}{}", urlencoding::encode(query))
}

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Template roadmap for a structured request.
#[must_use]
pub fn mock_roadmap_for(request: &RoadmapRequest) -> Roadmap {
    template(
        &request.branch,
        request.primary_interest(),
        request.secondary_interest(),
        &request.focus,
    )
}

/// Template roadmap for a branch, interest list, and focus.
#[must_use]
pub fn mock_roadmap(branch: &str, interests: &[String], focus: &str) -> Roadmap {
    template(
        branch,
        interests.first().map(String::as_str),
        interests.get(1).map(String::as_str),
        focus,
    )
}

fn template(branch: &str, first: Option<&str>, second: Option<&str>, focus: &str) -> Roadmap {
    Roadmap {
        title: format!("{branch} Learning Roadmap - {focus}"),
        phases: vec![
            foundation(branch, first),
            intermediate(branch, first),
            advanced(branch, second),
            mastery(),
        ],
    }
}

fn foundation(branch: &str, first: Option<&str>) -> Phase {
    Phase {
        milestone: MILESTONES[0].to_string(),
        duration: DURATIONS[0].to_string(),
        skills: vec![
            format!("Core {branch} Concepts and Terminology"),
            format!("Mathematical Foundations for {branch}"),
            "Basic Problem-Solving Techniques".to_string(),
            format!("Introduction to {}", first.unwrap_or("Key Tools")),
            "Understanding Industry Standards".to_string(),
        ],
        resources: vec![
            Resource::new(
                "YouTube Course",
                format!("{branch} Fundamentals - Complete Tutorial"),
                search(YOUTUBE_SEARCH, &format!("{branch} tutorial")),
            ),
            Resource::new(
                "Online Course",
                "Coursera/edX Foundation Course",
                search(COURSERA_SEARCH, branch),
            ),
            Resource::new(
                "Book",
                format!("Introduction to {branch} (Textbook)"),
                PLACEHOLDER_LINK,
            ),
            Resource::new(
                "Documentation",
                "Official Documentation & Guides",
                PLACEHOLDER_LINK,
            ),
            Resource::new(
                "Practice Platform",
                "Interactive Coding/Learning Platform",
                PLACEHOLDER_LINK,
            ),
        ],
    }
}

fn intermediate(branch: &str, first: Option<&str>) -> Phase {
    let topic = first.unwrap_or(branch);
    Phase {
        milestone: MILESTONES[1].to_string(),
        duration: DURATIONS[1].to_string(),
        skills: {
            let mut list = vec![format!("Advanced {} Concepts", first.unwrap_or("Core"))];
            list.extend(skills(&[
                "Practical Project Development",
                "Version Control and Collaboration (Git)",
                "Industry-Standard Tools and Frameworks",
                "Testing and Debugging Techniques",
                "Best Practices and Design Patterns",
            ]));
            list
        },
        resources: vec![
            Resource::new(
                "YouTube Playlist",
                format!("{topic} Advanced Tutorials"),
                search(YOUTUBE_SEARCH, &format!("{topic} advanced")),
            ),
            Resource::new(
                "Project Tutorial",
                "Build 3-5 Real-World Projects",
                PLACEHOLDER_LINK,
            ),
            Resource::new(
                "GitHub Repositories",
                "Study Open Source Projects",
                search(GITHUB_SEARCH, branch),
            ),
            Resource::new("Community", "Join Developer Communities", PLACEHOLDER_LINK),
            Resource::new(
                "Blog Series",
                "Technical Blogs and Case Studies",
                PLACEHOLDER_LINK,
            ),
        ],
    }
}

fn advanced(branch: &str, second: Option<&str>) -> Phase {
    Phase {
        milestone: MILESTONES[2].to_string(),
        duration: DURATIONS[2].to_string(),
        skills: {
            let mut list = vec![
                format!("Expert-Level {branch} Techniques"),
                format!("{} Specialization", second.unwrap_or("Advanced")),
            ];
            list.extend(skills(&[
                "System Architecture and Design",
                "Performance Optimization",
                "Security Best Practices",
                "Scalability and Reliability",
                "Research and Innovation",
            ]));
            list
        },
        resources: vec![
            Resource::new(
                "Advanced Course",
                "Specialization Nanodegree/Certificate",
                search(UDACITY_SEARCH, branch),
            ),
            Resource::new(
                "Research Papers",
                "Latest Academic Research",
                search(SCHOLAR_SEARCH, branch),
            ),
            Resource::new(
                "Conference Talks",
                "Industry Conference Videos",
                PLACEHOLDER_LINK,
            ),
            Resource::new(
                "Technical Documentation",
                "Advanced Framework Documentation",
                PLACEHOLDER_LINK,
            ),
            Resource::new("Mentorship", "Find Expert Mentors", PLACEHOLDER_LINK),
        ],
    }
}

fn mastery() -> Phase {
    Phase {
        milestone: MILESTONES[3].to_string(),
        duration: DURATIONS[3].to_string(),
        skills: skills(&[
            "Industry Leadership and Innovation",
            "Portfolio Development",
            "Open Source Contributions",
            "Technical Communication and Writing",
            "Interview Preparation",
            "Networking and Personal Branding",
            "Continuous Learning and Adaptation",
        ]),
        resources: vec![
            Resource::new(
                "Portfolio Platform",
                "Build Professional Portfolio",
                "https://github.com",
            ),
            Resource::new("LinkedIn", "Professional Networking", "https://linkedin.com"),
            Resource::new(
                "Interview Prep",
                "LeetCode/HackerRank Practice",
                "https://leetcode.com",
            ),
            Resource::new(
                "Blog Platform",
                "Start Technical Blogging",
                "https://dev.to",
            ),
            Resource::new(
                "Job Boards",
                "Apply for Positions/Internships",
                PLACEHOLDER_LINK,
            ),
            Resource::new(
                "Speaking",
                "Present at Meetups/Conferences",
                PLACEHOLDER_LINK,
            ),
        ],
    }
}
