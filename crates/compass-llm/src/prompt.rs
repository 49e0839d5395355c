//! Prompt construction for roadmap generation.

use compass_core::enums::Role;
use compass_core::request::RoadmapRequest;

/// Persona and output rules sent as the system message (chat backends) or
/// prepended to the prompt text (Gemini).
pub const SYSTEM_INSTRUCTION: &str = "You are an expert academic advisor and career coach. \
Generate detailed, practical learning roadmaps in JSON format. Always include realistic \
timelines, specific skills, and actual resource links (YouTube, Coursera, books, GitHub, etc.). \
Structure your response as pure JSON without any markdown formatting.";

const OUTPUT_FORMAT: &str = r#"IMPORTANT: Return ONLY a valid JSON object with this EXACT structure (no markdown, no code blocks):
{
  "title": "Roadmap Title",
  "phases": [
    {
      "milestone": "Phase Name",
      "duration": "X months",
      "skills": ["skill 1", "skill 2", "skill 3", "skill 4", "skill 5"],
      "resources": [
        {"type": "YouTube Course", "name": "Resource Name", "link": "https://..."},
        {"type": "Book", "name": "Book Name", "link": "https://..."}
      ]
    }
  ]
}"#;

const SIZING: &str = "Generate 4 phases with 5-7 skills each and 4-6 resources per phase. \
Include real, working URLs for resources.";

/// How the programme is described: `B.Tech <branch>` before university,
/// `course in <branch>` otherwise.
#[must_use]
pub fn subject(request: &RoadmapRequest) -> String {
    match request.role {
        Role::PreUniversity => format!("B.Tech {}", request.branch),
        Role::Undergraduate => format!("course in {}", request.branch),
    }
}

/// Render the user prompt for a request.
#[must_use]
pub fn build_prompt(request: &RoadmapRequest) -> String {
    let interests = if request.interests.is_empty() {
        String::from("none specified")
    } else {
        request.interests.join(", ")
    };

    format!(
        "Generate a detailed 4-year roadmap for a {subject} with focus on {focus}.\n\
         Interests: {interests}.\n\
         Include phases with milestones, skills to develop, and resources (YouTube links, courses, books).\n\
         \n\
         {OUTPUT_FORMAT}\n\
         \n\
         {SIZING}",
        subject = subject(request),
        focus = request.focus,
    )
}
