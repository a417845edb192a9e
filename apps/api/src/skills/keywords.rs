//! Keyword skill matching: the fallback used when no model is configured or
//! the model call fails. Plain case-insensitive substring search, so short
//! terms match inside longer words ("Java" in "JavaScript", "app" in "application").

const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "Git",
    "HTML",
    "CSS",
    "TypeScript",
    "Angular",
    "Vue.js",
    "Express.js",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Docker",
    "AWS",
    "Azure",
    "Problem Solving",
    "Teamwork",
    "Communication",
    "Leadership",
    "Project Management",
    "Agile",
    "Scrum",
    "REST API",
    "GraphQL",
    "Machine Learning",
    "Data Analysis",
    "UI/UX Design",
];

/// Coarse categories inferred from broader trigger words.
const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Programming", &["programming", "coding"]),
    ("Database Management", &["database", "db"]),
    ("Web Development", &["web", "frontend", "backend"]),
    ("Mobile Development", &["mobile", "app"]),
];

const DEFAULT_SKILLS: &[&str] = &["General Programming", "Problem Solving"];

/// Vocabulary hits in vocabulary order, then category hits in category order.
/// Never empty.
pub fn extract_skills_by_keyword(text: &str) -> Vec<String> {
    let lower_text = text.to_lowercase();

    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower_text.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    for (category, triggers) in SKILL_CATEGORIES {
        if triggers.iter().any(|t| lower_text.contains(t)) {
            skills.push(category.to_string());
        }
    }

    if skills.is_empty() {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_vocabulary_hits_returns_default_pair() {
        let skills = extract_skills_by_keyword("Enjoys hiking and cooking.");
        assert_eq!(skills, vec!["General Programming", "Problem Solving"]);
    }

    #[test]
    fn test_empty_text_returns_default_pair() {
        assert_eq!(
            extract_skills_by_keyword(""),
            vec!["General Programming", "Problem Solving"]
        );
    }

    #[test]
    fn test_case_insensitive_and_vocabulary_order() {
        let skills = extract_skills_by_keyword("Worked with DOCKER, python and git daily.");
        assert_eq!(skills, vec!["Python", "Git", "Docker"]);
    }

    #[test]
    fn test_substring_matches_are_kept() {
        let skills = extract_skills_by_keyword("javascript");
        assert_eq!(skills, vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_categories_follow_vocabulary_hits() {
        let skills = extract_skills_by_keyword(
            "Built a mobile app with a PostgreSQL database; enjoy coding for the web.",
        );
        assert_eq!(
            skills,
            vec![
                "SQL",
                "PostgreSQL",
                "Programming",
                "Database Management",
                "Web Development",
                "Mobile Development",
            ]
        );
    }

    #[test]
    fn test_category_alone_is_enough_to_skip_default() {
        let skills = extract_skills_by_keyword("Backend engineer");
        assert_eq!(skills, vec!["Web Development"]);
    }

    #[test]
    fn test_sample_resume() {
        let resume = "SKILLS: JavaScript, React.js, Node.js, Python, SQL, Git, HTML/CSS, \
                      TypeScript, Express.js, MongoDB. SOFT SKILLS: Problem Solving, Teamwork, \
                      Communication, Leadership, Project Management";
        let skills = extract_skills_by_keyword(resume);
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Project Management".to_string()));
        assert!(!skills.contains(&"General Programming".to_string()));
    }
}
