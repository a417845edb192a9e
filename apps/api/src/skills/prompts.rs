// Skill extraction prompt. `{resume_text}` is replaced with the extracted document text.

pub const SKILL_EXTRACTION_PROMPT: &str = r#"
You are an expert resume parser for entry-level candidates (freshers).
Analyze the following resume text and extract all relevant technical skills, programming languages, frameworks, tools, and important soft skills.
Focus exclusively on skills. Do NOT include personal details, education history, work experience descriptions, project details, or any other non-skill information.
Provide the output as a JSON array of strings, where each string is a unique skill.
Ensure skills are concise and directly identifiable.

Resume Text:
---
{resume_text}
---

Example Expected Output Format:
["Python", "Java", "React.js", "SQL", "Git", "Problem Solving", "Teamwork", "Communication"]
"#;

pub fn build_skill_prompt(resume_text: &str) -> String {
    SKILL_EXTRACTION_PROMPT.replace("{resume_text}", resume_text)
}
