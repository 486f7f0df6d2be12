// All LLM prompt constants for the chat API.
// The RTCF rubric (Role / Task / Context / Format) lives entirely in these
// instructions — the provider does the actual grading.

use serde_json::Value;

/// System prompt for one-shot completions.
pub const ONESHOT_SYSTEM: &str =
    "You are a helpful assistant inside a prompt-writing classroom. \
    Answer the learner's prompt directly and concisely.";

/// System prompt for ideal-prompt generation — plain text output.
pub const IDEAL_PROMPT_SYSTEM: &str =
    "You are an expert instructional designer who writes exemplary LLM prompts \
    following the RTCF framework: Role, Task, Context, Format. \
    Respond with the prompt text only. \
    Do NOT include headings, commentary, or markdown code fences.";

/// Ideal-prompt template. Replace `{learning_objective}` and `{settings_json}`.
pub const IDEAL_PROMPT_TEMPLATE: &str = r#"Write one model prompt that a student could give an LLM to fully achieve this learning objective.

LEARNING OBJECTIVE:
{learning_objective}

CLASSROOM SETTINGS (adjust tone, depth, and examples accordingly):
{settings_json}

The prompt must demonstrate all four RTCF elements:
- Role: who the LLM should act as
- Task: exactly what it should do
- Context: the learner background and constraints that matter
- Format: the shape the answer must take

Return ONLY the prompt text."#;

/// System prompt for rubric evaluation — enforces JSON-only output.
pub const EVALUATION_SYSTEM: &str =
    "You are a strict but encouraging prompt-engineering instructor grading \
    student prompts against the RTCF rubric. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the JSON fields.";

/// Evaluation template.
/// Replace: {current_prompt}, {learning_objective}, {settings_json}, {previous_block}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the student's prompt against the learning objective using the RTCF rubric.

LEARNING OBJECTIVE:
{learning_objective}

STUDENT PROMPT:
{current_prompt}

CLASSROOM SETTINGS (grade with these in mind):
{settings_json}

{previous_block}

Score each RTCF dimension from 0 to 25:
- role: does the prompt assign the LLM a fitting role?
- task: is the task specific and aligned with the objective?
- context: does it supply the background the LLM needs?
- format: does it pin down the shape of the answer?

Return a JSON object with this EXACT schema (no extra fields):
{
  "scores": {"role": 0, "task": 0, "context": 0, "format": 0},
  "totalScore": 0,
  "feedback": {
    "role": "one or two sentences",
    "task": "one or two sentences",
    "context": "one or two sentences",
    "format": "one or two sentences"
  },
  "improvements": ["concrete next step", "concrete next step"],
  "overallComment": "two or three sentences, encouraging and specific"
}

totalScore must equal the sum of the four dimension scores.
If a previous attempt is shown, mention in overallComment what improved or regressed since it."#;

/// Renders the ideal-prompt template.
pub fn build_ideal_prompt(learning_objective: &str, settings: &Value) -> String {
    IDEAL_PROMPT_TEMPLATE
        .replace("{learning_objective}", learning_objective)
        .replace("{settings_json}", &settings_json(settings))
}

/// Renders the evaluation template.
pub fn build_evaluation_prompt(
    current_prompt: &str,
    learning_objective: &str,
    settings: &Value,
    previous_prompt: Option<&str>,
) -> String {
    let previous_block = match previous_prompt {
        Some(p) if !p.trim().is_empty() => {
            format!("PREVIOUS ATTEMPT (compare and note the delta):\n{p}")
        }
        _ => "PREVIOUS ATTEMPT: none — this is the learner's first attempt.".to_string(),
    };

    EVALUATION_PROMPT_TEMPLATE
        .replace("{current_prompt}", current_prompt)
        .replace("{learning_objective}", learning_objective)
        .replace("{settings_json}", &settings_json(settings))
        .replace("{previous_block}", &previous_block)
}

fn settings_json(settings: &Value) -> String {
    serde_json::to_string_pretty(settings).unwrap_or_else(|_| "{}".to_string())
}
