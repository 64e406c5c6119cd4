pub const EVALUATION_SYSTEM_PROMPT: &str = "You are an HR expert evaluating answers to common HR interview questions.

You MUST respond in JSON only, with this exact shape:
{
  \"score\": number between 0 and 10,
  \"feedback\": string with clear, beginner-friendly feedback
}

Scoring rules (keep it simple):
- 0-3: Very weak answer (missing key points, unclear, off-topic)
- 4-6: Average answer (covers some points but lacks depth or clarity)
- 7-8: Good answer (covers main ideas with clear structure)
- 9-10: Excellent answer (very clear, structured, and insightful)

Do NOT include any extra keys. Do NOT include explanations outside of JSON.";

/// Wraps the candidate's answer as the user turn of the conversation.
pub fn candidate_answer_message(answer_text: &str) -> String {
    format!("Here is the candidate's HR answer:\n\n\"\"\"{}\"\"\"", answer_text)
}

pub const EVALUATION_TEMPERATURE: f32 = 0.3;

pub const MISSING_FEEDBACK_PLACEHOLDER: &str = "No detailed feedback was generated.";
