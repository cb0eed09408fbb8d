use wordcount_core::Answer;

/// Formats an answer for stdout: `word: count` lines, or pretty JSON.
pub fn render(answer: &Answer, json: bool) -> serde_json::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(answer)?;
        out.push('\n');
        return Ok(out);
    }
    let out = match answer {
        Answer::Frequency(count) => format!("{count}\n"),
        Answer::Words(words) => words
            .iter()
            .map(|(word, count)| format!("{word}: {count}\n"))
            .collect(),
    };
    Ok(out)
}
