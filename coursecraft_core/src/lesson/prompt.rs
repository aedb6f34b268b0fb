use crate::lesson::types::TopicInfo;

pub fn build_lesson_prompt(info: &TopicInfo) -> String {
    format!(
        "Create an educational lesson about {topic} for {audience}.

Include the following:
1. A compelling title
2. A brief description (5-7 sentences)
3. 3-5 learning outcomes (starting with \"After this lesson, students will be able to...\")
4. Key concepts and terminology (5-7 terms with definitions)
5. Content for 5 distinct slides with teaching points (each slide should give a detailed explanation of about 500 words with a worked example)
6. 5 multiple choice questions with answers
7. A brief summary paragraph
8. A relevant YouTube video recommendation (just the topic, not an actual URL)

Format the response as a JSON object with these keys: title, description, learningOutcomes (array), keyConcepts (array of {{term, definition}}), slides (array of {{title, content}}), mcqs (array of {{question, options, correctAnswer}}), summary, videoTopic.",
        topic = info.topic,
        audience = info.audience,
    )
}

/// The span from the first `{` to the last `}` of a model answer.
///
/// Models tend to wrap JSON in prose or markdown fences; this strips both.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_topic_audience_and_keys() {
        let prompt = build_lesson_prompt(&TopicInfo::new("Photosynthesis", "8th graders"));
        assert!(prompt.starts_with("Create an educational lesson about Photosynthesis for 8th graders."));
        assert!(prompt.contains("keyConcepts (array of {term, definition})"));
        assert!(prompt.contains("videoTopic"));
    }

    #[test]
    fn extracts_fenced_json() {
        let answer = "Sure! Here it is:\n```json\n{\"title\": \"A\", \"slides\": [{\"title\": \"x\"}]}\n```";
        assert_eq!(
            extract_json_object(answer),
            Some("{\"title\": \"A\", \"slides\": [{\"title\": \"x\"}]}")
        );
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }
}
