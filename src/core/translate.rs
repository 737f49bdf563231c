use crate::domain::model::{
    DateProperty, DateValue, ExternalPage, PageProperties, Parent, RichTextProperty, Submission,
    TitleProperty,
};

/// Maps a submission onto the journal database schema. Total: every
/// submission produces all nine properties.
pub fn build_page(submission: &Submission, database_id: &str) -> ExternalPage {
    ExternalPage {
        parent: Parent {
            database_id: database_id.to_string(),
        },
        properties: PageProperties {
            title: TitleProperty::new(format!("{}의 일기", submission.date)),
            date: DateProperty {
                date: DateValue {
                    start: submission.date.clone(),
                },
            },
            weather: RichTextProperty::new(submission.weather.as_str()),
            mood: RichTextProperty::new(submission.mood.as_str()),
            answer1: RichTextProperty::new(submission.answer(0)),
            answer2: RichTextProperty::new(submission.answer(1)),
            answer3: RichTextProperty::new(submission.answer(2)),
            answer4: RichTextProperty::new(submission.answer(3)),
            free_note: RichTextProperty::new(submission.free_note.as_str()),
        },
    }
}
