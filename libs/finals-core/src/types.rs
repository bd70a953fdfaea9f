//! Record types written to the quiz data files.

use serde::{Serialize, Serializer};

/// Second choice offered by a choice record built from a sentence with no spans.
pub const CHOICE_FALLBACK: &str = "Error in data generation";

/// Question category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FinalsRange,
}

impl Default for Category {
    fn default() -> Self {
        Self::FinalsRange
    }
}

/// Question difficulty tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

/// Value of the `type` key, written right after `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Verb,
    Choice,
    Reorder,
}

/// Conjugation entry for one verb.
///
/// `past` and `past_participle` keep slash-separated alternatives
/// (`forgot/forgotten`) verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub(crate) kind: QuestionKind,
    pub base: String,
    pub past: String,
    pub past_participle: String,
    pub meaning: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl VerbRecord {
    /// Create a record, deriving the id from the base form.
    pub fn new(base: &str, past: &str, past_participle: &str, meaning: &str) -> Self {
        Self {
            id: Self::id_for(base),
            kind: QuestionKind::Verb,
            base: base.to_string(),
            past: past.to_string(),
            past_participle: past_participle.to_string(),
            meaning: meaning.to_string(),
            category: Category::default(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn id_for(base: &str) -> String {
        format!("verb_finals_{}", base)
    }
}

/// One span removed from a sentence, paired with its placeholder index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blank {
    pub index: usize,
    pub text: String,
}

/// Sentence with every span replaced by a `__k__` placeholder.
///
/// Blanks can only be added through [`SentenceTemplate::push_blank`], which
/// writes placeholder `k` and records blank `k` together. The byte offset of
/// each written placeholder is kept, so filling never searches the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentenceTemplate {
    #[serde(rename = "template")]
    text: String,
    #[serde(serialize_with = "serialize_blank_texts")]
    blanks: Vec<Blank>,
    #[serde(skip)]
    offsets: Vec<usize>,
}

impl SentenceTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder token for blank `index`.
    pub fn placeholder(index: usize) -> String {
        format!("__{}__", index)
    }

    /// Append text that stays visible in the exercise.
    ///
    /// The text is not escaped: a literal that already looks like `__k__`
    /// shows up in [`text`](Self::text) next to the real placeholder.
    /// [`fill`](Self::fill) still only replaces placeholders written by
    /// [`push_blank`](Self::push_blank).
    pub fn push_literal(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append the next blank and its placeholder.
    pub fn push_blank(&mut self, text: &str) {
        let index = self.blanks.len();
        self.offsets.push(self.text.len());
        self.text.push_str(&Self::placeholder(index));
        self.blanks.push(Blank {
            index,
            text: text.to_string(),
        });
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn blanks(&self) -> &[Blank] {
        &self.blanks
    }

    pub fn is_empty(&self) -> bool {
        self.blanks.is_empty()
    }

    /// Substitute `answers[k]` for placeholder `k`.
    ///
    /// Placeholders without a matching answer are left in place.
    pub fn fill<S: AsRef<str>>(&self, answers: &[S]) -> String {
        let mut filled = String::with_capacity(self.text.len());
        let mut last_end = 0;

        for (blank, &offset) in self.blanks.iter().zip(&self.offsets) {
            let placeholder = Self::placeholder(blank.index);
            filled.push_str(&self.text[last_end..offset]);
            match answers.get(blank.index) {
                Some(answer) => filled.push_str(answer.as_ref()),
                None => filled.push_str(&placeholder),
            }
            last_end = offset + placeholder.len();
        }

        filled.push_str(&self.text[last_end..]);
        filled
    }

    /// The sentence with every blank filled by its own text.
    pub fn solution(&self) -> String {
        let answers: Vec<&str> = self.blanks.iter().map(|b| b.text.as_str()).collect();
        self.fill(&answers)
    }
}

fn serialize_blank_texts<S: Serializer>(blanks: &[Blank], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(blanks.iter().map(|b| b.text.as_str()))
}

/// Fallback question for a sentence that has no spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub(crate) kind: QuestionKind,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl ChoiceQuestion {
    // The second choice is a placeholder, not a distractor.
    pub fn new(number: usize, english: &str, prompt: &str) -> Self {
        Self {
            id: format!("choice_finals_{:03}", number),
            kind: QuestionKind::Choice,
            prompt: prompt.to_string(),
            choices: vec![english.to_string(), CHOICE_FALLBACK.to_string()],
            answer: english.to_string(),
            category: Category::default(),
            difficulty: Difficulty::default(),
        }
    }
}

/// Fill-in-the-blank question built from a sentence's spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub(crate) kind: QuestionKind,
    pub prompt: String,
    #[serde(flatten)]
    pub template: SentenceTemplate,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl ReorderQuestion {
    pub fn new(number: usize, prompt: &str, template: SentenceTemplate) -> Self {
        Self {
            id: format!("reorder_finals_{:03}", number),
            kind: QuestionKind::Reorder,
            prompt: prompt.to_string(),
            template,
            category: Category::default(),
            difficulty: Difficulty::default(),
        }
    }
}

/// Sentence question. Each variant writes its own `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SentenceRecord {
    Choice(ChoiceQuestion),
    Reorder(ReorderQuestion),
}

impl SentenceRecord {
    pub fn id(&self) -> &str {
        match self {
            Self::Choice(q) => &q.id,
            Self::Reorder(q) => &q.id,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Choice(q) => q.kind,
            Self::Reorder(q) => q.kind,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Choice(q) => &q.prompt,
            Self::Reorder(q) => &q.prompt,
        }
    }

    pub fn as_reorder(&self) -> Option<&ReorderQuestion> {
        match self {
            Self::Reorder(q) => Some(q),
            Self::Choice(_) => None,
        }
    }
}
