//! User-facing texts
//!
//! Everything the bot says that is not a question comes from here.

/// Fixed replies for one quiz subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub subject: String,
    pub welcome: String,
}

/// How well the user did, derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Mastery,
    Strong,
    Practicing,
    Review,
}

impl ScoreTier {
    /// Classify `correct` out of `total` using integer percentages
    pub fn classify(correct: usize, total: usize) -> Self {
        if total == 0 {
            return ScoreTier::Review;
        }

        let scaled = correct * 100;
        if correct >= total {
            ScoreTier::Mastery
        } else if scaled >= 80 * total {
            ScoreTier::Strong
        } else if scaled >= 60 * total {
            ScoreTier::Practicing
        } else {
            ScoreTier::Review
        }
    }
}

impl Messages {
    pub const NO_ANSWERS: &'static str = "You haven't answered any questions yet.";

    /// Default texts for a subject
    pub fn new(subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let welcome = format!(
            "Welcome to the {} quiz! Answer each question by replying with one of the listed options.",
            subject
        );
        Self { subject, welcome }
    }

    /// Replace the welcome text
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    /// Closing remark for a score tier
    pub fn remark(&self, tier: ScoreTier) -> String {
        match tier {
            ScoreTier::Mastery => format!("Excellent job! You've mastered {}!", self.subject),
            ScoreTier::Strong => format!("Great work! You have a strong understanding of {}.", self.subject),
            ScoreTier::Practicing => format!("Good effort! Keep practicing to improve your {} skills.", self.subject),
            ScoreTier::Review => format!("You might want to review {} concepts and try again.", self.subject),
        }
    }

    /// Full end-of-quiz summary
    pub fn summary(&self, correct: usize, total: usize, percentage: f64) -> String {
        format!(
            "Quiz completed!\nYou answered {} out of {} questions correctly.\nYour score: {:.2}%\n\n{}",
            correct,
            total,
            percentage,
            self.remark(ScoreTier::classify(correct, total))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::classify(5, 5), ScoreTier::Mastery);
        assert_eq!(ScoreTier::classify(4, 5), ScoreTier::Strong);
        assert_eq!(ScoreTier::classify(3, 5), ScoreTier::Practicing);
        assert_eq!(ScoreTier::classify(2, 5), ScoreTier::Review);
        assert_eq!(ScoreTier::classify(0, 1), ScoreTier::Review);
        assert_eq!(ScoreTier::classify(0, 0), ScoreTier::Review);
        // 79.99% must not round up into the strong tier
        assert_eq!(ScoreTier::classify(7999, 10000), ScoreTier::Practicing);
    }

    #[test]
    fn test_summary_layout() {
        let messages = Messages::new("Python");
        assert_eq!(
            messages.summary(2, 3, 200.0 / 3.0),
            "Quiz completed!\nYou answered 2 out of 3 questions correctly.\nYour score: 66.67%\n\n\
             Good effort! Keep practicing to improve your Python skills."
        );
    }

    #[test]
    fn test_custom_welcome() {
        let messages = Messages::new("Rust").with_welcome("Hi!");
        assert_eq!(messages.welcome, "Hi!");
        assert!(Messages::new("Rust").welcome.contains("Rust quiz"));
    }
}
