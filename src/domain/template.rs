use chrono::Locale;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    /// Locale used to render month names in log lines.
    pub fn locale(self) -> Locale {
        match self {
            Language::English => Locale::en_US,
            Language::Italian => Locale::it_IT,
        }
    }
}

const ENGLISH_SUBJECT: &str = "Feedback Request from eBay Seller BeppeMokikaShop";
const ENGLISH_BODY: &str = "Hello, I noticed that you haven't left feedback for your recent purchase. \
We value your feedback and would appreciate it if you could share your experience with us. \
If you have any questions or concerns, please feel free to reach out to us. Thank you, BMS!";
const ENGLISH_NOTICE: &str = "This is an automated message, please ignore it if you have already left feedback.";

const ITALIAN_SUBJECT: &str = "Richiesta di Feedback da parte del Venditore eBay BeppeMokikaShop";
const ITALIAN_BODY: &str = "Ciao, ho notato che non hai ancora lasciato un feedback per il tuo acquisto recente. \
Valutiamo molto il tuo feedback e saremmo grati se volessi condividere la tua esperienza con noi. \
Se hai domande o dubbi, non esitare a contattarci. Grazie, BMS!";
const ITALIAN_NOTICE: &str = "Questo è un messaggio automatico, ignoralo se hai già lasciato un feedback.";

/// Subject and body of the reminder sent to buyers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub subject: String,
    pub body: String,
}

impl MessageTemplate {
    pub fn for_language(language: Language, automated_notice: bool) -> Self {
        let (subject, body, notice) = match language {
            Language::English => (ENGLISH_SUBJECT, ENGLISH_BODY, ENGLISH_NOTICE),
            Language::Italian => (ITALIAN_SUBJECT, ITALIAN_BODY, ITALIAN_NOTICE),
        };

        let body = if automated_notice {
            format!("{} {}", body, notice)
        } else {
            body.to_string()
        };

        Self {
            subject: subject.to_string(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_template() {
        let template = MessageTemplate::for_language(Language::English, false);
        assert_eq!(template.subject, ENGLISH_SUBJECT);
        assert!(template.body.starts_with("Hello, I noticed"));
        assert!(template.body.ends_with("Thank you, BMS!"));
    }

    #[test]
    fn test_italian_template_with_notice() {
        let template = MessageTemplate::for_language(Language::Italian, true);
        assert_eq!(template.subject, ITALIAN_SUBJECT);
        assert!(template.body.starts_with("Ciao,"));
        assert!(template.body.ends_with(ITALIAN_NOTICE));
    }

    #[test]
    fn test_notice_only_added_on_request() {
        let plain = MessageTemplate::for_language(Language::English, false);
        let noticed = MessageTemplate::for_language(Language::English, true);
        assert!(!plain.body.contains("automated"));
        assert!(noticed.body.contains("automated"));
        assert_eq!(plain.subject, noticed.subject);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::Italian.locale(), Locale::it_IT);
    }
}
