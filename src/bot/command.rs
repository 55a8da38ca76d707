/// A parsed chat command.
///
/// Mirrors the bot's command surface one-to-one: every variant except the
/// conversational ones maps to a single engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Genres,
    /// Two-step: without an argument the bot lists the genres to pick from
    Recommend(Option<String>),
    Popular,
    Random,
    Unknown(String),
}

impl Command {
    /// Parses raw chat input. The leading slash is optional and the command
    /// word is case-insensitive; anything after `recommend` is the genre.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let stripped = input.strip_prefix('/').unwrap_or(input);

        let mut words = stripped.split_whitespace();
        let word = words.next().unwrap_or_default().to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        match word.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "genres" => Command::Genres,
            "recommend" => {
                if rest.is_empty() {
                    Command::Recommend(None)
                } else {
                    Command::Recommend(Some(rest))
                }
            }
            "popular" => Command::Popular,
            "random" => Command::Random,
            _ => Command::Unknown(input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/genres"), Command::Genres);
        assert_eq!(Command::parse("/popular"), Command::Popular);
        assert_eq!(Command::parse("/random"), Command::Random);
    }

    #[test]
    fn slash_is_optional_and_case_is_ignored() {
        assert_eq!(Command::parse("START"), Command::Start);
        assert_eq!(Command::parse("  Popular  "), Command::Popular);
    }

    #[test]
    fn recommend_without_genre_starts_the_two_step_flow() {
        assert_eq!(Command::parse("/recommend"), Command::Recommend(None));
    }

    #[test]
    fn recommend_keeps_the_genre_argument_verbatim() {
        assert_eq!(
            Command::parse("/recommend Sci-Fi"),
            Command::Recommend(Some("Sci-Fi".to_string()))
        );
        assert_eq!(
            Command::parse("recommend film noir"),
            Command::Recommend(Some("film noir".to_string()))
        );
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(
            Command::parse("what should I watch?"),
            Command::Unknown("what should I watch?".to_string())
        );
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }
}
