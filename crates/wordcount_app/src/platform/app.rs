use std::io::{self, Read};

use anyhow::{bail, Context};
use clap::Parser;
use wordcount_core::{Answer, WordCounter};
use wordcount_logging::{level_for_verbosity, wc_debug, wc_error, wc_info, wc_warn};

use super::cli::{Args, Command};
use super::logging::{self, LogDestination};
use super::render::render;
use super::request_file::load_request;

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::initialize(
        LogDestination::from_log_file(args.log_file.as_deref()),
        level_for_verbosity(args.verbose),
    );

    let answer = answer(&args, read_stdin).inspect_err(|err| wc_error!("{err:#}"))?;

    let out = render(&answer, args.json).context("failed to render answer")?;
    print!("{out}");
    Ok(())
}

/// Picks the query source from `args`. `stdin` is only read when a subcommand
/// runs without `--text`.
fn answer(
    args: &Args,
    stdin: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<Answer> {
    match (&args.request, &args.command) {
        (Some(_), Some(_)) => bail!("--request cannot be combined with a subcommand"),
        (Some(path), None) => Ok(load_request(path)?.run()?),
        (None, Some(command)) => {
            let text = match &args.text {
                Some(text) => text.clone(),
                None => stdin()?,
            };
            answer_command(text, command)
        }
        (None, None) => bail!("no query given; pass a subcommand or --request <FILE>"),
    }
}

fn answer_command(text: String, command: &Command) -> anyhow::Result<Answer> {
    let counter = WordCounter::new(text)?;
    wc_info!("Counting words in {:?}", counter.to_string());
    if counter.word_counts().is_empty() {
        wc_warn!("No words found in {:?}", counter.to_string());
    }
    let answer = command.to_query().run(&counter)?;
    wc_debug!("{command:?} -> {answer:?}");
    Ok(answer)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read text from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wordcount_core::WordCountError;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn no_stdin() -> anyhow::Result<String> {
        panic!("stdin must not be read")
    }

    #[test]
    fn request_with_subcommand_is_rejected() {
        let args = parse(&["wordcount", "-r", "req.json", "highest"]);
        let err = answer(&args, no_stdin).unwrap_err();
        assert!(err.to_string().contains("--request"), "{err:#}");
    }

    #[test]
    fn missing_query_is_rejected() {
        let args = parse(&["wordcount", "-t", "a b"]);
        let err = answer(&args, no_stdin).unwrap_err();
        assert!(err.to_string().starts_with("no query given"), "{err:#}");
    }

    #[test]
    fn empty_text_reports_the_counter_error() {
        let args = parse(&["wordcount", "--text", "", "highest"]);
        let err = answer(&args, no_stdin).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WordCountError>(),
            Some(&WordCountError::EmptyString)
        );
    }

    #[test]
    fn text_comes_from_stdin_when_not_given() {
        let args = parse(&["wordcount", "top", "2"]);
        let answer = answer(&args, || Ok("b a b c\n".to_string())).unwrap();
        assert_eq!(answer, Answer::Words(vec![("b".into(), 2), ("a".into(), 1)]));
    }

    #[test]
    fn negative_top_is_a_value_error() {
        let args = parse(&["wordcount", "-t", "The sun", "top", "-1"]);
        let err = answer(&args, no_stdin).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WordCountError>(),
            Some(&WordCountError::NonPositiveCount)
        );
    }

    #[test]
    fn frequency_subcommand_ignores_case() {
        let args = parse(&[
            "wordcount",
            "-t",
            "The sun shines over the lake",
            "frequency",
            "THE",
        ]);
        assert_eq!(answer(&args, no_stdin).unwrap(), Answer::Frequency(2));
    }

    #[test]
    fn text_without_words_answers_with_an_empty_list() {
        let args = parse(&["wordcount", "-t", "123 456", "highest"]);
        assert_eq!(answer(&args, no_stdin).unwrap(), Answer::Words(Vec::new()));
    }
}
