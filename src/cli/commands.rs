//! Command implementations for the Sapling CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SaplingConfig;
use crate::error::Result;
use crate::lessons::disease::{self, DiseaseClassifier, DiseaseModel, UnknownSymptom};
use crate::lessons::{lemmatization, ner, reviews, sentiment, tokens, topics};
use crate::ml::symptom_table;

/// Execute a CLI command with an already loaded configuration.
pub fn execute_command(args: SaplingArgs, config: SaplingConfig) -> Result<()> {
    match &args.command {
        Command::Tree(tree_args) => predict_tree(tree_args.clone(), &args, &config),
        Command::Bayes(symptom_args) => {
            predict_disease(DiseaseModel::NaiveBayes, symptom_args.clone(), &args, &config)
        }
        Command::Ner(text_args) => run_ner(text_args.clone(), &args, &config),
        Command::Lemmatize(text_args) => run_lemmatize(text_args.clone(), &args),
        Command::Vader(vader_args) => run_vader(vader_args.clone(), &args, &config),
        Command::Reviews(reviews_args) => run_reviews(reviews_args.clone(), &args, config),
        Command::Tokens(top_args) => run_tokens(top_args.clone(), &args, config),
        Command::Topics(top_args) => run_topics(top_args.clone(), &args, config),
    }
}

/// Predict with a decision tree, optionally printing its rules first.
fn predict_tree(args: TreeArgs, cli_args: &SaplingArgs, config: &SaplingConfig) -> Result<()> {
    if args.show_tree {
        let classifier = DiseaseClassifier::fit(DiseaseModel::DecisionTree, &symptom_table(), config)?;
        if let Some(rules) = classifier.rules()? {
            diagnostic(cli_args, &rules)?;
        }
    }
    predict_disease(DiseaseModel::DecisionTree, args.symptoms, cli_args, config)
}

/// Ask for missing symptoms, predict, and report unknown symptoms without failing.
fn predict_disease(
    model: DiseaseModel,
    args: SymptomArgs,
    cli_args: &SaplingArgs,
    config: &SaplingConfig,
) -> Result<()> {
    let table = symptom_table();
    let options = disease::options(&table)?;
    let human = cli_args.output_format == OutputFormat::Human;

    if human {
        println!("\n--- INPUT FOR DISEASE PREDICTION ---");
        println!("{options}");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let symptom1 = match args.symptom1 {
        Some(symptom) => symptom,
        None => prompt(&mut input, "Enter Symptom 1 (e.g., Paralysis): ", human)?,
    };
    let symptom2 = match args.symptom2 {
        Some(symptom) => symptom,
        None => prompt(&mut input, "Enter Symptom 2 (e.g., Fever): ", human)?,
    };

    match disease::predict(model, &table, &symptom1, &symptom2, config) {
        Ok(prediction) => {
            if human {
                println!();
            }
            output_result("Prediction complete", &prediction, cli_args)
        }
        Err(e) if e.is_unknown_category() => {
            log::warn!("Unknown symptom: {symptom1:?}, {symptom2:?}");
            if human {
                println!();
            }
            output_result(
                "Prediction failed",
                &UnknownSymptom::new(model, &e, options),
                cli_args,
            )
        }
        Err(e) => Err(e),
    }
}

/// Print `message` and read one trimmed line. Prompts go to stderr for
/// non-human output formats.
fn prompt<R: BufRead>(input: &mut R, message: &str, human: bool) -> Result<String> {
    if human {
        print!("{message}");
        io::stdout().flush()?;
    } else {
        eprint!("{message}");
        io::stderr().flush()?;
    }
    read_trimmed_line(input)
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print supporting text to stdout for human output and to stderr otherwise.
fn diagnostic(cli_args: &SaplingArgs, text: &str) -> Result<()> {
    let mut out = diagnostic_sink(cli_args.output_format, io::stdout(), io::stderr());
    writeln!(out, "{text}")?;
    Ok(())
}

fn diagnostic_sink<'a, O, E>(format: OutputFormat, stdout: O, stderr: E) -> Box<dyn Write + 'a>
where
    O: Write + 'a,
    E: Write + 'a,
{
    match format {
        OutputFormat::Human => Box::new(stdout),
        OutputFormat::Json => Box::new(stderr),
    }
}

fn run_ner(args: TextArgs, cli_args: &SaplingArgs, config: &SaplingConfig) -> Result<()> {
    let text = args.text.as_deref().unwrap_or(ner::DEFAULT_TEXT);
    output_result("Named entities", &ner::run(text, config)?, cli_args)
}

fn run_lemmatize(args: TextArgs, cli_args: &SaplingArgs) -> Result<()> {
    let text = args.text.as_deref().unwrap_or(lemmatization::DEFAULT_TEXT);
    output_result("Lemmas", &lemmatization::run(text)?, cli_args)
}

fn run_vader(args: VaderArgs, cli_args: &SaplingArgs, config: &SaplingConfig) -> Result<()> {
    let sentence = args.text.text.as_deref().unwrap_or(sentiment::DEFAULT_SENTENCE);
    let report = sentiment::run(sentence, config)?;
    if args.scores {
        diagnostic(cli_args, &report.scores.to_string())?;
    }
    output_result("Sentiment", &report, cli_args)
}

fn run_reviews(args: ReviewsArgs, cli_args: &SaplingArgs, mut config: SaplingConfig) -> Result<()> {
    if let Some(train_size) = args.train_size {
        config.reviews.train_size = train_size;
    }
    if args.seed.is_some() {
        config.reviews.seed = args.seed;
    }
    if let Some(top) = args.top {
        config.reviews.informative_features = top;
    }

    if cli_args.verbosity() > 1 {
        diagnostic(cli_args, &format!("Loading corpus from: {}", args.corpus.display()))?;
    }
    output_result("Review classifier", &reviews::run(&args.corpus, &config)?, cli_args)
}

fn run_tokens(args: TopArgs, cli_args: &SaplingArgs, mut config: SaplingConfig) -> Result<()> {
    if let Some(top) = args.top {
        config.frequency.top_n = top;
    }
    let text = args.text.text.as_deref().unwrap_or(tokens::DEFAULT_TEXT);
    output_result("Most common words", &tokens::run(text, &config)?, cli_args)
}

fn run_topics(args: TopArgs, cli_args: &SaplingArgs, mut config: SaplingConfig) -> Result<()> {
    if let Some(top) = args.top {
        config.topics.top_n = top;
    }
    let text = args.text.text.as_deref().unwrap_or(topics::DEFAULT_TEXT);
    output_result("Topic words", &topics::run(text, &config)?, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_read_trimmed_line() {
        let mut input = Cursor::new("  Paralysis \nFever\n");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "Paralysis");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "Fever");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "");
    }

    #[test]
    fn test_diagnostics_leave_json_stdout_clean() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        writeln!(
            diagnostic_sink(OutputFormat::Json, &mut stdout, &mut stderr),
            "|--- Symptom 1 <= 0.50"
        )
        .unwrap();
        assert!(stdout.is_empty());
        assert_eq!(stderr, b"|--- Symptom 1 <= 0.50\n");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        writeln!(
            diagnostic_sink(OutputFormat::Human, &mut stdout, &mut stderr),
            "Loading corpus from: /data"
        )
        .unwrap();
        assert_eq!(stdout, b"Loading corpus from: /data\n");
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_execute_with_given_symptoms() {
        let args = SaplingArgs::try_parse_from([
            "sapling",
            "--quiet",
            "bayes",
            "--symptom1",
            "Paralysis",
            "--symptom2",
            "Cough",
        ])
        .unwrap();
        // Unknown symptoms are reported, not returned as errors.
        assert!(execute_command(args, SaplingConfig::default()).is_ok());
    }

    #[test]
    fn test_execute_reviews_missing_corpus() {
        let args = SaplingArgs::try_parse_from([
            "sapling",
            "reviews",
            "--corpus",
            "/nonexistent/corpus",
        ])
        .unwrap();
        assert!(execute_command(args, SaplingConfig::default()).is_err());
    }
}
