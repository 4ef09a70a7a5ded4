use crate::engine::{self, FormattedWord, RunMetrics, SearchMetrics, TokenMetrics};
use crate::lexicon::LexicalResource;
use crate::{DEFAULT_LANGUAGE, Dictionary, Reading, Token};
use std::time::{Duration, Instant};

/// Options that affect searching and formatting.
#[derive(Debug, Clone)]
pub struct Options {
    /// Compare names ignoring diacritics (`tîs` finds `tis`).
    pub ignore_diacritic: bool,
    /// Display language of glosses and sorts.
    pub language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { ignore_diacritic: false, language: DEFAULT_LANGUAGE.to_string() }
    }
}

/// One token and its candidate readings.
#[derive(Debug, Clone)]
pub struct TokenAnalysis {
    pub token: Token,
    /// Readings in the order they were found.
    pub readings: Vec<Reading>,
}

impl TokenAnalysis {
    /// Display forms of the readings; readings with no content in `language`
    /// are skipped.
    pub fn formatted(&self, language: &str) -> Vec<FormattedWord> {
        self.readings.iter().filter_map(|reading| engine::format_reading(reading, language)).collect()
    }
}

/// Result from [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The analysed input text.
    pub text: String,
    pub tokens: Vec<TokenAnalysis>,
    /// Total elapsed time spent tokenizing and searching.
    pub elapsed: Duration,
}

/// Additional details returned by [`analyze_verbose`].
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    pub total: Duration,
    pub tokenize: Duration,
    pub search_total: Duration,
    /// Per-token search time and reading count.
    pub search: Vec<TokenMetrics>,
    /// Number of abbreviations the tokenizer knows.
    pub abbreviations: usize,
    /// Number of digit morphemes across the four tables.
    pub digit_morphemes: usize,
}

/// Result from [`analyze_verbose`].
#[derive(Debug, Clone)]
pub struct AnalysisResultVerbose {
    pub text: String,
    pub tokens: Vec<TokenAnalysis>,
    pub elapsed: Duration,
    pub details: AnalysisDetails,
}

/// Tokenize `text` and search every token.
///
/// # Example
/// ```
/// use shaleian_gloss::{Dictionary, Options, analyze, lexicon::Snapshot};
///
/// let snapshot = Snapshot::from_json(r#"{
///     "updatedAt": "2024-11-01T00:00:00+09:00",
///     "words": [{
///         "uniqueName": "lakis",
///         "name": "lakis",
///         "parts": { "ja": { "sort": "動", "equivalents": [{ "category": "動", "names": ["歩く"] }] } }
///     }]
/// }"#).unwrap();
/// let dictionary = Dictionary::from_snapshot(snapshot).unwrap();
///
/// let out = analyze(&dictionary, "lakis.", &Options::default());
/// assert_eq!(out.tokens.len(), 1);
/// assert_eq!(out.tokens[0].token.input, "lakis.");
/// assert_eq!(out.tokens[0].readings.len(), 1);
/// ```
pub fn analyze<R: LexicalResource>(dictionary: &Dictionary<R>, text: &str, options: &Options) -> AnalysisResult {
    let (tokens, metrics) = run_with_metrics(dictionary, text, options);
    AnalysisResult { text: text.to_string(), tokens, elapsed: metrics.total }
}

/// Analyse `text` and return per-phase timings alongside the readings.
pub fn analyze_verbose<R: LexicalResource>(
    dictionary: &Dictionary<R>,
    text: &str,
    options: &Options,
) -> AnalysisResultVerbose {
    let (tokens, metrics) = run_with_metrics(dictionary, text, options);

    let details = AnalysisDetails {
        total: metrics.total,
        tokenize: metrics.tokenize,
        search_total: metrics.search.total,
        search: metrics.search.tokens,
        abbreviations: dictionary.abbreviations().len(),
        digit_morphemes: dictionary.digits().len(),
    };

    AnalysisResultVerbose { text: text.to_string(), tokens, elapsed: metrics.total, details }
}

fn run_with_metrics<R: LexicalResource>(
    dictionary: &Dictionary<R>,
    text: &str,
    options: &Options,
) -> (Vec<TokenAnalysis>, RunMetrics) {
    let start = Instant::now();

    let tokenize_start = Instant::now();
    let tokens = engine::split_to_tokens(dictionary, text);
    let tokenize = tokenize_start.elapsed();

    let search_start = Instant::now();
    let mut search = SearchMetrics::default();
    let analyses: Vec<TokenAnalysis> = tokens
        .into_iter()
        .map(|token| {
            let token_start = Instant::now();
            let readings = engine::search_and_generate(dictionary, &token, options);
            search.tokens.push(TokenMetrics { duration: token_start.elapsed(), readings: readings.len() });
            TokenAnalysis { token, readings }
        })
        .collect();
    search.total = search_start.elapsed();

    let metrics = RunMetrics { total: start.elapsed(), tokenize, search };
    (analyses, metrics)
}
