use shaleian_gloss::{AnalysisResultVerbose, FormattedWord, Options};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &AnalysisResultVerbose, options: &Options, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Analyzing: \"{}\"", res.text.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if res.tokens.is_empty() {
        println!("{}", palette.dim("  No words found"));
    }

    for (idx, analysis) in res.tokens.iter().enumerate() {
        let fek = if analysis.token.after_fek { palette.dim(" (after fek)") } else { String::new() };
        println!(
            "  {} {}{}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(&analysis.token.input),
            fek
        );

        let words = analysis.formatted(&options.language);
        if words.is_empty() {
            println!("      {}", palette.dim("no readings"));
        }
        for word in &words {
            print_word(word, &palette);
        }
    }

    let details = &res.details;
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Tokenize: {}  │  Search: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.tokenize), ansi::CYAN),
        palette.dim(format!("{:?}", details.search_total)),
    );
    println!(
        "  {}",
        palette.dim(format!(
            "{} abbreviations │ {} digit morphemes",
            details.abbreviations, details.digit_morphemes
        ))
    );
    println!();
}

fn print_word(word: &FormattedWord, palette: &ansi::Palette) {
    let tags = if word.inflection_tags.is_empty() {
        String::new()
    } else {
        format!(" {}", palette.paint(format!("({})", word.inflection_tags.join(" ")), ansi::YELLOW))
    };

    if word.is_compact() {
        let equivalent = &word.equivalents[0];
        println!(
            "      {}{} {} {}",
            palette.paint(&word.name, ansi::GREEN),
            tags,
            palette.paint(equivalent.category.as_deref().unwrap_or_default(), ansi::BLUE),
            equivalent.names
        );
        return;
    }

    println!("      {}{}", palette.paint(&word.name, ansi::GREEN), tags);
    for equivalent in &word.equivalents {
        let category = palette.paint(equivalent.category.as_deref().unwrap_or_default(), ansi::BLUE);
        let frame = equivalent.frame.as_deref().map(|f| format!("({f}) ")).unwrap_or_default();
        let names = format!("{frame}{}", equivalent.names);
        let names = if equivalent.weak {
            palette.dim(names)
        } else if equivalent.generated {
            palette.paint(names, ansi::YELLOW)
        } else {
            names
        };
        println!("        {} {}", category, names);
    }
}
