use autosuggest::{Corpus, EngineOptions, Suggester};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

fn main() -> io::Result<()> {
    let dict_path = env::args().nth(1).unwrap_or_else(|| "words.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let corpus = match Corpus::from_text_file(&dict_path) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Failed to load dictionary: {}", e);
            std::process::exit(1);
        }
    };
    let suggester = Suggester::new(corpus, EngineOptions::default());

    println!(
        "autosuggest REPL - dictionary: {}\ntype text, :q to quit",
        dict_path
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for token in input.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            let suggestions = suggester.suggest(&word);
            if suggestions.is_empty() {
                println!("  {}  ->  (no suggestions)", word);
            } else {
                println!("  {}  ->  {}", word, suggestions.join(", "));
            }
        }
    }
    Ok(())
}
