use anyhow::Result;
use fragment_combiner::{
    combine, CombinerEngine, CombinerPipeline, OutputFormat, SearchConfig, SearchStrategy,
};

fn run_to_string(config: SearchConfig) -> Result<String> {
    let mut out = Vec::new();
    CombinerEngine::new(CombinerPipeline::new(&mut out, config)).run()?;
    Ok(String::from_utf8(out)?)
}

/// Tries to split `word` into distinct fragment positions, 2 to 5 of them.
fn decomposes(word: &str, fragments: &[String], used: &mut Vec<bool>, depth: usize) -> bool {
    if word.is_empty() {
        return (2..=5).contains(&depth);
    }
    if depth == 5 {
        return false;
    }
    for (i, fragment) in fragments.iter().enumerate() {
        if used[i] || fragment.is_empty() || !word.starts_with(fragment.as_str()) {
            continue;
        }
        used[i] = true;
        let ok = decomposes(&word[fragment.len()..], fragments, used, depth + 1);
        used[i] = false;
        if ok {
            return true;
        }
    }
    false
}

#[test]
fn test_reference_instance_end_to_end() -> Result<()> {
    let output = run_to_string(SearchConfig::default())?;
    let words: Vec<&str> = output.lines().collect();

    // 兩個 D 開頭片段 × 其餘 8 片段取 3 的排列
    assert_eq!(words.len(), 672);
    assert_eq!(words.first(), Some(&"DICKDUER"));
    assert_eq!(words.last(), Some(&"DUTASCOV"));
    assert!(words.contains(&"DUCKDIER"));
    assert_eq!(words.iter().filter(|w| w.starts_with("DU")).count(), 336);
    assert!(output.ends_with('\n'));

    Ok(())
}

#[test]
fn test_reference_output_properties() -> Result<()> {
    let config = SearchConfig::default();
    let result = combine(config.clone())?;

    for word in &result.words {
        assert_eq!(word.chars().count(), 8, "{word}");
        assert!(word.starts_with('D'), "{word}");
        assert_eq!(word, &word.to_uppercase());
        let mut used = vec![false; config.fragments.len()];
        assert!(decomposes(word, &config.fragments, &mut used, 0), "{word}");
    }

    let mut sorted = result.words.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, result.words);

    Ok(())
}

#[test]
fn test_runs_are_deterministic() -> Result<()> {
    let first = run_to_string(SearchConfig::default())?;
    let second = run_to_string(SearchConfig::default())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_pruned_strategy_matches_exhaustive() -> Result<()> {
    let exhaustive = combine(SearchConfig::default())?;
    let pruned = combine(SearchConfig {
        strategy: SearchStrategy::Pruned,
        ..SearchConfig::default()
    })?;

    assert_eq!(pruned.words, exhaustive.words);
    assert!(pruned.candidates_examined < exhaustive.candidates_examined);
    // 9P2 + 9P3 + 9P4 + 9P5
    assert_eq!(exhaustive.candidates_examined, 72 + 504 + 3024 + 15120);

    Ok(())
}

#[test]
fn test_short_range_gives_empty_output() -> Result<()> {
    let output = run_to_string(SearchConfig {
        fragments: vec!["DU".into(), "CK".into()],
        min_length: 2,
        max_length: 2,
        ..SearchConfig::default()
    })?;
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_unmatched_anchor_gives_empty_output() -> Result<()> {
    let output = run_to_string(SearchConfig {
        anchor: 'Z',
        ..SearchConfig::default()
    })?;
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_four_fragment_scenario() -> Result<()> {
    let output = run_to_string(SearchConfig {
        fragments: ["DI", "NT", "TA", "OV"].map(String::from).to_vec(),
        ..SearchConfig::default()
    })?;

    assert_eq!(
        output,
        "DINTOVTA\nDINTTAOV\nDIOVNTTA\nDIOVTANT\nDITANTOV\nDITAOVNT\n"
    );
    Ok(())
}

#[test]
fn test_json_and_csv_carry_same_words() -> Result<()> {
    let plain = run_to_string(SearchConfig::default())?;
    let plain_words: Vec<String> = plain.lines().map(String::from).collect();

    let json = run_to_string(SearchConfig {
        output_format: OutputFormat::Json,
        ..SearchConfig::default()
    })?;
    let json_words: Vec<String> = serde_json::from_str(&json)?;
    assert_eq!(json_words, plain_words);

    let csv_text = run_to_string(SearchConfig {
        output_format: OutputFormat::Csv,
        ..SearchConfig::default()
    })?;
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    assert_eq!(reader.headers()?.iter().collect::<Vec<_>>(), vec!["word"]);
    let csv_words = reader
        .records()
        .map(|r| r.map(|record| record[0].to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    assert_eq!(csv_words, plain_words);

    Ok(())
}
