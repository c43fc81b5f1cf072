use clap::Parser;
use labelscan::engine::{Cli, has_label_extension, is_os_hidden_file, should_include_in_scan};
use labelscan::pipeline::{aggregate, parse_label_file, select_delimiter, split_labels};
use labelscan::report::{
    bucket_distribution, longest_labels, most_frequent, select_features, top_by_label_count,
    top_by_tokens, violations,
};
use labelscan::{AggregateReport, LabelFile, ScanOpts, TokenBucket};
use std::path::{Path, PathBuf};

fn file(name: &str, content: &str) -> LabelFile {
    parse_label_file(name, Path::new(name), content).unwrap()
}

fn report(files: &[(&str, &str)]) -> AggregateReport {
    aggregate(files.iter().map(|(n, c)| file(n, c)))
}

/// `n` labels of `words` words each.
fn labels(n: usize, words: usize) -> String {
    (0..n)
        .map(|i| vec![format!("w{i}"); words].join(" "))
        .collect::<Vec<_>>()
        .join(", ")
}

// --- parsing ---

#[test]
fn test_first_delimiter_in_priority_wins() {
    assert_eq!(select_delimiter("a\nb, c"), Some(','));
    assert_eq!(split_labels("a\nb, c"), vec!["a\nb", "c"]);
    assert_eq!(split_labels("x | y ; z"), vec!["x | y", "z"]);
}

#[test]
fn test_newline_and_tab_delimiters() {
    assert_eq!(split_labels("one\ntwo\n\nthree\n"), vec!["one", "two", "three"]);
    assert_eq!(split_labels("one\ttwo"), vec!["one", "two"]);
}

#[test]
fn test_space_is_not_a_delimiter() {
    assert_eq!(split_labels("a girl with red hair"), vec!["a girl with red hair"]);
}

#[test]
fn test_estimated_tokens_is_words_times_one_and_half() {
    let f = file("a.txt", "long red hair, blue eyes, smile");
    assert_eq!(f.word_count, 6);
    assert_eq!(f.estimated_tokens, f.word_count as f64 * 1.5);
}

// --- path filters ---

#[test]
fn test_extension_case_insensitive() {
    assert!(has_label_extension(Path::new("a.TXT"), "txt"));
    assert!(has_label_extension(Path::new("dir/b.Txt"), ".txt"));
    assert!(!has_label_extension(Path::new("c.txt.bak"), "txt"));
    assert!(!has_label_extension(Path::new("txt"), "txt"));
}

#[test]
fn test_os_hidden_files() {
    assert!(is_os_hidden_file(Path::new("._image.txt")));
    assert!(is_os_hidden_file(Path::new(".DS_Store")));
    assert!(!is_os_hidden_file(Path::new("image.txt")));
}

#[test]
fn test_own_output_files_excluded() {
    let exclude = vec!["feature_prompt.txt".to_string()];
    assert!(!should_include_in_scan(
        Path::new("feature_prompt.txt"),
        "txt",
        &exclude
    ));
    assert!(should_include_in_scan(Path::new("001.txt"), "txt", &exclude));
}

// --- aggregation ---

#[test]
fn test_two_file_example_frequencies() {
    let r = report(&[("a.txt", "cat, dog, cat"), ("b.txt", "dog; bird")]);
    assert_eq!(r.label_frequency.get("cat"), 2);
    assert_eq!(r.label_frequency.get("dog"), 2);
    assert_eq!(r.label_frequency.get("bird"), 1);
    assert_eq!(r.file_stats[0].label_count, 3);
    assert_eq!(r.file_stats[0].word_count, 3);
    assert_eq!(r.file_stats[0].estimated_tokens, 4.5);
    assert_eq!(r.total_labels(), 5);
}

#[test]
fn test_buckets_partition_labeled_files() {
    // 10, 30, 50, 70, 90 words -> 15, 45, 75, 105, 135 tokens
    let contents: Vec<String> = [10, 30, 50, 70, 90].iter().map(|&w| labels(1, w)).collect();
    let names = ["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"];
    let mut files: Vec<LabelFile> = names
        .iter()
        .zip(&contents)
        .map(|(n, c)| file(n, c))
        .collect();
    files.push(file("z.txt", ",,"));
    let r = aggregate(files);

    assert_eq!(r.token_distribution.get(TokenBucket::UpTo20), 1);
    assert_eq!(r.token_distribution.get(TokenBucket::UpTo40), 0);
    assert_eq!(r.token_distribution.get(TokenBucket::UpTo60), 1);
    assert_eq!(r.token_distribution.get(TokenBucket::UpTo77), 1);
    assert_eq!(r.token_distribution.get(TokenBucket::Over77), 2);
    let labeled = r.file_stats.iter().filter(|f| f.label_count > 0).count();
    assert_eq!(r.token_distribution.total(), labeled);
}

#[test]
fn test_shuffled_input_same_totals() {
    let inputs = [
        ("a.txt", "cat, dog, cat"),
        ("b.txt", "dog; bird"),
        ("c.txt", "fish | cat"),
    ];
    let forward = report(&inputs);
    let mut reversed_inputs = inputs;
    reversed_inputs.reverse();
    let backward = report(&reversed_inputs);
    assert_eq!(forward.label_frequency, backward.label_frequency);
    assert_eq!(forward.token_distribution, backward.token_distribution);
}

// --- reporter views ---

#[test]
fn test_top_by_label_count_stable() {
    let r = report(&[("a.txt", "x, y"), ("b.txt", "x, y, z"), ("c.txt", "p, q")]);
    let names: Vec<&str> = top_by_label_count(&r, 10)
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(names, vec!["b.txt", "a.txt", "c.txt"]);
}

#[test]
fn test_top_by_tokens_truncates() {
    let r = report(&[("a.txt", "one"), ("b.txt", "one two three"), ("c.txt", "one two")]);
    let names: Vec<&str> = top_by_tokens(&r, 2)
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(names, vec!["b.txt", "c.txt"]);
}

#[test]
fn test_bucket_distribution_percentages() {
    let r = report(&[("a.txt", "x"), ("b.txt", "y"), ("c.txt", labels(1, 60).as_str())]);
    let rows = bucket_distribution(&r);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].bucket, TokenBucket::UpTo20);
    assert_eq!(rows[0].count, 2);
    assert!((rows[0].percentage - 66.666).abs() < 0.01);
    assert_eq!(rows[4].bucket, TokenBucket::Over77);
    assert_eq!(rows[4].count, 1);
}

#[test]
fn test_longest_labels_top_five_stable() {
    let long = |n: usize, c: char| std::iter::repeat_n(c, n).collect::<String>();
    let content = [
        long(51, 'a'),
        long(60, 'b'),
        long(55, 'c'),
        long(60, 'd'),
        long(52, 'e'),
        long(70, 'f'),
    ]
    .join(", ");
    let r = report(&[("a.txt", content.as_str())]);
    let top: Vec<usize> = longest_labels(&r, 5).iter().map(|l| l.length).collect();
    assert_eq!(top, vec![70, 60, 60, 55, 52]);
    let sixties: Vec<char> = longest_labels(&r, 5)[1..3]
        .iter()
        .map(|l| l.label.chars().next().unwrap())
        .collect();
    assert_eq!(sixties, vec!['b', 'd']);
}

#[test]
fn test_violations_in_scan_order() {
    let big = labels(6, 10); // 60 words -> 90 tokens
    let r = report(&[("z.txt", big.as_str()), ("a.txt", "ok"), ("m.txt", big.as_str())]);
    let names: Vec<&str> = violations(&r).iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["z.txt", "m.txt"]);
}

#[test]
fn test_most_frequent_ties_by_first_insertion() {
    let r = report(&[("a.txt", "b, a"), ("b.txt", "a, b, c")]);
    assert_eq!(most_frequent(&r, 10), vec![("b", 2), ("a", 2), ("c", 1)]);
}

// --- feature prompt ---

#[test]
fn test_feature_never_below_threshold_or_above_top() {
    let r = report(&[
        ("a.txt", "a, b, c, d"),
        ("b.txt", "a, b, c"),
        ("c.txt", "a, b"),
    ]);
    let fp = select_features(&r, 2, 2).unwrap();
    assert!(fp.entries.len() <= 2);
    assert!(fp.entries.iter().all(|(_, n)| *n >= 2));
    assert_eq!(fp.prompt, "a, b");
}

// --- CLI ---

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["labelscan"]).unwrap();
    let mut opts = ScanOpts::default();
    cli.apply_to_opts(&mut opts);
    assert_eq!(cli.dir, PathBuf::from("."));
    assert_eq!(opts.top, 20);
    assert_eq!(opts.min_frequency, 2);
    assert_eq!(opts.limit, 0);
    assert!(!opts.export && !opts.feature);
}

#[test]
fn test_cli_flags() {
    let cli = Cli::try_parse_from([
        "labelscan",
        "--dir",
        "data",
        "--export",
        "--feature",
        "--top",
        "5",
        "--min-freq",
        "3",
        "--limit",
        "7",
    ])
    .unwrap();
    let mut opts = ScanOpts::default();
    cli.apply_to_opts(&mut opts);
    assert_eq!(cli.dir, PathBuf::from("data"));
    assert!(opts.export && opts.feature);
    assert_eq!(opts.top, 5);
    assert_eq!(opts.min_frequency, 3);
    assert_eq!(opts.file_cap(), Some(7));
}
