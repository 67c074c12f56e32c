use histodiff_engine::{CompareOptions, compare, diff_histograms, parse_histogram};
use histodiff_types::{DiffSet, Metric, MetricVector};

fn render(diff: &DiffSet) -> String {
    diff.iter()
        .map(|e| {
            format!(
                "{} {:+} {:+}",
                e.class_name,
                e.delta.instances(),
                e.delta.bytes()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn two_class_inputs() -> (&'static str, &'static str) {
    (
        " 1: 10 100 com.example.Foo\n 2: 3 30 com.example.Bar\n",
        " 1: 15 150 com.example.Foo\n",
    )
}

#[test]
fn test_class_growth() {
    let a = parse_histogram(" 1: 10 100 com.example.Foo");
    let b = parse_histogram(" 1: 15 150 com.example.Foo");

    let diff = diff_histograms(&a, &b);
    insta::assert_snapshot!(render(&diff), @"com.example.Foo +5 +50");
}

#[test]
fn test_class_appears() {
    let a = parse_histogram("");
    let b = parse_histogram(" 1: 3 30 com.example.Bar");

    let diff = diff_histograms(&a, &b);
    insta::assert_snapshot!(render(&diff), @"com.example.Bar +3 +30");
}

#[test]
fn test_class_disappears() {
    let a = parse_histogram(" 1: 3 30 com.example.Bar");
    let b = parse_histogram("");

    let diff = diff_histograms(&a, &b);
    insta::assert_snapshot!(render(&diff), @"com.example.Bar -3 -30");
}

#[test]
fn test_sort_by_instances() {
    let (a, b) = two_class_inputs();
    let options = CompareOptions {
        metric: Metric::Instances,
        threshold: 0,
    };

    let result = compare(&parse_histogram(a), &parse_histogram(b), &options);
    insta::assert_snapshot!(render(&result), @r"
    com.example.Foo +5 +50
    com.example.Bar -3 -30
    ");
}

#[test]
fn test_threshold_on_bytes() {
    let (a, b) = two_class_inputs();
    let options = CompareOptions {
        metric: Metric::Bytes,
        threshold: 40,
    };

    let result = compare(&parse_histogram(a), &parse_histogram(b), &options);
    assert_eq!(result.class_names(), vec!["com.example.Foo"]);
}

#[test]
fn test_summary_line_contributes_nothing() {
    let a = parse_histogram("Total: 4000000 instances\n 1: 10 100 com.example.Foo\n");
    let b = parse_histogram(" 1: 10 100 com.example.Foo\nTotal: 4000000 instances\n");

    assert_eq!(a.len(), 1);
    let diff = diff_histograms(&a, &b);
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.entries()[0].delta, MetricVector::zero());
}

#[test]
fn test_default_options_hide_unchanged_classes() {
    let a = parse_histogram(" 1: 10 100 Same\n 2: 1 16 Gone\n");
    let b = parse_histogram(" 1: 10 100 Same\n 2: 7 112 New\n");

    let result = compare(&a, &b, &CompareOptions::default());
    insta::assert_snapshot!(render(&result), @r"
    New +7 +112
    Gone -1 -16
    ");
}
