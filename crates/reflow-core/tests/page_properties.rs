//! Whole-page properties of classification and normalization.

use reflow_core::*;

fn page() -> PageGeometry {
    PageGeometry::new(300.0, 800.0)
}

fn words<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut words: Vec<String> = texts
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect();
    words.sort();
    words
}

// --- End-to-end scenarios ---

#[test]
fn hyphenated_paragraph_in_body_band() {
    let blocks = vec![
        TextBlock::new(10.0, 250.0, 200.0, 265.0, "Hello wor-"),
        TextBlock::new(10.0, 270.0, 200.0, 285.0, "ld this is"),
        TextBlock::new(10.0, 290.0, 200.0, 305.0, "a test."),
    ];
    let result = classify(&blocks, &page(), 1);
    assert_eq!(result.columns, vec!["Hello world this is a test."]);
    assert!(result.joined_text.is_none());
}

#[test]
fn hyphenated_paragraph_near_top_is_header_text() {
    // Every block ends above 0.15 * 800 = 120, so all three are headers and
    // each is normalized on its own.
    let blocks = vec![
        TextBlock::new(10.0, 50.0, 200.0, 65.0, "Hello wor-"),
        TextBlock::new(10.0, 70.0, 200.0, 85.0, "ld this is"),
        TextBlock::new(10.0, 90.0, 200.0, 105.0, "a test."),
    ];
    let result = classify(&blocks, &page(), 1);
    assert_eq!(result.headers(), ["Hello wor-", "ld this is", "a test."]);
    assert_eq!(result.columns, vec![""]);
}

#[test]
fn dash_only_line_joins_neighbours() {
    assert_eq!(
        normalize("Item one\n\u{2013}\nItem two"),
        "Item one \u{2013} Item two"
    );
}

#[test]
fn bullet_blocks_stay_separate_lines() {
    assert_eq!(
        normalize("\u{2022} first item\nsecond continuation"),
        "\u{2022} first item\nsecond continuation"
    );
}

// --- Band boundaries ---

#[test]
fn header_band_boundary_is_exclusive() {
    let limit = 0.15 * page().height;
    let just_above = TextBlock::new(10.0, 10.0, 100.0, limit - 1e-6, "Above");
    let on_line = TextBlock::new(10.0, 10.0, 100.0, limit, "On");

    let result = classify(&[just_above, on_line], &page(), 1);
    assert_eq!(result.headers(), ["Above"]);
    assert_eq!(result.columns, vec!["On"]);
}

#[test]
fn footer_band_boundary_is_exclusive() {
    let limit = 0.85 * page().height;
    let just_below = TextBlock::new(10.0, limit + 1e-6, 100.0, 790.0, "Below");
    let on_line = TextBlock::new(10.0, limit, 100.0, 790.0, "On");

    let result = classify(&[just_below, on_line], &page(), 1);
    assert_eq!(result.footers(), ["Below"]);
    assert_eq!(result.columns, vec!["On"]);
}

// --- Column determinism ---

#[test]
fn column_assignment_ignores_input_order() {
    let left = TextBlock::new(0.0, 300.0, 100.0, 320.0, "Left.");
    let right = TextBlock::new(150.0, 300.0, 290.0, 320.0, "Right.");
    let far_right = TextBlock::new(299.0, 400.0, 300.0, 420.0, "Edge.");

    let forward = classify(&[left.clone(), right.clone(), far_right.clone()], &page(), 2);
    let backward = classify(&[far_right, right, left], &page(), 2);

    assert_eq!(forward, backward);
    assert_eq!(forward.columns, vec!["Left.", "Right.\nEdge."]);
}

// --- Conservation ---

#[test]
fn word_tokens_are_conserved() {
    let blocks = vec![
        TextBlock::new(10.0, 20.0, 200.0, 40.0, "QUARTERLY REVIEW OF OPERATIONS"),
        TextBlock::new(10.0, 300.0, 140.0, 320.0, "The first column\nkeeps going"),
        TextBlock::new(160.0, 300.0, 290.0, 320.0, "Second column text."),
        TextBlock::new(10.0, 330.0, 140.0, 350.0, "and ends here."),
        TextBlock::new(10.0, 760.0, 200.0, 780.0, "Page 4 of 9"),
        TextBlock::new(10.0, 500.0, 200.0, 520.0, "   "),
    ];
    let input = words(blocks.iter().map(|b| b.text.as_str()));

    let result = classify(&blocks, &page(), 2);
    let output = words(
        result
            .headers()
            .iter()
            .chain(result.footers())
            .chain(&result.columns)
            .map(String::as_str),
    );

    assert_eq!(input, output);
    assert_eq!(result.titles(), ["QUARTERLY REVIEW OF OPERATIONS"]);
}

#[test]
fn every_block_lands_in_exactly_one_band() {
    let blocks: Vec<TextBlock> = (0..16)
        .map(|i| {
            let y0 = i as f64 * 50.0;
            TextBlock::new(10.0, y0, 100.0, y0 + 20.0, format!("Block{i}."))
        })
        .collect();
    let result = classify(&blocks, &page(), 1);

    let body_lines = result.columns[0].lines().count();
    assert_eq!(result.headers().len() + result.footers().len() + body_lines, 16);
}

// --- Convergence ---

#[test]
fn clean_paragraph_is_a_fixed_point() {
    let clean = "The report is final.\nIt was approved on Monday.\n\nNext steps follow.";
    assert_eq!(normalize(clean), clean);
}

#[test]
fn normalization_converges_after_two_passes() {
    let samples = [
        "Intro\n- point one\n\u{2014}\nlater text\n\n\n\u{2022}  bullet\nwrapped",
        "a\t\tb  c\r\nd-\n\ne",
        "-\n\n-\nX",
        "title\n\nlower start\n...dots",
    ];
    for raw in samples {
        let twice = normalize(&normalize(raw));
        assert_eq!(normalize(&twice), twice, "input: {raw:?}");
    }
}
